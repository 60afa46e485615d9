use crate::{
  newtypes::CommentId,
  schema::comment,
  source::comment::{Comment, CommentInsertForm},
  utils::{get_conn, DbPool},
};
use diesel::{dsl::insert_into, QueryDsl};
use diesel_async::RunQueryDsl;
use scribe_utils::error::{ScribeErrorExt, ScribeErrorType, ScribeResult};

impl Comment {
  pub async fn create(pool: &mut DbPool<'_>, form: &CommentInsertForm) -> ScribeResult<Self> {
    let conn = &mut get_conn(pool).await?;
    insert_into(comment::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
      .with_scribe_type(ScribeErrorType::CouldntCreateComment)
  }

  pub async fn read(pool: &mut DbPool<'_>, comment_id: CommentId) -> ScribeResult<Self> {
    let conn = &mut get_conn(pool).await?;
    comment::table
      .find(comment_id)
      .first(conn)
      .await
      .with_scribe_type(ScribeErrorType::NotFound)
  }
}

#[cfg(test)]
mod tests {
  use crate::{
    source::{
      comment::{Comment, CommentInsertForm},
      person::{Person, PersonInsertForm},
      post::{Post, PostInsertForm},
    },
    traits::Crud,
    utils::build_db_pool_for_tests,
  };
  use pretty_assertions::assert_eq;
  use scribe_utils::error::ScribeResult;
  use serial_test::serial;

  #[tokio::test]
  #[serial]
  async fn test_create_and_cascade() -> ScribeResult<()> {
    let pool = &build_db_pool_for_tests().await;
    let pool = &mut pool.into();

    let author = Person::create(pool, &PersonInsertForm::test_form("comment_author")).await?;
    let post = Post::create(pool, &PostInsertForm::new("commented on".into(), author.id)).await?;

    let form = CommentInsertForm::new("well said".into(), author.id, post.id);
    let inserted_comment = Comment::create(pool, &form).await?;
    assert_eq!("well said", inserted_comment.body);
    assert_eq!(post.id, inserted_comment.post_id);

    // comments go away with their post
    Post::delete(pool, post.id).await?;
    assert!(Comment::read(pool, inserted_comment.id).await.is_err());

    Person::delete(pool, author.id).await?;
    Ok(())
  }
}
