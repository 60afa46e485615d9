use crate::{
  newtypes::{PersonId, PostId},
  schema::post,
  source::post::{Post, PostInsertForm, PostUpdateForm},
  traits::Crud,
  utils::{get_conn, DbPool},
};
use diesel::{
  dsl::{count, insert_into},
  ExpressionMethods,
  QueryDsl,
};
use diesel_async::RunQueryDsl;
use scribe_utils::error::{ScribeErrorExt, ScribeErrorType, ScribeResult};

impl Crud for Post {
  type InsertForm = PostInsertForm;
  type UpdateForm = PostUpdateForm;
  type IdType = PostId;

  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> ScribeResult<Self> {
    let conn = &mut get_conn(pool).await?;
    insert_into(post::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
      .with_scribe_type(ScribeErrorType::CouldntCreatePost)
  }

  async fn read(pool: &mut DbPool<'_>, post_id: PostId) -> ScribeResult<Self> {
    let conn = &mut get_conn(pool).await?;
    post::table
      .find(post_id)
      .first(conn)
      .await
      .with_scribe_type(ScribeErrorType::NotFound)
  }

  async fn update(
    pool: &mut DbPool<'_>,
    post_id: PostId,
    form: &Self::UpdateForm,
  ) -> ScribeResult<Self> {
    let conn = &mut get_conn(pool).await?;
    diesel::update(post::table.find(post_id))
      .set(form)
      .get_result::<Self>(conn)
      .await
      .with_scribe_type(ScribeErrorType::CouldntUpdatePost)
  }

  async fn delete(pool: &mut DbPool<'_>, post_id: PostId) -> ScribeResult<usize> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(post::table.find(post_id))
      .execute(conn)
      .await
      .with_scribe_type(ScribeErrorType::NotFound)
  }
}

impl Post {
  pub async fn count_for_creator(
    pool: &mut DbPool<'_>,
    for_creator_id: PersonId,
  ) -> ScribeResult<i64> {
    let conn = &mut get_conn(pool).await?;
    post::table
      .filter(post::creator_id.eq(for_creator_id))
      .select(count(post::id))
      .first(conn)
      .await
      .with_scribe_type(ScribeErrorType::NotFound)
  }
}
