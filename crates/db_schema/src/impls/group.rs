use crate::{
  newtypes::GroupId,
  schema::group_,
  source::group::{Group, GroupInsertForm, GroupUpdateForm},
  traits::Crud,
  utils::{get_conn, DbPool},
};
use diesel::{dsl::insert_into, ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;
use scribe_utils::error::{ScribeErrorExt, ScribeErrorType, ScribeResult};

impl Crud for Group {
  type InsertForm = GroupInsertForm;
  type UpdateForm = GroupUpdateForm;
  type IdType = GroupId;

  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> ScribeResult<Self> {
    let conn = &mut get_conn(pool).await?;
    insert_into(group_::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
      .with_scribe_type(ScribeErrorType::CouldntCreateGroup)
  }

  async fn read(pool: &mut DbPool<'_>, group_id: GroupId) -> ScribeResult<Self> {
    let conn = &mut get_conn(pool).await?;
    group_::table
      .find(group_id)
      .first(conn)
      .await
      .with_scribe_type(ScribeErrorType::NotFound)
  }

  async fn update(
    pool: &mut DbPool<'_>,
    group_id: GroupId,
    form: &Self::UpdateForm,
  ) -> ScribeResult<Self> {
    let conn = &mut get_conn(pool).await?;
    diesel::update(group_::table.find(group_id))
      .set(form)
      .get_result::<Self>(conn)
      .await
      .with_scribe_type(ScribeErrorType::CouldntUpdateGroup)
  }

  async fn delete(pool: &mut DbPool<'_>, group_id: GroupId) -> ScribeResult<usize> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(group_::table.find(group_id))
      .execute(conn)
      .await
      .with_scribe_type(ScribeErrorType::NotFound)
  }
}

impl Group {
  pub async fn read_from_slug(pool: &mut DbPool<'_>, slug: &str) -> ScribeResult<Self> {
    let conn = &mut get_conn(pool).await?;
    group_::table
      .filter(group_::slug.eq(slug))
      .first(conn)
      .await
      .with_scribe_type(ScribeErrorType::NotFound)
  }

  pub async fn list(pool: &mut DbPool<'_>) -> ScribeResult<Vec<Self>> {
    let conn = &mut get_conn(pool).await?;
    group_::table
      .order_by(group_::title.asc())
      .load::<Self>(conn)
      .await
      .with_scribe_type(ScribeErrorType::NotFound)
  }
}

#[cfg(test)]
mod tests {
  use crate::{
    source::{
      group::{Group, GroupInsertForm, GroupUpdateForm},
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
  async fn test_crud() -> ScribeResult<()> {
    let pool = &build_db_pool_for_tests().await;
    let pool = &mut pool.into();

    let form = GroupInsertForm {
      description: Some("Test Description.".to_owned()),
      ..GroupInsertForm::new("Test Group".to_owned(), "test-slug".to_owned())
    };
    let inserted_group = Group::create(pool, &form).await?;
    assert_eq!("Test Group", inserted_group.title);

    let by_slug = Group::read_from_slug(pool, "test-slug").await?;
    assert_eq!(inserted_group, by_slug);

    let update_form = GroupUpdateForm {
      description: Some(None),
      ..Default::default()
    };
    let updated_group = Group::update(pool, inserted_group.id, &update_form).await?;
    assert_eq!(None, updated_group.description);

    let num_deleted = Group::delete(pool, inserted_group.id).await?;
    assert_eq!(1, num_deleted);

    Ok(())
  }

  #[tokio::test]
  #[serial]
  async fn test_posts_survive_group_deletion() -> ScribeResult<()> {
    let pool = &build_db_pool_for_tests().await;
    let pool = &mut pool.into();

    let author = Person::create(pool, &PersonInsertForm::test_form("group_author")).await?;
    let group = Group::create(
      pool,
      &GroupInsertForm::new("Doomed".to_owned(), "doomed".to_owned()),
    )
    .await?;

    let post_form = PostInsertForm {
      group_id: Some(group.id),
      ..PostInsertForm::new("still here".into(), author.id)
    };
    let post = Post::create(pool, &post_form).await?;
    assert_eq!(Some(group.id), post.group_id);

    Group::delete(pool, group.id).await?;

    let orphaned = Post::read(pool, post.id).await?;
    assert_eq!(None, orphaned.group_id);
    assert_eq!("still here", orphaned.body);

    Person::delete(pool, author.id).await?;
    Ok(())
  }
}
