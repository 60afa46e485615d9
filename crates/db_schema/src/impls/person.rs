use crate::{
  newtypes::PersonId,
  schema::person,
  source::person::{Person, PersonInsertForm, PersonUpdateForm},
  traits::Crud,
  utils::{get_conn, DbPool},
};
use diesel::{dsl::insert_into, ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;
use scribe_utils::error::{ScribeErrorExt, ScribeErrorType, ScribeResult};

impl Crud for Person {
  type InsertForm = PersonInsertForm;
  type UpdateForm = PersonUpdateForm;
  type IdType = PersonId;

  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> ScribeResult<Self> {
    let conn = &mut get_conn(pool).await?;
    insert_into(person::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
      .with_scribe_type(ScribeErrorType::CouldntCreateUser)
  }

  async fn read(pool: &mut DbPool<'_>, person_id: PersonId) -> ScribeResult<Self> {
    let conn = &mut get_conn(pool).await?;
    person::table
      .find(person_id)
      .first(conn)
      .await
      .with_scribe_type(ScribeErrorType::NotFound)
  }

  async fn update(
    pool: &mut DbPool<'_>,
    person_id: PersonId,
    form: &Self::UpdateForm,
  ) -> ScribeResult<Self> {
    let conn = &mut get_conn(pool).await?;
    diesel::update(person::table.find(person_id))
      .set(form)
      .get_result::<Self>(conn)
      .await
      .with_scribe_type(ScribeErrorType::NotFound)
  }

  async fn delete(pool: &mut DbPool<'_>, person_id: PersonId) -> ScribeResult<usize> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(person::table.find(person_id))
      .execute(conn)
      .await
      .with_scribe_type(ScribeErrorType::NotFound)
  }
}

impl Person {
  pub async fn read_from_name(pool: &mut DbPool<'_>, from_name: &str) -> ScribeResult<Self> {
    let conn = &mut get_conn(pool).await?;
    person::table
      .filter(person::name.eq(from_name))
      .first(conn)
      .await
      .with_scribe_type(ScribeErrorType::NotFound)
  }

  pub async fn find_by_name_or_email(
    pool: &mut DbPool<'_>,
    name_or_email: &str,
  ) -> ScribeResult<Self> {
    use diesel::BoolExpressionMethods;
    let conn = &mut get_conn(pool).await?;
    person::table
      .filter(
        person::name
          .eq(name_or_email)
          .or(person::email.eq(name_or_email)),
      )
      .first(conn)
      .await
      .with_scribe_type(ScribeErrorType::IncorrectLogin)
  }
}

#[cfg(test)]
mod tests {
  use crate::{
    source::{
      comment::{Comment, CommentInsertForm},
      person::{Person, PersonInsertForm, PersonUpdateForm},
      person_follower::{PersonFollower, PersonFollowerForm},
      post::{Post, PostInsertForm},
    },
    traits::{Crud, Followable},
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

    let form = PersonInsertForm::test_form("holly");
    let inserted_person = Person::create(pool, &form).await?;

    let read_person = Person::read(pool, inserted_person.id).await?;
    assert_eq!(inserted_person, read_person);
    assert_eq!("holly", read_person.name);
    assert!(!read_person.admin);

    let update_form = PersonUpdateForm {
      display_name: Some(Some("Holly".to_owned())),
      ..Default::default()
    };
    let updated_person = Person::update(pool, inserted_person.id, &update_form).await?;
    assert_eq!(Some("Holly".to_owned()), updated_person.display_name);

    let by_name = Person::read_from_name(pool, "holly").await?;
    assert_eq!(inserted_person.id, by_name.id);

    let num_deleted = Person::delete(pool, inserted_person.id).await?;
    assert_eq!(1, num_deleted);
    assert!(Person::read(pool, inserted_person.id).await.is_err());

    Ok(())
  }

  #[tokio::test]
  #[serial]
  async fn test_delete_cascades_to_content() -> ScribeResult<()> {
    let pool = &build_db_pool_for_tests().await;
    let pool = &mut pool.into();

    let author = Person::create(pool, &PersonInsertForm::test_form("cascade_author")).await?;
    let reader = Person::create(pool, &PersonInsertForm::test_form("cascade_reader")).await?;

    let post = Post::create(pool, &PostInsertForm::new("a post".into(), author.id)).await?;
    let comment = Comment::create(
      pool,
      &CommentInsertForm::new("a comment".into(), reader.id, post.id),
    )
    .await?;

    let follow_form = PersonFollowerForm::new(author.id, reader.id);
    PersonFollower::follow(pool, &follow_form).await?;

    // deleting the author removes their posts, comments on them, and follows of them
    Person::delete(pool, author.id).await?;
    assert!(Post::read(pool, post.id).await.is_err());
    assert!(Comment::read(pool, comment.id).await.is_err());
    assert_eq!(0, PersonFollower::count_following(pool, reader.id).await?);

    Person::delete(pool, reader.id).await?;
    Ok(())
  }
}
