use crate::{
  newtypes::PersonId,
  schema::person_follower,
  source::person_follower::{PersonFollower, PersonFollowerForm},
  traits::Followable,
  utils::{get_conn, DbPool},
};
use diesel::{
  dsl::{count, exists, insert_into},
  select,
  ExpressionMethods,
  QueryDsl,
};
use diesel_async::RunQueryDsl;
use scribe_utils::error::{ScribeErrorExt, ScribeErrorType, ScribeResult};

impl Followable for PersonFollower {
  type Form = PersonFollowerForm;

  async fn follow(pool: &mut DbPool<'_>, form: &PersonFollowerForm) -> ScribeResult<usize> {
    let conn = &mut get_conn(pool).await?;
    insert_into(person_follower::table)
      .values(form)
      .on_conflict((person_follower::person_id, person_follower::follower_id))
      .do_nothing()
      .execute(conn)
      .await
      .with_scribe_type(ScribeErrorType::CouldntFollowPerson)
  }

  async fn unfollow(pool: &mut DbPool<'_>, form: &PersonFollowerForm) -> ScribeResult<usize> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(
      person_follower::table
        .filter(person_follower::person_id.eq(form.person_id))
        .filter(person_follower::follower_id.eq(form.follower_id)),
    )
    .execute(conn)
    .await
    .with_scribe_type(ScribeErrorType::CouldntFollowPerson)
  }
}

impl PersonFollower {
  pub async fn check_follows(
    pool: &mut DbPool<'_>,
    for_person_id: PersonId,
    for_follower_id: PersonId,
  ) -> ScribeResult<bool> {
    let conn = &mut get_conn(pool).await?;
    select(exists(
      person_follower::table
        .filter(person_follower::person_id.eq(for_person_id))
        .filter(person_follower::follower_id.eq(for_follower_id)),
    ))
    .get_result(conn)
    .await
    .with_scribe_type(ScribeErrorType::NotFound)
  }

  /// How many people follow this person.
  pub async fn count_followers(
    pool: &mut DbPool<'_>,
    for_person_id: PersonId,
  ) -> ScribeResult<i64> {
    let conn = &mut get_conn(pool).await?;
    person_follower::table
      .filter(person_follower::person_id.eq(for_person_id))
      .select(count(person_follower::follower_id))
      .first(conn)
      .await
      .with_scribe_type(ScribeErrorType::NotFound)
  }

  /// How many people this person follows.
  pub async fn count_following(
    pool: &mut DbPool<'_>,
    for_follower_id: PersonId,
  ) -> ScribeResult<i64> {
    let conn = &mut get_conn(pool).await?;
    person_follower::table
      .filter(person_follower::follower_id.eq(for_follower_id))
      .select(count(person_follower::person_id))
      .first(conn)
      .await
      .with_scribe_type(ScribeErrorType::NotFound)
  }
}

#[cfg(test)]
mod tests {
  use crate::{
    source::{
      person::{Person, PersonInsertForm},
      person_follower::{PersonFollower, PersonFollowerForm},
    },
    traits::{Crud, Followable},
    utils::build_db_pool_for_tests,
  };
  use pretty_assertions::assert_eq;
  use scribe_utils::error::ScribeResult;
  use serial_test::serial;

  #[tokio::test]
  #[serial]
  async fn test_follow_is_idempotent() -> ScribeResult<()> {
    let pool = &build_db_pool_for_tests().await;
    let pool = &mut pool.into();

    let author = Person::create(pool, &PersonInsertForm::test_form("followed_author")).await?;
    let reader = Person::create(pool, &PersonInsertForm::test_form("eager_reader")).await?;

    let form = PersonFollowerForm::new(author.id, reader.id);
    assert_eq!(1, PersonFollower::follow(pool, &form).await?);
    // second follow hits the conflict target and inserts nothing
    assert_eq!(0, PersonFollower::follow(pool, &form).await?);

    assert!(PersonFollower::check_follows(pool, author.id, reader.id).await?);
    assert_eq!(1, PersonFollower::count_followers(pool, author.id).await?);
    assert_eq!(1, PersonFollower::count_following(pool, reader.id).await?);
    assert_eq!(0, PersonFollower::count_followers(pool, reader.id).await?);

    assert_eq!(1, PersonFollower::unfollow(pool, &form).await?);
    // unfollowing again is a no-op, not an error
    assert_eq!(0, PersonFollower::unfollow(pool, &form).await?);
    assert!(!PersonFollower::check_follows(pool, author.id, reader.id).await?);

    Person::delete(pool, author.id).await?;
    Person::delete(pool, reader.id).await?;
    Ok(())
  }
}
