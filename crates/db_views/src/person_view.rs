use crate::structs::PersonView;
use scribe_db_schema::{
  newtypes::PersonId,
  source::{person::Person, person_follower::PersonFollower, post::Post},
  traits::Crud,
  utils::DbPool,
};
use scribe_utils::error::ScribeResult;

impl PersonView {
  pub async fn read(pool: &mut DbPool<'_>, person_id: PersonId) -> ScribeResult<Self> {
    let person = Person::read(pool, person_id).await?;
    Self::for_person(pool, person).await
  }

  pub async fn read_from_name(pool: &mut DbPool<'_>, name: &str) -> ScribeResult<Self> {
    let person = Person::read_from_name(pool, name).await?;
    Self::for_person(pool, person).await
  }

  async fn for_person(pool: &mut DbPool<'_>, person: Person) -> ScribeResult<Self> {
    let post_count = Post::count_for_creator(pool, person.id).await?;
    let follower_count = PersonFollower::count_followers(pool, person.id).await?;
    let following_count = PersonFollower::count_following(pool, person.id).await?;
    Ok(PersonView {
      person,
      post_count,
      follower_count,
      following_count,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;
  use scribe_db_schema::{
    source::{
      person::PersonInsertForm,
      person_follower::PersonFollowerForm,
      post::PostInsertForm,
    },
    traits::Followable,
    utils::build_db_pool_for_tests,
  };
  use serial_test::serial;

  #[tokio::test]
  #[serial]
  async fn test_profile_counts() -> ScribeResult<()> {
    let pool = &build_db_pool_for_tests().await;
    let pool = &mut pool.into();

    let author = Person::create(pool, &PersonInsertForm::test_form("counted_author")).await?;
    let fan_one = Person::create(pool, &PersonInsertForm::test_form("fan_one")).await?;
    let fan_two = Person::create(pool, &PersonInsertForm::test_form("fan_two")).await?;

    Post::create(pool, &PostInsertForm::new("one".into(), author.id)).await?;
    Post::create(pool, &PostInsertForm::new("two".into(), author.id)).await?;
    PersonFollower::follow(pool, &PersonFollowerForm::new(author.id, fan_one.id)).await?;
    PersonFollower::follow(pool, &PersonFollowerForm::new(author.id, fan_two.id)).await?;
    PersonFollower::follow(pool, &PersonFollowerForm::new(fan_one.id, author.id)).await?;

    let view = PersonView::read_from_name(pool, "counted_author").await?;
    assert_eq!(2, view.post_count);
    assert_eq!(2, view.follower_count);
    assert_eq!(1, view.following_count);

    for p in [author, fan_one, fan_two] {
      Person::delete(pool, p.id).await?;
    }
    Ok(())
  }
}
