use crate::structs::PostView;
use diesel::{
  BoolExpressionMethods,
  ExpressionMethods,
  JoinOnDsl,
  NullableExpressionMethods,
  QueryDsl,
};
use diesel_async::RunQueryDsl;
use scribe_db_schema::{
  newtypes::{PersonId, PostId},
  schema::{group_, person, person_follower, post},
  source::{group::Group, person::Person, post::Post},
  utils::{get_conn, limit_and_offset, DbPool},
  ListingType,
};
use scribe_utils::error::{ScribeErrorExt, ScribeErrorType, ScribeResult};

type PostViewTuple = (Post, Person, Option<Group>);

impl PostView {
  pub async fn read(pool: &mut DbPool<'_>, post_id: PostId) -> ScribeResult<Self> {
    let conn = &mut get_conn(pool).await?;
    let (post, creator, group) = post::table
      .find(post_id)
      .inner_join(person::table)
      .left_join(group_::table)
      .select((
        post::all_columns,
        person::all_columns,
        group_::all_columns.nullable(),
      ))
      .first::<PostViewTuple>(conn)
      .await
      .with_scribe_type(ScribeErrorType::NotFound)?;

    Ok(PostView {
      post,
      creator,
      group,
    })
  }
}

#[derive(Default)]
pub struct PostQuery {
  pub listing_type: Option<ListingType>,
  pub creator_id: Option<PersonId>,
  pub group_slug: Option<String>,
  /// Who is asking; only used for the Subscribed listing.
  pub my_person_id: Option<PersonId>,
  pub page: Option<i64>,
  pub limit: Option<i64>,
}

impl PostQuery {
  pub async fn list(self, pool: &mut DbPool<'_>) -> ScribeResult<Vec<PostView>> {
    let conn = &mut get_conn(pool).await?;

    // The left join below returns no rows for anonymous callers
    let person_id_join = self.my_person_id.unwrap_or(PersonId(-1));

    let mut query = post::table
      .inner_join(person::table)
      .left_join(group_::table)
      .left_join(
        person_follower::table.on(
          post::creator_id
            .eq(person_follower::person_id)
            .and(person_follower::follower_id.eq(person_id_join)),
        ),
      )
      .select((
        post::all_columns,
        person::all_columns,
        group_::all_columns.nullable(),
      ))
      .into_boxed();

    if let Some(listing_type) = self.listing_type {
      if listing_type == ListingType::Subscribed {
        query = query.filter(person_follower::follower_id.nullable().is_not_null());
      }
    }

    if let Some(creator_id) = self.creator_id {
      query = query.filter(post::creator_id.eq(creator_id));
    }

    if let Some(group_slug) = self.group_slug {
      query = query.filter(group_::slug.eq(group_slug));
    }

    let (limit, offset) = limit_and_offset(self.page, self.limit)?;

    let res = query
      .order_by(post::published.desc())
      .then_order_by(post::id.desc())
      .limit(limit)
      .offset(offset)
      .load::<PostViewTuple>(conn)
      .await
      .with_scribe_type(ScribeErrorType::NotFound)?;

    Ok(
      res
        .into_iter()
        .map(|(post, creator, group)| PostView {
          post,
          creator,
          group,
        })
        .collect(),
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;
  use scribe_db_schema::{
    assert_length,
    source::{
      group::{Group, GroupInsertForm},
      person::{Person, PersonInsertForm},
      person_follower::{PersonFollower, PersonFollowerForm},
      post::PostInsertForm,
    },
    traits::{Crud, Followable},
    utils::build_db_pool_for_tests,
  };
  use serial_test::serial;

  struct Data {
    author: Person,
    reader: Person,
    group: Group,
  }

  async fn init_data(pool: &mut DbPool<'_>) -> ScribeResult<Data> {
    let author = Person::create(pool, &PersonInsertForm::test_form("view_author")).await?;
    let reader = Person::create(pool, &PersonInsertForm::test_form("view_reader")).await?;
    let group = Group::create(
      pool,
      &GroupInsertForm::new("Test Group".to_owned(), "test-slug".to_owned()),
    )
    .await?;

    for i in 1..16 {
      let form = PostInsertForm {
        group_id: Some(group.id),
        image_url: Some("https://example.com/small.gif".to_owned()),
        ..PostInsertForm::new(format!("test post {i}"), author.id)
      };
      Post::create(pool, &form).await?;
    }

    Ok(Data {
      author,
      reader,
      group,
    })
  }

  async fn cleanup(data: Data, pool: &mut DbPool<'_>) -> ScribeResult<()> {
    Person::delete(pool, data.author.id).await?;
    Person::delete(pool, data.reader.id).await?;
    Group::delete(pool, data.group.id).await?;
    Ok(())
  }

  #[tokio::test]
  #[serial]
  async fn test_pagination() -> ScribeResult<()> {
    let pool = &build_db_pool_for_tests().await;
    let pool = &mut pool.into();
    let data = init_data(pool).await?;

    // 15 posts land on two pages: 10, then 5
    let first_page = PostQuery {
      page: Some(1),
      ..Default::default()
    }
    .list(pool)
    .await?;
    assert_length!(10, first_page);

    let second_page = PostQuery {
      page: Some(2),
      ..Default::default()
    }
    .list(pool)
    .await?;
    assert_length!(5, second_page);

    // newest first
    let newest = <[_]>::first(&first_page).ok_or(ScribeErrorType::NotFound)?;
    assert_eq!("test post 15", newest.post.body);
    assert_eq!(data.author, newest.creator);
    assert_eq!(Some(data.group.clone()), newest.group);
    assert_eq!(
      Some("https://example.com/small.gif".to_owned()),
      newest.post.image_url
    );

    cleanup(data, pool).await
  }

  #[tokio::test]
  #[serial]
  async fn test_filters() -> ScribeResult<()> {
    let pool = &build_db_pool_for_tests().await;
    let pool = &mut pool.into();
    let data = init_data(pool).await?;

    // a post outside any group, by the reader
    Post::create(pool, &PostInsertForm::new("groupless".into(), data.reader.id)).await?;

    let in_group = PostQuery {
      group_slug: Some("test-slug".to_owned()),
      ..Default::default()
    }
    .list(pool)
    .await?;
    assert_length!(10, in_group);
    assert!(in_group.iter().all(|p| p.group.is_some()));

    let by_reader = PostQuery {
      creator_id: Some(data.reader.id),
      ..Default::default()
    }
    .list(pool)
    .await?;
    assert_length!(1, by_reader);
    let groupless = <[_]>::first(&by_reader).ok_or(ScribeErrorType::NotFound)?;
    assert_eq!("groupless", groupless.post.body);

    cleanup(data, pool).await
  }

  #[tokio::test]
  #[serial]
  async fn test_subscribed_listing() -> ScribeResult<()> {
    let pool = &build_db_pool_for_tests().await;
    let pool = &mut pool.into();
    let data = init_data(pool).await?;

    // before following anyone the feed is empty
    let feed = PostQuery {
      listing_type: Some(ListingType::Subscribed),
      my_person_id: Some(data.reader.id),
      ..Default::default()
    }
    .list(pool)
    .await?;
    assert_length!(0, feed);

    PersonFollower::follow(pool, &PersonFollowerForm::new(data.author.id, data.reader.id)).await?;

    let feed = PostQuery {
      listing_type: Some(ListingType::Subscribed),
      my_person_id: Some(data.reader.id),
      ..Default::default()
    }
    .list(pool)
    .await?;
    assert_length!(10, feed);
    assert!(feed.iter().all(|p| p.creator.id == data.author.id));

    // anonymous callers never see a subscribed feed
    let anon_feed = PostQuery {
      listing_type: Some(ListingType::Subscribed),
      ..Default::default()
    }
    .list(pool)
    .await?;
    assert_length!(0, anon_feed);

    cleanup(data, pool).await
  }
}
