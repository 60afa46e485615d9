use crate::{
  newtypes::{GroupId, PersonId, PostId},
  schema::post,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = post)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// A post.
pub struct Post {
  pub id: PostId,
  pub body: String,
  pub creator_id: PersonId,
  /// An optional group the post is published in.
  pub group_id: Option<GroupId>,
  /// An optional attached image.
  pub image_url: Option<String>,
  pub published: DateTime<Utc>,
  pub updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, derive_new::new, Insertable, AsChangeset)]
#[diesel(table_name = post)]
pub struct PostInsertForm {
  pub body: String,
  pub creator_id: PersonId,
  #[new(default)]
  pub group_id: Option<GroupId>,
  #[new(default)]
  pub image_url: Option<String>,
  #[new(default)]
  pub published: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = post)]
pub struct PostUpdateForm {
  pub body: Option<String>,
  pub group_id: Option<Option<GroupId>>,
  pub image_url: Option<Option<String>>,
  pub updated: Option<Option<DateTime<Utc>>>,
}
