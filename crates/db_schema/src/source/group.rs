use crate::{newtypes::GroupId, schema::group_};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = group_)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// A group / community that posts can optionally belong to.
pub struct Group {
  pub id: GroupId,
  pub title: String,
  /// The unique url path segment for the group.
  pub slug: String,
  pub description: Option<String>,
  pub published: DateTime<Utc>,
}

#[derive(Debug, Clone, derive_new::new, Insertable, AsChangeset)]
#[diesel(table_name = group_)]
pub struct GroupInsertForm {
  pub title: String,
  pub slug: String,
  #[new(default)]
  pub description: Option<String>,
}

#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = group_)]
pub struct GroupUpdateForm {
  pub title: Option<String>,
  pub slug: Option<String>,
  pub description: Option<Option<String>>,
}
