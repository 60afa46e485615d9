use scribe_db_schema::{newtypes::GroupId, source::group::Group};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[derive(Debug, Serialize, Deserialize, Clone)]
/// Get a group by its slug.
pub struct GetGroup {
  pub slug: String,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
/// Create a group. Admin only.
pub struct CreateGroup {
  pub title: String,
  pub slug: String,
  pub description: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
/// Edit a group. Admin only. Fields left out are unchanged; clearing the
/// description goes through `remove_description`.
pub struct EditGroup {
  pub group_id: GroupId,
  pub title: Option<String>,
  pub slug: Option<String>,
  pub description: Option<String>,
  /// Set to true to drop the group's description.
  pub remove_description: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
/// Delete a group. Admin only; the group's posts survive, ungrouped.
pub struct DeleteGroup {
  pub group_id: GroupId,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GroupResponse {
  pub group: Group,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ListGroupsResponse {
  pub groups: Vec<Group>,
}
