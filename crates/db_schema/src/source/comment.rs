use crate::{
  newtypes::{CommentId, PersonId, PostId},
  schema::comment,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = comment)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// A comment on a post.
pub struct Comment {
  pub id: CommentId,
  pub body: String,
  pub creator_id: PersonId,
  pub post_id: PostId,
  pub published: DateTime<Utc>,
}

#[derive(Debug, Clone, derive_new::new, Insertable, AsChangeset)]
#[diesel(table_name = comment)]
pub struct CommentInsertForm {
  pub body: String,
  pub creator_id: PersonId,
  pub post_id: PostId,
}
