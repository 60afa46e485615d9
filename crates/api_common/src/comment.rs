use scribe_db_schema::newtypes::PostId;
use scribe_db_views::structs::CommentView;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
/// Create a comment on a post.
pub struct CreateComment {
  pub post_id: PostId,
  pub body: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CommentResponse {
  pub comment_view: CommentView,
}
