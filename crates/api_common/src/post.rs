use scribe_db_schema::{
  newtypes::{GroupId, PostId},
  ListingType,
};
use scribe_db_views::structs::{CommentView, PersonView, PostView};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
/// Create a post.
pub struct CreatePost {
  pub body: String,
  /// An optional group to publish the post in.
  pub group_id: Option<GroupId>,
  /// An optional attached image.
  pub image_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
/// Get a post by id.
pub struct GetPost {
  pub id: PostId,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
/// Edit a post. Fields left out are unchanged; `group_id: null` cannot be
/// expressed here, clearing the group goes through `remove_group`.
pub struct EditPost {
  pub post_id: PostId,
  pub body: Option<String>,
  pub group_id: Option<GroupId>,
  pub image_url: Option<String>,
  /// Set to true to take the post out of its group.
  pub remove_group: Option<bool>,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
/// List posts, newest first, ten to a page.
pub struct GetPosts {
  pub type_: Option<ListingType>,
  /// Only posts in this group.
  pub group_slug: Option<String>,
  /// Only posts by this author.
  pub username: Option<String>,
  pub page: Option<i64>,
  pub limit: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PostResponse {
  pub post_view: PostView,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
/// The post detail page: the post, its comments (newest first), and the
/// author's profile counts.
pub struct GetPostResponse {
  pub post_view: PostView,
  pub comments: Vec<CommentView>,
  pub author: PersonView,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GetPostsResponse {
  pub posts: Vec<PostView>,
}
