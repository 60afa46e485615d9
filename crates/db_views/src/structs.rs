use scribe_db_schema::source::{comment::Comment, group::Group, person::Person, post::Post};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
/// A post, with its author and the group it was published in.
pub struct PostView {
  pub post: Post,
  pub creator: Person,
  pub group: Option<Group>,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
/// A comment, with its author.
pub struct CommentView {
  pub comment: Comment,
  pub creator: Person,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
/// A person, with the counts shown on their profile page.
pub struct PersonView {
  pub person: Person,
  pub post_count: i64,
  pub follower_count: i64,
  pub following_count: i64,
}

#[derive(Debug, PartialEq, Eq, Clone)]
/// The currently logged-in person.
pub struct LocalUserView {
  pub person: Person,
}
