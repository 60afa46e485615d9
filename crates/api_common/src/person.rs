use scribe_db_schema::newtypes::PersonId;
use scribe_db_views::structs::PersonView;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
/// Register a new account.
pub struct Register {
  pub username: String,
  pub password: String,
  pub password_verify: String,
  pub display_name: Option<String>,
  pub email: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
/// Log in with username or email.
pub struct Login {
  pub username_or_email: String,
  pub password: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoginResponse {
  pub jwt: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
/// Get a profile page by username.
pub struct GetProfile {
  pub username: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProfileResponse {
  pub person_view: PersonView,
  /// Whether the logged-in caller follows this person. Always false for
  /// anonymous callers.
  pub follows: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
/// Follow (or unfollow) an author.
pub struct FollowPerson {
  pub person_id: PersonId,
  pub follow: bool,
}
