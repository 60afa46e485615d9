use crate::{newtypes::PersonId, schema::person};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = person)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// A person. Both the author of content and the account that logs in.
pub struct Person {
  pub id: PersonId,
  /// The unique username.
  pub name: String,
  /// A name shown instead of the username where present.
  pub display_name: Option<String>,
  pub bio: Option<String>,
  #[serde(skip)]
  pub email: Option<String>,
  #[serde(skip)]
  pub password_encrypted: String,
  pub admin: bool,
  pub published: DateTime<Utc>,
}

#[derive(Debug, Clone, derive_new::new, Insertable, AsChangeset)]
#[diesel(table_name = person)]
pub struct PersonInsertForm {
  pub name: String,
  pub password_encrypted: String,
  #[new(default)]
  pub display_name: Option<String>,
  #[new(default)]
  pub bio: Option<String>,
  #[new(default)]
  pub email: Option<String>,
  #[new(default)]
  pub admin: Option<bool>,
}

impl PersonInsertForm {
  pub fn test_form(name: &str) -> Self {
    Self::new(name.to_owned(), "changeme".to_owned())
  }
}

#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = person)]
pub struct PersonUpdateForm {
  pub display_name: Option<Option<String>>,
  pub bio: Option<Option<String>>,
  pub email: Option<Option<String>>,
  pub password_encrypted: Option<String>,
  pub admin: Option<bool>,
}
