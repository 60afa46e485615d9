use crate::structs::LocalUserView;
use actix_web::{dev::Payload, FromRequest, HttpMessage, HttpRequest};
use scribe_db_schema::{
  newtypes::PersonId,
  source::person::Person,
  traits::Crud,
  utils::DbPool,
};
use scribe_utils::error::{ScribeError, ScribeErrorType, ScribeResult};
use std::future::{ready, Ready};

impl LocalUserView {
  pub async fn read(pool: &mut DbPool<'_>, person_id: PersonId) -> ScribeResult<Self> {
    let person = Person::read(pool, person_id).await?;
    Ok(LocalUserView { person })
  }

  pub async fn find_by_name_or_email(
    pool: &mut DbPool<'_>,
    name_or_email: &str,
  ) -> ScribeResult<Self> {
    let person = Person::find_by_name_or_email(pool, name_or_email).await?;
    Ok(LocalUserView { person })
  }
}

/// The session middleware stores the logged-in user in the request
/// extensions, so handlers can just take `LocalUserView` as a parameter.
impl FromRequest for LocalUserView {
  type Error = ScribeError;
  type Future = Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
    ready(match req.extensions().get::<LocalUserView>() {
      Some(c) => Ok(c.clone()),
      None => Err(ScribeErrorType::NotLoggedIn.into()),
    })
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::expect_used)]

  use super::*;
  use actix_web::test::TestRequest;
  use chrono::Utc;
  use pretty_assertions::assert_eq;

  fn test_view() -> LocalUserView {
    LocalUserView {
      person: Person {
        id: PersonId(1),
        name: "logged_in".into(),
        display_name: None,
        bio: None,
        email: None,
        password_encrypted: String::new(),
        admin: false,
        published: Utc::now(),
      },
    }
  }

  #[tokio::test]
  async fn test_anonymous_request_is_not_logged_in() {
    let req = TestRequest::default().to_http_request();
    let res = LocalUserView::from_request(&req, &mut Payload::None).await;
    let err = res.expect_err("extractor should reject a session-less request");
    assert_eq!(ScribeErrorType::NotLoggedIn, err.error_type);
  }

  #[tokio::test]
  async fn test_extracts_user_from_extensions() -> ScribeResult<()> {
    let req = TestRequest::default().to_http_request();
    req.extensions_mut().insert(test_view());

    let extracted = LocalUserView::from_request(&req, &mut Payload::None).await?;
    assert_eq!(test_view().person.name, extracted.person.name);
    Ok(())
  }
}
