use serde::{Deserialize, Serialize};
use std::{backtrace::Backtrace, fmt, fmt::Debug};
use strum::{Display, EnumIter};

#[derive(Display, Debug, Serialize, Deserialize, Clone, PartialEq, Eq, EnumIter, Hash)]
#[serde(tag = "error", content = "message", rename_all = "snake_case")]
#[non_exhaustive]
pub enum ScribeErrorType {
  NotLoggedIn,
  NotAnAdmin,
  IncorrectLogin,
  NotFound,
  CantFollowYourself,
  PasswordsDoNotMatch,
  /// Password must be between 10 and 60 characters
  InvalidPassword,
  InvalidUsername,
  InvalidDisplayName,
  InvalidGroupTitle,
  InvalidGroupSlug,
  InvalidPostBody,
  InvalidCommentBody,
  InvalidImageUrl,
  UsernameAlreadyExists,
  GroupSlugAlreadyExists,
  NoPostEditAllowed,
  CouldntCreatePost,
  CouldntUpdatePost,
  CouldntCreateComment,
  CouldntCreateGroup,
  CouldntUpdateGroup,
  CouldntCreateUser,
  CouldntFollowPerson,
  Unknown(String),
}

pub type ScribeResult<T> = Result<T, ScribeError>;

pub struct ScribeError {
  pub error_type: ScribeErrorType,
  pub inner: anyhow::Error,
  pub context: Backtrace,
}

impl<T> From<T> for ScribeError
where
  T: Into<anyhow::Error>,
{
  fn from(t: T) -> Self {
    let cause = t.into();
    let error_type = match cause.downcast_ref::<diesel::result::Error>() {
      Some(&diesel::NotFound) => ScribeErrorType::NotFound,
      _ => ScribeErrorType::Unknown(format!("{}", &cause)),
    };
    ScribeError {
      error_type,
      inner: cause,
      context: Backtrace::capture(),
    }
  }
}

impl Debug for ScribeError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ScribeError")
      .field("message", &self.error_type)
      .field("inner", &self.inner)
      .field("context", &self.context)
      .finish()
  }
}

impl fmt::Display for ScribeError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}: ", &self.error_type)?;
    writeln!(f, "{}", self.inner)?;
    fmt::Display::fmt(&self.context, f)
  }
}

impl actix_web::error::ResponseError for ScribeError {
  fn status_code(&self) -> actix_web::http::StatusCode {
    match self.error_type {
      ScribeErrorType::IncorrectLogin | ScribeErrorType::NotLoggedIn => {
        actix_web::http::StatusCode::UNAUTHORIZED
      }
      ScribeErrorType::NotFound => actix_web::http::StatusCode::NOT_FOUND,
      _ => actix_web::http::StatusCode::BAD_REQUEST,
    }
  }

  fn error_response(&self) -> actix_web::HttpResponse {
    actix_web::HttpResponse::build(self.status_code()).json(&self.error_type)
  }
}

impl From<ScribeErrorType> for ScribeError {
  fn from(error_type: ScribeErrorType) -> Self {
    let inner = anyhow::anyhow!("{}", error_type);
    ScribeError {
      error_type,
      inner,
      context: Backtrace::capture(),
    }
  }
}

pub trait ScribeErrorExt<T, E: Into<anyhow::Error>> {
  fn with_scribe_type(self, error_type: ScribeErrorType) -> ScribeResult<T>;
}

impl<T, E: Into<anyhow::Error>> ScribeErrorExt<T, E> for Result<T, E> {
  fn with_scribe_type(self, error_type: ScribeErrorType) -> ScribeResult<T> {
    self.map_err(|error| ScribeError {
      error_type,
      inner: error.into(),
      context: Backtrace::capture(),
    })
  }
}

pub trait ScribeErrorExt2<T> {
  fn with_scribe_type(self, error_type: ScribeErrorType) -> ScribeResult<T>;
  fn into_anyhow(self) -> Result<T, anyhow::Error>;
}

impl<T> ScribeErrorExt2<T> for ScribeResult<T> {
  fn with_scribe_type(self, error_type: ScribeErrorType) -> ScribeResult<T> {
    self.map_err(|mut e| {
      e.error_type = error_type;
      e
    })
  }

  // can't be an impl From because it would conflict with the broad Into<> impl above
  fn into_anyhow(self) -> Result<T, anyhow::Error> {
    self.map_err(|e| e.inner)
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used)]
  use super::*;
  use actix_web::{body::MessageBody, http::StatusCode, ResponseError};
  use pretty_assertions::assert_eq;

  #[test]
  fn test_status_codes() {
    assert_eq!(
      ScribeError::from(ScribeErrorType::NotFound).status_code(),
      StatusCode::NOT_FOUND
    );
    assert_eq!(
      ScribeError::from(ScribeErrorType::NotLoggedIn).status_code(),
      StatusCode::UNAUTHORIZED
    );
    assert_eq!(
      ScribeError::from(ScribeErrorType::IncorrectLogin).status_code(),
      StatusCode::UNAUTHORIZED
    );
    assert_eq!(
      ScribeError::from(ScribeErrorType::InvalidPostBody).status_code(),
      StatusCode::BAD_REQUEST
    );
  }

  #[test]
  fn test_serializes_error_type() {
    let res = ScribeError::from(ScribeErrorType::CantFollowYourself).error_response();
    let json = String::from_utf8(
      res
        .into_body()
        .try_into_bytes()
        .unwrap_or_default()
        .to_vec(),
    )
    .unwrap();
    assert_eq!(&json, "{\"error\":\"cant_follow_yourself\"}");
  }

  #[test]
  fn test_diesel_not_found_maps_to_not_found() {
    let err = ScribeError::from(diesel::NotFound);
    assert_eq!(err.error_type, ScribeErrorType::NotFound);
  }
}
