use crate::error::{ScribeErrorType, ScribeResult};
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

const POST_BODY_MAX_LENGTH: usize = 10000;
const COMMENT_BODY_MAX_LENGTH: usize = 10000;
const USERNAME_MIN_LENGTH: usize = 3;
const USERNAME_MAX_LENGTH: usize = 30;
const DISPLAY_NAME_MAX_LENGTH: usize = 50;
const GROUP_TITLE_MAX_LENGTH: usize = 200;
const GROUP_SLUG_MAX_LENGTH: usize = 50;
pub const PASSWORD_MIN_LENGTH: usize = 10;
pub const PASSWORD_MAX_LENGTH: usize = 60;

#[allow(clippy::expect_used)]
static VALID_USERNAME_REGEX: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_]+$").expect("compile regex"));

#[allow(clippy::expect_used)]
static VALID_GROUP_SLUG_REGEX: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[a-z0-9_-]+$").expect("compile regex"));

fn min_length_check(item: &str, min_length: usize, error_type: ScribeErrorType) -> ScribeResult<()> {
  if item.chars().count() < min_length {
    Err(error_type.into())
  } else {
    Ok(())
  }
}

fn max_length_check(item: &str, max_length: usize, error_type: ScribeErrorType) -> ScribeResult<()> {
  if item.chars().count() > max_length {
    Err(error_type.into())
  } else {
    Ok(())
  }
}

pub fn is_valid_username(name: &str) -> ScribeResult<()> {
  min_length_check(name, USERNAME_MIN_LENGTH, ScribeErrorType::InvalidUsername)?;
  max_length_check(name, USERNAME_MAX_LENGTH, ScribeErrorType::InvalidUsername)?;
  if VALID_USERNAME_REGEX.is_match(name) {
    Ok(())
  } else {
    Err(ScribeErrorType::InvalidUsername.into())
  }
}

pub fn is_valid_display_name(name: &str) -> ScribeResult<()> {
  if name.trim() != name {
    return Err(ScribeErrorType::InvalidDisplayName.into());
  }
  max_length_check(
    name,
    DISPLAY_NAME_MAX_LENGTH,
    ScribeErrorType::InvalidDisplayName,
  )
}

pub fn is_valid_password(password: &str) -> ScribeResult<()> {
  min_length_check(password, PASSWORD_MIN_LENGTH, ScribeErrorType::InvalidPassword)?;
  max_length_check(password, PASSWORD_MAX_LENGTH, ScribeErrorType::InvalidPassword)
}

pub fn is_valid_post_body(body: &str) -> ScribeResult<()> {
  min_length_check(body.trim(), 1, ScribeErrorType::InvalidPostBody)?;
  max_length_check(body, POST_BODY_MAX_LENGTH, ScribeErrorType::InvalidPostBody)
}

pub fn is_valid_comment_body(body: &str) -> ScribeResult<()> {
  min_length_check(body.trim(), 1, ScribeErrorType::InvalidCommentBody)?;
  max_length_check(
    body,
    COMMENT_BODY_MAX_LENGTH,
    ScribeErrorType::InvalidCommentBody,
  )
}

pub fn is_valid_group_title(title: &str) -> ScribeResult<()> {
  min_length_check(title.trim(), 1, ScribeErrorType::InvalidGroupTitle)?;
  max_length_check(title, GROUP_TITLE_MAX_LENGTH, ScribeErrorType::InvalidGroupTitle)
}

pub fn is_valid_group_slug(slug: &str) -> ScribeResult<()> {
  min_length_check(slug, 1, ScribeErrorType::InvalidGroupSlug)?;
  max_length_check(slug, GROUP_SLUG_MAX_LENGTH, ScribeErrorType::InvalidGroupSlug)?;
  if VALID_GROUP_SLUG_REGEX.is_match(slug) {
    Ok(())
  } else {
    Err(ScribeErrorType::InvalidGroupSlug.into())
  }
}

pub fn is_valid_image_url(url: &str) -> ScribeResult<()> {
  let parsed = Url::parse(url).map_err(|_| ScribeErrorType::InvalidImageUrl)?;
  if matches!(parsed.scheme(), "http" | "https") {
    Ok(())
  } else {
    Err(ScribeErrorType::InvalidImageUrl.into())
  }
}
