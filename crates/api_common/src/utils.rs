use actix_web::cookie::{Cookie, SameSite};
use scribe_db_schema::source::post::Post;
use scribe_db_views::structs::LocalUserView;
use scribe_utils::error::{ScribeErrorType, ScribeResult};

pub static AUTH_COOKIE_NAME: &str = "auth";

pub fn is_admin(local_user_view: &LocalUserView) -> ScribeResult<()> {
  if !local_user_view.person.admin {
    Err(ScribeErrorType::NotAnAdmin.into())
  } else {
    Ok(())
  }
}

/// Only the author may edit a post.
pub fn check_post_edit_allowed(post: &Post, local_user_view: &LocalUserView) -> ScribeResult<()> {
  if post.creator_id != local_user_view.person.id {
    Err(ScribeErrorType::NoPostEditAllowed.into())
  } else {
    Ok(())
  }
}

pub fn create_login_cookie(jwt: String) -> Cookie<'static> {
  let mut cookie = Cookie::new(AUTH_COOKIE_NAME, jwt);
  cookie.set_secure(true);
  cookie.set_same_site(SameSite::Strict);
  cookie.set_http_only(true);
  cookie
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::Utc;
  use scribe_db_schema::{
    newtypes::{PersonId, PostId},
    source::person::Person,
  };

  fn test_person(id: i32, admin: bool) -> Person {
    Person {
      id: PersonId(id),
      name: format!("person_{id}"),
      display_name: None,
      bio: None,
      email: None,
      password_encrypted: String::new(),
      admin,
      published: Utc::now(),
    }
  }

  #[test]
  fn test_is_admin() {
    let admin = LocalUserView {
      person: test_person(1, true),
    };
    let pleb = LocalUserView {
      person: test_person(2, false),
    };
    assert!(is_admin(&admin).is_ok());
    assert!(is_admin(&pleb).is_err());
  }

  #[test]
  fn test_check_post_edit_allowed() {
    let author = LocalUserView {
      person: test_person(1, false),
    };
    let other = LocalUserView {
      person: test_person(2, false),
    };
    let post = Post {
      id: PostId(1),
      body: "mine".into(),
      creator_id: PersonId(1),
      group_id: None,
      image_url: None,
      published: Utc::now(),
      updated: None,
    };
    assert!(check_post_edit_allowed(&post, &author).is_ok());
    assert!(check_post_edit_allowed(&post, &other).is_err());
  }
}
