use actix_web::{
  body::MessageBody,
  cookie::SameSite,
  dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
  http::header::{HeaderValue, CACHE_CONTROL},
  Error,
  HttpMessage,
};
use core::future::Ready;
use futures_util::future::LocalBoxFuture;
use scribe_api_common::{context::ScribeContext, utils::AUTH_COOKIE_NAME};
use scribe_db_schema::newtypes::PersonId;
use scribe_db_views::structs::LocalUserView;
use scribe_utils::{
  claims::Claims,
  error::{ScribeError, ScribeErrorType, ScribeResult},
  CACHE_CONTROL_ANON,
  CACHE_CONTROL_AUTHED,
};
use std::{future::ready, rc::Rc};

#[derive(Clone)]
pub struct SessionMiddleware {
  context: ScribeContext,
}

impl SessionMiddleware {
  pub fn new(context: ScribeContext) -> Self {
    SessionMiddleware { context }
  }
}

impl<S, B> Transform<S, ServiceRequest> for SessionMiddleware
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: MessageBody + 'static,
{
  type Response = ServiceResponse<B>;
  type Error = Error;
  type Transform = SessionService<S>;
  type InitError = ();
  type Future = Ready<Result<Self::Transform, Self::InitError>>;

  fn new_transform(&self, service: S) -> Self::Future {
    ready(Ok(SessionService {
      service: Rc::new(service),
      context: self.context.clone(),
    }))
  }
}

pub struct SessionService<S> {
  service: Rc<S>,
  context: ScribeContext,
}

impl<S, B> Service<ServiceRequest> for SessionService<S>
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<B>;
  type Error = Error;
  type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

  forward_ready!(service);

  fn call(&self, req: ServiceRequest) -> Self::Future {
    let svc = self.service.clone();
    let context = self.context.clone();

    Box::pin(async move {
      // Try reading the jwt from the auth header first
      let auth_header = req
        .headers()
        .get(AUTH_COOKIE_NAME)
        .and_then(|h| h.to_str().ok());
      let jwt = if let Some(a) = auth_header {
        Some(a.to_string())
      } else {
        let auth_cookie = req.cookie(AUTH_COOKIE_NAME);
        if let Some(a) = &auth_cookie {
          // only accept the cookie if it was set with our hardened flags
          let secure = a.secure().unwrap_or_default();
          let http_only = a.http_only().unwrap_or_default();
          let same_site = a.same_site();
          if !secure || !http_only || same_site != Some(SameSite::Strict) {
            return Err(ScribeError::from(ScribeErrorType::NotLoggedIn).into());
          }
        }
        auth_cookie.map(|c| c.value().to_string())
      };

      if let Some(jwt) = &jwt {
        // An invalid jwt is ignored here, so anonymous reads still work.
        // Endpoints that need auth fail later with not_logged_in.
        let local_user_view = local_user_view_from_jwt(jwt, &context).await.ok();
        if let Some(local_user_view) = local_user_view {
          req.extensions_mut().insert(local_user_view);
        }
      }

      let mut res = svc.call(req).await?;

      let cache_value = if jwt.is_some() {
        CACHE_CONTROL_AUTHED
      } else {
        CACHE_CONTROL_ANON
      };
      res
        .headers_mut()
        .insert(CACHE_CONTROL, HeaderValue::from_static(cache_value));
      Ok(res)
    })
  }
}

#[tracing::instrument(skip_all)]
async fn local_user_view_from_jwt(
  jwt: &str,
  context: &ScribeContext,
) -> ScribeResult<LocalUserView> {
  let claims = Claims::decode(jwt)?;
  let person_id = PersonId(claims.sub);
  let local_user_view = LocalUserView::read(&mut context.pool(), person_id).await?;
  Ok(local_user_view)
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;
  use scribe_db_schema::{
    source::person::{Person, PersonInsertForm},
    traits::Crud,
    utils::build_db_pool_for_tests,
  };
  use serial_test::serial;

  #[tokio::test]
  #[serial]
  async fn test_valid_jwt_resolves_to_user() -> ScribeResult<()> {
    let actual_pool = build_db_pool_for_tests().await;
    let context = ScribeContext::create(actual_pool.clone());
    let pool = &mut (&actual_pool).into();

    let person = Person::create(pool, &PersonInsertForm::test_form("session_person")).await?;

    let jwt = Claims::generate(person.id.0)?;
    let local_user_view = local_user_view_from_jwt(&jwt, &context).await?;
    assert_eq!(person.id, local_user_view.person.id);
    assert_eq!("session_person", local_user_view.person.name);

    // garbage and orphaned tokens both fail, so the middleware leaves the
    // request anonymous
    assert!(local_user_view_from_jwt("not.a.jwt", &context).await.is_err());
    Person::delete(pool, person.id).await?;
    assert!(local_user_view_from_jwt(&jwt, &context).await.is_err());

    Ok(())
  }
}
