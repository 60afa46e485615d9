use actix_web::{web::{Data, Json}, HttpResponse};
use bcrypt::verify;
use scribe_api_common::{
  context::ScribeContext,
  person::{Login, LoginResponse},
  utils::create_login_cookie,
};
use scribe_db_views::structs::LocalUserView;
use scribe_utils::{
  claims::Claims,
  error::{ScribeErrorType, ScribeResult},
};

#[tracing::instrument(skip(context, data))]
pub async fn login(
  data: Json<Login>,
  context: Data<ScribeContext>,
) -> ScribeResult<HttpResponse> {
  let local_user_view =
    LocalUserView::find_by_name_or_email(&mut context.pool(), &data.username_or_email)
      .await
      .map_err(|_| ScribeErrorType::IncorrectLogin)?;

  let valid = verify(&data.password, &local_user_view.person.password_encrypted).unwrap_or(false);
  if !valid {
    Err(ScribeErrorType::IncorrectLogin)?
  }

  let jwt = Claims::generate(local_user_view.person.id.0)?;

  let mut res = HttpResponse::Ok().json(LoginResponse { jwt: jwt.clone() });
  res.add_cookie(&create_login_cookie(jwt))?;
  Ok(res)
}
