use actix_web::{web::{Data, Json}, HttpResponse};
use bcrypt::{hash, DEFAULT_COST};
use scribe_api_common::{
  context::ScribeContext,
  person::{LoginResponse, Register},
  utils::create_login_cookie,
};
use scribe_db_schema::{
  source::person::{Person, PersonInsertForm},
  traits::Crud,
};
use scribe_utils::{
  claims::Claims,
  error::{ScribeErrorExt2, ScribeErrorType, ScribeResult},
  utils::validation::{is_valid_display_name, is_valid_password, is_valid_username},
};

#[tracing::instrument(skip(context, data))]
pub async fn register(
  data: Json<Register>,
  context: Data<ScribeContext>,
) -> ScribeResult<HttpResponse> {
  is_valid_username(&data.username)?;
  is_valid_password(&data.password)?;
  if let Some(display_name) = &data.display_name {
    is_valid_display_name(display_name)?;
  }
  if data.password != data.password_verify {
    Err(ScribeErrorType::PasswordsDoNotMatch)?
  }

  if Person::read_from_name(&mut context.pool(), &data.username)
    .await
    .is_ok()
  {
    Err(ScribeErrorType::UsernameAlreadyExists)?
  }

  let password_encrypted = hash(&data.password, DEFAULT_COST)?;

  let person_form = PersonInsertForm {
    display_name: data.display_name.clone(),
    email: data.email.clone(),
    ..PersonInsertForm::new(data.username.clone(), password_encrypted)
  };
  let person = Person::create(&mut context.pool(), &person_form)
    .await
    .with_scribe_type(ScribeErrorType::CouldntCreateUser)?;

  let jwt = Claims::generate(person.id.0)?;

  let mut res = HttpResponse::Ok().json(LoginResponse { jwt: jwt.clone() });
  res.add_cookie(&create_login_cookie(jwt))?;
  Ok(res)
}
