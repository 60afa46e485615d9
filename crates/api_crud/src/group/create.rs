use actix_web::web::{Data, Json};
use scribe_api_common::{
  context::ScribeContext,
  group::{CreateGroup, GroupResponse},
  utils::is_admin,
};
use scribe_db_schema::{
  source::group::{Group, GroupInsertForm},
  traits::Crud,
};
use scribe_db_views::structs::LocalUserView;
use scribe_utils::{
  error::{ScribeErrorType, ScribeResult},
  utils::validation::{is_valid_group_slug, is_valid_group_title},
};

#[tracing::instrument(skip(context))]
pub async fn create_group(
  data: Json<CreateGroup>,
  context: Data<ScribeContext>,
  local_user_view: LocalUserView,
) -> ScribeResult<Json<GroupResponse>> {
  is_admin(&local_user_view)?;
  is_valid_group_title(&data.title)?;
  is_valid_group_slug(&data.slug)?;

  if Group::read_from_slug(&mut context.pool(), &data.slug)
    .await
    .is_ok()
  {
    Err(ScribeErrorType::GroupSlugAlreadyExists)?
  }

  let group_form = GroupInsertForm {
    description: data.description.clone(),
    ..GroupInsertForm::new(data.title.clone(), data.slug.clone())
  };
  let group = Group::create(&mut context.pool(), &group_form).await?;

  Ok(Json(GroupResponse { group }))
}
