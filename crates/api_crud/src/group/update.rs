use actix_web::web::{Data, Json};
use scribe_api_common::{
  context::ScribeContext,
  group::{EditGroup, GroupResponse},
  utils::is_admin,
};
use scribe_db_schema::{
  source::group::{Group, GroupUpdateForm},
  traits::Crud,
};
use scribe_db_views::structs::LocalUserView;
use scribe_utils::{
  error::{ScribeErrorExt2, ScribeErrorType, ScribeResult},
  utils::validation::{is_valid_group_slug, is_valid_group_title},
};

#[tracing::instrument(skip(context))]
pub async fn update_group(
  data: Json<EditGroup>,
  context: Data<ScribeContext>,
  local_user_view: LocalUserView,
) -> ScribeResult<Json<GroupResponse>> {
  is_admin(&local_user_view)?;

  if let Some(title) = &data.title {
    is_valid_group_title(title)?;
  }
  if let Some(slug) = &data.slug {
    is_valid_group_slug(slug)?;
    // The slug stays unique across groups.
    if let Ok(existing) = Group::read_from_slug(&mut context.pool(), slug).await {
      if existing.id != data.group_id {
        Err(ScribeErrorType::GroupSlugAlreadyExists)?
      }
    }
  }

  let description = if data.remove_description.unwrap_or(false) {
    Some(None)
  } else {
    data.description.clone().map(Some)
  };

  let group_form = GroupUpdateForm {
    title: data.title.clone(),
    slug: data.slug.clone(),
    description,
  };
  let group = Group::update(&mut context.pool(), data.group_id, &group_form)
    .await
    .with_scribe_type(ScribeErrorType::CouldntUpdateGroup)?;

  Ok(Json(GroupResponse { group }))
}
