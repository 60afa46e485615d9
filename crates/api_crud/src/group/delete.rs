use actix_web::web::{Data, Json};
use scribe_api_common::{context::ScribeContext, group::DeleteGroup, utils::is_admin, SuccessResponse};
use scribe_db_schema::{source::group::Group, traits::Crud};
use scribe_db_views::structs::LocalUserView;
use scribe_utils::error::ScribeResult;

/// Deleting a group detaches its posts rather than removing them.
#[tracing::instrument(skip(context))]
pub async fn delete_group(
  data: Json<DeleteGroup>,
  context: Data<ScribeContext>,
  local_user_view: LocalUserView,
) -> ScribeResult<Json<SuccessResponse>> {
  is_admin(&local_user_view)?;

  // A missing group is a 404, not a zero-row delete.
  Group::read(&mut context.pool(), data.group_id).await?;
  Group::delete(&mut context.pool(), data.group_id).await?;

  Ok(Json(SuccessResponse::default()))
}
