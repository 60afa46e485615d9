use actix_web::web::{Data, Json, Query};
use scribe_api_common::{
  context::ScribeContext,
  group::{GetGroup, GroupResponse},
};
use scribe_db_schema::source::group::Group;
use scribe_utils::error::ScribeResult;

#[tracing::instrument(skip(context))]
pub async fn get_group(
  data: Query<GetGroup>,
  context: Data<ScribeContext>,
) -> ScribeResult<Json<GroupResponse>> {
  let group = Group::read_from_slug(&mut context.pool(), &data.slug).await?;

  Ok(Json(GroupResponse { group }))
}
