use actix_web::web::{Data, Json};
use scribe_api_common::{context::ScribeContext, group::ListGroupsResponse};
use scribe_db_schema::source::group::Group;
use scribe_utils::error::ScribeResult;

#[tracing::instrument(skip(context))]
pub async fn list_groups(context: Data<ScribeContext>) -> ScribeResult<Json<ListGroupsResponse>> {
  let groups = Group::list(&mut context.pool()).await?;

  Ok(Json(ListGroupsResponse { groups }))
}
