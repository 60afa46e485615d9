use actix_web::web::{Data, Json, Query};
use scribe_api_common::{
  context::ScribeContext,
  person::{GetProfile, ProfileResponse},
};
use scribe_db_schema::source::person_follower::PersonFollower;
use scribe_db_views::structs::{LocalUserView, PersonView};
use scribe_utils::error::ScribeResult;

#[tracing::instrument(skip(context))]
pub async fn get_profile(
  data: Query<GetProfile>,
  context: Data<ScribeContext>,
  local_user_view: Option<LocalUserView>,
) -> ScribeResult<Json<ProfileResponse>> {
  let person_view = PersonView::read_from_name(&mut context.pool(), &data.username).await?;

  let follows = match &local_user_view {
    Some(v) => {
      PersonFollower::check_follows(&mut context.pool(), person_view.person.id, v.person.id).await?
    }
    None => false,
  };

  Ok(Json(ProfileResponse {
    person_view,
    follows,
  }))
}
