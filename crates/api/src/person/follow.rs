use actix_web::web::{Data, Json};
use scribe_api_common::{context::ScribeContext, person::FollowPerson, person::ProfileResponse};
use scribe_db_schema::{
  source::{
    person::Person,
    person_follower::{PersonFollower, PersonFollowerForm},
  },
  traits::{Crud, Followable},
};
use scribe_db_views::structs::{LocalUserView, PersonView};
use scribe_utils::error::{ScribeErrorType, ScribeResult};

#[tracing::instrument(skip(context))]
pub async fn follow_person(
  data: Json<FollowPerson>,
  context: Data<ScribeContext>,
  local_user_view: LocalUserView,
) -> ScribeResult<Json<ProfileResponse>> {
  if data.person_id == local_user_view.person.id {
    Err(ScribeErrorType::CantFollowYourself)?
  }

  // 404 before touching the follow table.
  Person::read(&mut context.pool(), data.person_id).await?;

  let form = PersonFollowerForm::new(data.person_id, local_user_view.person.id);
  if data.follow {
    PersonFollower::follow(&mut context.pool(), &form).await?;
  } else {
    PersonFollower::unfollow(&mut context.pool(), &form).await?;
  }

  let person_view = PersonView::read(&mut context.pool(), data.person_id).await?;

  Ok(Json(ProfileResponse {
    person_view,
    follows: data.follow,
  }))
}
