use actix_web::web::{Data, Json, Query};
use scribe_api_common::{
  context::ScribeContext,
  post::{GetPosts, GetPostsResponse},
};
use scribe_db_schema::{
  source::{group::Group, person::Person},
  ListingType,
};
use scribe_db_views::{post_view::PostQuery, structs::LocalUserView};
use scribe_utils::error::{ScribeErrorType, ScribeResult};

#[tracing::instrument(skip(context))]
pub async fn list_posts(
  data: Query<GetPosts>,
  context: Data<ScribeContext>,
  local_user_view: Option<LocalUserView>,
) -> ScribeResult<Json<GetPostsResponse>> {
  let listing_type = data.type_.unwrap_or_default();
  let my_person_id = local_user_view.map(|u| u.person.id);

  // the personal feed only exists for logged-in people
  if listing_type == ListingType::Subscribed && my_person_id.is_none() {
    Err(ScribeErrorType::NotLoggedIn)?
  }

  // 404 on an unknown group or author rather than an empty listing
  if let Some(group_slug) = &data.group_slug {
    Group::read_from_slug(&mut context.pool(), group_slug).await?;
  }
  let creator_id = match &data.username {
    Some(username) => Some(Person::read_from_name(&mut context.pool(), username).await?.id),
    None => None,
  };

  let posts = PostQuery {
    listing_type: Some(listing_type),
    creator_id,
    group_slug: data.group_slug.clone(),
    my_person_id,
    page: data.page,
    limit: data.limit,
  }
  .list(&mut context.pool())
  .await?;

  Ok(Json(GetPostsResponse { posts }))
}
