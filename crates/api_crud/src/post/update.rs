use actix_web::web::{Data, Json};
use chrono::Utc;
use scribe_api_common::{
  context::ScribeContext,
  post::{EditPost, PostResponse},
  utils::check_post_edit_allowed,
};
use scribe_db_schema::{
  source::{
    group::Group,
    post::{Post, PostUpdateForm},
  },
  traits::Crud,
};
use scribe_db_views::structs::{LocalUserView, PostView};
use scribe_utils::{
  error::ScribeResult,
  utils::validation::{is_valid_image_url, is_valid_post_body},
};

#[tracing::instrument(skip(context))]
pub async fn update_post(
  data: Json<EditPost>,
  context: Data<ScribeContext>,
  local_user_view: LocalUserView,
) -> ScribeResult<Json<PostResponse>> {
  let orig_post = Post::read(&mut context.pool(), data.post_id).await?;
  check_post_edit_allowed(&orig_post, &local_user_view)?;

  if let Some(body) = &data.body {
    is_valid_post_body(body)?;
  }
  if let Some(image_url) = &data.image_url {
    is_valid_image_url(image_url)?;
  }

  let group_id = if data.remove_group.unwrap_or(false) {
    Some(None)
  } else {
    match data.group_id {
      Some(group_id) => {
        Group::read(&mut context.pool(), group_id).await?;
        Some(Some(group_id))
      }
      None => None,
    }
  };

  let update_form = PostUpdateForm {
    body: data.body.as_ref().map(|b| b.trim().to_string()),
    group_id,
    image_url: data.image_url.clone().map(Some),
    updated: Some(Some(Utc::now())),
  };
  let updated_post = Post::update(&mut context.pool(), data.post_id, &update_form).await?;

  let post_view = PostView::read(&mut context.pool(), updated_post.id).await?;
  Ok(Json(PostResponse { post_view }))
}
