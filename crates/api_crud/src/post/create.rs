use actix_web::web::{Data, Json};
use scribe_api_common::{
  context::ScribeContext,
  post::{CreatePost, PostResponse},
};
use scribe_db_schema::{
  source::{group::Group, post::{Post, PostInsertForm}},
  traits::Crud,
};
use scribe_db_views::structs::{LocalUserView, PostView};
use scribe_utils::{
  error::ScribeResult,
  utils::validation::{is_valid_image_url, is_valid_post_body},
};

#[tracing::instrument(skip(context))]
pub async fn create_post(
  data: Json<CreatePost>,
  context: Data<ScribeContext>,
  local_user_view: LocalUserView,
) -> ScribeResult<Json<PostResponse>> {
  is_valid_post_body(&data.body)?;
  if let Some(image_url) = &data.image_url {
    is_valid_image_url(image_url)?;
  }

  // 404 on a dangling group id rather than a constraint violation
  if let Some(group_id) = data.group_id {
    Group::read(&mut context.pool(), group_id).await?;
  }

  let post_form = PostInsertForm {
    group_id: data.group_id,
    image_url: data.image_url.clone(),
    ..PostInsertForm::new(data.body.trim().to_string(), local_user_view.person.id)
  };
  let inserted_post = Post::create(&mut context.pool(), &post_form).await?;

  let post_view = PostView::read(&mut context.pool(), inserted_post.id).await?;
  Ok(Json(PostResponse { post_view }))
}
