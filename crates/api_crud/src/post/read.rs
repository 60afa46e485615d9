use actix_web::web::{Data, Json, Query};
use scribe_api_common::{
  context::ScribeContext,
  post::{GetPost, GetPostResponse},
};
use scribe_db_views::structs::{CommentView, PersonView, PostView};
use scribe_utils::error::ScribeResult;

#[tracing::instrument(skip(context))]
pub async fn get_post(
  data: Query<GetPost>,
  context: Data<ScribeContext>,
) -> ScribeResult<Json<GetPostResponse>> {
  let post_view = PostView::read(&mut context.pool(), data.id).await?;
  let comments = CommentView::for_post(&mut context.pool(), data.id).await?;
  let author = PersonView::read(&mut context.pool(), post_view.post.creator_id).await?;

  Ok(Json(GetPostResponse {
    post_view,
    comments,
    author,
  }))
}
