use actix_web::web::{Data, Json};
use scribe_api_common::{
  comment::{CommentResponse, CreateComment},
  context::ScribeContext,
};
use scribe_db_schema::{
  source::{
    comment::{Comment, CommentInsertForm},
    post::Post,
  },
  traits::Crud,
};
use scribe_db_views::structs::{CommentView, LocalUserView};
use scribe_utils::{error::ScribeResult, utils::validation::is_valid_comment_body};

#[tracing::instrument(skip(context))]
pub async fn create_comment(
  data: Json<CreateComment>,
  context: Data<ScribeContext>,
  local_user_view: LocalUserView,
) -> ScribeResult<Json<CommentResponse>> {
  is_valid_comment_body(&data.body)?;

  let post = Post::read(&mut context.pool(), data.post_id).await?;

  let comment_form = CommentInsertForm::new(
    data.body.trim().to_string(),
    local_user_view.person.id,
    post.id,
  );
  let inserted_comment = Comment::create(&mut context.pool(), &comment_form).await?;

  Ok(Json(CommentResponse {
    comment_view: CommentView {
      comment: inserted_comment,
      creator: local_user_view.person,
    },
  }))
}
