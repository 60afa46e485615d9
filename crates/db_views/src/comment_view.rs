use crate::structs::CommentView;
use diesel::{ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;
use scribe_db_schema::{
  newtypes::PostId,
  schema::{comment, person},
  source::{comment::Comment, person::Person},
  utils::{get_conn, DbPool},
};
use scribe_utils::error::{ScribeErrorExt, ScribeErrorType, ScribeResult};

type CommentViewTuple = (Comment, Person);

impl CommentView {
  /// All comments on a post, newest first. Comment threads are flat, so no
  /// pagination is applied.
  pub async fn for_post(pool: &mut DbPool<'_>, post_id: PostId) -> ScribeResult<Vec<Self>> {
    let conn = &mut get_conn(pool).await?;
    let res = comment::table
      .filter(comment::post_id.eq(post_id))
      .inner_join(person::table)
      .select((comment::all_columns, person::all_columns))
      .order_by(comment::published.desc())
      .then_order_by(comment::id.desc())
      .load::<CommentViewTuple>(conn)
      .await
      .with_scribe_type(ScribeErrorType::NotFound)?;

    Ok(
      res
        .into_iter()
        .map(|(comment, creator)| CommentView { comment, creator })
        .collect(),
    )
  }
}
