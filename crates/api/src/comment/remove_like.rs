use actix_web::web::{Data, Json, Path};
use uuid::Uuid;
use workboard_api_common::{
  context::WorkboardContext,
  utils::notify_user,
};
use workboard_db_schema::{
  source::comment::{Comment, CommentLike},
  traits::Likeable,
};
use workboard_db_views::structs::{CommentView, UserView};
use workboard_utils::error::WorkboardResult;

#[tracing::instrument(skip(context))]
pub async fn remove_like(
  path: Path<Uuid>,
  context: Data<WorkboardContext>,
  user_view: UserView,
) -> WorkboardResult<Json<CommentView>> {
  let comment_uid = path.into_inner();
  let comment = Comment::read_from_uid(&mut context.pool(), comment_uid).await?;

  // removing a like that was never set is a no-op, not an error
  CommentLike::remove(&mut context.pool(), user_view.user.id, comment.id).await?;

  notify_user(comment.creator_id, &context);

  Ok(Json(
    CommentView::read(&mut context.pool(), comment.id).await?,
  ))
}
