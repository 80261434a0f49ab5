use actix_web::web::{Data, Json, Path};
use uuid::Uuid;
use workboard_api_common::{
  context::WorkboardContext,
  utils::notify_user,
};
use workboard_db_schema::{
  source::comment::{Comment, CommentLike, CommentLikeForm},
  traits::Likeable,
};
use workboard_db_views::structs::{CommentView, UserView};
use workboard_utils::error::{WorkboardErrorExt, WorkboardErrorType, WorkboardResult};

#[tracing::instrument(skip(context))]
pub async fn add_like(
  path: Path<Uuid>,
  context: Data<WorkboardContext>,
  user_view: UserView,
) -> WorkboardResult<Json<CommentView>> {
  let comment_uid = path.into_inner();
  let comment = Comment::read_from_uid(&mut context.pool(), comment_uid).await?;

  // liking twice keeps a single entry
  let like_form = CommentLikeForm::new(user_view.user.id, comment.id);
  CommentLike::like(&mut context.pool(), &like_form)
    .await
    .with_workboard_type(WorkboardErrorType::CouldntLikeComment)?;

  notify_user(comment.creator_id, &context);

  Ok(Json(
    CommentView::read(&mut context.pool(), comment.id).await?,
  ))
}
