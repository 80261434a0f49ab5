use actix_web::web::{Data, Json, Path};
use uuid::Uuid;
use workboard_api_common::context::WorkboardContext;
use workboard_db_schema::source::comment::Comment;
use workboard_db_views::structs::{CommentView, UserView};
use workboard_utils::error::WorkboardResult;

#[tracing::instrument(skip(context))]
pub async fn get_comment(
  path: Path<Uuid>,
  context: Data<WorkboardContext>,
  _user_view: UserView,
) -> WorkboardResult<Json<CommentView>> {
  let comment = Comment::read_from_uid(&mut context.pool(), path.into_inner()).await?;
  Ok(Json(
    CommentView::read(&mut context.pool(), comment.id).await?,
  ))
}
