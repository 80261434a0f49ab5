use actix_web::web::{Data, Json, Path};
use uuid::Uuid;
use workboard_api_common::context::WorkboardContext;
use workboard_db_schema::source::job::Job;
use workboard_db_views::structs::{CommentView, UserView};
use workboard_utils::error::WorkboardResult;

/// All live comments of a job, oldest first, as a plain array.
#[tracing::instrument(skip(context))]
pub async fn list_comments(
  path: Path<Uuid>,
  context: Data<WorkboardContext>,
  _user_view: UserView,
) -> WorkboardResult<Json<Vec<CommentView>>> {
  let job = Job::read_from_uid(&mut context.pool(), path.into_inner()).await?;
  Ok(Json(
    CommentView::for_job(&mut context.pool(), job.id).await?,
  ))
}
