use actix_web::{
  web::{Data, Path},
  HttpResponse,
};
use uuid::Uuid;
use workboard_api_common::{context::WorkboardContext, utils::notify_user};
use workboard_db_schema::{
  source::{comment::Comment, job::Job},
  traits::Crud,
};
use workboard_db_views::structs::UserView;
use workboard_utils::error::{WorkboardErrorType, WorkboardResult};

#[tracing::instrument(skip(context))]
pub async fn delete_comment(
  path: Path<Uuid>,
  context: Data<WorkboardContext>,
  user_view: UserView,
) -> WorkboardResult<HttpResponse> {
  let orig_comment = Comment::read_from_uid(&mut context.pool(), path.into_inner()).await?;

  // the author may delete their own comment, admins may delete any
  if user_view.user.id != orig_comment.creator_id && !user_view.user.admin {
    Err(WorkboardErrorType::NoCommentEditAllowed)?
  }

  Comment::soft_delete(&mut context.pool(), orig_comment.id).await?;

  let job = Job::read(&mut context.pool(), orig_comment.job_id).await?;
  notify_user(job.creator_id, &context);

  Ok(HttpResponse::NoContent().finish())
}
