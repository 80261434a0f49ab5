use actix_web::web::{Data, Json, Path};
use uuid::Uuid;
use workboard_api_common::{comment::EditComment, context::WorkboardContext, utils::notify_user};
use workboard_db_schema::{
  source::{
    comment::{Comment, CommentUpdateForm},
    job::Job,
  },
  traits::Crud,
  utils::naive_now,
};
use workboard_db_views::structs::{CommentView, UserView};
use workboard_utils::error::{WorkboardErrorExt, WorkboardErrorType, WorkboardResult};

#[tracing::instrument(skip(context))]
pub async fn update_comment(
  path: Path<Uuid>,
  data: Json<EditComment>,
  context: Data<WorkboardContext>,
  user_view: UserView,
) -> WorkboardResult<Json<CommentView>> {
  let orig_comment = Comment::read_from_uid(&mut context.pool(), path.into_inner()).await?;

  // only the author may edit
  if user_view.user.id != orig_comment.creator_id {
    Err(WorkboardErrorType::NoCommentEditAllowed)?
  }

  let comment_form = CommentUpdateForm {
    content: data.content.clone(),
    updated: Some(Some(naive_now())),
    ..Default::default()
  };
  let updated_comment = Comment::update(&mut context.pool(), orig_comment.id, &comment_form)
    .await
    .with_workboard_type(WorkboardErrorType::CouldntUpdateComment)?;

  let job = Job::read(&mut context.pool(), updated_comment.job_id).await?;
  notify_user(job.creator_id, &context);

  Ok(Json(
    CommentView::read(&mut context.pool(), updated_comment.id).await?,
  ))
}
