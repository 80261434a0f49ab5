use actix_web::web::{Data, Json, Path};
use uuid::Uuid;
use workboard_api_common::{context::WorkboardContext, job::JobResponse};
use workboard_db_schema::{
  source::{job::Job, user::User},
  traits::Crud,
};
use workboard_db_views::structs::UserView;
use workboard_utils::error::WorkboardResult;

#[tracing::instrument(skip(context))]
pub async fn get_job(
  path: Path<Uuid>,
  context: Data<WorkboardContext>,
  _user_view: UserView,
) -> WorkboardResult<Json<JobResponse>> {
  let job = Job::read_from_uid(&mut context.pool(), path.into_inner()).await?;
  let creator = User::read(&mut context.pool(), job.creator_id).await?;

  Ok(Json(JobResponse {
    uid: job.uid,
    title: job.title,
    creator_uid: creator.uid,
    published: job.published,
    updated: job.updated,
  }))
}
