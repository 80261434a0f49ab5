use actix_web::{
  http::StatusCode,
  web::{Data, Json},
};
use workboard_api_common::{
  context::WorkboardContext,
  job::{CreateJob, JobResponse},
};
use workboard_db_schema::{
  source::job::{Job, JobInsertForm},
  traits::Crud,
};
use workboard_db_views::structs::UserView;
use workboard_utils::error::{WorkboardErrorExt, WorkboardErrorType, WorkboardResult};

#[tracing::instrument(skip(context))]
pub async fn create_job(
  data: Json<CreateJob>,
  context: Data<WorkboardContext>,
  user_view: UserView,
) -> WorkboardResult<(Json<JobResponse>, StatusCode)> {
  let job_form = JobInsertForm::new(data.title.clone(), user_view.user.id);
  let inserted_job = Job::create(&mut context.pool(), &job_form)
    .await
    .with_workboard_type(WorkboardErrorType::CouldntCreateJob)?;

  Ok((
    Json(JobResponse {
      uid: inserted_job.uid,
      title: inserted_job.title,
      creator_uid: user_view.user.uid,
      published: inserted_job.published,
      updated: inserted_job.updated,
    }),
    StatusCode::CREATED,
  ))
}
