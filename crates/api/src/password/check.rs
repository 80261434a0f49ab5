use actix_web::web::{Data, Json};
use workboard_api_common::{
  context::WorkboardContext,
  password::ResetPasswordEmail,
  SuccessResponse,
};
use workboard_db_schema::source::user::User;
use workboard_utils::error::{WorkboardErrorType, WorkboardResult};

/// Tells the login page whether the user still has to go through the
/// first-login flow.
#[tracing::instrument(skip(context))]
pub async fn check_password_set(
  data: Json<ResetPasswordEmail>,
  context: Data<WorkboardContext>,
) -> WorkboardResult<Json<SuccessResponse>> {
  let user = User::find_by_email(&mut context.pool(), &data.email).await?;
  if user
    .password_encrypted
    .as_deref()
    .unwrap_or_default()
    .is_empty()
  {
    Err(WorkboardErrorType::NoPasswordSet)?
  }

  Ok(Json(SuccessResponse::default()))
}
