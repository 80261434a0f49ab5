use actix_web::web::{Data, Json};
use workboard_api_common::{
  context::WorkboardContext,
  password::ResetPasswordEmail,
  utils::send_password_reset_email,
};
use workboard_db_schema::source::user::User;
use workboard_utils::error::{WorkboardErrorType, WorkboardResult};

/// Mails a reset link and returns it in the body so the client can show it.
#[tracing::instrument(skip(context))]
pub async fn send_reset_email(
  data: Json<ResetPasswordEmail>,
  context: Data<WorkboardContext>,
) -> WorkboardResult<Json<String>> {
  let user = User::find_by_email(&mut context.pool(), &data.email).await?;
  if !user.email_verified {
    Err(WorkboardErrorType::EmailNotVerified)?
  }
  if user
    .password_encrypted
    .as_deref()
    .unwrap_or_default()
    .is_empty()
  {
    Err(WorkboardErrorType::NoPasswordSet)?
  }

  let reset_link =
    send_password_reset_email(&user, &mut context.pool(), context.settings()).await?;

  Ok(Json(reset_link))
}
