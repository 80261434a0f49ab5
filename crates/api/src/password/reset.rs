use actix_web::web::{Data, Json};
use bcrypt::verify;
use workboard_api_common::{
  context::WorkboardContext,
  password::{ResetPassword, ResetPasswordResponse},
};
use workboard_db_schema::source::user::User;
use workboard_utils::{
  error::{WorkboardErrorType, WorkboardResult},
  utils::validation::password_length_check,
};

#[tracing::instrument(skip(context, data))]
pub async fn reset_password(
  data: Json<ResetPassword>,
  context: Data<WorkboardContext>,
) -> WorkboardResult<Json<ResetPasswordResponse>> {
  password_length_check(&data.new_password)?;

  let user = User::find_by_email(&mut context.pool(), &data.email).await?;

  // a wrong old password reads the same as an unknown user
  let valid: bool = user
    .password_encrypted
    .as_deref()
    .map(|hash| verify(&data.old_password, hash).unwrap_or(false))
    .unwrap_or(false);
  if !valid {
    Err(WorkboardErrorType::NotFound)?
  }

  User::update_password(&mut context.pool(), user.id, &data.new_password).await?;

  Ok(Json(ResetPasswordResponse::default()))
}
