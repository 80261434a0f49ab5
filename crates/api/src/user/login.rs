use actix_web::web::{Data, Json};
use bcrypt::verify;
use workboard_api_common::{
  context::WorkboardContext,
  user::{Login, LoginResponse},
  utils::check_user_valid,
};
use workboard_db_schema::source::user::User;
use workboard_utils::{
  claims::Claims,
  error::{WorkboardErrorExt, WorkboardErrorType, WorkboardResult},
};

#[tracing::instrument(skip(context))]
pub async fn login(
  data: Json<Login>,
  context: Data<WorkboardContext>,
) -> WorkboardResult<Json<LoginResponse>> {
  let user = User::find_by_email(&mut context.pool(), &data.email)
    .await
    .with_workboard_type(WorkboardErrorType::IncorrectLogin)?;

  let valid: bool = user
    .password_encrypted
    .as_deref()
    .map(|hash| verify(&data.password, hash).unwrap_or(false))
    .unwrap_or(false);
  if !valid {
    Err(WorkboardErrorType::IncorrectLogin)?
  }
  check_user_valid(&user)?;

  let jwt = Claims::jwt(user.id.0, context.settings())?;

  Ok(Json(LoginResponse { jwt: jwt.into() }))
}
