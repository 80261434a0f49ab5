use actix_web::{
  http::StatusCode,
  web::{Data, Json},
};
use tracing::warn;
use workboard_api_common::{
  context::WorkboardContext,
  user::{Register, UserResponse},
  utils::{send_verification_email, send_welcome_email},
};
use workboard_db_schema::{
  source::user::{User, UserInsertForm},
  traits::Crud,
};
use workboard_utils::{
  error::{WorkboardErrorExt, WorkboardErrorType, WorkboardResult},
  utils::validation::{check_email, check_nickname, password_length_check},
};

#[tracing::instrument(skip(context, data))]
pub async fn register(
  data: Json<Register>,
  context: Data<WorkboardContext>,
) -> WorkboardResult<(Json<UserResponse>, StatusCode)> {
  check_nickname(&data.nickname)?;
  check_email(&data.email)?;
  password_length_check(&data.password)?;

  // the first account on a fresh instance becomes the admin
  let no_users_yet = User::count(&mut context.pool()).await? == 0;

  let user_form = UserInsertForm {
    phone: data.phone.clone(),
    admin: no_users_yet,
    ..UserInsertForm::new(
      data.nickname.clone(),
      data.email.to_lowercase(),
      Some(data.password.to_string()),
    )
  };

  let inserted_user = match User::create(&mut context.pool(), &user_form).await {
    Ok(user) => user,
    Err(e) => {
      let err_type = if e.to_string()
        == "duplicate key value violates unique constraint \"user__email_key\""
      {
        WorkboardErrorType::EmailAlreadyExists
      } else {
        WorkboardErrorType::CouldntCreateUser
      };

      return Err(e).with_workboard_type(err_type);
    }
  };

  // the account exists at this point, a failed mail must not undo it
  if let Err(e) = send_welcome_email(&inserted_user, context.settings()).await {
    warn!("Failed to send welcome email: {e}");
  }
  if let Err(e) = send_verification_email(
    &inserted_user,
    &inserted_user.email,
    &mut context.pool(),
    context.settings(),
  )
  .await
  {
    warn!("Failed to send verification email: {e}");
  }

  Ok((Json(inserted_user.into()), StatusCode::CREATED))
}
