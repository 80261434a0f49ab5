use crate::context::WorkboardContext;
use chrono::{DateTime, Utc};
use workboard_db_schema::{
  newtypes::UserId,
  source::{
    email_verification::{EmailVerification, EmailVerificationForm},
    password_reset_request::PasswordResetRequest,
    user::User,
  },
  utils::{naive_now, DbPool},
};
use workboard_db_views::structs::UserView;
use workboard_utils::{
  claims::Claims,
  email::send_email,
  error::{WorkboardErrorExt2, WorkboardErrorType, WorkboardResult},
  settings::structs::Settings,
  spawn_try_task,
  utils::generate_random_string,
};
use workboard_websocket::send::send_user_notification;

#[tracing::instrument(skip_all)]
pub async fn user_view_from_jwt(
  jwt: &str,
  context: &WorkboardContext,
) -> WorkboardResult<UserView> {
  let claims = Claims::decode(jwt, context.settings())
    .with_workboard_type(WorkboardErrorType::NotLoggedIn)?
    .claims;
  let user_id = UserId(claims.sub);
  let user_view = UserView::read(&mut context.pool(), user_id).await?;
  check_user_valid(&user_view.user)?;
  check_validator_time(&user_view.user.validator_time, &claims)?;

  Ok(user_view)
}

pub fn check_user_valid(user: &User) -> WorkboardResult<()> {
  if user.deleted {
    Err(WorkboardErrorType::NotLoggedIn)?
  } else {
    Ok(())
  }
}

/// Checks if the user's token was issued before the last password change.
pub fn check_validator_time(
  validator_time: &DateTime<Utc>,
  claims: &Claims,
) -> WorkboardResult<()> {
  if validator_time.timestamp() > claims.iat {
    Err(WorkboardErrorType::NotLoggedIn)?
  } else {
    Ok(())
  }
}

pub fn is_admin(user_view: &UserView) -> WorkboardResult<()> {
  if !user_view.user.admin {
    Err(WorkboardErrorType::NotAnAdmin)?
  } else {
    Ok(())
  }
}

/// Pushes a notification to the user's open websocket sessions, off the
/// request path. The write this follows is already committed, so a failed
/// push is only logged.
pub fn notify_user(recipient_id: UserId, context: &WorkboardContext) {
  let chat_server = context.chat_server().clone();
  spawn_try_task(async move { send_user_notification(&chat_server, recipient_id) });
}

pub async fn send_welcome_email(user: &User, settings: &Settings) -> WorkboardResult<()> {
  let subject = "Welcome!";
  let body = format!(
    "<h1>Welcome, {}!</h1><p>Your account on {} was created. You can now log in and join the conversation.</p>",
    user.nickname,
    settings.hostname
  );
  send_email(subject, &user.email, &user.nickname, &body, settings).await
}

pub async fn send_verification_email(
  user: &User,
  new_email: &str,
  pool: &mut DbPool<'_>,
  settings: &Settings,
) -> WorkboardResult<()> {
  let form = EmailVerificationForm {
    user_id: user.id,
    email: new_email.to_string(),
    verification_token: generate_random_string(),
    published: naive_now(),
  };
  let verify_link = format!(
    "{}/api/v1/users/verifyemail/{}/{}/",
    settings.get_protocol_and_hostname(),
    user.uid,
    &form.verification_token
  );
  EmailVerification::create(pool, &form).await?;

  let subject = "Email verification required";
  let body = format!(
    "<h1>Verify your email</h1><p>Hi {}, please confirm your email address by opening <a href=\"{verify_link}\">this link</a>.</p>",
    user.nickname
  );
  send_email(subject, new_email, &user.nickname, &body, settings).await
}

/// Mails a reset link and returns it, so the caller can also hand it to the client.
pub async fn send_password_reset_email(
  user: &User,
  pool: &mut DbPool<'_>,
  settings: &Settings,
) -> WorkboardResult<String> {
  // To avoid abuse and spam, limit password resets
  let recent_resets_count =
    PasswordResetRequest::get_recent_password_resets_count(pool, user.id).await?;
  if recent_resets_count >= 3 {
    Err(WorkboardErrorType::PasswordResetLimitReached)?
  }

  let token = generate_random_string();
  PasswordResetRequest::create_token(pool, user.id, &token).await?;

  let reset_link = format!(
    "{}/restore/{}",
    settings.get_protocol_and_hostname(),
    &token
  );
  let subject = "Password recovery";
  let body = format!(
    "<h1>Password recovery</h1><p>Hi {}, open <a href=\"{reset_link}\">this link</a> to set a new password.</p>",
    user.nickname
  );
  send_email(subject, &user.email, &user.nickname, &body, settings).await?;

  Ok(reset_link)
}

pub async fn send_first_login_email(user: &User, settings: &Settings) -> WorkboardResult<()> {
  let login_link = format!("{}/login", settings.get_protocol_and_hostname());
  let subject = "First login";
  let body = format!(
    "<h1>First login</h1><p>Hi {}, your account is ready. Sign in at <a href=\"{login_link}\">{login_link}</a> to set your password and get started.</p>",
    user.nickname
  );
  send_email(subject, &user.email, &user.nickname, &body, settings).await
}
