use actix_web::{
  http::header,
  web::{Data, Path},
  HttpResponse,
};
use workboard_api_common::{context::WorkboardContext, utils::send_first_login_email};
use workboard_db_schema::{newtypes::UserId, source::user::User, traits::Crud};
use workboard_utils::error::WorkboardResult;

/// Mails the first-login instructions and bounces the browser back to the
/// login page. Linked from outside the app, hence the redirect.
#[tracing::instrument(skip(context))]
pub async fn send_login_email(
  path: Path<i32>,
  context: Data<WorkboardContext>,
) -> WorkboardResult<HttpResponse> {
  let user_id = UserId(path.into_inner());
  let user = User::read(&mut context.pool(), user_id).await?;

  send_first_login_email(&user, context.settings()).await?;

  let login_url = format!("{}/login", context.settings().get_protocol_and_hostname());
  Ok(
    HttpResponse::TemporaryRedirect()
      .insert_header((header::LOCATION, login_url))
      .finish(),
  )
}
