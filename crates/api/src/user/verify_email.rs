use actix_web::web::{Data, Json, Path};
use uuid::Uuid;
use workboard_api_common::{context::WorkboardContext, SuccessResponse};
use workboard_db_schema::{
  source::{
    email_verification::EmailVerification,
    user::{User, UserUpdateForm},
  },
  traits::Crud,
  utils::naive_now,
};
use workboard_utils::error::{WorkboardErrorType, WorkboardResult};

#[tracing::instrument(skip(context))]
pub async fn verify_email(
  path: Path<(Uuid, String)>,
  context: Data<WorkboardContext>,
) -> WorkboardResult<Json<SuccessResponse>> {
  let (user_uid, token) = path.into_inner();
  let user = User::read_from_uid(&mut context.pool(), user_uid).await?;
  let verification = EmailVerification::read_for_token(&mut context.pool(), &token).await?;
  if verification.user_id != user.id {
    Err(WorkboardErrorType::NotFound)?
  }

  let form = UserUpdateForm {
    email_verified: Some(true),
    // in case the address changed after the token was issued
    email: Some(verification.email),
    updated: Some(Some(naive_now())),
    ..Default::default()
  };
  User::update(&mut context.pool(), user.id, &form).await?;

  // a token only works once
  EmailVerification::delete_old_tokens_for_user(&mut context.pool(), user.id).await?;

  Ok(Json(SuccessResponse::default()))
}
