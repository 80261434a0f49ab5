use actix_web::web::{Data, Json, Path};
use uuid::Uuid;
use workboard_api_common::{context::WorkboardContext, user::UserResponse};
use workboard_db_schema::source::user::User;
use workboard_db_views::structs::UserView;
use workboard_utils::error::WorkboardResult;

/// The profile of whoever owns the session.
#[tracing::instrument]
pub async fn get_profile(user_view: UserView) -> WorkboardResult<Json<UserResponse>> {
  Ok(Json(user_view.user.into()))
}

#[tracing::instrument(skip(context))]
pub async fn get_user(
  path: Path<Uuid>,
  context: Data<WorkboardContext>,
  _user_view: UserView,
) -> WorkboardResult<Json<UserResponse>> {
  let user = User::read_from_uid(&mut context.pool(), path.into_inner()).await?;
  Ok(Json(user.into()))
}

/// The address alone, as a plain JSON string.
#[tracing::instrument(skip(context))]
pub async fn get_user_email(
  path: Path<Uuid>,
  context: Data<WorkboardContext>,
  _user_view: UserView,
) -> WorkboardResult<Json<String>> {
  let user = User::read_from_uid(&mut context.pool(), path.into_inner()).await?;
  Ok(Json(user.email))
}
