use actix_web::web::{Data, Json, Query};
use workboard_api_common::{
  context::WorkboardContext,
  user::{ListUsers, UserResponse},
  utils::is_admin,
};
use workboard_db_schema::source::user::User;
use workboard_db_views::structs::UserView;
use workboard_utils::error::WorkboardResult;

#[tracing::instrument(skip(context))]
pub async fn list_users(
  query: Query<ListUsers>,
  context: Data<WorkboardContext>,
  user_view: UserView,
) -> WorkboardResult<Json<Vec<UserResponse>>> {
  is_admin(&user_view)?;

  let users = User::list(&mut context.pool(), query.page, query.limit).await?;
  Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
