use actix_web::{web::Data, HttpResponse};
use workboard_api_common::context::WorkboardContext;
use workboard_db_schema::source::user::User;
use workboard_db_views::structs::UserView;
use workboard_utils::error::WorkboardResult;

/// Soft-deletes the caller's own account. The row stays behind so existing
/// comments keep their author.
#[tracing::instrument(skip(context))]
pub async fn delete_user(
  context: Data<WorkboardContext>,
  user_view: UserView,
) -> WorkboardResult<HttpResponse> {
  User::soft_delete(&mut context.pool(), user_view.user.id).await?;
  Ok(HttpResponse::NoContent().finish())
}
