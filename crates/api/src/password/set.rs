use actix_web::web::{Data, Json, Path};
use uuid::Uuid;
use workboard_api_common::{context::WorkboardContext, password::SetPassword};
use workboard_db_schema::source::user::User;
use workboard_utils::{error::WorkboardResult, utils::validation::password_length_check};

/// Sets the password of the user named in the route. Reached from the
/// first-login email, so there is no session to authenticate yet.
#[tracing::instrument(skip(context, data))]
pub async fn set_password(
  path: Path<Uuid>,
  data: Json<SetPassword>,
  context: Data<WorkboardContext>,
) -> WorkboardResult<Json<Uuid>> {
  let user_uid = path.into_inner();
  password_length_check(&data.password)?;

  let user = User::read_from_uid(&mut context.pool(), user_uid).await?;
  User::update_password(&mut context.pool(), user.id, &data.password).await?;

  Ok(Json(user.uid))
}
