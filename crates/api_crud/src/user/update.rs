use actix_web::web::{Data, Json};
use workboard_api_common::{
  context::WorkboardContext,
  user::{UpdateUser, UserResponse},
};
use workboard_db_schema::{
  source::user::{User, UserUpdateForm},
  traits::Crud,
  utils::{diesel_string_update, naive_now},
};
use workboard_db_views::structs::UserView;
use workboard_utils::{
  error::{WorkboardErrorExt, WorkboardErrorType, WorkboardResult},
  utils::validation::check_nickname,
};

/// Users can only change their own profile, so the target comes from the
/// session rather than the route.
#[tracing::instrument(skip(context))]
pub async fn update_user(
  data: Json<UpdateUser>,
  context: Data<WorkboardContext>,
  user_view: UserView,
) -> WorkboardResult<Json<UserResponse>> {
  if let Some(nickname) = &data.nickname {
    check_nickname(nickname)?;
  }

  let user_form = UserUpdateForm {
    nickname: data.nickname.clone(),
    // an empty string clears the stored phone number
    phone: diesel_string_update(data.phone.as_deref()),
    updated: Some(Some(naive_now())),
    ..Default::default()
  };
  let updated_user = User::update(&mut context.pool(), user_view.user.id, &user_form)
    .await
    .with_workboard_type(WorkboardErrorType::CouldntUpdateUser)?;

  Ok(Json(updated_user.into()))
}
