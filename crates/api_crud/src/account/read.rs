use actix_web::web::{Data, Json, Path};
use uuid::Uuid;
use workboard_api_common::{account::AccountResponse, context::WorkboardContext};
use workboard_db_schema::source::account::Account;
use workboard_db_views::structs::UserView;
use workboard_utils::error::WorkboardResult;

#[tracing::instrument(skip(context))]
pub async fn get_account(
  path: Path<Uuid>,
  context: Data<WorkboardContext>,
  _user_view: UserView,
) -> WorkboardResult<Json<AccountResponse>> {
  let account = Account::read_from_uid(&mut context.pool(), path.into_inner()).await?;
  Ok(Json(account.into()))
}
