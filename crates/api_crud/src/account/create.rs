use actix_web::{
  http::StatusCode,
  web::{Data, Json},
};
use workboard_api_common::{
  account::{AccountResponse, CreateAccount},
  context::WorkboardContext,
};
use workboard_db_schema::{
  source::{
    account::{Account, AccountInsertForm},
    folder::{Folder, FolderInsertForm},
  },
  traits::Crud,
};
use workboard_db_views::structs::UserView;
use workboard_utils::error::{WorkboardErrorExt, WorkboardErrorType, WorkboardResult};

#[tracing::instrument(skip(context))]
pub async fn create_account(
  data: Json<CreateAccount>,
  context: Data<WorkboardContext>,
  user_view: UserView,
) -> WorkboardResult<(Json<AccountResponse>, StatusCode)> {
  let account_form = AccountInsertForm::new(data.name.clone(), user_view.user.id);
  let inserted_account = Account::create(&mut context.pool(), &account_form)
    .await
    .with_workboard_type(WorkboardErrorType::CouldntCreateAccount)?;

  // every account starts out with a root folder named after it
  let root_form = FolderInsertForm::new(inserted_account.name.clone(), inserted_account.id);
  Folder::create(&mut context.pool(), &root_form)
    .await
    .with_workboard_type(WorkboardErrorType::CouldntCreateFolder)?;

  Ok((Json(inserted_account.into()), StatusCode::CREATED))
}
