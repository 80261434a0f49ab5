use crate::folder::folder_response;
use actix_web::{
  http::StatusCode,
  web::{Data, Json},
};
use workboard_api_common::{
  context::WorkboardContext,
  folder::{CreateFolder, FolderResponse},
};
use workboard_db_schema::{
  source::{
    account::Account,
    folder::{Folder, FolderInsertForm},
  },
  traits::Crud,
};
use workboard_db_views::structs::UserView;
use workboard_utils::error::{WorkboardErrorExt, WorkboardErrorType, WorkboardResult};

#[tracing::instrument(skip(context))]
pub async fn create_folder(
  data: Json<CreateFolder>,
  context: Data<WorkboardContext>,
  _user_view: UserView,
) -> WorkboardResult<(Json<FolderResponse>, StatusCode)> {
  let account = Account::read_from_uid(&mut context.pool(), data.account_uid).await?;

  // a parent from another account would detach the folder from its tree
  let parent = Folder::read_from_uid(&mut context.pool(), data.parent_uid).await?;
  if parent.account_id != account.id {
    Err(WorkboardErrorType::NotFound)?
  }

  let folder_form = FolderInsertForm {
    parent_id: Some(parent.id),
    child_order: data.child_order.unwrap_or_default(),
    ..FolderInsertForm::new(data.name.clone(), account.id)
  };
  let inserted_folder = Folder::create(&mut context.pool(), &folder_form)
    .await
    .with_workboard_type(WorkboardErrorType::CouldntCreateFolder)?;

  Ok((
    Json(folder_response(&mut context.pool(), inserted_folder).await?),
    StatusCode::CREATED,
  ))
}
