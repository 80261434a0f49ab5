use crate::folder::folder_response;
use actix_web::web::{Data, Json, Path};
use uuid::Uuid;
use workboard_api_common::{
  context::WorkboardContext,
  folder::{FolderResponse, UpdateFolder},
};
use workboard_db_schema::{
  source::folder::{Folder, FolderUpdateForm},
  traits::Crud,
  utils::naive_now,
};
use workboard_db_views::structs::UserView;
use workboard_utils::error::{WorkboardErrorExt, WorkboardErrorType, WorkboardResult};

#[tracing::instrument(skip(context))]
pub async fn update_folder(
  path: Path<Uuid>,
  data: Json<UpdateFolder>,
  context: Data<WorkboardContext>,
  _user_view: UserView,
) -> WorkboardResult<Json<FolderResponse>> {
  let orig_folder = Folder::read_from_uid(&mut context.pool(), path.into_inner()).await?;

  let parent_id = match data.parent_uid {
    Some(parent_uid) => {
      let parent = Folder::read_from_uid(&mut context.pool(), parent_uid).await?;
      if parent.account_id != orig_folder.account_id {
        Err(WorkboardErrorType::NotFound)?
      }
      Some(Some(parent.id))
    }
    None => None,
  };

  let folder_form = FolderUpdateForm {
    name: data.name.clone(),
    parent_id,
    child_order: data.child_order,
    updated: Some(Some(naive_now())),
    ..Default::default()
  };
  let updated_folder = Folder::update(&mut context.pool(), orig_folder.id, &folder_form)
    .await
    .with_workboard_type(WorkboardErrorType::CouldntUpdateFolder)?;

  Ok(Json(
    folder_response(&mut context.pool(), updated_folder).await?,
  ))
}
