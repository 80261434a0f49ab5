use actix_web::web::{Data, Json, Path};
use uuid::Uuid;
use workboard_api_common::context::WorkboardContext;
use workboard_db_schema::source::{account::Account, folder::Folder};
use workboard_db_views::structs::{FolderTreeNode, UserView};
use workboard_utils::error::{WorkboardErrorType, WorkboardResult};

/// The whole folder tree of an account, rooted at its top-level folder.
#[tracing::instrument(skip(context))]
pub async fn get_folder_tree(
  path: Path<Uuid>,
  context: Data<WorkboardContext>,
  _user_view: UserView,
) -> WorkboardResult<Json<FolderTreeNode>> {
  let account = Account::read_from_uid(&mut context.pool(), path.into_inner()).await?;

  let folders = Folder::for_account(&mut context.pool(), account.id).await?;
  let tree = FolderTreeNode::build(folders).ok_or(WorkboardErrorType::NotFound)?;

  Ok(Json(tree))
}
