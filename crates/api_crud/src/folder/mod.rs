use workboard_api_common::folder::FolderResponse;
use workboard_db_schema::{
  source::folder::Folder,
  traits::Crud,
  utils::DbPool,
};
use workboard_utils::error::WorkboardResult;

pub mod create;
pub mod delete;
pub mod read;
pub mod update;

/// Folders reference their parent by internal id, the API speaks uids.
pub(crate) async fn folder_response(
  pool: &mut DbPool<'_>,
  folder: Folder,
) -> WorkboardResult<FolderResponse> {
  let parent_uid = match folder.parent_id {
    Some(parent_id) => Some(Folder::read(pool, parent_id).await?.uid),
    None => None,
  };

  Ok(FolderResponse {
    uid: folder.uid,
    name: folder.name,
    parent_uid,
    child_order: folder.child_order,
    published: folder.published,
    updated: folder.updated,
  })
}
