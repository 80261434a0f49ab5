use actix_web::{
  web::{Data, Path},
  HttpResponse,
};
use uuid::Uuid;
use workboard_api_common::context::WorkboardContext;
use workboard_db_schema::source::folder::Folder;
use workboard_db_views::structs::UserView;
use workboard_utils::error::WorkboardResult;

#[tracing::instrument(skip(context))]
pub async fn delete_folder(
  path: Path<Uuid>,
  context: Data<WorkboardContext>,
  _user_view: UserView,
) -> WorkboardResult<HttpResponse> {
  let folder = Folder::read_from_uid(&mut context.pool(), path.into_inner()).await?;
  Folder::soft_delete(&mut context.pool(), folder.id).await?;

  Ok(HttpResponse::NoContent().finish())
}
