use crate::{
  newtypes::{AccountId, FolderId},
  schema::folder,
  source::folder::{Folder, FolderInsertForm, FolderUpdateForm},
  traits::Crud,
  utils::{get_conn, naive_now, DbPool},
};
use diesel::{dsl::insert_into, result::Error, ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;
use uuid::Uuid;

impl FolderInsertForm {
  pub fn new(name: String, account_id: AccountId) -> Self {
    Self {
      uid: Uuid::new_v4(),
      name,
      account_id,
      parent_id: None,
      child_order: 0,
      published: naive_now(),
    }
  }
}

impl Folder {
  pub async fn read_from_uid(pool: &mut DbPool<'_>, folder_uid: Uuid) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    folder::table
      .filter(folder::uid.eq(folder_uid))
      .filter(folder::deleted.eq(false))
      .first::<Self>(conn)
      .await
  }

  /// All live folders of an account, the raw material for its tree.
  pub async fn for_account(
    pool: &mut DbPool<'_>,
    for_account_id: AccountId,
  ) -> Result<Vec<Self>, Error> {
    let conn = &mut get_conn(pool).await?;
    folder::table
      .filter(folder::account_id.eq(for_account_id))
      .filter(folder::deleted.eq(false))
      .order((folder::child_order.asc(), folder::id.asc()))
      .load::<Self>(conn)
      .await
  }

  pub async fn soft_delete(pool: &mut DbPool<'_>, folder_id: FolderId) -> Result<Self, Error> {
    let form = FolderUpdateForm {
      deleted: Some(true),
      updated: Some(Some(naive_now())),
      ..Default::default()
    };
    Self::update(pool, folder_id, &form).await
  }
}

#[async_trait]
impl Crud for Folder {
  type InsertForm = FolderInsertForm;
  type UpdateForm = FolderUpdateForm;
  type IdType = FolderId;

  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    insert_into(folder::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
  }

  async fn read(pool: &mut DbPool<'_>, folder_id: FolderId) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    folder::table.find(folder_id).first::<Self>(conn).await
  }

  async fn update(
    pool: &mut DbPool<'_>,
    folder_id: FolderId,
    form: &Self::UpdateForm,
  ) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::update(folder::table.find(folder_id))
      .set(form)
      .get_result::<Self>(conn)
      .await
  }

  async fn delete(pool: &mut DbPool<'_>, folder_id: FolderId) -> Result<usize, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(folder::table.find(folder_id))
      .execute(conn)
      .await
  }
}
