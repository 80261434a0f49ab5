use crate::{
  newtypes::{AccountId, UserId},
  schema::account,
  source::account::{Account, AccountInsertForm, AccountUpdateForm},
  traits::Crud,
  utils::{get_conn, naive_now, DbPool},
};
use diesel::{dsl::insert_into, result::Error, ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;
use uuid::Uuid;

impl AccountInsertForm {
  pub fn new(name: String, user_id: UserId) -> Self {
    Self {
      uid: Uuid::new_v4(),
      name,
      user_id,
      published: naive_now(),
    }
  }
}

impl Account {
  pub async fn read_from_uid(pool: &mut DbPool<'_>, account_uid: Uuid) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    account::table
      .filter(account::uid.eq(account_uid))
      .filter(account::deleted.eq(false))
      .first::<Self>(conn)
      .await
  }
}

#[async_trait]
impl Crud for Account {
  type InsertForm = AccountInsertForm;
  type UpdateForm = AccountUpdateForm;
  type IdType = AccountId;

  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    insert_into(account::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
  }

  async fn read(pool: &mut DbPool<'_>, account_id: AccountId) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    account::table.find(account_id).first::<Self>(conn).await
  }

  async fn update(
    pool: &mut DbPool<'_>,
    account_id: AccountId,
    form: &Self::UpdateForm,
  ) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::update(account::table.find(account_id))
      .set(form)
      .get_result::<Self>(conn)
      .await
  }

  async fn delete(pool: &mut DbPool<'_>, account_id: AccountId) -> Result<usize, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(account::table.find(account_id))
      .execute(conn)
      .await
  }
}
