use crate::{
  newtypes::UserId,
  schema::user_,
  source::user::{User, UserInsertForm, UserUpdateForm},
  traits::Crud,
  utils::{functions::lower, get_conn, limit_and_offset, naive_now, DbPool},
};
use bcrypt::{hash, DEFAULT_COST};
use diesel::{dsl::insert_into, result::Error, ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;
use uuid::Uuid;

impl UserInsertForm {
  /// The password comes in as plain text and is hashed on insert.
  pub fn new(nickname: String, email: String, password: Option<String>) -> Self {
    Self {
      uid: Uuid::new_v4(),
      nickname,
      email,
      phone: None,
      password_encrypted: password,
      admin: false,
      email_verified: false,
      validator_time: naive_now(),
      published: naive_now(),
    }
  }
}

impl User {
  pub async fn read_from_uid(pool: &mut DbPool<'_>, user_uid: Uuid) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    user_::table
      .filter(user_::uid.eq(user_uid))
      .filter(user_::deleted.eq(false))
      .first::<Self>(conn)
      .await
  }

  pub async fn find_by_email(pool: &mut DbPool<'_>, from_email: &str) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    user_::table
      .filter(lower(user_::email).eq(from_email.to_lowercase()))
      .filter(user_::deleted.eq(false))
      .first::<Self>(conn)
      .await
  }

  /// Total number of registrations, deleted ones included. The first
  /// registration ever becomes the admin.
  pub async fn count(pool: &mut DbPool<'_>) -> Result<i64, Error> {
    let conn = &mut get_conn(pool).await?;
    user_::table.count().get_result::<i64>(conn).await
  }

  pub async fn list(
    pool: &mut DbPool<'_>,
    page: Option<i64>,
    limit: Option<i64>,
  ) -> Result<Vec<Self>, Error> {
    let conn = &mut get_conn(pool).await?;
    let (limit, offset) = limit_and_offset(page, limit)?;
    user_::table
      .filter(user_::deleted.eq(false))
      .order(user_::published.asc())
      .limit(limit)
      .offset(offset)
      .load::<Self>(conn)
      .await
  }

  pub async fn soft_delete(pool: &mut DbPool<'_>, user_id: UserId) -> Result<Self, Error> {
    let form = UserUpdateForm {
      deleted: Some(true),
      updated: Some(Some(naive_now())),
      ..Default::default()
    };
    Self::update(pool, user_id, &form).await
  }

  pub async fn mark_email_verified(pool: &mut DbPool<'_>, user_id: UserId) -> Result<Self, Error> {
    let form = UserUpdateForm {
      email_verified: Some(true),
      updated: Some(Some(naive_now())),
      ..Default::default()
    };
    Self::update(pool, user_id, &form).await
  }

  /// Setting a new password invalidates every token issued before now.
  pub async fn update_password(
    pool: &mut DbPool<'_>,
    user_id: UserId,
    new_password: &str,
  ) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    let password_hash = hash(new_password, DEFAULT_COST).expect("Couldn't hash password");

    diesel::update(user_::table.find(user_id))
      .set((
        user_::password_encrypted.eq(password_hash),
        user_::validator_time.eq(naive_now()),
      ))
      .get_result::<Self>(conn)
      .await
  }
}

#[async_trait]
impl Crud for User {
  type InsertForm = UserInsertForm;
  type UpdateForm = UserUpdateForm;
  type IdType = UserId;

  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    let mut form_with_encrypted_password = form.clone();
    if let Some(password) = &form.password_encrypted {
      let password_hash = hash(password, DEFAULT_COST).expect("Couldn't hash password");
      form_with_encrypted_password.password_encrypted = Some(password_hash);
    }

    insert_into(user_::table)
      .values(form_with_encrypted_password)
      .get_result::<Self>(conn)
      .await
  }

  async fn read(pool: &mut DbPool<'_>, user_id: UserId) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    user_::table.find(user_id).first::<Self>(conn).await
  }

  async fn update(
    pool: &mut DbPool<'_>,
    user_id: UserId,
    form: &Self::UpdateForm,
  ) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::update(user_::table.find(user_id))
      .set(form)
      .get_result::<Self>(conn)
      .await
  }

  async fn delete(pool: &mut DbPool<'_>, user_id: UserId) -> Result<usize, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(user_::table.find(user_id))
      .execute(conn)
      .await
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used)]
  use crate::{
    source::user::{User, UserInsertForm, UserUpdateForm},
    traits::Crud,
    utils::build_db_pool_for_tests,
  };
  use pretty_assertions::assert_eq;
  use serial_test::serial;

  #[tokio::test]
  #[serial]
  async fn test_crud() {
    let pool = &build_db_pool_for_tests().await;
    let pool = &mut pool.into();

    let form = UserInsertForm::new(
      "thommy".into(),
      "Thommy@example.com".into(),
      Some("my password 123".into()),
    );
    let user = User::create(pool, &form).await.unwrap();
    assert!(!user.admin);
    assert!(!user.email_verified);
    // the stored password must be a bcrypt hash, not the plain text
    assert!(user
      .password_encrypted
      .as_ref()
      .unwrap()
      .starts_with("$2b$"));

    // email lookups ignore case
    let by_email = User::find_by_email(pool, "tHommy@EXAMPLE.com").await.unwrap();
    assert_eq!(user, by_email);

    let update_form = UserUpdateForm {
      nickname: Some("thommy two".into()),
      ..Default::default()
    };
    let updated = User::update(pool, user.id, &update_form).await.unwrap();
    assert_eq!("thommy two", updated.nickname);

    let verified = User::mark_email_verified(pool, user.id).await.unwrap();
    assert!(verified.email_verified);

    let rehashed = User::update_password(pool, user.id, "new password 456")
      .await
      .unwrap();
    assert!(rehashed.validator_time > user.validator_time);

    User::soft_delete(pool, user.id).await.unwrap();
    assert!(User::read_from_uid(pool, user.uid).await.is_err());
    assert!(User::find_by_email(pool, "thommy@example.com").await.is_err());

    let num_deleted = User::delete(pool, user.id).await.unwrap();
    assert_eq!(1, num_deleted);
  }
}
