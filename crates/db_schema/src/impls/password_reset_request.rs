use crate::{
  newtypes::UserId,
  schema::password_reset_request,
  source::password_reset_request::{PasswordResetRequest, PasswordResetRequestForm},
  utils::{get_conn, naive_now, now, DbPool},
};
use diesel::{
  dsl::{insert_into, IntervalDsl},
  result::Error,
  ExpressionMethods,
  QueryDsl,
};
use diesel_async::RunQueryDsl;
use sha2::{Digest, Sha256};

impl PasswordResetRequest {
  /// Stores a fresh reset request. Only the sha256 of the token is persisted, the
  /// plain token goes out by email and is never kept around.
  pub async fn create_token(
    pool: &mut DbPool<'_>,
    from_user_id: UserId,
    token: &str,
  ) -> Result<PasswordResetRequest, Error> {
    let conn = &mut get_conn(pool).await?;
    let form = PasswordResetRequestForm {
      user_id: from_user_id,
      token_encrypted: token_hash(token),
      published: naive_now(),
    };

    insert_into(password_reset_request::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
  }

  /// Tokens expire a day after they were issued.
  pub async fn read_from_token(
    pool: &mut DbPool<'_>,
    token: &str,
  ) -> Result<PasswordResetRequest, Error> {
    let conn = &mut get_conn(pool).await?;
    password_reset_request::table
      .filter(password_reset_request::token_encrypted.eq(token_hash(token)))
      .filter(password_reset_request::published.gt(now() - 1.days()))
      .first::<Self>(conn)
      .await
  }

  pub async fn get_recent_password_resets_count(
    pool: &mut DbPool<'_>,
    user_id: UserId,
  ) -> Result<i64, Error> {
    let conn = &mut get_conn(pool).await?;
    password_reset_request::table
      .filter(password_reset_request::user_id.eq(user_id))
      .filter(password_reset_request::published.gt(now() - 1.days()))
      .count()
      .get_result(conn)
      .await
  }
}

fn token_hash(token: &str) -> String {
  let mut hasher = Sha256::new();
  hasher.update(token);
  bytes_to_hex(hasher.finalize().to_vec())
}

fn bytes_to_hex(bytes: Vec<u8>) -> String {
  let mut str = String::new();
  for byte in bytes {
    str += &format!("{byte:02x}");
  }
  str
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used)]
  use crate::{
    source::{
      password_reset_request::PasswordResetRequest,
      user::{User, UserInsertForm},
    },
    traits::Crud,
    utils::build_db_pool_for_tests,
  };
  use pretty_assertions::assert_eq;
  use serial_test::serial;

  #[tokio::test]
  #[serial]
  async fn test_password_reset() {
    let pool = &build_db_pool_for_tests().await;
    let pool = &mut pool.into();

    let user = User::create(
      pool,
      &UserInsertForm::new("thommy reset".into(), "thommy_reset@example.com".into(), None),
    )
    .await
    .unwrap();

    let token = "nope";
    let inserted = PasswordResetRequest::create_token(pool, user.id, token)
      .await
      .unwrap();
    // the table never sees the plain token
    assert_ne!(token, inserted.token_encrypted);

    let read = PasswordResetRequest::read_from_token(pool, token).await.unwrap();
    assert_eq!(inserted, read);
    assert!(PasswordResetRequest::read_from_token(pool, "wrong").await.is_err());

    let count = PasswordResetRequest::get_recent_password_resets_count(pool, user.id)
      .await
      .unwrap();
    assert_eq!(1, count);

    User::delete(pool, user.id).await.unwrap();
  }
}
