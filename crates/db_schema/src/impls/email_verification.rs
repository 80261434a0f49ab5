use crate::{
  newtypes::UserId,
  schema::email_verification,
  source::email_verification::{EmailVerification, EmailVerificationForm},
  utils::{get_conn, now, DbPool},
};
use diesel::{
  dsl::{insert_into, IntervalDsl},
  result::Error,
  ExpressionMethods,
  QueryDsl,
};
use diesel_async::RunQueryDsl;

impl EmailVerification {
  pub async fn create(pool: &mut DbPool<'_>, form: &EmailVerificationForm) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    insert_into(email_verification::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
  }

  /// Verification links stay valid for a week.
  pub async fn read_for_token(pool: &mut DbPool<'_>, token: &str) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    email_verification::table
      .filter(email_verification::verification_token.eq(token))
      .filter(email_verification::published.gt(now() - 7.days()))
      .first::<Self>(conn)
      .await
  }

  pub async fn delete_old_tokens_for_user(
    pool: &mut DbPool<'_>,
    user_id: UserId,
  ) -> Result<usize, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(email_verification::table.filter(email_verification::user_id.eq(user_id)))
      .execute(conn)
      .await
  }
}
