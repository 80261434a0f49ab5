use crate::newtypes::UserId;
use chrono::{DateTime, Utc};

#[cfg(feature = "full")]
use crate::schema::email_verification;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "full", derive(Queryable, Selectable, Identifiable))]
#[cfg_attr(feature = "full", diesel(table_name = email_verification))]
pub struct EmailVerification {
  pub id: i32,
  pub user_id: UserId,
  /// The address the token was mailed to, in case the user changes it before confirming.
  pub email: String,
  pub verification_token: String,
  pub published: DateTime<Utc>,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "full", derive(Insertable, AsChangeset))]
#[cfg_attr(feature = "full", diesel(table_name = email_verification))]
pub struct EmailVerificationForm {
  pub user_id: UserId,
  pub email: String,
  pub verification_token: String,
  pub published: DateTime<Utc>,
}
