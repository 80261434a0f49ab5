use crate::newtypes::UserId;
use chrono::{DateTime, Utc};

#[cfg(feature = "full")]
use crate::schema::password_reset_request;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "full", derive(Queryable, Selectable, Identifiable))]
#[cfg_attr(feature = "full", diesel(table_name = password_reset_request))]
pub struct PasswordResetRequest {
  pub id: i32,
  pub user_id: UserId,
  /// Only a sha256 digest of the token ever reaches the table.
  pub token_encrypted: String,
  pub published: DateTime<Utc>,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "full", derive(Insertable, AsChangeset))]
#[cfg_attr(feature = "full", diesel(table_name = password_reset_request))]
pub struct PasswordResetRequestForm {
  pub user_id: UserId,
  pub token_encrypted: String,
  pub published: DateTime<Utc>,
}
