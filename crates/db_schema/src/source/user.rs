use crate::newtypes::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use uuid::Uuid;

#[cfg(feature = "full")]
use crate::schema::user_;

/// A registered user.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "full", derive(Queryable, Selectable, Identifiable))]
#[cfg_attr(feature = "full", diesel(table_name = user_))]
pub struct User {
  pub id: UserId,
  pub uid: Uuid,
  pub nickname: String,
  pub email: String,
  pub phone: Option<String>,
  #[serde(skip)]
  pub password_encrypted: Option<String>,
  pub admin: bool,
  pub email_verified: bool,
  /// Tokens issued before this time are no longer valid.
  #[serde(skip_serializing)]
  pub validator_time: DateTime<Utc>,
  pub deleted: bool,
  pub published: DateTime<Utc>,
  pub updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "full", derive(Insertable))]
#[cfg_attr(feature = "full", diesel(table_name = user_))]
pub struct UserInsertForm {
  pub uid: Uuid,
  pub nickname: String,
  pub email: String,
  pub phone: Option<String>,
  pub password_encrypted: Option<String>,
  pub admin: bool,
  pub email_verified: bool,
  pub validator_time: DateTime<Utc>,
  pub published: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "full", derive(AsChangeset))]
#[cfg_attr(feature = "full", diesel(table_name = user_))]
pub struct UserUpdateForm {
  pub nickname: Option<String>,
  pub email: Option<String>,
  pub phone: Option<Option<String>>,
  pub password_encrypted: Option<Option<String>>,
  pub admin: Option<bool>,
  pub email_verified: Option<bool>,
  pub validator_time: Option<DateTime<Utc>>,
  pub deleted: Option<bool>,
  pub updated: Option<Option<DateTime<Utc>>>,
}
