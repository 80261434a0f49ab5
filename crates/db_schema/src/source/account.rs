use crate::newtypes::{AccountId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use uuid::Uuid;

#[cfg(feature = "full")]
use crate::schema::account;

/// A workspace owned by a user, holding its folder tree.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "full", derive(Queryable, Selectable, Identifiable))]
#[cfg_attr(feature = "full", diesel(table_name = account))]
pub struct Account {
  pub id: AccountId,
  pub uid: Uuid,
  pub name: String,
  pub user_id: UserId,
  pub deleted: bool,
  pub published: DateTime<Utc>,
  pub updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "full", derive(Insertable))]
#[cfg_attr(feature = "full", diesel(table_name = account))]
pub struct AccountInsertForm {
  pub uid: Uuid,
  pub name: String,
  pub user_id: UserId,
  pub published: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "full", derive(AsChangeset))]
#[cfg_attr(feature = "full", diesel(table_name = account))]
pub struct AccountUpdateForm {
  pub name: Option<String>,
  pub deleted: Option<bool>,
  pub updated: Option<Option<DateTime<Utc>>>,
}
