use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use uuid::Uuid;
use workboard_db_schema::source::account::Account;

/// Create an account owned by the calling user. A root folder named after
/// the account is created with it.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct CreateAccount {
  pub name: String,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AccountResponse {
  pub uid: Uuid,
  pub name: String,
  pub published: DateTime<Utc>,
  pub updated: Option<DateTime<Utc>>,
}

impl From<Account> for AccountResponse {
  fn from(account: Account) -> Self {
    AccountResponse {
      uid: account.uid,
      name: account.name,
      published: account.published,
      updated: account.updated,
    }
  }
}
