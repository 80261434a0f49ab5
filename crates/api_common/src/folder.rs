use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use uuid::Uuid;

/// Create a folder below an existing one. Every account starts out with a
/// root folder, so a parent always exists.
#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct CreateFolder {
  pub name: String,
  pub account_uid: Uuid,
  pub parent_uid: Uuid,
  pub child_order: Option<i32>,
}

/// Rename, reorder or move a folder. Only the supplied fields change.
#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct UpdateFolder {
  pub name: Option<String>,
  pub parent_uid: Option<Uuid>,
  pub child_order: Option<i32>,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FolderResponse {
  pub uid: Uuid,
  pub name: String,
  pub parent_uid: Option<Uuid>,
  pub child_order: i32,
  pub published: DateTime<Utc>,
  pub updated: Option<DateTime<Utc>>,
}
