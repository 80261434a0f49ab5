use crate::newtypes::{AccountId, FolderId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use uuid::Uuid;

#[cfg(feature = "full")]
use crate::schema::folder;

/// A node of an account's folder tree. The root folder has no parent.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "full", derive(Queryable, Selectable, Identifiable))]
#[cfg_attr(feature = "full", diesel(table_name = folder))]
pub struct Folder {
  pub id: FolderId,
  pub uid: Uuid,
  pub name: String,
  pub account_id: AccountId,
  pub parent_id: Option<FolderId>,
  /// Position among the siblings, lowest first.
  pub child_order: i32,
  pub deleted: bool,
  pub published: DateTime<Utc>,
  pub updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "full", derive(Insertable))]
#[cfg_attr(feature = "full", diesel(table_name = folder))]
pub struct FolderInsertForm {
  pub uid: Uuid,
  pub name: String,
  pub account_id: AccountId,
  pub parent_id: Option<FolderId>,
  pub child_order: i32,
  pub published: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "full", derive(AsChangeset))]
#[cfg_attr(feature = "full", diesel(table_name = folder))]
pub struct FolderUpdateForm {
  pub name: Option<String>,
  pub parent_id: Option<Option<FolderId>>,
  pub child_order: Option<i32>,
  pub deleted: Option<bool>,
  pub updated: Option<Option<DateTime<Utc>>>,
}
