use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use uuid::Uuid;
use workboard_db_schema::source::user::User;

/// The authenticated user attached to a request.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserView {
  pub user: User,
}

/// A comment with all its references resolved to public identifiers.
#[skip_serializing_none]
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct CommentView {
  pub uid: Uuid,
  pub content: String,
  pub creator_uid: Uuid,
  pub job_uid: Uuid,
  pub parent_uid: Option<Uuid>,
  pub first_parent_uid: Option<Uuid>,
  /// Everyone who liked the comment.
  pub users_likes: Vec<Uuid>,
  pub published: DateTime<Utc>,
  pub updated: Option<DateTime<Utc>>,
}

/// A folder with its subfolders nested below it.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct FolderTreeNode {
  pub uid: Uuid,
  pub name: String,
  pub child_order: i32,
  pub children: Vec<FolderTreeNode>,
}
