use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use uuid::Uuid;

/// Create a comment on a job, optionally as a reply below `parent_uid`.
#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct CreateComment {
  pub content: String,
  pub job_uid: Uuid,
  pub parent_uid: Option<Uuid>,
  /// Root of the thread the comment belongs to.
  pub first_parent_uid: Option<Uuid>,
}

/// Edit a comment you wrote.
#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct EditComment {
  pub content: Option<String>,
}
