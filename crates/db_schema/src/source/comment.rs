use crate::newtypes::{CommentId, JobId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use uuid::Uuid;

#[cfg(feature = "full")]
use crate::schema::{comment, comment_like};

/// A comment on a job, optionally nested below another comment.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "full", derive(Queryable, Selectable, Identifiable))]
#[cfg_attr(feature = "full", diesel(table_name = comment))]
pub struct Comment {
  pub id: CommentId,
  pub uid: Uuid,
  pub creator_id: UserId,
  pub job_id: JobId,
  pub parent_id: Option<CommentId>,
  /// The root of the thread this comment lives in.
  pub first_parent_id: Option<CommentId>,
  pub content: String,
  pub deleted: bool,
  pub published: DateTime<Utc>,
  pub updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "full", derive(Insertable))]
#[cfg_attr(feature = "full", diesel(table_name = comment))]
pub struct CommentInsertForm {
  pub uid: Uuid,
  pub creator_id: UserId,
  pub job_id: JobId,
  pub parent_id: Option<CommentId>,
  pub first_parent_id: Option<CommentId>,
  pub content: String,
  pub published: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "full", derive(AsChangeset))]
#[cfg_attr(feature = "full", diesel(table_name = comment))]
pub struct CommentUpdateForm {
  pub content: Option<String>,
  pub deleted: Option<bool>,
  pub updated: Option<Option<DateTime<Utc>>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "full", derive(Queryable, Selectable, Identifiable, Associations))]
#[cfg_attr(feature = "full", diesel(belongs_to(Comment)))]
#[cfg_attr(feature = "full", diesel(table_name = comment_like))]
pub struct CommentLike {
  pub id: i32,
  pub user_id: UserId,
  pub comment_id: CommentId,
  pub published: DateTime<Utc>,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "full", derive(Insertable, AsChangeset))]
#[cfg_attr(feature = "full", diesel(table_name = comment_like))]
pub struct CommentLikeForm {
  pub user_id: UserId,
  pub comment_id: CommentId,
  pub published: DateTime<Utc>,
}
