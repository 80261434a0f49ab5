use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use uuid::Uuid;

/// Post a job, creating the subject comment threads attach to.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct CreateJob {
  pub title: String,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct JobResponse {
  pub uid: Uuid,
  pub title: String,
  pub creator_uid: Uuid,
  pub published: DateTime<Utc>,
  pub updated: Option<DateTime<Utc>>,
}
