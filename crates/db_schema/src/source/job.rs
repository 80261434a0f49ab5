use crate::newtypes::{JobId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use uuid::Uuid;

#[cfg(feature = "full")]
use crate::schema::job;

/// A job posting, the subject comment threads hang off of.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "full", derive(Queryable, Selectable, Identifiable))]
#[cfg_attr(feature = "full", diesel(table_name = job))]
pub struct Job {
  pub id: JobId,
  pub uid: Uuid,
  pub title: String,
  pub creator_id: UserId,
  pub deleted: bool,
  pub published: DateTime<Utc>,
  pub updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "full", derive(Insertable))]
#[cfg_attr(feature = "full", diesel(table_name = job))]
pub struct JobInsertForm {
  pub uid: Uuid,
  pub title: String,
  pub creator_id: UserId,
  pub published: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "full", derive(AsChangeset))]
#[cfg_attr(feature = "full", diesel(table_name = job))]
pub struct JobUpdateForm {
  pub title: Option<String>,
  pub deleted: Option<bool>,
  pub updated: Option<Option<DateTime<Utc>>>,
}
