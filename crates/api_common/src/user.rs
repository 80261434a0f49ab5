use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use uuid::Uuid;
use workboard_db_schema::source::user::User;
use workboard_utils::sensitive::Sensitive;

/// Register a new user.
#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Register {
  pub nickname: String,
  pub email: String,
  pub password: Sensitive,
  pub phone: Option<String>,
}

/// Log into the site with email and password.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Login {
  pub email: Sensitive,
  pub password: Sensitive,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct LoginResponse {
  pub jwt: Sensitive,
}

/// Update your own profile. Only the supplied fields change; an empty
/// phone string clears the stored number.
#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct UpdateUser {
  pub nickname: Option<String>,
  pub phone: Option<String>,
}

/// Which page of users to fetch.
#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListUsers {
  pub page: Option<i64>,
  pub limit: Option<i64>,
}

/// A user as the API exposes it. The password hash and the token
/// validation time never leave the server.
#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct UserResponse {
  pub uid: Uuid,
  pub nickname: String,
  pub email: String,
  pub phone: Option<String>,
  pub admin: bool,
  pub email_verified: bool,
  pub published: DateTime<Utc>,
  pub updated: Option<DateTime<Utc>>,
}

impl From<User> for UserResponse {
  fn from(user: User) -> Self {
    UserResponse {
      uid: user.uid,
      nickname: user.nickname,
      email: user.email,
      phone: user.phone,
      admin: user.admin,
      email_verified: user.email_verified,
      published: user.published,
      updated: user.updated,
    }
  }
}
