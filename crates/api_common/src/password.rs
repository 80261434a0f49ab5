use serde::{Deserialize, Serialize};
use workboard_utils::sensitive::Sensitive;

/// Set the password of the user named in the route, typically right after
/// the first-login email.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct SetPassword {
  pub password: Sensitive,
}

/// Request a reset link by email. Also the body of the password check.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ResetPasswordEmail {
  pub email: String,
}

/// Replace a password by proving knowledge of the old one.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ResetPassword {
  pub email: String,
  pub old_password: Sensitive,
  pub new_password: Sensitive,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ResetPasswordResponse {
  #[serde(rename = "Result")]
  pub result: String,
}

impl Default for ResetPasswordResponse {
  fn default() -> Self {
    ResetPasswordResponse {
      result: "OK".to_string(),
    }
  }
}
