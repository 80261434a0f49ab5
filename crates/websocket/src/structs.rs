use serde::{Deserialize, Serialize};
use workboard_utils::sensitive::Sensitive;

/// Sent by a client over the socket to start receiving its notifications.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserJoin {
  pub auth: Sensitive,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserJoinResponse {
  pub joined: bool,
}

/// The fixed payload pushed for every notification.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NotificationResponse {
  pub message: String,
}
