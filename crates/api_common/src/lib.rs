pub mod account;
pub mod comment;
#[cfg(feature = "full")]
pub mod context;
pub mod folder;
pub mod job;
pub mod password;
pub mod user;
#[cfg(feature = "full")]
pub mod utils;

pub extern crate workboard_db_schema;
pub extern crate workboard_db_views;
pub extern crate workboard_utils;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SuccessResponse {
  pub success: bool,
}

impl Default for SuccessResponse {
  fn default() -> Self {
    SuccessResponse { success: true }
  }
}
