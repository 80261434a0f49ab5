pub mod error;
pub mod sensitive;

#[cfg(feature = "full")]
pub mod claims;
#[cfg(feature = "full")]
pub mod email;
#[cfg(feature = "full")]
pub mod settings;
#[cfg(feature = "full")]
pub mod utils;

#[cfg(feature = "full")]
use error::WorkboardError;
#[cfg(feature = "full")]
use futures::Future;
use serde::{Deserialize, Serialize};
use std::fmt;
#[cfg(feature = "full")]
use tracing::Instrument;

pub type ConnectionId = usize;

#[derive(Debug, Clone, Hash, Eq, PartialEq, Deserialize, Serialize)]
pub struct IpAddr(pub String);

impl fmt::Display for IpAddr {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

#[macro_export]
macro_rules! location_info {
  () => {
    format!(
      "None value at {}:{}, column {}",
      file!(),
      line!(),
      column!()
    )
  };
}

/// tokio::spawn, but accepts a future that may fail and also
/// * logs errors
/// * attaches the spawned task to the tracing span of the caller for better logging
#[cfg(feature = "full")]
pub fn spawn_try_task(task: impl Future<Output = Result<(), WorkboardError>> + Send + 'static) {
  tokio::spawn(
    async {
      if let Err(e) = task.await {
        tracing::warn!("error in spawn: {e}");
      }
    }
    .in_current_span(), // this makes sure the inner tracing gets the same context as where spawn was called
  );
}
