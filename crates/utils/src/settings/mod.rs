use crate::error::WorkboardResult;
use once_cell::sync::Lazy;
use std::{env, fs, path::Path};
use structs::Settings;

pub mod structs;

static DEFAULT_CONFIG_FILE: &str = "config/config.hjson";

#[allow(clippy::expect_used)]
pub static SETTINGS: Lazy<Settings> = Lazy::new(|| {
  Settings::init().expect("Failed to load settings file, see the documented defaults in config/defaults.hjson")
});

impl Settings {
  /// Reads config from the configuration file, falling back to compiled-in defaults when the
  /// file does not exist.
  fn init() -> WorkboardResult<Self> {
    let path = Self::get_config_location();
    if Path::new(&path).exists() {
      Ok(deser_hjson::from_str::<Settings>(&fs::read_to_string(&path)?)?)
    } else {
      Ok(Settings::default())
    }
  }

  pub fn get_database_url(&self) -> String {
    match env::var("WORKBOARD_DATABASE_URL") {
      Ok(url) => url,
      Err(_) => self.database.connection.clone(),
    }
  }

  fn get_config_location() -> String {
    env::var("WORKBOARD_CONFIG_LOCATION").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string())
  }

  pub fn get_protocol_string(&self) -> &'static str {
    if self.tls_enabled {
      "https"
    } else {
      "http"
    }
  }

  /// Returns something like `http://localhost` or `https://workboard.example.com`,
  /// with the correct protocol and hostname.
  pub fn get_protocol_and_hostname(&self) -> String {
    format!("{}://{}", self.get_protocol_string(), self.hostname)
  }
}

#[cfg(test)]
mod tests {
  use super::structs::Settings;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_comment_depth_default() {
    let settings = Settings::default();
    assert_eq!(3, settings.comment_max_depth);
  }

  #[test]
  fn test_protocol_and_hostname() {
    let mut settings = Settings::default();
    settings.hostname = String::from("workboard.example.com");
    assert_eq!(
      "https://workboard.example.com",
      settings.get_protocol_and_hostname()
    );
    settings.tls_enabled = false;
    assert_eq!(
      "http://workboard.example.com",
      settings.get_protocol_and_hostname()
    );
  }
}
