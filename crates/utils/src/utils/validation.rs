use crate::error::{WorkboardErrorType, WorkboardResult};
use once_cell::sync::Lazy;
use regex::Regex;

#[allow(clippy::expect_used)]
static VALID_EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("compile email regex")
});

const NICKNAME_MIN_LENGTH: usize = 3;
const NICKNAME_MAX_LENGTH: usize = 255;

pub fn check_nickname(nickname: &str) -> WorkboardResult<()> {
  let length = nickname.trim().chars().count();
  if !(NICKNAME_MIN_LENGTH..=NICKNAME_MAX_LENGTH).contains(&length) {
    Err(WorkboardErrorType::InvalidNickname.into())
  } else {
    Ok(())
  }
}

pub fn check_email(email: &str) -> WorkboardResult<()> {
  if !VALID_EMAIL_REGEX.is_match(email) {
    Err(WorkboardErrorType::InvalidEmailAddress(email.to_string()).into())
  } else {
    Ok(())
  }
}

pub fn password_length_check(pass: &str) -> WorkboardResult<()> {
  if !(10..=60).contains(&pass.chars().count()) {
    Err(WorkboardErrorType::InvalidPassword.into())
  } else {
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::{check_email, check_nickname, password_length_check};

  #[test]
  fn test_valid_email() {
    assert!(check_email("gavin@workboard.example.com").is_ok());
    assert!(check_email("first.last+tag@mail.co").is_ok());
    assert!(check_email("no-at-sign").is_err());
    assert!(check_email("spaces in@mail.com").is_err());
    assert!(check_email("missing@tld").is_err());
  }

  #[test]
  fn test_valid_nickname() {
    assert!(check_nickname("gavin").is_ok());
    assert!(check_nickname("gw").is_err());
    assert!(check_nickname("  a  ").is_err());
    assert!(check_nickname(&"x".repeat(256)).is_err());
  }

  #[test]
  fn test_password_length() {
    assert!(password_length_check("1234567890").is_ok());
    assert!(password_length_check("short").is_err());
    assert!(password_length_check(&"p".repeat(61)).is_err());
  }
}
