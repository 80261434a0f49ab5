use cfg_if::cfg_if;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use strum::{Display, EnumIter};

#[derive(Display, Debug, Serialize, Deserialize, Clone, PartialEq, Eq, EnumIter, Hash)]
#[serde(tag = "error", content = "message", rename_all = "snake_case")]
#[non_exhaustive]
pub enum WorkboardErrorType {
  NotFound,
  NotLoggedIn,
  IncorrectLogin,
  AuthCookieInsecure,
  NotAnAdmin,
  NoCommentEditAllowed,
  MaxCommentDepthReached,
  EmailAlreadyExists,
  EmailNotVerified,
  NoPasswordSet,
  PasswordResetLimitReached,
  InvalidNickname,
  InvalidEmailAddress(String),
  /// Password must be between 10 and 60 characters
  InvalidPassword,
  NoEmailSetup,
  EmailSmtpServerNeedsAPort,
  EmailSendFailed,
  CouldntCreateComment,
  CouldntUpdateComment,
  CouldntLikeComment,
  CouldntCreateUser,
  CouldntUpdateUser,
  CouldntCreateAccount,
  CouldntCreateFolder,
  CouldntUpdateFolder,
  CouldntCreateJob,
  WebsocketOperationUnknown(String),
  Unknown(String),
}

cfg_if! {
  if #[cfg(feature = "full")] {

    use std::{fmt, backtrace::Backtrace};
    pub type WorkboardResult<T> = Result<T, WorkboardError>;

    pub struct WorkboardError {
      pub error_type: WorkboardErrorType,
      pub inner: anyhow::Error,
      pub context: Backtrace,
    }

    impl<T> From<T> for WorkboardError
    where
      T: Into<anyhow::Error>,
    {
      fn from(t: T) -> Self {
        let cause = t.into();
        let error_type = match cause.downcast_ref::<diesel::result::Error>() {
          Some(&diesel::NotFound) => WorkboardErrorType::NotFound,
          _ => WorkboardErrorType::Unknown(format!("{}", &cause)),
        };
        WorkboardError {
          error_type,
          inner: cause,
          context: Backtrace::capture(),
        }
      }
    }

    impl Debug for WorkboardError {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkboardError")
         .field("message", &self.error_type)
         .field("inner", &self.inner)
         .field("context", &self.context)
         .finish()
      }
    }

    impl fmt::Display for WorkboardError {
      fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: ", &self.error_type)?;
        writeln!(f, "{}", self.inner)?;
        fmt::Display::fmt(&self.context, f)
      }
    }

    impl actix_web::error::ResponseError for WorkboardError {
      fn status_code(&self) -> actix_web::http::StatusCode {
        match self.error_type {
          WorkboardErrorType::NotFound => actix_web::http::StatusCode::NOT_FOUND,
          WorkboardErrorType::IncorrectLogin
          | WorkboardErrorType::NotLoggedIn => actix_web::http::StatusCode::UNAUTHORIZED,
          WorkboardErrorType::NotAnAdmin
          | WorkboardErrorType::NoCommentEditAllowed
          | WorkboardErrorType::EmailNotVerified
          | WorkboardErrorType::NoPasswordSet => actix_web::http::StatusCode::FORBIDDEN,
          _ => actix_web::http::StatusCode::BAD_REQUEST,
        }
      }

      fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code()).json(&self.error_type)
      }
    }

    impl From<WorkboardErrorType> for WorkboardError {
      fn from(error_type: WorkboardErrorType) -> Self {
        let inner = anyhow::anyhow!("{}", error_type);
        WorkboardError {
          error_type,
          inner,
          context: Backtrace::capture(),
        }
      }
    }

    pub trait WorkboardErrorExt<T, E: Into<anyhow::Error>> {
      fn with_workboard_type(self, error_type: WorkboardErrorType) -> WorkboardResult<T>;
    }

    impl<T, E: Into<anyhow::Error>> WorkboardErrorExt<T, E> for Result<T, E> {
      fn with_workboard_type(self, error_type: WorkboardErrorType) -> WorkboardResult<T> {
        self.map_err(|error| WorkboardError {
          error_type,
          inner: error.into(),
          context: Backtrace::capture(),
        })
      }
    }

    pub trait WorkboardErrorExt2<T> {
      fn with_workboard_type(self, error_type: WorkboardErrorType) -> WorkboardResult<T>;
      fn into_anyhow(self) -> Result<T, anyhow::Error>;
    }

    impl<T> WorkboardErrorExt2<T> for WorkboardResult<T> {
      fn with_workboard_type(self, error_type: WorkboardErrorType) -> WorkboardResult<T> {
        self.map_err(|mut e| {
          e.error_type = error_type;
          e
        })
      }
      // this function can't be an impl From or similar because it would conflict with one of the other broad Into<> implementations
      fn into_anyhow(self) -> Result<T, anyhow::Error> {
        self.map_err(|e| e.inner)
      }
    }

    #[cfg(test)]
    mod tests {
      #![allow(clippy::unwrap_used)]
      use super::*;
      use actix_web::{body::MessageBody, ResponseError};
      use pretty_assertions::assert_eq;

      #[test]
      fn deserializes_no_message() -> WorkboardResult<()> {
        let err = WorkboardError::from(WorkboardErrorType::NotAnAdmin).error_response();
        let json = String::from_utf8(err.into_body().try_into_bytes().unwrap_or_default().to_vec())?;
        assert_eq!(&json, "{\"error\":\"not_an_admin\"}");

        Ok(())
      }

      #[test]
      fn deserializes_with_message() -> WorkboardResult<()> {
        let err_type = WorkboardErrorType::InvalidEmailAddress(String::from("reason"));
        let err = WorkboardError::from(err_type).error_response();
        let json = String::from_utf8(err.into_body().try_into_bytes().unwrap_or_default().to_vec())?;
        assert_eq!(
          &json,
          "{\"error\":\"invalid_email_address\",\"message\":\"reason\"}"
        );

        Ok(())
      }

      #[test]
      fn test_convert_diesel_errors() {
        let not_found_error = WorkboardError::from(diesel::NotFound);
        assert_eq!(WorkboardErrorType::NotFound, not_found_error.error_type);
        assert_eq!(404, not_found_error.status_code());

        let other_error = WorkboardError::from(diesel::result::Error::NotInTransaction);
        assert!(matches!(other_error.error_type, WorkboardErrorType::Unknown{..}));
        assert_eq!(400, other_error.status_code());
      }

      #[test]
      fn test_status_codes_follow_error_class() {
        assert_eq!(
          401,
          WorkboardError::from(WorkboardErrorType::IncorrectLogin).status_code()
        );
        assert_eq!(
          403,
          WorkboardError::from(WorkboardErrorType::NoCommentEditAllowed).status_code()
        );
        assert_eq!(
          400,
          WorkboardError::from(WorkboardErrorType::MaxCommentDepthReached).status_code()
        );
      }
    }
  }
}
