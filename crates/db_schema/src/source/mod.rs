pub mod account;
pub mod comment;
pub mod email_verification;
pub mod folder;
pub mod job;
pub mod password_reset_request;
pub mod user;
