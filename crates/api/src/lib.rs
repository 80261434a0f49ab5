pub mod comment;
pub mod password;
pub mod user;
