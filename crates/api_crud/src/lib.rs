pub mod account;
pub mod comment;
pub mod folder;
pub mod job;
pub mod user;
