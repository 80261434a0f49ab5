pub mod login;
pub mod verify_email;
