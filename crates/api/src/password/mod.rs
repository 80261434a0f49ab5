pub mod check;
pub mod reset;
pub mod send_login_email;
pub mod send_reset_email;
pub mod set;
