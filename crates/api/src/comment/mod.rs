pub mod add_like;
pub mod remove_like;
