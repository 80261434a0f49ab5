#[cfg(feature = "full")]
pub mod comment_view;
pub mod folder_tree;
pub mod structs;
#[cfg(feature = "full")]
pub mod user_view;
