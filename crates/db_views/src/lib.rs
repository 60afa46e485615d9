pub mod comment_view;
pub mod local_user_view;
pub mod person_view;
pub mod post_view;
pub mod structs;
