pub mod comment;
pub mod group;
pub mod person;
pub mod person_follower;
pub mod post;
