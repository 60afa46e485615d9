pub mod comment;
pub mod context;
pub mod group;
pub mod person;
pub mod post;
pub mod utils;

pub use scribe_db_views as db_views;

/// A response where there is nothing useful to return.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct SuccessResponse {
  pub success: bool,
}

impl Default for SuccessResponse {
  fn default() -> Self {
    SuccessResponse { success: true }
  }
}
