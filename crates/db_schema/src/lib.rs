#[macro_use]
extern crate diesel;

pub mod impls;
pub mod newtypes;
pub mod schema;
pub mod schema_setup;
pub mod source;
pub mod traits;
pub mod utils;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(
  EnumString, Display, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, Hash,
)]
/// A listing type for post queries.
pub enum ListingType {
  /// Every post on the site.
  #[default]
  All,
  /// Posts by authors the logged-in person follows.
  Subscribed,
}

#[macro_export]
macro_rules! assert_length {
  ($len:expr, $vec:expr) => {{
    assert_eq!($len, $vec.len(), "Vec has wrong length: {:?}", $vec)
  }};
}
