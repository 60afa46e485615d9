pub mod claims;
pub mod error;
pub mod settings;
pub mod utils;

/// Cache-control values attached by the session middleware, depending on
/// whether the request carried credentials.
pub const CACHE_CONTROL_ANON: &str = "public, max-age=60";
pub const CACHE_CONTROL_AUTHED: &str = "private";
