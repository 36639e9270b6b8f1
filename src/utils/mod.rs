//! Utility modules.

pub mod encoding;
pub mod time;

pub use encoding::encode_to_urlsafe_base64;
pub use time::{MISSING, now_millis, to_utc_iso8601};
