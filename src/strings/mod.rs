//! String helpers: escaping, trimming, splitting and base conversion.
//!
//! All of them are total except [`bin2hex`], which rejects malformed input
//! with a [`StringError`].

pub mod convert;
pub mod error;
pub mod escape;
pub mod split;
pub mod trim;

pub use convert::bin2hex;
pub use error::StringError;
pub use escape::addslashes;
pub use split::explode;
pub use trim::{ltrim, rtrim, trim};
