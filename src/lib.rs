//! Binaris error codes
//!
//! Translates machine-readable Binaris error codes such as `ERR_BAD_KEY`
//! into human-readable descriptions.
//!
//! ```
//! use binaris_error_codes::{maybe_translate, translate};
//!
//! assert_eq!(translate("ERR_BAD_KEY"), "Invalid API key");
//! assert_eq!(translate("ERR_SOMETHING_ELSE"), "ERR_SOMETHING_ELSE");
//! assert_eq!(maybe_translate("ERR_SOMETHING_ELSE"), None);
//! ```

pub mod cli;
pub mod codes;
pub mod config;
pub mod error;
pub mod translator;
pub mod utils;

pub use codes::{CodeOrigin, ErrorCode};
pub use error::ParseErrorCodeError;
pub use translator::{maybe_translate, translate};
