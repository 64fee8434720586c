//! Error code catalogue
//!
//! Defines the closed set of Binaris error codes and the immutable table
//! mapping each code to its human-readable description.

pub mod table;
pub mod types;

pub use table::ERROR_CODE_TABLE;
pub use types::{CodeOrigin, ErrorCode};
