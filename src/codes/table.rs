//! Error code table
//!
//! Process-wide, read-only mapping from wire identifiers to error codes.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::types::ErrorCode;

/// Static code table, built on first access and never mutated afterwards.
pub static ERROR_CODE_TABLE: LazyLock<HashMap<&'static str, ErrorCode>> = LazyLock::new(|| {
    let mut table = HashMap::with_capacity(ErrorCode::ALL.len());
    for code in ErrorCode::ALL {
        table.insert(code.as_str(), code);
    }
    table
});
