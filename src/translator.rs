//! Error code translation
//!
//! Resolves raw error code strings to human-readable descriptions.
//! Both lookups are pure reads of the static code table and are safe to call
//! from any thread.

use crate::codes::ErrorCode;

/// Translates an error code into its description.
///
/// Unknown codes (including the empty string) are returned unchanged, so the
/// result is always displayable.
pub fn translate(code: &str) -> &str {
    maybe_translate(code).unwrap_or(code)
}

/// Translates an error code into its description, or `None` if the code is
/// not a known Binaris error code.
pub fn maybe_translate(code: &str) -> Option<&'static str> {
    ErrorCode::lookup(code).map(ErrorCode::description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_known_codes() {
        assert_eq!(translate("ERR_BAD_KEY"), "Invalid API key");
        assert_eq!(translate("ERR_INTERNAL"), "Internal Binaris server error");
        assert_eq!(translate("ERR_NO_REQ_ID"), "Missing request ID header");
        assert_eq!(translate("ERR_NO_SUCH_FUNCTION"), "No such function");
        assert_eq!(translate("ERR_PAYLOAD_TOO_LARGE"), "Payload too large");
        assert_eq!(
            translate("ERR_NO_BACKEND"),
            "Could not connect to Binaris backend"
        );
    }

    #[test]
    fn test_translate_unknown_is_identity() {
        assert_eq!(translate("ERR_TOTALLY_UNKNOWN"), "ERR_TOTALLY_UNKNOWN");
        assert_eq!(translate("err_bad_key"), "err_bad_key");
        assert_eq!(translate(""), "");
    }

    #[test]
    fn test_maybe_translate_known_codes() {
        for code in ErrorCode::ALL {
            assert_eq!(maybe_translate(code.as_str()), Some(code.description()));
        }
    }

    #[test]
    fn test_maybe_translate_unknown_is_none() {
        assert_eq!(maybe_translate("ERR_TOTALLY_UNKNOWN"), None);
        assert_eq!(maybe_translate(""), None);
    }

    #[test]
    fn test_repeated_calls_are_stable() {
        for _ in 0..3 {
            assert_eq!(translate("ERR_BAD_KEY"), "Invalid API key");
            assert_eq!(maybe_translate("ERR_NOPE"), None);
        }
    }
}
