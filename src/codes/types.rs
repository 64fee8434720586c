//! Error code types
//!
//! Typed representation of the well-known Binaris error codes.

use std::fmt;
use std::str::FromStr;

use super::table::ERROR_CODE_TABLE;
use crate::error::ParseErrorCodeError;

/// A well-known Binaris error code.
///
/// Each variant corresponds to one wire identifier such as `ERR_BAD_KEY`.
/// Identifiers are case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    BadKey,
    Internal,
    NoReqId,
    NoSuchFunction,
    OutdatedClient,
    PayloadTooLarge,
    NoBackend, // Raised by the client, never returned by the backend
}

/// Where an error code originates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeOrigin {
    /// Returned by the Binaris backend in an error response body.
    Backend,
    /// Produced locally by the client before or instead of a backend call.
    Client,
}

impl ErrorCode {
    /// Every known code, in table order.
    pub const ALL: [ErrorCode; 7] = [
        ErrorCode::BadKey,
        ErrorCode::Internal,
        ErrorCode::NoReqId,
        ErrorCode::NoSuchFunction,
        ErrorCode::OutdatedClient,
        ErrorCode::PayloadTooLarge,
        ErrorCode::NoBackend,
    ];

    /// The wire identifier of this code.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::BadKey => "ERR_BAD_KEY",
            ErrorCode::Internal => "ERR_INTERNAL",
            ErrorCode::NoReqId => "ERR_NO_REQ_ID",
            ErrorCode::NoSuchFunction => "ERR_NO_SUCH_FUNCTION",
            ErrorCode::OutdatedClient => "ERR_OUTDATED_CLIENT",
            ErrorCode::PayloadTooLarge => "ERR_PAYLOAD_TOO_LARGE",
            ErrorCode::NoBackend => "ERR_NO_BACKEND",
        }
    }

    /// Human-readable description of this code.
    ///
    /// Descriptions start with a capital letter and carry no trailing
    /// punctuation.
    pub const fn description(self) -> &'static str {
        match self {
            ErrorCode::BadKey => "Invalid API key",
            ErrorCode::Internal => "Internal Binaris server error",
            ErrorCode::NoReqId => "Missing request ID header",
            ErrorCode::NoSuchFunction => "No such function",
            ErrorCode::OutdatedClient => {
                "Client version is out of date, please update using \"npm install -g binaris\""
            }
            ErrorCode::PayloadTooLarge => "Payload too large",
            ErrorCode::NoBackend => "Could not connect to Binaris backend",
        }
    }

    /// Whether this code comes from the backend or is raised locally by the client.
    pub const fn origin(self) -> CodeOrigin {
        match self {
            ErrorCode::NoBackend => CodeOrigin::Client,
            _ => CodeOrigin::Backend,
        }
    }

    /// Looks up a code by its exact wire identifier.
    pub fn lookup(code: &str) -> Option<ErrorCode> {
        ERROR_CODE_TABLE.get(code).copied()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorCode {
    type Err = ParseErrorCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorCode::lookup(s).ok_or_else(|| ParseErrorCodeError::Unknown(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_matches_display() {
        for code in ErrorCode::ALL {
            let parsed: ErrorCode = code.to_string().parse().unwrap();
            assert_eq!(parsed, code);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let err = "err_bad_key".parse::<ErrorCode>().unwrap_err();
        assert_eq!(err, ParseErrorCodeError::Unknown("err_bad_key".to_string()));
    }

    #[test]
    fn test_parse_rejects_padding() {
        assert!(" ERR_INTERNAL".parse::<ErrorCode>().is_err());
        assert!("".parse::<ErrorCode>().is_err());
    }

    #[test]
    fn test_only_no_backend_is_client_local() {
        for code in ErrorCode::ALL {
            let expected = if code == ErrorCode::NoBackend {
                CodeOrigin::Client
            } else {
                CodeOrigin::Backend
            };
            assert_eq!(code.origin(), expected, "{}", code);
        }
    }

    #[test]
    fn test_outdated_client_description() {
        assert_eq!(
            ErrorCode::OutdatedClient.description(),
            r#"Client version is out of date, please update using "npm install -g binaris""#
        );
    }
}
