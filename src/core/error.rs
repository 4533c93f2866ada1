/// connuri Error Module
///
/// This module defines the error type returned by the top-level `resolve`
/// entry point. The low-level operations (`classify`, `extract_credentials`)
/// deliberately signal failure through absence instead of errors; the typed
/// variants here exist for callers that want the validation rules applied
/// for them.
use thiserror::Error;

/// Error type for connection-URI resolution.
///
/// Covers the three failure classes a caller must handle before using a
/// parsed connection:
/// - The input does not match the URI grammar at all
/// - The dialect token maps to no supported database family
/// - The grammar matched but the host component is empty
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConnUriError {
    /// Input does not conform to the connection-URI grammar
    #[error("Parse error: input does not match the connection URI grammar")]
    NoMatch,

    /// Grammar matched but the dialect token is not a supported database
    #[error("Dialect error: unrecognized dialect token '{0}'")]
    UnrecognizedDialect(String),

    /// Grammar matched with an empty host component
    #[error("Host error: connection URI has an empty host")]
    MissingHost,
}

/// Type alias for Result to use ConnUriError as the error type.
pub type Result<T> = std::result::Result<T, ConnUriError>;
