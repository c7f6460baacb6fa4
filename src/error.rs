//! Error types for JWT parsing and claims decoding
//!
//! Parsing a compact token can fail in several ways (size, structure,
//! Base64URL, header JSON). Once a [`Token`](crate::Token) exists, the only
//! fallible operation left is decoding its claims into a caller-chosen type,
//! which reports a [`ClaimsDecodeError`].

use thiserror::Error;

/// Errors that can occur while parsing a compact JWT
#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("Token too large: {size} bytes (maximum: {max} bytes)")]
    TokenTooLarge { size: usize, max: usize },

    // ============================================================================
    // Format Errors
    // ============================================================================
    #[error("Invalid JWT format: expected three parts separated by '.'")]
    FormatInvalid,

    #[error("Base64URL decoding failed: {0}")]
    FormatInvalidBase64(String),

    #[error("JSON parsing failed: {0}")]
    FormatInvalidJson(String),

    // ============================================================================
    // Header Errors
    // ============================================================================
    #[error("Header field 'alg' is empty")]
    HeaderAlgorithmMissing,

    // ============================================================================
    // Claims Errors
    // ============================================================================
    #[error(transparent)]
    ClaimsInvalid(#[from] ClaimsDecodeError),
}

/// What went wrong while decoding claims
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimsErrorKind {
    /// Claims bytes are not UTF-8
    Utf8,
    /// Claims bytes are not valid JSON
    Syntax,
    /// Claims are valid JSON but do not fit the requested type
    Shape,
}

impl std::fmt::Display for ClaimsErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClaimsErrorKind::Utf8 => write!(f, "invalid UTF-8"),
            ClaimsErrorKind::Syntax => write!(f, "invalid JSON syntax"),
            ClaimsErrorKind::Shape => write!(f, "JSON does not match the target type"),
        }
    }
}

/// Claims could not be decoded into the requested type
///
/// Returned by [`Token::decode_claims`](crate::Token::decode_claims). The
/// underlying UTF-8 or JSON error is available through
/// [`std::error::Error::source`].
#[derive(Error, Debug, Clone)]
#[error("claims are not valid: {kind}")]
pub struct ClaimsDecodeError {
    kind: ClaimsErrorKind,
    #[source]
    source: DecodeCause,
}

#[derive(Error, Debug, Clone)]
enum DecodeCause {
    #[error(transparent)]
    Utf8(#[from] std::str::Utf8Error),

    #[error(transparent)]
    Json(#[from] miniserde::Error),
}

impl ClaimsDecodeError {
    pub(crate) fn utf8(source: std::str::Utf8Error) -> Self {
        Self {
            kind: ClaimsErrorKind::Utf8,
            source: source.into(),
        }
    }

    pub(crate) fn new(kind: ClaimsErrorKind, source: miniserde::Error) -> Self {
        Self {
            kind,
            source: source.into(),
        }
    }

    /// Category of the failure
    pub fn kind(&self) -> ClaimsErrorKind {
        self.kind
    }
}

/// Result type alias for jwtparts operations
pub type Result<T> = std::result::Result<T, Error>;
