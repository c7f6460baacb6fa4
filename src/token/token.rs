//! The `Token` type: an immutable view over a compact JWT
//!
//! A `Token` owns the original compact string and remembers where its two
//! delimiters are. Segment accessors hand out borrowed slices of that string,
//! so the signing input a verifier sees is exactly the bytes that arrived on
//! the wire, never a re-encoding of the decoded values.

use crate::error::{ClaimsDecodeError, ClaimsErrorKind};
use crate::token::Header;

/// A parsed, unverified JWT
///
/// Obtained from [`Token::parse`] or [`UnsignedToken::with_signature`](crate::UnsignedToken::with_signature).
/// Nothing about the signature or the claims has been checked; this type only
/// guarantees the token is structurally sound.
///
/// # Examples
///
/// Handing the signing input to a verifier:
///
/// ```
/// use jwtparts::Token;
///
/// let token = Token::parse(
///     "eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiJhbGljZSJ9.c2ln",
/// )?;
///
/// assert_eq!(token.header_part(), "eyJhbGciOiJIUzI1NiJ9");
/// assert_eq!(token.payload_part(), "eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiJhbGljZSJ9");
/// assert_eq!(token.signature(), b"sig");
/// # Ok::<(), jwtparts::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    raw: String,
    dot1: usize,
    dot2: usize,
    header: Header,
    claims: Vec<u8>,
    signature: Vec<u8>,
}

impl Token {
    /// Assemble a token from already decoded parts (internal use)
    ///
    /// Callers must pass the offsets of the only two `.` characters in `raw`.
    pub(crate) fn from_parts(
        raw: String,
        dot1: usize,
        dot2: usize,
        header: Header,
        claims: Vec<u8>,
        signature: Vec<u8>,
    ) -> Self {
        debug_assert!(dot1 < dot2 && dot2 < raw.len());
        debug_assert_eq!(raw.as_bytes()[dot1], b'.');
        debug_assert_eq!(raw.as_bytes()[dot2], b'.');

        Self {
            raw,
            dot1,
            dot2,
            header,
            claims,
            signature,
        }
    }

    /// The full compact token
    pub fn as_bytes(&self) -> &[u8] {
        self.raw.as_bytes()
    }

    /// The full compact token as text
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Get the decoded header
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Get the decoded claims, still JSON-encoded
    pub fn claims(&self) -> &[u8] {
        &self.claims
    }

    /// Get the decoded signature bytes
    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    /// Header segment (Base64URL), as received
    pub fn header_part(&self) -> &str {
        &self.raw[..self.dot1]
    }

    /// Claims segment (Base64URL), as received
    pub fn claims_part(&self) -> &str {
        &self.raw[self.dot1 + 1..self.dot2]
    }

    /// Header and claims segments with their delimiter
    ///
    /// This is the signing input: the exact bytes a signature is computed
    /// over and must be verified against.
    pub fn payload_part(&self) -> &str {
        &self.raw[..self.dot2]
    }

    /// Signature segment (Base64URL), as received
    pub fn signature_part(&self) -> &str {
        &self.raw[self.dot2 + 1..]
    }

    /// Decode the claims into `T`
    ///
    /// Can be called any number of times with different target types. The
    /// token is left untouched, and on failure no value is produced.
    ///
    /// ```
    /// use jwtparts::Token;
    /// use miniserde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct Subject {
    ///     sub: String,
    /// }
    ///
    /// let token = Token::parse("eyJhbGciOiJub25lIn0.eyJzdWIiOiJhbGljZSJ9.")?;
    /// let claims: Subject = token.decode_claims()?;
    /// assert_eq!(claims.sub, "alice");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn decode_claims<T>(&self) -> Result<T, ClaimsDecodeError>
    where
        T: miniserde::Deserialize,
    {
        let json = std::str::from_utf8(&self.claims).map_err(ClaimsDecodeError::utf8)?;

        miniserde::json::from_str(json).map_err(|e| {
            // Tell syntax errors apart from type mismatches
            let kind = match miniserde::json::from_str::<miniserde::json::Value>(json) {
                Ok(_) => ClaimsErrorKind::Shape,
                Err(_) => ClaimsErrorKind::Syntax,
            };
            ClaimsDecodeError::new(kind, e)
        })
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl AsRef<[u8]> for Token {
    fn as_ref(&self) -> &[u8] {
        self.raw.as_bytes()
    }
}
