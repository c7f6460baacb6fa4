use crate::error::{Error, Result};
use crate::options::ParseOptions;
use crate::token::{Header, Token};
use crate::utils::base64url;

impl Token {
    /// Parse a compact JWT with the default [`ParseOptions`]
    ///
    /// # Example
    /// ```
    /// use jwtparts::{Algorithm, Token};
    ///
    /// let token = Token::parse("eyJhbGciOiJIUzI1NiJ9.e30.c2ln")?;
    /// assert_eq!(token.header().algorithm(), &Algorithm::HS256);
    /// assert_eq!(token.claims(), b"{}");
    /// # Ok::<(), jwtparts::Error>(())
    /// ```
    pub fn parse(token: &str) -> Result<Self> {
        Self::parse_with(token, &ParseOptions::default())
    }

    /// Parse a compact JWT with explicit size limits
    ///
    /// The signature is decoded but not verified. The claims are decoded from
    /// Base64URL but their JSON is only looked at by [`Token::decode_claims`].
    pub fn parse_with(token: &str, options: &ParseOptions) -> Result<Self> {
        parse_compact(token, options).inspect_err(|e| {
            tracing::debug!(error = %e, length = token.len(), "rejected compact token");
        })
    }
}

fn parse_compact(token: &str, options: &ParseOptions) -> Result<Token> {
    if token.len() > options.token_length_limit() {
        return Err(Error::TokenTooLarge {
            size: token.len(),
            max: options.token_length_limit(),
        });
    }

    let (dot1, dot2) = find_delimiters(token)?;

    let header_json = base64url::decode_string(&token[..dot1], options.header_size_limit())?;
    let header = Header::from_json(&header_json)?;

    let claims = base64url::decode_bytes(&token[dot1 + 1..dot2], options.claims_size_limit())?;
    let signature = base64url::decode_bytes(&token[dot2 + 1..], options.signature_size_limit())?;

    tracing::trace!(
        alg = %header.algorithm(),
        claims_len = claims.len(),
        signature_len = signature.len(),
        "parsed compact token"
    );

    Ok(Token::from_parts(
        token.to_string(),
        dot1,
        dot2,
        header,
        claims,
        signature,
    ))
}

/// Offsets of the two delimiters; any other count is a format error
fn find_delimiters(token: &str) -> Result<(usize, usize)> {
    let mut dots = token.bytes().enumerate().filter(|&(_, b)| b == b'.').map(|(i, _)| i);

    match (dots.next(), dots.next(), dots.next()) {
        (Some(dot1), Some(dot2), None) => Ok((dot1, dot2)),
        _ => Err(Error::FormatInvalid),
    }
}

impl std::str::FromStr for Token {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Token::parse(s)
    }
}

impl TryFrom<&str> for Token {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Token::parse(s)
    }
}

impl TryFrom<&[u8]> for Token {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let token = std::str::from_utf8(bytes).map_err(|_| Error::FormatInvalid)?;
        Token::parse(token)
    }
}
