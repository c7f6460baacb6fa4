use crate::error::{Error, Result};
use crate::token::{Header, Token};
use crate::utils::base64url;

/// Header and claims assembled into a signing input, waiting for a signature
///
/// The signature itself is produced elsewhere (HSM, KMS, a crypto crate);
/// this type only lays out the bytes to sign and then attaches the result.
///
/// ```
/// use jwtparts::{Algorithm, Header, Token, UnsignedToken};
///
/// let unsigned = UnsignedToken::new(Header::new(Algorithm::HS256), r#"{"sub":"alice"}"#)?;
/// let signature = [0u8; 32]; // computed over unsigned.signing_input()
///
/// let token = unsigned.with_signature(signature);
/// assert_eq!(Token::parse(token.as_str())?, token);
/// # Ok::<(), jwtparts::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsignedToken {
    header: Header,
    claims: Vec<u8>,
    signing_input: String,
    dot1: usize,
}

impl UnsignedToken {
    /// Create from a header and raw claims JSON
    ///
    /// The claims bytes are encoded as given; they are not checked for valid JSON.
    /// A header with an empty algorithm name is rejected with
    /// [`Error::HeaderAlgorithmMissing`], as the parser would reject the result.
    pub fn new(header: Header, claims: impl AsRef<[u8]>) -> Result<Self> {
        if header.algorithm().as_str().is_empty() {
            return Err(Error::HeaderAlgorithmMissing);
        }

        let claims = claims.as_ref().to_vec();

        let mut signing_input = header.encode();
        let dot1 = signing_input.len();
        signing_input.push('.');
        signing_input.push_str(&base64url::encode_bytes(&claims));

        Ok(Self {
            header,
            claims,
            signing_input,
            dot1,
        })
    }

    /// Create from a header and a serializable claims value
    pub fn from_claims<T>(header: Header, claims: &T) -> Result<Self>
    where
        T: miniserde::Serialize,
    {
        Self::new(header, miniserde::json::to_string(claims))
    }

    /// Get the header
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Claims JSON as it will appear in the token
    pub fn claims(&self) -> &[u8] {
        &self.claims
    }

    /// The bytes a signature must be computed over
    pub fn signing_input(&self) -> &str {
        &self.signing_input
    }

    /// Attach a signature and produce the compact token
    pub fn with_signature(self, signature: impl AsRef<[u8]>) -> Token {
        let signature = signature.as_ref().to_vec();

        let mut raw = self.signing_input;
        let dot2 = raw.len();
        raw.push('.');
        raw.push_str(&base64url::encode_bytes(&signature));

        Token::from_parts(raw, self.dot1, dot2, self.header, self.claims, signature)
    }
}
