use crate::algorithm::Algorithm;
use crate::error::{Error, Result};
use crate::utils::base64url;
use miniserde::Deserialize;

/// JWT header structure
///
/// Holds the `alg`, `typ` and `cty` parameters. The JSON form produced by
/// [`Header::to_json`] always lists `alg` first, then `typ`, then `cty`, and
/// leaves out optional fields that are unset or empty, so two equal headers
/// always encode to the same bytes.
///
/// ```
/// use jwtparts::{Algorithm, Header};
///
/// let header = Header::new(Algorithm::HS256).with_token_type("JWT");
/// assert_eq!(header.to_json(), r#"{"alg":"HS256","typ":"JWT"}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    algorithm: Algorithm,
    // Never `Some("")`: empty values are stored as `None`
    token_type: Option<String>,
    content_type: Option<String>,
}

/// Wire shape of the header; unknown fields are ignored
#[derive(Deserialize)]
struct RawHeader {
    #[serde(rename = "alg")]
    algorithm: String,

    #[serde(rename = "typ")]
    token_type: Option<String>,

    #[serde(rename = "cty")]
    content_type: Option<String>,
}

impl Header {
    /// Create a header with only the `alg` parameter set
    pub fn new(algorithm: impl Into<Algorithm>) -> Self {
        Self {
            algorithm: algorithm.into(),
            token_type: None,
            content_type: None,
        }
    }

    /// Set the `typ` parameter; an empty string leaves it unset
    pub fn with_token_type(mut self, token_type: impl Into<String>) -> Self {
        self.token_type = non_empty(token_type.into());
        self
    }

    /// Set the `cty` parameter; an empty string leaves it unset
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = non_empty(content_type.into());
        self
    }

    /// Get the algorithm
    pub fn algorithm(&self) -> &Algorithm {
        &self.algorithm
    }

    /// Get the token type (`typ`) if set
    pub fn token_type(&self) -> Option<&str> {
        self.token_type.as_deref()
    }

    /// Get the content type (`cty`) if set
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Canonical JSON encoding
    ///
    /// Field order is `alg`, `typ`, `cty`. An empty algorithm name is emitted
    /// as `"alg":""`; the parser never produces such a header.
    pub fn to_json(&self) -> String {
        let mut json = String::with_capacity(48);

        json.push_str(r#"{"alg":"#);
        json.push_str(&miniserde::json::to_string(self.algorithm.as_str()));

        if let Some(token_type) = self.token_type() {
            json.push_str(r#","typ":"#);
            json.push_str(&miniserde::json::to_string(token_type));
        }
        if let Some(content_type) = self.content_type() {
            json.push_str(r#","cty":"#);
            json.push_str(&miniserde::json::to_string(content_type));
        }

        json.push('}');
        json
    }

    /// Base64URL encoding of [`Header::to_json`], the first segment of a compact token
    pub fn encode(&self) -> String {
        base64url::encode(&self.to_json())
    }

    /// Parse a header from its decoded JSON form
    pub(crate) fn from_json(json: &str) -> Result<Self> {
        let raw: RawHeader = miniserde::json::from_str(json)
            .map_err(|e| Error::FormatInvalidJson(format!("Failed to parse header: {e}")))?;

        if raw.algorithm.is_empty() {
            return Err(Error::HeaderAlgorithmMissing);
        }

        Ok(Self {
            algorithm: Algorithm::from(raw.algorithm),
            token_type: raw.token_type.and_then(non_empty),
            content_type: raw.content_type.and_then(non_empty),
        })
    }
}

impl std::fmt::Display for Header {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_json())
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}
