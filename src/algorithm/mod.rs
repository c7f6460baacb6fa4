//! Algorithm identifiers from the JWT `alg` header
//!
//! Known JWA names map to dedicated variants. Any other value is kept as
//! [`Algorithm::Other`] so unregistered or private algorithms survive a
//! parse/encode cycle unchanged.

/// Algorithm identifier from the JWT header
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// HMAC with SHA-256
    HS256,
    /// HMAC with SHA-384
    HS384,
    /// HMAC with SHA-512
    HS512,

    /// RSASSA-PKCS1-v1_5 with SHA-256
    RS256,
    /// RSASSA-PKCS1-v1_5 with SHA-384
    RS384,
    /// RSASSA-PKCS1-v1_5 with SHA-512
    RS512,

    /// RSASSA-PSS with SHA-256
    PS256,
    /// RSASSA-PSS with SHA-384
    PS384,
    /// RSASSA-PSS with SHA-512
    PS512,

    /// ECDSA with P-256 and SHA-256
    ES256,
    /// ECDSA with P-384 and SHA-384
    ES384,
    /// ECDSA with P-521 and SHA-512
    ES512,

    /// Edwards-curve signatures (Ed25519, Ed448)
    EdDSA,

    /// Unsecured JWT (`"none"`)
    None,

    /// Any name not listed above, stored verbatim
    Other(String),
}

impl Algorithm {
    /// Wire name as it appears in the `alg` header
    pub fn as_str(&self) -> &str {
        match self {
            Algorithm::HS256 => "HS256",
            Algorithm::HS384 => "HS384",
            Algorithm::HS512 => "HS512",
            Algorithm::RS256 => "RS256",
            Algorithm::RS384 => "RS384",
            Algorithm::RS512 => "RS512",
            Algorithm::PS256 => "PS256",
            Algorithm::PS384 => "PS384",
            Algorithm::PS512 => "PS512",
            Algorithm::ES256 => "ES256",
            Algorithm::ES384 => "ES384",
            Algorithm::ES512 => "ES512",
            Algorithm::EdDSA => "EdDSA",
            Algorithm::None => "none",
            Algorithm::Other(name) => name,
        }
    }

    /// Check if this is the unsecured `"none"` algorithm
    pub fn is_none(&self) -> bool {
        matches!(self, Algorithm::None)
    }

    /// Check if algorithm is HMAC-based (symmetric)
    pub fn is_symmetric(&self) -> bool {
        matches!(self, Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512)
    }

    /// Check if the name is a registered algorithm rather than [`Algorithm::Other`]
    pub fn is_known(&self) -> bool {
        !matches!(self, Algorithm::Other(_))
    }
}

impl From<&str> for Algorithm {
    fn from(s: &str) -> Self {
        match s {
            "HS256" => Algorithm::HS256,
            "HS384" => Algorithm::HS384,
            "HS512" => Algorithm::HS512,
            "RS256" => Algorithm::RS256,
            "RS384" => Algorithm::RS384,
            "RS512" => Algorithm::RS512,
            "PS256" => Algorithm::PS256,
            "PS384" => Algorithm::PS384,
            "PS512" => Algorithm::PS512,
            "ES256" => Algorithm::ES256,
            "ES384" => Algorithm::ES384,
            "ES512" => Algorithm::ES512,
            "EdDSA" => Algorithm::EdDSA,
            "none" => Algorithm::None,
            other => Algorithm::Other(other.to_string()),
        }
    }
}

impl From<String> for Algorithm {
    fn from(s: String) -> Self {
        match Algorithm::from(s.as_str()) {
            Algorithm::Other(_) => Algorithm::Other(s),
            known => known,
        }
    }
}

impl std::str::FromStr for Algorithm {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Algorithm::from(s))
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
