//! Parser configuration

use crate::limits::{
    MAX_DECODED_CLAIMS_SIZE, MAX_DECODED_HEADER_SIZE, MAX_DECODED_SIGNATURE_SIZE, MAX_TOKEN_LENGTH,
};

/// Size limits applied by [`Token::parse_with`](crate::Token::parse_with)
///
/// Every limit is checked before the affected data is used, so oversized input
/// is rejected without building JSON values from it.
///
/// ```
/// use jwtparts::ParseOptions;
///
/// let options = ParseOptions::new()
///     .max_token_length(4096)
///     .max_signature_size(64);
/// assert_eq!(options.token_length_limit(), 4096);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    max_token_length: usize,
    max_header_size: usize,
    max_claims_size: usize,
    max_signature_size: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_token_length: MAX_TOKEN_LENGTH,
            max_header_size: MAX_DECODED_HEADER_SIZE,
            max_claims_size: MAX_DECODED_CLAIMS_SIZE,
            max_signature_size: MAX_DECODED_SIGNATURE_SIZE,
        }
    }
}

impl ParseOptions {
    /// Create options with the default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum length of the compact token string in bytes
    pub fn max_token_length(mut self, bytes: usize) -> Self {
        self.max_token_length = bytes;
        self
    }

    /// Set the maximum size of the decoded header JSON
    pub fn max_header_size(mut self, bytes: usize) -> Self {
        self.max_header_size = bytes;
        self
    }

    /// Set the maximum size of the decoded claims JSON
    pub fn max_claims_size(mut self, bytes: usize) -> Self {
        self.max_claims_size = bytes;
        self
    }

    /// Set the maximum size of the decoded signature
    pub fn max_signature_size(mut self, bytes: usize) -> Self {
        self.max_signature_size = bytes;
        self
    }

    pub fn token_length_limit(&self) -> usize {
        self.max_token_length
    }

    pub fn header_size_limit(&self) -> usize {
        self.max_header_size
    }

    pub fn claims_size_limit(&self) -> usize {
        self.max_claims_size
    }

    pub fn signature_size_limit(&self) -> usize {
        self.max_signature_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_limits() {
        let options = ParseOptions::default();
        assert_eq!(options.token_length_limit(), 64 * 1024);
        assert_eq!(options.header_size_limit(), 8 * 1024);
        assert_eq!(options.claims_size_limit(), 64 * 1024);
        assert_eq!(options.signature_size_limit(), 1024);
    }

    #[test]
    fn test_builder_overrides() {
        let options = ParseOptions::new()
            .max_token_length(10)
            .max_header_size(20)
            .max_claims_size(30)
            .max_signature_size(40);

        assert_eq!(options.token_length_limit(), 10);
        assert_eq!(options.header_size_limit(), 20);
        assert_eq!(options.claims_size_limit(), 30);
        assert_eq!(options.signature_size_limit(), 40);
    }
}
