//! # jwtparts - JSON Web Tokens as Byte-Exact Views
//!
//! **jwtparts** parses a JSON Web Token (JWT) in compact serialization and
//! exposes its three segments without performing any cryptography. It is the
//! data-model layer beneath signature algorithms: parse a token, look at its
//! header and claims, then hand the signing input and signature to whatever
//! verifier you trust.
//!
//! ## Overview
//!
//! A compact JWT is three Base64URL segments joined by `.`:
//!
//! ```text
//! base64url(header-json) . base64url(claims-json) . base64url(signature)
//! ```
//!
//! A signature is computed over the first two segments *exactly as they appear
//! on the wire*. Re-encoding decoded values is not guaranteed to reproduce
//! those bytes, so [`Token`] keeps the original string and hands out borrowed
//! slices of it ([`Token::payload_part`] is the signing input), next to the
//! decoded [`Header`], claims bytes and signature bytes.
//!
//! ## Quick Start
//!
//! ```
//! use jwtparts::{Algorithm, Token};
//! use miniserde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Claims {
//!     sub: String,
//!     exp: i64,
//! }
//!
//! let token = Token::parse(
//!     "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.eyJzdWIiOiJhbGljZSIsImV4cCI6MTIzfQ.c2ln",
//! )?;
//!
//! assert_eq!(token.header().algorithm(), &Algorithm::HS256);
//!
//! // Bytes to verify `token.signature()` against
//! let signing_input = token.payload_part();
//! assert!(signing_input.ends_with("MTIzfQ"));
//!
//! let claims: Claims = token.decode_claims()?;
//! assert_eq!(claims.sub, "alice");
//! assert_eq!(claims.exp, 123);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Building Tokens
//!
//! [`UnsignedToken`] lays out `header.claims` for signing and attaches a
//! signature computed elsewhere. [`Header::to_json`] always emits `alg`, then
//! `typ`, then `cty`, omitting empty optional fields:
//!
//! ```
//! use jwtparts::{Algorithm, Header};
//!
//! let header = Header::new(Algorithm::RS256)
//!     .with_token_type("JWT")
//!     .with_content_type("foo");
//! assert_eq!(header.to_json(), r#"{"alg":"RS256","typ":"JWT","cty":"foo"}"#);
//! ```
//!
//! ## What This Crate Does Not Do
//!
//! - No signature computation or verification
//! - No claim validation (`exp`, `nbf`, `aud`, `iss`)
//! - No key management
//!
//! ## References
//!
//! - [RFC 7515](https://datatracker.ietf.org/doc/html/rfc7515) - JSON Web Signature (JWS)
//! - [RFC 7519](https://datatracker.ietf.org/doc/html/rfc7519) - JSON Web Token (JWT)

// Core modules
pub mod error;
pub mod utils;

pub mod algorithm;

// Token types
pub mod token;

// Parser configuration
pub(crate) mod limits;
pub mod options;

// ============================================================================
// PUBLIC API
// ============================================================================

pub use algorithm::Algorithm;
pub use error::{ClaimsDecodeError, ClaimsErrorKind, Error, Result};
pub use options::ParseOptions;
pub use token::{Header, Token, UnsignedToken};
