//! Edge case tests for compact token parsing
//!
//! These tests cover malformed structure, Base64URL and header JSON, and the
//! configurable size limits.

use jwtparts::*;

fn b64(input: &str) -> String {
    jwtparts::utils::base64url::encode(input)
}

fn create_valid_token() -> String {
    format!(
        "{}.{}.{}",
        b64(r#"{"alg":"HS256","typ":"JWT"}"#),
        b64(r#"{"iss":"test","sub":"user","exp":9999999999}"#),
        b64("signature")
    )
}

// ============================================================================
// Token Format Edge Cases
// ============================================================================

#[test]
fn test_empty_token() {
    assert!(matches!(Token::parse(""), Err(Error::FormatInvalid)));
}

#[test]
fn test_single_dot() {
    assert!(matches!(Token::parse("."), Err(Error::FormatInvalid)));
}

#[test]
fn test_two_parts() {
    assert!(matches!(
        Token::parse("header.payload"),
        Err(Error::FormatInvalid)
    ));
}

#[test]
fn test_four_parts() {
    assert!(matches!(
        Token::parse("header.payload.signature.extra"),
        Err(Error::FormatInvalid)
    ));
}

#[test]
fn test_only_dots() {
    // Right number of delimiters, but the empty header is not JSON
    assert!(matches!(Token::parse(".."), Err(Error::FormatInvalidJson(_))));
}

#[test]
fn test_whitespace_is_rejected() {
    let token = create_valid_token();

    assert!(matches!(
        Token::parse(&format!(" {token}")),
        Err(Error::FormatInvalidBase64(_))
    ));
    assert!(matches!(
        Token::parse(&format!("{token} ")),
        Err(Error::FormatInvalidBase64(_))
    ));
    assert!(matches!(
        Token::parse(&format!("{token}\n")),
        Err(Error::FormatInvalidBase64(_))
    ));
}

// ============================================================================
// Base64URL Edge Cases
// ============================================================================

#[test]
fn test_invalid_base64_characters() {
    assert!(matches!(
        Token::parse("!!!.abc.def"),
        Err(Error::FormatInvalidBase64(_))
    ));

    // Plus and slash belong to standard Base64, not Base64URL
    assert!(matches!(
        Token::parse("A+B/.e30.c2ln"),
        Err(Error::FormatInvalidBase64(_))
    ));
}

#[test]
fn test_base64_with_padding() {
    let token = format!("{}=.{}.{}", b64(r#"{"alg":"HS256"}"#), b64("{}"), b64("sig"));
    assert!(matches!(
        Token::parse(&token),
        Err(Error::FormatInvalidBase64(_))
    ));
}

#[test]
fn test_incomplete_base64() {
    let token = format!("{}.{}.{}", "A", b64("{}"), b64("sig"));
    assert!(matches!(
        Token::parse(&token),
        Err(Error::FormatInvalidBase64(_))
    ));
}

#[test]
fn test_empty_claims_and_signature() {
    let token_str = format!("{}..", b64(r#"{"alg":"none"}"#));
    let token = Token::parse(&token_str).unwrap();

    assert_eq!(token.claims_part(), "");
    assert_eq!(token.signature_part(), "");
    assert!(token.claims().is_empty());
    assert!(token.signature().is_empty());
    assert!(token.header().algorithm().is_none());
    assert_eq!(token.payload_part(), format!("{}.", b64(r#"{"alg":"none"}"#)));
}

// ============================================================================
// JSON Parsing Edge Cases
// ============================================================================

#[test]
fn test_malformed_json_header() {
    let test_cases = vec![
        "{",                     // Unclosed object
        "{alg:HS256}",           // Missing quotes around key
        "{\"alg\":}",            // Missing value
        "{\"alg\":HS256}",       // Unquoted value
        "{'alg':'HS256'}",       // Single quotes (invalid JSON)
        "{\"alg\":5}",           // Wrong type
        "null",                  // null value
        "123",                   // number
        "\"string\"",            // string
        "[{\"alg\":\"HS256\"}]", // Array instead of object
        "{}",                    // Missing alg
    ];

    for malformed in test_cases {
        let token = format!("{}.{}.{}", b64(malformed), b64("{}"), b64("sig"));

        assert!(
            matches!(Token::parse(&token), Err(Error::FormatInvalidJson(_))),
            "Should reject malformed header JSON: {}",
            malformed
        );
    }
}

#[test]
fn test_empty_algorithm_rejected() {
    let token = format!("{}.{}.{}", b64(r#"{"alg":""}"#), b64("{}"), b64("sig"));
    assert!(matches!(
        Token::parse(&token),
        Err(Error::HeaderAlgorithmMissing)
    ));
}

#[test]
fn test_header_not_utf8() {
    let header = jwtparts::utils::base64url::encode_bytes([0xc3, 0x28]);
    let token = format!("{}.{}.{}", header, b64("{}"), b64("sig"));
    assert!(matches!(
        Token::parse(&token),
        Err(Error::FormatInvalidBase64(_))
    ));
}

#[test]
fn test_none_algorithm_is_parsed_not_rejected() {
    // Rejecting "none" is a verifier's decision, not the parser's
    let token = format!("{}.{}.", b64(r#"{"alg":"none"}"#), b64("{}"));
    let parsed = Token::parse(&token).unwrap();
    assert_eq!(parsed.header().algorithm(), &Algorithm::None);
}

// ============================================================================
// Size Limits
// ============================================================================

#[test]
fn test_default_token_length_limit() {
    let huge_claims = format!(r#"{{"data":"{}"}}"#, "x".repeat(64 * 1024));
    let token = format!("{}.{}.", b64(r#"{"alg":"HS256"}"#), b64(&huge_claims));

    assert!(matches!(
        Token::parse(&token),
        Err(Error::TokenTooLarge { max: 65536, .. })
    ));
}

#[test]
fn test_raised_limits_accept_large_claims() {
    let big_claims = format!(r#"{{"data":"{}"}}"#, "x".repeat(100 * 1024));
    let token = format!("{}.{}.", b64(r#"{"alg":"HS256"}"#), b64(&big_claims));

    let options = ParseOptions::new()
        .max_token_length(1024 * 1024)
        .max_claims_size(512 * 1024);

    let parsed = Token::parse_with(&token, &options).unwrap();
    assert_eq!(parsed.claims().len(), big_claims.len());
}

#[test]
fn test_oversized_signature_rejected() {
    let signature = jwtparts::utils::base64url::encode_bytes([0u8; 2048]);
    let token = format!("{}.{}.{}", b64(r#"{"alg":"RS256"}"#), b64("{}"), signature);

    assert!(matches!(
        Token::parse(&token),
        Err(Error::FormatInvalidBase64(_))
    ));
}
