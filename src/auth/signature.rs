//! HMAC-SHA256 signature generation for Spirius API authentication.
//!
//! Every request is signed over a canonical message of five fields joined
//! by a single `\n`:
//!
//! ```text
//! SpiriusSmsV1
//! <unix timestamp, seconds>
//! <HTTP verb, uppercase>
//! <path, e.g. /sms/mt/send>
//! <lowercase hex SHA-1 of the exact body bytes>
//! ```
//!
//! The message is keyed with the shared secret, the MAC is base64-encoded
//! and sent as `Authorization: SpiriusSmsV1 <account_id>:<signature>`.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::{Digest, Sha256};

use crate::auth::Credentials;
use crate::error::SmsError;

type HmacSha256 = Hmac<Sha256>;

/// Authentication scheme version, first field of the canonical message.
pub const AUTH_VERSION: &str = "SpiriusSmsV1";

const FIELD_SEPARATOR: &str = "\n";

/// The parts of a request covered by the signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignableRequest<'a> {
    /// HTTP verb; uppercased when the canonical message is built.
    pub method: &'a str,
    /// Request path relative to the API base, without host or query.
    pub path: &'a str,
    /// Unix time in seconds, as sent in `X-SMS-Timestamp`.
    pub timestamp: i64,
    /// The exact bytes sent as the request body. Empty for bodyless requests.
    pub body: &'a [u8],
}

impl<'a> SignableRequest<'a> {
    /// Describe a request with a body.
    pub fn new(method: &'a str, path: &'a str, timestamp: i64, body: &'a [u8]) -> Self {
        Self {
            method,
            path,
            timestamp,
            body,
        }
    }

    /// Describe a request without a body.
    pub fn without_body(method: &'a str, path: &'a str, timestamp: i64) -> Self {
        Self::new(method, path, timestamp, &[])
    }
}

/// Lowercase hex SHA-1 of the body bytes (always 40 characters).
pub fn body_digest_hex(body: &[u8]) -> String {
    hex::encode(Sha1::digest(body))
}

/// Build the newline-joined message that the MAC is computed over.
pub fn canonical_message(request: &SignableRequest<'_>) -> String {
    [
        AUTH_VERSION.to_string(),
        request.timestamp.to_string(),
        request.method.to_ascii_uppercase(),
        request.path.to_string(),
        body_digest_hex(request.body),
    ]
    .join(FIELD_SEPARATOR)
}

/// Sign a request for the Spirius REST API.
///
/// # Arguments
///
/// * `credentials` - Account credentials containing the shared secret
/// * `request` - Method, path, timestamp and exact body bytes
///
/// # Returns
///
/// Base64-encoded HMAC-SHA256 signature.
///
/// # Example
///
/// ```rust
/// use spirius_sms_client::auth::{Credentials, SignableRequest, sign_request};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = Credentials::new("SomeUser", "testsecret")?;
/// let body = br#"{"message":"Hello world!","to":"+46123456789","from":"SPIRIUS"}"#;
/// let request = SignableRequest::new("POST", "/sms/mt/send", 1_000_000_000, body);
/// let signature = sign_request(&credentials, &request)?;
/// assert_eq!(signature, "y+imWj4ld+fCQ1c6+MAFff4dWes3/HGJX8P7VHf2/xE=");
/// # Ok(())
/// # }
/// ```
pub fn sign_request(
    credentials: &Credentials,
    request: &SignableRequest<'_>,
) -> Result<String, SmsError> {
    let message = canonical_message(request);

    let mut hmac = HmacSha256::new_from_slice(credentials.signing_key())
        .map_err(|e| SmsError::InvalidKey(format!("Invalid HMAC key: {e}")))?;
    hmac.update(message.as_bytes());
    let hmac_result = hmac.finalize().into_bytes();

    Ok(BASE64.encode(hmac_result))
}

/// Full `Authorization` header value for a signature.
pub fn authorization_header(credentials: &Credentials, signature: &str) -> String {
    format!("{} {}:{}", AUTH_VERSION, credentials.account_id(), signature)
}
