//! Authentication module for the Spirius API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - A timestamp source for the `X-SMS-Timestamp` header
//! - HMAC-SHA256 signature generation for every request

mod clock;
mod credentials;
mod signature;

pub use clock::{Clock, FixedClock, SystemClock};
pub use credentials::{
    ACCOUNT_ID_ENV, Credentials, CredentialsProvider, EnvCredentials, SHARED_KEY_ENV,
    StaticCredentials,
};
pub use signature::{
    AUTH_VERSION, SignableRequest, authorization_header, body_digest_hex, canonical_message,
    sign_request,
};
