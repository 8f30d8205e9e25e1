//! # Spirius SMS Client
//!
//! An async Rust client library for the Spirius SMS REST API.
//!
//! ## Features
//!
//! - HMAC-SHA256 request signing (`SpiriusSmsV1` scheme)
//! - Canonical JSON bodies: serialized once, signed and sent byte-for-byte
//! - Send SMS, query status, list/read/pop inbound messages
//! - Secrets kept out of `Debug` output
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use spirius_sms_client::auth::StaticCredentials;
//! use spirius_sms_client::rest::SmsRestClient;
//! use spirius_sms_client::types::SendSms;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = Arc::new(StaticCredentials::new("account", "shared_key")?);
//!     let client = SmsRestClient::new(credentials)?;
//!     let response = client
//!         .send_sms(&SendSms::new("Hello world!", "+46123456789", "SPIRIUS"))
//!         .await?;
//!     println!("{}: {}", response.status, response.body);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::SmsError;
pub use types::{ApiResponse, OrderedBody, RequestBody, SendSms};

/// Result type alias using SmsError
pub type Result<T> = std::result::Result<T, SmsError>;
