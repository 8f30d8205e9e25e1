//! Spirius SMS REST API client.
//!
//! # Trait-based API
//!
//! The [`SmsClient`] trait abstracts the REST operations so a mock can
//! stand in for [`SmsRestClient`] in tests.

mod client;
mod endpoints;
mod traits;

pub use client::{SmsRestClient, SmsRestClientBuilder, TIMESTAMP_HEADER};
pub use endpoints::*;
pub use traits::SmsClient;
