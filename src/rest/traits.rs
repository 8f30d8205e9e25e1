//! Trait definition for the Spirius REST API client.
//!
//! The `SmsClient` trait abstracts the API operations so that callers can
//! swap in a mock implementation for testing.
//!
//! # Example
//!
//! ```rust,ignore
//! use spirius_sms_client::rest::SmsClient;
//!
//! async fn drain_inbox<C: SmsClient>(client: &C) -> Result<(), spirius_sms_client::SmsError> {
//!     loop {
//!         let response = client.pop_next_message().await?;
//!         if !response.is_success() {
//!             return Ok(());
//!         }
//!         println!("{}", response.body);
//!     }
//! }
//! ```

use std::future::Future;

use crate::error::SmsError;
use crate::types::{ApiResponse, SendSms};

/// Trait defining the Spirius SMS REST operations.
///
/// All methods are async and return the raw [`ApiResponse`].
pub trait SmsClient: Send + Sync {
    /// Send an SMS (`POST /sms/mt/send`).
    fn send_sms(
        &self,
        request: &SendSms,
    ) -> impl Future<Output = Result<ApiResponse, SmsError>> + Send;

    /// Get the status of a message (`GET /sms/mo/status/{id}`).
    fn get_message_status(
        &self,
        transaction_id: &str,
    ) -> impl Future<Output = Result<ApiResponse, SmsError>> + Send;

    /// List inbound messages (`GET /sms/mo`).
    fn get_mo_message_list(&self) -> impl Future<Output = Result<ApiResponse, SmsError>> + Send;

    /// Read an inbound message (`GET /sms/mo/{id}`).
    fn get_mo_message(
        &self,
        message_id: &str,
    ) -> impl Future<Output = Result<ApiResponse, SmsError>> + Send;

    /// Read and remove an inbound message (`DELETE /sms/mo/{id}`).
    fn pop_mo_message(
        &self,
        message_id: &str,
    ) -> impl Future<Output = Result<ApiResponse, SmsError>> + Send;

    /// Read and remove the next inbound message (`DELETE /sms/mo/next`).
    fn pop_next_message(&self) -> impl Future<Output = Result<ApiResponse, SmsError>> + Send;
}
