//! REST API endpoint constants.
//!
//! Paths are relative to the base URL. Operations that address a single
//! message append its id as one extra, percent-encoded path segment.

/// Base URL for the Spirius production REST API.
pub const SPIRIUS_BASE_URL: &str = "https://rest.spirius.com/v1";

/// Mobile-terminated (outbound) endpoints.
pub mod mt {
    /// Send an SMS.
    pub const SEND: &str = "/sms/mt/send";
}

/// Mobile-originated (inbound) endpoints.
pub mod mo {
    /// List inbound messages; `/<id>` addresses a single one.
    pub const MESSAGES: &str = "/sms/mo";

    /// Pop the oldest unread inbound message.
    pub const NEXT: &str = "/sms/mo/next";

    /// Delivery status; takes a transaction id segment.
    pub const STATUS: &str = "/sms/mo/status";
}
