//! Spirius SMS REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use url::Url;

use crate::auth::{
    Clock, CredentialsProvider, SignableRequest, SystemClock, authorization_header, sign_request,
};
use crate::error::SmsError;
use crate::rest::endpoints::{SPIRIUS_BASE_URL, mo, mt};
use crate::rest::traits::SmsClient;
use crate::types::{ApiResponse, RequestBody, SendSms};

/// Header carrying the signed unix timestamp.
pub const TIMESTAMP_HEADER: &str = "X-SMS-Timestamp";

const JSON_CONTENT_TYPE: &str = "application/json";

/// The Spirius SMS REST API client.
///
/// Every call is signed with the account's shared secret and sent to the
/// same path that was signed. The client performs no retries and returns
/// the raw status code and body.
///
/// # Example
///
/// ```rust,no_run
/// use spirius_sms_client::auth::StaticCredentials;
/// use spirius_sms_client::rest::SmsRestClient;
/// use spirius_sms_client::types::SendSms;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Arc::new(StaticCredentials::new("account", "shared_key")?);
///     let client = SmsRestClient::new(credentials)?;
///
///     let response = client
///         .send_sms(&SendSms::new("Hello world!", "+46123456789", "SPIRIUS"))
///         .await?;
///     println!("{} {}", response.status, response.body);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct SmsRestClient {
    http_client: ClientWithMiddleware,
    base_url: Url,
    base_path: String,
    credentials: Arc<dyn CredentialsProvider>,
    clock: Arc<dyn Clock>,
}

impl SmsRestClient {
    /// Create a new client with default settings.
    pub fn new(credentials: Arc<dyn CredentialsProvider>) -> Result<Self, SmsError> {
        Self::builder(credentials).build()
    }

    /// Create a new client builder.
    pub fn builder(credentials: Arc<dyn CredentialsProvider>) -> SmsRestClientBuilder {
        SmsRestClientBuilder::new(credentials)
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Sign and send a request.
    ///
    /// `path` is relative to the base URL and must start with `/`. Each
    /// `/`-separated part is sent as one percent-encoded segment, and the
    /// encoded path is what gets signed. `body` is sent as-is; pass `None`
    /// for bodyless requests, which are signed over the empty byte sequence.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&RequestBody>,
    ) -> Result<ApiResponse, SmsError> {
        let url = self.endpoint_url(path, None)?;
        self.send_signed(method, url, body).await
    }

    async fn send_signed(
        &self,
        method: Method,
        url: Url,
        body: Option<&RequestBody>,
    ) -> Result<ApiResponse, SmsError> {
        let creds = self.credentials.get_credentials();
        let timestamp = self.clock.unix_timestamp();
        let body_bytes = body.map(RequestBody::as_bytes).unwrap_or_default();

        // Sign the path exactly as it goes on the wire.
        let path = self.signed_path(&url).to_string();
        let signable = SignableRequest::new(method.as_str(), &path, timestamp, body_bytes);
        let signature = sign_request(creds, &signable)?;
        let authorization = HeaderValue::from_str(&authorization_header(creds, &signature))
            .map_err(|e| SmsError::InvalidHeader(format!("Authorization: {e}")))?;

        tracing::debug!(
            method = %method,
            path,
            timestamp,
            body_len = body_bytes.len(),
            "sending signed request"
        );

        let mut request = self
            .http_client
            .request(method, url)
            .header(TIMESTAMP_HEADER, timestamp.to_string())
            .header(AUTHORIZATION, authorization)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE);
        if let Some(body) = body {
            request = request.body(body.as_bytes().to_vec());
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        tracing::debug!(status, path, "received response");

        Ok(ApiResponse { status, body })
    }

    /// Append `path` (and an optional id) to the base URL segment by segment.
    ///
    /// Empty, `.` and `..` segments are rejected: the server would resolve
    /// them to a different path than the one signed.
    fn endpoint_url(&self, path: &str, id: Option<&str>) -> Result<Url, SmsError> {
        let relative = path
            .strip_prefix('/')
            .ok_or_else(|| SmsError::InvalidPath(format!("{path:?} must start with '/'")))?;

        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                SmsError::InvalidPath(format!("{} cannot carry a path", self.base_url))
            })?;
            for segment in relative.split('/').chain(id) {
                if segment.is_empty() || segment == "." || segment == ".." {
                    return Err(SmsError::InvalidPath(format!(
                        "empty or dot segment {segment:?} in {path:?} (id {id:?})"
                    )));
                }
                segments.push(segment);
            }
        }
        Ok(url)
    }

    /// The sent path minus the base URL's own path prefix.
    fn signed_path<'u>(&self, url: &'u Url) -> &'u str {
        url.path()
            .strip_prefix(self.base_path.as_str())
            .unwrap_or(url.path())
    }

    // Mobile-terminated endpoints.

    /// Send an SMS.
    pub async fn send_sms(&self, request: &SendSms) -> Result<ApiResponse, SmsError> {
        let body = request.to_request_body()?;
        self.request(Method::POST, mt::SEND, Some(&body)).await
    }

    // Mobile-originated endpoints.

    /// Get the status of a message by transaction id.
    pub async fn get_message_status(&self, transaction_id: &str) -> Result<ApiResponse, SmsError> {
        let url = self.endpoint_url(mo::STATUS, Some(transaction_id))?;
        self.send_signed(Method::GET, url, None).await
    }

    /// List inbound messages.
    pub async fn get_mo_message_list(&self) -> Result<ApiResponse, SmsError> {
        self.request(Method::GET, mo::MESSAGES, None).await
    }

    /// Read an inbound message without removing it.
    pub async fn get_mo_message(&self, message_id: &str) -> Result<ApiResponse, SmsError> {
        let url = self.endpoint_url(mo::MESSAGES, Some(message_id))?;
        self.send_signed(Method::GET, url, None).await
    }

    /// Read and remove an inbound message.
    pub async fn pop_mo_message(&self, message_id: &str) -> Result<ApiResponse, SmsError> {
        let url = self.endpoint_url(mo::MESSAGES, Some(message_id))?;
        self.send_signed(Method::DELETE, url, None).await
    }

    /// Read and remove the next inbound message.
    pub async fn pop_next_message(&self) -> Result<ApiResponse, SmsError> {
        self.request(Method::DELETE, mo::NEXT, None).await
    }
}

impl std::fmt::Debug for SmsRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmsRestClient")
            .field("base_url", &self.base_url.as_str())
            .field("credentials", self.credentials.get_credentials())
            .finish_non_exhaustive()
    }
}

impl SmsClient for SmsRestClient {
    async fn send_sms(&self, request: &SendSms) -> Result<ApiResponse, SmsError> {
        SmsRestClient::send_sms(self, request).await
    }

    async fn get_message_status(&self, transaction_id: &str) -> Result<ApiResponse, SmsError> {
        SmsRestClient::get_message_status(self, transaction_id).await
    }

    async fn get_mo_message_list(&self) -> Result<ApiResponse, SmsError> {
        SmsRestClient::get_mo_message_list(self).await
    }

    async fn get_mo_message(&self, message_id: &str) -> Result<ApiResponse, SmsError> {
        SmsRestClient::get_mo_message(self, message_id).await
    }

    async fn pop_mo_message(&self, message_id: &str) -> Result<ApiResponse, SmsError> {
        SmsRestClient::pop_mo_message(self, message_id).await
    }

    async fn pop_next_message(&self) -> Result<ApiResponse, SmsError> {
        SmsRestClient::pop_next_message(self).await
    }
}

/// Builder for [`SmsRestClient`].
pub struct SmsRestClientBuilder {
    base_url: String,
    credentials: Arc<dyn CredentialsProvider>,
    clock: Option<Arc<dyn Clock>>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl SmsRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new(credentials: Arc<dyn CredentialsProvider>) -> Self {
        Self {
            base_url: SPIRIUS_BASE_URL.to_string(),
            credentials,
            clock: None,
            user_agent: None,
            timeout: None,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Replace the credentials provider.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = credentials;
        self
    }

    /// Set a custom timestamp source.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set a total timeout for each request. No timeout is applied by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    ///
    /// Fails if the base URL does not parse or the HTTP client cannot be
    /// initialized.
    pub fn build(self) -> Result<SmsRestClient, SmsError> {
        let mut base_url = Url::parse(&self.base_url)?;
        if base_url.cannot_be_a_base() || base_url.query().is_some() || base_url.fragment().is_some()
        {
            return Err(SmsError::InvalidPath(format!(
                "base URL must have no query or fragment: {base_url}"
            )));
        }
        if let Ok(mut segments) = base_url.path_segments_mut() {
            segments.pop_if_empty();
        }
        let base_path = base_url.path().trim_end_matches('/').to_string();

        // Build default headers.
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("spirius-sms-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("spirius-sms-client"));
        headers.insert(USER_AGENT, header_value);

        let mut reqwest_builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = self.timeout {
            reqwest_builder = reqwest_builder.timeout(timeout);
        }
        let reqwest_client = reqwest_builder.build()?;

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock::new()));

        Ok(SmsRestClient {
            http_client: client,
            base_url,
            base_path,
            credentials: self.credentials,
            clock,
        })
    }
}
