//! Account credentials for the `SpiriusSmsV1` scheme.
//!
//! The account id travels in clear as `<account_id>:<signature>` after the
//! scheme name, so it must be a single token without `:`. The shared secret
//! is the HMAC key as-is (its UTF-8 bytes, not hex-decoded) and must be
//! non-empty. Both rules are checked once, when credentials are created.

use secrecy::{ExposeSecret, SecretString};

use crate::error::SmsError;

/// Default environment variable holding the account identifier.
pub const ACCOUNT_ID_ENV: &str = "SPIRIUS_ACCOUNT_ID";

/// Default environment variable holding the shared signing key.
pub const SHARED_KEY_ENV: &str = "SPIRIUS_SHARED_KEY";

/// Validated account id and shared secret.
#[derive(Clone)]
pub struct Credentials {
    account_id: String,
    shared_secret: SecretString,
}

impl Credentials {
    /// Create credentials, rejecting values the server could never accept.
    ///
    /// # Errors
    ///
    /// * [`SmsError::InvalidAccountId`] if the account id is empty or contains
    ///   `:`, whitespace or control characters.
    /// * [`SmsError::InvalidKey`] if the shared secret is empty.
    pub fn new(
        account_id: impl Into<String>,
        shared_secret: impl Into<String>,
    ) -> Result<Self, SmsError> {
        let account_id = account_id.into();
        validate_account_id(&account_id)?;

        let shared_secret = SecretString::from(shared_secret.into());
        if shared_secret.expose_secret().is_empty() {
            return Err(SmsError::InvalidKey("shared secret is empty".to_string()));
        }

        Ok(Self {
            account_id,
            shared_secret,
        })
    }

    /// The account id sent in the `Authorization` header.
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// HMAC key bytes.
    pub(crate) fn signing_key(&self) -> &[u8] {
        self.shared_secret.expose_secret().as_bytes()
    }
}

fn validate_account_id(account_id: &str) -> Result<(), SmsError> {
    if account_id.is_empty() {
        return Err(SmsError::InvalidAccountId("account id is empty".to_string()));
    }
    if let Some(c) = account_id
        .chars()
        .find(|c| *c == ':' || c.is_whitespace() || c.is_control())
    {
        return Err(SmsError::InvalidAccountId(format!(
            "{account_id:?} contains {c:?}"
        )));
    }
    Ok(())
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("account_id", &self.account_id)
            .field("shared_secret", &"[REDACTED]")
            .finish()
    }
}

/// Source of credentials for a client.
///
/// Implement this to fetch credentials from a secrets manager or to rotate
/// them without rebuilding the client.
pub trait CredentialsProvider: Send + Sync {
    /// Get the credentials.
    fn get_credentials(&self) -> &Credentials;
}

/// Credentials supplied in code.
#[derive(Clone, Debug)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    /// Validate and wrap an account id and shared secret.
    pub fn new(
        account_id: impl Into<String>,
        shared_secret: impl Into<String>,
    ) -> Result<Self, SmsError> {
        Credentials::new(account_id, shared_secret).map(Self::from)
    }
}

impl From<Credentials> for StaticCredentials {
    fn from(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

impl CredentialsProvider for StaticCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

/// Credentials read from `SPIRIUS_ACCOUNT_ID` and `SPIRIUS_SHARED_KEY`.
///
/// The shared key is the one shown on the account page of the Spirius portal.
#[derive(Debug)]
pub struct EnvCredentials {
    credentials: Credentials,
}

impl EnvCredentials {
    /// Read the default environment variables.
    ///
    /// Returns `Ok(None)` when either variable is unset and an error when a
    /// variable is set to an unusable value.
    pub fn try_from_env() -> Result<Option<Self>, SmsError> {
        Self::try_from_env_vars(ACCOUNT_ID_ENV, SHARED_KEY_ENV)
    }

    /// Read custom environment variable names.
    pub fn try_from_env_vars(
        account_var: &str,
        secret_var: &str,
    ) -> Result<Option<Self>, SmsError> {
        let (Ok(account_id), Ok(shared_secret)) =
            (std::env::var(account_var), std::env::var(secret_var))
        else {
            return Ok(None);
        };

        let credentials = Credentials::new(account_id.trim(), shared_secret.trim())?;
        Ok(Some(Self { credentials }))
    }
}

impl CredentialsProvider for EnvCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}
