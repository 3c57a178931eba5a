//! Client configuration loaded from the environment.

use std::fmt;
use std::time::Duration;

use crate::error::{MediaConvertError, MediaConvertResult};
use crate::retry::RetryConfig;

/// Static AWS credentials used to sign requests.
#[derive(Clone)]
pub struct Credentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    /// Present for temporary (STS) credentials.
    pub session_token: Option<String>,
}

impl Credentials {
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token: None,
        }
    }

    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field("session_token", &self.session_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// MediaConvert client configuration.
#[derive(Debug, Clone)]
pub struct MediaConvertConfig {
    /// Account-specific endpoint. When absent the regional endpoint is used,
    /// which only serves `DescribeEndpoints`.
    pub endpoint: Option<String>,
    /// AWS region, e.g. `us-west-2`
    pub region: String,
    /// Signing credentials
    pub credentials: Credentials,
    /// Request timeout
    pub timeout: Duration,
    /// Connect timeout
    pub connect_timeout: Duration,
    /// Retry configuration
    pub retry: RetryConfig,
}

impl MediaConvertConfig {
    pub fn new(region: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            endpoint: None,
            region: region.into(),
            credentials,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(5),
            retry: RetryConfig::default(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Create config from environment variables.
    pub fn from_env() -> MediaConvertResult<Self> {
        let region = non_empty_var("AWS_REGION")
            .or_else(|| non_empty_var("AWS_DEFAULT_REGION"))
            .ok_or_else(|| MediaConvertError::config("AWS_REGION or AWS_DEFAULT_REGION must be set"))?;

        let access_key_id = non_empty_var("AWS_ACCESS_KEY_ID")
            .ok_or_else(|| MediaConvertError::config("AWS_ACCESS_KEY_ID must be set"))?;
        let secret_access_key = non_empty_var("AWS_SECRET_ACCESS_KEY")
            .ok_or_else(|| MediaConvertError::config("AWS_SECRET_ACCESS_KEY must be set"))?;

        let mut credentials = Credentials::new(access_key_id, secret_access_key);
        if let Some(token) = non_empty_var("AWS_SESSION_TOKEN") {
            credentials = credentials.with_session_token(token);
        }

        let timeout_secs: u64 = std::env::var("MEDIACONVERT_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);

        let connect_timeout_secs: u64 = std::env::var("MEDIACONVERT_CONNECT_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);

        Ok(Self {
            endpoint: non_empty_var("MEDIACONVERT_ENDPOINT"),
            region,
            credentials,
            timeout: Duration::from_secs(timeout_secs),
            connect_timeout: Duration::from_secs(connect_timeout_secs),
            retry: RetryConfig::from_env(),
        })
    }

    /// Base URL requests are sent to.
    pub fn endpoint_url(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => endpoint.trim_end_matches('/').to_string(),
            None => format!("https://mediaconvert.{}.amazonaws.com", self.region),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
