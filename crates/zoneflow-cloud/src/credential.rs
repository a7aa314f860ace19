//! Token credential abstraction

use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

/// A bearer token together with its expiry time
#[derive(Debug, Clone)]
pub struct AccessToken {
    /// The opaque token value, sent as `Authorization: Bearer <token>`
    pub token: String,

    /// When the token stops being accepted
    pub expires_on: DateTime<Utc>,
}

impl AccessToken {
    pub fn new(token: impl Into<String>, expires_on: DateTime<Utc>) -> Self {
        Self {
            token: token.into(),
            expires_on,
        }
    }

    /// Whether the token expires within `leeway` from now (or already has).
    ///
    /// Callers refresh stale tokens instead of racing the expiry.
    pub fn is_stale(&self, leeway: Duration) -> bool {
        Utc::now() + leeway >= self.expires_on
    }
}

/// Issues bearer tokens for a resource scope
///
/// Implementations own their refresh policy; callers may request a token
/// before every call and expect caching to make that cheap.
#[async_trait]
pub trait TokenCredential: Send + Sync {
    /// Get a token valid for the given resource (e.g. the ARM endpoint).
    async fn get_token(&self, resource: &str) -> Result<AccessToken>;
}
