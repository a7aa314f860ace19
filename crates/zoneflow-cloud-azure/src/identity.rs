//! Managed identity credential
//!
//! Obtains ARM bearer tokens from the Azure Instance Metadata Service
//! (IMDS). Only works on Azure compute where the link-local endpoint is
//! reachable; no secrets are read from disk or environment. Tokens are
//! cached and replaced five minutes before expiry.

use crate::error::{AzureError, Result};
use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use serde::Deserialize;
use tokio::sync::Mutex;
use zoneflow_cloud::{AccessToken, CloudError, TokenCredential};

const IMDS_TOKEN_ENDPOINT: &str = "http://169.254.169.254/metadata/identity/oauth2/token";
const IMDS_API_VERSION: &str = "2018-02-01";
/// Tokens get replaced this long before they actually expire.
const REFRESH_LEEWAY_SECS: i64 = 300;
/// IMDS is link-local; anything slower means it is not there.
const IMDS_TIMEOUT_SECS: u64 = 10;

/// Credential for a user-assigned managed identity
pub struct ImdsCredential {
    client: reqwest::Client,
    client_id: String,
    endpoint: String,
    cached: Mutex<Option<(String, AccessToken)>>,
}

impl ImdsCredential {
    /// Select the user-assigned identity with the given client id.
    pub fn new(client_id: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(IMDS_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            client_id: client_id.into(),
            endpoint: IMDS_TOKEN_ENDPOINT.to_string(),
            cached: Mutex::new(None),
        })
    }

    /// Fetch tokens from a local stub instead of the real IMDS endpoint.
    #[cfg(test)]
    pub(crate) fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    async fn fetch_token(&self, resource: &str) -> Result<AccessToken> {
        let response = self
            .client
            .get(self.endpoint.as_str())
            .header("Metadata", "true")
            .query(&[
                ("api-version", IMDS_API_VERSION),
                ("resource", resource),
                ("client_id", self.client_id.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AzureError::Identity(format!("IMDS unreachable: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AzureError::Identity(format!(
                "token endpoint returned {}: {}",
                status, body
            )));
        }

        let token: ImdsTokenResponse = response.json().await.map_err(|e| {
            AzureError::Identity(format!("unparseable token response: {}", e))
        })?;
        token.into_access_token()
    }
}

#[async_trait]
impl TokenCredential for ImdsCredential {
    async fn get_token(&self, resource: &str) -> zoneflow_cloud::Result<AccessToken> {
        let mut cached = self.cached.lock().await;

        if let Some((cached_resource, token)) = cached.as_ref() {
            if cached_resource == resource
                && !token.is_stale(Duration::seconds(REFRESH_LEEWAY_SECS))
            {
                return Ok(token.clone());
            }
        }

        tracing::debug!("Requesting managed identity token for {}", resource);
        let token = self.fetch_token(resource).await.map_err(CloudError::from)?;
        *cached = Some((resource.to_string(), token.clone()));
        Ok(token)
    }
}

// ============ API Types ============

/// Token response from the IMDS endpoint
#[derive(Debug, Deserialize)]
struct ImdsTokenResponse {
    access_token: String,
    /// Unix epoch seconds; this api-version returns them as a string
    expires_on: String,
}

impl ImdsTokenResponse {
    fn into_access_token(self) -> Result<AccessToken> {
        let epoch: i64 = self.expires_on.parse().map_err(|_| {
            AzureError::Identity(format!("unparseable expires_on: {}", self.expires_on))
        })?;
        let expires_on = Utc
            .timestamp_opt(epoch, 0)
            .single()
            .ok_or_else(|| AzureError::Identity(format!("expires_on out of range: {}", epoch)))?;
        Ok(AccessToken::new(self.access_token, expires_on))
    }
}
