//! Azure Resource Manager REST client
//!
//! Thin JSON layer over reqwest: attaches bearer tokens from the
//! credential, builds management-plane URLs and surfaces the ARM error
//! envelope as typed errors.

use crate::error::{AzureError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use zoneflow_cloud::TokenCredential;

const ARM_ENDPOINT: &str = "https://management.azure.com";
/// Resource scope requested from the credential for management-plane calls.
pub const ARM_TOKEN_RESOURCE: &str = "https://management.azure.com/";
/// Per-request ceiling; polling loops handle the longer waits.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Bearer-authenticated ARM client shared by the resource clients
#[derive(Clone)]
pub struct ArmClient {
    client: reqwest::Client,
    credential: Arc<dyn TokenCredential>,
    endpoint: String,
}

impl ArmClient {
    pub fn new(credential: Arc<dyn TokenCredential>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            credential,
            endpoint: ARM_ENDPOINT.to_string(),
        })
    }

    /// Point the client at a local stub instead of the real control plane.
    #[cfg(test)]
    pub(crate) fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Absolute URL for a resource path (`path` starts with `/`).
    pub fn url(&self, path: &str, api_version: &str) -> String {
        format!("{}{}?api-version={}", self.endpoint, path, api_version)
    }

    /// GET a resource. `Ok(None)` when the service answers 404.
    pub async fn get_opt<T: DeserializeOwned>(&self, url: &str) -> Result<Option<T>> {
        let token = self.token().await?;
        let response = self.client.get(url).bearer_auth(&token).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = Self::check(response).await?;
        Ok(Some(response.json().await?))
    }

    /// PUT returning the response body (synchronous create-or-update).
    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, url: &str, body: &B) -> Result<T> {
        let token = self.token().await?;
        let response = self
            .client
            .put(url)
            .bearer_auth(&token)
            .json(body)
            .send()
            .await?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    /// PUT starting a long-running create; the acknowledgement body is
    /// discarded, callers poll the resource for the final state.
    pub async fn put_accepted<B: Serialize>(&self, url: &str, body: &B) -> Result<()> {
        let token = self.token().await?;
        let response = self
            .client
            .put(url)
            .bearer_auth(&token)
            .json(body)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// DELETE. A 404 counts as deleted.
    pub async fn delete(&self, url: &str) -> Result<()> {
        let token = self.token().await?;
        let response = self.client.delete(url).bearer_auth(&token).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            tracing::debug!("DELETE {}: resource already gone", url);
            return Ok(());
        }
        Self::check(response).await?;
        Ok(())
    }

    async fn token(&self) -> Result<String> {
        let token = self.credential.get_token(ARM_TOKEN_RESOURCE).await?;
        Ok(token.token)
    }

    /// Turn non-2xx responses into `AzureError::Arm`.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(arm_error(status.as_u16(), &body))
    }
}

fn arm_error(status: u16, body: &str) -> AzureError {
    match serde_json::from_str::<ArmErrorEnvelope>(body) {
        Ok(envelope) => AzureError::Arm {
            status,
            code: envelope.error.code,
            message: envelope.error.message,
        },
        Err(_) => AzureError::Arm {
            status,
            code: "Unknown".to_string(),
            message: body.to_string(),
        },
    }
}

// ============ API Types ============

/// Error envelope ARM endpoints return on failure
#[derive(Debug, Deserialize)]
struct ArmErrorEnvelope {
    error: ArmErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ArmErrorDetail {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}
