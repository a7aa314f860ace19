//! Resource group client
//!
//! REST shapes follow the Microsoft.Resources provider, api-version
//! 2021-04-01. Group create-or-update is synchronous; deletion is
//! long-running and removes everything inside the group.

use crate::arm::ArmClient;
use crate::error::{AzureError, Result};
use crate::operation::{DeleteOperation, PollConfig};
use serde::{Deserialize, Serialize};
use zoneflow_cloud::ResourceGroup;

const API_VERSION: &str = "2021-04-01";

/// Client for resource groups in one subscription
#[derive(Clone)]
pub struct ResourceGroupsClient {
    arm: ArmClient,
    subscription_id: String,
    poll: PollConfig,
}

impl ResourceGroupsClient {
    pub fn new(arm: ArmClient, subscription_id: impl Into<String>) -> Self {
        Self {
            arm,
            subscription_id: subscription_id.into(),
            poll: PollConfig::default(),
        }
    }

    /// Replace the polling schedule.
    pub fn with_poll_config(mut self, poll: PollConfig) -> Self {
        self.poll = poll;
        self
    }

    fn group_path(&self, name: &str) -> String {
        format!(
            "/subscriptions/{}/resourcegroups/{}",
            self.subscription_id, name
        )
    }

    /// Create or update a resource group. The response body is final.
    pub async fn create_or_update(&self, name: &str, location: &str) -> Result<ResourceGroup> {
        let url = self.arm.url(&self.group_path(name), API_VERSION);
        let body = ResourceGroupRequest {
            location: location.to_string(),
        };

        tracing::info!("Creating resource group {} in {}", name, location);
        let wire: ResourceGroupWire = self.arm.put(&url, &body).await?;
        group_from_wire(wire, name, location)
    }

    /// Begin deleting a resource group and everything in it.
    pub async fn begin_delete(&self, name: &str) -> Result<DeleteOperation> {
        let url = self.arm.url(&self.group_path(name), API_VERSION);

        tracing::info!("Deleting resource group {}", name);
        self.arm.delete(&url).await?;

        Ok(DeleteOperation::new(
            self.arm.clone(),
            url,
            "resource group",
            self.poll.clone(),
        ))
    }
}

fn group_from_wire(wire: ResourceGroupWire, name: &str, location: &str) -> Result<ResourceGroup> {
    let id = wire
        .id
        .filter(|id| !id.is_empty())
        .ok_or(AzureError::MissingField("id"))?;
    Ok(ResourceGroup {
        id,
        name: wire.name.unwrap_or_else(|| name.to_string()),
        location: wire.location.unwrap_or_else(|| location.to_string()),
    })
}

// ============ API Types ============

#[derive(Debug, Serialize)]
struct ResourceGroupRequest {
    location: String,
}

#[derive(Debug, Deserialize)]
struct ResourceGroupWire {
    id: Option<String>,
    name: Option<String>,
    location: Option<String>,
}
