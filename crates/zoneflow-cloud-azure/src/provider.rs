//! DnsProvider implementation backed by Azure Resource Manager

use crate::arm::ArmClient;
use crate::dns::PrivateDnsClient;
use crate::identity::ImdsCredential;
use crate::operation::PollConfig;
use crate::resources::ResourceGroupsClient;
use async_trait::async_trait;
use std::sync::Arc;
use zoneflow_cloud::{
    CloudError, DnsProvider, Operation, PrivateZone, RecordData, RecordSet, RecordType,
    ResourceGroup, Result, TokenCredential,
};

/// Azure provider
///
/// Every call goes through ARM with a bearer token from the managed
/// identity, so this only works on Azure compute with an identity assigned.
pub struct AzureProvider {
    dns: PrivateDnsClient,
    groups: ResourceGroupsClient,
}

impl AzureProvider {
    /// Authenticate as the user-assigned managed identity `client_id` and
    /// operate on `subscription_id`.
    pub fn new(subscription_id: impl Into<String>, client_id: impl Into<String>) -> Result<Self> {
        let credential = ImdsCredential::new(client_id).map_err(CloudError::from)?;
        Self::with_credential(subscription_id, Arc::new(credential))
    }

    /// Operate with a caller-supplied credential.
    pub fn with_credential(
        subscription_id: impl Into<String>,
        credential: Arc<dyn TokenCredential>,
    ) -> Result<Self> {
        let subscription_id = subscription_id.into();
        let arm = ArmClient::new(credential).map_err(CloudError::from)?;
        Ok(Self {
            dns: PrivateDnsClient::new(arm.clone(), subscription_id.clone()),
            groups: ResourceGroupsClient::new(arm, subscription_id),
        })
    }

    /// Replace the polling schedule on both resource clients.
    pub fn with_poll_config(mut self, poll: PollConfig) -> Self {
        self.dns = self.dns.with_poll_config(poll.clone());
        self.groups = self.groups.with_poll_config(poll);
        self
    }
}

#[async_trait]
impl DnsProvider for AzureProvider {
    fn name(&self) -> &str {
        "azure"
    }

    async fn create_resource_group(&self, name: &str, location: &str) -> Result<ResourceGroup> {
        Ok(self.groups.create_or_update(name, location).await?)
    }

    async fn create_private_zone(
        &self,
        resource_group: &str,
        zone_name: &str,
        location: &str,
    ) -> Result<Box<dyn Operation<PrivateZone>>> {
        let operation = self
            .dns
            .begin_create_zone(resource_group, zone_name, location)
            .await?;
        Ok(Box::new(operation))
    }

    async fn create_record_set(
        &self,
        resource_group: &str,
        zone_name: &str,
        record_type: RecordType,
        relative_name: &str,
        data: &RecordData,
    ) -> Result<RecordSet> {
        Ok(self
            .dns
            .create_record_set(resource_group, zone_name, record_type, relative_name, data)
            .await?)
    }

    async fn delete_private_zone(
        &self,
        resource_group: &str,
        zone_name: &str,
    ) -> Result<Box<dyn Operation<()>>> {
        let operation = self
            .dns
            .begin_delete_zone(resource_group, zone_name)
            .await?;
        Ok(Box::new(operation))
    }

    async fn delete_resource_group(&self, name: &str) -> Result<Box<dyn Operation<()>>> {
        let operation = self.groups.begin_delete(name).await?;
        Ok(Box::new(operation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use zoneflow_cloud::AccessToken;

    struct NoopCredential;

    #[async_trait]
    impl TokenCredential for NoopCredential {
        async fn get_token(&self, _resource: &str) -> Result<AccessToken> {
            Ok(AccessToken::new("tok", Utc::now()))
        }
    }

    #[test]
    fn test_provider_construction() {
        let provider = AzureProvider::with_credential("0000-1111", Arc::new(NoopCredential))
            .unwrap()
            .with_poll_config(PollConfig {
                max_attempts: 3,
                initial_delay_ms: 10,
                max_delay_ms: 50,
                multiplier: 2.0,
            });
        assert_eq!(provider.name(), "azure");
    }
}
