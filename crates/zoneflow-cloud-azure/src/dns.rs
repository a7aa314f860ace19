//! Private DNS zone and record set clients
//!
//! REST shapes follow the Microsoft.Network/privateDnsZones resource
//! provider, api-version 2020-06-01. Zone create and delete are
//! long-running; record set create-or-update completes synchronously.

use crate::arm::ArmClient;
use crate::error::{AzureError, Result};
use crate::operation::{CreateOperation, DeleteOperation, PollConfig};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use zoneflow_cloud::{ARecord, PrivateZone, RecordData, RecordSet, RecordType};

const API_VERSION: &str = "2020-06-01";

/// Client for private DNS zones in one subscription
#[derive(Clone)]
pub struct PrivateDnsClient {
    arm: ArmClient,
    subscription_id: String,
    poll: PollConfig,
}

impl PrivateDnsClient {
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

    fn zone_path(&self, resource_group: &str, zone_name: &str) -> String {
        format!(
            "/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Network/privateDnsZones/{}",
            self.subscription_id, resource_group, zone_name
        )
    }

    /// Begin create-or-update of a private DNS zone.
    pub async fn begin_create_zone(
        &self,
        resource_group: &str,
        zone_name: &str,
        location: &str,
    ) -> Result<CreateOperation<PrivateZone>> {
        let url = self
            .arm
            .url(&self.zone_path(resource_group, zone_name), API_VERSION);
        let body = ZoneRequest {
            location: location.to_string(),
        };

        tracing::info!(
            "Creating private DNS zone {} in {}",
            zone_name,
            resource_group
        );
        self.arm.put_accepted(&url, &body).await?;

        Ok(CreateOperation::new(
            self.arm.clone(),
            url,
            "private DNS zone",
            self.poll.clone(),
            parse_zone,
        ))
    }

    /// Create or update a record set. The response body is final.
    pub async fn create_record_set(
        &self,
        resource_group: &str,
        zone_name: &str,
        record_type: RecordType,
        relative_name: &str,
        data: &RecordData,
    ) -> Result<RecordSet> {
        let url = self.arm.url(
            &format!(
                "{}/{}/{}",
                self.zone_path(resource_group, zone_name),
                record_type.as_str(),
                relative_name
            ),
            API_VERSION,
        );
        let body = RecordSetRequest::from(data);

        tracing::info!(
            "Creating {} record set {} in zone {}",
            record_type,
            relative_name,
            zone_name
        );
        let wire: RecordSetWire = self.arm.put(&url, &body).await?;
        record_set_from_wire(wire, record_type)
    }

    /// Begin deleting a private DNS zone and all record sets in it.
    pub async fn begin_delete_zone(
        &self,
        resource_group: &str,
        zone_name: &str,
    ) -> Result<DeleteOperation> {
        let url = self
            .arm
            .url(&self.zone_path(resource_group, zone_name), API_VERSION);

        tracing::info!(
            "Deleting private DNS zone {} in {}",
            zone_name,
            resource_group
        );
        self.arm.delete(&url).await?;

        Ok(DeleteOperation::new(
            self.arm.clone(),
            url,
            "private DNS zone",
            self.poll.clone(),
        ))
    }
}

fn parse_zone(body: Value) -> Result<PrivateZone> {
    let wire: ZoneWire = serde_json::from_value(body)?;
    let id = wire
        .id
        .filter(|id| !id.is_empty())
        .ok_or(AzureError::MissingField("id"))?;
    Ok(PrivateZone {
        id,
        name: wire.name.unwrap_or_default(),
        location: wire.location.unwrap_or_default(),
        provisioning_state: wire.properties.provisioning_state,
    })
}

fn record_set_from_wire(wire: RecordSetWire, record_type: RecordType) -> Result<RecordSet> {
    let id = wire
        .id
        .filter(|id| !id.is_empty())
        .ok_or(AzureError::MissingField("id"))?;
    Ok(RecordSet {
        id,
        name: wire.name.unwrap_or_default(),
        record_type,
        ttl: wire.properties.ttl,
        a_records: wire
            .properties
            .a_records
            .into_iter()
            .map(|r| ARecord::new(r.ipv4_address))
            .collect(),
    })
}

// ============ API Types ============

#[derive(Debug, Serialize)]
struct ZoneRequest {
    location: String,
}

#[derive(Debug, Deserialize)]
struct ZoneWire {
    id: Option<String>,
    name: Option<String>,
    location: Option<String>,
    #[serde(default)]
    properties: ZonePropertiesWire,
}

#[derive(Debug, Default, Deserialize)]
struct ZonePropertiesWire {
    #[serde(rename = "provisioningState")]
    provisioning_state: Option<String>,
}

#[derive(Debug, Serialize)]
struct RecordSetRequest {
    properties: RecordSetPropertiesWire,
}

impl From<&RecordData> for RecordSetRequest {
    fn from(data: &RecordData) -> Self {
        Self {
            properties: RecordSetPropertiesWire {
                ttl: data.ttl,
                a_records: data
                    .a_records
                    .iter()
                    .map(|r| ARecordWire {
                        ipv4_address: r.ipv4_address.clone(),
                    })
                    .collect(),
            },
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct RecordSetPropertiesWire {
    #[serde(skip_serializing_if = "Option::is_none")]
    ttl: Option<u32>,
    #[serde(default, rename = "aRecords")]
    a_records: Vec<ARecordWire>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ARecordWire {
    #[serde(rename = "ipv4Address")]
    ipv4_address: String,
}

#[derive(Debug, Deserialize)]
struct RecordSetWire {
    id: Option<String>,
    name: Option<String>,
    #[serde(default)]
    properties: RecordSetPropertiesWire,
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use serde_json::json;
    use std::sync::Arc;
    use zoneflow_cloud::{AccessToken, TokenCredential};

    struct NoopCredential;

    #[async_trait]
    impl TokenCredential for NoopCredential {
        async fn get_token(&self, _resource: &str) -> zoneflow_cloud::Result<AccessToken> {
            Ok(AccessToken::new("tok", Utc::now()))
        }
    }

    fn test_client() -> PrivateDnsClient {
        let arm = ArmClient::new(Arc::new(NoopCredential)).unwrap();
        PrivateDnsClient::new(arm, "0000-1111")
    }

    #[test]
    fn test_zone_path() {
        let dns = test_client();
        assert_eq!(
            dns.zone_path("demo-rg", "demo.private"),
            "/subscriptions/0000-1111/resourceGroups/demo-rg/providers/Microsoft.Network/privateDnsZones/demo.private"
        );
    }

    #[test]
    fn test_parse_zone() {
        let body = json!({
            "id": "/subscriptions/0000/resourceGroups/demo-rg/providers/Microsoft.Network/privateDnsZones/demo.private",
            "name": "demo.private",
            "location": "global",
            "properties": { "provisioningState": "Succeeded", "numberOfRecordSets": 1 }
        });

        let zone = parse_zone(body).unwrap();
        assert!(zone.id.ends_with("/privateDnsZones/demo.private"));
        assert_eq!(zone.name, "demo.private");
        assert_eq!(zone.location, "global");
        assert_eq!(zone.provisioning_state.as_deref(), Some("Succeeded"));
    }

    #[test]
    fn test_parse_zone_without_id_is_rejected() {
        let result = parse_zone(json!({ "name": "demo.private" }));
        assert!(matches!(result, Err(AzureError::MissingField("id"))));
    }

    #[test]
    fn test_record_set_request_shape() {
        // Default data provisions an empty set: no TTL, explicit empty list.
        let body = serde_json::to_value(RecordSetRequest::from(&RecordData::default())).unwrap();
        assert_eq!(body, json!({ "properties": { "aRecords": [] } }));

        let data = RecordData::default().with_ttl(300).with_a_record("10.0.0.4");
        let body = serde_json::to_value(RecordSetRequest::from(&data)).unwrap();
        assert_eq!(
            body,
            json!({
                "properties": {
                    "ttl": 300,
                    "aRecords": [{ "ipv4Address": "10.0.0.4" }]
                }
            })
        );
    }

    #[test]
    fn test_record_set_from_wire() {
        let wire: RecordSetWire = serde_json::from_value(json!({
            "id": "/subscriptions/0000/resourceGroups/demo-rg/providers/Microsoft.Network/privateDnsZones/demo.private/A/demo-record",
            "name": "demo-record",
            "properties": { "ttl": 3600, "aRecords": [{ "ipv4Address": "10.0.0.4" }] }
        }))
        .unwrap();

        let record_set = record_set_from_wire(wire, RecordType::A).unwrap();
        assert_eq!(record_set.name, "demo-record");
        assert_eq!(record_set.record_type, RecordType::A);
        assert_eq!(record_set.ttl, Some(3600));
        assert_eq!(record_set.a_records, vec![ARecord::new("10.0.0.4")]);
    }

    #[test]
    fn test_record_set_wire_without_id_is_rejected() {
        let wire: RecordSetWire =
            serde_json::from_value(json!({ "name": "demo-record" })).unwrap();
        assert!(matches!(
            record_set_from_wire(wire, RecordType::A),
            Err(AzureError::MissingField("id"))
        ));
    }
}
