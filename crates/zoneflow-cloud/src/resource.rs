//! Resource handles and record data

use serde::{Deserialize, Serialize};

/// A resource group that holds other resources
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceGroup {
    /// Fully qualified resource id
    pub id: String,

    /// Group name
    pub name: String,

    /// Region the group metadata lives in
    pub location: String,
}

/// A private DNS zone
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrivateZone {
    /// Fully qualified resource id
    pub id: String,

    /// Zone name (e.g. "demo.private.example")
    pub name: String,

    /// Region, "global" for private DNS zones
    pub location: String,

    /// Last observed provisioning state, if the provider reports one
    pub provisioning_state: Option<String>,
}

/// A record set inside a private DNS zone
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordSet {
    /// Fully qualified resource id
    pub id: String,

    /// Name relative to the zone
    pub name: String,

    /// Record type of the set
    pub record_type: RecordType,

    /// Time-to-live in seconds, if set
    pub ttl: Option<u32>,

    /// A records in the set (empty for placeholder sets)
    pub a_records: Vec<ARecord>,
}

/// A single IPv4 record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ARecord {
    pub ipv4_address: String,
}

impl ARecord {
    pub fn new(ipv4_address: impl Into<String>) -> Self {
        Self {
            ipv4_address: ipv4_address.into(),
        }
    }
}

/// Desired contents for a record set create-or-update
///
/// The default is an empty record set with no TTL, leaving both to the
/// service's defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordData {
    pub ttl: Option<u32>,
    pub a_records: Vec<ARecord>,
}

impl RecordData {
    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = Some(ttl);
        self
    }

    pub fn with_a_record(mut self, ipv4_address: impl Into<String>) -> Self {
        self.a_records.push(ARecord::new(ipv4_address));
        self
    }
}

/// Record set types private DNS zones accept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    A,
    Aaaa,
    Cname,
    Mx,
    Ptr,
    Soa,
    Srv,
    Txt,
}

impl RecordType {
    /// The type name as it appears in resource paths
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::Aaaa => "AAAA",
            RecordType::Cname => "CNAME",
            RecordType::Mx => "MX",
            RecordType::Ptr => "PTR",
            RecordType::Soa => "SOA",
            RecordType::Srv => "SRV",
            RecordType::Txt => "TXT",
        }
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_type_path_segment() {
        assert_eq!(RecordType::A.as_str(), "A");
        assert_eq!(RecordType::Aaaa.as_str(), "AAAA");
        assert_eq!(RecordType::Txt.as_str(), "TXT");
        assert_eq!(RecordType::A.to_string(), "A");
    }

    #[test]
    fn test_record_data_default_is_empty() {
        let data = RecordData::default();
        assert!(data.ttl.is_none());
        assert!(data.a_records.is_empty());
    }

    #[test]
    fn test_record_data_builders() {
        let data = RecordData::default()
            .with_ttl(300)
            .with_a_record("10.0.0.4")
            .with_a_record("10.0.0.5");
        assert_eq!(data.ttl, Some(300));
        assert_eq!(
            data.a_records,
            vec![ARecord::new("10.0.0.4"), ARecord::new("10.0.0.5")]
        );
    }
}
