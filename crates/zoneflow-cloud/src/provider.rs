//! DNS provider trait definition

use crate::error::Result;
use crate::operation::Operation;
use crate::resource::{PrivateZone, RecordData, RecordSet, RecordType, ResourceGroup};
use async_trait::async_trait;

/// Private DNS provisioning abstraction
///
/// The provider owning the real cloud API implements this trait; tests
/// substitute a double. All create calls are create-or-update: repeating a
/// call with the same names converges on the same resource instead of
/// failing.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// Returns the provider name (e.g., "azure")
    fn name(&self) -> &str;

    /// Create or update a resource group. Completes synchronously.
    async fn create_resource_group(&self, name: &str, location: &str) -> Result<ResourceGroup>;

    /// Begin creating or updating a private DNS zone.
    ///
    /// The zone is only usable once the returned operation succeeds.
    async fn create_private_zone(
        &self,
        resource_group: &str,
        zone_name: &str,
        location: &str,
    ) -> Result<Box<dyn Operation<PrivateZone>>>;

    /// Create or update a record set inside a zone. Completes synchronously.
    async fn create_record_set(
        &self,
        resource_group: &str,
        zone_name: &str,
        record_type: RecordType,
        relative_name: &str,
        data: &RecordData,
    ) -> Result<RecordSet>;

    /// Begin deleting a private DNS zone and every record set in it.
    async fn delete_private_zone(
        &self,
        resource_group: &str,
        zone_name: &str,
    ) -> Result<Box<dyn Operation<()>>>;

    /// Begin deleting a resource group and everything it contains.
    async fn delete_resource_group(&self, name: &str) -> Result<Box<dyn Operation<()>>>;
}
