//! Azure provider for Zoneflow
//!
//! This crate implements the DnsProvider trait against Azure Resource
//! Manager, covering private DNS zones, record sets and resource groups.
//!
//! # Authentication
//!
//! Bearer tokens come from the Instance Metadata Service (IMDS), so the
//! process must run on Azure compute with a user-assigned managed identity.
//! No secrets are read from disk or environment.
//!
//! # Long-running operations
//!
//! ARM acknowledges zone and group mutations before they finish. Create and
//! delete calls therefore return an `Operation` handle that polls the
//! resource until it reaches a terminal state:
//!
//! ```ignore
//! use zoneflow_cloud::DnsProvider;
//! use zoneflow_cloud_azure::AzureProvider;
//!
//! let provider = AzureProvider::new(subscription_id, client_id)?;
//!
//! // Create a zone and wait until it is usable
//! let operation = provider
//!     .create_private_zone("demo-rg", "demo.private", "global")
//!     .await?;
//! let zone = operation.wait_until_done().await?;
//!
//! // Tear it down again
//! provider
//!     .delete_private_zone("demo-rg", "demo.private")
//!     .await?
//!     .wait_until_done()
//!     .await?;
//! ```

pub mod arm;
pub mod dns;
pub mod error;
pub mod identity;
pub mod operation;
pub mod provider;
pub mod resources;

#[cfg(test)]
mod testing;

pub use arm::ArmClient;
pub use dns::PrivateDnsClient;
pub use error::{AzureError, Result};
pub use identity::ImdsCredential;
pub use operation::{CreateOperation, DeleteOperation, PollConfig};
pub use provider::AzureProvider;
pub use resources::ResourceGroupsClient;
