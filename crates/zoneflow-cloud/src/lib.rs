//! Zoneflow Cloud Abstraction
//!
//! This crate provides the provider abstraction for Zoneflow,
//! decoupling the demo workflow from any one cloud's DNS and resource APIs.
//!
//! # Supported Providers
//!
//! - **Azure**: Private DNS zones, record sets, resource groups (via ARM)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                  Zoneflow CLI                    │
//! │               (zoneflow up/down)                 │
//! └─────────────────┬───────────────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────────────┐
//! │               zoneflow-cloud                     │
//! │  ┌──────────────────────────────────────────┐   │
//! │  │         Provider Abstraction              │   │
//! │  │  trait DnsProvider { ... }                │   │
//! │  └──────────────────────────────────────────┘   │
//! │  ┌──────────────┐  ┌──────────────────┐        │
//! │  │ Operation<T> │  │ TokenCredential  │        │
//! │  └──────────────┘  └──────────────────┘        │
//! └───────┬──────────────────────────────────────────┘
//!         │
//! ┌───────▼───────┐
//! │  azure (ARM)  │
//! │   provider    │
//! └───────────────┘
//! ```

pub mod credential;
pub mod error;
pub mod operation;
pub mod provider;
pub mod resource;

// Re-exports
pub use credential::{AccessToken, TokenCredential};
pub use error::{CloudError, Result};
pub use operation::{Completed, Operation};
pub use provider::DnsProvider;
pub use resource::{ARecord, PrivateZone, RecordData, RecordSet, RecordType, ResourceGroup};
