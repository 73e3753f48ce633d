//! Aggregated resource-manager client bundle for container services
//!
//! This crate wires the container-related sub-resource clients (container
//! instances, registries, managed Kubernetes clusters, agent pools,
//! extensions, flux configuration, maintenance configurations, fleet
//! update strategies, snapshots) into one handle for use by an
//! infrastructure-as-code provider session. Construction binds each client
//! to the configured environment endpoint and applies a shared
//! authorizer/options policy; the first failure aborts construction.

pub mod auth;
pub mod containers;
pub mod environment;
pub mod error;
pub mod options;
pub mod sdk;
pub mod services;

pub use containers::ContainersClient;
pub use environment::Environment;
pub use error::{ClientError, Result};
pub use options::ClientOptions;
