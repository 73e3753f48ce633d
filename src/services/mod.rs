pub mod agent_pools;
pub mod container_instance;
pub mod container_registry;
pub mod container_services;
pub mod extensions;
pub mod fleet_update_strategies;
pub mod flux_configuration;
pub mod maintenance_configurations;
pub mod managed_clusters;
pub mod snapshots;

pub use agent_pools::AgentPoolsClient;
pub use container_instance::ContainerInstanceClient;
pub use container_registry::ContainerRegistryClient;
pub use container_services::ContainerServicesClient;
pub use extensions::ExtensionsClient;
pub use fleet_update_strategies::FleetUpdateStrategiesClient;
pub use flux_configuration::FluxConfigurationClient;
pub use maintenance_configurations::MaintenanceConfigurationsClient;
pub use managed_clusters::ManagedClustersClient;
pub use snapshots::SnapshotsClient;
