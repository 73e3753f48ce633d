//! Client bundle for the container services
//!
//! Constructs every container-related sub-resource client against the
//! session's resource-manager endpoint, applies the shared options policy
//! to each, and hands back a single aggregate. Construction is strictly
//! sequential and fail-fast: the first client that cannot be built aborts
//! the rest, and the error names it. No partially built bundle is ever
//! returned.

use crate::environment::Environment;
use crate::error::{ClientError, Result};
use crate::options::ClientOptions;
use crate::sdk::SdkError;
use crate::services::container_registry::{
    API_VERSION_2019_06_01_PREVIEW, API_VERSION_2021_08_01_PREVIEW,
};
use crate::services::{
    AgentPoolsClient, ContainerInstanceClient, ContainerRegistryClient, ContainerServicesClient,
    ExtensionsClient, FleetUpdateStrategiesClient, FluxConfigurationClient,
    MaintenanceConfigurationsClient, ManagedClustersClient, SnapshotsClient,
};
use tracing::{debug, info};

#[derive(Debug)]
pub struct ContainersClient {
    pub agent_pools: AgentPoolsClient,
    pub container_instance: ContainerInstanceClient,
    pub container_registry_v2021_08_01_preview: ContainerRegistryClient,
    // v2019_06_01_preview is still needed for registry agent pools and tasks
    pub container_registry_v2019_06_01_preview: ContainerRegistryClient,
    pub fleet_update_strategies: FleetUpdateStrategiesClient,
    pub kubernetes_clusters: ManagedClustersClient,
    pub kubernetes_extensions: ExtensionsClient,
    pub kubernetes_flux_configuration: FluxConfigurationClient,
    pub maintenance_configurations: MaintenanceConfigurationsClient,
    pub services: ContainerServicesClient,
    pub snapshots: SnapshotsClient,
    pub environment: Environment,
}

impl ContainersClient {
    pub fn new(options: &ClientOptions) -> Result<ContainersClient> {
        let endpoint = &options.environment.resource_manager;

        let agent_pools = build("Agent Pools", options, |o| {
            let mut c = AgentPoolsClient::new_with_base_uri(endpoint)?;
            o.configure(&mut c.client)?;
            Ok(c)
        })?;

        let container_instance = build("Container Instance", options, |o| {
            let mut c = ContainerInstanceClient::new_with_base_uri(endpoint)?;
            o.configure(&mut c.client)?;
            Ok(c)
        })?;

        let container_registry_v2021_08_01_preview =
            build("Container Registry", options, |o| {
                let mut c = ContainerRegistryClient::new_with_api_version(
                    endpoint,
                    API_VERSION_2021_08_01_PREVIEW,
                )?;
                o.configure(&mut c.client)?;
                Ok(c)
            })?;

        let container_registry_v2019_06_01_preview =
            build("Container Registry (legacy)", options, |o| {
                let mut c = ContainerRegistryClient::new_with_api_version(
                    endpoint,
                    API_VERSION_2019_06_01_PREVIEW,
                )?;
                o.configure(&mut c.client)?;
                Ok(c)
            })?;

        let fleet_update_strategies = build("Fleet Update Strategies", options, |o| {
            let mut c = FleetUpdateStrategiesClient::new_with_base_uri(endpoint)?;
            o.configure(&mut c.client)?;
            Ok(c)
        })?;

        let kubernetes_clusters = build("Kubernetes Clusters", options, |o| {
            let mut c = ManagedClustersClient::new_with_base_uri(endpoint)?;
            o.configure(&mut c.client)?;
            Ok(c)
        })?;

        let kubernetes_extensions = build("Kubernetes Extensions", options, |o| {
            let mut c = ExtensionsClient::new_with_base_uri(endpoint)?;
            o.configure(&mut c.client)?;
            Ok(c)
        })?;

        let kubernetes_flux_configuration = build("Kubernetes Flux Configuration", options, |o| {
            let mut c = FluxConfigurationClient::new_with_base_uri(endpoint)?;
            o.configure(&mut c.client)?;
            Ok(c)
        })?;

        let maintenance_configurations = build("Maintenance Configurations", options, |o| {
            let mut c = MaintenanceConfigurationsClient::new_with_base_uri(endpoint)?;
            o.configure(&mut c.client)?;
            Ok(c)
        })?;

        let services = build("Container Services", options, |o| {
            let mut c = ContainerServicesClient::new_with_base_uri(endpoint)?;
            o.configure(&mut c.client)?;
            Ok(c)
        })?;

        let snapshots = build("Snapshots", options, |o| {
            let mut c = SnapshotsClient::new_with_base_uri(endpoint)?;
            o.configure(&mut c.client)?;
            Ok(c)
        })?;

        info!(
            environment = %options.environment.name,
            endpoint = %endpoint,
            "containers client bundle ready"
        );

        Ok(ContainersClient {
            agent_pools,
            container_instance,
            container_registry_v2021_08_01_preview,
            container_registry_v2019_06_01_preview,
            fleet_update_strategies,
            kubernetes_clusters,
            kubernetes_extensions,
            kubernetes_flux_configuration,
            maintenance_configurations,
            services,
            snapshots,
            environment: options.environment.clone(),
        })
    }
}

fn build<T>(
    name: &'static str,
    options: &ClientOptions,
    f: impl FnOnce(&ClientOptions) -> std::result::Result<T, SdkError>,
) -> Result<T> {
    debug!(client = name, "building client");
    f(options).map_err(ClientError::building(name))
}
