use arm_containers::auth::StaticTokenCredential;
use arm_containers::environment::{Environment, AZURE_PUBLIC_CLOUD, AZURE_US_GOVERNMENT};
use arm_containers::services::container_registry;
use arm_containers::{ClientOptions, ContainersClient};
use std::sync::Arc;
use url::Url;

fn valid_options() -> ClientOptions {
    ClientOptions::new(
        AZURE_PUBLIC_CLOUD.clone(),
        Arc::new(StaticTokenCredential::new("test-token")),
    )
}

#[test]
fn test_all_clients_bound_to_environment_endpoint() {
    let bundle = ContainersClient::new(&valid_options()).unwrap();

    let endpoint = AZURE_PUBLIC_CLOUD.resource_manager.as_str();
    assert_eq!(bundle.agent_pools.client.base_uri().as_str(), endpoint);
    assert_eq!(bundle.container_instance.client.base_uri().as_str(), endpoint);
    assert_eq!(
        bundle
            .container_registry_v2021_08_01_preview
            .client
            .base_uri()
            .as_str(),
        endpoint
    );
    assert_eq!(
        bundle
            .container_registry_v2019_06_01_preview
            .client
            .base_uri()
            .as_str(),
        endpoint
    );
    assert_eq!(bundle.fleet_update_strategies.client.base_uri().as_str(), endpoint);
    assert_eq!(bundle.kubernetes_clusters.client.base_uri().as_str(), endpoint);
    assert_eq!(bundle.kubernetes_extensions.client.base_uri().as_str(), endpoint);
    assert_eq!(
        bundle.kubernetes_flux_configuration.client.base_uri().as_str(),
        endpoint
    );
    assert_eq!(
        bundle.maintenance_configurations.client.base_uri().as_str(),
        endpoint
    );
    assert_eq!(bundle.services.client.base_uri().as_str(), endpoint);
    assert_eq!(bundle.snapshots.client.base_uri().as_str(), endpoint);
    assert_eq!(bundle.environment, *AZURE_PUBLIC_CLOUD);
}

#[test]
fn test_expected_api_versions() {
    let bundle = ContainersClient::new(&valid_options()).unwrap();

    assert_eq!(bundle.agent_pools.client.api_version(), "2023-06-02-preview");
    assert_eq!(bundle.container_instance.client.api_version(), "2023-05-01");
    assert_eq!(
        bundle.container_registry_v2021_08_01_preview.client.api_version(),
        container_registry::API_VERSION_2021_08_01_PREVIEW
    );
    assert_eq!(
        bundle.container_registry_v2019_06_01_preview.client.api_version(),
        container_registry::API_VERSION_2019_06_01_PREVIEW
    );
    assert_eq!(bundle.fleet_update_strategies.client.api_version(), "2023-10-15");
    assert_eq!(bundle.kubernetes_clusters.client.api_version(), "2023-06-02-preview");
    assert_eq!(bundle.kubernetes_extensions.client.api_version(), "2022-11-01");
    assert_eq!(
        bundle.kubernetes_flux_configuration.client.api_version(),
        "2022-11-01"
    );
    assert_eq!(
        bundle.maintenance_configurations.client.api_version(),
        "2023-06-02-preview"
    );
    assert_eq!(bundle.services.client.api_version(), "2019-08-01");
    assert_eq!(bundle.snapshots.client.api_version(), "2023-06-02-preview");
}

#[test]
fn test_every_client_is_configured() {
    let bundle = ContainersClient::new(&valid_options()).unwrap();

    assert!(bundle.agent_pools.client.is_configured());
    assert!(bundle.container_instance.client.is_configured());
    assert!(bundle.container_registry_v2021_08_01_preview.client.is_configured());
    assert!(bundle.container_registry_v2019_06_01_preview.client.is_configured());
    assert!(bundle.fleet_update_strategies.client.is_configured());
    assert!(bundle.kubernetes_clusters.client.is_configured());
    assert!(bundle.kubernetes_extensions.client.is_configured());
    assert!(bundle.kubernetes_flux_configuration.client.is_configured());
    assert!(bundle.maintenance_configurations.client.is_configured());
    assert!(bundle.services.client.is_configured());
    assert!(bundle.snapshots.client.is_configured());
}

#[test]
fn test_sovereign_cloud_endpoint() {
    let options = ClientOptions::new(
        AZURE_US_GOVERNMENT.clone(),
        Arc::new(StaticTokenCredential::new("test-token")),
    );
    let bundle = ContainersClient::new(&options).unwrap();
    assert_eq!(
        bundle.kubernetes_clusters.client.base_uri().as_str(),
        "https://management.usgovcloudapi.net/"
    );
    assert_eq!(bundle.environment.name, "AzureUSGovernment");
}

#[test]
fn test_unusable_endpoint_fails_fast_and_names_client() {
    let environment = Environment {
        name: "Broken".to_string(),
        resource_manager: Url::parse("mailto:ops@example.com").unwrap(),
        authority_host: AZURE_PUBLIC_CLOUD.authority_host.clone(),
    };
    let options = ClientOptions::new(
        environment,
        Arc::new(StaticTokenCredential::new("test-token")),
    );

    let err = ContainersClient::new(&options).unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("building Agent Pools client:"), "{message}");
}

#[test]
fn test_invalid_user_agent_fails_configure_step() {
    let options = valid_options().with_user_agent("broken\r\nagent");
    let err = ContainersClient::new(&options).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("building Agent Pools client"), "{message}");
    assert!(message.contains("User-Agent"), "{message}");
}
