//! Managed Kubernetes clusters

use crate::sdk::{ResourceManagerClient, SdkError};
use url::Url;

pub const DEFAULT_API_VERSION: &str = "2023-06-02-preview";

#[derive(Debug)]
pub struct ManagedClustersClient {
    pub client: ResourceManagerClient,
}

impl ManagedClustersClient {
    pub fn new_with_base_uri(base_uri: &Url) -> Result<Self, SdkError> {
        let client = ResourceManagerClient::new_with_base_uri(base_uri, DEFAULT_API_VERSION)?;
        Ok(Self { client })
    }
}
