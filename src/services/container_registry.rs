//! Container registries
//!
//! Two API versions coexist: 2021-08-01-preview is the current surface,
//! while 2019-06-01-preview is still required for registry agent pools
//! and tasks. The bundle carries a client for each.

use crate::sdk::{ResourceManagerClient, SdkError};
use url::Url;

pub const API_VERSION_2021_08_01_PREVIEW: &str = "2021-08-01-preview";
pub const API_VERSION_2019_06_01_PREVIEW: &str = "2019-06-01-preview";

#[derive(Debug)]
pub struct ContainerRegistryClient {
    pub client: ResourceManagerClient,
}

impl ContainerRegistryClient {
    pub fn new_with_base_uri(base_uri: &Url) -> Result<Self, SdkError> {
        Self::new_with_api_version(base_uri, API_VERSION_2021_08_01_PREVIEW)
    }

    pub fn new_with_api_version(base_uri: &Url, api_version: &str) -> Result<Self, SdkError> {
        let client = ResourceManagerClient::new_with_base_uri(base_uri, api_version)?;
        Ok(Self { client })
    }
}
