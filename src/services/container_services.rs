//! Legacy container services surface, kept for orchestrator version lookups

use crate::sdk::{ResourceManagerClient, SdkError};
use url::Url;

pub const DEFAULT_API_VERSION: &str = "2019-08-01";

#[derive(Debug)]
pub struct ContainerServicesClient {
    pub client: ResourceManagerClient,
}

impl ContainerServicesClient {
    pub fn new_with_base_uri(base_uri: &Url) -> Result<Self, SdkError> {
        let client = ResourceManagerClient::new_with_base_uri(base_uri, DEFAULT_API_VERSION)?;
        Ok(Self { client })
    }
}
