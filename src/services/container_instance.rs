//! Container instances (container groups)

use crate::sdk::{ResourceManagerClient, SdkError};
use url::Url;

pub const DEFAULT_API_VERSION: &str = "2023-05-01";

#[derive(Debug)]
pub struct ContainerInstanceClient {
    pub client: ResourceManagerClient,
}

impl ContainerInstanceClient {
    pub fn new_with_base_uri(base_uri: &Url) -> Result<Self, SdkError> {
        let client = ResourceManagerClient::new_with_base_uri(base_uri, DEFAULT_API_VERSION)?;
        Ok(Self { client })
    }
}
