//! Cloud environment descriptors
//!
//! An [`Environment`] names the target cloud and carries the endpoints the
//! client bundle binds against. The well-known clouds are provided as
//! statics; sovereign or air-gapped clouds can be described with a
//! metadata document instead.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum EnvironmentError {
    #[error("unknown environment: {0}")]
    UnknownEnvironment(String),
    #[error("malformed environment metadata: {0}")]
    Metadata(#[from] serde_json::Error),
    #[error("invalid endpoint in environment metadata: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}

/// Endpoints and identity of a target cloud.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    pub name: String,
    pub resource_manager: Url,
    pub authority_host: Url,
}

pub static AZURE_PUBLIC_CLOUD: Lazy<Environment> = Lazy::new(|| Environment {
    name: "AzureCloud".to_string(),
    resource_manager: Url::parse("https://management.azure.com/").unwrap(),
    authority_host: Url::parse("https://login.microsoftonline.com/").unwrap(),
});

pub static AZURE_US_GOVERNMENT: Lazy<Environment> = Lazy::new(|| Environment {
    name: "AzureUSGovernment".to_string(),
    resource_manager: Url::parse("https://management.usgovcloudapi.net/").unwrap(),
    authority_host: Url::parse("https://login.microsoftonline.us/").unwrap(),
});

pub static AZURE_CHINA_CLOUD: Lazy<Environment> = Lazy::new(|| Environment {
    name: "AzureChinaCloud".to_string(),
    resource_manager: Url::parse("https://management.chinacloudapi.cn/").unwrap(),
    authority_host: Url::parse("https://login.chinacloudapi.cn/").unwrap(),
});

/// Wire shape of the environment metadata document published by the
/// resource manager's metadata endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EnvironmentMetadata {
    name: String,
    resource_manager: String,
    authentication: AuthenticationMetadata,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthenticationMetadata {
    login_endpoint: String,
}

impl Environment {
    /// Resolve a well-known cloud by name. Matching is case-insensitive
    /// and accepts the common aliases used in provider configuration.
    pub fn from_name(name: &str) -> Result<Environment, EnvironmentError> {
        match name.to_ascii_lowercase().as_str() {
            "public" | "global" | "azurecloud" | "azurepubliccloud" => {
                Ok(AZURE_PUBLIC_CLOUD.clone())
            }
            "usgovernment" | "usgovernmentl4" | "azureusgovernment"
            | "azureusgovernmentcloud" => Ok(AZURE_US_GOVERNMENT.clone()),
            "china" | "azurechinacloud" => Ok(AZURE_CHINA_CLOUD.clone()),
            other => Err(EnvironmentError::UnknownEnvironment(other.to_string())),
        }
    }

    /// Build an environment from a metadata document, as served by
    /// `{endpoint}/metadata/endpoints?api-version=2022-09-01`.
    pub fn from_metadata_json(document: &str) -> Result<Environment, EnvironmentError> {
        let metadata: EnvironmentMetadata = serde_json::from_str(document)?;
        Ok(Environment {
            name: metadata.name,
            resource_manager: Url::parse(&metadata.resource_manager)?,
            authority_host: Url::parse(&metadata.authentication.login_endpoint)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_is_case_insensitive() {
        let env = Environment::from_name("AzureCloud").unwrap();
        assert_eq!(env, *AZURE_PUBLIC_CLOUD);
        let env = Environment::from_name("public").unwrap();
        assert_eq!(env.resource_manager.as_str(), "https://management.azure.com/");
    }

    #[test]
    fn test_from_name_aliases() {
        assert_eq!(
            Environment::from_name("usgovernment").unwrap(),
            *AZURE_US_GOVERNMENT
        );
        assert_eq!(
            Environment::from_name("china").unwrap(),
            *AZURE_CHINA_CLOUD
        );
    }

    #[test]
    fn test_from_name_unknown() {
        let err = Environment::from_name("germany").unwrap_err();
        assert!(matches!(err, EnvironmentError::UnknownEnvironment(_)));
    }

    #[test]
    fn test_from_metadata_json() {
        let doc = r#"{
            "name": "AzureStackLocal",
            "resourceManager": "https://management.local.azurestack.example/",
            "authentication": {
                "loginEndpoint": "https://login.local.azurestack.example/"
            }
        }"#;
        let env = Environment::from_metadata_json(doc).unwrap();
        assert_eq!(env.name, "AzureStackLocal");
        assert_eq!(
            env.resource_manager.as_str(),
            "https://management.local.azurestack.example/"
        );
    }

    #[test]
    fn test_from_metadata_json_rejects_bad_endpoint() {
        let doc = r#"{
            "name": "Broken",
            "resourceManager": "not a url",
            "authentication": { "loginEndpoint": "https://login.example/" }
        }"#;
        assert!(matches!(
            Environment::from_metadata_json(doc),
            Err(EnvironmentError::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn test_from_metadata_json_rejects_malformed_document() {
        assert!(matches!(
            Environment::from_metadata_json("{"),
            Err(EnvironmentError::Metadata(_))
        ));
    }
}
