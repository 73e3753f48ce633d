//! Shared client options
//!
//! One [`ClientOptions`] value is built per provider session and applied
//! to every sub-resource client: same environment, same authorizer, same
//! user agent and timeout policy.

use crate::auth::Authorizer;
use crate::environment::Environment;
use crate::sdk::{ResourceManagerClient, SdkError};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use std::sync::Arc;
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(180);

#[derive(Clone)]
pub struct ClientOptions {
    pub environment: Environment,
    pub authorizer: Arc<dyn Authorizer>,
    pub user_agent: String,
    pub timeout: Duration,
}

impl ClientOptions {
    pub fn new(environment: Environment, authorizer: Arc<dyn Authorizer>) -> Self {
        Self {
            environment,
            authorizer,
            user_agent: format!("arm-containers/{}", env!("CARGO_PKG_VERSION")),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Apply the shared policy to a freshly constructed client: user
    /// agent, timeout, and the session authorizer.
    pub fn configure(&self, client: &mut ResourceManagerClient) -> Result<(), SdkError> {
        let user_agent =
            HeaderValue::from_str(&self.user_agent).map_err(|e| SdkError::InvalidHeader {
                name: "User-Agent",
                reason: e.to_string(),
            })?;
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, user_agent);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(self.timeout)
            .build()?;

        client.set_http_client(http);
        client.set_authorizer(Arc::clone(&self.authorizer));
        Ok(())
    }
}

impl std::fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientOptions")
            .field("environment", &self.environment.name)
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .finish()
    }
}
