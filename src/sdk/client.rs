//! Endpoint-bound resource-manager client core
//!
//! Every sub-resource client wraps one [`ResourceManagerClient`]: a
//! validated base URI, a default API version, and an HTTP client that the
//! shared options step configures after construction. Request plumbing
//! stops at "send an authorized request to a resource path"; per-resource
//! protocol details belong to the callers.

use crate::auth::Authorizer;
use crate::sdk::SdkError;
use reqwest::Method;
use std::sync::Arc;
use url::Url;

pub struct ResourceManagerClient {
    http: reqwest::Client,
    base_uri: Url,
    api_version: String,
    authorizer: Option<Arc<dyn Authorizer>>,
}

impl ResourceManagerClient {
    /// Bind a client to a base URI with a default API version.
    ///
    /// The URI must be absolute, use an http(s) scheme, and be usable as a
    /// base for resource paths. A missing trailing slash is normalized so
    /// later joins never clobber the last path segment.
    pub fn new_with_base_uri(base_uri: &Url, api_version: &str) -> Result<Self, SdkError> {
        if base_uri.cannot_be_a_base() {
            return Err(SdkError::InvalidEndpoint {
                uri: base_uri.to_string(),
                reason: "URI cannot serve as a base for resource paths".to_string(),
            });
        }
        match base_uri.scheme() {
            "http" | "https" => {}
            other => {
                return Err(SdkError::InvalidEndpoint {
                    uri: base_uri.to_string(),
                    reason: format!("unsupported scheme {other}"),
                });
            }
        }

        let mut base_uri = base_uri.clone();
        if !base_uri.path().ends_with('/') {
            base_uri.set_path(&format!("{}/", base_uri.path()));
        }

        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base_uri,
            api_version: api_version.to_string(),
            authorizer: None,
        })
    }

    pub fn base_uri(&self) -> &Url {
        &self.base_uri
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn is_configured(&self) -> bool {
        self.authorizer.is_some()
    }

    /// Replace the HTTP client. Called by the shared options step once the
    /// user agent and timeout policy are known.
    pub fn set_http_client(&mut self, http: reqwest::Client) {
        self.http = http;
    }

    pub fn set_authorizer(&mut self, authorizer: Arc<dyn Authorizer>) {
        self.authorizer = Some(authorizer);
    }

    /// Compose the full request URL for a resource path, carrying the
    /// client's `api-version` plus any extra query pairs.
    pub fn request_url(
        &self,
        path: &str,
        extra_query: &[(&str, &str)],
    ) -> Result<Url, SdkError> {
        let mut url = self
            .base_uri
            .join(path.trim_start_matches('/'))
            .map_err(|e| SdkError::InvalidEndpoint {
                uri: format!("{}{}", self.base_uri, path),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("api-version", &self.api_version);
            for (key, value) in extra_query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Send an authorized request to a resource path. A bearer token is
    /// fetched from the authorizer per request; callers own response
    /// decoding.
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        extra_query: &[(&str, &str)],
    ) -> Result<reqwest::Response, SdkError> {
        let authorizer = self
            .authorizer
            .as_ref()
            .ok_or(SdkError::NotConfigured("no authorizer attached"))?;
        let token = authorizer.token().await?;
        let url = self.request_url(path, extra_query)?;
        let response = self
            .http
            .request(method, url)
            .bearer_auth(&token.token)
            .send()
            .await?;
        Ok(response)
    }
}

impl std::fmt::Debug for ResourceManagerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceManagerClient")
            .field("base_uri", &self.base_uri.as_str())
            .field("api_version", &self.api_version)
            .field("configured", &self.authorizer.is_some())
            .finish()
    }
}
