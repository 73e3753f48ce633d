//! Authorizer seam shared by every resource-manager client
//!
//! Token acquisition flows live outside this crate; callers hand in any
//! implementation of [`Authorizer`] and the client core attaches the
//! resulting bearer token to outgoing requests.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("token is empty")]
    EmptyToken,
    #[error("environment variable {0} is not set")]
    MissingEnvVar(String),
}

/// A bearer token together with its expiry.
#[derive(Debug, Clone)]
pub struct AccessToken {
    pub token: String,
    pub expires_on: DateTime<Utc>,
}

impl AccessToken {
    pub fn new(token: String, expires_on: DateTime<Utc>) -> Self {
        Self { token, expires_on }
    }

    pub fn is_expired(&self) -> bool {
        self.expires_on <= Utc::now()
    }
}

/// Supplies bearer tokens for resource-manager requests.
#[async_trait]
pub trait Authorizer: Send + Sync {
    async fn token(&self) -> Result<AccessToken, AuthError>;
}

/// Authorizer backed by a fixed token. Intended for tests and for callers
/// that manage token refresh themselves.
#[derive(Debug, Clone)]
pub struct StaticTokenCredential {
    token: String,
}

impl StaticTokenCredential {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl Authorizer for StaticTokenCredential {
    async fn token(&self) -> Result<AccessToken, AuthError> {
        if self.token.is_empty() {
            return Err(AuthError::EmptyToken);
        }
        Ok(AccessToken::new(
            self.token.clone(),
            Utc::now() + Duration::hours(1),
        ))
    }
}

/// Authorizer that reads the token from an environment variable on each
/// request, so externally rotated tokens are picked up without a restart.
#[derive(Debug, Clone)]
pub struct EnvTokenCredential {
    var: String,
}

impl EnvTokenCredential {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

#[async_trait]
impl Authorizer for EnvTokenCredential {
    async fn token(&self) -> Result<AccessToken, AuthError> {
        let token = std::env::var(&self.var)
            .map_err(|_| AuthError::MissingEnvVar(self.var.clone()))?;
        if token.is_empty() {
            return Err(AuthError::EmptyToken);
        }
        Ok(AccessToken::new(token, Utc::now() + Duration::minutes(10)))
    }
}
