use crate::auth::AuthError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("invalid base URI {uri}: {reason}")]
    InvalidEndpoint { uri: String, reason: String },

    #[error("invalid value for {name} header: {reason}")]
    InvalidHeader { name: &'static str, reason: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("authorization error: {0}")]
    Auth(#[from] AuthError),

    #[error("client is not configured: {0}")]
    NotConfigured(&'static str),
}
