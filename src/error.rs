use crate::sdk::SdkError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("building {client} client: {source}")]
    Build {
        client: &'static str,
        #[source]
        source: SdkError,
    },
}

impl ClientError {
    pub(crate) fn building(client: &'static str) -> impl FnOnce(SdkError) -> ClientError {
        move |source| ClientError::Build { client, source }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
