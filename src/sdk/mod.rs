pub mod client;
pub mod error;

pub use client::ResourceManagerClient;
pub use error::SdkError;
