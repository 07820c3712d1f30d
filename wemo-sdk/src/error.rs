use thiserror::Error;

#[derive(Error, Debug)]
pub enum SdkError {
    #[error("API error: {0}")]
    Api(#[from] wemo_api::ApiError),

    #[error("Discovery error: {0}")]
    Discovery(#[from] wemo_discovery::DiscoveryError),

    #[error("Invalid device URL: {0}")]
    InvalidDeviceUrl(String),
}

pub type Result<T> = std::result::Result<T, SdkError>;
