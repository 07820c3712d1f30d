use soap_client::SoapError;
use thiserror::Error;

/// High-level API errors for WeMo operations
///
/// Wraps the transport-level [`SoapError`] so callers never need to depend on
/// the SOAP layer directly.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection failed, timed out, or the response could not be read
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Response body could not be parsed
    #[error("Parse error: {0}")]
    ParseError(String),

    /// SOAP fault returned by device
    #[error("SOAP fault: error code {0}")]
    SoapFault(u16),

    /// A device setup description was unreadable or lacked required fields
    #[error("Invalid device description: {0}")]
    InvalidDescription(String),
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

impl From<SoapError> for ApiError {
    fn from(error: SoapError) -> Self {
        match error {
            SoapError::Network(msg) => ApiError::NetworkError(msg),
            SoapError::Parse(msg) => ApiError::ParseError(msg),
            SoapError::Fault(code) => ApiError::SoapFault(code),
        }
    }
}
