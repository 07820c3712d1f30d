//! WeMo API operations organized by service

pub mod basic_event;
pub mod insight;

pub use basic_event::{
    decode_binary_state, GetBinaryStateOperation, SetBinaryStateOperation, SetBinaryStateRequest,
};
pub use insight::{decode_insight_params, GetInsightParamsOperation};

use soap_client::{Element, SoapError};

use crate::decoded::{DecodeWarning, Decoded};

/// Unwrap the response envelope and return the named child's text.
///
/// A present but empty element decodes to an empty string.
pub(crate) fn response_text(body: &[u8], action: &str, element: &'static str) -> Decoded<Option<String>> {
    let response: Element = match soap_client::parse_envelope(body, action) {
        Ok(response) => response,
        Err(SoapError::Fault(code)) => return Decoded::degraded(None, DecodeWarning::Fault(code)),
        Err(e) => return Decoded::degraded(None, DecodeWarning::MalformedEnvelope(e.to_string())),
    };

    match response.get_child(element) {
        Some(child) => Decoded::clean(Some(child.get_text().map(|t| t.into_owned()).unwrap_or_default())),
        None => Decoded::degraded(None, DecodeWarning::MissingElement(element)),
    }
}
