//! Operation trait shared by every WeMo SOAP action.

use crate::decoded::Decoded;
use crate::service::Service;

/// Base trait for all WeMo API operations
///
/// Ties a request type to the service and action it is sent to, and to the
/// decoder for its response. Decoding never fails: devices in the field send
/// partial or garbled payloads often enough that reads degrade to defaults
/// and report why through [`Decoded::warnings`].
pub trait WemoOperation {
    /// The request data for this operation
    type Request;

    /// The decoded response
    type Response;

    /// The UPnP service this operation belongs to
    const SERVICE: Service;

    /// The SOAP action name for this operation
    const ACTION: &'static str;

    /// Build the XML placed inside the action element of the envelope
    fn build_payload(request: &Self::Request) -> String;

    /// Decode a raw SOAP response body
    fn decode_response(body: &[u8]) -> Decoded<Self::Response>;
}
