//! Private SOAP client for UPnP device communication
//!
//! This crate provides a minimal SOAP client for Belkin WeMo devices: it
//! builds control envelopes, sends them through a pluggable [`Transport`],
//! and unwraps response envelopes.

mod envelope;
mod error;
mod transport;

pub use envelope::{
    build_action_request, control_url, envelope, parse_envelope, service_urn, soap_action, CONTENT_TYPE,
};
pub use error::SoapError;
pub use transport::{HttpRequest, HttpResponse, Method, Transport, TransportConfig, UreqTransport};

pub use xmltree::Element;

use std::fmt;
use std::sync::Arc;

/// A minimal SOAP client for UPnP device communication
///
/// Cloning is cheap; clones share the same transport.
#[derive(Clone)]
pub struct SoapClient {
    transport: Arc<dyn Transport>,
}

impl SoapClient {
    /// Create a client over the default `ureq` transport
    pub fn new() -> Self {
        Self::with_transport(Arc::new(UreqTransport::new()))
    }

    /// Create a client over a `ureq` transport with the given settings
    pub fn with_config(config: &TransportConfig) -> Self {
        Self::with_transport(Arc::new(UreqTransport::with_config(config)))
    }

    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Send a SOAP action and return the raw response body
    pub fn call(&self, host: &str, service: &str, action: &str, params: &str) -> Result<Vec<u8>, SoapError> {
        let request = build_action_request(host, service, action, params);
        Ok(self.transport.send(&request)?.body)
    }

    /// Fetch a document (e.g. a device description) with a plain GET
    pub fn fetch(&self, url: &str) -> Result<Vec<u8>, SoapError> {
        Ok(self.transport.send(&HttpRequest::get(url))?.body)
    }
}

impl Default for SoapClient {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SoapClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SoapClient").finish_non_exhaustive()
    }
}
