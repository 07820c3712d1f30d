use std::sync::Arc;

use soap_client::{SoapClient, Transport, TransportConfig};
use tracing::debug;

use crate::description::SetupDescription;
use crate::operations::{GetBinaryStateOperation, GetInsightParamsOperation, SetBinaryStateOperation, SetBinaryStateRequest};
use crate::telemetry::TelemetrySnapshot;
use crate::{Decoded, Result, WemoOperation};

/// A client for executing WeMo operations against actual devices
///
/// Bridges the stateless operation definitions and real network requests.
/// Every method performs exactly one request; nothing is retried.
#[derive(Debug, Clone, Default)]
pub struct WemoClient {
    soap_client: SoapClient,
}

impl WemoClient {
    /// Create a client over the default transport (no timeouts)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a client whose transport uses the given connection settings
    pub fn with_config(config: &TransportConfig) -> Self {
        Self::with_soap_client(SoapClient::with_config(config))
    }

    /// Create a client over a custom transport
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self::with_soap_client(SoapClient::with_transport(transport))
    }

    pub fn with_soap_client(soap_client: SoapClient) -> Self {
        Self { soap_client }
    }

    /// Execute a WeMo operation against a device
    ///
    /// Transport failures are returned as errors; an unreadable response
    /// body is not, see [`WemoOperation::decode_response`].
    ///
    /// # Example
    /// ```rust,no_run
    /// use wemo_api::WemoClient;
    /// use wemo_api::operations::GetBinaryStateOperation;
    ///
    /// let client = WemoClient::new();
    /// let state = client.execute::<GetBinaryStateOperation>("192.168.1.40:49153", &())?;
    /// println!("binary state: {}", state.value);
    /// # Ok::<(), wemo_api::ApiError>(())
    /// ```
    pub fn execute<Op: WemoOperation>(&self, host: &str, request: &Op::Request) -> Result<Decoded<Op::Response>> {
        let payload = Op::build_payload(request);
        debug!(host, service = Op::SERVICE.name(), action = Op::ACTION, "executing operation");

        let body = self.soap_client.call(host, Op::SERVICE.name(), Op::ACTION, &payload)?;
        Ok(Op::decode_response(&body))
    }

    pub fn get_binary_state(&self, host: &str) -> Result<Decoded<i32>> {
        self.execute::<GetBinaryStateOperation>(host, &())
    }

    pub fn set_binary_state(&self, host: &str, on: bool) -> Result<()> {
        self.execute::<SetBinaryStateOperation>(host, &SetBinaryStateRequest { on })
            .map(Decoded::into_value)
    }

    pub fn get_insight_params(&self, host: &str) -> Result<Decoded<TelemetrySnapshot>> {
        self.execute::<GetInsightParamsOperation>(host, &())
    }

    /// Fetch and parse a device's setup description
    pub fn fetch_setup_description(&self, url: &str) -> Result<SetupDescription> {
        debug!(url, "fetching setup description");
        let body = self.soap_client.fetch(url)?;
        SetupDescription::from_bytes(&body)
    }
}
