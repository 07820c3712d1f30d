//! Energy metering operations on the insight service

use crate::decoded::Decoded;
use crate::operations::response_text;
use crate::telemetry::{self, TelemetrySnapshot};
use crate::{Service, WemoOperation};

/// GetInsightParams operation, decoded all the way to a [`TelemetrySnapshot`]
pub struct GetInsightParamsOperation;

impl WemoOperation for GetInsightParamsOperation {
    type Request = ();
    type Response = TelemetrySnapshot;

    const SERVICE: Service = Service::Insight;
    const ACTION: &'static str = "GetInsightParams";

    fn build_payload(_request: &Self::Request) -> String {
        String::new()
    }

    fn decode_response(body: &[u8]) -> Decoded<Self::Response> {
        decode_insight_params(body).and_then(|raw| telemetry::decode(&raw))
    }
}

/// Extract the raw `Body>GetInsightParamsResponse>InsightParams` string.
///
/// Anything unreadable decodes to an empty string with a warning.
pub fn decode_insight_params(body: &[u8]) -> Decoded<String> {
    response_text(body, GetInsightParamsOperation::ACTION, "InsightParams").map(Option::unwrap_or_default)
}
