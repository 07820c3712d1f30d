//! Power state operations on the basicevent service

use crate::decoded::{DecodeWarning, Decoded};
use crate::operations::response_text;
use crate::{Service, WemoOperation};

/// GetBinaryState operation
pub struct GetBinaryStateOperation;

impl WemoOperation for GetBinaryStateOperation {
    type Request = ();
    type Response = i32;

    const SERVICE: Service = Service::BasicEvent;
    const ACTION: &'static str = "GetBinaryState";

    fn build_payload(_request: &Self::Request) -> String {
        String::new()
    }

    fn decode_response(body: &[u8]) -> Decoded<Self::Response> {
        decode_binary_state(body)
    }
}

/// SetBinaryState operation
pub struct SetBinaryStateOperation;

/// Request for SetBinaryState operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetBinaryStateRequest {
    pub on: bool,
}

impl WemoOperation for SetBinaryStateOperation {
    type Request = SetBinaryStateRequest;
    type Response = ();

    const SERVICE: Service = Service::BasicEvent;
    const ACTION: &'static str = "SetBinaryState";

    fn build_payload(request: &Self::Request) -> String {
        format!("<BinaryState>{}</BinaryState>", u8::from(request.on))
    }

    // Any answer that made it through the transport counts as success.
    fn decode_response(_body: &[u8]) -> Decoded<Self::Response> {
        Decoded::clean(())
    }
}

/// Extract `Body>GetBinaryStateResponse>BinaryState` as an integer.
///
/// Anything unreadable decodes to `0` with a warning.
pub fn decode_binary_state(body: &[u8]) -> Decoded<i32> {
    response_text(body, GetBinaryStateOperation::ACTION, "BinaryState").and_then(|text| match text {
        Some(text) => match text.trim().parse::<i32>() {
            Ok(state) => Decoded::clean(state),
            Err(_) => Decoded::degraded(0, DecodeWarning::InvalidBinaryState(text)),
        },
        None => Decoded::clean(0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn binary_state_response(state: &str) -> String {
        format!(
            r#"<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/" s:encodingStyle="http://schemas.xmlsoap.org/soap/encoding/"><s:Body><u:GetBinaryStateResponse xmlns:u="urn:Belkin:service:basicevent:1"><BinaryState>{}</BinaryState></u:GetBinaryStateResponse></s:Body></s:Envelope>"#,
            state
        )
    }

    #[test]
    fn test_set_binary_state_payload_construction() {
        assert_eq!(
            SetBinaryStateOperation::build_payload(&SetBinaryStateRequest { on: true }),
            "<BinaryState>1</BinaryState>"
        );
        assert_eq!(
            SetBinaryStateOperation::build_payload(&SetBinaryStateRequest { on: false }),
            "<BinaryState>0</BinaryState>"
        );
    }

    #[test]
    fn test_get_binary_state_payload_is_empty() {
        assert_eq!(GetBinaryStateOperation::build_payload(&()), "");
    }

    #[rstest]
    #[case("0", 0)]
    #[case("1", 1)]
    #[case("8", 8)]
    #[case(" 1 ", 1)]
    fn test_decode_binary_state(#[case] text: &str, #[case] expected: i32) {
        let decoded = decode_binary_state(binary_state_response(text).as_bytes());
        assert!(!decoded.is_degraded());
        assert_eq!(decoded.value, expected);
    }

    #[test]
    fn test_decode_binary_state_non_integer() {
        let decoded = decode_binary_state(binary_state_response("1|1609459200").as_bytes());
        assert_eq!(decoded.value, 0);
        assert_eq!(
            decoded.warnings,
            vec![DecodeWarning::InvalidBinaryState("1|1609459200".to_string())]
        );
    }

    #[test]
    fn test_decode_binary_state_malformed_xml() {
        let decoded = decode_binary_state(b"this is not xml");
        assert_eq!(decoded.value, 0);
        assert!(matches!(decoded.warnings.as_slice(), [DecodeWarning::MalformedEnvelope(_)]));
    }

    #[test]
    fn test_decode_binary_state_missing_element() {
        let body = r#"<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/"><s:Body><u:GetBinaryStateResponse xmlns:u="urn:Belkin:service:basicevent:1"></u:GetBinaryStateResponse></s:Body></s:Envelope>"#;
        let decoded = decode_binary_state(body.as_bytes());
        assert_eq!(decoded.value, 0);
        assert_eq!(decoded.warnings, vec![DecodeWarning::MissingElement("BinaryState")]);
    }
}
