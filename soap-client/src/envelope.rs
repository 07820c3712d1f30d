//! SOAP envelope construction and decoding for Belkin UPnP services.
//!
//! Request bodies follow the exact single-line envelope the devices expect;
//! nothing here performs I/O.

use xmltree::Element;

use crate::transport::{HttpRequest, Method};
use crate::SoapError;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;
const ENVELOPE_OPEN: &str = r#"<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/" s:encodingStyle="http://schemas.xmlsoap.org/soap/encoding/"><s:Body>"#;
const ENVELOPE_CLOSE: &str = "</s:Body></s:Envelope>";

/// Content type sent with every control request
pub const CONTENT_TYPE: &str = r#"text/xml; charset="utf-8""#;

/// Service URN for a Belkin service name, e.g. `urn:Belkin:service:basicevent:1`
pub fn service_urn(service: &str) -> String {
    format!("urn:Belkin:service:{}:1", service)
}

/// Control URL for a service on a device, e.g. `http://10.0.0.5:49153/upnp/control/basicevent1`
pub fn control_url(host: &str, service: &str) -> String {
    format!("http://{}/upnp/control/{}1", host, service)
}

/// Quoted SOAPACTION header value for an action on a service
pub fn soap_action(service: &str, action: &str) -> String {
    format!("\"{}#{}\"", service_urn(service), action)
}

/// Wrap an action and its parameter payload in a SOAP envelope
pub fn envelope(service: &str, action: &str, params: &str) -> String {
    format!(
        "{decl}{open}<u:{action} xmlns:u=\"{urn}\">{params}</u:{action}>{close}",
        decl = XML_DECLARATION,
        open = ENVELOPE_OPEN,
        action = action,
        urn = service_urn(service),
        params = params,
        close = ENVELOPE_CLOSE,
    )
}

/// Build the complete POST request for an action on a service.
///
/// `params` is inserted verbatim inside the action element; pass an empty
/// string for parameterless actions.
pub fn build_action_request(host: &str, service: &str, action: &str, params: &str) -> HttpRequest {
    HttpRequest {
        method: Method::Post,
        url: control_url(host, service),
        headers: vec![
            ("SOAPACTION".to_string(), soap_action(service, action)),
            ("Content-type".to_string(), CONTENT_TYPE.to_string()),
        ],
        body: envelope(service, action, params),
    }
}

/// Parse a SOAP response and return the `{action}Response` element.
///
/// SOAP faults are surfaced as `SoapError::Fault` carrying the UPnP error
/// code (500 when the device omits it).
pub fn parse_envelope(bytes: &[u8], action: &str) -> Result<Element, SoapError> {
    let xml = Element::parse(bytes).map_err(|e| SoapError::Parse(e.to_string()))?;
    extract_response(&xml, action)
}

fn extract_response(xml: &Element, action: &str) -> Result<Element, SoapError> {
    let body = xml
        .get_child("Body")
        .ok_or_else(|| SoapError::Parse("Missing SOAP Body".to_string()))?;

    if let Some(fault) = body.get_child("Fault") {
        let error_code = fault
            .get_child("detail")
            .and_then(|d| d.get_child("UPnPError"))
            .and_then(|e| e.get_child("errorCode"))
            .and_then(|c| c.get_text())
            .and_then(|t| t.trim().parse::<u16>().ok())
            .unwrap_or(500);
        return Err(SoapError::Fault(error_code));
    }

    let response_name = format!("{}Response", action);
    body.get_child(response_name.as_str())
        .cloned()
        .ok_or_else(|| SoapError::Parse(format!("Missing {} element", response_name)))
}
