//! Shared fakes for SDK tests: a URL-routed transport and a fixed device finder.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use wemo_sdk::{
    DeviceFinder, DiscoveredDevice, DiscoveryError, HttpRequest, HttpResponse, SoapError, Transport, WemoClient,
};

pub const BASIC_EVENT: &str = "urn:Belkin:service:basicevent:1";

/// Answers requests from per-URL queues; unknown URLs fail with a network error
#[derive(Default)]
pub struct FakeTransport {
    routes: Mutex<HashMap<String, VecDeque<Result<HttpResponse, SoapError>>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl FakeTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn reply(&self, url: &str, body: &str) -> &Self {
        self.push(
            url,
            Ok(HttpResponse {
                status: 200,
                body: body.as_bytes().to_vec(),
            }),
        )
    }

    pub fn fail(&self, url: &str, error: SoapError) -> &Self {
        self.push(url, Err(error))
    }

    fn push(&self, url: &str, response: Result<HttpResponse, SoapError>) -> &Self {
        self.routes
            .lock()
            .unwrap()
            .entry(url.to_string())
            .or_default()
            .push_back(response);
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn client(self: &Arc<Self>) -> WemoClient {
        WemoClient::with_transport(self.clone())
    }
}

impl Transport for FakeTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, SoapError> {
        self.requests.lock().unwrap().push(request.clone());
        self.routes
            .lock()
            .unwrap()
            .get_mut(&request.url)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Err(SoapError::Network(format!("connection refused: {}", request.url))))
    }
}

/// Returns a fixed device list, or fails
pub struct FakeFinder {
    pub devices: Result<Vec<DiscoveredDevice>, String>,
    pub searched: Mutex<Vec<String>>,
}

impl FakeFinder {
    pub fn with_devices(devices: Vec<DiscoveredDevice>) -> Self {
        Self {
            devices: Ok(devices),
            searched: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            devices: Err(message.to_string()),
            searched: Mutex::new(Vec::new()),
        }
    }
}

impl DeviceFinder for FakeFinder {
    fn discover_devices(&self, service_type: &str) -> Result<Vec<DiscoveredDevice>, DiscoveryError> {
        self.searched.lock().unwrap().push(service_type.to_string());
        self.devices.clone().map_err(DiscoveryError::NetworkError)
    }
}

pub fn device(ip: &str) -> DiscoveredDevice {
    DiscoveredDevice {
        url_base: setup_url(ip),
        search_target: BASIC_EVENT.to_string(),
        usn: format!("uuid:Socket-1_0-{}::{}", ip.replace('.', ""), BASIC_EVENT),
        server: None,
    }
}

pub fn setup_url(ip: &str) -> String {
    format!("http://{}:49153/setup.xml", ip)
}

pub fn control_url(ip: &str, service: &str) -> String {
    format!("http://{}:49153/upnp/control/{}1", ip, service)
}

pub fn setup_xml(name: &str, udn: Option<&str>) -> String {
    let udn = udn.map(|u| format!("<UDN>{}</UDN>", u)).unwrap_or_default();
    format!(
        r#"<?xml version="1.0"?><root xmlns="urn:Belkin:device-1-0"><device><deviceType>urn:Belkin:device:controllee:1</deviceType><friendlyName>{}</friendlyName>{}</device></root>"#,
        name, udn
    )
}

pub fn insight_response(params: &str) -> String {
    format!(
        r#"<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/" s:encodingStyle="http://schemas.xmlsoap.org/soap/encoding/"><s:Body><u:GetInsightParamsResponse xmlns:u="urn:Belkin:service:insight:1"><InsightParams>{}</InsightParams></u:GetInsightParamsResponse></s:Body></s:Envelope>"#,
        params
    )
}

pub fn binary_state_response(state: &str) -> String {
    format!(
        r#"<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/" s:encodingStyle="http://schemas.xmlsoap.org/soap/encoding/"><s:Body><u:GetBinaryStateResponse xmlns:u="urn:Belkin:service:basicevent:1"><BinaryState>{}</BinaryState></u:GetBinaryStateResponse></s:Body></s:Envelope>"#,
        state
    )
}
