//! HTTP transport seam used by every outbound device call.
//!
//! The [`Transport`] trait is the single point where bytes leave the process.
//! [`UreqTransport`] is the blocking implementation used in production; tests
//! substitute their own.

use std::fmt;
use std::io::Read;
use std::time::Duration;

use tracing::debug;

use crate::SoapError;

/// HTTP method of an outbound request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully built outbound request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// Header name/value pairs in the order they are sent
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpRequest {
    /// A bodiless GET request
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            headers: Vec::new(),
            body: String::new(),
        }
    }

    /// Look up a header value, ignoring ASCII case of the name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw response returned by a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Sends a request and returns the raw response.
///
/// Any response the device sends back is `Ok`, whatever its status; WeMo
/// firmware answers some successful actions with error statuses. Only
/// connection-level failures are reported, as `SoapError::Network`.
pub trait Transport: Send + Sync {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, SoapError>;
}

/// Connection settings for [`UreqTransport`]
///
/// No timeout is applied unless one is set here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportConfig {
    /// Maximum time to establish a connection
    pub connect_timeout: Option<Duration>,
    /// Maximum time to wait on a socket read
    pub read_timeout: Option<Duration>,
    /// Overrides ureq's default User-Agent header
    pub user_agent: Option<String>,
}

impl TransportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

/// Blocking HTTP transport backed by a shared `ureq::Agent`
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// Create a transport with no timeouts
    pub fn new() -> Self {
        Self::with_config(&TransportConfig::default())
    }

    pub fn with_config(config: &TransportConfig) -> Self {
        let mut builder = ureq::AgentBuilder::new();
        if let Some(timeout) = config.connect_timeout {
            builder = builder.timeout_connect(timeout);
        }
        if let Some(timeout) = config.read_timeout {
            builder = builder.timeout_read(timeout);
        }
        if let Some(ref user_agent) = config.user_agent {
            builder = builder.user_agent(user_agent);
        }
        Self {
            agent: builder.build(),
        }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, SoapError> {
        debug!(method = %request.method, url = %request.url, "sending request");

        let mut call = self.agent.request(request.method.as_str(), &request.url);
        for (name, value) in &request.headers {
            call = call.set(name, value);
        }

        let result = match request.method {
            Method::Get => call.call(),
            Method::Post => call.send_string(&request.body),
        };

        let response = match result {
            Ok(response) => response,
            Err(ureq::Error::Status(code, response)) => {
                debug!(status = code, url = %request.url, "device answered with error status");
                response
            }
            Err(e) => return Err(SoapError::Network(e.to_string())),
        };

        let status = response.status();
        let mut body = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut body)
            .map_err(|e| SoapError::Network(e.to_string()))?;

        debug!(status, bytes = body.len(), "received response");
        Ok(HttpResponse { status, body })
    }
}
