//! Core discovery logic.
//!
//! A [`DeviceFinder`] answers one question: which root devices on the network
//! advertise a given service type. [`SsdpFinder`] answers it with a single
//! SSDP M-SEARCH, deduplicating responses by location.

use std::collections::HashSet;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::time::Duration;

use tracing::{debug, warn};
use url::Url;

use crate::error::{DiscoveryError, Result};
use crate::ssdp::{SsdpClient, SsdpResponse};

/// Standard SSDP multicast group and port
pub const SSDP_MULTICAST_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::new(239, 255, 255, 250), 1900));

/// Default time to wait for SSDP responses
pub const DEFAULT_SEARCH_TIMEOUT: Duration = Duration::from_secs(3);

/// A root device that answered a discovery search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredDevice {
    /// Base URL of the device; for WeMo devices this is the `setup.xml` location
    pub url_base: String,
    /// Search target the device answered for
    pub search_target: String,
    /// Unique service name, e.g. `uuid:Socket-1_0-221239K1100B13::urn:Belkin:service:basicevent:1`
    pub usn: String,
    /// `SERVER` header, naming the firmware's UPnP stack
    pub server: Option<String>,
}

impl DiscoveredDevice {
    /// Network host of the device as `ip:port`
    pub fn host(&self) -> Option<String> {
        extract_host_from_url(&self.url_base)
    }

    /// The device UDN carried in the USN, e.g. `uuid:Socket-1_0-221239K1100B13`
    pub fn udn(&self) -> Option<&str> {
        let udn = self.usn.split("::").next()?;
        udn.starts_with("uuid:").then_some(udn)
    }
}

impl From<SsdpResponse> for DiscoveredDevice {
    fn from(response: SsdpResponse) -> Self {
        Self {
            url_base: response.location,
            search_target: response.urn,
            usn: response.usn,
            server: response.server,
        }
    }
}

/// Something that can find root devices advertising a service type.
pub trait DeviceFinder {
    fn discover_devices(&self, service_type: &str) -> Result<Vec<DiscoveredDevice>>;
}

/// SSDP-backed [`DeviceFinder`]
#[derive(Debug, Clone)]
pub struct SsdpFinder {
    timeout: Duration,
    target: SocketAddr,
}

impl SsdpFinder {
    /// Search the standard multicast group, waiting `timeout` for responses
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            target: SSDP_MULTICAST_ADDR,
        }
    }

    /// Send the M-SEARCH to a specific address instead of the multicast group.
    ///
    /// Useful for unicast searches against a known device.
    pub fn with_target(mut self, target: SocketAddr) -> Self {
        self.target = target;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for SsdpFinder {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_TIMEOUT)
    }
}

impl DeviceFinder for SsdpFinder {
    fn discover_devices(&self, service_type: &str) -> Result<Vec<DiscoveredDevice>> {
        let client = SsdpClient::new(self.timeout)?;
        let mut responses = Vec::new();

        for result in client.search(service_type, self.target)? {
            match result {
                Ok(response) => responses.push(response),
                Err(e) => {
                    warn!(error = %e, "SSDP receive failed, ending search");
                    break;
                }
            }
        }

        let devices = collect_devices(responses, service_type);
        debug!(service_type, count = devices.len(), "SSDP search finished");
        Ok(devices)
    }
}

/// Keep responses for `service_type`, first occurrence per location wins.
pub(crate) fn collect_devices(responses: Vec<SsdpResponse>, service_type: &str) -> Vec<DiscoveredDevice> {
    let mut seen_locations = HashSet::new();
    responses
        .into_iter()
        .filter(|response| response.urn == service_type || response.usn.ends_with(service_type))
        .filter(|response| seen_locations.insert(response.location.clone()))
        .map(DiscoveredDevice::from)
        .collect()
}

/// Extract `host:port` from a URL, using the scheme's default port when absent.
///
/// # Examples
///
/// ```
/// use wemo_discovery::extract_host_from_url;
///
/// assert_eq!(
///     extract_host_from_url("http://192.168.1.40:49153/setup.xml"),
///     Some("192.168.1.40:49153".to_string())
/// );
/// assert_eq!(extract_host_from_url("invalid-url"), None);
/// ```
pub fn extract_host_from_url(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    let port = parsed.port_or_known_default()?;
    Some(format!("{}:{}", host, port))
}

/// Like [`extract_host_from_url`], reporting why the URL was rejected.
pub fn parse_host(url: &str) -> Result<String> {
    extract_host_from_url(url)
        .ok_or_else(|| DiscoveryError::ParseError(format!("No host in device URL '{}'", url)))
}
