//! SSDP (Simple Service Discovery Protocol) client
//!
//! Sends a single M-SEARCH and yields parsed responses until the socket read
//! times out. Not part of the public API.

use std::net::{SocketAddr, UdpSocket};
use std::time::Duration;

use tracing::trace;

use crate::error::{DiscoveryError, Result};

/// SSDP response containing device information
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SsdpResponse {
    pub location: String,
    pub urn: String,
    pub usn: String,
    pub server: Option<String>,
}

/// SSDP client for device discovery
pub(crate) struct SsdpClient {
    socket: UdpSocket,
}

impl SsdpClient {
    /// Create a new SSDP client; `timeout` bounds each socket read
    pub fn new(timeout: Duration) -> Result<Self> {
        let socket = UdpSocket::bind("0.0.0.0:0")
            .map_err(|e| DiscoveryError::NetworkError(format!("Failed to bind UDP socket: {}", e)))?;

        socket
            .set_read_timeout(Some(timeout))
            .map_err(|e| DiscoveryError::NetworkError(format!("Failed to set read timeout: {}", e)))?;

        socket
            .set_multicast_loop_v4(true)
            .map_err(|e| DiscoveryError::NetworkError(format!("Failed to set multicast loop: {}", e)))?;

        Ok(Self { socket })
    }

    /// Send an M-SEARCH request to `target` and return an iterator of responses
    pub fn search(&self, search_target: &str, target: SocketAddr) -> Result<SsdpResponseIterator<'_>> {
        let request = format!(
            "M-SEARCH * HTTP/1.1\r\n\
             HOST: 239.255.255.250:1900\r\n\
             MAN: \"ssdp:discover\"\r\n\
             MX: 2\r\n\
             ST: {}\r\n\
             USER-AGENT: wemo-rs/1.0 UPnP/1.0\r\n\
             \r\n",
            search_target
        );

        self.socket
            .send_to(request.as_bytes(), target)
            .map_err(|e| DiscoveryError::NetworkError(format!("Failed to send M-SEARCH: {}", e)))?;

        Ok(SsdpResponseIterator::new(&self.socket))
    }
}

/// Iterator for SSDP responses
pub(crate) struct SsdpResponseIterator<'a> {
    socket: &'a UdpSocket,
    buffer: [u8; 2048],
    finished: bool,
}

impl<'a> SsdpResponseIterator<'a> {
    fn new(socket: &'a UdpSocket) -> Self {
        Self {
            socket,
            buffer: [0; 2048],
            finished: false,
        }
    }
}

impl<'a> Iterator for SsdpResponseIterator<'a> {
    type Item = Result<SsdpResponse>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.finished {
                return None;
            }

            match self.socket.recv_from(&mut self.buffer) {
                Ok((size, from)) => {
                    let Ok(text) = std::str::from_utf8(&self.buffer[..size]) else {
                        trace!(%from, "ignoring non UTF-8 SSDP datagram");
                        continue;
                    };
                    match parse_ssdp_response(text) {
                        Some(response) => return Some(Ok(response)),
                        None => trace!(%from, "ignoring unparseable SSDP datagram"),
                    }
                }
                Err(e) => {
                    self.finished = true;
                    if e.kind() == std::io::ErrorKind::WouldBlock || e.kind() == std::io::ErrorKind::TimedOut {
                        return None;
                    }
                    return Some(Err(DiscoveryError::NetworkError(format!("Socket error: {}", e))));
                }
            }
        }
    }
}

/// Parse an SSDP response from HTTP text
pub(crate) fn parse_ssdp_response(response: &str) -> Option<SsdpResponse> {
    let mut location = None;
    let mut urn = None;
    let mut usn = None;
    let mut server = None;

    for line in response.lines() {
        let line = line.trim();

        if let Some(value) = extract_header_value(line, "LOCATION:") {
            location = Some(value);
        } else if let Some(value) = extract_header_value(line, "ST:") {
            urn = Some(value);
        } else if let Some(value) = extract_header_value(line, "USN:") {
            usn = Some(value);
        } else if let Some(value) = extract_header_value(line, "SERVER:") {
            server = Some(value);
        }
    }

    match (location, urn, usn) {
        (Some(location), Some(urn), Some(usn)) => Some(SsdpResponse {
            location,
            urn,
            usn,
            server,
        }),
        _ => None,
    }
}

/// Extract header value from a line like "HEADER: value"
fn extract_header_value(line: &str, header: &str) -> Option<String> {
    if line.len() > header.len()
        && line.is_char_boundary(header.len())
        && line[..header.len()].eq_ignore_ascii_case(header)
    {
        Some(line[header.len()..].trim().to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ssdp_response_valid() {
        let response = "HTTP/1.1 200 OK\r\n\
            CACHE-CONTROL: max-age=86400\r\n\
            LOCATION: http://192.168.1.40:49153/setup.xml\r\n\
            SERVER: Unspecified, UPnP/1.0, Unspecified\r\n\
            ST: urn:Belkin:service:basicevent:1\r\n\
            USN: uuid:Insight-1_0-221450K1200F41::urn:Belkin:service:basicevent:1\r\n\
            \r\n";

        let parsed = parse_ssdp_response(response).unwrap();

        assert_eq!(parsed.location, "http://192.168.1.40:49153/setup.xml");
        assert_eq!(parsed.urn, "urn:Belkin:service:basicevent:1");
        assert_eq!(parsed.usn, "uuid:Insight-1_0-221450K1200F41::urn:Belkin:service:basicevent:1");
        assert_eq!(parsed.server, Some("Unspecified, UPnP/1.0, Unspecified".to_string()));
    }

    #[test]
    fn test_parse_ssdp_response_without_server() {
        let response = "HTTP/1.1 200 OK\r\n\
            LOCATION: http://192.168.1.41:49153/setup.xml\r\n\
            ST: urn:Belkin:service:basicevent:1\r\n\
            USN: uuid:Socket-1_0-221239K1100B13::urn:Belkin:service:basicevent:1\r\n\
            \r\n";

        let parsed = parse_ssdp_response(response).unwrap();
        assert_eq!(parsed.server, None);
    }

    #[test]
    fn test_parse_ssdp_response_case_insensitive() {
        let response = "HTTP/1.1 200 OK\r\n\
            location: http://192.168.1.42:49154/setup.xml\r\n\
            st: urn:Belkin:service:basicevent:1\r\n\
            usn: uuid:Lightswitch-1_0-221332K1300A45::urn:Belkin:service:basicevent:1\r\n\
            \r\n";

        let parsed = parse_ssdp_response(response).unwrap();
        assert_eq!(parsed.location, "http://192.168.1.42:49154/setup.xml");
        assert_eq!(parsed.urn, "urn:Belkin:service:basicevent:1");
    }

    #[test]
    fn test_parse_ssdp_response_missing_required_headers() {
        let missing_location = "HTTP/1.1 200 OK\r\n\
            ST: urn:Belkin:service:basicevent:1\r\n\
            USN: uuid:Socket-1_0-1::urn:Belkin:service:basicevent:1\r\n\r\n";
        let missing_st = "HTTP/1.1 200 OK\r\n\
            LOCATION: http://192.168.1.40:49153/setup.xml\r\n\
            USN: uuid:Socket-1_0-1::urn:Belkin:service:basicevent:1\r\n\r\n";
        let missing_usn = "HTTP/1.1 200 OK\r\n\
            LOCATION: http://192.168.1.40:49153/setup.xml\r\n\
            ST: urn:Belkin:service:basicevent:1\r\n\r\n";

        assert!(parse_ssdp_response(missing_location).is_none());
        assert!(parse_ssdp_response(missing_st).is_none());
        assert!(parse_ssdp_response(missing_usn).is_none());
    }

    #[test]
    fn test_parse_ssdp_response_garbage() {
        assert!(parse_ssdp_response("").is_none());
        assert!(parse_ssdp_response("This is not a valid SSDP response\r\nSome random text\r\n").is_none());
    }

    #[test]
    fn test_extract_header_value() {
        assert_eq!(
            extract_header_value("Location: http://example.com", "LOCATION:"),
            Some("http://example.com".to_string())
        );
        assert_eq!(extract_header_value("LOCATION:", "LOCATION:"), None);
        assert_eq!(extract_header_value("LOCATIONS: value", "LOCATION:"), None);
        assert_eq!(extract_header_value("LOC: value", "LOCATION:"), None);
    }

    #[test]
    fn test_extract_header_value_multibyte_line() {
        assert_eq!(extract_header_value("abcÜ value", "USN:"), None);
    }
}
