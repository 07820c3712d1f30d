//! Test helpers that stand in for WeMo devices answering SSDP searches.

use std::net::{SocketAddr, UdpSocket};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// A device description used to build canned SSDP responses
#[derive(Debug, Clone)]
pub struct DeviceFixture {
    pub ip: String,
    pub port: u16,
    pub serial: String,
    pub search_target: String,
}

impl DeviceFixture {
    pub fn insight(ip: &str, serial: &str) -> Self {
        Self {
            ip: ip.to_string(),
            port: 49153,
            serial: serial.to_string(),
            search_target: "urn:Belkin:service:basicevent:1".to_string(),
        }
    }

    pub fn location_url(&self) -> String {
        format!("http://{}:{}/setup.xml", self.ip, self.port)
    }

    pub fn ssdp_response(&self) -> String {
        format!(
            "HTTP/1.1 200 OK\r\n\
             CACHE-CONTROL: max-age=86400\r\n\
             EXT:\r\n\
             LOCATION: {}\r\n\
             SERVER: Unspecified, UPnP/1.0, Unspecified\r\n\
             ST: {}\r\n\
             USN: uuid:Insight-1_0-{}::{}\r\n\r\n",
            self.location_url(),
            self.search_target,
            self.serial,
            self.search_target
        )
    }
}

/// A UDP responder on loopback that answers the first M-SEARCH it receives
/// with every fixture's response, in order.
pub struct FakeResponder {
    pub addr: SocketAddr,
    handle: JoinHandle<String>,
}

impl FakeResponder {
    pub fn spawn(fixtures: Vec<DeviceFixture>) -> Self {
        let socket = UdpSocket::bind("127.0.0.1:0").expect("bind fake responder");
        socket
            .set_read_timeout(Some(Duration::from_secs(5)))
            .expect("set responder timeout");
        let addr = socket.local_addr().expect("responder address");

        let handle = thread::spawn(move || {
            let mut buffer = [0u8; 2048];
            let (size, from) = socket.recv_from(&mut buffer).expect("receive M-SEARCH");
            for fixture in &fixtures {
                socket
                    .send_to(fixture.ssdp_response().as_bytes(), from)
                    .expect("send SSDP response");
            }
            String::from_utf8_lossy(&buffer[..size]).into_owned()
        });

        Self { addr, handle }
    }

    /// Wait for the responder and return the M-SEARCH request it received
    pub fn request(self) -> String {
        self.handle.join().expect("responder thread")
    }
}
