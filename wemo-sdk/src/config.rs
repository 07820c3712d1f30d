//! Configuration for SDK entry points

use std::time::Duration;

use wemo_api::TransportConfig;
use wemo_discovery::DEFAULT_SEARCH_TIMEOUT;

/// Settings used by [`discover`](crate::discover) and [`WemoSwitch::with_config`](crate::WemoSwitch::with_config)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WemoConfig {
    /// HTTP settings for control and setup requests.
    /// Default: no timeouts
    pub transport: TransportConfig,

    /// How long to collect SSDP responses.
    /// Default: 3 seconds
    pub discovery_timeout: Duration,
}

impl Default for WemoConfig {
    fn default() -> Self {
        Self {
            transport: TransportConfig::default(),
            discovery_timeout: DEFAULT_SEARCH_TIMEOUT,
        }
    }
}

impl WemoConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound every device request: `connect` to establish, `read` per socket read
    pub fn with_request_timeouts(mut self, connect: Duration, read: Duration) -> Self {
        self.transport = self.transport.with_connect_timeout(connect).with_read_timeout(read);
        self
    }

    pub fn with_discovery_timeout(mut self, timeout: Duration) -> Self {
        self.discovery_timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.transport = self.transport.with_user_agent(user_agent);
        self
    }
}
