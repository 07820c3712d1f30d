//! Discovery of switches on the local network.
//!
//! Discovery runs in two steps: an SSDP search for the `basicevent` service,
//! then one `setup.xml` fetch per responding device. The first failing fetch
//! stops the run; switches described before it are still returned.

use tracing::{debug, info, warn};
use wemo_api::{WemoClient, BASIC_EVENT_SERVICE_TYPE};
use wemo_discovery::{parse_host, DeviceFinder, DiscoveredDevice, SsdpFinder};

use crate::switch::{SwitchId, WemoSwitch};
use crate::{Result, SdkError, WemoConfig};

/// Result of a discovery run
#[derive(Debug)]
pub enum DiscoveryOutcome {
    /// Every responding device was described
    Complete(Vec<WemoSwitch>),
    /// Discovery stopped at `error`; `switches` holds those found before it
    Partial {
        switches: Vec<WemoSwitch>,
        error: SdkError,
    },
}

impl DiscoveryOutcome {
    pub fn switches(&self) -> &[WemoSwitch] {
        match self {
            DiscoveryOutcome::Complete(switches) | DiscoveryOutcome::Partial { switches, .. } => switches,
        }
    }

    pub fn error(&self) -> Option<&SdkError> {
        match self {
            DiscoveryOutcome::Complete(_) => None,
            DiscoveryOutcome::Partial { error, .. } => Some(error),
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, DiscoveryOutcome::Complete(_))
    }

    pub fn into_parts(self) -> (Vec<WemoSwitch>, Option<SdkError>) {
        match self {
            DiscoveryOutcome::Complete(switches) => (switches, None),
            DiscoveryOutcome::Partial { switches, error } => (switches, Some(error)),
        }
    }

    /// Discard partial results on error
    pub fn into_result(self) -> Result<Vec<WemoSwitch>> {
        match self.into_parts() {
            (switches, None) => Ok(switches),
            (_, Some(error)) => Err(error),
        }
    }
}

/// Discover switches with SSDP and the default `ureq` transport.
///
/// # Example
///
/// ```rust,no_run
/// use wemo_sdk::{discover, WemoConfig};
///
/// let outcome = discover(&WemoConfig::default());
/// for switch in outcome.switches() {
///     println!("{} at {}", switch.name(), switch.host());
/// }
/// if let Some(error) = outcome.error() {
///     eprintln!("discovery stopped early: {}", error);
/// }
/// ```
pub fn discover(config: &WemoConfig) -> DiscoveryOutcome {
    let finder = SsdpFinder::new(config.discovery_timeout);
    let client = WemoClient::with_config(&config.transport);
    discover_with(&finder, &client)
}

/// Discover switches using a custom finder and client.
///
/// Switches share `client`'s transport.
pub fn discover_with(finder: &dyn DeviceFinder, client: &WemoClient) -> DiscoveryOutcome {
    let devices = match finder.discover_devices(BASIC_EVENT_SERVICE_TYPE) {
        Ok(devices) => devices,
        Err(e) => {
            warn!(error = %e, "device search failed");
            return DiscoveryOutcome::Partial {
                switches: Vec::new(),
                error: e.into(),
            };
        }
    };
    debug!(count = devices.len(), "devices answered search");

    let mut switches = Vec::with_capacity(devices.len());
    for device in &devices {
        match describe(device, client) {
            Ok(switch) => {
                info!(switch = %switch.id(), name = switch.name(), host = switch.host(), "discovered switch");
                switches.push(switch);
            }
            Err(error) => {
                warn!(url = %device.url_base, %error, found = switches.len(), "aborting discovery");
                return DiscoveryOutcome::Partial { switches, error };
            }
        }
    }

    DiscoveryOutcome::Complete(switches)
}

fn describe(device: &DiscoveredDevice, client: &WemoClient) -> Result<WemoSwitch> {
    let host = parse_host(&device.url_base).map_err(|_| SdkError::InvalidDeviceUrl(device.url_base.clone()))?;
    let setup = client.fetch_setup_description(&device.url_base)?;
    debug!(
        host = %host,
        model = setup.model_name.as_deref(),
        insight = setup.is_insight(),
        server = device.server.as_deref(),
        "described device"
    );

    let id = setup
        .udn
        .clone()
        .or_else(|| device.udn().map(str::to_string))
        .map(SwitchId::new)
        .unwrap_or_else(|| SwitchId::from_host(&host));

    Ok(WemoSwitch::from_parts(id, host, setup.friendly_name, client.clone()))
}
