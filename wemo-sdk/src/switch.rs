//! Switch handle with cached power state and telemetry

use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};
use wemo_api::{Decoded, TelemetrySnapshot, WemoClient};

use crate::{Result, WemoConfig};

/// Stable identity of a switch, independent of its display name.
///
/// Discovered switches use their UPnP UDN; switches built from a bare host
/// use `host:{ip:port}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SwitchId(String);

impl SwitchId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn from_host(host: &str) -> Self {
        Self(format!("host:{}", host))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SwitchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Serializable view of a switch's current state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwitchSummary {
    pub id: SwitchId,
    pub name: String,
    pub state: bool,
    pub last_change: i64,
    pub current_watts: f64,
}

/// One WeMo switch on the network.
///
/// Each operation sends exactly one request. Mutating operations take
/// `&mut self`; share a handle across threads only behind your own lock.
///
/// # Example
///
/// ```rust,no_run
/// use wemo_sdk::WemoSwitch;
///
/// let mut switch = WemoSwitch::new("192.168.1.40:49153", "Coffee Maker");
/// switch.turn_on()?;
///
/// let telemetry = switch.refresh_telemetry()?;
/// println!("{} draws {} W", switch.name(), telemetry.value.current_watts());
/// # Ok::<(), wemo_sdk::SdkError>(())
/// ```
#[derive(Debug, Clone)]
pub struct WemoSwitch {
    id: SwitchId,
    name: String,
    host: String,
    client: WemoClient,
    is_on: bool,
    insight: TelemetrySnapshot,
    last_updated: i64,
}

impl WemoSwitch {
    /// Handle for a switch at a known `ip:port`, using the default transport
    pub fn new(host: impl Into<String>, name: impl Into<String>) -> Self {
        Self::with_client(host, name, WemoClient::new())
    }

    /// Handle whose requests use the transport settings in `config`
    pub fn with_config(host: impl Into<String>, name: impl Into<String>, config: &WemoConfig) -> Self {
        Self::with_client(host, name, WemoClient::with_config(&config.transport))
    }

    pub fn with_client(host: impl Into<String>, name: impl Into<String>, client: WemoClient) -> Self {
        let host = host.into();
        Self::from_parts(SwitchId::from_host(&host), host, name.into(), client)
    }

    pub(crate) fn from_parts(id: SwitchId, host: String, name: String, client: WemoClient) -> Self {
        Self {
            id,
            name,
            host,
            client,
            is_on: false,
            insight: TelemetrySnapshot::default(),
            last_updated: 0,
        }
    }

    pub fn id(&self) -> &SwitchId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Network address as `ip:port`
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Epoch seconds of the last successful telemetry refresh, 0 if never
    pub fn last_updated(&self) -> i64 {
        self.last_updated
    }

    /// Last known power state, from a command or a telemetry refresh
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    /// Instantaneous power from the last telemetry refresh, in watts
    pub fn current_watts(&self) -> f64 {
        self.insight.current_watts()
    }

    /// The cached telemetry snapshot
    pub fn insight(&self) -> &TelemetrySnapshot {
        &self.insight
    }

    pub fn turn_on(&mut self) -> Result<()> {
        self.set_state(true)
    }

    pub fn turn_off(&mut self) -> Result<()> {
        self.set_state(false)
    }

    fn set_state(&mut self, on: bool) -> Result<()> {
        debug!(switch = %self.id, host = %self.host, on, "setting binary state");
        self.client.set_binary_state(&self.host, on)?;
        self.is_on = on;
        Ok(())
    }

    /// Read the live binary state without touching the cached state.
    ///
    /// `0` is off, `1` on; Insight switches report `8` while on but idle.
    pub fn query_binary_state(&self) -> Result<Decoded<i32>> {
        let state = self.client.get_binary_state(&self.host)?;
        for warning in &state.warnings {
            warn!(switch = %self.id, %warning, "degraded binary state response");
        }
        Ok(state)
    }

    /// Fetch Insight telemetry and replace the cached snapshot.
    ///
    /// On a transport error nothing is changed. An unreadable response still
    /// replaces the snapshot (with zeroed fields) and is reported through the
    /// returned warnings.
    pub fn refresh_telemetry(&mut self) -> Result<Decoded<TelemetrySnapshot>> {
        let telemetry = self.client.get_insight_params(&self.host)?;
        for warning in &telemetry.warnings {
            warn!(switch = %self.id, %warning, "degraded telemetry response");
        }

        self.insight = telemetry.value;
        self.is_on = telemetry.value.is_on();
        self.last_updated = chrono::Utc::now().timestamp();
        debug!(switch = %self.id, watts = self.insight.current_watts(), "telemetry refreshed");
        Ok(telemetry)
    }

    pub fn summary(&self) -> SwitchSummary {
        SwitchSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            state: self.is_on,
            last_change: self.insight.last_change(),
            current_watts: self.insight.current_watts(),
        }
    }

    /// The summary as a JSON string
    pub fn summary_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_switch_starts_empty() {
        let switch = WemoSwitch::new("192.168.1.40:49153", "Coffee Maker");

        assert_eq!(switch.id().as_str(), "host:192.168.1.40:49153");
        assert_eq!(switch.name(), "Coffee Maker");
        assert_eq!(switch.host(), "192.168.1.40:49153");
        assert_eq!(switch.last_updated(), 0);
        assert!(!switch.is_on());
        assert_eq!(switch.current_watts(), 0.0);
        assert_eq!(*switch.insight(), TelemetrySnapshot::default());
    }

    #[test]
    fn test_same_name_different_hosts_have_distinct_ids() {
        let a = WemoSwitch::new("192.168.1.40:49153", "Lamp");
        let b = WemoSwitch::new("192.168.1.41:49153", "Lamp");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_summary_json() {
        let switch = WemoSwitch::new("192.168.1.40:49153", "Coffee Maker");
        let json: serde_json::Value = serde_json::from_str(&switch.summary_json().unwrap()).unwrap();

        assert_eq!(json["id"], "host:192.168.1.40:49153");
        assert_eq!(json["name"], "Coffee Maker");
        assert_eq!(json["state"], false);
        assert_eq!(json["last_change"], 0);
        assert_eq!(json["current_watts"], 0.0);
    }
}
