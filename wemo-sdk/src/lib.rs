//! # WeMo SDK
//!
//! Discover Belkin WeMo switches, switch them on and off, and read Insight
//! energy telemetry. Everything is synchronous and each call makes at most
//! one blocking request.
//!
//! ```rust,no_run
//! use wemo_sdk::{discover, WemoConfig};
//!
//! fn main() -> Result<(), wemo_sdk::SdkError> {
//!     wemo_sdk::logging::init_logging_from_env().ok();
//!
//!     let mut switches = discover(&WemoConfig::default()).into_result()?;
//!     for switch in &mut switches {
//!         switch.turn_on()?;
//!         switch.refresh_telemetry()?;
//!         println!("{}: {} W", switch.name(), switch.current_watts());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! wemo-sdk (switch handles, discovery)
//!     ↓
//! wemo-api (typed operations, telemetry decoding)   wemo-discovery (SSDP)
//!     ↓
//! soap-client (envelopes, HTTP transport)
//! ```

pub use config::WemoConfig;
pub use discovery::{discover, discover_with, DiscoveryOutcome};
pub use error::{Result, SdkError};
pub use switch::{SwitchId, SwitchSummary, WemoSwitch};

pub use wemo_api::{
    DecodeWarning, Decoded, HttpRequest, HttpResponse, SoapError, TelemetrySnapshot, Transport, TransportConfig,
    WemoClient,
};
pub use wemo_discovery::{DeviceFinder, DiscoveredDevice, DiscoveryError};

mod config;
mod discovery;
mod error;
pub mod logging;
mod switch;
