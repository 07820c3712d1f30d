//! Belkin WeMo device discovery library
//!
//! Finds UPnP root devices advertising a service type using SSDP. Fetching
//! and interpreting each device's `setup.xml` is left to the caller.
//!
//! # Quick Start
//!
//! ```no_run
//! use wemo_discovery::{DeviceFinder, SsdpFinder};
//!
//! let finder = SsdpFinder::default();
//! for device in finder.discover_devices("urn:Belkin:service:basicevent:1")? {
//!     println!("Found {} at {:?}", device.usn, device.host());
//! }
//! # Ok::<(), wemo_discovery::DiscoveryError>(())
//! ```

mod discovery;
mod error;
mod ssdp;

pub use discovery::{
    extract_host_from_url, parse_host, DeviceFinder, DiscoveredDevice, SsdpFinder, DEFAULT_SEARCH_TIMEOUT,
    SSDP_MULTICAST_ADDR,
};
pub use error::{DiscoveryError, Result};
