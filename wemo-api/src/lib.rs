//! High-level WeMo API for device control
//!
//! Typed operations for the Belkin `basicevent` and `insight` services on top
//! of the private `soap-client` crate, plus the decoder for Insight energy
//! telemetry.
//!
//! ```rust,no_run
//! use wemo_api::WemoClient;
//!
//! let client = WemoClient::new();
//! client.set_binary_state("192.168.1.40:49153", true)?;
//!
//! let telemetry = client.get_insight_params("192.168.1.40:49153")?;
//! println!("drawing {} W", telemetry.value.current_watts());
//! # Ok::<(), wemo_api::ApiError>(())
//! ```

pub mod client;
pub mod decoded;
pub mod description;
pub mod error;
pub mod operation;
pub mod operations;
pub mod service;
pub mod telemetry;

pub use client::WemoClient;
pub use decoded::{DecodeWarning, Decoded};
pub use description::SetupDescription;
pub use error::{ApiError, Result};
pub use operation::WemoOperation;
pub use service::{Service, BASIC_EVENT_SERVICE_TYPE};
pub use telemetry::TelemetrySnapshot;

pub use soap_client::{HttpRequest, HttpResponse, Method, SoapError, Transport, TransportConfig};
