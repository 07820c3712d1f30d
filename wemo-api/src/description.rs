//! Device setup description parsing.
//!
//! Every WeMo device serves a UPnP description at `/setup.xml`. Only the
//! `device` element is of interest here.

use serde::Deserialize;

use crate::error::{ApiError, Result};

#[derive(Debug, Deserialize)]
struct Root {
    device: SetupDescription,
}

/// Identity details from a device's `setup.xml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupDescription {
    /// Empty when the device omits it
    #[serde(default)]
    pub friendly_name: String,
    #[serde(rename = "UDN")]
    pub udn: Option<String>,
    pub device_type: Option<String>,
    pub model_name: Option<String>,
    pub serial_number: Option<String>,
    pub firmware_version: Option<String>,
    pub mac_address: Option<String>,
}

impl SetupDescription {
    /// Parse a setup description document.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidDescription` if the XML is malformed or has
    /// no `device` element.
    pub fn from_xml(xml: &str) -> Result<Self> {
        let root: Root = quick_xml::de::from_str(xml)
            .map_err(|e| ApiError::InvalidDescription(format!("Failed to parse setup XML: {}", e)))?;
        Ok(root.device)
    }

    /// Parse a setup description from a raw response body
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let xml = std::str::from_utf8(bytes)
            .map_err(|e| ApiError::InvalidDescription(format!("Setup XML is not UTF-8: {}", e)))?;
        Self::from_xml(xml)
    }

    /// Whether the device reports itself as an Insight switch with energy metering
    pub fn is_insight(&self) -> bool {
        self.device_type
            .as_deref()
            .is_some_and(|device_type| device_type.contains(":insight:"))
    }
}
