/// UPnP services exposed by WeMo switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    /// Power state control (`GetBinaryState`, `SetBinaryState`)
    BasicEvent,

    /// Energy metering on Insight switches (`GetInsightParams`)
    Insight,
}

/// Service type every WeMo switch advertises over SSDP
pub const BASIC_EVENT_SERVICE_TYPE: &str = "urn:Belkin:service:basicevent:1";

impl Service {
    /// Service name as used in control URLs and URNs
    pub fn name(&self) -> &'static str {
        match self {
            Service::BasicEvent => "basicevent",
            Service::Insight => "insight",
        }
    }
}
