//! Best-effort decode results.
//!
//! Reads from a live device tolerate garbled payloads: instead of failing,
//! decoders return zero-valued fields together with the warnings that
//! explain what was lost.

use thiserror::Error;

/// Why part of a response was replaced by its default value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeWarning {
    /// The response was not a readable SOAP envelope
    #[error("malformed response envelope: {0}")]
    MalformedEnvelope(String),

    /// The device answered with a SOAP fault
    #[error("device returned SOAP fault {0}")]
    Fault(u16),

    /// An expected element was absent
    #[error("missing element {0}")]
    MissingElement(&'static str),

    /// `BinaryState` was not an integer
    #[error("binary state '{0}' is not an integer")]
    InvalidBinaryState(String),

    /// Telemetry had fewer than the required number of fields
    #[error("telemetry payload has {tokens} fields, expected at least {expected}")]
    ShortPayload { tokens: usize, expected: usize },

    /// A single telemetry field failed to parse
    #[error("telemetry field {index} ({field}) has invalid value '{value}'")]
    InvalidField {
        index: usize,
        field: &'static str,
        value: String,
    },
}

/// A decoded value plus any warnings raised while producing it
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<T> {
    pub value: T,
    pub warnings: Vec<DecodeWarning>,
}

impl<T> Decoded<T> {
    /// A value decoded without loss
    pub fn clean(value: T) -> Self {
        Self {
            value,
            warnings: Vec::new(),
        }
    }

    /// A fallback value with the reason it was used
    pub fn degraded(value: T, warning: DecodeWarning) -> Self {
        Self {
            value,
            warnings: vec![warning],
        }
    }

    pub fn is_degraded(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Decoded<U> {
        Decoded {
            value: f(self.value),
            warnings: self.warnings,
        }
    }

    /// Feed the value into a further decode step, keeping warnings from both
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Decoded<U>) -> Decoded<U> {
        let mut next = f(self.value);
        let mut warnings = self.warnings;
        warnings.append(&mut next.warnings);
        Decoded {
            value: next.value,
            warnings,
        }
    }
}
