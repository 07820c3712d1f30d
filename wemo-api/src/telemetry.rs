//! Insight telemetry decoding.
//!
//! `GetInsightParams` returns a single pipe-delimited string. Only the first
//! ten fields carry meaning:
//!
//! | index | field | unit |
//! |---|---|---|
//! | 0 | on/off (`"1"` = on) | |
//! | 1 | last state change | device seconds |
//! | 2 | on for (current session) | seconds |
//! | 3 | on today | seconds |
//! | 4 | on over two weeks | seconds |
//! | 5 | averaging window, always 1209600 | ignored |
//! | 6 | average power | W |
//! | 7 | instantaneous power | mW |
//! | 8 | energy today | mW-minutes |
//! | 9 | energy over two weeks | mW-minutes |

use serde::Serialize;

use crate::decoded::{DecodeWarning, Decoded};

/// Number of fields a usable payload must contain
pub const INSIGHT_FIELD_COUNT: usize = 10;

/// Power usage reported by an Insight switch.
///
/// Every numeric field is zero when the device did not report it or
/// reported something unparseable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TelemetrySnapshot {
    is_on: bool,
    last_change: i64,
    on_seconds: i64,
    on_seconds_today: i64,
    on_seconds_two_weeks: i64,
    average_watts: f64,
    current_watts: f64,
    energy_today_kwh: f64,
    energy_two_weeks: f64,
}

impl TelemetrySnapshot {
    /// Decode a raw payload, discarding any warnings
    pub fn from_params(raw: &str) -> Self {
        decode(raw).value
    }

    pub fn is_on(&self) -> bool {
        self.is_on
    }

    /// Time of the last on/off transition, in the device's epoch seconds
    pub fn last_change(&self) -> i64 {
        self.last_change
    }

    /// Seconds on since the last switch-on; 0 while off
    pub fn on_seconds(&self) -> i64 {
        self.on_seconds
    }

    pub fn on_seconds_today(&self) -> i64 {
        self.on_seconds_today
    }

    pub fn on_seconds_two_weeks(&self) -> i64 {
        self.on_seconds_two_weeks
    }

    /// Average power over the two-week window, in watts
    pub fn average_watts(&self) -> f64 {
        self.average_watts
    }

    /// Instantaneous power, in watts
    pub fn current_watts(&self) -> f64 {
        self.current_watts
    }

    /// Energy used today, in kWh
    pub fn energy_today_kwh(&self) -> f64 {
        self.energy_today_kwh
    }

    /// Energy used over the two-week window, scaled the same way as
    /// [`energy_today_kwh`](Self::energy_today_kwh)
    pub fn energy_two_weeks(&self) -> f64 {
        self.energy_two_weeks
    }
}

/// Decode an `InsightParams` payload.
///
/// Fewer than ten fields yields the default snapshot. Each field is parsed
/// independently; a bad field is left at zero and reported as a warning.
pub fn decode(raw: &str) -> Decoded<TelemetrySnapshot> {
    let fields: Vec<&str> = raw.split('|').collect();
    if fields.len() < INSIGHT_FIELD_COUNT {
        return Decoded::degraded(
            TelemetrySnapshot::default(),
            DecodeWarning::ShortPayload {
                tokens: fields.len(),
                expected: INSIGHT_FIELD_COUNT,
            },
        );
    }

    let mut fields = FieldReader {
        fields: &fields,
        warnings: Vec::new(),
    };

    let snapshot = TelemetrySnapshot {
        is_on: fields.raw(0) == "1",
        last_change: fields.integer(1, "last_change").unwrap_or_default(),
        on_seconds: fields.integer(2, "on_seconds").unwrap_or_default(),
        on_seconds_today: fields.integer(3, "on_seconds_today").unwrap_or_default(),
        on_seconds_two_weeks: fields.integer(4, "on_seconds_two_weeks").unwrap_or_default(),
        average_watts: fields
            .integer(6, "average_watts")
            .map(|v| v as f64)
            .unwrap_or_default(),
        current_watts: fields
            .integer(7, "current_watts")
            .map(|v| v as f64 / 1000.0)
            .unwrap_or_default(),
        energy_today_kwh: fields
            .integer(8, "energy_today")
            .map(|v| v as f64 / 1000.0 / 60.0)
            .unwrap_or_default(),
        energy_two_weeks: fields
            .float(9, "energy_two_weeks")
            .map(|v| v / 1000.0 / 60.0)
            .unwrap_or_default(),
    };

    Decoded {
        value: snapshot,
        warnings: fields.warnings,
    }
}

struct FieldReader<'a> {
    fields: &'a [&'a str],
    warnings: Vec<DecodeWarning>,
}

impl<'a> FieldReader<'a> {
    fn raw(&self, index: usize) -> &'a str {
        self.fields[index]
    }

    fn integer(&mut self, index: usize, field: &'static str) -> Option<i64> {
        let raw = self.raw(index);
        let parsed = raw.parse::<i64>().ok();
        if parsed.is_none() {
            self.reject(index, field, raw);
        }
        parsed
    }

    // The device family reports this field with single precision; values
    // outside f32 range or non-finite text are rejected.
    fn float(&mut self, index: usize, field: &'static str) -> Option<f64> {
        let raw = self.raw(index);
        let parsed = raw.parse::<f32>().ok().filter(|v| v.is_finite()).map(f64::from);
        if parsed.is_none() {
            self.reject(index, field, raw);
        }
        parsed
    }

    fn reject(&mut self, index: usize, field: &'static str, value: &str) {
        self.warnings.push(DecodeWarning::InvalidField {
            index,
            field,
            value: value.to_string(),
        });
    }
}
