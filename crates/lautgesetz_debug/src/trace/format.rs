//! Trace output formatters.
//!
//! Provides human-readable and JSON formatters for trace records.

use serde_json::json;

use super::record::{TraceEvent, TraceRecord};

// =============================================================================
// Trace Formatter Trait
// =============================================================================

/// Trait for formatting trace records.
pub trait TraceFormatter {
    /// Formats a single trace record to a string.
    fn format(&self, record: &TraceRecord) -> String;

    /// Formats multiple records.
    fn format_many(&self, records: &[&TraceRecord]) -> String {
        records
            .iter()
            .map(|r| self.format(r))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// =============================================================================
// Human-Readable Formatter
// =============================================================================

/// Formats trace records in human-readable form.
///
/// Stage records print as `<stage> <text> <label>`.
#[derive(Clone, Debug, Default)]
pub struct HumanFormatter {
    /// Whether to include timestamps.
    pub show_timestamps: bool,
    /// Whether to include record IDs.
    pub show_ids: bool,
}

impl HumanFormatter {
    /// Creates a new human formatter with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to show timestamps.
    #[must_use]
    pub fn with_timestamps(mut self) -> Self {
        self.show_timestamps = true;
        self
    }

    /// Builder method to show record IDs.
    #[must_use]
    pub fn with_ids(mut self) -> Self {
        self.show_ids = true;
        self
    }

    #[allow(clippy::cast_precision_loss)]
    fn format_timestamp(ns: u64) -> String {
        let us = ns / 1000;
        if us >= 1_000_000 {
            format!("{:.3}s", us as f64 / 1_000_000.0)
        } else if us >= 1000 {
            format!("{:.3}ms", us as f64 / 1000.0)
        } else {
            format!("{us}us")
        }
    }
}

impl TraceFormatter for HumanFormatter {
    fn format(&self, record: &TraceRecord) -> String {
        use std::fmt::Write;
        let mut prefix = String::new();

        if self.show_ids {
            let _ = write!(prefix, "[{:06}] ", record.id);
        }
        let _ = write!(prefix, "D{:04} ", record.derivation);
        if self.show_timestamps {
            let _ = write!(
                prefix,
                "{:>10} ",
                Self::format_timestamp(record.timestamp_ns)
            );
        }

        let event_str = match &record.event {
            TraceEvent::DerivationStart { input, notation } => {
                format!("=== DERIVE {input} ({notation}) ===")
            }
            TraceEvent::StageRecorded {
                index,
                text,
                label,
                changes,
                ..
            } => {
                if *changes == 0 {
                    format!("  {index} {text} {label}")
                } else {
                    format!("  {index} {text} {label} [{changes} changed]")
                }
            }
            TraceEvent::DerivationEnd { input, output } => {
                format!("=== {input} > {output} ===")
            }
            TraceEvent::DerivationFailed { input, message } => {
                format!("=== {input} FAILED: {message} ===")
            }
        };

        format!("{prefix}{event_str}")
    }
}

// =============================================================================
// JSON Formatter
// =============================================================================

/// Formats trace records as one JSON object per line.
#[derive(Clone, Debug, Default)]
pub struct JsonFormatter {
    /// Whether to pretty-print.
    pub pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to enable pretty printing.
    #[must_use]
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    fn to_value(record: &TraceRecord) -> serde_json::Value {
        let event = match &record.event {
            TraceEvent::DerivationStart { input, notation } => json!({
                "input": input,
                "notation": notation.tag(),
            }),
            TraceEvent::StageRecorded {
                index,
                law,
                label,
                text,
                changes,
            } => json!({
                "index": index,
                "law": law,
                "label": label,
                "text": text,
                "changes": changes,
            }),
            TraceEvent::DerivationEnd { input, output } => json!({
                "input": input,
                "output": output,
            }),
            TraceEvent::DerivationFailed { input, message } => json!({
                "input": input,
                "message": message,
            }),
        };
        json!({
            "id": record.id,
            "derivation": record.derivation,
            "timestamp_ns": record.timestamp_ns,
            "type": record.event_type(),
            "event": event,
        })
    }
}

impl TraceFormatter for JsonFormatter {
    fn format(&self, record: &TraceRecord) -> String {
        let value = Self::to_value(record);
        if self.pretty {
            serde_json::to_string_pretty(&value).unwrap_or_default()
        } else {
            value.to_string()
        }
    }

    fn format_many(&self, records: &[&TraceRecord]) -> String {
        let values: Vec<_> = records.iter().map(|r| Self::to_value(r)).collect();
        let array = serde_json::Value::Array(values);
        if self.pretty {
            serde_json::to_string_pretty(&array).unwrap_or_default()
        } else {
            array.to_string()
        }
    }
}
