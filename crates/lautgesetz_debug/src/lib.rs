//! Derivation tracing for Lautgesetz.
//!
//! This crate provides:
//! - [`Tracer`] - Records derivation events into a bounded buffer
//! - [`HumanFormatter`] / [`JsonFormatter`] - Output formats for records

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod trace;

pub use trace::{
    EVENT_TYPES, HumanFormatter, JsonFormatter, TraceBuffer, TraceBufferStats, TraceEvent, TraceFormatter,
    TraceOutput, TraceRecord, Tracer, TracerConfig,
};
