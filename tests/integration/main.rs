//! End-to-end tests across every layer
//!
//! Tests for derivations driven through the session, with tracing and JSON output.

mod derivations;
mod session;
