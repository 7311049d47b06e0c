//! Integration tests for Layer 0: Foundation
//!
//! Tests for feature tables, phoneme bundles, notations, and errors.

mod errors;
mod features;
