//! Integration tests for Layer 3: Engine
//!
//! Tests for the individual sound laws and the derivation pipeline.
