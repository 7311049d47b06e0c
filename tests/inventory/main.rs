//! Integration tests for Layer 1: Inventory
//!
//! Tests for phoneme canonicalization, grapheme lookup, and definition loading.

mod canonical;
mod graphemes;
