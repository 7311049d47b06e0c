//! REPL and CLI for Lautgesetz.
//!
//! This crate provides:
//! - [`Session`] - Inventories, configuration and tracer for a run
//! - [`Repl`] - Interactive derivation loop
//! - [`logging`] - `tracing` subscriber setup for the binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod logging;
pub mod repl;
pub mod session;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::Repl;
pub use session::{Analysis, OutputFormat, Session};
