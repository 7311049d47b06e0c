//! Sound laws and the derivation pipeline for Lautgesetz.
//!
//! This crate provides:
//! - [`SoundLaw`] - The trait every historical sound change implements
//! - [`Ruki`], [`LaryngealLoss`], [`WintersLaw`] - The built-in laws
//! - [`Pipeline`] - Ordered application with per-stage snapshots
//! - [`DerivationConfig`] - Notations and devoicing policy

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod law;
pub mod pipeline;

pub use config::DerivationConfig;
pub use law::{LaryngealLoss, LawOutcome, Ruki, SoundLaw, WintersLaw, balto_slavic_laws, law_by_name};
pub use pipeline::{Derivation, Pipeline, Stage};
