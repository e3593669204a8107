//! Testing infrastructure for moonphase integration tests.
//!
//! This crate provides utilities for writing deterministic tests:
//! - `providers`: Illumination providers with scripted or failing output
//! - `fixtures`: Canonical dates, samples and calculators
//! - `assertions`: Custom assertions on stage snapshots

pub mod assertions;
pub mod fixtures;
pub mod providers;

pub use providers::{FailingProvider, FixedProvider, ScriptedProvider};
