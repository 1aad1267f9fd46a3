//! Offer Pricing - subscription pricing for e-learning offers
//!
//! This crate prices offers by billing period and subject count, exposes
//! quotes over a REST API and re-verifies client-submitted purchase totals
//! against the catalog.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
