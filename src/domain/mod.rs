//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `offer` - Offer pricing rules and purchase verification

pub mod foundation;
pub mod offer;
