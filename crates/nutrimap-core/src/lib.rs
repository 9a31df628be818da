//! nutrimap-core
//!
//! Pure domain types for the NutriMap child nutrition field-visit system.
//! No storage or UI dependency — this is the shared vocabulary between the
//! assessment engine and its callers.

pub mod error;
pub mod models;
