//! # Solidcalc Solids
//!
//! Canonical polyhedron definitions and the scale & metrics engine.
//!
//! ## Architecture
//!
//! ```text
//! datasets (raw vertex/face tables)
//!     → winding (boundary-order recovery)
//!     → registry (memoized canonical definitions + base metrics)
//!     → engine (scaled payload + metrics per build)
//! ```
//!
//! Base metrics are always derived from the actual topology through the
//! shared mesh utilities - one formula set for every solid - and scaled
//! builds follow the k / k² / k³ power laws from those cached values.
//! Parametric families (pyramid, frustum) live alongside with their own
//! closed-form metrics and inverse solves.

pub mod data;
pub mod engine;
pub mod families;
pub mod registry;
pub mod winding;

pub use data::{SolidKind, ALL_SOLIDS};
pub use engine::{MetricsRecord, SolidEngine};
pub use registry::{CanonicalDefinition, SolidRegistry};
