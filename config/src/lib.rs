//! # Config Crate
//!
//! Centralized configuration constants for the solid-geometry core.
//! All tolerances and tunable defaults are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, DEFAULT_EDGE_LENGTH};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! let is_zero = value.abs() < EPSILON;
//! assert!(is_zero);
//!
//! // Calculators start from the default edge length
//! assert!(DEFAULT_EDGE_LENGTH > 0.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Pure Data**: No platform-specific values, no I/O
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
