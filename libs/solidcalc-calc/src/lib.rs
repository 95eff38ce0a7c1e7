//! # Solidcalc Calc
//!
//! Bidirectional property calculators over the solid-geometry core.
//!
//! ## Architecture
//!
//! ```text
//! solidcalc-solids (engine) → solidcalc-calc (editable property surface)
//! ```
//!
//! A calculator exposes every metric of its solid as a named property.
//! Setting a property solves the underlying scale (or family parameter)
//! back from the target value, rebuilds the mesh, and replaces all state
//! wholesale; invalid edits return `false` and keep the last good state.

pub mod calculator;
pub mod family_calc;
pub mod property;

pub use calculator::SolidCalculator;
pub use family_calc::{FrustumCalculator, PyramidCalculator};
pub use property::{PropertyDescriptor, PropertySpec, Unit};

use solidcalc_mesh::MeshPayload;
use std::collections::BTreeMap;

/// The contract consumed by the interactive property UI and persistence.
///
/// `properties` yields presentation-ready descriptors; `set_property`
/// returns a success flag and only mutates state on success; `payload` and
/// `metadata` expose the latest build read-only.
pub trait Calculator {
    /// Current property descriptors, one per table row.
    fn properties(&self) -> Vec<PropertyDescriptor>;

    /// Applies one property edit; false means rejected, state unchanged.
    fn set_property(&mut self, key: &str, value: f64) -> bool;

    /// Resets to the documented default dimensions.
    fn clear(&mut self);

    /// The latest mesh payload.
    fn payload(&self) -> &MeshPayload;

    /// The latest flat name-to-number metadata map.
    fn metadata(&self) -> &BTreeMap<String, f64>;
}
