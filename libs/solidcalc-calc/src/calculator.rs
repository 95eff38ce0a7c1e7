//! # Solid Property Calculator
//!
//! Wraps a scale engine and the declarative property table into the
//! edit-any-property surface: every metric is readable, every metric with a
//! nonzero scaling exponent is writable, and a successful write rebuilds the
//! whole state from the recovered scale.

use crate::property::{solid_property, PropertyDescriptor, SOLID_PROPERTIES};
use crate::Calculator;
use config::constants::DEFAULT_EDGE_LENGTH;
use solidcalc_mesh::{GeometryError, MeshPayload};
use solidcalc_solids::{MetricsRecord, SolidEngine, SolidKind, SolidRegistry};
use std::collections::BTreeMap;

/// Bidirectional property calculator for one canonical solid.
///
/// Holds exactly the latest build (payload + metrics), replaced wholesale on
/// each successful edit. Designed for single-threaded interactive use;
/// `set_property` takes `&mut self`, so concurrent edits are serialized by
/// the borrow checker.
///
/// # Example
///
/// ```rust
/// use solidcalc_calc::{Calculator, SolidCalculator};
/// use solidcalc_solids::{SolidKind, SolidRegistry};
///
/// let registry = SolidRegistry::new();
/// let mut calc = SolidCalculator::new(&registry, SolidKind::Cube).unwrap();
/// assert!(calc.set_property("volume", 8.0));
/// assert!((calc.metrics().edge_length - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug)]
pub struct SolidCalculator {
    engine: SolidEngine,
    payload: MeshPayload,
    metrics: MetricsRecord,
}

impl SolidCalculator {
    /// Creates a calculator at the default edge length.
    pub fn new(registry: &SolidRegistry, kind: SolidKind) -> Result<Self, GeometryError> {
        let engine = SolidEngine::new(registry, kind)?;
        let (payload, metrics) = engine.build(DEFAULT_EDGE_LENGTH)?;
        Ok(Self {
            engine,
            payload,
            metrics,
        })
    }

    /// The solid this calculator describes.
    pub fn kind(&self) -> SolidKind {
        self.engine.kind()
    }

    /// The typed metrics record of the latest build.
    pub fn metrics(&self) -> &MetricsRecord {
        &self.metrics
    }

    /// Current value of a property, if the key is known.
    pub fn value(&self, key: &str) -> Option<f64> {
        let metrics = &self.metrics;
        let value = match key {
            "edge_length" => metrics.edge_length,
            "circumradius" => metrics.circumradius,
            "midradius" => metrics.midradius,
            "surface_area" => metrics.surface_area,
            "volume" => metrics.volume,
            "vertex_count" => metrics.vertex_count as f64,
            "edge_count" => metrics.edge_count as f64,
            "face_count" => metrics.face_count as f64,
            _ => return None,
        };
        Some(value)
    }

    fn rebuild(&mut self, edge_length: f64) -> bool {
        match self.engine.build(edge_length) {
            Ok((payload, metrics)) => {
                self.payload = payload;
                self.metrics = metrics;
                true
            }
            Err(_) => false,
        }
    }
}

impl Calculator for SolidCalculator {
    fn properties(&self) -> Vec<PropertyDescriptor> {
        SOLID_PROPERTIES
            .iter()
            .map(|spec| PropertyDescriptor {
                key: spec.key.to_string(),
                display_name: spec.display_name.to_string(),
                unit: spec.unit,
                value: self.value(spec.key).unwrap_or_default(),
                precision: spec.precision(),
                editable: spec.editable(),
            })
            .collect()
    }

    /// Solves the canonical scale back from one target property value.
    ///
    /// For a metric with scaling exponent e, the new scale factor is
    /// `(value / base_value)^(1/e)`. Returns false - keeping the previous
    /// state - for unknown keys, non-positive or non-finite values, and
    /// scale-invariant metrics, which have no defined inverse.
    fn set_property(&mut self, key: &str, value: f64) -> bool {
        let Some(spec) = solid_property(key) else {
            return false;
        };
        if !spec.editable() || !value.is_finite() || value <= 0.0 {
            return false;
        }
        let base_value = (spec.base_metric)(self.engine.definition());
        let ratio = value / base_value;
        let scale_factor = match spec.exponent {
            1 => ratio,
            2 => ratio.sqrt(),
            3 => ratio.cbrt(),
            _ => return false,
        };
        let edge_length = self.engine.definition().base_edge_length * scale_factor;
        self.rebuild(edge_length)
    }

    fn clear(&mut self) {
        self.rebuild(DEFAULT_EDGE_LENGTH);
    }

    fn payload(&self) -> &MeshPayload {
        &self.payload
    }

    fn metadata(&self) -> &BTreeMap<String, f64> {
        self.payload.metadata()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cube_calculator() -> SolidCalculator {
        let registry = SolidRegistry::new();
        SolidCalculator::new(&registry, SolidKind::Cube).unwrap()
    }

    #[test]
    fn test_starts_at_default_edge_length() {
        let calc = cube_calculator();
        assert_relative_eq!(calc.metrics().edge_length, DEFAULT_EDGE_LENGTH);
        assert_relative_eq!(calc.metrics().surface_area, 6.0);
        assert_relative_eq!(calc.metrics().volume, 1.0);
    }

    #[test]
    fn test_set_volume_recovers_edge() {
        let mut calc = cube_calculator();
        assert!(calc.set_property("volume", 8.0));
        assert_relative_eq!(calc.metrics().edge_length, 2.0, max_relative = 1e-12);
        assert_relative_eq!(calc.metrics().surface_area, 24.0, max_relative = 1e-12);
    }

    #[test]
    fn test_set_surface_area_recovers_edge() {
        let mut calc = cube_calculator();
        assert!(calc.set_property("surface_area", 24.0));
        assert_relative_eq!(calc.metrics().edge_length, 2.0, max_relative = 1e-12);
    }

    #[test]
    fn test_rejects_scale_invariant_property() {
        let mut calc = cube_calculator();
        let before = calc.metrics().clone();
        assert!(!calc.set_property("face_count", 8.0));
        assert_eq!(calc.metrics(), &before);
    }

    #[test]
    fn test_rejects_invalid_values() {
        let mut calc = cube_calculator();
        let before = calc.metrics().clone();
        assert!(!calc.set_property("volume", 0.0));
        assert!(!calc.set_property("volume", -3.0));
        assert!(!calc.set_property("volume", f64::NAN));
        assert!(!calc.set_property("girth", 1.0));
        assert_eq!(calc.metrics(), &before);
    }

    #[test]
    fn test_no_op_edit_is_idempotent() {
        let mut calc = cube_calculator();
        calc.set_property("edge_length", 1.75);
        let before = calc.metrics().clone();
        assert!(calc.set_property("volume", before.volume));
        assert_relative_eq!(
            calc.metrics().edge_length,
            before.edge_length,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            calc.metrics().surface_area,
            before.surface_area,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_clear_restores_defaults() {
        let mut calc = cube_calculator();
        calc.set_property("edge_length", 9.0);
        calc.clear();
        assert_relative_eq!(calc.metrics().edge_length, DEFAULT_EDGE_LENGTH);
    }

    #[test]
    fn test_properties_snapshot() {
        let calc = cube_calculator();
        let descriptors = calc.properties();
        assert_eq!(descriptors.len(), SOLID_PROPERTIES.len());
        let volume = descriptors.iter().find(|d| d.key == "volume").unwrap();
        assert!(volume.editable);
        assert_relative_eq!(volume.value, 1.0);
        let faces = descriptors.iter().find(|d| d.key == "face_count").unwrap();
        assert!(!faces.editable);
        assert_relative_eq!(faces.value, 6.0);
    }
}
