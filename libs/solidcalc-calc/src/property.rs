//! # Property Tables
//!
//! Declarative property descriptions: one table row per exposed metric, with
//! its scaling exponent and an accessor into the canonical base metrics.
//! The calculator inverts the exponent generically instead of branching per
//! property.

use config::constants::DISPLAY_PRECISION;
use serde::{Deserialize, Serialize};
use solidcalc_solids::CanonicalDefinition;

/// Dimensional category of a property value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    /// Length-like, scales with k.
    Length,
    /// Area-like, scales with k².
    Area,
    /// Volume-like, scales with k³.
    Volume,
    /// Dimensionless count, scale-invariant.
    Count,
}

impl Unit {
    /// Display suffix relative to the generic length unit.
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Length => "u",
            Self::Area => "u²",
            Self::Volume => "u³",
            Self::Count => "",
        }
    }
}

/// One row of a calculator's declarative property table.
pub struct PropertySpec {
    /// Stable key, matching the metadata map.
    pub key: &'static str,
    /// Human-readable name.
    pub display_name: &'static str,
    /// Dimensional category.
    pub unit: Unit,
    /// Scaling exponent: 1 length, 2 area, 3 volume, 0 scale-invariant.
    pub exponent: u32,
    /// Accessor into the canonical base metrics.
    pub base_metric: fn(&CanonicalDefinition) -> f64,
}

impl PropertySpec {
    /// Whether this property has a defined inverse (can be edited).
    pub fn editable(&self) -> bool {
        self.exponent > 0
    }

    /// Fractional digits shown for this property.
    pub fn precision(&self) -> u32 {
        if self.exponent == 0 {
            0
        } else {
            DISPLAY_PRECISION
        }
    }
}

/// Presentation-only snapshot of one property at the current scale.
///
/// Carries no geometry; the interactive UI renders these and forwards edits
/// back through `set_property`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    pub key: String,
    pub display_name: String,
    pub unit: Unit,
    pub value: f64,
    pub precision: u32,
    pub editable: bool,
}

fn base_edge_length(definition: &CanonicalDefinition) -> f64 {
    definition.base_edge_length
}

fn base_circumradius(definition: &CanonicalDefinition) -> f64 {
    definition.base_circumradius
}

fn base_midradius(definition: &CanonicalDefinition) -> f64 {
    definition.base_midradius
}

fn base_surface_area(definition: &CanonicalDefinition) -> f64 {
    definition.base_surface_area
}

fn base_volume(definition: &CanonicalDefinition) -> f64 {
    definition.base_volume
}

fn vertex_count(definition: &CanonicalDefinition) -> f64 {
    definition.vertices.len() as f64
}

fn edge_count(definition: &CanonicalDefinition) -> f64 {
    definition.edges.len() as f64
}

fn face_count(definition: &CanonicalDefinition) -> f64 {
    definition.faces.len() as f64
}

/// Property table shared by every canonical solid.
pub static SOLID_PROPERTIES: &[PropertySpec] = &[
    PropertySpec {
        key: "edge_length",
        display_name: "Edge length",
        unit: Unit::Length,
        exponent: 1,
        base_metric: base_edge_length,
    },
    PropertySpec {
        key: "circumradius",
        display_name: "Circumradius",
        unit: Unit::Length,
        exponent: 1,
        base_metric: base_circumradius,
    },
    PropertySpec {
        key: "midradius",
        display_name: "Midradius",
        unit: Unit::Length,
        exponent: 1,
        base_metric: base_midradius,
    },
    PropertySpec {
        key: "surface_area",
        display_name: "Surface area",
        unit: Unit::Area,
        exponent: 2,
        base_metric: base_surface_area,
    },
    PropertySpec {
        key: "volume",
        display_name: "Volume",
        unit: Unit::Volume,
        exponent: 3,
        base_metric: base_volume,
    },
    PropertySpec {
        key: "vertex_count",
        display_name: "Vertices",
        unit: Unit::Count,
        exponent: 0,
        base_metric: vertex_count,
    },
    PropertySpec {
        key: "edge_count",
        display_name: "Edges",
        unit: Unit::Count,
        exponent: 0,
        base_metric: edge_count,
    },
    PropertySpec {
        key: "face_count",
        display_name: "Faces",
        unit: Unit::Count,
        exponent: 0,
        base_metric: face_count,
    },
];

/// Finds a property row by key.
pub fn solid_property(key: &str) -> Option<&'static PropertySpec> {
    SOLID_PROPERTIES.iter().find(|spec| spec.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_unique() {
        let mut keys: Vec<_> = SOLID_PROPERTIES.iter().map(|spec| spec.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), SOLID_PROPERTIES.len());
    }

    #[test]
    fn test_exponents_match_units() {
        for spec in SOLID_PROPERTIES {
            let expected = match spec.unit {
                Unit::Length => 1,
                Unit::Area => 2,
                Unit::Volume => 3,
                Unit::Count => 0,
            };
            assert_eq!(spec.exponent, expected, "{}", spec.key);
        }
    }

    #[test]
    fn test_counts_are_not_editable() {
        assert!(!solid_property("face_count").unwrap().editable());
        assert!(solid_property("volume").unwrap().editable());
    }

    #[test]
    fn test_unknown_key_is_none() {
        assert!(solid_property("insphere").is_none());
    }
}
