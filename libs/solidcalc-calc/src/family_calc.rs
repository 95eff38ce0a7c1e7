//! # Family Property Calculators
//!
//! Bidirectional calculators for the multi-parameter families. Length
//! parameters are set directly; derived metrics invert through the family's
//! explicit closed-form solves with the other parameters held fixed, since
//! a generic exponent inversion is ill-posed with more than one degree of
//! freedom.

use crate::property::{PropertyDescriptor, Unit};
use crate::Calculator;
use config::constants::{
    DEFAULT_BASE_EDGE, DEFAULT_HEIGHT, DEFAULT_TOP_EDGE, DISPLAY_PRECISION,
};
use solidcalc_mesh::{GeometryError, MeshPayload};
use solidcalc_solids::families::{
    build_frustum, build_pyramid, FrustumDimensions, FrustumMetrics, PyramidDimensions,
    PyramidMetrics,
};
use std::collections::BTreeMap;

/// One row of a family calculator's property table.
///
/// Family properties have no global scaling exponent; every row is editable
/// and resolves through a closed-form solve instead.
struct FamilyPropertySpec {
    key: &'static str,
    display_name: &'static str,
    unit: Unit,
}

impl FamilyPropertySpec {
    fn descriptor(&self, value: f64) -> PropertyDescriptor {
        PropertyDescriptor {
            key: self.key.to_string(),
            display_name: self.display_name.to_string(),
            unit: self.unit,
            value,
            precision: DISPLAY_PRECISION,
            editable: true,
        }
    }
}

// =============================================================================
// PYRAMID
// =============================================================================

static PYRAMID_PROPERTIES: &[FamilyPropertySpec] = &[
    FamilyPropertySpec {
        key: "base_edge",
        display_name: "Base edge",
        unit: Unit::Length,
    },
    FamilyPropertySpec {
        key: "height",
        display_name: "Height",
        unit: Unit::Length,
    },
    FamilyPropertySpec {
        key: "slant_height",
        display_name: "Slant height",
        unit: Unit::Length,
    },
    FamilyPropertySpec {
        key: "base_area",
        display_name: "Base area",
        unit: Unit::Area,
    },
    FamilyPropertySpec {
        key: "lateral_area",
        display_name: "Lateral area",
        unit: Unit::Area,
    },
    FamilyPropertySpec {
        key: "surface_area",
        display_name: "Surface area",
        unit: Unit::Area,
    },
    FamilyPropertySpec {
        key: "volume",
        display_name: "Volume",
        unit: Unit::Volume,
    },
];

/// Bidirectional calculator for the right square pyramid family.
///
/// # Example
///
/// ```rust
/// use solidcalc_calc::{Calculator, PyramidCalculator};
///
/// let mut calc = PyramidCalculator::with_defaults();
/// // Solve height from a target volume, base fixed at 1.
/// assert!(calc.set_property("volume", 2.0));
/// assert!((calc.dimensions().height - 6.0).abs() < 1e-12);
/// ```
#[derive(Debug)]
pub struct PyramidCalculator {
    dimensions: PyramidDimensions,
    payload: MeshPayload,
    metrics: PyramidMetrics,
}

impl PyramidCalculator {
    /// Creates a calculator for a validated dimension set.
    pub fn new(dimensions: PyramidDimensions) -> Self {
        let (payload, metrics) = build_pyramid(&dimensions);
        Self {
            dimensions,
            payload,
            metrics,
        }
    }

    /// Creates a calculator at the documented default dimensions.
    pub fn with_defaults() -> Self {
        Self::new(PyramidDimensions {
            base_edge: DEFAULT_BASE_EDGE,
            height: DEFAULT_HEIGHT,
        })
    }

    /// The current dimension set.
    pub fn dimensions(&self) -> &PyramidDimensions {
        &self.dimensions
    }

    /// The metrics record of the latest build.
    pub fn metrics(&self) -> &PyramidMetrics {
        &self.metrics
    }

    fn apply(&mut self, solved: Result<PyramidDimensions, GeometryError>) -> bool {
        match solved {
            Ok(dimensions) => {
                let (payload, metrics) = build_pyramid(&dimensions);
                self.dimensions = dimensions;
                self.payload = payload;
                self.metrics = metrics;
                true
            }
            Err(_) => false,
        }
    }

    fn value(&self, key: &str) -> Option<f64> {
        let metrics = &self.metrics;
        let value = match key {
            "base_edge" => metrics.base_edge,
            "height" => metrics.height,
            "slant_height" => metrics.slant_height,
            "base_area" => metrics.base_area,
            "lateral_area" => metrics.lateral_area,
            "surface_area" => metrics.surface_area,
            "volume" => metrics.volume,
            _ => return None,
        };
        Some(value)
    }
}

impl Default for PyramidCalculator {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl Calculator for PyramidCalculator {
    fn properties(&self) -> Vec<PropertyDescriptor> {
        PYRAMID_PROPERTIES
            .iter()
            .map(|spec| spec.descriptor(self.value(spec.key).unwrap_or_default()))
            .collect()
    }

    fn set_property(&mut self, key: &str, value: f64) -> bool {
        if !value.is_finite() || value <= 0.0 {
            return false;
        }
        let base_edge = self.dimensions.base_edge;
        let height = self.dimensions.height;
        match key {
            "base_edge" => self.apply(PyramidDimensions::new(value, height)),
            "base_area" => self.apply(PyramidDimensions::new(value.sqrt(), height)),
            "height" => self.apply(PyramidDimensions::new(base_edge, value)),
            "slant_height" => {
                let solved = PyramidDimensions::height_for_slant(base_edge, value)
                    .and_then(|height| PyramidDimensions::new(base_edge, height));
                self.apply(solved)
            }
            "lateral_area" => {
                let solved = PyramidDimensions::height_for_lateral_area(base_edge, value)
                    .and_then(|height| PyramidDimensions::new(base_edge, height));
                self.apply(solved)
            }
            "surface_area" => {
                let solved = PyramidDimensions::height_for_surface_area(base_edge, value)
                    .and_then(|height| PyramidDimensions::new(base_edge, height));
                self.apply(solved)
            }
            "volume" => {
                let solved = PyramidDimensions::height_for_volume(base_edge, value)
                    .and_then(|height| PyramidDimensions::new(base_edge, height));
                self.apply(solved)
            }
            _ => false,
        }
    }

    fn clear(&mut self) {
        *self = Self::with_defaults();
    }

    fn payload(&self) -> &MeshPayload {
        &self.payload
    }

    fn metadata(&self) -> &BTreeMap<String, f64> {
        self.payload.metadata()
    }
}

// =============================================================================
// FRUSTUM
// =============================================================================

static FRUSTUM_PROPERTIES: &[FamilyPropertySpec] = &[
    FamilyPropertySpec {
        key: "base_edge",
        display_name: "Base edge",
        unit: Unit::Length,
    },
    FamilyPropertySpec {
        key: "top_edge",
        display_name: "Top edge",
        unit: Unit::Length,
    },
    FamilyPropertySpec {
        key: "height",
        display_name: "Height",
        unit: Unit::Length,
    },
    FamilyPropertySpec {
        key: "slant_height",
        display_name: "Slant height",
        unit: Unit::Length,
    },
    FamilyPropertySpec {
        key: "lateral_area",
        display_name: "Lateral area",
        unit: Unit::Area,
    },
    FamilyPropertySpec {
        key: "surface_area",
        display_name: "Surface area",
        unit: Unit::Area,
    },
    FamilyPropertySpec {
        key: "volume",
        display_name: "Volume",
        unit: Unit::Volume,
    },
];

/// Bidirectional calculator for the right square frustum family.
#[derive(Debug)]
pub struct FrustumCalculator {
    dimensions: FrustumDimensions,
    payload: MeshPayload,
    metrics: FrustumMetrics,
}

impl FrustumCalculator {
    /// Creates a calculator for a validated dimension set.
    pub fn new(dimensions: FrustumDimensions) -> Self {
        let (payload, metrics) = build_frustum(&dimensions);
        Self {
            dimensions,
            payload,
            metrics,
        }
    }

    /// Creates a calculator at the documented default dimensions.
    pub fn with_defaults() -> Self {
        Self::new(FrustumDimensions {
            base_edge: DEFAULT_BASE_EDGE,
            top_edge: DEFAULT_TOP_EDGE,
            height: DEFAULT_HEIGHT,
        })
    }

    /// The current dimension set.
    pub fn dimensions(&self) -> &FrustumDimensions {
        &self.dimensions
    }

    /// The metrics record of the latest build.
    pub fn metrics(&self) -> &FrustumMetrics {
        &self.metrics
    }

    fn apply(&mut self, solved: Result<FrustumDimensions, GeometryError>) -> bool {
        match solved {
            Ok(dimensions) => {
                let (payload, metrics) = build_frustum(&dimensions);
                self.dimensions = dimensions;
                self.payload = payload;
                self.metrics = metrics;
                true
            }
            Err(_) => false,
        }
    }

    fn value(&self, key: &str) -> Option<f64> {
        let metrics = &self.metrics;
        let value = match key {
            "base_edge" => metrics.base_edge,
            "top_edge" => metrics.top_edge,
            "height" => metrics.height,
            "slant_height" => metrics.slant_height,
            "lateral_area" => metrics.lateral_area,
            "surface_area" => metrics.surface_area,
            "volume" => metrics.volume,
            _ => return None,
        };
        Some(value)
    }
}

impl Default for FrustumCalculator {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl Calculator for FrustumCalculator {
    fn properties(&self) -> Vec<PropertyDescriptor> {
        FRUSTUM_PROPERTIES
            .iter()
            .map(|spec| spec.descriptor(self.value(spec.key).unwrap_or_default()))
            .collect()
    }

    fn set_property(&mut self, key: &str, value: f64) -> bool {
        if !value.is_finite() || value <= 0.0 {
            return false;
        }
        let FrustumDimensions {
            base_edge,
            top_edge,
            height,
        } = self.dimensions;
        match key {
            "base_edge" => self.apply(FrustumDimensions::new(value, top_edge, height)),
            "top_edge" => self.apply(FrustumDimensions::new(base_edge, value, height)),
            "height" => self.apply(FrustumDimensions::new(base_edge, top_edge, value)),
            "slant_height" => {
                let solved = FrustumDimensions::height_for_slant(base_edge, top_edge, value)
                    .and_then(|height| FrustumDimensions::new(base_edge, top_edge, height));
                self.apply(solved)
            }
            "lateral_area" => {
                let solved =
                    FrustumDimensions::height_for_lateral_area(base_edge, top_edge, value)
                        .and_then(|height| {
                            FrustumDimensions::new(base_edge, top_edge, height)
                        });
                self.apply(solved)
            }
            "surface_area" => {
                let solved =
                    FrustumDimensions::height_for_surface_area(base_edge, top_edge, value)
                        .and_then(|height| {
                            FrustumDimensions::new(base_edge, top_edge, height)
                        });
                self.apply(solved)
            }
            "volume" => {
                let solved = FrustumDimensions::height_for_volume(base_edge, top_edge, value)
                    .and_then(|height| FrustumDimensions::new(base_edge, top_edge, height));
                self.apply(solved)
            }
            _ => false,
        }
    }

    fn clear(&mut self) {
        *self = Self::with_defaults();
    }

    fn payload(&self) -> &MeshPayload {
        &self.payload
    }

    fn metadata(&self) -> &BTreeMap<String, f64> {
        self.payload.metadata()
    }
}
