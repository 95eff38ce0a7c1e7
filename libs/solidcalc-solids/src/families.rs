//! # Parametric Solid Families
//!
//! Multi-parameter solids (square pyramid, square frustum) that build real
//! meshes through the same payload path as the canonical solids, with
//! closed-form metrics and explicit inverse formulas.
//!
//! Unlike the canonical solids, these families have more than one degree of
//! freedom, so solving a metric backward is only well-posed with the other
//! parameters held fixed. The `height_for_*` functions are those compound
//! solves; the property calculator layer dispatches to them.

use glam::DVec3;
use serde::{Deserialize, Serialize};
use solidcalc_mesh::{GeometryError, MeshPayload};
use std::collections::BTreeMap;

fn require_positive(name: &str, value: f64) -> Result<f64, GeometryError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(GeometryError::invalid_dimension(name, value));
    }
    Ok(value)
}

// =============================================================================
// SQUARE PYRAMID
// =============================================================================

/// Shape parameters of a right square pyramid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PyramidDimensions {
    /// Base edge length.
    pub base_edge: f64,
    /// Apex height above the base plane.
    pub height: f64,
}

impl PyramidDimensions {
    /// Validates and creates the dimension set.
    pub fn new(base_edge: f64, height: f64) -> Result<Self, GeometryError> {
        Ok(Self {
            base_edge: require_positive("base edge", base_edge)?,
            height: require_positive("height", height)?,
        })
    }

    /// Slant height of a lateral face (apex to base-edge midpoint).
    pub fn slant_height(&self) -> f64 {
        let half_base = self.base_edge / 2.0;
        (self.height * self.height + half_base * half_base).sqrt()
    }

    /// Area of the square base.
    pub fn base_area(&self) -> f64 {
        self.base_edge * self.base_edge
    }

    /// Combined area of the four lateral triangles.
    pub fn lateral_area(&self) -> f64 {
        2.0 * self.base_edge * self.slant_height()
    }

    /// Total surface area.
    pub fn surface_area(&self) -> f64 {
        self.base_area() + self.lateral_area()
    }

    /// Enclosed volume.
    pub fn volume(&self) -> f64 {
        self.base_area() * self.height / 3.0
    }

    /// Height reaching a target volume with the base edge fixed.
    pub fn height_for_volume(base_edge: f64, volume: f64) -> Result<f64, GeometryError> {
        require_positive("base edge", base_edge)?;
        require_positive("volume", volume)?;
        Ok(3.0 * volume / (base_edge * base_edge))
    }

    /// Height reaching a target slant height with the base edge fixed.
    ///
    /// Undefined (error) when the slant does not exceed half the base edge.
    pub fn height_for_slant(base_edge: f64, slant_height: f64) -> Result<f64, GeometryError> {
        require_positive("base edge", base_edge)?;
        require_positive("slant height", slant_height)?;
        let half_base = base_edge / 2.0;
        let height_squared = slant_height * slant_height - half_base * half_base;
        if height_squared <= 0.0 {
            return Err(GeometryError::invalid_dimension(
                "slant height",
                slant_height,
            ));
        }
        Ok(height_squared.sqrt())
    }

    /// Height reaching a target lateral area with the base edge fixed.
    pub fn height_for_lateral_area(
        base_edge: f64,
        lateral_area: f64,
    ) -> Result<f64, GeometryError> {
        require_positive("base edge", base_edge)?;
        require_positive("lateral area", lateral_area)?;
        Self::height_for_slant(base_edge, lateral_area / (2.0 * base_edge))
    }

    /// Height reaching a target total surface area with the base edge fixed.
    ///
    /// Undefined (error) when the target does not exceed twice the base area,
    /// the limit as the apex sinks into the base plane.
    pub fn height_for_surface_area(
        base_edge: f64,
        surface_area: f64,
    ) -> Result<f64, GeometryError> {
        require_positive("base edge", base_edge)?;
        require_positive("surface area", surface_area)?;
        let base_area = base_edge * base_edge;
        Self::height_for_lateral_area(base_edge, surface_area - base_area)
    }
}

/// Named metric values for one pyramid build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PyramidMetrics {
    pub base_edge: f64,
    pub height: f64,
    pub slant_height: f64,
    pub base_area: f64,
    pub lateral_area: f64,
    pub surface_area: f64,
    pub volume: f64,
}

impl PyramidMetrics {
    /// Evaluates every metric for one dimension set.
    pub fn from_dimensions(dimensions: &PyramidDimensions) -> Self {
        Self {
            base_edge: dimensions.base_edge,
            height: dimensions.height,
            slant_height: dimensions.slant_height(),
            base_area: dimensions.base_area(),
            lateral_area: dimensions.lateral_area(),
            surface_area: dimensions.surface_area(),
            volume: dimensions.volume(),
        }
    }

    /// Flattens the record into a name-to-number map.
    pub fn to_metadata(&self) -> BTreeMap<String, f64> {
        let mut metadata = BTreeMap::new();
        metadata.insert("base_edge".to_string(), self.base_edge);
        metadata.insert("height".to_string(), self.height);
        metadata.insert("slant_height".to_string(), self.slant_height);
        metadata.insert("base_area".to_string(), self.base_area);
        metadata.insert("lateral_area".to_string(), self.lateral_area);
        metadata.insert("surface_area".to_string(), self.surface_area);
        metadata.insert("volume".to_string(), self.volume);
        metadata
    }
}

/// Builds the 5-vertex pyramid mesh with its metrics record.
///
/// Base centered at the origin in the z = 0 plane, apex on +z.
pub fn build_pyramid(dimensions: &PyramidDimensions) -> (MeshPayload, PyramidMetrics) {
    let half_base = dimensions.base_edge / 2.0;
    let vertices = vec![
        DVec3::new(-half_base, -half_base, 0.0),
        DVec3::new(half_base, -half_base, 0.0),
        DVec3::new(half_base, half_base, 0.0),
        DVec3::new(-half_base, half_base, 0.0),
        DVec3::new(0.0, 0.0, dimensions.height),
    ];
    let faces = vec![
        vec![0, 3, 2, 1], // base, outward -z
        vec![0, 1, 4],
        vec![1, 2, 4],
        vec![2, 3, 4],
        vec![3, 0, 4],
    ];
    let metrics = PyramidMetrics::from_dimensions(dimensions);
    let payload = MeshPayload::new(
        vertices,
        faces,
        vec!["Base edge".to_string(), "Height".to_string()],
        dimensions.base_edge,
    )
    .with_metadata(metrics.to_metadata());
    (payload, metrics)
}

// =============================================================================
// SQUARE FRUSTUM
// =============================================================================

/// Shape parameters of a right square frustum (truncated pyramid).
///
/// The top edge may equal or exceed the base edge; the solid is then a prism
/// or an outward taper, and every formula still holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrustumDimensions {
    /// Bottom square edge length.
    pub base_edge: f64,
    /// Top square edge length.
    pub top_edge: f64,
    /// Distance between the parallel squares.
    pub height: f64,
}

impl FrustumDimensions {
    /// Validates and creates the dimension set.
    pub fn new(base_edge: f64, top_edge: f64, height: f64) -> Result<Self, GeometryError> {
        Ok(Self {
            base_edge: require_positive("base edge", base_edge)?,
            top_edge: require_positive("top edge", top_edge)?,
            height: require_positive("height", height)?,
        })
    }

    /// Slant height of a lateral trapezoid.
    pub fn slant_height(&self) -> f64 {
        let half_taper = (self.base_edge - self.top_edge) / 2.0;
        (self.height * self.height + half_taper * half_taper).sqrt()
    }

    /// Combined area of the four lateral trapezoids.
    pub fn lateral_area(&self) -> f64 {
        2.0 * (self.base_edge + self.top_edge) * self.slant_height()
    }

    /// Total surface area (both squares plus the lateral trapezoids).
    pub fn surface_area(&self) -> f64 {
        self.base_edge * self.base_edge + self.top_edge * self.top_edge + self.lateral_area()
    }

    /// Enclosed volume (prismatoid formula).
    pub fn volume(&self) -> f64 {
        let a = self.base_edge;
        let c = self.top_edge;
        self.height * (a * a + a * c + c * c) / 3.0
    }

    /// Height reaching a target volume with both edges fixed.
    pub fn height_for_volume(
        base_edge: f64,
        top_edge: f64,
        volume: f64,
    ) -> Result<f64, GeometryError> {
        require_positive("base edge", base_edge)?;
        require_positive("top edge", top_edge)?;
        require_positive("volume", volume)?;
        let cross_section = base_edge * base_edge + base_edge * top_edge + top_edge * top_edge;
        Ok(3.0 * volume / cross_section)
    }

    /// Height reaching a target slant height with both edges fixed.
    pub fn height_for_slant(
        base_edge: f64,
        top_edge: f64,
        slant_height: f64,
    ) -> Result<f64, GeometryError> {
        require_positive("base edge", base_edge)?;
        require_positive("top edge", top_edge)?;
        require_positive("slant height", slant_height)?;
        let half_taper = (base_edge - top_edge) / 2.0;
        let height_squared = slant_height * slant_height - half_taper * half_taper;
        if height_squared <= 0.0 {
            return Err(GeometryError::invalid_dimension(
                "slant height",
                slant_height,
            ));
        }
        Ok(height_squared.sqrt())
    }

    /// Height reaching a target lateral area with both edges fixed.
    pub fn height_for_lateral_area(
        base_edge: f64,
        top_edge: f64,
        lateral_area: f64,
    ) -> Result<f64, GeometryError> {
        require_positive("lateral area", lateral_area)?;
        let slant = lateral_area / (2.0 * (base_edge + top_edge));
        Self::height_for_slant(base_edge, top_edge, slant)
    }

    /// Height reaching a target total surface area with both edges fixed.
    pub fn height_for_surface_area(
        base_edge: f64,
        top_edge: f64,
        surface_area: f64,
    ) -> Result<f64, GeometryError> {
        require_positive("base edge", base_edge)?;
        require_positive("top edge", top_edge)?;
        require_positive("surface area", surface_area)?;
        let caps = base_edge * base_edge + top_edge * top_edge;
        Self::height_for_lateral_area(base_edge, top_edge, surface_area - caps)
    }
}

/// Named metric values for one frustum build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrustumMetrics {
    pub base_edge: f64,
    pub top_edge: f64,
    pub height: f64,
    pub slant_height: f64,
    pub lateral_area: f64,
    pub surface_area: f64,
    pub volume: f64,
}

impl FrustumMetrics {
    /// Evaluates every metric for one dimension set.
    pub fn from_dimensions(dimensions: &FrustumDimensions) -> Self {
        Self {
            base_edge: dimensions.base_edge,
            top_edge: dimensions.top_edge,
            height: dimensions.height,
            slant_height: dimensions.slant_height(),
            lateral_area: dimensions.lateral_area(),
            surface_area: dimensions.surface_area(),
            volume: dimensions.volume(),
        }
    }

    /// Flattens the record into a name-to-number map.
    pub fn to_metadata(&self) -> BTreeMap<String, f64> {
        let mut metadata = BTreeMap::new();
        metadata.insert("base_edge".to_string(), self.base_edge);
        metadata.insert("top_edge".to_string(), self.top_edge);
        metadata.insert("height".to_string(), self.height);
        metadata.insert("slant_height".to_string(), self.slant_height);
        metadata.insert("lateral_area".to_string(), self.lateral_area);
        metadata.insert("surface_area".to_string(), self.surface_area);
        metadata.insert("volume".to_string(), self.volume);
        metadata
    }
}

/// Builds the 8-vertex frustum mesh with its metrics record.
///
/// Bottom square centered at the origin in the z = 0 plane, top square at
/// z = height.
pub fn build_frustum(dimensions: &FrustumDimensions) -> (MeshPayload, FrustumMetrics) {
    let half_base = dimensions.base_edge / 2.0;
    let half_top = dimensions.top_edge / 2.0;
    let height = dimensions.height;
    let vertices = vec![
        DVec3::new(-half_base, -half_base, 0.0),
        DVec3::new(half_base, -half_base, 0.0),
        DVec3::new(half_base, half_base, 0.0),
        DVec3::new(-half_base, half_base, 0.0),
        DVec3::new(-half_top, -half_top, height),
        DVec3::new(half_top, -half_top, height),
        DVec3::new(half_top, half_top, height),
        DVec3::new(-half_top, half_top, height),
    ];
    let faces = vec![
        vec![0, 3, 2, 1], // bottom, outward -z
        vec![4, 5, 6, 7], // top, outward +z
        vec![0, 1, 5, 4],
        vec![1, 2, 6, 5],
        vec![2, 3, 7, 6],
        vec![3, 0, 4, 7],
    ];
    let metrics = FrustumMetrics::from_dimensions(dimensions);
    let payload = MeshPayload::new(
        vertices,
        faces,
        vec![
            "Base edge".to_string(),
            "Top edge".to_string(),
            "Height".to_string(),
        ],
        dimensions.base_edge,
    )
    .with_metadata(metrics.to_metadata());
    (payload, metrics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use solidcalc_mesh::metrics::{mesh_volume, surface_area};

    #[test]
    fn test_pyramid_closed_forms() {
        let dimensions = PyramidDimensions::new(2.0, 3.0).unwrap();
        assert_relative_eq!(dimensions.volume(), 4.0);
        assert_relative_eq!(dimensions.slant_height(), 10.0_f64.sqrt());
        assert_relative_eq!(dimensions.surface_area(), 4.0 + 4.0 * 10.0_f64.sqrt());
    }

    #[test]
    fn test_pyramid_mesh_matches_closed_forms() {
        let dimensions = PyramidDimensions::new(1.7, 2.4).unwrap();
        let (payload, metrics) = build_pyramid(&dimensions);
        assert_eq!(payload.vertex_count(), 5);
        assert_eq!(payload.edge_count(), 8);
        assert_eq!(payload.euler_characteristic(), 2);
        let derived_area = surface_area(payload.vertices(), payload.faces());
        let derived_volume = mesh_volume(payload.vertices(), payload.faces());
        assert_relative_eq!(derived_area, metrics.surface_area, max_relative = 1e-12);
        assert_relative_eq!(derived_volume, metrics.volume, max_relative = 1e-12);
    }

    #[test]
    fn test_pyramid_height_solves_round_trip() {
        let dimensions = PyramidDimensions::new(2.5, 1.75).unwrap();
        let height =
            PyramidDimensions::height_for_volume(2.5, dimensions.volume()).unwrap();
        assert_relative_eq!(height, 1.75, max_relative = 1e-12);
        let height =
            PyramidDimensions::height_for_surface_area(2.5, dimensions.surface_area()).unwrap();
        assert_relative_eq!(height, 1.75, max_relative = 1e-12);
        let height =
            PyramidDimensions::height_for_slant(2.5, dimensions.slant_height()).unwrap();
        assert_relative_eq!(height, 1.75, max_relative = 1e-12);
    }

    #[test]
    fn test_pyramid_rejects_unreachable_surface_area() {
        // Anything at or below twice the base area admits no positive height.
        assert!(PyramidDimensions::height_for_surface_area(2.0, 8.0).is_err());
        assert!(PyramidDimensions::height_for_surface_area(2.0, 3.0).is_err());
    }

    #[test]
    fn test_pyramid_rejects_bad_dimensions() {
        assert!(PyramidDimensions::new(0.0, 1.0).is_err());
        assert!(PyramidDimensions::new(1.0, -2.0).is_err());
        assert!(PyramidDimensions::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_frustum_closed_forms() {
        let dimensions = FrustumDimensions::new(2.0, 1.0, 3.0).unwrap();
        assert_relative_eq!(dimensions.volume(), 7.0);
        assert_relative_eq!(dimensions.slant_height(), 9.25_f64.sqrt());
    }

    #[test]
    fn test_frustum_mesh_matches_closed_forms() {
        let dimensions = FrustumDimensions::new(2.0, 0.8, 1.3).unwrap();
        let (payload, metrics) = build_frustum(&dimensions);
        assert_eq!(payload.vertex_count(), 8);
        assert_eq!(payload.edge_count(), 12);
        assert_eq!(payload.euler_characteristic(), 2);
        let derived_area = surface_area(payload.vertices(), payload.faces());
        let derived_volume = mesh_volume(payload.vertices(), payload.faces());
        assert_relative_eq!(derived_area, metrics.surface_area, max_relative = 1e-12);
        assert_relative_eq!(derived_volume, metrics.volume, max_relative = 1e-12);
    }

    #[test]
    fn test_frustum_height_solves_round_trip() {
        let dimensions = FrustumDimensions::new(3.0, 1.5, 2.25).unwrap();
        let height =
            FrustumDimensions::height_for_volume(3.0, 1.5, dimensions.volume()).unwrap();
        assert_relative_eq!(height, 2.25, max_relative = 1e-12);
        let height = FrustumDimensions::height_for_surface_area(
            3.0,
            1.5,
            dimensions.surface_area(),
        )
        .unwrap();
        assert_relative_eq!(height, 2.25, max_relative = 1e-12);
    }

    #[test]
    fn test_degenerate_frustum_is_a_prism() {
        let dimensions = FrustumDimensions::new(2.0, 2.0, 5.0).unwrap();
        assert_relative_eq!(dimensions.volume(), 20.0);
        assert_relative_eq!(dimensions.slant_height(), 5.0);
        let (payload, metrics) = build_frustum(&dimensions);
        let derived_volume = mesh_volume(payload.vertices(), payload.faces());
        assert_relative_eq!(derived_volume, metrics.volume, max_relative = 1e-12);
    }
}
