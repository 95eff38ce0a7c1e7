//! # Mesh Payload
//!
//! Immutable vertex/edge/face/label/metadata snapshot for one solid at one
//! scale. A new scale yields a new payload; nothing is mutated in place.

use crate::metrics::{edges_from_faces, surface_area};
use config::constants::EPSILON;
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A polygonal mesh snapshot produced by one build call.
///
/// Vertices are `f64` positions; faces are counter-clockwise index loops
/// viewed from outside; edges are always derived from the faces, never
/// authored, so edge count stays consistent with face topology. The metadata
/// map mirrors the build's metrics record as plain named values for generic
/// consumers (rendering, persistence).
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use solidcalc_mesh::MeshPayload;
///
/// let vertices = vec![DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z];
/// let faces = vec![vec![0, 2, 1], vec![0, 1, 3], vec![0, 3, 2], vec![1, 2, 3]];
/// let payload = MeshPayload::new(vertices, faces, vec!["Edge length".into()], 1.0);
/// assert_eq!(payload.edge_count(), 6);
/// assert_eq!(payload.euler_characteristic(), 2);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshPayload {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Undirected edges, lo-hi index pairs, derived from faces
    edges: Vec<[u32; 2]>,
    /// Vertex index loops, counter-clockwise viewed from outside
    faces: Vec<Vec<u32>>,
    /// Descriptive dimension labels ("Edge length", "Height", ...)
    labels: Vec<String>,
    /// Named metric values mirroring the build's metrics record
    metadata: BTreeMap<String, f64>,
    /// The linear dimension this payload was built at
    suggested_scale: f64,
}

impl MeshPayload {
    /// Creates a payload from vertices and faces, deriving the edge list.
    pub fn new(
        vertices: Vec<DVec3>,
        faces: Vec<Vec<u32>>,
        labels: Vec<String>,
        suggested_scale: f64,
    ) -> Self {
        let edges = edges_from_faces(&faces);
        Self {
            vertices,
            edges,
            faces,
            labels,
            metadata: BTreeMap::new(),
            suggested_scale,
        }
    }

    /// Replaces the metadata map (builder style).
    pub fn with_metadata(mut self, metadata: BTreeMap<String, f64>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the derived edges.
    #[inline]
    pub fn edges(&self) -> &[[u32; 2]] {
        &self.edges
    }

    /// Returns a reference to the faces.
    #[inline]
    pub fn faces(&self) -> &[Vec<u32>] {
        &self.faces
    }

    /// Returns the dimension labels.
    #[inline]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the flat name-to-number metadata map.
    #[inline]
    pub fn metadata(&self) -> &BTreeMap<String, f64> {
        &self.metadata
    }

    /// Returns the linear dimension this payload was built at.
    #[inline]
    pub fn suggested_scale(&self) -> f64 {
        self.suggested_scale
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of derived edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// V - E + F. Equals 2 for closed simply-connected meshes.
    pub fn euler_characteristic(&self) -> i64 {
        self.vertex_count() as i64 - self.edge_count() as i64 + self.face_count() as i64
    }

    /// Histogram of face side counts (e.g. `{3: 8, 4: 6}` for a cuboctahedron).
    pub fn face_sides(&self) -> BTreeMap<usize, usize> {
        let mut histogram = BTreeMap::new();
        for face in &self.faces {
            *histogram.entry(face.len()).or_insert(0) += 1;
        }
        histogram
    }

    /// Validates the payload for structural correctness.
    ///
    /// Checks:
    /// - Every face has at least 3 indices, all in bounds
    /// - The Euler invariant V - E + F == 2 holds
    /// - The derived surface area is nonzero
    ///
    /// This is the cheap pre-check to run before trusting volume output from
    /// a mesh of unknown provenance. Returns true if valid.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;
        for face in &self.faces {
            if face.len() < 3 {
                return false;
            }
            if face.iter().any(|&index| index >= vertex_count) {
                return false;
            }
        }
        if self.euler_characteristic() != 2 {
            return false;
        }
        surface_area(&self.vertices, &self.faces) > EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tetrahedron() -> MeshPayload {
        let vertices = vec![DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z];
        let faces = vec![vec![0, 2, 1], vec![0, 1, 3], vec![0, 3, 2], vec![1, 2, 3]];
        MeshPayload::new(vertices, faces, vec!["Edge length".into()], 1.0)
    }

    #[test]
    fn test_counts_match_arrays() {
        let payload = tetrahedron();
        assert_eq!(payload.vertex_count(), payload.vertices().len());
        assert_eq!(payload.edge_count(), payload.edges().len());
        assert_eq!(payload.face_count(), payload.faces().len());
    }

    #[test]
    fn test_edges_are_derived() {
        let payload = tetrahedron();
        assert_eq!(payload.edge_count(), 6);
    }

    #[test]
    fn test_euler_characteristic() {
        assert_eq!(tetrahedron().euler_characteristic(), 2);
    }

    #[test]
    fn test_face_sides_histogram() {
        let histogram = tetrahedron().face_sides();
        assert_eq!(histogram.get(&3), Some(&4));
        assert_eq!(histogram.len(), 1);
    }

    #[test]
    fn test_validate_accepts_closed_mesh() {
        assert!(tetrahedron().validate());
    }

    #[test]
    fn test_validate_rejects_out_of_bounds_index() {
        let vertices = vec![DVec3::ZERO, DVec3::X, DVec3::Y];
        let faces = vec![vec![0, 1, 5]];
        let payload = MeshPayload::new(vertices, faces, Vec::new(), 1.0);
        assert!(!payload.validate());
    }

    #[test]
    fn test_validate_rejects_open_mesh() {
        // A single triangle is not closed: V - E + F = 3 - 3 + 1 = 1.
        let vertices = vec![DVec3::ZERO, DVec3::X, DVec3::Y];
        let faces = vec![vec![0, 1, 2]];
        let payload = MeshPayload::new(vertices, faces, Vec::new(), 1.0);
        assert!(!payload.validate());
    }

    #[test]
    fn test_metadata_round_trip() {
        let mut metadata = BTreeMap::new();
        metadata.insert("volume".to_string(), 8.0);
        let payload = tetrahedron().with_metadata(metadata);
        assert_eq!(payload.metadata().get("volume"), Some(&8.0));
    }
}
