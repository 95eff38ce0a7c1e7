//! # Canonical Solid Registry
//!
//! Builds and memoizes one [`CanonicalDefinition`] per solid: ordered faces,
//! derived edges, and base metrics computed once through the shared mesh
//! utilities, then reused for every subsequent build.

use crate::data::SolidKind;
use crate::winding::order_faces;
use glam::DVec3;
use solidcalc_mesh::metrics::{edges_from_faces, mesh_volume, surface_area};
use solidcalc_mesh::GeometryError;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Reference geometry for one solid at canonical scale plus precomputed base
/// metrics. Built once, never mutated.
///
/// Base metrics are derived from the ordered vertex/face arrays through the
/// mesh metrics utilities - the same formula set for every solid, Platonic
/// and Archimedean alike - so the stored values reproduce a recomputation by
/// construction.
#[derive(Debug, Clone)]
pub struct CanonicalDefinition {
    /// Which solid this definition describes.
    pub kind: SolidKind,
    /// Canonical-scale vertex positions.
    pub vertices: Vec<DVec3>,
    /// Boundary-ordered faces, counter-clockwise viewed from outside.
    pub faces: Vec<Vec<u32>>,
    /// Undirected edges derived from the ordered faces.
    pub edges: Vec<[u32; 2]>,
    /// Edge length at canonical scale (uniform across the solid).
    pub base_edge_length: f64,
    /// Surface area at canonical scale.
    pub base_surface_area: f64,
    /// Enclosed volume at canonical scale.
    pub base_volume: f64,
    /// Circumscribed sphere radius (vertex distance) at canonical scale.
    pub base_circumradius: f64,
    /// Midsphere radius (edge-midpoint distance) at canonical scale.
    pub base_midradius: f64,
    /// Histogram of face side counts.
    pub face_sides: BTreeMap<usize, usize>,
}

impl CanonicalDefinition {
    /// Builds the definition for one solid from its raw dataset.
    ///
    /// Non-prewound faces pass through winding recovery first; a face with
    /// no recoverable plane fails this solid only. The Euler invariant is
    /// checked before the definition is accepted.
    pub fn from_dataset(kind: SolidKind) -> Result<Self, GeometryError> {
        let data = kind.dataset();
        let vertices: Vec<DVec3> = data
            .vertices
            .iter()
            .map(|&coords| DVec3::from_array(coords))
            .collect();

        let faces: Vec<Vec<u32>> = if data.prewound {
            data.faces.iter().map(|face| face.to_vec()).collect()
        } else {
            order_faces(&vertices, data.faces)?
        };

        let edges = edges_from_faces(&faces);
        let euler =
            vertices.len() as i64 - edges.len() as i64 + faces.len() as i64;
        if euler != 2 {
            return Err(GeometryError::invalid_topology(format!(
                "{}: V - E + F = {}, expected 2",
                data.name, euler
            )));
        }

        let first_edge = edges[0];
        let endpoint_a = vertices[first_edge[0] as usize];
        let endpoint_b = vertices[first_edge[1] as usize];
        let base_edge_length = endpoint_a.distance(endpoint_b);
        let base_midradius = endpoint_a.midpoint(endpoint_b).length();
        let base_circumradius = vertices
            .iter()
            .map(|vertex| vertex.length())
            .fold(0.0, f64::max);

        let mut face_sides = BTreeMap::new();
        for face in &faces {
            *face_sides.entry(face.len()).or_insert(0) += 1;
        }

        Ok(Self {
            kind,
            base_surface_area: surface_area(&vertices, &faces),
            base_volume: mesh_volume(&vertices, &faces),
            vertices,
            faces,
            edges,
            base_edge_length,
            base_circumradius,
            base_midradius,
            face_sides,
        })
    }
}

/// Explicit, injectable registry of canonical definitions.
///
/// Lazily memoizes per solid: the first request for a kind orders faces,
/// derives edges, and computes base metrics; later requests reuse the cached
/// `Arc`. The cache is guarded by a mutex; because definition building is a
/// pure function of static data, redundant recomputation under contention
/// costs time, never correctness.
///
/// # Example
///
/// ```rust
/// use solidcalc_solids::{SolidKind, SolidRegistry};
///
/// let registry = SolidRegistry::new();
/// let cube = registry.definition(SolidKind::Cube).unwrap();
/// assert_eq!(cube.faces.len(), 6);
/// ```
#[derive(Debug, Default)]
pub struct SolidRegistry {
    cache: Mutex<HashMap<SolidKind, Arc<CanonicalDefinition>>>,
}

impl SolidRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the canonical definition for a solid, building it on first use.
    pub fn definition(&self, kind: SolidKind) -> Result<Arc<CanonicalDefinition>, GeometryError> {
        if let Some(found) = self.lock().get(&kind) {
            return Ok(Arc::clone(found));
        }
        // Build outside the lock; a racing builder just produces the same
        // value and the first insert wins.
        let built = Arc::new(CanonicalDefinition::from_dataset(kind)?);
        let mut cache = self.lock();
        Ok(Arc::clone(cache.entry(kind).or_insert(built)))
    }

    /// Number of definitions built so far.
    pub fn cached_count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<SolidKind, Arc<CanonicalDefinition>>> {
        // Cached values are pure data, so a poisoned lock is still usable.
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cube_definition_base_metrics() {
        let definition = CanonicalDefinition::from_dataset(SolidKind::Cube).unwrap();
        // Canonical cube spans [-1, 1]^3: edge 2, area 24, volume 8.
        assert_relative_eq!(definition.base_edge_length, 2.0);
        assert_relative_eq!(definition.base_surface_area, 24.0);
        assert_relative_eq!(definition.base_volume, 8.0);
        assert_relative_eq!(definition.base_circumradius, 3.0_f64.sqrt());
        assert_relative_eq!(definition.base_midradius, 2.0_f64.sqrt());
    }

    #[test]
    fn test_cuboctahedron_reordered_topology() {
        let definition =
            CanonicalDefinition::from_dataset(SolidKind::Cuboctahedron).unwrap();
        assert_eq!(definition.vertices.len(), 12);
        assert_eq!(definition.edges.len(), 24);
        assert_eq!(definition.faces.len(), 14);
        assert_eq!(definition.face_sides.get(&3), Some(&8));
        assert_eq!(definition.face_sides.get(&4), Some(&6));
    }

    #[test]
    fn test_registry_memoizes() {
        let registry = SolidRegistry::new();
        assert_eq!(registry.cached_count(), 0);
        let first = registry.definition(SolidKind::Icosahedron).unwrap();
        let second = registry.definition(SolidKind::Icosahedron).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(registry.cached_count(), 1);
    }

    #[test]
    fn test_registries_are_isolated() {
        let warm = SolidRegistry::new();
        warm.definition(SolidKind::Cube).unwrap();
        let cold = SolidRegistry::new();
        assert_eq!(cold.cached_count(), 0);
    }

    #[test]
    fn test_volume_positive_for_all_solids() {
        for kind in crate::data::ALL_SOLIDS {
            let definition = CanonicalDefinition::from_dataset(kind).unwrap();
            assert!(definition.base_volume > 0.0, "{}", kind.key());
            assert!(definition.base_surface_area > 0.0, "{}", kind.key());
        }
    }
}
