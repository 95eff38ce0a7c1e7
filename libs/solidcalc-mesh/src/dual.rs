//! # Dual Solid Generator
//!
//! Derives the topological dual of a primal mesh: one dual vertex per primal
//! face, one dual face per primal vertex.
//!
//! Dual vertices sit at the unit-normalized outward face normals (spherical
//! dual construction), which is combinatorially exact for the classical
//! Platonic pairs: cube <-> octahedron, dodecahedron <-> icosahedron, and the
//! self-dual tetrahedron.

use crate::metrics::{angle_around_axis, face_normal};
use glam::DVec3;

/// Computes the topological dual of a primal mesh.
///
/// Returns `(dual_vertices, dual_faces)`:
///
/// - `dual_vertices[f]` is the unit-normalized outward normal of primal face
///   `f`. A degenerate (zero) primal normal produces a placeholder vertex at
///   the origin rather than an error.
/// - `dual_faces[v]` lists the primal faces incident to primal vertex `v`,
///   cyclically ordered by [`angle_around_axis`] around the vertex's
///   direction from the origin, so dual faces come out consistently wound
///   for origin-centered convex input.
///
/// Primal vertices with fewer than three incident faces produce no dual face.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use solidcalc_mesh::dual::compute_dual;
///
/// // Octahedron: 8 faces, 6 vertices -> dual has 6 faces, 8 vertices (a cube).
/// let vertices = vec![
///     DVec3::X, DVec3::Y, DVec3::Z,
///     -DVec3::X, -DVec3::Y, -DVec3::Z,
/// ];
/// let faces = vec![
///     vec![0, 1, 2], vec![1, 3, 2], vec![3, 4, 2], vec![4, 0, 2],
///     vec![1, 0, 5], vec![3, 1, 5], vec![4, 3, 5], vec![0, 4, 5],
/// ];
/// let (dual_vertices, dual_faces) = compute_dual(&vertices, &faces);
/// assert_eq!(dual_vertices.len(), 8);
/// assert_eq!(dual_faces.len(), 6);
/// ```
pub fn compute_dual(vertices: &[DVec3], faces: &[Vec<u32>]) -> (Vec<DVec3>, Vec<Vec<u32>>) {
    let dual_vertices: Vec<DVec3> = faces
        .iter()
        .map(|face| face_normal(vertices, face).normalize_or_zero())
        .collect();

    let mut incident: Vec<Vec<u32>> = vec![Vec::new(); vertices.len()];
    for (face_index, face) in faces.iter().enumerate() {
        for &vertex_index in face {
            incident[vertex_index as usize].push(face_index as u32);
        }
    }

    let mut dual_faces = Vec::with_capacity(vertices.len());
    for (vertex_index, incident_faces) in incident.iter().enumerate() {
        if incident_faces.len() < 3 {
            continue;
        }
        let mut ordered = incident_faces.clone();
        let axis = vertices[vertex_index].normalize_or_zero();
        if axis != DVec3::ZERO {
            // A fixed in-plane reference keeps the ordering independent of
            // the primal face listing order.
            let reference = axis.any_orthonormal_vector();
            ordered.sort_by(|&a, &b| {
                let angle_a = angle_around_axis(dual_vertices[a as usize], axis, reference);
                let angle_b = angle_around_axis(dual_vertices[b as usize], axis, reference);
                angle_a.total_cmp(&angle_b)
            });
        }
        dual_faces.push(ordered);
    }

    (dual_vertices, dual_faces)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::edges_from_faces;

    /// Cube with corners at (+-1, +-1, +-1), outward-wound quads.
    fn cube() -> (Vec<DVec3>, Vec<Vec<u32>>) {
        let vertices = vec![
            DVec3::new(-1.0, -1.0, -1.0),
            DVec3::new(1.0, -1.0, -1.0),
            DVec3::new(1.0, 1.0, -1.0),
            DVec3::new(-1.0, 1.0, -1.0),
            DVec3::new(-1.0, -1.0, 1.0),
            DVec3::new(1.0, -1.0, 1.0),
            DVec3::new(1.0, 1.0, 1.0),
            DVec3::new(-1.0, 1.0, 1.0),
        ];
        let faces = vec![
            vec![0, 3, 2, 1],
            vec![4, 5, 6, 7],
            vec![0, 1, 5, 4],
            vec![2, 3, 7, 6],
            vec![0, 4, 7, 3],
            vec![1, 2, 6, 5],
        ];
        (vertices, faces)
    }

    #[test]
    fn test_cube_dual_is_octahedron() {
        let (vertices, faces) = cube();
        let (dual_vertices, dual_faces) = compute_dual(&vertices, &faces);
        assert_eq!(dual_vertices.len(), 6);
        assert_eq!(dual_faces.len(), 8);
        assert_eq!(edges_from_faces(&dual_faces).len(), 12);
        assert!(dual_faces.iter().all(|face| face.len() == 3));
    }

    #[test]
    fn test_dual_vertices_are_unit_normals() {
        let (vertices, faces) = cube();
        let (dual_vertices, _) = compute_dual(&vertices, &faces);
        for dual_vertex in &dual_vertices {
            assert!((dual_vertex.length() - 1.0).abs() < 1e-12);
        }
        // The cube's first face is its bottom; the dual vertex points down.
        assert!((dual_vertices[0] - -DVec3::Z).length() < 1e-12);
    }

    #[test]
    fn test_dual_of_dual_restores_cube_counts() {
        let (vertices, faces) = cube();
        let (dual_vertices, dual_faces) = compute_dual(&vertices, &faces);
        let (dd_vertices, dd_faces) = compute_dual(&dual_vertices, &dual_faces);
        assert_eq!(dd_vertices.len(), vertices.len());
        assert_eq!(dd_faces.len(), faces.len());
        assert_eq!(
            edges_from_faces(&dd_faces).len(),
            edges_from_faces(&faces).len()
        );
    }

    #[test]
    fn test_degenerate_face_maps_to_origin() {
        let vertices = vec![DVec3::ZERO, DVec3::X, DVec3::new(2.0, 0.0, 0.0), DVec3::Y];
        // First face is collinear, so its normal is zero.
        let faces = vec![vec![0, 1, 2], vec![0, 1, 3]];
        let (dual_vertices, _) = compute_dual(&vertices, &faces);
        assert_eq!(dual_vertices[0], DVec3::ZERO);
        assert!(dual_vertices[1].length() > 0.9);
    }
}
