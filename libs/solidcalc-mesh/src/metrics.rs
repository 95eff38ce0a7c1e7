//! # Mesh Metrics Utilities
//!
//! Pure functions deriving metric and topological properties from vertex and
//! face arrays. Nothing here allocates state or performs I/O; every function
//! is a closed-form computation over its arguments.
//!
//! Faces are sequences of vertex indices wound counter-clockwise viewed from
//! outside the solid. Edges are never authored: [`edges_from_faces`] is the
//! only sanctioned source of edge lists.
//!
//! Vector algebra (add, scale, dot, cross, length, normalize) is
//! `glam::DVec3`; note that `normalize_or_zero` maps a zero vector to zero
//! rather than failing, so callers check lengths where that matters.

use glam::DVec3;
use std::collections::BTreeSet;

/// Computes the area of a planar simple polygon.
///
/// Fan-triangulates from the face's first vertex and sums half cross-product
/// magnitudes. Exact for planar convex polygons; faces with fewer than three
/// vertices have zero area.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use solidcalc_mesh::metrics::polygon_area;
///
/// let square = [
///     DVec3::ZERO,
///     DVec3::new(2.0, 0.0, 0.0),
///     DVec3::new(2.0, 2.0, 0.0),
///     DVec3::new(0.0, 2.0, 0.0),
/// ];
/// let area = polygon_area(&square, &[0, 1, 2, 3]);
/// assert!((area - 4.0).abs() < 1e-12);
/// ```
pub fn polygon_area(vertices: &[DVec3], face: &[u32]) -> f64 {
    if face.len() < 3 {
        return 0.0;
    }
    let anchor = vertices[face[0] as usize];
    let mut total = 0.0;
    for window in face[1..].windows(2) {
        let b = vertices[window[0] as usize];
        let c = vertices[window[1] as usize];
        total += 0.5 * (b - anchor).cross(c - anchor).length();
    }
    total
}

/// Computes the un-normalized outward normal of a face.
///
/// Cross product of the first two edges from the face's first vertex. A
/// degenerate face (collinear leading vertices, or fewer than three indices)
/// yields `DVec3::ZERO` - a signal of degenerate geometry, not an error.
pub fn face_normal(vertices: &[DVec3], face: &[u32]) -> DVec3 {
    if face.len() < 3 {
        return DVec3::ZERO;
    }
    let a = vertices[face[0] as usize];
    let b = vertices[face[1] as usize];
    let c = vertices[face[2] as usize];
    (b - a).cross(c - a)
}

/// Computes the arithmetic mean of a face's vertices.
///
/// Faces with no indices map to the origin.
pub fn face_centroid(vertices: &[DVec3], face: &[u32]) -> DVec3 {
    if face.is_empty() {
        return DVec3::ZERO;
    }
    let sum: DVec3 = face.iter().map(|&i| vertices[i as usize]).sum();
    sum / face.len() as f64
}

/// Sums [`polygon_area`] over all faces.
pub fn surface_area(vertices: &[DVec3], faces: &[Vec<u32>]) -> f64 {
    faces.iter().map(|face| polygon_area(vertices, face)).sum()
}

/// Computes the enclosed volume of a closed mesh.
///
/// Divergence-theorem decomposition: each face is fan-triangulated and every
/// triangle contributes the signed volume of its tetrahedron against the
/// origin. Correct only for closed meshes with consistent outward winding;
/// violations are not detected here (see `MeshPayload::validate` for the
/// cheap structural pre-check).
pub fn mesh_volume(vertices: &[DVec3], faces: &[Vec<u32>]) -> f64 {
    let mut volume = 0.0;
    for face in faces {
        if face.len() < 3 {
            continue;
        }
        let a = vertices[face[0] as usize];
        for window in face[1..].windows(2) {
            let b = vertices[window[0] as usize];
            let c = vertices[window[1] as usize];
            volume += a.dot(b.cross(c)) / 6.0;
        }
    }
    volume
}

/// Derives the unique undirected edge list from a face list.
///
/// Every adjacent index pair of every face (including the wrap-around pair)
/// is stored lo-hi and deduplicated, so each shared edge appears exactly
/// once. Output is sorted, making the result invariant to face-list
/// reordering and to cyclic rotation of any face's own vertex list.
///
/// # Example
///
/// ```rust
/// use solidcalc_mesh::metrics::edges_from_faces;
///
/// // Tetrahedron: four triangles share six unique edges.
/// let faces = vec![vec![0, 1, 2], vec![0, 3, 1], vec![0, 2, 3], vec![1, 3, 2]];
/// assert_eq!(edges_from_faces(&faces).len(), 6);
/// ```
pub fn edges_from_faces(faces: &[Vec<u32>]) -> Vec<[u32; 2]> {
    let mut edges = BTreeSet::new();
    for face in faces {
        for (k, &a) in face.iter().enumerate() {
            let b = face[(k + 1) % face.len()];
            if a != b {
                edges.insert([a.min(b), a.max(b)]);
            }
        }
    }
    edges.into_iter().collect()
}

/// Distance of a face's plane from the origin.
///
/// Centroid dotted with the unit normal; zero for degenerate faces.
pub fn plane_distance_from_origin(vertices: &[DVec3], face: &[u32]) -> f64 {
    let normal = face_normal(vertices, face).normalize_or_zero();
    face_centroid(vertices, face).dot(normal)
}

/// Signed angle of a point's projection about an axis.
///
/// The point is projected into the plane perpendicular to `axis`; the result
/// is the angle in `(-PI, PI]` from the (projected) `reference` direction,
/// positive counter-clockwise around `axis`. Degenerate input (zero axis, or
/// a reference parallel to the axis) yields `0.0`.
///
/// This is the primitive used to rotationally order unordered input: face
/// vertices around a face centroid, and dual-face members around a vertex
/// direction.
pub fn angle_around_axis(point: DVec3, axis: DVec3, reference: DVec3) -> f64 {
    let axis = axis.normalize_or_zero();
    if axis == DVec3::ZERO {
        return 0.0;
    }
    let x_axis = (reference - axis * reference.dot(axis)).normalize_or_zero();
    if x_axis == DVec3::ZERO {
        return 0.0;
    }
    let y_axis = axis.cross(x_axis);
    let projected = point - axis * point.dot(axis);
    projected.dot(y_axis).atan2(projected.dot(x_axis))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    /// Unit cube spanning [0,1]^3 with outward-wound quad faces.
    fn unit_cube() -> (Vec<DVec3>, Vec<Vec<u32>>) {
        let vertices = vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(1.0, 1.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(0.0, 0.0, 1.0),
            DVec3::new(1.0, 0.0, 1.0),
            DVec3::new(1.0, 1.0, 1.0),
            DVec3::new(0.0, 1.0, 1.0),
        ];
        let faces = vec![
            vec![0, 3, 2, 1], // bottom
            vec![4, 5, 6, 7], // top
            vec![0, 1, 5, 4], // front
            vec![2, 3, 7, 6], // back
            vec![0, 4, 7, 3], // left
            vec![1, 2, 6, 5], // right
        ];
        (vertices, faces)
    }

    #[test]
    fn test_polygon_area_square() {
        let vertices = vec![
            DVec3::ZERO,
            DVec3::new(2.0, 0.0, 0.0),
            DVec3::new(2.0, 2.0, 0.0),
            DVec3::new(0.0, 2.0, 0.0),
        ];
        assert_relative_eq!(polygon_area(&vertices, &[0, 1, 2, 3]), 4.0);
    }

    #[test]
    fn test_polygon_area_degenerate_face() {
        let vertices = vec![DVec3::ZERO, DVec3::X];
        assert_eq!(polygon_area(&vertices, &[0, 1]), 0.0);
    }

    #[test]
    fn test_face_normal_direction() {
        let vertices = vec![DVec3::ZERO, DVec3::X, DVec3::Y];
        let normal = face_normal(&vertices, &[0, 1, 2]);
        assert_relative_eq!(normal.x, 0.0);
        assert_relative_eq!(normal.y, 0.0);
        assert_relative_eq!(normal.z, 1.0);
    }

    #[test]
    fn test_face_normal_collinear_is_zero() {
        let vertices = vec![DVec3::ZERO, DVec3::X, DVec3::new(2.0, 0.0, 0.0)];
        assert_eq!(face_normal(&vertices, &[0, 1, 2]), DVec3::ZERO);
    }

    #[test]
    fn test_face_centroid() {
        let vertices = vec![DVec3::ZERO, DVec3::new(3.0, 0.0, 0.0), DVec3::new(0.0, 3.0, 0.0)];
        let centroid = face_centroid(&vertices, &[0, 1, 2]);
        assert_relative_eq!(centroid.x, 1.0);
        assert_relative_eq!(centroid.y, 1.0);
    }

    #[test]
    fn test_cube_surface_area_and_volume() {
        let (vertices, faces) = unit_cube();
        assert_relative_eq!(surface_area(&vertices, &faces), 6.0);
        assert_relative_eq!(mesh_volume(&vertices, &faces), 1.0);
    }

    #[test]
    fn test_volume_independent_of_origin_position() {
        // Shift the cube far from the origin; divergence sum is unchanged.
        let (vertices, faces) = unit_cube();
        let shifted: Vec<DVec3> = vertices.iter().map(|v| *v + DVec3::splat(10.0)).collect();
        assert_relative_eq!(mesh_volume(&shifted, &faces), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn test_edges_from_faces_tetrahedron() {
        let faces = vec![vec![0, 1, 2], vec![0, 3, 1], vec![0, 2, 3], vec![1, 3, 2]];
        let edges = edges_from_faces(&faces);
        assert_eq!(edges.len(), 6);
        assert!(edges.iter().all(|e| e[0] < e[1]));
    }

    #[test]
    fn test_edges_invariant_to_face_order_and_rotation() {
        let faces = vec![vec![0, 1, 2], vec![0, 3, 1], vec![0, 2, 3], vec![1, 3, 2]];
        let shuffled = vec![vec![1, 3, 2], vec![0, 2, 3], vec![1, 2, 0], vec![3, 1, 0]];
        assert_eq!(edges_from_faces(&faces), edges_from_faces(&shuffled));
    }

    #[test]
    fn test_cube_edge_count() {
        let (_, faces) = unit_cube();
        assert_eq!(edges_from_faces(&faces).len(), 12);
    }

    #[test]
    fn test_plane_distance_from_origin() {
        let vertices = vec![
            DVec3::new(0.0, 0.0, 2.0),
            DVec3::new(1.0, 0.0, 2.0),
            DVec3::new(0.0, 1.0, 2.0),
        ];
        assert_relative_eq!(plane_distance_from_origin(&vertices, &[0, 1, 2]), 2.0);
    }

    #[test]
    fn test_angle_around_axis_quadrants() {
        let axis = DVec3::Z;
        let reference = DVec3::X;
        assert_relative_eq!(angle_around_axis(DVec3::X, axis, reference), 0.0);
        assert_relative_eq!(angle_around_axis(DVec3::Y, axis, reference), FRAC_PI_2);
        assert_relative_eq!(angle_around_axis(-DVec3::X, axis, reference), PI);
        assert_relative_eq!(angle_around_axis(-DVec3::Y, axis, reference), -FRAC_PI_2);
    }

    #[test]
    fn test_angle_around_axis_ignores_axial_component() {
        let angle = angle_around_axis(DVec3::new(1.0, 1.0, 5.0), DVec3::Z, DVec3::X);
        assert_relative_eq!(angle, PI / 4.0);
    }

    #[test]
    fn test_angle_around_axis_degenerate_inputs() {
        assert_eq!(angle_around_axis(DVec3::X, DVec3::ZERO, DVec3::X), 0.0);
        assert_eq!(angle_around_axis(DVec3::X, DVec3::Z, DVec3::Z), 0.0);
    }
}
