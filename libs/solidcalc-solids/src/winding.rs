//! # Winding Recovery
//!
//! Re-orders unordered face index sets into consistent counter-clockwise
//! boundary order viewed from outside the solid.
//!
//! Dataset faces for the Archimedean solids are grouped by supporting plane
//! but do not trace the polygon boundary. Any area, volume, or edge
//! computation needs boundary order first, so the registry runs every
//! non-prewound face through [`order_face`] at definition time.

use config::constants::NORMAL_CANDIDATE_EPSILON;
use glam::DVec3;
use solidcalc_mesh::metrics::{angle_around_axis, face_centroid};
use solidcalc_mesh::GeometryError;

/// Re-orders one face's vertex indices into counter-clockwise boundary order.
///
/// The plane is recovered from the first non-degenerate edge pair (cross
/// product magnitude above [`NORMAL_CANDIDATE_EPSILON`]), oriented outward
/// via the face centroid (canonical data is origin-centered), and the
/// indices are then sorted by [`angle_around_axis`] around the centroid.
/// The result is independent of the input order.
///
/// A face where every candidate edge pair is degenerate has no recoverable
/// plane and yields a `DegenerateFace` error - a definition-time failure for
/// the solid that owns the face.
pub fn order_face(vertices: &[DVec3], face: &[u32]) -> Result<Vec<u32>, GeometryError> {
    if face.len() < 3 {
        return Err(GeometryError::degenerate_face(format!(
            "face needs at least 3 vertices, got {}",
            face.len()
        )));
    }

    let anchor = vertices[face[0] as usize];
    let mut normal = DVec3::ZERO;
    'candidates: for i in 1..face.len() {
        for j in (i + 1)..face.len() {
            let edge_a = vertices[face[i] as usize] - anchor;
            let edge_b = vertices[face[j] as usize] - anchor;
            let candidate = edge_a.cross(edge_b);
            if candidate.length() > NORMAL_CANDIDATE_EPSILON {
                normal = candidate;
                break 'candidates;
            }
        }
    }
    if normal == DVec3::ZERO {
        return Err(GeometryError::degenerate_face(
            "all candidate edge pairs are degenerate".to_string(),
        ));
    }

    let centroid = face_centroid(vertices, face);
    // Orient outward: canonical solids are origin-centered, so the outward
    // normal points away from the origin.
    if normal.dot(centroid) < 0.0 {
        normal = -normal;
    }
    let axis = normal.normalize();
    let reference = vertices[face[0] as usize] - centroid;

    let mut ordered = face.to_vec();
    ordered.sort_by(|&a, &b| {
        let angle_a = angle_around_axis(vertices[a as usize] - centroid, axis, reference);
        let angle_b = angle_around_axis(vertices[b as usize] - centroid, axis, reference);
        angle_a.total_cmp(&angle_b)
    });
    Ok(ordered)
}

/// Runs [`order_face`] over a whole face table.
pub fn order_faces(
    vertices: &[DVec3],
    faces: &[&[u32]],
) -> Result<Vec<Vec<u32>>, GeometryError> {
    faces
        .iter()
        .map(|face| order_face(vertices, face))
        .collect()
}
