//! Integration tests over every canonical solid: topology, published
//! unit-edge metrics, scaling consistency, and dual construction.

use approx::assert_relative_eq;
use solidcalc_mesh::dual::compute_dual;
use solidcalc_mesh::metrics::{edges_from_faces, mesh_volume, surface_area};
use solidcalc_solids::{SolidEngine, SolidKind, SolidRegistry, ALL_SOLIDS};

/// (kind, vertices, edges, faces, surface area per edge², volume per edge³).
///
/// Reference values are the published closed-form metrics of the uniform
/// solids at unit edge length.
const EXPECTED: [(SolidKind, usize, usize, usize, f64, f64); 18] = [
    (SolidKind::Tetrahedron, 4, 6, 4, 1.732050808, 0.117851130),
    (SolidKind::Cube, 8, 12, 6, 6.0, 1.0),
    (SolidKind::Octahedron, 6, 12, 8, 3.464101615, 0.471404521),
    (SolidKind::Dodecahedron, 20, 30, 12, 20.645728807, 7.663118961),
    (SolidKind::Icosahedron, 12, 30, 20, 8.660254038, 2.181694991),
    (
        SolidKind::TruncatedTetrahedron,
        12,
        18,
        8,
        12.124355653,
        2.710575995,
    ),
    (SolidKind::Cuboctahedron, 12, 24, 14, 9.464101615, 2.357022604),
    (
        SolidKind::TruncatedCube,
        24,
        36,
        14,
        32.434664364,
        13.599663291,
    ),
    (
        SolidKind::TruncatedOctahedron,
        24,
        36,
        14,
        26.784609691,
        11.313708499,
    ),
    (
        SolidKind::Rhombicuboctahedron,
        24,
        48,
        26,
        21.464101615,
        8.714045208,
    ),
    (
        SolidKind::TruncatedCuboctahedron,
        48,
        72,
        26,
        61.755172439,
        41.798989873,
    ),
    (SolidKind::SnubCube, 24, 60, 38, 19.856406461, 7.889477400),
    (
        SolidKind::Icosidodecahedron,
        30,
        60,
        32,
        29.305982845,
        13.835525936,
    ),
    (
        SolidKind::TruncatedDodecahedron,
        60,
        90,
        32,
        100.990760153,
        85.039664559,
    ),
    (
        SolidKind::TruncatedIcosahedron,
        60,
        90,
        32,
        72.607253034,
        55.287730758,
    ),
    (
        SolidKind::Rhombicosidodecahedron,
        60,
        120,
        62,
        59.305982845,
        41.615323783,
    ),
    (
        SolidKind::TruncatedIcosidodecahedron,
        120,
        180,
        62,
        174.292030342,
        206.803398875,
    ),
    (
        SolidKind::SnubDodecahedron,
        60,
        150,
        92,
        55.286744959,
        37.616649963,
    ),
];

#[test]
fn every_canonical_solid_satisfies_euler_invariant() {
    let registry = SolidRegistry::new();
    for kind in ALL_SOLIDS {
        let definition = registry.definition(kind).unwrap();
        let euler = definition.vertices.len() as i64 - definition.edges.len() as i64
            + definition.faces.len() as i64;
        assert_eq!(euler, 2, "{}", kind.key());
    }
}

#[test]
fn counts_and_unit_edge_metrics_match_references() {
    let registry = SolidRegistry::new();
    for (kind, vertices, edges, faces, area_per_edge2, volume_per_edge3) in EXPECTED {
        let definition = registry.definition(kind).unwrap();
        assert_eq!(definition.vertices.len(), vertices, "{}", kind.key());
        assert_eq!(definition.edges.len(), edges, "{}", kind.key());
        assert_eq!(definition.faces.len(), faces, "{}", kind.key());

        let engine = SolidEngine::new(&registry, kind).unwrap();
        let (_, metrics) = engine.build(1.0).unwrap();
        assert_relative_eq!(
            metrics.surface_area,
            area_per_edge2,
            max_relative = 1e-8
        );
        assert_relative_eq!(metrics.volume, volume_per_edge3, max_relative = 1e-8);
    }
}

#[test]
fn cuboctahedron_scenario() {
    let registry = SolidRegistry::new();
    let definition = registry.definition(SolidKind::Cuboctahedron).unwrap();
    assert_eq!(definition.face_sides.get(&3), Some(&8));
    assert_eq!(definition.face_sides.get(&4), Some(&6));
    assert_eq!(definition.vertices.len(), 12);
    assert_eq!(definition.edges.len(), 24);
    assert_eq!(12 - 24 + 14, 2);
}

#[test]
fn scaled_payloads_validate_and_match_power_laws() {
    let registry = SolidRegistry::new();
    for kind in ALL_SOLIDS {
        let engine = SolidEngine::new(&registry, kind).unwrap();
        let (payload, metrics) = engine.build(2.5).unwrap();
        assert!(payload.validate(), "{}", kind.key());
        assert_eq!(payload.euler_characteristic(), 2, "{}", kind.key());

        let recomputed_area = surface_area(payload.vertices(), payload.faces());
        let recomputed_volume = mesh_volume(payload.vertices(), payload.faces());
        assert_relative_eq!(metrics.surface_area, recomputed_area, max_relative = 1e-9);
        assert_relative_eq!(metrics.volume, recomputed_volume, max_relative = 1e-9);
    }
}

#[test]
fn scaling_by_k_scales_metrics_by_powers_of_k() {
    let registry = SolidRegistry::new();
    let engine = SolidEngine::new(&registry, SolidKind::TruncatedIcosahedron).unwrap();
    let (_, base) = engine.build(1.2).unwrap();
    let k = 3.0;
    let (_, scaled) = engine.build(1.2 * k).unwrap();
    assert_relative_eq!(scaled.edge_length, base.edge_length * k, max_relative = 1e-9);
    assert_relative_eq!(
        scaled.circumradius,
        base.circumradius * k,
        max_relative = 1e-9
    );
    assert_relative_eq!(
        scaled.surface_area,
        base.surface_area * k * k,
        max_relative = 1e-9
    );
    assert_relative_eq!(scaled.volume, base.volume * k * k * k, max_relative = 1e-9);
}

#[test]
fn platonic_duals_pair_up() {
    let registry = SolidRegistry::new();
    let pairs = [
        (SolidKind::Cube, SolidKind::Octahedron),
        (SolidKind::Octahedron, SolidKind::Cube),
        (SolidKind::Dodecahedron, SolidKind::Icosahedron),
        (SolidKind::Icosahedron, SolidKind::Dodecahedron),
        (SolidKind::Tetrahedron, SolidKind::Tetrahedron),
    ];
    for (primal_kind, dual_kind) in pairs {
        let primal = registry.definition(primal_kind).unwrap();
        let expected = registry.definition(dual_kind).unwrap();
        let (dual_vertices, dual_faces) = compute_dual(&primal.vertices, &primal.faces);
        assert_eq!(dual_vertices.len(), expected.vertices.len(), "{}", primal_kind.key());
        assert_eq!(dual_faces.len(), expected.faces.len(), "{}", primal_kind.key());
        assert_eq!(
            edges_from_faces(&dual_faces).len(),
            expected.edges.len(),
            "{}",
            primal_kind.key()
        );
    }
}

#[test]
fn dual_of_dual_is_combinatorially_isomorphic() {
    let registry = SolidRegistry::new();
    for kind in [
        SolidKind::Tetrahedron,
        SolidKind::Cube,
        SolidKind::Octahedron,
        SolidKind::Dodecahedron,
        SolidKind::Icosahedron,
    ] {
        let definition = registry.definition(kind).unwrap();
        let (dual_vertices, dual_faces) = compute_dual(&definition.vertices, &definition.faces);
        let (dd_vertices, dd_faces) = compute_dual(&dual_vertices, &dual_faces);
        assert_eq!(dd_vertices.len(), definition.vertices.len(), "{}", kind.key());
        assert_eq!(dd_faces.len(), definition.faces.len(), "{}", kind.key());
        assert_eq!(
            edges_from_faces(&dd_faces).len(),
            definition.edges.len(),
            "{}",
            kind.key()
        );
    }
}

#[test]
fn archimedean_winding_is_consistent() {
    // Reordered faces must all face outward: the volume sum is positive and
    // every face plane sits at positive distance from the origin.
    let registry = SolidRegistry::new();
    for kind in ALL_SOLIDS {
        let definition = registry.definition(kind).unwrap();
        for face in &definition.faces {
            let distance = solidcalc_mesh::metrics::plane_distance_from_origin(
                &definition.vertices,
                face,
            );
            assert!(distance > 0.0, "{}: inward-facing plane", kind.key());
        }
    }
}
