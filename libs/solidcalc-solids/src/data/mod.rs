//! # Canonical Solid Datasets
//!
//! Raw reference geometry for the eighteen canonical solids: vertex tables
//! plus face index tables at a fixed canonical scale. Platonic datasets are
//! hand-authored with correct winding; Archimedean datasets carry unordered
//! face index sets that the registry re-winds before use.
//!
//! All datasets are origin-centered and vertex-transitive (every vertex on
//! one circumsphere), which the winding recovery and dual construction rely
//! on.

pub mod archimedean;
pub mod platonic;

use serde::{Deserialize, Serialize};

/// Raw vertex/face data for one canonical solid.
///
/// `prewound` marks datasets whose faces already trace the polygon boundary
/// counter-clockwise viewed from outside; unordered datasets must pass
/// through winding recovery before any area, volume, or edge computation.
#[derive(Debug, Clone, Copy)]
pub struct SolidData {
    /// Stable snake_case key, matching [`SolidKind::key`].
    pub name: &'static str,
    /// Vertex positions at canonical scale.
    pub vertices: &'static [[f64; 3]],
    /// Face index sets; boundary-ordered only when `prewound` is true.
    pub faces: &'static [&'static [u32]],
    /// Whether faces are already in counter-clockwise boundary order.
    pub prewound: bool,
}

/// Identifies one of the eighteen canonical solids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SolidKind {
    // Platonic
    Tetrahedron,
    Cube,
    Octahedron,
    Dodecahedron,
    Icosahedron,
    // Archimedean
    TruncatedTetrahedron,
    Cuboctahedron,
    TruncatedCube,
    TruncatedOctahedron,
    Rhombicuboctahedron,
    TruncatedCuboctahedron,
    SnubCube,
    Icosidodecahedron,
    TruncatedDodecahedron,
    TruncatedIcosahedron,
    Rhombicosidodecahedron,
    TruncatedIcosidodecahedron,
    SnubDodecahedron,
}

/// Every canonical solid, Platonic first.
pub const ALL_SOLIDS: [SolidKind; 18] = [
    SolidKind::Tetrahedron,
    SolidKind::Cube,
    SolidKind::Octahedron,
    SolidKind::Dodecahedron,
    SolidKind::Icosahedron,
    SolidKind::TruncatedTetrahedron,
    SolidKind::Cuboctahedron,
    SolidKind::TruncatedCube,
    SolidKind::TruncatedOctahedron,
    SolidKind::Rhombicuboctahedron,
    SolidKind::TruncatedCuboctahedron,
    SolidKind::SnubCube,
    SolidKind::Icosidodecahedron,
    SolidKind::TruncatedDodecahedron,
    SolidKind::TruncatedIcosahedron,
    SolidKind::Rhombicosidodecahedron,
    SolidKind::TruncatedIcosidodecahedron,
    SolidKind::SnubDodecahedron,
];

impl SolidKind {
    /// Stable snake_case key used in metadata maps and lookups.
    pub fn key(&self) -> &'static str {
        self.dataset().name
    }

    /// Human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Tetrahedron => "Tetrahedron",
            Self::Cube => "Cube",
            Self::Octahedron => "Octahedron",
            Self::Dodecahedron => "Dodecahedron",
            Self::Icosahedron => "Icosahedron",
            Self::TruncatedTetrahedron => "Truncated tetrahedron",
            Self::Cuboctahedron => "Cuboctahedron",
            Self::TruncatedCube => "Truncated cube",
            Self::TruncatedOctahedron => "Truncated octahedron",
            Self::Rhombicuboctahedron => "Rhombicuboctahedron",
            Self::TruncatedCuboctahedron => "Truncated cuboctahedron",
            Self::SnubCube => "Snub cube",
            Self::Icosidodecahedron => "Icosidodecahedron",
            Self::TruncatedDodecahedron => "Truncated dodecahedron",
            Self::TruncatedIcosahedron => "Truncated icosahedron",
            Self::Rhombicosidodecahedron => "Rhombicosidodecahedron",
            Self::TruncatedIcosidodecahedron => "Truncated icosidodecahedron",
            Self::SnubDodecahedron => "Snub dodecahedron",
        }
    }

    /// True for the five hand-authored Platonic datasets.
    pub fn is_platonic(&self) -> bool {
        matches!(
            self,
            Self::Tetrahedron
                | Self::Cube
                | Self::Octahedron
                | Self::Dodecahedron
                | Self::Icosahedron
        )
    }

    /// Looks a solid up by its snake_case key.
    pub fn from_key(key: &str) -> Option<Self> {
        ALL_SOLIDS.into_iter().find(|kind| kind.key() == key)
    }

    /// Returns the raw dataset backing this solid.
    pub fn dataset(&self) -> &'static SolidData {
        match self {
            Self::Tetrahedron => &platonic::TETRAHEDRON,
            Self::Cube => &platonic::CUBE,
            Self::Octahedron => &platonic::OCTAHEDRON,
            Self::Dodecahedron => &platonic::DODECAHEDRON,
            Self::Icosahedron => &platonic::ICOSAHEDRON,
            Self::TruncatedTetrahedron => &archimedean::TRUNCATED_TETRAHEDRON,
            Self::Cuboctahedron => &archimedean::CUBOCTAHEDRON,
            Self::TruncatedCube => &archimedean::TRUNCATED_CUBE,
            Self::TruncatedOctahedron => &archimedean::TRUNCATED_OCTAHEDRON,
            Self::Rhombicuboctahedron => &archimedean::RHOMBICUBOCTAHEDRON,
            Self::TruncatedCuboctahedron => &archimedean::TRUNCATED_CUBOCTAHEDRON,
            Self::SnubCube => &archimedean::SNUB_CUBE,
            Self::Icosidodecahedron => &archimedean::ICOSIDODECAHEDRON,
            Self::TruncatedDodecahedron => &archimedean::TRUNCATED_DODECAHEDRON,
            Self::TruncatedIcosahedron => &archimedean::TRUNCATED_ICOSAHEDRON,
            Self::Rhombicosidodecahedron => &archimedean::RHOMBICOSIDODECAHEDRON,
            Self::TruncatedIcosidodecahedron => &archimedean::TRUNCATED_ICOSIDODECAHEDRON,
            Self::SnubDodecahedron => &archimedean::SNUB_DODECAHEDRON,
        }
    }
}
