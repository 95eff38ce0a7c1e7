//! # Scale & Metrics Engine
//!
//! Scales a canonical definition to a requested edge length and emits a
//! standardized mesh payload plus a typed metrics record.
//!
//! Faces and edges are scale-invariant and copied unchanged; length-, area-
//! and volume-like metrics follow the k / k² / k³ power laws from the cached
//! base metrics. Agreement between the power laws and a recomputation over
//! the scaled vertex array is a tested correctness property.

use crate::data::SolidKind;
use crate::registry::{CanonicalDefinition, SolidRegistry};
use serde::{Deserialize, Serialize};
use solidcalc_mesh::{GeometryError, MeshPayload};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Named metric values for one solid at one specific scale.
///
/// Recreated on every build; never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    /// Edge length at the built scale.
    pub edge_length: f64,
    /// Circumscribed sphere radius.
    pub circumradius: f64,
    /// Midsphere radius.
    pub midradius: f64,
    /// Total surface area.
    pub surface_area: f64,
    /// Enclosed volume.
    pub volume: f64,
    /// Number of vertices (scale-invariant).
    pub vertex_count: usize,
    /// Number of edges (scale-invariant).
    pub edge_count: usize,
    /// Number of faces (scale-invariant).
    pub face_count: usize,
}

impl MetricsRecord {
    /// Flattens the record into a name-to-number map for generic consumers.
    pub fn to_metadata(&self) -> BTreeMap<String, f64> {
        let mut metadata = BTreeMap::new();
        metadata.insert("edge_length".to_string(), self.edge_length);
        metadata.insert("circumradius".to_string(), self.circumradius);
        metadata.insert("midradius".to_string(), self.midradius);
        metadata.insert("surface_area".to_string(), self.surface_area);
        metadata.insert("volume".to_string(), self.volume);
        metadata.insert("vertex_count".to_string(), self.vertex_count as f64);
        metadata.insert("edge_count".to_string(), self.edge_count as f64);
        metadata.insert("face_count".to_string(), self.face_count as f64);
        metadata
    }
}

/// Builds scaled meshes and metrics for one canonical solid.
///
/// # Example
///
/// ```rust
/// use solidcalc_solids::{SolidEngine, SolidKind, SolidRegistry};
///
/// let registry = SolidRegistry::new();
/// let engine = SolidEngine::new(&registry, SolidKind::Cube).unwrap();
/// let (payload, metrics) = engine.build(1.0).unwrap();
/// assert_eq!(payload.vertex_count(), 8);
/// assert!((metrics.volume - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct SolidEngine {
    definition: Arc<CanonicalDefinition>,
}

impl SolidEngine {
    /// Creates an engine for one solid, building its definition on demand.
    pub fn new(registry: &SolidRegistry, kind: SolidKind) -> Result<Self, GeometryError> {
        Ok(Self {
            definition: registry.definition(kind)?,
        })
    }

    /// The solid this engine builds.
    pub fn kind(&self) -> SolidKind {
        self.definition.kind
    }

    /// The canonical definition backing this engine.
    pub fn definition(&self) -> &CanonicalDefinition {
        &self.definition
    }

    /// Builds the mesh payload and metrics record for a requested edge length.
    ///
    /// Rejects non-positive or non-finite input before any computation; the
    /// caller's previous state stays untouched on failure.
    pub fn build(&self, edge_length: f64) -> Result<(MeshPayload, MetricsRecord), GeometryError> {
        if !edge_length.is_finite() || edge_length <= 0.0 {
            return Err(GeometryError::invalid_dimension("edge length", edge_length));
        }

        let definition = &self.definition;
        let scale = edge_length / definition.base_edge_length;
        let vertices = definition
            .vertices
            .iter()
            .map(|&vertex| vertex * scale)
            .collect();

        let metrics = MetricsRecord {
            edge_length,
            circumradius: definition.base_circumradius * scale,
            midradius: definition.base_midradius * scale,
            surface_area: definition.base_surface_area * scale * scale,
            volume: definition.base_volume * scale * scale * scale,
            vertex_count: definition.vertices.len(),
            edge_count: definition.edges.len(),
            face_count: definition.faces.len(),
        };

        let payload = MeshPayload::new(
            vertices,
            definition.faces.clone(),
            vec!["Edge length".to_string()],
            edge_length,
        )
        .with_metadata(metrics.to_metadata());

        Ok((payload, metrics))
    }
}
