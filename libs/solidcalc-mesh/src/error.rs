//! # Geometry Errors
//!
//! Error types shared by the mesh, registry, and calculator layers.

use thiserror::Error;

/// Errors that can occur while building or interrogating solid geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// A scale or shape dimension was zero, negative, or not finite.
    #[error("Invalid dimension: {name} must be positive, got {value}")]
    InvalidDimension { name: String, value: f64 },

    /// A face has no recoverable plane (every candidate edge pair degenerate).
    #[error("Degenerate face: {message}")]
    DegenerateFace { message: String },

    /// Mesh arrays are structurally inconsistent
    #[error("Invalid topology: {message}")]
    InvalidTopology { message: String },

    /// No canonical definition exists under the requested key.
    #[error("Unknown solid: {name}")]
    UnknownSolid { name: String },
}

impl GeometryError {
    /// Creates an invalid dimension error.
    pub fn invalid_dimension(name: impl Into<String>, value: f64) -> Self {
        Self::InvalidDimension {
            name: name.into(),
            value,
        }
    }

    /// Creates a degenerate face error.
    pub fn degenerate_face(message: impl Into<String>) -> Self {
        Self::DegenerateFace {
            message: message.into(),
        }
    }

    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }

    /// Creates an unknown solid error.
    pub fn unknown_solid(name: impl Into<String>) -> Self {
        Self::UnknownSolid { name: name.into() }
    }
}
