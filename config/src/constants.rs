//! # Configuration Constants
//!
//! Centralized constants for the solid-geometry core. All comparison
//! tolerances, winding-recovery parameters, and calculator defaults are
//! defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Winding**: Degeneracy thresholds for face-order recovery
//! - **Calculator**: Default dimensions and display precision

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Relative tolerance for cross-checking scaled metrics.
///
/// Metrics obtained from the k/k²/k³ power laws must agree with metrics
/// recomputed from the scaled vertex array within this relative bound.
///
/// # Example
///
/// ```rust
/// use config::constants::METRIC_RELATIVE_TOLERANCE;
///
/// let expected = 24.0_f64;
/// let recomputed = 24.0 + 1e-12;
/// assert!(((recomputed - expected) / expected).abs() < METRIC_RELATIVE_TOLERANCE);
/// ```
pub const METRIC_RELATIVE_TOLERANCE: f64 = 1e-9;

// =============================================================================
// WINDING CONSTANTS
// =============================================================================

/// Minimum cross-product magnitude for a usable face-normal candidate.
///
/// Winding recovery probes edge pairs of a face until the cross product of
/// two edges exceeds this threshold. A face where every candidate pair falls
/// below it has no recoverable plane and fails definition for its solid.
///
/// # Example
///
/// ```rust
/// use config::constants::NORMAL_CANDIDATE_EPSILON;
///
/// let cross_magnitude = 0.5_f64;
/// assert!(cross_magnitude > NORMAL_CANDIDATE_EPSILON);
/// ```
pub const NORMAL_CANDIDATE_EPSILON: f64 = 1e-8;

// =============================================================================
// CALCULATOR CONSTANTS
// =============================================================================

/// Edge length every calculator starts from (and resets to on `clear`).
pub const DEFAULT_EDGE_LENGTH: f64 = 1.0;

/// Default base edge for the pyramid and frustum families.
pub const DEFAULT_BASE_EDGE: f64 = 1.0;

/// Default top edge for the frustum family.
pub const DEFAULT_TOP_EDGE: f64 = 0.5;

/// Default height for the pyramid and frustum families.
pub const DEFAULT_HEIGHT: f64 = 1.0;

/// Number of fractional digits shown for a property value.
pub const DISPLAY_PRECISION: u32 = 6;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

/// Checks if two f64 values agree within a relative tolerance.
///
/// Falls back to an absolute comparison near zero, where relative error
/// is ill-defined.
///
/// # Example
///
/// ```rust
/// use config::constants::{relative_eq, METRIC_RELATIVE_TOLERANCE};
///
/// assert!(relative_eq(24.0, 24.0 + 1e-12, METRIC_RELATIVE_TOLERANCE));
/// assert!(!relative_eq(24.0, 25.0, METRIC_RELATIVE_TOLERANCE));
/// ```
#[inline]
pub fn relative_eq(a: f64, b: f64, tolerance: f64) -> bool {
    let scale = a.abs().max(b.abs());
    if scale < EPSILON {
        return true;
    }
    (a - b).abs() <= scale * tolerance
}
