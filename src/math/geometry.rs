use nalgebra::{Point3, Vector3};

// Below this length a direction is treated as zero.
const DEGENERATE_LENGTH: f64 = 1e-12;

/// Returns the unit vector perpendicular to both `direction` and `up`, which
/// is the sideways axis of a ribbon travelling along `direction`.
///
/// If `direction` is zero, or parallel to `up`, there's no well-defined
/// answer, and we fall back to the x-axis.
pub fn ribbon_normal(direction: &Vector3<f64>, up: &Vector3<f64>) -> Vector3<f64> {
    direction
        .try_normalize(DEGENERATE_LENGTH)
        .and_then(|dir| dir.cross(up).try_normalize(DEGENERATE_LENGTH))
        .unwrap_or_else(Vector3::x)
}

/// Returns `direction` normalized, or `fallback` if it is too short to normalize.
pub fn direction_or(direction: &Vector3<f64>, fallback: Vector3<f64>) -> Vector3<f64> {
    direction
        .try_normalize(DEGENERATE_LENGTH)
        .unwrap_or(fallback)
}

pub fn midpoint(a: &Point3<f64>, b: &Point3<f64>) -> Point3<f64> {
    nalgebra::center(a, b)
}

/// Interpolates between `lo` and `hi` in log2-space. `t = 0` gives `lo`,
/// `t = 1` gives `hi`, and equal steps in `t` multiply the result by the
/// same factor.
pub fn log_lerp(lo: f64, hi: f64, t: f64) -> f64 {
    let (lo, hi) = (lo.log2(), hi.log2());
    (lo + (hi - lo) * t).exp2()
}
