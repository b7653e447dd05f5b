use glam::Vec3;
use std::fmt;

/// Vectors shorter than this cannot be normalized meaningfully.
pub const MIN_NORMALIZE_LENGTH: f32 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DegenerateVectorError {
    pub length: f32,
}

impl fmt::Display for DegenerateVectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "degenerate_vector:{}", self.length)
    }
}

impl std::error::Error for DegenerateVectorError {}

/// Normalize `v`, failing on (near-)zero input instead of producing NaN.
///
/// The view builder depends on this: a degenerate forward or right vector
/// must abort frame construction, not silently corrupt the camera basis.
pub fn try_normalize(v: Vec3) -> Result<Vec3, DegenerateVectorError> {
    let length = v.length();
    if length < MIN_NORMALIZE_LENGTH || !length.is_finite() {
        return Err(DegenerateVectorError { length });
    }
    Ok(v / length)
}

#[cfg(test)]
mod tests {
    use super::{try_normalize, DegenerateVectorError};
    use glam::Vec3;

    #[test]
    fn normalize_unit_length_result() {
        let v = try_normalize(Vec3::new(3.0, -4.0, 12.0)).unwrap();
        assert!((v.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn normalize_rejects_zero() {
        assert_eq!(
            try_normalize(Vec3::ZERO),
            Err(DegenerateVectorError { length: 0.0 })
        );
    }

    #[test]
    fn normalize_rejects_subthreshold() {
        assert!(try_normalize(Vec3::splat(1e-8)).is_err());
    }

    #[test]
    fn normalize_preserves_direction() {
        let v = try_normalize(Vec3::new(0.0, 5.0, 0.0)).unwrap();
        assert!((v - Vec3::Y).length() < 1e-6);
    }
}
