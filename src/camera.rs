use glam::{Mat4, Vec3, Vec4};
use std::fmt;

use crate::math::try_normalize;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ProjectionError {
    FovOutOfRange { fov_y_degrees: f32 },
    AspectNotPositive { aspect: f32 },
    BadDepthRange { near: f32, far: f32 },
}

impl fmt::Display for ProjectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ProjectionError::FovOutOfRange { fov_y_degrees } => {
                write!(f, "fov_out_of_range:{fov_y_degrees}")
            }
            ProjectionError::AspectNotPositive { aspect } => {
                write!(f, "aspect_not_positive:{aspect}")
            }
            ProjectionError::BadDepthRange { near, far } => {
                write!(f, "bad_depth_range:{near}:{far}")
            }
        }
    }
}

impl std::error::Error for ProjectionError {}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewBasisError {
    /// `target` coincides with `eye`, so no forward direction exists.
    DegenerateForward,
    /// `up` is parallel to the view direction, so the basis collapses.
    UpParallelToForward,
}

impl fmt::Display for ViewBasisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewBasisError::DegenerateForward => write!(f, "degenerate_forward"),
            ViewBasisError::UpParallelToForward => write!(f, "up_parallel_to_forward"),
        }
    }
}

impl std::error::Error for ViewBasisError {}

/// Perspective projection parameters.
///
/// The matrix is right-handed and maps view-space Z into clip-space
/// Z in [-1, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_y_degrees: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Projection {
    pub fn new(fov_y_degrees: f32, near: f32, far: f32) -> Self {
        Self {
            fov_y_degrees,
            near,
            far,
        }
    }

    /// Build the projection matrix for the given viewport aspect ratio.
    ///
    /// Preconditions: fov in (0, 180) degrees, aspect > 0, 0 < near < far.
    /// These are caller bugs, not runtime inputs, so they fail immediately.
    pub fn matrix(&self, aspect: f32) -> Result<Mat4, ProjectionError> {
        if !(self.fov_y_degrees > 0.0 && self.fov_y_degrees < 180.0) {
            return Err(ProjectionError::FovOutOfRange {
                fov_y_degrees: self.fov_y_degrees,
            });
        }
        if !(aspect > 0.0) || !aspect.is_finite() {
            return Err(ProjectionError::AspectNotPositive { aspect });
        }
        if !(self.near > 0.0 && self.near < self.far) {
            return Err(ProjectionError::BadDepthRange {
                near: self.near,
                far: self.far,
            });
        }

        // Half-angle tangent; the degree-to-radian conversion and the
        // halving are fused into the 360 divisor.
        let t = (self.fov_y_degrees * std::f32::consts::PI / 360.0).tan();
        let n = self.near;
        let fa = self.far;

        let m00 = 1.0 / (aspect * t);
        let m11 = 1.0 / t;
        let m22 = -(fa + n) / (fa - n);
        let m32 = -1.0;
        let m23 = -(2.0 * fa * n) / (fa - n);

        Ok(Mat4::from_cols(
            Vec4::new(m00, 0.0, 0.0, 0.0),
            Vec4::new(0.0, m11, 0.0, 0.0),
            Vec4::new(0.0, 0.0, m22, m32),
            Vec4::new(0.0, 0.0, m23, 0.0),
        ))
    }
}

/// Eye/target/up camera description; the view matrix is derived per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 1.5, 14.0),
            target: Vec3::new(0.0, -0.5, -1.0),
            up: Vec3::Y,
        }
    }
}

impl Camera {
    pub fn new(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        Self { eye, target, up }
    }

    /// Build the look-at view matrix.
    ///
    /// Orthonormal basis: forward toward the target, right = forward x up
    /// renormalized, true up = right x forward. The rotation carries the
    /// basis as rows, and the eye translation applies before it:
    /// `view = rotation * translation(-eye)`.
    pub fn view_matrix(&self) -> Result<Mat4, ViewBasisError> {
        let f = try_normalize(self.target - self.eye)
            .map_err(|_| ViewBasisError::DegenerateForward)?;
        let s = try_normalize(f.cross(self.up))
            .map_err(|_| ViewBasisError::UpParallelToForward)?;
        let u = s.cross(f);

        let rotation = Mat4::from_cols(
            Vec4::new(s.x, u.x, -f.x, 0.0),
            Vec4::new(s.y, u.y, -f.y, 0.0),
            Vec4::new(s.z, u.z, -f.z, 0.0),
            Vec4::W,
        );
        Ok(rotation * Mat4::from_translation(-self.eye))
    }
}

#[cfg(test)]
mod tests {
    use super::{Camera, Projection, ProjectionError, ViewBasisError};
    use glam::{Mat4, Vec3, Vec4};

    fn col_row(m: &Mat4, col: usize, row: usize) -> f32 {
        m.col(col)[row]
    }

    #[test]
    fn perspective_fixed_entries() {
        let m = Projection::default().matrix(640.0 / 480.0).unwrap();
        assert_eq!(col_row(&m, 2, 3), -1.0);
        assert!(col_row(&m, 3, 2) < 0.0);
        // All entries outside the five live slots are zero.
        for col in 0..4 {
            for row in 0..4 {
                let live = matches!((col, row), (0, 0) | (1, 1) | (2, 2) | (2, 3) | (3, 2));
                if !live {
                    assert_eq!(col_row(&m, col, row), 0.0, "col {col} row {row}");
                }
            }
        }
    }

    #[test]
    fn perspective_matches_reference_formula() {
        let p = Projection::new(45.0, 0.1, 100.0);
        let aspect = 640.0 / 480.0;
        let m = p.matrix(aspect).unwrap();
        let t = (45.0_f32 * std::f32::consts::PI / 360.0).tan();
        assert!((col_row(&m, 0, 0) - 1.0 / (aspect * t)).abs() < 1e-6);
        assert!((col_row(&m, 1, 1) - 1.0 / t).abs() < 1e-6);
        assert!((col_row(&m, 2, 2) - (-(100.0 + 0.1) / (100.0 - 0.1))).abs() < 1e-6);
        assert!((col_row(&m, 3, 2) - (-(2.0 * 100.0 * 0.1) / (100.0 - 0.1))).abs() < 1e-5);
    }

    #[test]
    fn perspective_rejects_bad_params() {
        assert!(matches!(
            Projection::new(0.0, 0.1, 100.0).matrix(1.0),
            Err(ProjectionError::FovOutOfRange { .. })
        ));
        assert!(matches!(
            Projection::new(180.0, 0.1, 100.0).matrix(1.0),
            Err(ProjectionError::FovOutOfRange { .. })
        ));
        assert!(matches!(
            Projection::default().matrix(0.0),
            Err(ProjectionError::AspectNotPositive { .. })
        ));
        assert!(matches!(
            Projection::default().matrix(f32::NAN),
            Err(ProjectionError::AspectNotPositive { .. })
        ));
        assert!(matches!(
            Projection::new(45.0, 0.0, 100.0).matrix(1.0),
            Err(ProjectionError::BadDepthRange { .. })
        ));
        assert!(matches!(
            Projection::new(45.0, 10.0, 1.0).matrix(1.0),
            Err(ProjectionError::BadDepthRange { .. })
        ));
    }

    #[test]
    fn look_at_moves_eye_to_origin() {
        let cam = Camera::new(
            Vec3::new(3.0, -2.0, 7.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::Y,
        );
        let view = cam.view_matrix().unwrap();
        let eye_in_view = view * cam.eye.extend(1.0);
        assert!(eye_in_view.truncate().length() < 1e-5);
        assert!((eye_in_view.w - 1.0).abs() < 1e-6);
    }

    #[test]
    fn look_at_basis_is_orthonormal() {
        let cam = Camera::new(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-4.0, 0.5, -6.0),
            Vec3::Y,
        );
        let view = cam.view_matrix().unwrap();
        // Basis vectors live in the rows of the upper 3x3.
        let row = |r: usize| Vec3::new(view.col(0)[r], view.col(1)[r], view.col(2)[r]);
        for r in 0..3 {
            assert!((row(r).length() - 1.0).abs() < 1e-5, "row {r} not unit");
        }
        assert!(row(0).dot(row(1)).abs() < 1e-5);
        assert!(row(0).dot(row(2)).abs() < 1e-5);
        assert!(row(1).dot(row(2)).abs() < 1e-5);
    }

    #[test]
    fn look_at_forward_maps_to_negative_z() {
        let cam = Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
        let view = cam.view_matrix().unwrap();
        // A point one unit ahead of the eye lands at z = -1 in view space.
        let ahead = view * Vec4::new(0.0, 0.0, 4.0, 1.0);
        assert!((ahead.z - (-1.0)).abs() < 1e-5);
        assert!(ahead.x.abs() < 1e-5);
        assert!(ahead.y.abs() < 1e-5);
    }

    #[test]
    fn look_at_rejects_degenerate_inputs() {
        let eye = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(
            Camera::new(eye, eye, Vec3::Y).view_matrix(),
            Err(ViewBasisError::DegenerateForward)
        );
        assert_eq!(
            Camera::new(Vec3::ZERO, Vec3::new(0.0, 5.0, 0.0), Vec3::Y).view_matrix(),
            Err(ViewBasisError::UpParallelToForward)
        );
    }
}
