use glam::Vec3;

/// Fixed point light carried on each frame for the consuming backend.
/// The core transforms geometry; it does not shade.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
}

impl Light {
    /// Soft blue moonlight entering through the window.
    pub fn moonlight() -> Self {
        Self {
            position: Vec3::new(2.0, 2.0, -5.0),
            ambient: Vec3::new(0.1, 0.1, 0.2),
            diffuse: Vec3::new(0.2, 0.2, 0.3),
            specular: Vec3::new(0.1, 0.1, 0.1),
        }
    }
}

impl Default for Light {
    fn default() -> Self {
        Self::moonlight()
    }
}
