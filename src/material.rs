use glam::Vec3;

/// Shared surface response for every object in the scene, paired with the
/// per-quad color by the consuming backend.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub shininess: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: Vec3::splat(0.2),
            diffuse: Vec3::splat(0.8),
            specular: Vec3::splat(0.1),
            shininess: 1.0,
        }
    }
}
