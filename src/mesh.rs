use glam::Vec3;

/// One face: four object-space corners in emission order.
pub type Quad = [Vec3; 4];

const C: f32 = 0.5;

/// Unit cube centered at the origin, side length 1.
///
/// Face order is fixed: front (+Z), back (-Z), top (+Y), bottom (-Y),
/// left (-X), right (+X). Within each face the corners start at the
/// (-,-) corner of the face plane and walk the perimeter in order.
const UNIT_CUBE: [Quad; 6] = [
    // Front
    [
        Vec3::new(-C, -C, C),
        Vec3::new(C, -C, C),
        Vec3::new(C, C, C),
        Vec3::new(-C, C, C),
    ],
    // Back
    [
        Vec3::new(-C, -C, -C),
        Vec3::new(C, -C, -C),
        Vec3::new(C, C, -C),
        Vec3::new(-C, C, -C),
    ],
    // Top
    [
        Vec3::new(-C, C, -C),
        Vec3::new(C, C, -C),
        Vec3::new(C, C, C),
        Vec3::new(-C, C, C),
    ],
    // Bottom
    [
        Vec3::new(-C, -C, -C),
        Vec3::new(C, -C, -C),
        Vec3::new(C, -C, C),
        Vec3::new(-C, -C, C),
    ],
    // Left
    [
        Vec3::new(-C, -C, -C),
        Vec3::new(-C, -C, C),
        Vec3::new(-C, C, C),
        Vec3::new(-C, C, -C),
    ],
    // Right
    [
        Vec3::new(C, -C, -C),
        Vec3::new(C, -C, C),
        Vec3::new(C, C, C),
        Vec3::new(C, C, -C),
    ],
];

pub fn unit_cube() -> &'static [Quad; 6] {
    &UNIT_CUBE
}
