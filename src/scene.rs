use glam::{Mat4, Vec3, Vec4};

use crate::camera::{Camera, Projection};
use crate::light::Light;
use crate::material::Material;
use crate::mesh::{unit_cube, Quad};
use crate::transform::TransformStack;
use crate::types::color::{
    Rgba, BACK_WALL_GREEN, CEILING_WHITE, CHAIR_BROWN, CHAIR_LEG_BROWN, DESK_BROWN,
    DESK_LEG_BROWN, FLOOR_GRAY, FRAME_GRAY, GLASS_BLUE, WALL_RED,
};

/// Everything fixed about the scene: viewpoint, projection, lighting.
/// Geometry placement is baked into the part tables below.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct SceneConfig {
    pub camera: Camera,
    pub projection: Projection,
    pub light: Light,
    pub material: Material,
}

/// One quad ready for submission: clip-space corners plus color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadCmd {
    pub clip: [Vec4; 4],
    pub color: Rgba,
}

/// One scaled cube within a compound object, in the object's local frame.
#[derive(Clone, Copy, Debug, PartialEq)]
struct CubePart {
    offset: Vec3,
    scale: Vec3,
    color: Rgba,
}

const fn part(offset: Vec3, scale: Vec3, color: Rgba) -> CubePart {
    CubePart {
        offset,
        scale,
        color,
    }
}

const DESK_POSITION: Vec3 = Vec3::new(0.0, -1.0, 2.0);

const DESK_PARTS: [CubePart; 6] = [
    // Top slab and front modesty panel.
    part(Vec3::ZERO, Vec3::new(1.6, 0.08, 0.8), DESK_BROWN),
    part(
        Vec3::new(0.0, -0.3, 0.35),
        Vec3::new(1.5, 0.5, 0.05),
        DESK_BROWN,
    ),
    part(
        Vec3::new(-0.75, -0.35, -0.35),
        Vec3::new(0.08, 0.6, 0.08),
        DESK_LEG_BROWN,
    ),
    part(
        Vec3::new(-0.75, -0.35, 0.35),
        Vec3::new(0.08, 0.6, 0.08),
        DESK_LEG_BROWN,
    ),
    part(
        Vec3::new(0.75, -0.35, -0.35),
        Vec3::new(0.08, 0.6, 0.08),
        DESK_LEG_BROWN,
    ),
    part(
        Vec3::new(0.75, -0.35, 0.35),
        Vec3::new(0.08, 0.6, 0.08),
        DESK_LEG_BROWN,
    ),
];

const CHAIR_PARTS: [CubePart; 6] = [
    part(Vec3::ZERO, Vec3::new(0.6, 0.1, 0.6), CHAIR_BROWN),
    part(
        Vec3::new(0.0, 0.45, -0.25),
        Vec3::new(0.6, 0.8, 0.1),
        CHAIR_BROWN,
    ),
    part(
        Vec3::new(-0.25, -0.5, -0.25),
        Vec3::new(0.1, 1.0, 0.1),
        CHAIR_LEG_BROWN,
    ),
    part(
        Vec3::new(-0.25, -0.5, 0.25),
        Vec3::new(0.1, 1.0, 0.1),
        CHAIR_LEG_BROWN,
    ),
    part(
        Vec3::new(0.25, -0.5, -0.25),
        Vec3::new(0.1, 1.0, 0.1),
        CHAIR_LEG_BROWN,
    ),
    part(
        Vec3::new(0.25, -0.5, 0.25),
        Vec3::new(0.1, 1.0, 0.1),
        CHAIR_LEG_BROWN,
    ),
];

const WINDOW_POSITION: Vec3 = Vec3::new(3.9, 0.5, -5.0);

const WINDOW_PARTS: [CubePart; 2] = [
    part(Vec3::ZERO, Vec3::new(0.1, 1.5, 1.0), FRAME_GRAY),
    // Glass pane, inset toward the room, translucent.
    part(
        Vec3::new(-0.05, 0.0, 0.0),
        Vec3::new(0.01, 1.4, 0.9),
        GLASS_BLUE,
    ),
];

const CHAIRS_PER_ROW: usize = 3;
const ROW_X: [f32; 2] = [-1.5, 1.5];
const CHAIR_Y: f32 = -1.0;
const CHAIR_Z_START: f32 = -1.0;
const CHAIR_Z_SPACING: f32 = 2.0;

// Room shell extents.
const ROOM_HALF_WIDTH: f32 = 4.0;
const FLOOR_Y: f32 = -1.5;
const CEILING_Y: f32 = 3.0;
const BACK_Z: f32 = -10.0;
const FRONT_Z: f32 = 4.0;

/// The shell is open toward the eye: floor, ceiling, two side walls and
/// the back wall, drawn as world-space quads without the stack. A front
/// wall would stand between the fixed eye and the interior.
const SHELL_QUADS: [(Quad, Rgba); 5] = [
    (
        [
            Vec3::new(-ROOM_HALF_WIDTH, FLOOR_Y, BACK_Z),
            Vec3::new(ROOM_HALF_WIDTH, FLOOR_Y, BACK_Z),
            Vec3::new(ROOM_HALF_WIDTH, FLOOR_Y, FRONT_Z),
            Vec3::new(-ROOM_HALF_WIDTH, FLOOR_Y, FRONT_Z),
        ],
        FLOOR_GRAY,
    ),
    (
        [
            Vec3::new(-ROOM_HALF_WIDTH, CEILING_Y, BACK_Z),
            Vec3::new(ROOM_HALF_WIDTH, CEILING_Y, BACK_Z),
            Vec3::new(ROOM_HALF_WIDTH, CEILING_Y, FRONT_Z),
            Vec3::new(-ROOM_HALF_WIDTH, CEILING_Y, FRONT_Z),
        ],
        CEILING_WHITE,
    ),
    (
        [
            Vec3::new(-ROOM_HALF_WIDTH, FLOOR_Y, BACK_Z),
            Vec3::new(-ROOM_HALF_WIDTH, FLOOR_Y, FRONT_Z),
            Vec3::new(-ROOM_HALF_WIDTH, CEILING_Y, FRONT_Z),
            Vec3::new(-ROOM_HALF_WIDTH, CEILING_Y, BACK_Z),
        ],
        WALL_RED,
    ),
    (
        [
            Vec3::new(ROOM_HALF_WIDTH, FLOOR_Y, BACK_Z),
            Vec3::new(ROOM_HALF_WIDTH, FLOOR_Y, FRONT_Z),
            Vec3::new(ROOM_HALF_WIDTH, CEILING_Y, FRONT_Z),
            Vec3::new(ROOM_HALF_WIDTH, CEILING_Y, BACK_Z),
        ],
        WALL_RED,
    ),
    (
        [
            Vec3::new(-ROOM_HALF_WIDTH, FLOOR_Y, BACK_Z),
            Vec3::new(ROOM_HALF_WIDTH, FLOOR_Y, BACK_Z),
            Vec3::new(ROOM_HALF_WIDTH, CEILING_Y, BACK_Z),
            Vec3::new(-ROOM_HALF_WIDTH, CEILING_Y, BACK_Z),
        ],
        BACK_WALL_GREEN,
    ),
];

/// Total quads emitted per frame; fixed because the scene is static.
pub const QUADS_PER_FRAME: usize =
    SHELL_QUADS.len() + (DESK_PARTS.len() + 2 * CHAIRS_PER_ROW * CHAIR_PARTS.len() + WINDOW_PARTS.len()) * 6;

/// Walk the static scene once, emitting every quad through `sink`.
///
/// `view_proj` is `projection * view`; each cube vertex is submitted as
/// `view_proj * model * vertex` with `model` read off the stack. The
/// stack is guaranteed to come back at its entry depth.
pub(crate) fn compose<F: FnMut(QuadCmd)>(
    view_proj: Mat4,
    stack: &mut TransformStack,
    sink: &mut F,
) {
    let entry_depth = stack.depth();

    for (quad, color) in &SHELL_QUADS {
        emit_quad(view_proj, quad, *color, sink);
    }

    for &row_x in &ROW_X {
        for i in 0..CHAIRS_PER_ROW {
            let z = CHAIR_Z_START - i as f32 * CHAIR_Z_SPACING;
            place_parts(
                Vec3::new(row_x, CHAIR_Y, z),
                &CHAIR_PARTS,
                view_proj,
                stack,
                sink,
            );
        }
    }

    place_parts(WINDOW_POSITION, &WINDOW_PARTS, view_proj, stack, sink);
    place_parts(DESK_POSITION, &DESK_PARTS, view_proj, stack, sink);

    debug_assert_eq!(stack.depth(), entry_depth);
}

/// Place one compound object: a scoped translate to its position, then
/// one scoped cube per part.
fn place_parts<F: FnMut(QuadCmd)>(
    position: Vec3,
    parts: &[CubePart],
    view_proj: Mat4,
    stack: &mut TransformStack,
    sink: &mut F,
) {
    let mut object = stack.scope();
    object.translate(position.x, position.y, position.z);
    for p in parts {
        let mut cube = object.scope();
        cube.translate(p.offset.x, p.offset.y, p.offset.z);
        cube.scale(p.scale.x, p.scale.y, p.scale.z);
        let mvp = view_proj * cube.current();
        for quad in unit_cube() {
            emit_quad(mvp, quad, p.color, sink);
        }
    }
}

fn emit_quad<F: FnMut(QuadCmd)>(m: Mat4, quad: &Quad, color: Rgba, sink: &mut F) {
    sink(QuadCmd {
        clip: [
            m * quad[0].extend(1.0),
            m * quad[1].extend(1.0),
            m * quad[2].extend(1.0),
            m * quad[3].extend(1.0),
        ],
        color,
    });
}
