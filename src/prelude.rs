pub use crate::{
    unit_cube, Camera, DegenerateVectorError, Frame, FrameError, Light, Material, Projection,
    ProjectionError, Quad, QuadCmd, Renderer, RendererConfig, Rgba, SceneConfig, StackScope,
    StackUnderflowError, TransformStack, ViewBasisError, QUADS_PER_FRAME,
};

pub use glam::{Mat4, Vec3, Vec4};
