#![forbid(unsafe_code)]

pub mod camera;
pub mod light;
pub mod material;
pub mod math;
pub mod mesh;
pub mod prelude;
pub mod renderer;
pub mod scene;
pub mod transform;
pub mod types;

pub use crate::{
    camera::{Camera, Projection, ProjectionError, ViewBasisError},
    light::Light,
    material::Material,
    math::DegenerateVectorError,
    mesh::{unit_cube, Quad},
    renderer::{Frame, FrameError, Renderer, RendererConfig},
    scene::{QuadCmd, SceneConfig, QUADS_PER_FRAME},
    transform::{StackScope, StackUnderflowError, TransformStack},
    types::color::Rgba,
};
