use std::fmt;

use crate::camera::{Camera, Projection, ProjectionError, ViewBasisError};
use crate::light::Light;
use crate::material::Material;
use crate::scene::{compose, QuadCmd, SceneConfig, QUADS_PER_FRAME};
use crate::transform::TransformStack;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameError {
    Projection(ProjectionError),
    View(ViewBasisError),
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::Projection(e) => write!(f, "projection:{e}"),
            FrameError::View(e) => write!(f, "view:{e}"),
        }
    }
}

impl std::error::Error for FrameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FrameError::Projection(e) => Some(e),
            FrameError::View(e) => Some(e),
        }
    }
}

impl From<ProjectionError> for FrameError {
    fn from(e: ProjectionError) -> Self {
        FrameError::Projection(e)
    }
}

impl From<ViewBasisError> for FrameError {
    fn from(e: ViewBasisError) -> Self {
        FrameError::View(e)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct RendererConfig {
    scene: SceneConfig,
}

impl RendererConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_camera(mut self, camera: Camera) -> Self {
        self.scene.camera = camera;
        self
    }

    pub fn with_projection(mut self, projection: Projection) -> Self {
        self.scene.projection = projection;
        self
    }

    pub fn with_light(mut self, light: Light) -> Self {
        self.scene.light = light;
        self
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.scene.material = material;
        self
    }

    pub fn scene(&self) -> &SceneConfig {
        &self.scene
    }
}

/// One fully composed frame: clip-space quads plus the fixed lighting
/// description, ready for a backend to rasterize.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub quads: Vec<QuadCmd>,
    pub light: Light,
    pub material: Material,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Renderer {
    config: RendererConfig,
}

impl Renderer {
    pub fn new(config: RendererConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Compose one frame for the given viewport.
    ///
    /// Matrix construction happens before any geometry is emitted, so an
    /// invalid configuration yields an error and an empty output, never a
    /// partial frame.
    pub fn render_frame(&self, width: u32, height: u32) -> Result<Frame, FrameError> {
        let mut quads = Vec::with_capacity(QUADS_PER_FRAME);
        self.render_frame_with(width, height, |q| quads.push(q))?;
        Ok(Frame {
            quads,
            light: self.config.scene.light,
            material: self.config.scene.material,
        })
    }

    /// Immediate-mode variant: `sink` is called once per emitted quad.
    pub fn render_frame_with<F: FnMut(QuadCmd)>(
        &self,
        width: u32,
        height: u32,
        mut sink: F,
    ) -> Result<(), FrameError> {
        let scene = &self.config.scene;
        let aspect = width as f32 / height as f32;
        let projection = scene.projection.matrix(aspect)?;
        let view = scene.camera.view_matrix()?;

        let mut stack = TransformStack::new();
        compose(projection * view, &mut stack, &mut sink);
        debug_assert_eq!(stack.depth(), 1);
        Ok(())
    }
}
