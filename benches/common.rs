use room3d::{Renderer, RendererConfig};

pub const WIDTH: u32 = 640;
pub const HEIGHT: u32 = 480;

pub fn make_renderer() -> Renderer {
    // Default config is the full lab-room scene.
    Renderer::new(RendererConfig::new())
}
