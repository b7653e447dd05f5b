//! Renders one frame of the room and splats it to stdout as an ASCII
//! depth map, standing in for the windowing backend the library expects.

use room3d::prelude::*;

const COLS: usize = 96;
const ROWS: usize = 36;
const RAMP: &[u8] = b" .:-=+*#%@";

fn main() -> Result<(), FrameError> {
    let renderer = Renderer::new(RendererConfig::new());
    let frame = renderer.render_frame(COLS as u32, ROWS as u32 * 2)?;

    let mut depth = vec![f32::INFINITY; COLS * ROWS];
    let mut shade = vec![0.0f32; COLS * ROWS];

    for quad in &frame.quads {
        // Cheap splat: subdivide each quad bilinearly and project samples.
        let steps = 24;
        for i in 0..=steps {
            for j in 0..=steps {
                let s = i as f32 / steps as f32;
                let t = j as f32 / steps as f32;
                let bottom = quad.clip[0].lerp(quad.clip[1], s);
                let top = quad.clip[3].lerp(quad.clip[2], s);
                let p = bottom.lerp(top, t);
                if p.w <= 0.0 {
                    continue;
                }
                let ndc = p.truncate() / p.w;
                if ndc.x.abs() > 1.0 || ndc.y.abs() > 1.0 || ndc.z.abs() > 1.0 {
                    continue;
                }
                let col = ((ndc.x * 0.5 + 0.5) * (COLS - 1) as f32) as usize;
                let row = ((1.0 - (ndc.y * 0.5 + 0.5)) * (ROWS - 1) as f32) as usize;
                let idx = row * COLS + col;
                if p.w < depth[idx] {
                    depth[idx] = p.w;
                    let c = quad.color;
                    shade[idx] = (0.299 * c.r + 0.587 * c.g + 0.114 * c.b) * c.a;
                }
            }
        }
    }

    let mut out = String::with_capacity((COLS + 1) * ROWS);
    for row in 0..ROWS {
        for col in 0..COLS {
            let idx = row * COLS + col;
            let ch = if depth[idx].is_infinite() {
                b' '
            } else {
                let level = (shade[idx].clamp(0.0, 1.0) * (RAMP.len() - 1) as f32) as usize;
                RAMP[level]
            };
            out.push(ch as char);
        }
        out.push('\n');
    }
    print!("{out}");

    println!(
        "{} quads, light at {:?}",
        frame.quads.len(),
        frame.light.position
    );
    Ok(())
}
