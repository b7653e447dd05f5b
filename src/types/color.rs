/// Linear RGBA color as emitted with each quad.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }
}

// Scene palette.
pub const FLOOR_GRAY: Rgba = Rgba::rgb(0.5, 0.5, 0.5);
pub const CEILING_WHITE: Rgba = Rgba::rgb(1.0, 1.0, 1.0);
pub const WALL_RED: Rgba = Rgba::rgb(1.0, 0.0, 0.0);
pub const BACK_WALL_GREEN: Rgba = Rgba::rgb(0.3, 0.7, 0.3);
pub const DESK_BROWN: Rgba = Rgba::rgb(0.3, 0.2, 0.1);
pub const DESK_LEG_BROWN: Rgba = Rgba::rgb(0.2, 0.1, 0.05);
pub const CHAIR_BROWN: Rgba = Rgba::rgb(0.4, 0.2, 0.1);
pub const CHAIR_LEG_BROWN: Rgba = Rgba::rgb(0.3, 0.15, 0.05);
pub const FRAME_GRAY: Rgba = Rgba::rgb(0.2, 0.2, 0.2);
pub const GLASS_BLUE: Rgba = Rgba::rgba(0.1, 0.1, 0.3, 0.3);

#[cfg(test)]
mod tests {
    use super::{Rgba, GLASS_BLUE, WALL_RED};

    #[test]
    fn rgb_is_opaque() {
        assert!(WALL_RED.is_opaque());
        assert_eq!(Rgba::rgb(0.1, 0.2, 0.3).a, 1.0);
    }

    #[test]
    fn glass_is_translucent() {
        assert!(!GLASS_BLUE.is_opaque());
    }
}
