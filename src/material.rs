use glam::Vec3;

use crate::texture::TextureId;

/// 8-bit RGB color, the way scene colors are authored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }
}

/// Which side of a face is renderable. Interiors (the room shell) use `Back`,
/// free-standing planes like the TV screen use `Double`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    #[default]
    Front,
    Back,
    Double,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shading {
    /// Lit material with a specular exponent.
    Phong { specular: f32 },
    /// Ignores scene lights entirely.
    Unlit,
}

impl Default for Shading {
    fn default() -> Self {
        Shading::Phong { specular: 30.0 }
    }
}

/// Material descriptor for a primitive face. The color doubles as the
/// fallback when the referenced texture never finishes loading.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub color: Color,
    pub opacity: f32,
    pub texture: Option<TextureId>,
    pub side: Side,
    pub shading: Shading,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            opacity: 1.0,
            texture: None,
            side: Side::default(),
            shading: Shading::default(),
        }
    }
}

impl Material {
    pub fn phong(color: Color) -> Material {
        Material {
            color,
            ..Default::default()
        }
    }

    pub fn textured(color: Color, texture: TextureId) -> Material {
        Material {
            color,
            texture: Some(texture),
            ..Default::default()
        }
    }

    pub fn unlit(color: Color) -> Material {
        Material {
            color,
            shading: Shading::Unlit,
            ..Default::default()
        }
    }

    pub fn with_opacity(mut self, opacity: f32) -> Material {
        self.opacity = opacity;
        self
    }

    pub fn with_side(mut self, side: Side) -> Material {
        self.side = side;
        self
    }

    pub fn with_specular(mut self, specular: f32) -> Material {
        self.shading = Shading::Phong { specular };
        self
    }

    pub fn with_texture(mut self, texture: TextureId) -> Material {
        self.texture = Some(texture);
        self
    }

    pub fn is_transparent(&self) -> bool {
        self.opacity < 1.0
    }
}
