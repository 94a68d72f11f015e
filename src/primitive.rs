use id_arena::Id;

use crate::material::{Color, Material};

pub type PrimitiveId = Id<Primitive>;

/// Geometric shape descriptor for a leaf node. Dimensions are passed through
/// as authored; a zero or negative dimension produces degenerate geometry
/// downstream rather than an error here.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        radial_segments: u32,
        height_segments: u32,
    },
    Cuboid {
        width: f32,
        height: f32,
        depth: f32,
    },
    Sphere {
        radius: f32,
    },
    Torus {
        radius: f32,
        tube_radius: f32,
        radial_segments: u32,
        tubular_segments: u32,
        arc: f32,
    },
    Plane {
        width: f32,
        height: f32,
    },
}

impl Shape {
    pub fn cylinder(
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        radial_segments: u32,
        height_segments: u32,
    ) -> Shape {
        Shape::Cylinder {
            radius_top,
            radius_bottom,
            height,
            radial_segments,
            height_segments,
        }
    }

    pub fn cuboid(width: f32, height: f32, depth: f32) -> Shape {
        Shape::Cuboid {
            width,
            height,
            depth,
        }
    }

    pub fn sphere(radius: f32) -> Shape {
        Shape::Sphere { radius }
    }

    /// A full-turn torus; set `arc` afterwards for a partial sweep.
    pub fn torus(radius: f32, tube_radius: f32, radial_segments: u32, tubular_segments: u32) -> Shape {
        Shape::Torus {
            radius,
            tube_radius,
            radial_segments,
            tubular_segments,
            arc: std::f32::consts::TAU,
        }
    }

    pub fn plane(width: f32, height: f32) -> Shape {
        Shape::Plane { width, height }
    }
}

/// Face materials for a primitive. `PerFace` follows the cuboid face order
/// +x, -x, +y, -y, +z, -z (right, left, top, bottom, front, back).
#[derive(Debug, Clone, PartialEq)]
pub enum Surface {
    Uniform(Material),
    PerFace([Material; 6]),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    pub shape: Shape,
    pub surface: Surface,
}

impl Primitive {
    pub fn new(shape: Shape, material: Material) -> Primitive {
        Primitive {
            shape,
            surface: Surface::Uniform(material),
        }
    }

    pub fn per_face(shape: Shape, materials: [Material; 6]) -> Primitive {
        Primitive {
            shape,
            surface: Surface::PerFace(materials),
        }
    }

    /// Opaque phong primitive in a single color.
    pub fn solid(shape: Shape, color: Color) -> Primitive {
        Primitive::new(shape, Material::phong(color))
    }
}
