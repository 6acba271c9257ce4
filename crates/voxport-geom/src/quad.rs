//! Quad value type and the UV transformations shape generators compose.
//!
//! Every transformation returns a new `Quad`; nothing mutates in place, so generators can
//! chain them without hidden ordering dependencies.

use std::sync::Arc;

use crate::{Axis, Face, Vec3, sin_cos_deg};

/// Shared, cheaply clonable texture name (e.g. `"stone"`).
pub type TextureName = Arc<str>;

/// A texture coordinate `[u, v]`.
pub type Uv = [f32; 2];

const UV_EPS: f32 = 1e-5;

/// The default UV rectangle, one corner per vertex.
pub const DEFAULT_UVS: [Uv; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

/// Discrete UV rotation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum QuarterTurn {
    #[default]
    R0,
    R90,
    R180,
    R270,
}

impl QuarterTurn {
    /// Builds a rotation from a count of quarter turns (taken modulo 4).
    #[inline]
    pub fn from_steps(steps: u8) -> QuarterTurn {
        match steps % 4 {
            0 => QuarterTurn::R0,
            1 => QuarterTurn::R90,
            2 => QuarterTurn::R180,
            _ => QuarterTurn::R270,
        }
    }

    #[inline]
    pub fn steps(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn degrees(self) -> f32 {
        90.0 * self.steps() as f32
    }
}

/// A planar four-vertex face in unit-cell space.
///
/// Vertices are listed counter-clockwise seen from the side the face is meant to be seen from.
/// `reverse_winding` is the only way to invert that order; `double_sided` asks the writer to
/// render the back side as well.
#[derive(Clone, Debug, PartialEq)]
pub struct Quad {
    pub vertices: [Vec3; 4],
    pub uvs: [Uv; 4],
    pub normal: Option<Vec3>,
    pub texture: TextureName,
    pub reverse_winding: bool,
    pub double_sided: bool,
}

impl Quad {
    pub fn new(vertices: [Vec3; 4], texture: TextureName) -> Self {
        Quad {
            vertices,
            uvs: DEFAULT_UVS,
            normal: None,
            texture,
            reverse_winding: false,
            double_sided: false,
        }
    }

    /// The face of the box `[min, max]` on `face`, with UVs projected from cell coordinates.
    pub fn box_face(face: Face, min: Vec3, max: Vec3, texture: TextureName) -> Self {
        let (x0, y0, z0) = (min.x, min.y, min.z);
        let (x1, y1, z1) = (max.x, max.y, max.z);
        let v = Vec3::new;
        // bottom-left, bottom-right, top-right, top-left seen from outside
        let vertices = match face {
            Face::PosY => [v(x0, y1, z1), v(x1, y1, z1), v(x1, y1, z0), v(x0, y1, z0)],
            Face::NegY => [v(x0, y0, z0), v(x1, y0, z0), v(x1, y0, z1), v(x0, y0, z1)],
            Face::PosX => [v(x1, y0, z1), v(x1, y0, z0), v(x1, y1, z0), v(x1, y1, z1)],
            Face::NegX => [v(x0, y0, z0), v(x0, y0, z1), v(x0, y1, z1), v(x0, y1, z0)],
            Face::PosZ => [v(x0, y0, z1), v(x1, y0, z1), v(x1, y1, z1), v(x0, y1, z1)],
            Face::NegZ => [v(x1, y0, z0), v(x0, y0, z0), v(x0, y1, z0), v(x1, y1, z0)],
        };
        let uvs = vertices.map(|p| face.project_uv(p));
        Quad {
            vertices,
            uvs,
            normal: Some(face.normal()),
            texture,
            reverse_winding: false,
            double_sided: false,
        }
    }

    pub fn with_uvs(mut self, uvs: [Uv; 4]) -> Self {
        self.uvs = uvs;
        self
    }

    /// Assigns UVs from an explicit rectangle, corners in vertex order.
    pub fn with_uv_rect(self, u0: f32, v0: f32, u1: f32, v1: f32) -> Self {
        self.with_uvs([[u0, v0], [u1, v0], [u1, v1], [u0, v1]])
    }

    pub fn with_normal(mut self, n: Vec3) -> Self {
        self.normal = Some(n);
        self
    }

    pub fn without_normal(mut self) -> Self {
        self.normal = None;
        self
    }

    pub fn double_sided(mut self) -> Self {
        self.double_sided = true;
        self
    }

    /// Toggles the winding flag.
    pub fn reversed(mut self) -> Self {
        self.reverse_winding = !self.reverse_winding;
        self
    }

    /// Centroid of the UV coordinates.
    pub fn uv_center(&self) -> Uv {
        let mut c = [0.0, 0.0];
        for uv in &self.uvs {
            c[0] += uv[0] * 0.25;
            c[1] += uv[1] * 0.25;
        }
        c
    }

    /// Rotates the UVs counter-clockwise by `degrees` about their centroid.
    pub fn rotate_uv(mut self, degrees: f32) -> Self {
        let (s, c) = sin_cos_deg(degrees);
        let [cu, cv] = self.uv_center();
        for uv in &mut self.uvs {
            let du = uv[0] - cu;
            let dv = uv[1] - cv;
            *uv = [cu + du * c - dv * s, cv + du * s + dv * c];
        }
        self
    }

    /// Rotates the UVs by a quarter-turn multiple by shifting them between vertices.
    pub fn rotate_uv_quarter(mut self, turn: QuarterTurn) -> Self {
        self.uvs.rotate_left(turn.steps());
        self
    }

    /// Mirrors the texture horizontally: the extreme `u` columns swap their coordinates.
    pub fn flip_u(mut self) -> Self {
        mirror_component(&mut self.uvs, 0);
        self
    }

    /// Mirrors the texture vertically: the extreme `v` rows swap their coordinates.
    pub fn flip_v(mut self) -> Self {
        mirror_component(&mut self.uvs, 1);
        self
    }

    /// The face normal implied by the vertex positions, honouring `reverse_winding`.
    ///
    /// Averages the cross products of the two triangles on either side of the 0-2 diagonal.
    pub fn computed_normal(&self) -> Vec3 {
        let [a, b, c, d] = self.vertices;
        let (t0, t1) = if self.reverse_winding {
            ((c - a).cross(b - a), (d - a).cross(c - a))
        } else {
            ((b - a).cross(c - a), (c - a).cross(d - a))
        };
        (t0.normalized() + t1.normalized()).normalized()
    }

    /// The explicit normal if set, otherwise the computed one.
    pub fn effective_normal(&self) -> Vec3 {
        self.normal.unwrap_or_else(|| self.computed_normal())
    }

    /// Fills in the normal from the vertices unless one was set explicitly.
    pub fn with_computed_normal(mut self) -> Self {
        if self.normal.is_none() {
            self.normal = Some(self.computed_normal());
        }
        self
    }

    pub fn translated(mut self, offset: Vec3) -> Self {
        for v in &mut self.vertices {
            *v += offset;
        }
        self
    }

    /// Rotates vertices and any explicit normal around `axis` through `pivot`.
    pub fn rotated(mut self, axis: Axis, degrees: f32, pivot: Vec3) -> Self {
        for v in &mut self.vertices {
            *v = v.rotated_about(axis, degrees, pivot);
        }
        self.normal = self.normal.map(|n| n.rotated(axis, degrees));
        self
    }

    /// Mirrors the quad through the horizontal plane `y = 0.5` of the unit cell.
    /// The mirror inverts handedness, so the winding flag is toggled and the normal's
    /// vertical component negated.
    pub fn flipped_vertical(mut self) -> Self {
        for v in &mut self.vertices {
            v.y = 1.0 - v.y;
        }
        self.normal = self.normal.map(|n| Vec3::new(n.x, -n.y, n.z));
        self.reversed()
    }

    /// Applies an arbitrary point transform; the normal is dropped and must be recomputed.
    pub fn map_vertices(mut self, f: impl Fn(Vec3) -> Vec3) -> Self {
        for v in &mut self.vertices {
            *v = f(*v);
        }
        self.normal = None;
        self
    }

    /// If every vertex lies on the unit cell's boundary plane for some face, and the quad
    /// faces outwards through it, returns that face.
    pub fn boundary_face(&self) -> Option<Face> {
        const EPS: f32 = 1e-5;
        let n = self.effective_normal();
        let face = Face::from_normal(n)?;
        let plane = match face {
            Face::PosX | Face::PosY | Face::PosZ => 1.0,
            _ => 0.0,
        };
        let on_plane = self.vertices.iter().all(|v| {
            let c = match face.axis() {
                Axis::X => v.x,
                Axis::Y => v.y,
                Axis::Z => v.z,
            };
            (c - plane).abs() <= EPS
        });
        on_plane.then_some(face)
    }
}

fn mirror_component(uvs: &mut [Uv; 4], k: usize) {
    let lo = uvs.iter().map(|uv| uv[k]).fold(f32::INFINITY, f32::min);
    let hi = uvs.iter().map(|uv| uv[k]).fold(f32::NEG_INFINITY, f32::max);
    for uv in uvs.iter_mut() {
        if (uv[k] - lo).abs() <= UV_EPS {
            uv[k] = hi;
        } else if (uv[k] - hi).abs() <= UV_EPS {
            uv[k] = lo;
        }
    }
}
