use voxport_geom::{Face, Quad, Vec3};

use super::ShapeContext;

const PX: f32 = 1.0 / 16.0;
const STICK_MIN: f32 = 7.0 * PX;
const STICK_MAX: f32 = 9.0 * PX;
const STICK_TOP: f32 = 10.0 * PX;
const WALL_LIFT: f32 = 3.5 * PX;
const LEAN: f32 = 0.4;

/// Lean direction `(dx, dz)` of a wall torch, `None` when standing on the floor.
fn lean(state: u8) -> Option<(f32, f32)> {
    match state {
        1 => Some((1.0, 0.0)),
        2 => Some((-1.0, 0.0)),
        3 => Some((0.0, 1.0)),
        4 => Some((0.0, -1.0)),
        _ => None,
    }
}

pub(super) fn torch(ctx: &ShapeContext<'_>) -> Vec<Quad> {
    let min = Vec3::new(STICK_MIN, 0.0, STICK_MIN);
    let max = Vec3::new(STICK_MAX, STICK_TOP, STICK_MAX);
    let mut quads: Vec<Quad> = Face::ALL
        .into_iter()
        .map(|face| {
            let q = Quad::box_face(face, min, max, ctx.tex(face));
            match face {
                Face::PosY => q.with_uv_rect(STICK_MIN, 8.0 * PX, STICK_MAX, STICK_TOP),
                Face::NegY => q.with_uv_rect(STICK_MIN, 0.0, STICK_MAX, 2.0 * PX),
                _ => q.with_uv_rect(STICK_MIN, 0.0, STICK_MAX, STICK_TOP),
            }
        })
        .collect();

    if let Some((dx, dz)) = lean(ctx.here.state) {
        quads = quads
            .into_iter()
            .map(|q| {
                q.map_vertices(|p| {
                    Vec3::new(
                        p.x - dx * 0.5 + dx * p.y * LEAN,
                        p.y + WALL_LIFT,
                        p.z - dz * 0.5 + dz * p.y * LEAN,
                    )
                })
                .with_computed_normal()
            })
            .collect();
    }
    quads
}

/// A flat double-sided board against the wall the ladder hangs on.
pub(super) fn ladder(ctx: &ShapeContext<'_>) -> Vec<Quad> {
    let (face, min, max) = match ctx.here.state {
        3 => (Face::PosZ, Vec3::ZERO, Vec3::new(1.0, 1.0, PX)),
        4 => (Face::NegX, Vec3::new(1.0 - PX, 0.0, 0.0), Vec3::ONE),
        5 => (Face::PosX, Vec3::ZERO, Vec3::new(PX, 1.0, 1.0)),
        _ => (Face::NegZ, Vec3::new(0.0, 0.0, 1.0 - PX), Vec3::ONE),
    };
    vec![Quad::box_face(face, min, max, ctx.tex(face)).double_sided()]
}
