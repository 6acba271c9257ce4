use voxport_geom::{Face, Quad, Vec3};

use super::ShapeContext;

const INSET: f32 = 0.25;

/// Four planes in a `#` pattern, a quarter block in from each side.
pub(super) fn crops(ctx: &ShapeContext<'_>) -> Vec<Quad> {
    let tex = ctx.tex(Face::PosX);
    let planes = [
        (Face::NegX, Vec3::new(INSET, 0.0, 0.0), Vec3::ONE),
        (Face::PosX, Vec3::ZERO, Vec3::new(1.0 - INSET, 1.0, 1.0)),
        (Face::NegZ, Vec3::new(0.0, 0.0, INSET), Vec3::ONE),
        (Face::PosZ, Vec3::ZERO, Vec3::new(1.0, 1.0, 1.0 - INSET)),
    ];
    planes
        .into_iter()
        .map(|(face, min, max)| Quad::box_face(face, min, max, tex.clone()).double_sided())
        .collect()
}

/// Two corner-to-corner diagonals, each emitted in both windings.
pub(super) fn cross(ctx: &ShapeContext<'_>) -> Vec<Quad> {
    let tex = ctx.tex(Face::PosX);
    let v = Vec3::new;
    let diagonals = [
        [v(0.0, 0.0, 0.0), v(1.0, 0.0, 1.0), v(1.0, 1.0, 1.0), v(0.0, 1.0, 0.0)],
        [v(1.0, 0.0, 0.0), v(0.0, 0.0, 1.0), v(0.0, 1.0, 1.0), v(1.0, 1.0, 0.0)],
    ];
    let mut out = Vec::with_capacity(4);
    for verts in diagonals {
        let front = Quad::new(verts, tex.clone())
            .with_computed_normal()
            .double_sided();
        let back = Quad::new(verts, tex.clone())
            .reversed()
            .with_computed_normal()
            .double_sided();
        out.push(front);
        out.push(back);
    }
    out
}
