use voxport_geom::{Face, Quad, Vec3};

use super::ShapeContext;
use crate::cull::slab_is_upper;
use crate::emit::emit_box_faces;

pub(super) fn generate(ctx: &ShapeContext<'_>) -> Vec<Quad> {
    let upper = slab_is_upper(ctx.here.state);
    let (y0, y1) = if upper { (0.5, 1.0) } else { (0.0, 0.5) };
    // the half-height face in the middle of the cell has no neighbour to hide behind
    let inner = if upper { Face::NegY } else { Face::PosY };
    let faces = ctx.textures();
    let mut out = Vec::with_capacity(6);
    emit_box_faces(
        &mut out,
        Vec3::new(0.0, y0, 0.0),
        Vec3::new(1.0, y1, 1.0),
        |face| {
            (face == inner || ctx.visible(face))
                .then(|| (faces.name(face).clone(), faces.rotation(face)))
        },
    );
    out
}
