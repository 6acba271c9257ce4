use voxport_geom::{Axis, Face, Quad, Vec3};

use super::ShapeContext;
use crate::emit::emit_box_faces;

const POST_MIN: f32 = 0.375;
const POST_MAX: f32 = 0.625;
const RAIL_Z: (f32, f32) = (0.4375, 0.5625);
const RAILS_Y: [(f32, f32); 2] = [(0.375, 0.5625), (0.75, 0.9375)];

/// Rotation that carries the canonical east-pointing arm to `dir`.
fn arm_rotation(dir: Face) -> f32 {
    match dir {
        Face::NegZ => 90.0,
        Face::NegX => 180.0,
        Face::PosZ => 270.0,
        _ => 0.0,
    }
}

pub(super) fn generate(ctx: &ShapeContext<'_>) -> Vec<Quad> {
    let faces = ctx.textures();
    let mut out = Vec::with_capacity(6 + 16);

    // post: sides always, ends only where not covered
    emit_box_faces(
        &mut out,
        Vec3::new(POST_MIN, 0.0, POST_MIN),
        Vec3::new(POST_MAX, 1.0, POST_MAX),
        |face| {
            (face.is_horizontal() || ctx.visible(face))
                .then(|| (faces.name(face).clone(), faces.rotation(face)))
        },
    );

    let pivot = Vec3::new(0.5, 0.0, 0.5);
    for dir in Face::HORIZONTAL {
        if !ctx.connects_to(ctx.neighbor(dir)) {
            continue;
        }
        let degrees = arm_rotation(dir);
        for (y0, y1) in RAILS_Y {
            let min = Vec3::new(POST_MAX, y0, RAIL_Z.0);
            let max = Vec3::new(1.0, y1, RAIL_Z.1);
            for canonical in [Face::PosY, Face::NegY, Face::PosZ, Face::NegZ] {
                let mut q = Quad::box_face(canonical, min, max, faces.name(dir).clone())
                    .rotated(Axis::Y, degrees, pivot);
                // west and south arms carry their side rails with the winding flag set; the
                // explicit normal still points outward, so only the flag disagrees with it
                if (degrees == 180.0 || degrees == 270.0) && canonical.normal().z != 0.0 {
                    q = q.reversed();
                }
                out.push(q);
            }
        }
    }
    out
}
