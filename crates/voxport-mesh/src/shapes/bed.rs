use voxport_blocks::bits::{bit_set, bits};
use voxport_geom::{Face, Quad, QuarterTurn, Vec3};

use super::ShapeContext;

const HEIGHT: f32 = 9.0 / 16.0;
const UNDERSIDE: f32 = 3.0 / 16.0;

const FORWARD: [Face; 4] = [Face::PosZ, Face::NegX, Face::NegZ, Face::PosX];
const TOP_TURN: [QuarterTurn; 4] = [
    QuarterTurn::R180,
    QuarterTurn::R270,
    QuarterTurn::R0,
    QuarterTurn::R90,
];

pub(super) fn generate(ctx: &ShapeContext<'_>) -> Vec<Quad> {
    let d = bits(ctx.here.state, 6, 2) as usize;
    let head = bit_set(ctx.here.state, 3);
    let forward = FORWARD[d];
    let turn = TOP_TURN[d];
    let body = Vec3::new(1.0, HEIGHT, 1.0);

    let mut out = Vec::with_capacity(5);
    out.push(
        Quad::box_face(Face::PosY, Vec3::ZERO, body, ctx.tex(Face::PosY)).rotate_uv_quarter(turn),
    );
    out.push(
        Quad::box_face(
            Face::NegY,
            Vec3::new(0.0, UNDERSIDE, 0.0),
            Vec3::ONE,
            ctx.tex(Face::NegY),
        )
        .rotate_uv_quarter(turn),
    );

    // the head's end board faces forward, the foot's faces back
    let end = if head { forward } else { forward.opposite() };
    if ctx.visible(end) {
        out.push(Quad::box_face(end, Vec3::ZERO, body, ctx.tex(Face::PosZ)));
    }

    let mirrored = matches!(d, 1 | 2);
    for side in [forward.rotated_y(90.0), forward.rotated_y(270.0)] {
        if !ctx.visible(side) {
            continue;
        }
        let q = Quad::box_face(side, Vec3::ZERO, body, ctx.tex(Face::PosX));
        out.push(if mirrored { q.flip_u() } else { q });
    }
    out
}

#[cfg(test)]
mod tests {
    use voxport_blocks::{Block, BlockRegistry};
    use voxport_geom::{DEFAULT_UVS, Face};

    use crate::shapes::testutil::lone;

    fn face_quad(quads: &[voxport_geom::Quad], f: Face) -> &voxport_geom::Quad {
        quads.iter().find(|q| q.normal == Some(f.normal())).unwrap()
    }

    #[test]
    fn head_half_facing_south() {
        let reg = BlockRegistry::vanilla();
        let quads = lone(&reg, Block::new(26, 8));
        assert_eq!(quads.len(), 5);
        let top = face_quad(&quads, Face::PosY);
        assert_eq!(&*top.texture, "bed_head_top");
        assert!(top.vertices.iter().all(|v| (v.y - 9.0 / 16.0).abs() < 1e-6));
        let end = face_quad(&quads, Face::PosZ);
        assert_eq!(&*end.texture, "bed_head_end");
        assert!(quads.iter().all(|q| q.normal != Some(Face::NegZ.normal())));
    }

    #[test]
    fn foot_half_puts_its_end_at_the_back() {
        let reg = BlockRegistry::vanilla();
        // facing west (d = 1), foot
        let quads = lone(&reg, Block::new(26, 1));
        let end = face_quad(&quads, Face::PosX);
        assert_eq!(&*end.texture, "bed_feet_end");
        let side = face_quad(&quads, Face::PosZ);
        assert_eq!(&*side.texture, "bed_feet_side");
        assert_ne!(side.uvs[0], DEFAULT_UVS[0]);
    }
}
