use voxport_blocks::RailKind;
use voxport_blocks::bits::bits;
use voxport_geom::{Face, Quad, QuarterTurn, Vec3};

use super::ShapeContext;

const RAIL_Y: f32 = 1.0 / 16.0;

/// Track direction encoded in the state, after stripping the powered bit.
fn track_shape(state: u8, kind: RailKind) -> u8 {
    match kind {
        RailKind::Plain => state,
        RailKind::Powered => bits(state, 5, 3),
    }
}

fn ascend(flat: &Quad, rise: impl Fn(Vec3) -> f32) -> Quad {
    flat.clone()
        .map_vertices(|p| Vec3::new(p.x, p.y + rise(p), p.z))
        .with_computed_normal()
}

pub(super) fn generate(ctx: &ShapeContext<'_>, kind: RailKind) -> Vec<Quad> {
    let shape = track_shape(ctx.here.state, kind);
    let flat = Quad::box_face(
        Face::PosY,
        Vec3::ZERO,
        Vec3::new(1.0, RAIL_Y, 1.0),
        ctx.tex(Face::PosY),
    )
    .double_sided();

    let q = match shape {
        1 => flat.rotate_uv_quarter(QuarterTurn::R90),
        // ascending east / west
        2 => ascend(&flat, |p| p.x).rotate_uv_quarter(QuarterTurn::R90),
        3 => ascend(&flat, |p| 1.0 - p.x).rotate_uv_quarter(QuarterTurn::R90),
        // ascending north / south
        4 => ascend(&flat, |p| 1.0 - p.z),
        5 => ascend(&flat, |p| p.z),
        6..=9 => flat.rotate_uv_quarter(QuarterTurn::from_steps(shape - 6)),
        _ => flat,
    };
    vec![q]
}

#[cfg(test)]
mod tests {
    use voxport_blocks::{Block, BlockRegistry};

    use crate::shapes::testutil::lone;

    #[test]
    fn straight_rail_lies_flat() {
        let reg = BlockRegistry::vanilla();
        let quads = lone(&reg, Block::new(66, 0));
        assert_eq!(quads.len(), 1);
        assert!(quads[0].double_sided);
        assert!(quads[0].vertices.iter().all(|v| (v.y - 1.0 / 16.0).abs() < 1e-6));
    }

    #[test]
    fn ascending_east_climbs_with_x() {
        let reg = BlockRegistry::vanilla();
        let q = &lone(&reg, Block::new(66, 2))[0];
        for v in &q.vertices {
            assert!((v.y - (1.0 / 16.0 + v.x)).abs() < 1e-6);
        }
        let n = q.normal.unwrap();
        assert!(n.x < 0.0 && n.y > 0.0);
    }

    #[test]
    fn powered_bit_switches_texture_not_shape() {
        let reg = BlockRegistry::vanilla();
        let off = &lone(&reg, Block::new(27, 1))[0];
        let on = &lone(&reg, Block::new(27, 1 | 8))[0];
        assert_eq!(&*off.texture, "rail_golden");
        assert_eq!(&*on.texture, "rail_golden_powered");
        assert_eq!(off.vertices, on.vertices);
        assert_eq!(off.uvs, on.uvs);
    }

    #[test]
    fn curves_use_the_turned_texture() {
        let reg = BlockRegistry::vanilla();
        let q = &lone(&reg, Block::new(66, 8))[0];
        assert_eq!(&*q.texture, "rail_normal_turned");
    }
}
