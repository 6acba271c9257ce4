use voxport_blocks::bits::bit_set;
use voxport_blocks::{Block, BlockRegistry, BlockState, LiquidFamily, Shape};
use voxport_geom::{Face, Quad, Vec3};

use super::ShapeContext;

const MAX_LEVEL: f32 = 7.0;
const STILL_CAP: f32 = 0.8;

/// Surface height of a liquid cell from its level bits, before any column merging.
pub fn liquid_height(state: BlockState, still: bool) -> f32 {
    if bit_set(state, 3) {
        return 1.0;
    }
    let level = (state & 7) as f32;
    let h = 0.7 * (MAX_LEVEL - level) / MAX_LEVEL + 0.1;
    if still { h.min(STILL_CAP) } else { h }
}

fn family_of(reg: &BlockRegistry, b: Block) -> Option<(LiquidFamily, bool)> {
    match reg.get(b)?.shape {
        Shape::Liquid { family, still } => Some((family, still)),
        _ => None,
    }
}

pub(super) fn generate(ctx: &ShapeContext<'_>, family: LiquidFamily, still: bool) -> Vec<Quad> {
    let same = |b: Block| family_of(ctx.reg, b).filter(|(f, _)| *f == family);
    let covered = same(ctx.neighbor(Face::PosY)).is_some();
    let h = if covered {
        1.0
    } else {
        liquid_height(ctx.here.state, still)
    };

    let mut out = Vec::with_capacity(6);
    if !covered && (h < 1.0 || ctx.visible(Face::PosY)) {
        out.push(Quad::box_face(
            Face::PosY,
            Vec3::ZERO,
            Vec3::new(1.0, h, 1.0),
            ctx.tex(Face::PosY),
        ));
    }
    if same(ctx.neighbor(Face::NegY)).is_none() && ctx.visible(Face::NegY) {
        out.push(Quad::box_face(Face::NegY, Vec3::ZERO, Vec3::ONE, ctx.tex(Face::NegY)));
    }
    for face in Face::HORIZONTAL {
        let nb = ctx.neighbor(face);
        let bottom = match same(nb) {
            Some((_, nb_still)) => {
                let nb_covered = same(ctx.offset(add(face.delta(), Face::PosY.delta()))).is_some();
                let hn = if nb_covered {
                    1.0
                } else {
                    liquid_height(nb.state, nb_still)
                };
                if hn >= h - 1e-6 {
                    continue;
                }
                hn
            }
            None if ctx.visible(face) => 0.0,
            None => continue,
        };
        out.push(Quad::box_face(
            face,
            Vec3::new(0.0, bottom, 0.0),
            Vec3::new(1.0, h, 1.0),
            ctx.tex(face),
        ));
    }
    out
}

fn add(a: (i32, i32, i32), b: (i32, i32, i32)) -> (i32, i32, i32) {
    (a.0 + b.0, a.1 + b.1, a.2 + b.2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxport_chunk::SparseNeighborhood;

    use crate::shapes::testutil::{lone, mesh_at_origin};

    #[test]
    fn level_formula() {
        assert!((liquid_height(0, false) - 0.8).abs() < 1e-6);
        assert!((liquid_height(15, false) - 1.0).abs() < 1e-6);
        assert!((liquid_height(7, false) - 0.1).abs() < 1e-6);
        assert!(liquid_height(0, true) <= 0.8);
    }

    #[test]
    fn flowing_water_top_sits_at_level_height() {
        let reg = BlockRegistry::vanilla();
        let quads = lone(&reg, Block::new(8, 0));
        assert_eq!(quads.len(), 6);
        let top = &quads[0];
        assert!(top.vertices.iter().all(|v| (v.y - 0.8).abs() < 1e-6));
        assert_eq!(&*top.texture, "water_still");
        assert_eq!(&*quads[2].texture, "water_flow");
    }

    #[test]
    fn falling_water_fills_the_cell() {
        let reg = BlockRegistry::vanilla();
        let quads = lone(&reg, Block::new(8, 15));
        assert!(quads[0].vertices.iter().all(|v| (v.y - 1.0).abs() < 1e-6));
    }

    #[test]
    fn lower_neighbour_exposes_only_the_difference() {
        let reg = BlockRegistry::vanilla();
        let world = SparseNeighborhood::new()
            .with(0, 0, 0, Block::new(8, 0))
            .with(1, 0, 0, Block::new(8, 7))
            .with(-1, 0, 0, Block::new(9, 0));
        let quads = mesh_at_origin(&reg, &world);
        // top, bottom, east step, north, south; west neighbour is as high
        assert_eq!(quads.len(), 5);
        let east = quads
            .iter()
            .find(|q| q.normal == Some(Face::PosX.normal()))
            .unwrap();
        let ys: Vec<f32> = east.vertices.iter().map(|v| v.y).collect();
        assert!(ys.iter().all(|&y| (y - 0.1).abs() < 1e-5 || (y - 0.8).abs() < 1e-5));
    }

    #[test]
    fn water_column_hides_its_top() {
        let reg = BlockRegistry::vanilla();
        let world = SparseNeighborhood::new()
            .with(0, 0, 0, Block::new(9, 0))
            .with(0, 1, 0, Block::new(9, 0));
        let quads = mesh_at_origin(&reg, &world);
        assert_eq!(quads.len(), 5);
        assert!(quads.iter().all(|q| q.normal != Some(Face::PosY.normal())));
        let side = quads.iter().find(|q| q.normal == Some(Face::PosX.normal())).unwrap();
        assert!(side.vertices.iter().any(|v| v.y == 1.0));
    }
}
