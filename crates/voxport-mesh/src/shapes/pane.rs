use voxport_geom::{Face, Quad, Vec3};

use super::ShapeContext;

const STRIP: (f32, f32) = (0.4375, 0.5625);
const CAP: (f32, f32) = (0.46875, 0.53125);

/// Extent of one plane along its axis given the connections at its low and high ends.
fn span(low: bool, high: bool) -> (f32, f32) {
    match (low, high) {
        (true, true) => (0.0, 1.0),
        (true, false) => (0.0, 0.5),
        (false, true) => (0.5, 1.0),
        (false, false) => STRIP,
    }
}

pub(super) fn generate(ctx: &ShapeContext<'_>) -> Vec<Quad> {
    let joins = |f: Face| ctx.connects_to(ctx.neighbor(f));
    let (x0, x1) = span(joins(Face::NegX), joins(Face::PosX));
    let (z0, z1) = span(joins(Face::NegZ), joins(Face::PosZ));
    let cap_top = ctx.neighbor(Face::PosY).id != ctx.here.id;
    let cap_bottom = ctx.neighbor(Face::NegY).id != ctx.here.id;

    let mut out = Vec::with_capacity(6);
    // plane running along X, at z = 0.5
    out.push(
        Quad::box_face(
            Face::PosZ,
            Vec3::new(x0, 0.0, 0.0),
            Vec3::new(x1, 1.0, 0.5),
            ctx.tex(Face::PosZ),
        )
        .double_sided(),
    );
    // plane running along Z, at x = 0.5
    out.push(
        Quad::box_face(
            Face::PosX,
            Vec3::new(0.0, 0.0, z0),
            Vec3::new(0.5, 1.0, z1),
            ctx.tex(Face::PosX),
        )
        .double_sided(),
    );

    let caps = [
        (Vec3::new(x0, 0.0, CAP.0), Vec3::new(x1, 1.0, CAP.1)),
        (Vec3::new(CAP.0, 0.0, z0), Vec3::new(CAP.1, 1.0, z1)),
    ];
    for (min, max) in caps {
        if cap_top {
            out.push(Quad::box_face(Face::PosY, min, max, ctx.tex(Face::PosY)));
        }
        if cap_bottom {
            out.push(Quad::box_face(Face::NegY, min, max, ctx.tex(Face::NegY)));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use voxport_blocks::{Block, BlockRegistry};
    use voxport_chunk::SparseNeighborhood;

    use crate::shapes::testutil::{lone, mesh_at_origin};

    #[test]
    fn unconnected_pane_is_a_thin_cross() {
        let reg = BlockRegistry::vanilla();
        let quads = lone(&reg, Block::new(102, 0));
        assert_eq!(quads.len(), 6);
        let along_x = &quads[0];
        assert!(along_x.double_sided);
        assert!(along_x.vertices.iter().all(|v| (0.4375..=0.5625).contains(&v.x)));
        assert_eq!(&*along_x.texture, "glass");
        assert_eq!(&*quads[2].texture, "glass_pane_top");
    }

    #[test]
    fn panes_join_neighbours_and_drop_shared_caps() {
        let reg = BlockRegistry::vanilla();
        let pane = Block::new(102, 0);
        let world = SparseNeighborhood::new()
            .with(0, 0, 0, pane)
            .with(-1, 0, 0, Block::new(1, 0))
            .with(0, 1, 0, pane);
        let quads = mesh_at_origin(&reg, &world);
        // two planes plus two bottom caps
        assert_eq!(quads.len(), 4);
        let along_x = &quads[0];
        let xs: Vec<f32> = along_x.vertices.iter().map(|v| v.x).collect();
        assert!(xs.iter().all(|&x| x <= 0.5));
        assert!(xs.contains(&0.0));
    }
}
