use voxport_geom::{Axis, Face, Quad, Vec3};

use super::ShapeContext;
use crate::cull::{face_visible, stair_rotation, stair_upside_down};

const HALF: f32 = 0.5;

/// Canonical stair (tall half toward -X, step toward +X, right side up), one entry per quad:
/// the face it points along, its box, and whether it may be culled against the neighbour.
const CANONICAL: [(Face, [f32; 3], [f32; 3], bool); 10] = [
    (Face::NegY, [0.0, 0.0, 0.0], [1.0, HALF, 1.0], true),
    // tread
    (Face::PosY, [HALF, 0.0, 0.0], [1.0, HALF, 1.0], false),
    (Face::PosY, [0.0, HALF, 0.0], [HALF, 1.0, 1.0], true),
    // riser
    (Face::PosX, [0.0, HALF, 0.0], [HALF, 1.0, 1.0], false),
    (Face::NegX, [0.0, 0.0, 0.0], [HALF, 1.0, 1.0], true),
    (Face::PosX, [HALF, 0.0, 0.0], [1.0, HALF, 1.0], true),
    (Face::NegZ, [0.0, 0.0, 0.0], [1.0, HALF, 1.0], true),
    (Face::NegZ, [0.0, HALF, 0.0], [HALF, 1.0, 1.0], true),
    (Face::PosZ, [0.0, 0.0, 0.0], [1.0, HALF, 1.0], true),
    (Face::PosZ, [0.0, HALF, 0.0], [HALF, 1.0, 1.0], true),
];

pub(super) fn generate(ctx: &ShapeContext<'_>) -> Vec<Quad> {
    let state = ctx.here.state;
    let degrees = stair_rotation(state);
    let flipped = stair_upside_down(state);
    let faces = ctx.textures();
    let pivot = Vec3::new(0.5, 0.0, 0.5);

    let mut out = Vec::with_capacity(CANONICAL.len());
    for (canonical, min, max, cullable) in CANONICAL {
        // where this canonical face ends up once the block is oriented
        let placed = if flipped {
            canonical.flipped_vertical()
        } else {
            canonical
        }
        .rotated_y(degrees);
        if cullable {
            let nb = ctx.offset(placed.delta());
            if !face_visible(ctx.reg, ctx.here, nb, placed) {
                continue;
            }
        }
        let mut q = Quad::box_face(
            canonical,
            Vec3::new(min[0], min[1], min[2]),
            Vec3::new(max[0], max[1], max[2]),
            faces.name(placed).clone(),
        );
        if flipped {
            q = q.flipped_vertical();
        }
        out.push(q.rotated(Axis::Y, degrees, pivot));
    }
    out
}

#[cfg(test)]
mod tests {
    use voxport_blocks::{Block, BlockRegistry};
    use voxport_chunk::SparseNeighborhood;
    use voxport_geom::{Axis, Face, Quad, Vec3};

    use crate::shapes::testutil::{lone, mesh_at_origin};

    fn same_vertices(a: &Quad, b: &Quad) -> bool {
        a.vertices
            .iter()
            .zip(b.vertices.iter())
            .all(|(p, q)| p.approx_eq(*q, 1e-5))
    }

    #[test]
    fn lone_stair_has_ten_quads_facing_outward() {
        let reg = BlockRegistry::vanilla();
        let quads = lone(&reg, Block::new(53, 1));
        assert_eq!(quads.len(), 10);
        for q in &quads {
            let n = q.normal.unwrap();
            assert!(q.computed_normal().approx_eq(n, 1e-5), "{q:?}");
        }
    }

    #[test]
    fn state_zero_is_state_one_turned_half_way() {
        let reg = BlockRegistry::vanilla();
        let east = lone(&reg, Block::new(53, 0));
        let west = lone(&reg, Block::new(53, 1));
        let pivot = Vec3::new(0.5, 0.0, 0.5);
        assert_eq!(east.len(), west.len());
        for (e, w) in east.iter().zip(west.iter()) {
            let turned = w.clone().rotated(Axis::Y, 180.0, pivot);
            assert!(same_vertices(e, &turned));
        }
        // tall half sits on the east side
        let top = east
            .iter()
            .find(|q| q.boundary_face() == Some(Face::PosY))
            .unwrap();
        assert!(top.vertices.iter().all(|v| v.x >= 0.5 - 1e-5));
    }

    #[test]
    fn upside_down_stair_hangs_from_the_ceiling() {
        let reg = BlockRegistry::vanilla();
        let quads = lone(&reg, Block::new(53, 1 | 4));
        assert_eq!(quads.len(), 10);
        // full-width face now on top, half-width face on the bottom
        let top = quads
            .iter()
            .find(|q| q.boundary_face() == Some(Face::PosY))
            .unwrap();
        assert!(top.vertices.iter().any(|v| v.x > 0.9));
        let bottom = quads
            .iter()
            .find(|q| q.boundary_face() == Some(Face::NegY))
            .unwrap();
        assert!(bottom.vertices.iter().all(|v| v.x <= 0.5 + 1e-5));
        for q in &quads {
            assert!(q.computed_normal().approx_eq(q.normal.unwrap(), 1e-5));
        }
    }

    #[test]
    fn solid_neighbour_behind_hides_the_back() {
        let reg = BlockRegistry::vanilla();
        // state 1: tall half toward -X
        let world = SparseNeighborhood::new()
            .with(0, 0, 0, Block::new(53, 1))
            .with(-1, 0, 0, Block::new(1, 0));
        let quads = mesh_at_origin(&reg, &world);
        assert_eq!(quads.len(), 9);
        assert!(quads.iter().all(|q| q.boundary_face() != Some(Face::NegX)));
    }

    #[test]
    fn rotated_stair_culls_against_the_rotated_neighbour() {
        let reg = BlockRegistry::vanilla();
        // state 2: rotated 90 degrees, tall half toward +Z
        let world = SparseNeighborhood::new()
            .with(0, 0, 0, Block::new(53, 2))
            .with(0, 0, 1, Block::new(1, 0));
        let quads = mesh_at_origin(&reg, &world);
        assert_eq!(quads.len(), 9);
        assert!(quads.iter().all(|q| q.boundary_face() != Some(Face::PosZ)));
    }
}
