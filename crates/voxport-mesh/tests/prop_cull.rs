use proptest::prelude::*;

use voxport_blocks::{Block, BlockRegistry};
use voxport_geom::Face;
use voxport_mesh::face_visible;

const OPAQUE: [u16; 8] = [1, 2, 3, 4, 5, 7, 45, 49];
const CLEAR: [u16; 3] = [18, 20, 79];

fn face() -> impl Strategy<Value = Face> {
    (0usize..6).prop_map(Face::from_index)
}

proptest! {
    // Two different opaque cubes never show the faces between them.
    #[test]
    fn opaque_cubes_hide_each_other(
        a in 0usize..OPAQUE.len(),
        b in 0usize..OPAQUE.len(),
        f in face(),
    ) {
        let reg = BlockRegistry::vanilla();
        let (ha, hb) = (Block::new(OPAQUE[a], 0), Block::new(OPAQUE[b], 0));
        prop_assert!(!face_visible(&reg, ha, hb, f));
        prop_assert!(!face_visible(&reg, hb, ha, f.opposite()));
    }

    // A clear cube next to the same clear cube: the shared face is gone on both sides.
    #[test]
    fn same_clear_blocks_merge(i in 0usize..CLEAR.len(), f in face()) {
        let reg = BlockRegistry::vanilla();
        let b = Block::new(CLEAR[i], 0);
        prop_assert!(!face_visible(&reg, b, b, f));
    }

    // Opaque next to clear: only the opaque side is drawn.
    #[test]
    fn opaque_shows_through_clear(
        o in 0usize..OPAQUE.len(),
        c in 0usize..CLEAR.len(),
        f in face(),
    ) {
        let reg = BlockRegistry::vanilla();
        let (op, cl) = (Block::new(OPAQUE[o], 0), Block::new(CLEAR[c], 0));
        prop_assert!(face_visible(&reg, op, cl, f));
        prop_assert!(!face_visible(&reg, cl, op, f.opposite()));
    }

    #[test]
    fn air_and_unknown_hide_nothing(id in 1000u16..u16::MAX, f in face()) {
        let reg = BlockRegistry::vanilla();
        let stone = Block::new(1, 0);
        prop_assert!(face_visible(&reg, stone, Block::AIR, f));
        prop_assert!(face_visible(&reg, stone, Block::new(id, 0), f));
    }
}
