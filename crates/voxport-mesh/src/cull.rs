use voxport_blocks::bits::{bit_set, bits};
use voxport_blocks::{Block, BlockRegistry, BlockState, Shape};
use voxport_geom::Face;

/// Horizontal rotation of a stair (degrees about +Y) from its low two bits.
#[inline]
pub fn stair_rotation(state: BlockState) -> f32 {
    [180.0, 0.0, 90.0, 270.0][bits(state, 6, 2) as usize]
}

#[inline]
pub fn stair_upside_down(state: BlockState) -> bool {
    bit_set(state, 2)
}

#[inline]
pub fn slab_is_upper(state: BlockState) -> bool {
    bit_set(state, 3)
}

/// Whether the face of `here` toward `face` must be emitted given the block across it.
///
/// Unregistered neighbours never hide anything. Transparent neighbours hide the face only
/// when they are the same block ID. Two stairs hide each other only when they complete a
/// full block; two slabs of one ID only where their halves actually touch.
pub fn face_visible(reg: &BlockRegistry, here: Block, neighbor: Block, face: Face) -> bool {
    let Some(nb) = reg.get(neighbor) else {
        return true;
    };
    if let Some(h) = reg.get(here) {
        match (&h.shape, &nb.shape) {
            (Shape::Stairs, Shape::Stairs) => {
                let complementary = stair_upside_down(here.state)
                    != stair_upside_down(neighbor.state)
                    && stair_rotation(here.state) == stair_rotation(neighbor.state);
                return !complementary;
            }
            (Shape::Slab, Shape::Slab) if here.id == neighbor.id => {
                let (hu, nu) = (slab_is_upper(here.state), slab_is_upper(neighbor.state));
                let touching = match face {
                    Face::NegY => !hu && nu,
                    Face::PosY => hu && !nu,
                    _ => hu == nu,
                };
                return !touching;
            }
            _ => {}
        }
    }
    if nb.is_transparent() {
        return here.id != neighbor.id;
    }
    !nb.fills_face(face.opposite(), neighbor.state)
}
