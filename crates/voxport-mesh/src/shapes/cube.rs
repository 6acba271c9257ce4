use voxport_geom::{Quad, Vec3};

use super::ShapeContext;
use crate::emit::emit_box_faces;

pub(super) fn generate(ctx: &ShapeContext<'_>) -> Vec<Quad> {
    let faces = ctx.textures();
    let mut out = Vec::with_capacity(6);
    emit_box_faces(&mut out, Vec3::ZERO, Vec3::ONE, |face| {
        ctx.visible(face)
            .then(|| (faces.name(face).clone(), faces.rotation(face)))
    });
    out
}

#[cfg(test)]
mod tests {
    use voxport_blocks::{Block, BlockRegistry};
    use voxport_chunk::SparseNeighborhood;
    use voxport_geom::Face;

    use crate::shapes::testutil::{lone, mesh_at_origin};

    #[test]
    fn buried_face_is_dropped() {
        let reg = BlockRegistry::vanilla();
        let world = SparseNeighborhood::new()
            .with(0, 0, 0, Block::new(1, 0))
            .with(0, 1, 0, Block::new(3, 0));
        let quads = mesh_at_origin(&reg, &world);
        assert_eq!(quads.len(), 5);
        assert!(quads.iter().all(|q| q.boundary_face() != Some(Face::PosY)));
    }

    #[test]
    fn grass_uses_top_bottom_and_side_textures() {
        let reg = BlockRegistry::vanilla();
        let quads = lone(&reg, Block::new(2, 0));
        let name = |f: Face| {
            quads
                .iter()
                .find(|q| q.boundary_face() == Some(f))
                .map(|q| q.texture.to_string())
                .unwrap()
        };
        assert_eq!(name(Face::PosY), "grass_top");
        assert_eq!(name(Face::NegY), "dirt");
        assert_eq!(name(Face::NegZ), "grass_side");
    }

    #[test]
    fn sideways_log_rotates_bark_uvs() {
        let reg = BlockRegistry::vanilla();
        // oak, axis X
        let quads = lone(&reg, Block::new(17, 1 << 2));
        let top = quads
            .iter()
            .find(|q| q.boundary_face() == Some(Face::PosY))
            .unwrap();
        assert_eq!(top.uvs[0], [1.0, 0.0]);
    }
}
