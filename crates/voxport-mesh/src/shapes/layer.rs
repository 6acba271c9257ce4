use voxport_blocks::LayerHeight;
use voxport_blocks::bits::bits;
use voxport_geom::{Face, Quad, Vec3};

use super::ShapeContext;
use crate::emit::emit_box_faces;

pub(super) fn generate(ctx: &ShapeContext<'_>, height: LayerHeight) -> Vec<Quad> {
    let h = match height {
        LayerHeight::Fixed(h) => h,
        LayerHeight::Eighths => (bits(ctx.here.state, 5, 3) + 1) as f32 / 8.0,
    };
    let faces = ctx.textures();
    let mut out = Vec::with_capacity(6);
    emit_box_faces(&mut out, Vec3::ZERO, Vec3::new(1.0, h, 1.0), |face| {
        let exposed = (face == Face::PosY && h < 1.0) || ctx.visible(face);
        exposed.then(|| (faces.name(face).clone(), faces.rotation(face)))
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
    fn snow_layers_stack_in_eighths() {
        let reg = BlockRegistry::vanilla();
        let quads = lone(&reg, Block::new(78, 2));
        let top = quads.iter().find(|q| q.normal == Some(Face::PosY.normal())).unwrap();
        assert!(top.vertices.iter().all(|v| (v.y - 3.0 / 8.0).abs() < 1e-6));
    }

    #[test]
    fn full_snow_layer_culls_like_a_cube() {
        let reg = BlockRegistry::vanilla();
        let world = SparseNeighborhood::new()
            .with(0, 0, 0, Block::new(78, 7))
            .with(0, 1, 0, Block::new(1, 0));
        assert_eq!(mesh_at_origin(&reg, &world).len(), 5);
    }

    #[test]
    fn carpet_on_stone_keeps_its_top() {
        let reg = BlockRegistry::vanilla();
        let world = SparseNeighborhood::new()
            .with(0, 0, 0, Block::new(171, 14))
            .with(0, -1, 0, Block::new(1, 0));
        let quads = mesh_at_origin(&reg, &world);
        assert_eq!(quads.len(), 5);
        assert_eq!(&*quads[0].texture, "wool_colored_red");
    }
}
