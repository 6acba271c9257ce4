//! Per-archetype geometry generators.
//!
//! Every generator works in the unit cell `[0,1]^3` of the voxel being meshed and returns its
//! quads in a fixed order; the assembler translates them into grid space afterwards.

mod bed;
mod cube;
mod fence;
mod layer;
mod liquid;
mod pane;
mod plants;
mod rail;
mod slab;
mod stairs;
mod torch;

use voxport_blocks::{Block, BlockBehavior, BlockRegistry, FaceTextures, Shape};
use voxport_chunk::NeighborSource;
use voxport_geom::{Face, Quad, TextureName};

use crate::cull::face_visible;

pub use liquid::liquid_height;

/// Everything a generator may look at for one voxel.
pub struct ShapeContext<'a> {
    pub reg: &'a BlockRegistry,
    pub source: &'a dyn NeighborSource,
    pub here: Block,
    pub behavior: &'a BlockBehavior,
    /// Face-adjacent neighbours in `Face` index order.
    pub neighbors: [Block; 6],
    pub pos: (i32, i32, i32),
}

impl<'a> ShapeContext<'a> {
    /// Reads the voxel at `pos` and its neighbours; `None` for air or unregistered blocks.
    pub fn at(
        reg: &'a BlockRegistry,
        source: &'a dyn NeighborSource,
        pos: (i32, i32, i32),
    ) -> Option<Self> {
        let (x, y, z) = pos;
        let here = source.block_at(x, y, z);
        if here.is_air() {
            return None;
        }
        let behavior = reg.get(here)?;
        let neighbors = Face::ALL.map(|f| {
            let (dx, dy, dz) = f.delta();
            source.block_at(x + dx, y + dy, z + dz)
        });
        Some(ShapeContext {
            reg,
            source,
            here,
            behavior,
            neighbors,
            pos,
        })
    }

    #[inline]
    pub fn neighbor(&self, face: Face) -> Block {
        self.neighbors[face.index()]
    }

    /// Queries the source at an offset from this voxel.
    #[inline]
    pub fn offset(&self, (dx, dy, dz): (i32, i32, i32)) -> Block {
        let (x, y, z) = self.pos;
        self.source.block_at(x + dx, y + dy, z + dz)
    }

    /// The cube culling predicate toward `face`.
    #[inline]
    pub fn visible(&self, face: Face) -> bool {
        face_visible(self.reg, self.here, self.neighbor(face), face)
    }

    #[inline]
    pub fn textures(&self) -> &'a FaceTextures {
        self.behavior.textures_for(self.here.state)
    }

    #[inline]
    pub fn tex(&self, face: Face) -> TextureName {
        self.textures().name(face).clone()
    }

    /// Registered neighbour that is opaque or the same block ID; what fences and panes join.
    pub fn connects_to(&self, other: Block) -> bool {
        self.reg
            .get(other)
            .is_some_and(|b| !b.is_transparent() || other.id == self.here.id)
    }
}

/// Generates the unit-cell quads of the voxel described by `ctx`.
pub fn generate(ctx: &ShapeContext<'_>) -> Vec<Quad> {
    match &ctx.behavior.shape {
        Shape::Cube { .. } => cube::generate(ctx),
        Shape::Stairs => stairs::generate(ctx),
        Shape::Slab => slab::generate(ctx),
        Shape::Fence => fence::generate(ctx),
        Shape::Pane => pane::generate(ctx),
        Shape::Liquid { family, still } => liquid::generate(ctx, *family, *still),
        Shape::Crops => plants::crops(ctx),
        Shape::Cross => plants::cross(ctx),
        Shape::Bed => bed::generate(ctx),
        Shape::Torch => torch::torch(ctx),
        Shape::Ladder => torch::ladder(ctx),
        Shape::Rail { kind } => rail::generate(ctx, *kind),
        Shape::Layer { height } => layer::generate(ctx, *height),
    }
}
