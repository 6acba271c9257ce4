// Compact voxel representation read by the compiler
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug, PartialOrd, Ord)]
pub struct Block {
    pub id: BlockId,
    pub state: BlockState,
}

pub type BlockId = u16;
pub type BlockState = u8;

impl Block {
    pub const AIR: Block = Block { id: 0, state: 0 };

    #[inline]
    pub const fn new(id: BlockId, state: BlockState) -> Self {
        Block { id, state }
    }

    #[inline]
    pub fn is_air(self) -> bool {
        self.id == 0
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LiquidFamily {
    Water,
    Lava,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RailKind {
    /// Plain rails: the whole state is the track shape, curves included.
    Plain,
    /// Golden/detector/activator rails: low 3 bits are the shape, bit 3 marks powered.
    Powered,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum LayerHeight {
    Fixed(f32),
    /// `(low 3 bits + 1) / 8`, as snow layers stack.
    Eighths,
}

// Shape archetypes; the mesher dispatches on this to pick a generator
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Cube { transparent: bool },
    Stairs,
    Slab,
    Fence,
    Pane,
    Liquid { family: LiquidFamily, still: bool },
    Crops,
    Cross,
    Bed,
    Torch,
    Ladder,
    Rail { kind: RailKind },
    Layer { height: LayerHeight },
}

impl Shape {
    /// Cubes are emitted by the default six-face path; everything else has its own generator.
    #[inline]
    pub fn is_custom(&self) -> bool {
        !matches!(self, Shape::Cube { .. })
    }

    #[inline]
    pub fn is_transparent(&self) -> bool {
        match self {
            Shape::Cube { transparent } => *transparent,
            _ => true,
        }
    }
}
