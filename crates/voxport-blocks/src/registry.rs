use hashbrown::HashMap;

use voxport_geom::Face;

use crate::textures::{FaceTextures, TextureTable};
use crate::types::{Block, BlockId, BlockState, Shape};

/// What a registered (ID, state) pair looks like and how it meshes.
#[derive(Clone, Debug)]
pub struct BlockBehavior {
    pub name: String,
    /// Set by the registry: `true` when the behaviour was registered for explicit states only.
    pub uses_state: bool,
    pub textures: TextureTable,
    pub shape: Shape,
}

impl BlockBehavior {
    pub fn new(name: impl Into<String>, shape: Shape, textures: TextureTable) -> Self {
        BlockBehavior {
            name: name.into(),
            uses_state: false,
            textures,
            shape,
        }
    }

    /// Opaque full cube.
    pub fn solid(name: impl Into<String>, textures: TextureTable) -> Self {
        Self::new(name, Shape::Cube { transparent: false }, textures)
    }

    /// Full cube that lets neighbours show through (glass, leaves, ice).
    pub fn clear(name: impl Into<String>, textures: TextureTable) -> Self {
        Self::new(name, Shape::Cube { transparent: true }, textures)
    }

    #[inline]
    pub fn is_custom(&self) -> bool {
        self.shape.is_custom()
    }

    #[inline]
    pub fn is_transparent(&self) -> bool {
        self.shape.is_transparent()
    }

    /// Whether this block covers the whole cell face toward `face` in `state`.
    ///
    /// Every archetype answers the same way for all six directions and all states: full cubes
    /// fill every face, custom shapes fill none, so solid neighbours keep their own faces
    /// against them.
    #[inline]
    pub fn fills_face(&self, _face: Face, _state: BlockState) -> bool {
        !self.is_custom()
    }

    #[inline]
    pub fn textures_for(&self, state: BlockState) -> &FaceTextures {
        self.textures.resolve(state)
    }
}

/// Immutable (ID, state) -> behaviour table, built once before any compile.
#[derive(Default, Clone, Debug)]
pub struct BlockRegistry {
    behaviors: Vec<BlockBehavior>,
    slots: HashMap<Block, usize>,
    by_name: HashMap<String, BlockId>,
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in legacy block catalogue.
    pub fn vanilla() -> Self {
        let reg = crate::catalog::vanilla();
        log::debug!(
            "block registry: {} behaviours over {} (id,state) slots",
            reg.behaviors.len(),
            reg.slots.len()
        );
        reg
    }

    /// Registers `behavior` for every state of `id`; the same instance serves all of them.
    pub fn register(&mut self, id: BlockId, mut behavior: BlockBehavior) -> &mut Self {
        behavior.uses_state = false;
        self.insert(id, 0..=255u8, behavior)
    }

    /// Registers `behavior` only for the listed states of `id`.
    pub fn register_states(
        &mut self,
        id: BlockId,
        states: impl IntoIterator<Item = BlockState>,
        mut behavior: BlockBehavior,
    ) -> &mut Self {
        behavior.uses_state = true;
        self.insert(id, states, behavior)
    }

    fn insert(
        &mut self,
        id: BlockId,
        states: impl IntoIterator<Item = BlockState>,
        behavior: BlockBehavior,
    ) -> &mut Self {
        let slot = self.behaviors.len();
        self.by_name.entry(behavior.name.clone()).or_insert(id);
        self.behaviors.push(behavior);
        for state in states {
            let prev = self.slots.insert(Block::new(id, state), slot);
            assert!(prev.is_none(), "block {id}:{state} registered twice");
        }
        self
    }

    #[inline]
    pub fn get(&self, block: Block) -> Option<&BlockBehavior> {
        self.slots.get(&block).map(|&i| &self.behaviors[i])
    }

    #[inline]
    pub fn contains(&self, block: Block) -> bool {
        self.slots.contains_key(&block)
    }

    pub fn id_by_name(&self, name: &str) -> Option<BlockId> {
        self.by_name.get(name).copied()
    }

    /// Number of distinct behaviours.
    pub fn len(&self) -> usize {
        self.behaviors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.behaviors.is_empty()
    }

    pub fn behaviors(&self) -> impl Iterator<Item = &BlockBehavior> {
        self.behaviors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unregistered_lookup_is_none() {
        let mut reg = BlockRegistry::new();
        reg.register(1, BlockBehavior::solid("stone", TextureTable::single("stone")));
        assert!(reg.get(Block::new(2, 0)).is_none());
        assert!(reg.get(Block::new(1, 255)).is_some());
        assert_eq!(reg.id_by_name("stone"), Some(1));
    }

    #[test]
    fn face_filling_is_all_or_nothing() {
        let stone = BlockBehavior::solid("stone", TextureTable::single("stone"));
        let slab = BlockBehavior::new("slab", Shape::Slab, TextureTable::single("stone"));
        for face in Face::ALL {
            for state in [0, 8, 255] {
                assert!(stone.fills_face(face, state));
                assert!(!slab.fills_face(face, state));
            }
        }
    }

    #[test]
    fn per_state_registration_keeps_states_apart() {
        let mut reg = BlockRegistry::new();
        reg.register_states(
            43,
            0..=7,
            BlockBehavior::solid("double_stone_slab", TextureTable::single("stone_slab_side")),
        );
        reg.register_states(
            43,
            8..=15,
            BlockBehavior::solid("smooth_double_slab", TextureTable::single("stone_slab_top")),
        );
        let lo = reg.get(Block::new(43, 3)).unwrap();
        let hi = reg.get(Block::new(43, 9)).unwrap();
        assert!(lo.uses_state && hi.uses_state);
        assert_ne!(lo.name, hi.name);
        assert!(reg.get(Block::new(43, 16)).is_none());
    }

    #[test]
    #[should_panic(expected = "registered twice")]
    fn duplicate_registration_panics() {
        let mut reg = BlockRegistry::new();
        reg.register(1, BlockBehavior::solid("stone", TextureTable::single("stone")));
        reg.register_states(1, [4], BlockBehavior::solid("x", TextureTable::single("x")));
    }
}
