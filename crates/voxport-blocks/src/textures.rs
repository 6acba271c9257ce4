//! Texture-selection tables: state value -> six per-face texture names.

use std::sync::Arc;

use voxport_geom::{Face, QuarterTurn, TextureName};

use crate::types::BlockState;

/// Texture name substituted for any state the table has no entry for.
pub const PLACEHOLDER_TEXTURE: &str = "unknown";

/// Six texture names in `Face` index order, each with an optional quarter-turn UV rotation.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceTextures {
    names: [TextureName; 6],
    rotations: [QuarterTurn; 6],
}

impl FaceTextures {
    /// Builds a face set from 1 (all faces), 3 (top, bottom, sides) or 6 (`Face` order) names.
    ///
    /// Any other count is a registration bug and panics.
    pub fn new(names: &[&str]) -> Self {
        assert!(
            matches!(names.len(), 1 | 3 | 6),
            "face texture set needs 1, 3 or 6 names, got {}",
            names.len()
        );
        let pick = |f: Face| {
            match names.len() {
                1 => names[0],
                3 => match f {
                    Face::PosY => names[0],
                    Face::NegY => names[1],
                    _ => names[2],
                },
                _ => names[f.index()],
            }
        };
        FaceTextures {
            names: Face::ALL.map(|f| Arc::from(pick(f))),
            rotations: [QuarterTurn::R0; 6],
        }
    }

    pub fn uniform(name: &str) -> Self {
        Self::new(&[name])
    }

    pub fn placeholder() -> Self {
        Self::uniform(PLACEHOLDER_TEXTURE)
    }

    pub fn with_face(mut self, face: Face, name: &str) -> Self {
        self.names[face.index()] = Arc::from(name);
        self
    }

    pub fn with_rotation(mut self, face: Face, turn: QuarterTurn) -> Self {
        self.rotations[face.index()] = turn;
        self
    }

    #[inline]
    pub fn name(&self, face: Face) -> &TextureName {
        &self.names[face.index()]
    }

    #[inline]
    pub fn rotation(&self, face: Face) -> QuarterTurn {
        self.rotations[face.index()]
    }

    pub fn is_placeholder(&self, face: Face) -> bool {
        &*self.names[face.index()] == PLACEHOLDER_TEXTURE
    }
}

/// Per-state texture sets for one block ID. Absent states resolve to the placeholder.
#[derive(Clone, Debug)]
pub struct TextureTable {
    entries: Vec<Option<FaceTextures>>,
    fallback: FaceTextures,
}

impl TextureTable {
    /// A table with no entries; every state resolves to the placeholder.
    pub fn empty() -> Self {
        TextureTable {
            entries: vec![None; 256],
            fallback: FaceTextures::placeholder(),
        }
    }

    /// The same face set for every state.
    pub fn uniform(faces: FaceTextures) -> Self {
        let mut t = Self::empty();
        t.entries.iter_mut().for_each(|e| *e = Some(faces.clone()));
        t
    }

    pub fn single(name: &str) -> Self {
        Self::uniform(FaceTextures::uniform(name))
    }

    /// Fills entries from `f`, called once per state value.
    pub fn from_fn(mut f: impl FnMut(BlockState) -> Option<FaceTextures>) -> Self {
        let mut t = Self::empty();
        for s in 0..=255u8 {
            t.entries[s as usize] = f(s);
        }
        t
    }

    /// State `i` gets the uniform texture `names[i]`; higher states are absent.
    pub fn variants(names: &[&str]) -> Self {
        Self::from_fn(|s| names.get(s as usize).map(|n| FaceTextures::uniform(n)))
    }

    pub fn with_state(mut self, state: BlockState, faces: FaceTextures) -> Self {
        self.entries[state as usize] = Some(faces);
        self
    }

    #[inline]
    pub fn get(&self, state: BlockState) -> Option<&FaceTextures> {
        self.entries[state as usize].as_ref()
    }

    #[inline]
    pub fn resolve(&self, state: BlockState) -> &FaceTextures {
        self.get(state).unwrap_or(&self.fallback)
    }

    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for TextureTable {
    fn default() -> Self {
        Self::empty()
    }
}
