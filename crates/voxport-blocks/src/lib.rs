//! Block types, texture-selection tables and the block-behaviour registry.
#![forbid(unsafe_code)]

pub mod bits;
pub mod catalog;
pub mod registry;
pub mod textures;
pub mod types;

pub use registry::{BlockBehavior, BlockRegistry};
pub use textures::{FaceTextures, PLACEHOLDER_TEXTURE, TextureTable};
pub use types::{Block, BlockId, BlockState, LayerHeight, LiquidFamily, RailKind, Shape};
