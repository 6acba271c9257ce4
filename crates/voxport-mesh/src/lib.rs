//! Block-to-geometry compiler: per-voxel shape generation, culling, and texture bucketing.
#![forbid(unsafe_code)]

pub mod build;
pub mod config;
pub mod cull;
pub mod emit;
pub mod shapes;

pub use build::{CompiledMesh, MeshStats, compile_grid, compile_voxel};
pub use config::ExportConfig;
pub use cull::face_visible;
pub use emit::{QuadBuckets, QuadSink};
pub use shapes::liquid_height;
