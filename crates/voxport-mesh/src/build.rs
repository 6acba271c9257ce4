use std::collections::BTreeSet;
use std::time::Instant;

use rayon::ThreadPoolBuilder;
use rayon::prelude::*;

use voxport_blocks::{Block, BlockRegistry, PLACEHOLDER_TEXTURE};
use voxport_chunk::{NeighborSource, VoxelGrid};
use voxport_geom::{Quad, Vec3};

use crate::config::ExportConfig;
use crate::emit::{QuadBuckets, QuadSink};
use crate::shapes::{self, ShapeContext};

/// Counters gathered while compiling a grid.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct MeshStats {
    /// Non-air voxels considered.
    pub voxels: usize,
    /// Voxels skipped because their (ID, state) has no behaviour.
    pub unregistered: usize,
    pub quads: usize,
    /// Blocks that produced at least one placeholder-textured quad.
    pub fallbacks: BTreeSet<Block>,
}

impl MeshStats {
    pub fn merge(&mut self, other: MeshStats) {
        self.voxels += other.voxels;
        self.unregistered += other.unregistered;
        self.quads += other.quads;
        self.fallbacks.extend(other.fallbacks);
    }
}

/// Quads grouped by texture, in grid coordinates, plus what it took to make them.
#[derive(Default, Clone, Debug)]
pub struct CompiledMesh {
    pub buckets: QuadBuckets,
    pub stats: MeshStats,
}

impl CompiledMesh {
    pub fn merge(&mut self, other: CompiledMesh) {
        self.buckets.merge(other.buckets);
        self.stats.merge(other.stats);
    }
}

fn elapsed_ms(start: Instant) -> u32 {
    start.elapsed().as_millis().min(u128::from(u32::MAX)) as u32
}

/// Unit-cell quads for the voxel at `pos`; empty for air and unregistered blocks.
pub fn compile_voxel(
    reg: &BlockRegistry,
    source: &dyn NeighborSource,
    pos: (i32, i32, i32),
) -> Vec<Quad> {
    ShapeContext::at(reg, source, pos)
        .map(|ctx| shapes::generate(&ctx))
        .unwrap_or_default()
}

/// Compiles every voxel of `grid` into texture buckets.
///
/// The output does not depend on `cfg.parallel`: layers are compiled independently and merged
/// bottom to top.
pub fn compile_grid(grid: &VoxelGrid, reg: &BlockRegistry, cfg: &ExportConfig) -> CompiledMesh {
    let start = Instant::now();
    let out = if cfg.parallel {
        compile_parallel(grid, reg, cfg)
    } else {
        let mut acc = CompiledMesh::default();
        for y in 0..grid.sy {
            acc.merge(compile_layer(grid, reg, cfg, y));
        }
        acc
    };

    if !out.stats.fallbacks.is_empty() {
        log::warn!(
            "{} block state(s) have no texture entry and use '{}': {:?}",
            out.stats.fallbacks.len(),
            PLACEHOLDER_TEXTURE,
            out.stats
                .fallbacks
                .iter()
                .map(|b| (b.id, b.state))
                .collect::<Vec<_>>()
        );
    }
    log::debug!(
        "compiled {}x{}x{} grid: voxels={} unregistered={} quads={} textures={} in {}ms",
        grid.sx,
        grid.sy,
        grid.sz,
        out.stats.voxels,
        out.stats.unregistered,
        out.stats.quads,
        out.buckets.textures().count(),
        elapsed_ms(start)
    );
    out
}

fn compile_parallel(grid: &VoxelGrid, reg: &BlockRegistry, cfg: &ExportConfig) -> CompiledMesh {
    let run = || -> Vec<CompiledMesh> {
        (0..grid.sy)
            .into_par_iter()
            .map(|y| compile_layer(grid, reg, cfg, y))
            .collect()
    };
    let layers = match cfg.threads {
        Some(n) => match ThreadPoolBuilder::new().num_threads(n).build() {
            Ok(pool) => pool.install(run),
            Err(e) => {
                log::warn!("could not build a {n}-thread pool ({e}); using the global pool");
                run()
            }
        },
        None => run(),
    };
    let mut acc = CompiledMesh::default();
    for layer in layers {
        acc.merge(layer);
    }
    acc
}

fn compile_layer(
    grid: &VoxelGrid,
    reg: &BlockRegistry,
    cfg: &ExportConfig,
    y: usize,
) -> CompiledMesh {
    let mut out = CompiledMesh::default();
    let yi = y as i32;
    for z in 0..grid.sz as i32 {
        for x in 0..grid.sx as i32 {
            let here = grid.block_at(x, yi, z);
            if here.is_air() {
                continue;
            }
            if cfg.interior_only && grid.on_shell(x, yi, z) {
                continue;
            }
            out.stats.voxels += 1;
            let Some(ctx) = ShapeContext::at(reg, grid, (x, yi, z)) else {
                out.stats.unregistered += 1;
                continue;
            };
            let offset = Vec3::new(x as f32, y as f32, z as f32);
            for q in shapes::generate(&ctx) {
                if cfg.suppress_outer_faces {
                    if let Some(face) = q.boundary_face() {
                        let (dx, dy, dz) = face.delta();
                        if !grid.contains(x + dx, yi + dy, z + dz) {
                            continue;
                        }
                    }
                }
                if &*q.texture == PLACEHOLDER_TEXTURE {
                    out.stats.fallbacks.insert(here);
                }
                out.stats.quads += 1;
                out.buckets.push_quad(q.translated(offset));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxport_geom::{DEFAULT_UVS, Face};

    fn grid_of(sx: usize, sy: usize, sz: usize, cells: &[((i32, i32, i32), Block)]) -> VoxelGrid {
        let mut g = VoxelGrid::new(sx, sy, sz);
        for &((x, y, z), b) in cells {
            g.set(x, y, z, b).unwrap();
        }
        g
    }

    #[test]
    fn single_stone_yields_six_plain_faces() {
        let reg = BlockRegistry::vanilla();
        let g = grid_of(1, 1, 1, &[((0, 0, 0), Block::new(1, 0))]);
        let mesh = compile_grid(&g, &reg, &ExportConfig::default());
        assert_eq!(mesh.stats.quads, 6);
        let stone = mesh.buckets.get("stone").unwrap();
        assert_eq!(stone.len(), 6);
        let mut seen: Vec<Face> = stone.iter().filter_map(|q| q.boundary_face()).collect();
        seen.sort();
        assert_eq!(seen, Face::ALL.to_vec());
        assert!(stone.iter().all(|q| q.uvs == DEFAULT_UVS));
    }

    #[test]
    fn quads_land_in_grid_space() {
        let reg = BlockRegistry::vanilla();
        let g = grid_of(3, 1, 1, &[((2, 0, 0), Block::new(1, 0))]);
        let mesh = compile_grid(&g, &reg, &ExportConfig::default());
        for q in mesh.buckets.get("stone").unwrap() {
            assert!(q.vertices.iter().all(|v| v.x >= 2.0 && v.x <= 3.0));
        }
    }

    #[test]
    fn suppress_outer_faces_keeps_only_inner_boundaries() {
        let reg = BlockRegistry::vanilla();
        let g = grid_of(
            2,
            1,
            1,
            &[((0, 0, 0), Block::new(1, 0)), ((1, 0, 0), Block::new(20, 0))],
        );
        let cfg = ExportConfig {
            suppress_outer_faces: true,
            ..ExportConfig::default()
        };
        let mesh = compile_grid(&g, &reg, &cfg);
        // only the stone face looking into the glass cell survives
        assert_eq!(mesh.stats.quads, 1);
        assert_eq!(mesh.buckets.get("stone").map(<[Quad]>::len), Some(1));
    }

    #[test]
    fn interior_only_skips_the_shell() {
        let reg = BlockRegistry::vanilla();
        let cells: Vec<_> = (0..3)
            .flat_map(|x| (0..3).flat_map(move |y| (0..3).map(move |z| (x, y, z))))
            .map(|p| (p, Block::new(20, 0)))
            .collect();
        let g = grid_of(3, 3, 3, &cells);
        let cfg = ExportConfig {
            interior_only: true,
            ..ExportConfig::default()
        };
        let mesh = compile_grid(&g, &reg, &cfg);
        assert_eq!(mesh.stats.voxels, 1);
        // glass against glass: nothing to show
        assert_eq!(mesh.stats.quads, 0);
    }

    #[test]
    fn unknown_blocks_are_counted_not_meshed() {
        let reg = BlockRegistry::vanilla();
        let cells = [((0, 0, 0), Block::new(999, 0)), ((1, 0, 0), Block::new(1, 0))];
        let g = grid_of(2, 1, 1, &cells);
        let mesh = compile_grid(&g, &reg, &ExportConfig::default());
        assert_eq!(mesh.stats.unregistered, 1);
        // unknown neighbour hides nothing
        assert_eq!(mesh.stats.quads, 6);
    }

    #[test]
    fn placeholder_textures_are_reported() {
        let reg = BlockRegistry::vanilla();
        // wool colour 16 does not exist
        let g = grid_of(1, 1, 1, &[((0, 0, 0), Block::new(35, 16))]);
        let mesh = compile_grid(&g, &reg, &ExportConfig::default());
        assert_eq!(mesh.buckets.get(PLACEHOLDER_TEXTURE).map(<[Quad]>::len), Some(6));
        assert!(mesh.stats.fallbacks.contains(&Block::new(35, 16)));
    }
}
