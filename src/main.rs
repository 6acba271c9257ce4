//! voxport: compiles a voxel grid into per-texture quad buckets.

mod showcase;

use clap::Parser;
use std::error::Error;
use std::path::PathBuf;

use voxport_blocks::BlockRegistry;
use voxport_chunk::VoxelGrid;
use voxport_mesh::{ExportConfig, compile_grid};

/// Block-to-geometry compiler for legacy block grids.
#[derive(Parser, Debug)]
#[command(name = "voxport")]
#[command(about = "Compiles a voxel grid into textured quads and reports what it produced")]
struct Args {
    /// Export settings (TOML). Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Voxel dump to compile (`size sx sy sz` header, then `x y z id state` lines).
    #[arg(short, long, conflicts_with = "showcase")]
    grid: Option<PathBuf>,

    /// Compile the built-in showcase grid instead of a dump.
    #[arg(long)]
    showcase: bool,

    /// Force parallel compilation regardless of the config.
    #[arg(long)]
    parallel: bool,

    /// Worker threads for parallel compilation.
    #[arg(long)]
    threads: Option<usize>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = run(args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let mut cfg = match &args.config {
        Some(path) => ExportConfig::from_path(path)
            .map_err(|e| format!("config {}: {}", path.display(), e))?,
        None => ExportConfig::default(),
    };
    if args.parallel {
        cfg.parallel = true;
    }
    if args.threads.is_some() {
        cfg.threads = args.threads;
    }

    let reg = BlockRegistry::vanilla();
    let grid = match &args.grid {
        Some(path) => {
            VoxelGrid::from_dump_path(path).map_err(|e| format!("grid {}: {}", path.display(), e))?
        }
        None if args.showcase => {
            let (grid, labels) = showcase::showcase_grid(&reg);
            log::info!("showcase: {} blocks ({})", labels.len(), labels.join(", "));
            grid
        }
        None => return Err("nothing to compile: pass --grid <file> or --showcase".into()),
    };

    let (sx, sy, sz) = grid.dims();
    log::info!("compiling {}x{}x{} grid", sx, sy, sz);
    let mesh = compile_grid(&grid, &reg, &cfg);
    for (texture, quads) in mesh.buckets.iter() {
        log::info!("  {:<32} {:>7} quads", texture, quads.len());
    }
    log::info!(
        "{} quads in {} textures from {} voxels ({} unregistered, {} placeholder states)",
        mesh.stats.quads,
        mesh.buckets.textures().count(),
        mesh.stats.voxels,
        mesh.stats.unregistered,
        mesh.stats.fallbacks.len()
    );
    Ok(())
}
