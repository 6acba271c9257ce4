use voxport_blocks::{Block, BlockRegistry};
use voxport_chunk::VoxelGrid;

/// One block to put on display, with a label for the summary.
#[derive(Clone, Debug)]
pub struct ShowcaseEntry {
    pub block: Block,
    pub label: String,
}

/// A block placed relative to the stairs cluster origin.
#[derive(Clone, Debug)]
pub struct ShowcasePlacement {
    pub dx: i32,
    pub dz: i32,
    pub block: Block,
    pub label: String,
}

// (name, state, label suffix)
const ROW: &[(&str, u8, &str)] = &[
    ("stone", 0, ""),
    ("grass", 0, ""),
    ("log", 4, "sideways"),
    ("furnace", 3, "south"),
    ("glass", 0, ""),
    ("leaves", 0, ""),
    ("oak_stairs", 0, "east"),
    ("stone_slab", 0, "bottom"),
    ("stone_slab", 8, "top"),
    ("fence", 0, ""),
    ("glass_pane", 0, ""),
    ("water", 0, ""),
    ("flowing_lava", 3, "level 3"),
    ("wheat", 7, "ripe"),
    ("tallgrass", 1, ""),
    ("bed", 1, "foot"),
    ("torch", 5, "floor"),
    ("torch", 1, "wall"),
    ("ladder", 2, ""),
    ("rail", 6, "curve"),
    ("golden_rail", 9, "powered"),
    ("snow_layer", 3, ""),
    ("carpet", 14, ""),
];

/// Every row entry whose block name is registered.
pub fn build_showcase_entries(reg: &BlockRegistry) -> Vec<ShowcaseEntry> {
    let mut out = Vec::with_capacity(ROW.len());
    for &(name, state, note) in ROW {
        let Some(id) = reg.id_by_name(name) else {
            log::warn!("showcase block '{}' is not registered; skipping", name);
            continue;
        };
        let label = if note.is_empty() {
            name.to_string()
        } else {
            format!("{name}({note})")
        };
        out.push(ShowcaseEntry {
            block: Block::new(id, state),
            label,
        });
    }
    out
}

/// Stairs in every facing and half, plus stacked pairs that complete a full block.
pub fn build_showcase_stairs_cluster(reg: &BlockRegistry) -> Vec<ShowcasePlacement> {
    let Some(id) = reg.id_by_name("stone_brick_stairs") else {
        return Vec::new();
    };
    const LAYOUT: &[(i32, i32, u8, &str)] = &[
        (0, 0, 0, "E"),
        (2, 0, 1, "W"),
        (4, 0, 2, "S"),
        (6, 0, 3, "N"),
        (0, 2, 4, "E top"),
        (2, 2, 5, "W top"),
        (4, 2, 6, "S top"),
        (6, 2, 7, "N top"),
        (0, 4, 0, "E"),
        (1, 4, 4, "E top"),
        (3, 4, 2, "S"),
        (4, 4, 6, "S top"),
    ];
    LAYOUT
        .iter()
        .map(|&(dx, dz, state, label)| ShowcasePlacement {
            dx,
            dz,
            block: Block::new(id, state),
            label: format!("stairs({label})"),
        })
        .collect()
}

/// A stone floor with the entries in a row (two cells apart) and the stairs cluster behind it.
pub fn showcase_grid(reg: &BlockRegistry) -> (VoxelGrid, Vec<String>) {
    let entries = build_showcase_entries(reg);
    let cluster = build_showcase_stairs_cluster(reg);
    let sx = (entries.len() * 2 + 1).max(9);
    let (sy, sz) = (4, 10);
    let mut grid = VoxelGrid::new(sx, sy, sz);
    let floor = Block::new(reg.id_by_name("stone").unwrap_or(1), 0);
    let mut labels = Vec::with_capacity(entries.len() + cluster.len());

    for z in 0..sz as i32 {
        for x in 0..sx as i32 {
            place(&mut grid, x, 0, z, floor);
        }
    }
    for (i, e) in entries.iter().enumerate() {
        place(&mut grid, 1 + 2 * i as i32, 1, 1, e.block);
        labels.push(e.label.clone());
    }
    for p in &cluster {
        place(&mut grid, 1 + p.dx, 1, 3 + p.dz, p.block);
        labels.push(p.label.clone());
    }
    (grid, labels)
}

fn place(grid: &mut VoxelGrid, x: i32, y: i32, z: i32, b: Block) {
    if let Err(e) = grid.set(x, y, z, b) {
        log::warn!("showcase placement dropped: {}", e);
    }
}
