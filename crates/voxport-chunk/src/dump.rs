//! Plain-text voxel dumps.
//!
//! ```text
//! # comment
//! size 4 2 4
//! 0 0 0 1        # x y z id
//! 1 0 0 53 2     # x y z id state
//! ```

use std::error::Error;
use std::fs;
use std::path::Path;

use voxport_blocks::Block;

use crate::{GridError, VoxelGrid};

impl VoxelGrid {
    pub fn from_dump_str(src: &str) -> Result<Self, GridError> {
        let mut grid: Option<VoxelGrid> = None;
        for (n, raw) in src.lines().enumerate() {
            let line_no = n + 1;
            let line = raw.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }
            let parse_err = |message: String| GridError::Parse {
                line: line_no,
                message,
            };
            let mut fields = line.split_whitespace();
            if line.starts_with("size") {
                fields.next();
                let dims: Vec<usize> = fields
                    .map(|f| f.parse::<usize>())
                    .collect::<Result<_, _>>()
                    .map_err(|e| parse_err(format!("bad size: {e}")))?;
                let [sx, sy, sz] = dims[..] else {
                    return Err(parse_err("size needs three dimensions".into()));
                };
                if grid.is_some() {
                    return Err(parse_err("size given twice".into()));
                }
                let g = VoxelGrid::try_new(sx, sy, sz)
                    .map_err(|_| parse_err(format!("size {sx} {sy} {sz} too large")))?;
                grid = Some(g);
                continue;
            }
            let g = grid
                .as_mut()
                .ok_or_else(|| parse_err("voxel before size line".into()))?;
            let nums: Vec<i64> = fields
                .map(|f| f.parse::<i64>())
                .collect::<Result<_, _>>()
                .map_err(|e| parse_err(format!("bad number: {e}")))?;
            let (x, y, z, id, state) = match nums[..] {
                [x, y, z, id] => (x, y, z, id, 0),
                [x, y, z, id, state] => (x, y, z, id, state),
                _ => {
                    return Err(parse_err(format!(
                        "expected 4 or 5 fields, got {}",
                        nums.len()
                    )));
                }
            };
            let id = u16::try_from(id).map_err(|_| parse_err(format!("id {id} out of range")))?;
            let state =
                u8::try_from(state).map_err(|_| parse_err(format!("state {state} out of range")))?;
            let coord = |v: i64| {
                i32::try_from(v).map_err(|_| parse_err(format!("coordinate {v} out of range")))
            };
            g.set(coord(x)?, coord(y)?, coord(z)?, Block::new(id, state))?;
        }
        grid.ok_or(GridError::Parse {
            line: 0,
            message: "missing size line".into(),
        })
    }

    pub fn from_dump_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Ok(Self::from_dump_str(&s)?)
    }

    /// Writes the non-air voxels back out in dump format.
    pub fn to_dump_string(&self) -> String {
        let mut out = format!("size {} {} {}\n", self.sx, self.sy, self.sz);
        for ((x, y, z), b) in self.iter() {
            if b.is_air() {
                continue;
            }
            out.push_str(&format!("{x} {y} {z} {} {}\n", b.id, b.state));
        }
        out
    }
}
