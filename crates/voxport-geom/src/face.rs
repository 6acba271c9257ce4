use crate::{Axis, Uv, Vec3};

/// One of the six axis-aligned directions of a voxel.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Face {
    PosY = 0,
    NegY = 1,
    PosX = 2,
    NegX = 3,
    PosZ = 4,
    NegZ = 5,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::PosY,
        Face::NegY,
        Face::PosX,
        Face::NegX,
        Face::PosZ,
        Face::NegZ,
    ];

    /// The four lateral directions, counter-clockwise seen from above starting at east.
    pub const HORIZONTAL: [Face; 4] = [Face::PosX, Face::NegZ, Face::NegX, Face::PosZ];

    /// Returns the `[0..6)` index of this face.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts a face index `[0..6)` back into a `Face` value.
    /// Falls back to `PosY` for out-of-range indices.
    #[inline]
    pub fn from_index(i: usize) -> Face {
        match i {
            0 => Face::PosY,
            1 => Face::NegY,
            2 => Face::PosX,
            3 => Face::NegX,
            4 => Face::PosZ,
            5 => Face::NegZ,
            _ => Face::PosY,
        }
    }

    /// Returns the unit-normal vector for this face.
    #[inline]
    pub fn normal(self) -> Vec3 {
        let (x, y, z) = self.delta();
        Vec3::new(x as f32, y as f32, z as f32)
    }

    /// Returns the integer grid delta `(dx,dy,dz)` when stepping out of this face.
    #[inline]
    pub fn delta(self) -> (i32, i32, i32) {
        match self {
            Face::PosY => (0, 1, 0),
            Face::NegY => (0, -1, 0),
            Face::PosX => (1, 0, 0),
            Face::NegX => (-1, 0, 0),
            Face::PosZ => (0, 0, 1),
            Face::NegZ => (0, 0, -1),
        }
    }

    #[inline]
    pub fn opposite(self) -> Face {
        match self {
            Face::PosY => Face::NegY,
            Face::NegY => Face::PosY,
            Face::PosX => Face::NegX,
            Face::NegX => Face::PosX,
            Face::PosZ => Face::NegZ,
            Face::NegZ => Face::PosZ,
        }
    }

    #[inline]
    pub fn is_horizontal(self) -> bool {
        !matches!(self, Face::PosY | Face::NegY)
    }

    #[inline]
    pub fn axis(self) -> Axis {
        match self {
            Face::PosX | Face::NegX => Axis::X,
            Face::PosY | Face::NegY => Axis::Y,
            Face::PosZ | Face::NegZ => Axis::Z,
        }
    }

    /// Maps an axis-aligned unit vector back to a face.
    pub fn from_normal(n: Vec3) -> Option<Face> {
        const EPS: f32 = 1e-4;
        Face::ALL
            .into_iter()
            .find(|f| f.normal().approx_eq(n, EPS))
    }

    /// Rotates a face around +Y by a multiple of 90 degrees; vertical faces are unchanged.
    pub fn rotated_y(self, degrees: f32) -> Face {
        if !self.is_horizontal() {
            return self;
        }
        Face::from_normal(self.normal().rotated(Axis::Y, degrees)).unwrap_or(self)
    }

    /// Swaps top and bottom; lateral faces are unchanged.
    #[inline]
    pub fn flipped_vertical(self) -> Face {
        match self {
            Face::PosY => Face::NegY,
            Face::NegY => Face::PosY,
            f => f,
        }
    }

    /// Projects a point of the unit cell onto this face's texture space.
    #[inline]
    pub fn project_uv(self, p: Vec3) -> Uv {
        match self {
            Face::PosY => [p.x, 1.0 - p.z],
            Face::NegY => [p.x, p.z],
            Face::PosX => [1.0 - p.z, p.y],
            Face::NegX => [p.z, p.y],
            Face::PosZ => [p.x, p.y],
            Face::NegZ => [1.0 - p.x, p.y],
        }
    }
}
