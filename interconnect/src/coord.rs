use serde::{Deserialize, Serialize};

/// Location of one tile in the device grid. No intrinsic bounds checking;
/// callers compare against [`DeviceGrid`] extents where that matters.
#[derive(
    Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
pub struct TileCoord {
    pub x: usize,
    pub y: usize,
}

impl TileCoord {
    pub fn new(x: usize, y: usize) -> Self {
        TileCoord { x, y }
    }

    /// Swap the axes.
    pub fn rotate(self) -> Self {
        TileCoord {
            x: self.y,
            y: self.x,
        }
    }

    pub fn reset(&mut self) {
        *self = TileCoord::default();
    }
}

impl core::ops::Add for TileCoord {
    type Output = TileCoord;
    fn add(self, rhs: TileCoord) -> TileCoord {
        TileCoord {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl core::ops::AddAssign for TileCoord {
    fn add_assign(&mut self, rhs: TileCoord) {
        *self = *self + rhs;
    }
}

impl std::fmt::Display for TileCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({x}, {y})", x = self.x, y = self.y)
    }
}

/// Device extents, passed explicitly wherever spatial lookups need to know
/// the grid size.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct DeviceGrid {
    pub width: usize,
    pub height: usize,
}

impl DeviceGrid {
    pub fn new(width: usize, height: usize) -> Self {
        DeviceGrid { width, height }
    }

    pub fn contains(&self, xy: TileCoord) -> bool {
        xy.x < self.width && xy.y < self.height
    }
}
