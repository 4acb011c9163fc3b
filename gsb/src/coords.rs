//! Coordinate-space conversions between switch-block, connection-block, and
//! grid addressing. Pure functions; none of them touch the lookup table.
//!
//! A GSB at (x, y) bundles the switch block at (x, y), the horizontal
//! connection block at (x, y), and the vertical connection block at
//! (x, y + 1). Channels entering from the top or right conceptually originate
//! one tile over, which is what `side_block_coord` models.

use serde::{Deserialize, Serialize};

use prjfabric_interconnect::coord::TileCoord;
use prjfabric_interconnect::dir::Side;
use prjfabric_interconnect::node::NodeCategory;

/// Orientation of a connection block inside a GSB.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum CbType {
    Horizontal,
    Vertical,
}

impl CbType {
    pub const CB_TYPES: [CbType; 2] = [CbType::Horizontal, CbType::Vertical];

    /// The GSB side whose channel bucket backs this connection block.
    pub fn chan_side(self) -> Side {
        match self {
            CbType::Horizontal => Side::Left,
            CbType::Vertical => Side::Top,
        }
    }

    pub fn chan_category(self) -> NodeCategory {
        match self {
            CbType::Horizontal => NodeCategory::ChanX,
            CbType::Vertical => NodeCategory::ChanY,
        }
    }

    /// Sides on which this connection block's input pins sit.
    pub fn ipin_sides(self) -> [Side; 2] {
        match self {
            CbType::Horizontal => [Side::Top, Side::Bottom],
            CbType::Vertical => [Side::Right, Side::Left],
        }
    }
}

impl std::fmt::Display for CbType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                CbType::Horizontal => "CBX",
                CbType::Vertical => "CBY",
            }
        )
    }
}

/// Coordinate of the side block a channel on `side` belongs to.
#[track_caller]
pub fn side_block_coord(gsb: TileCoord, side: Side) -> TileCoord {
    match side {
        Side::Top => TileCoord::new(gsb.x, gsb.y + 1),
        Side::Right => TileCoord::new(gsb.x + 1, gsb.y),
        Side::Bottom | Side::Left => gsb,
        Side::None => panic!("side_block_coord: invalid side"),
    }
}

/// Coordinate of the switch block inside a GSB. Identity, kept as a named
/// operation for clarity at call sites.
pub fn sb_coord(gsb: TileCoord) -> TileCoord {
    gsb
}

/// Coordinate of a connection block inside a GSB.
pub fn cb_coord(gsb: TileCoord, cb_type: CbType) -> TileCoord {
    side_block_coord(gsb, cb_type.chan_side())
}

/// Coordinate of the logic-block grid tile served by this GSB; the grid tile
/// sits one row above its switch block.
pub fn grid_coord(gsb: TileCoord) -> TileCoord {
    TileCoord::new(gsb.x, gsb.y + 1)
}

/// Channel side backing the connection block that a pin on `pin_side` talks to.
#[track_caller]
pub fn pin_chan_side(pin_side: Side) -> Side {
    match pin_side {
        Side::Top | Side::Bottom => Side::Left,
        Side::Right | Side::Left => Side::Top,
        Side::None => panic!("pin_chan_side: invalid side"),
    }
}

/// Channel category wired to a GSB side: left/right carry horizontal tracks,
/// top/bottom vertical ones.
#[track_caller]
pub fn chan_category(side: Side) -> NodeCategory {
    match side {
        Side::Left | Side::Right => NodeCategory::ChanX,
        Side::Top | Side::Bottom => NodeCategory::ChanY,
        Side::None => panic!("chan_category: invalid side"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_block_coords() {
        let gsb = TileCoord::new(2, 3);
        assert_eq!(side_block_coord(gsb, Side::Top), TileCoord::new(2, 4));
        assert_eq!(side_block_coord(gsb, Side::Right), TileCoord::new(3, 3));
        assert_eq!(side_block_coord(gsb, Side::Bottom), gsb);
        assert_eq!(side_block_coord(gsb, Side::Left), gsb);
    }

    #[test]
    fn sb_coord_is_identity() {
        let gsb = TileCoord::new(5, 0);
        assert_eq!(sb_coord(gsb), gsb);
    }

    #[test]
    fn cb_coords() {
        let gsb = TileCoord::new(2, 3);
        assert_eq!(cb_coord(gsb, CbType::Horizontal), gsb);
        assert_eq!(cb_coord(gsb, CbType::Vertical), TileCoord::new(2, 4));
    }

    #[test]
    fn grid_coord_is_one_row_up() {
        assert_eq!(grid_coord(TileCoord::new(2, 3)), TileCoord::new(2, 4));
    }

    #[test]
    fn cb_chan_sides() {
        assert_eq!(CbType::Horizontal.chan_side(), Side::Left);
        assert_eq!(CbType::Vertical.chan_side(), Side::Top);
        assert_eq!(CbType::Horizontal.chan_category(), NodeCategory::ChanX);
        assert_eq!(CbType::Vertical.chan_category(), NodeCategory::ChanY);
    }

    #[test]
    fn cb_ipin_sides() {
        assert_eq!(CbType::Horizontal.ipin_sides(), [Side::Top, Side::Bottom]);
        assert_eq!(CbType::Vertical.ipin_sides(), [Side::Right, Side::Left]);
    }

    #[test]
    fn pin_chan_sides() {
        assert_eq!(pin_chan_side(Side::Top), Side::Left);
        assert_eq!(pin_chan_side(Side::Bottom), Side::Left);
        assert_eq!(pin_chan_side(Side::Right), Side::Top);
        assert_eq!(pin_chan_side(Side::Left), Side::Top);
    }

    #[test]
    fn chan_categories_per_side() {
        assert_eq!(chan_category(Side::Left), NodeCategory::ChanX);
        assert_eq!(chan_category(Side::Right), NodeCategory::ChanX);
        assert_eq!(chan_category(Side::Top), NodeCategory::ChanY);
        assert_eq!(chan_category(Side::Bottom), NodeCategory::ChanY);
    }
}
