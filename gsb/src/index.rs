//! The frozen GSB lookup table.
//!
//! Every routing-resource node on a GSB perimeter has a canonical address
//! (tile, side, category, track). The table is populated once by
//! [`GsbBuilder`](crate::builder::GsbBuilder) during graph construction and
//! then serves read-only queries: bucket widths, node fetches, reverse
//! lookups, and the opposite-side test used to spot wires that run straight
//! through a switch block.
//!
//! Addressing a bucket that was never populated is a programmer error; it is
//! caught by `debug_assert!`s here and by the ordinary bounds checks
//! underneath. The two reverse lookups are the exception: they are total and
//! answer "not here" with [`TRACK_OPEN`] / [`Side::None`], since speculative
//! misses are routine during incremental construction.

use enum_map::EnumMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use prjfabric_interconnect::coord::{DeviceGrid, TileCoord};
use prjfabric_interconnect::dir::Side;
use prjfabric_interconnect::node::{NodeCategory, NodeSlot, PortDir, RrGraphView, RrNodeId};

use crate::coords::{CbType, chan_category};

/// Track index returned by the reverse lookups when a node is absent.
/// Stable across the lifetime of the index; callers compare against it
/// directly.
pub const TRACK_OPEN: usize = usize::MAX;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub(crate) struct GsbSide {
    pub(crate) buckets: EnumMap<NodeCategory, Vec<Option<NodeSlot>>>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub(crate) struct GsbTile {
    pub(crate) sides: [Option<GsbSide>; 4],
}

impl GsbTile {
    pub(crate) fn side(&self, side: Side) -> Option<&GsbSide> {
        debug_assert!(side.is_valid(), "GSB side {side} out of range");
        self.sides.get(side.to_index()).and_then(|s| s.as_ref())
    }
}

/// Read-only spatial index over one device's GSBs. Obtained from
/// [`GsbBuilder::freeze`](crate::builder::GsbBuilder::freeze).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GsbIndex {
    pub(crate) grid: DeviceGrid,
    pub(crate) tiles: HashMap<TileCoord, GsbTile>,
}

impl GsbIndex {
    /// Device extents this index was built against.
    pub fn grid(&self) -> DeviceGrid {
        self.grid
    }

    /// False until the first `register` call, true from then on until an
    /// explicit invalidate.
    pub fn is_built(&self) -> bool {
        !self.tiles.is_empty()
    }

    /// Number of populated sides of a GSB, 0..=4. Edge and corner tiles
    /// legitimately report fewer than 4; never-touched coordinates report 0.
    pub fn num_sides(&self, gsb: TileCoord) -> usize {
        debug_assert!(self.valid_coord(gsb), "GSB coordinate {gsb} out of range");
        match self.tiles.get(&gsb) {
            Some(tile) => tile.sides.iter().filter(|s| s.is_some()).count(),
            None => 0,
        }
    }

    /// Channel width of one side of a GSB.
    #[track_caller]
    pub fn chan_width(&self, gsb: TileCoord, side: Side) -> usize {
        self.bucket(gsb, side, chan_category(side)).len()
    }

    /// Channel width of the connection block of the given orientation; by
    /// convention the horizontal CB is backed by the left-side bucket and the
    /// vertical one by the top-side bucket.
    #[track_caller]
    pub fn cb_chan_width(&self, gsb: TileCoord, cb_type: CbType) -> usize {
        self.bucket(gsb, cb_type.chan_side(), cb_type.chan_category())
            .len()
    }

    /// Maximum channel width across the populated sides of a GSB.
    pub fn max_chan_width(&self, gsb: TileCoord) -> usize {
        debug_assert!(self.valid_coord(gsb), "GSB coordinate {gsb} out of range");
        let Some(tile) = self.tiles.get(&gsb) else {
            return 0;
        };
        Side::SIDES
            .into_iter()
            .filter_map(|side| {
                tile.side(side)
                    .map(|s| s.buckets[chan_category(side)].len())
            })
            .max()
            .unwrap_or(0)
    }

    /// Node at an explicit (tile, side, category, track) address.
    #[track_caller]
    pub fn node(&self, gsb: TileCoord, side: Side, category: NodeCategory, track: usize) -> RrNodeId {
        self.slot(gsb, side, category, track).node
    }

    /// Port direction at an explicit (tile, side, category, track) address.
    #[track_caller]
    pub fn node_direction(
        &self,
        gsb: TileCoord,
        side: Side,
        category: NodeCategory,
        track: usize,
    ) -> PortDir {
        self.slot(gsb, side, category, track).dir
    }

    /// Channel node on a side; the category follows from the side.
    #[track_caller]
    pub fn chan_node(&self, gsb: TileCoord, side: Side, track: usize) -> RrNodeId {
        self.node(gsb, side, chan_category(side), track)
    }

    #[track_caller]
    pub fn chan_node_direction(&self, gsb: TileCoord, side: Side, track: usize) -> PortDir {
        self.node_direction(gsb, side, chan_category(side), track)
    }

    #[track_caller]
    pub fn num_ipin_nodes(&self, gsb: TileCoord, side: Side) -> usize {
        self.bucket(gsb, side, NodeCategory::Ipin).len()
    }

    #[track_caller]
    pub fn ipin_node(&self, gsb: TileCoord, side: Side, idx: usize) -> RrNodeId {
        self.node(gsb, side, NodeCategory::Ipin, idx)
    }

    #[track_caller]
    pub fn num_opin_nodes(&self, gsb: TileCoord, side: Side) -> usize {
        self.bucket(gsb, side, NodeCategory::Opin).len()
    }

    #[track_caller]
    pub fn opin_node(&self, gsb: TileCoord, side: Side, idx: usize) -> RrNodeId {
        self.node(gsb, side, NodeCategory::Opin, idx)
    }

    /// Reverse lookup: the track of `node` with direction `dir` in one
    /// (tile, side, category) bucket, or [`TRACK_OPEN`]. A node may sit on two
    /// sides of the same tile with different directions, so the direction is
    /// part of the key. Total: an unpopulated address answers [`TRACK_OPEN`].
    pub fn find_slot(
        &self,
        gsb: TileCoord,
        side: Side,
        category: NodeCategory,
        node: RrNodeId,
        dir: PortDir,
    ) -> usize {
        let Some(bucket) = self
            .tiles
            .get(&gsb)
            .and_then(|tile| tile.side(side))
            .map(|s| &s.buckets[category])
        else {
            return TRACK_OPEN;
        };
        bucket
            .iter()
            .position(|slot| matches!(slot, Some(s) if s.node == node && s.dir == dir))
            .unwrap_or(TRACK_OPEN)
    }

    /// Reverse lookup of a channel node on a side.
    pub fn find_chan_slot(&self, gsb: TileCoord, side: Side, node: RrNodeId, dir: PortDir) -> usize {
        self.find_slot(gsb, side, chan_category(side), node, dir)
    }

    /// Reverse lookup of a channel node through the connection-block
    /// convention.
    pub fn find_cb_chan_slot(
        &self,
        gsb: TileCoord,
        cb_type: CbType,
        node: RrNodeId,
        dir: PortDir,
    ) -> usize {
        self.find_slot(
            gsb,
            cb_type.chan_side(),
            cb_type.chan_category(),
            node,
            dir,
        )
    }

    /// Scan all sides of a tile for `node` with direction `dir`; first match
    /// in canonical side order wins. `(Side::None, TRACK_OPEN)` when absent
    /// everywhere.
    pub fn find_node(
        &self,
        gsb: TileCoord,
        category: NodeCategory,
        node: RrNodeId,
        dir: PortDir,
    ) -> (Side, usize) {
        for side in Side::SIDES {
            let track = self.find_slot(gsb, side, category, node, dir);
            if track != TRACK_OPEN {
                return (side, track);
            }
        }
        (Side::None, TRACK_OPEN)
    }

    /// Whether `node`, known to be an Output on `side` of this tile, also
    /// appears as an Input on the geometrically opposite side. True means the
    /// wire runs straight through the switch block rather than terminating in
    /// it. Calling this with a node that is an Input on `side` is a contract
    /// violation; it is not validated here.
    #[track_caller]
    pub fn sb_node_on_opposite_side(
        &self,
        gsb: TileCoord,
        side: Side,
        category: NodeCategory,
        node: RrNodeId,
    ) -> bool {
        assert!(category.is_chan(), "opposite-side test on {category} node");
        self.find_slot(gsb, !side, category, node, PortDir::Input) != TRACK_OPEN
    }

    /// Whether the channel track is a passing wire with respect to this
    /// switch block.
    ///
    /// TODO: check the track's low/high endpoint against
    /// `side_block_coord(gsb, side)` together with the track direction, and
    /// confirm terminating tracks via `sb_node_on_opposite_side`. Until that
    /// lands every track is reported as passing.
    pub fn is_passing_wire<G: RrGraphView>(
        &self,
        _graph: &G,
        _gsb: TileCoord,
        _side: Side,
        _track: usize,
    ) -> bool {
        true
    }

    /// Whether the coordinate lies inside the device extents.
    pub fn valid_coord(&self, gsb: TileCoord) -> bool {
        self.grid.contains(gsb)
    }

    /// Whether the side is populated on this tile.
    pub fn valid_side(&self, gsb: TileCoord, side: Side) -> bool {
        side.is_valid()
            && self
                .tiles
                .get(&gsb)
                .is_some_and(|tile| tile.side(side).is_some())
    }

    /// Whether the (side, category) bucket is addressable. The category
    /// dimension is a tagged enum, so once its side is populated every
    /// category is in range.
    pub fn valid_category(&self, gsb: TileCoord, side: Side, _category: NodeCategory) -> bool {
        self.valid_side(gsb, side)
    }

    /// Whether the track lies inside its bucket.
    pub fn valid_track(
        &self,
        gsb: TileCoord,
        side: Side,
        category: NodeCategory,
        track: usize,
    ) -> bool {
        side.is_valid()
            && self
                .tiles
                .get(&gsb)
                .and_then(|tile| tile.side(side))
                .is_some_and(|s| track < s.buckets[category].len())
    }

    /// Tear the whole table down for a rebuild; there is no partial clear.
    pub fn invalidate(self) -> crate::builder::GsbBuilder {
        crate::builder::GsbBuilder::new(self.grid)
    }

    #[track_caller]
    pub(crate) fn bucket(
        &self,
        gsb: TileCoord,
        side: Side,
        category: NodeCategory,
    ) -> &[Option<NodeSlot>] {
        debug_assert!(self.valid_coord(gsb), "GSB coordinate {gsb} out of range");
        let tile = self
            .tiles
            .get(&gsb)
            .unwrap_or_else(|| panic!("no GSB at {gsb}"));
        let side_data = tile
            .side(side)
            .unwrap_or_else(|| panic!("GSB {gsb} has no {side} side"));
        &side_data.buckets[category]
    }

    #[track_caller]
    pub(crate) fn slot(
        &self,
        gsb: TileCoord,
        side: Side,
        category: NodeCategory,
        track: usize,
    ) -> NodeSlot {
        debug_assert!(
            self.valid_track(gsb, side, category, track),
            "GSB {gsb} {side} {category} has no track {track}"
        );
        self.bucket(gsb, side, category)[track]
            .unwrap_or_else(|| panic!("GSB {gsb} {side} {category} track {track} never registered"))
    }
}
