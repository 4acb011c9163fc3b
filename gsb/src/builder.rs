use std::collections::HashMap;
use std::ops::Deref;

use prjfabric_interconnect::coord::{DeviceGrid, TileCoord};
use prjfabric_interconnect::dir::Side;
use prjfabric_interconnect::node::{NodeCategory, NodeSlot, PortDir, RrNodeId};

use crate::index::{GsbIndex, GsbSide};

/// Single writer over the GSB table. The graph-construction pass registers
/// every perimeter node tile by tile, side by side, then calls [`freeze`] to
/// hand the read-only [`GsbIndex`] to everyone else. Queries are available
/// mid-build through `Deref`; they assume the buckets they address are already
/// populated.
///
/// [`freeze`]: GsbBuilder::freeze
pub struct GsbBuilder {
    gsb: GsbIndex,
}

impl GsbBuilder {
    pub fn new(grid: DeviceGrid) -> Self {
        GsbBuilder {
            gsb: GsbIndex {
                grid,
                tiles: HashMap::new(),
            },
        }
    }

    /// Capacity hint for the number of GSB tiles about to be registered.
    pub fn reserve(&mut self, tiles: usize) {
        self.gsb.tiles.reserve(tiles);
    }

    /// Place `node` with direction `dir` at (tile, side, category, track).
    /// The track index is the wire-track number and is preserved exactly;
    /// side and slot dimensions grow monotonically to fit, and registering an
    /// occupied address overwrites it.
    #[track_caller]
    pub fn register(
        &mut self,
        gsb: TileCoord,
        side: Side,
        category: NodeCategory,
        track: usize,
        node: RrNodeId,
        dir: PortDir,
    ) {
        debug_assert!(
            self.gsb.grid.contains(gsb),
            "GSB coordinate {gsb} out of range"
        );
        debug_assert!(side.is_valid(), "GSB side {side} out of range");
        let tile = self.gsb.tiles.entry(gsb).or_default();
        let side_data = tile.sides[side.to_index()].get_or_insert_with(GsbSide::default);
        let bucket = &mut side_data.buckets[category];
        if track >= bucket.len() {
            bucket.resize(track + 1, None);
        }
        bucket[track] = Some(NodeSlot { node, dir });
    }

    /// Drop everything registered so far; the device extents are kept.
    pub fn invalidate(&mut self) {
        self.gsb.tiles.clear();
    }

    /// Finish construction and return the read-only index.
    pub fn freeze(self) -> GsbIndex {
        self.gsb
    }
}

impl Deref for GsbBuilder {
    type Target = GsbIndex;
    fn deref(&self) -> &GsbIndex {
        &self.gsb
    }
}
