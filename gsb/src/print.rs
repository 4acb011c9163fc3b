use itertools::Itertools;
use unnamed_entity::EntityId;

use prjfabric_interconnect::coord::TileCoord;
use prjfabric_interconnect::dir::Side;
use prjfabric_interconnect::node::NodeCategory;

use crate::index::GsbIndex;

impl GsbIndex {
    /// Write a human-readable dump of every populated GSB, row-major over the
    /// device grid so the output is deterministic.
    pub fn print(&self, o: &mut dyn std::io::Write) -> std::io::Result<()> {
        for y in 0..self.grid.height {
            for x in 0..self.grid.width {
                let gsb = TileCoord::new(x, y);
                let Some(tile) = self.tiles.get(&gsb) else {
                    continue;
                };
                writeln!(o, "GSB {gsb}: {n} sides", n = self.num_sides(gsb))?;
                for side in Side::SIDES {
                    let Some(side_data) = tile.side(side) else {
                        continue;
                    };
                    for category in NodeCategory::CATEGORIES {
                        let bucket = &side_data.buckets[category];
                        if bucket.is_empty() {
                            continue;
                        }
                        writeln!(
                            o,
                            "\t{sn:6} {category:5} [{w}] {slots}",
                            sn = side.name(),
                            w = bucket.len(),
                            slots = bucket
                                .iter()
                                .enumerate()
                                .map(|(track, slot)| match slot {
                                    Some(s) => format!(
                                        "{track}:{node}:{dir}",
                                        node = s.node.to_idx(),
                                        dir = s.dir
                                    ),
                                    None => format!("{track}:open"),
                                })
                                .join(" ")
                        )?;
                    }
                }
            }
        }
        Ok(())
    }
}
