use enum_map::Enum;
use serde::{Deserialize, Serialize};
use unnamed_entity::entity_id;

use crate::coord::{DeviceGrid, TileCoord};

entity_id! {
    pub id RrNodeId u32, reserve 1;
}

/// Category of a routing-resource node as seen on a GSB perimeter. Channel
/// wires are split by orientation; pins by direction relative to the logic
/// block they serve.
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Enum, Serialize, Deserialize,
)]
pub enum NodeCategory {
    ChanX,
    ChanY,
    Ipin,
    Opin,
}

impl NodeCategory {
    pub const CATEGORIES: [NodeCategory; 4] = [
        NodeCategory::ChanX,
        NodeCategory::ChanY,
        NodeCategory::Ipin,
        NodeCategory::Opin,
    ];

    pub fn is_chan(self) -> bool {
        matches!(self, NodeCategory::ChanX | NodeCategory::ChanY)
    }
}

impl std::fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                NodeCategory::ChanX => "CHANX",
                NodeCategory::ChanY => "CHANY",
                NodeCategory::Ipin => "IPIN",
                NodeCategory::Opin => "OPIN",
            }
        )
    }
}

/// Direction of a node's port in the context of one GSB side.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum PortDir {
    Input,
    Output,
}

impl std::fmt::Display for PortDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                PortDir::Input => "IN",
                PortDir::Output => "OUT",
            }
        )
    }
}

/// One placed reference: a routing-graph node handle plus its port direction.
/// The node itself is owned by the graph collaborator, never by the index.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct NodeSlot {
    pub node: RrNodeId,
    pub dir: PortDir,
}

/// What the spatial index consumes from the routing-resource graph: device
/// extents plus per-node geometry. Implemented by the graph-construction
/// collaborator.
pub trait RrGraphView {
    fn grid(&self) -> DeviceGrid;
    fn node_category(&self, node: RrNodeId) -> NodeCategory;
    /// Low endpoint (xlow, ylow) of the node's bounding box.
    fn node_low(&self, node: RrNodeId) -> TileCoord;
    /// High endpoint (xhigh, yhigh) of the node's bounding box.
    fn node_high(&self, node: RrNodeId) -> TileCoord;
}
