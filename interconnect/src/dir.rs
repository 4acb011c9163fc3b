use serde::{Deserialize, Serialize};

/// One side of a tile, in canonical order. `Side::None` is the out-of-range
/// sentinel (index 4, one past the last valid side); it is a stable part of
/// the API and never a valid bucket index.
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
    None,
}

impl Side {
    /// The four valid sides in canonical order.
    pub const SIDES: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    pub fn opposite(self) -> Side {
        match self {
            Side::Top => Side::Bottom,
            Side::Right => Side::Left,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
            Side::None => Side::None,
        }
    }

    pub fn rotate_cw(self) -> Side {
        match self {
            Side::Top => Side::Right,
            Side::Right => Side::Bottom,
            Side::Bottom => Side::Left,
            Side::Left => Side::Top,
            Side::None => Side::None,
        }
    }

    pub fn rotate_ccw(self) -> Side {
        match self {
            Side::Top => Side::Left,
            Side::Right => Side::Top,
            Side::Bottom => Side::Right,
            Side::Left => Side::Bottom,
            Side::None => Side::None,
        }
    }

    /// Canonical index, usable as an array subscript for the valid sides.
    pub fn to_index(self) -> usize {
        match self {
            Side::Top => 0,
            Side::Right => 1,
            Side::Bottom => 2,
            Side::Left => 3,
            Side::None => 4,
        }
    }

    /// Any index outside 0..4 normalizes to `Side::None`.
    pub fn from_index(idx: usize) -> Side {
        match idx {
            0 => Side::Top,
            1 => Side::Right,
            2 => Side::Bottom,
            3 => Side::Left,
            _ => Side::None,
        }
    }

    pub fn is_valid(self) -> bool {
        self != Side::None
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::None => "invalid_side",
        }
    }
}

impl core::ops::Not for Side {
    type Output = Side;
    fn not(self) -> Side {
        self.opposite()
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
