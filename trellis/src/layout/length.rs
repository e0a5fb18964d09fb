//! Alignment types for flex containers.

use serde::{Deserialize, Serialize};

/// Alignment on the main axis (direction of flow).
///
/// Only matters when children use less than the container's minimum major
/// extent; the leftover space is distributed according to the mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    /// Pack children at the start; leftover space goes after them.
    #[default]
    Start,
    /// Pack children at the end.
    End,
    /// Center children.
    Center,
    /// Leftover space goes between children, none at the edges.
    SpaceBetween,
    /// Each child gets equal space on both sides.
    SpaceAround,
    /// Equal space between children and at both edges.
    SpaceEvenly,
}

impl Alignment {
    /// Total leftover space placed before child `index` (of `count`).
    ///
    /// Cumulative, so every offset is a whole pixel and the gaps of all
    /// children add up exactly to what the mode hands out.
    pub fn space_before(self, space: i32, index: usize, count: usize) -> i32 {
        if space <= 0 || count == 0 {
            return 0;
        }
        let space = space as i64;
        let i = index as i64;
        let n = count as i64;
        let before = match self {
            Alignment::Start => 0,
            Alignment::End => space,
            Alignment::Center => space / 2,
            Alignment::SpaceBetween => {
                if n > 1 {
                    space * i / (n - 1)
                } else {
                    0
                }
            }
            Alignment::SpaceAround => space * (2 * i + 1) / (2 * n),
            Alignment::SpaceEvenly => space * (i + 1) / (n + 1),
        };
        before as i32
    }
}

/// Alignment on the cross axis (perpendicular to flow).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossAxisAlignment {
    #[default]
    Start,
    End,
    Center,
    /// Children are offered the full cross extent as their minimum.
    Stretch,
}

impl CrossAxisAlignment {
    /// Cross offset of a child of extent `child` inside `available`.
    pub fn offset(self, available: i32, child: i32) -> i32 {
        let free = (available - child).max(0);
        match self {
            CrossAxisAlignment::Start | CrossAxisAlignment::Stretch => 0,
            CrossAxisAlignment::End => free,
            CrossAxisAlignment::Center => free / 2,
        }
    }
}
