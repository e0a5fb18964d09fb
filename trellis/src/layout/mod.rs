//! Layout System for Trellis
//!
//! Flexbox-inspired containers and a virtualized scrolling list. A layout
//! pass is a single walk down the widget tree: every widget receives
//! [`Constraints`], returns its size, and draws into the [`LayoutContext`].
//! Containers record each child's output and replay it once the child's
//! offset is known.
//!
//! # Architecture
//!
//! ```text
//! Constraints -> Flex (rigid, then flexible) -> List/ListStyle -> DisplayList
//! ```

pub mod constraints;
pub mod context;
pub mod length;

pub mod child;
pub mod flex;
pub mod column;
pub mod row;

pub mod list;
pub mod scrollbar;
pub mod list_style;

// Re-export core types
pub use constraints::{Constraints, INFINITE};
pub use context::{FlexAllocation, LayoutContext};
pub use length::{Alignment, CrossAxisAlignment};

pub use child::{Block, FlexChild, Spacer, Widget, widget};
pub use flex::{Flex, FlexDistributor, distribute_flex};
pub use column::Column;
pub use row::Row;

pub use list::{List, ListMetrics, Position, viewport_fractions};
pub use scrollbar::{Scrollbar, ScrollbarVisibility, resolve_scrollbars};
pub use list_style::ListStyle;
