//! Trellis: constraint-driven flex and list layout.
//!
//! Trellis lays out widgets supplied by a host toolkit. It never paints
//! itself: widgets draw into a [`DisplayList`] of host primitives, and
//! containers place that output once every child has been measured.
//!
//! - [`layout::Flex`], [`layout::Column`] and [`layout::Row`] split space
//!   between rigid and weighted children, rounding so the shares always add
//!   up to the space available.
//! - [`layout::List`] and [`layout::ListStyle`] lay out only the visible
//!   items of long lists and coordinate scrollbars on both axes.
//! - [`ScrollState`] turns wheel and drag input into list positions.
//! - [`UiState`] holds values shared with background threads.
//!
//! # Usage
//!
//! ```ignore
//! let mut out = DisplayList::new();
//! let mut cx = LayoutContext::new(&mut out);
//! let constraints = Constraints::tight(window);
//! ListStyle::new(&mut app.scroll).layout(&mut cx, constraints, rows.len(), |cx, cs, i| {
//!     Row::with_weights(&[1.0, 3.0], rows[i].cells()).layout(cx, cs)
//! });
//! host.draw(&out);
//! ```

// Core primitives
pub mod primitives;
pub mod display_list;

// Layout system
pub mod layout;

// State helpers
pub mod scroll_state;
pub mod binding;
pub mod ui_state;

pub mod config;
pub mod error;

// Re-export core types
pub use primitives::{Axis, Color, Point, Rect, Size};
pub use display_list::{DisplayList, Primitive, Recording};
pub use layout::{
    Column, Constraints, Flex, FlexChild, LayoutContext, List, ListStyle, Position, Row, Widget,
};
pub use scroll_state::{ScrollAxis, ScrollDelta, ScrollEvent, ScrollEventKind, ScrollState};
pub use binding::{Binding, BindingError, Value, ValueKind};
pub use ui_state::{UiState, UiStateReader};
pub use config::{ConfigError, ListConfig, ScrollConfig, ScrollbarConfig, TrellisConfig};
pub use error::{Error, Result};
