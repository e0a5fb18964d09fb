//! ListStyle - A scrollable list with scrollbars on both axes.
//!
//! Wraps a [`List`] and a caller-owned [`ScrollState`]. Each frame runs:
//!
//! 1. A probe layout (output discarded) to measure the content.
//! 2. [`resolve_scrollbars`] to decide which bars are visible.
//! 3. The real list layout in the space the bars leave, composed with the
//!    bars through [`Flex`].
//! 4. A sync of the scroll state with what was laid out.

use crate::config::{ScrollbarConfig, TrellisConfig};
use crate::display_list::Recording;
use crate::primitives::{Axis, Point, Size};
use crate::scroll_state::{ScrollAxis, ScrollState};

use super::child::{Spacer, Widget};
use super::constraints::Constraints;
use super::context::LayoutContext;
use super::flex::Flex;
use super::length::CrossAxisAlignment;
use super::list::List;
use super::scrollbar::{Scrollbar, resolve_scrollbars};

/// Already laid-out output placed as a flex child.
struct Replay {
    size: Size,
    recording: Option<Recording>,
}

impl Widget for Replay {
    fn layout(&mut self, cx: &mut LayoutContext<'_>, constraints: Constraints) -> Size {
        if let Some(recording) = self.recording.take() {
            cx.replay(recording, Point::ORIGIN);
        }
        constraints.constrain(self.size)
    }
}

/// A scrollable list.
///
/// ```ignore
/// ListStyle::new(&mut state.scroll)
///     .scroll_to_end(true)
///     .layout(cx, constraints, lines.len(), |cx, cs, i| lines[i].layout(cx, cs));
/// ```
pub struct ListStyle<'s> {
    state: &'s mut ScrollState,
    list: List,
    scrollbar: ScrollbarConfig,
}

impl<'s> ListStyle<'s> {
    pub fn new(state: &'s mut ScrollState) -> Self {
        Self {
            state,
            list: List::vertical(),
            scrollbar: ScrollbarConfig::default(),
        }
    }

    /// Builder settings from a loaded config.
    pub fn from_config(state: &'s mut ScrollState, config: &TrellisConfig) -> Self {
        let cross_alignment = if config.list.stretch_items {
            CrossAxisAlignment::Stretch
        } else {
            CrossAxisAlignment::Start
        };
        Self::new(state)
            .scroll_to_end(config.list.scroll_to_end)
            .minor_scroll(config.list.minor_scroll)
            .cross_align(cross_alignment)
            .scrollbar(config.scrollbar)
    }

    pub fn axis(mut self, axis: Axis) -> Self {
        self.list.axis = axis;
        self
    }

    pub fn scroll_to_end(mut self, enabled: bool) -> Self {
        self.list.scroll_to_end = enabled;
        self
    }

    pub fn cross_align(mut self, alignment: CrossAxisAlignment) -> Self {
        self.list.cross_alignment = alignment;
        self
    }

    pub fn minor_scroll(mut self, enabled: bool) -> Self {
        self.list.minor_scroll = enabled;
        self
    }

    pub fn scrollbar(mut self, config: ScrollbarConfig) -> Self {
        self.scrollbar = config;
        self
    }

    /// Lay out `len` items, building each with `item(cx, constraints, index)`.
    pub fn layout<F>(
        &mut self,
        cx: &mut LayoutContext<'_>,
        constraints: Constraints,
        len: usize,
        mut item: F,
    ) -> Size
    where
        F: FnMut(&mut LayoutContext<'_>, Constraints, usize) -> Size,
    {
        cx.enter("ListStyle");
        let axis = self.list.axis;
        let thickness = self.scrollbar.thickness_px.max(0);

        // Probe against the full viewport.
        let mut list = self.list;
        let mut probe_position = self.state.position;
        let (probe, _) =
            cx.record(|cx| list.layout(cx, constraints, &mut probe_position, len, &mut item));
        let content_minor = if list.minor_scroll { probe.content_cross } else { 0 };
        let content = axis.size(probe_position.length, content_minor);

        let visibility = resolve_scrollbars(axis, content, constraints.max, thickness);
        self.state.set_visibility(visibility);
        let major_bar = if visibility.major { thickness } else { 0 };
        let minor_bar = if visibility.minor { thickness } else { 0 };

        // Final layout in the space the bars leave.
        let list_constraints = constraints
            .deflate(axis.cross(), major_bar)
            .deflate(axis, minor_bar);
        let max_minor_offset = (content_minor - list_constraints.cross_max(axis)).max(0);
        list.cross_offset = self.state.minor_offset().min(max_minor_offset);
        let position = &mut self.state.position;
        let (metrics, recording) =
            cx.record(|cx| list.layout(cx, list_constraints, position, len, &mut item));

        let content_minor = if list.minor_scroll { metrics.content_cross } else { 0 };
        self.state.sync(
            len,
            axis.main(metrics.size),
            axis.cross_of(metrics.size),
            content_minor,
        );

        // Compose: [list | major bar] above [minor bar | corner].
        let list_size = metrics.size;
        let bars = axis.size(minor_bar, major_bar);
        let total = constraints.constrain(Size::new(
            list_size.width + bars.width,
            list_size.height + bars.height,
        ));

        let mut body = Flex::new(axis.cross()).flexed(
            1.0,
            Replay {
                size: list_size,
                recording: Some(recording),
            },
        );
        if visibility.major {
            let fractions = self.state.fractions(ScrollAxis::Major);
            body = body.rigid(Scrollbar::from_config(axis, fractions, &self.scrollbar));
        }

        let mut outer = Flex::new(axis).flexed(1.0, body);
        if visibility.minor {
            let fractions = self.state.fractions(ScrollAxis::Minor);
            let bar = Flex::new(axis.cross())
                .flexed(1.0, Scrollbar::from_config(axis.cross(), fractions, &self.scrollbar))
                .rigid(Spacer {
                    natural: axis.size(0, major_bar),
                });
            outer = outer.rigid(bar);
        }
        outer.layout(cx, Constraints::tight(total));

        cx.log_layout(constraints, total);
        cx.exit();
        total
    }
}
