//! List - Virtualized list along one axis.
//!
//! Only the items intersecting the viewport are laid out. Where the view is
//! lives in a [`Position`] owned by the caller (usually inside a
//! [`ScrollState`](crate::scroll_state::ScrollState)): the index of the first
//! visible item and how far it is scrolled past the viewport start. Every
//! layout normalizes the position against the current item sizes, so scroll
//! deltas can be applied blindly between frames.

use std::collections::VecDeque;

use crate::display_list::Recording;
use crate::primitives::{Axis, Rect, Size};

use super::constraints::{Constraints, INFINITE};
use super::context::LayoutContext;
use super::length::CrossAxisAlignment;

/// Scroll position of a list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    /// Index of the first (partially) visible item.
    pub first: usize,
    /// Pixels of the first item scrolled out of view, `>= 0` after layout.
    pub offset: i32,
    /// Distance from the end of the last laid-out item to the viewport end.
    /// Negative when the last item is cut off.
    pub offset_last: i32,
    /// Number of items laid out in the last frame.
    pub count: usize,
    /// Estimated total content length: mean laid-out item size times the
    /// item count.
    pub length: i32,
    /// Whether there is content past the end of the viewport.
    pub before_end: bool,
}

impl Position {
    /// Approximate pixel distance from the content start to the viewport
    /// start, assuming uniform item sizes.
    pub fn scroll_px(&self, item_count: usize) -> f64 {
        if item_count == 0 || self.length <= 0 {
            return 0.0;
        }
        let mean = self.length as f64 / item_count as f64;
        self.first as f64 * mean + self.offset as f64
    }

    /// Move the view so that it starts `px` pixels into the content.
    pub fn set_scroll_px(&mut self, px: f64, item_count: usize) {
        if item_count == 0 || self.length <= 0 {
            self.first = 0;
            self.offset = 0;
            return;
        }
        let mean = self.length as f64 / item_count as f64;
        let px = px.max(0.0);
        let first = ((px / mean).floor() as usize).min(item_count - 1);
        self.first = first;
        self.offset = (px - first as f64 * mean).round() as i32;
    }

    /// Start and end of the viewport as fractions of the content, for
    /// sizing a scrollbar thumb. Both are within `[0, 1]`.
    ///
    /// Approximate: assumes every item has the mean size.
    pub fn viewport_fractions(&self, item_count: usize, visible: i32) -> (f32, f32) {
        viewport_fractions(self.first, self.offset, item_count, self.length, visible)
    }
}

/// Viewport start/end fractions for a list of `item_count` items whose
/// content is `length` pixels long, `visible` of which are on screen.
pub fn viewport_fractions(
    first: usize,
    offset: i32,
    item_count: usize,
    length: i32,
    visible: i32,
) -> (f32, f32) {
    if item_count == 0 || length <= 0 {
        return (0.0, 1.0);
    }
    let length = length as f64;
    let mean = length / item_count as f64;
    let start = ((first as f64 * mean + offset as f64) / length).clamp(0.0, 1.0);
    let end = (start + visible.max(0) as f64 / length).clamp(0.0, 1.0);
    (start as f32, end as f32)
}

/// Output of a list layout besides the draw ops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListMetrics {
    /// Size of the list viewport.
    pub size: Size,
    /// Largest cross extent among the laid-out items.
    pub content_cross: i32,
}

struct Laid {
    size: Size,
    recording: Recording,
}

/// A virtualized list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct List {
    pub axis: Axis,
    /// Keep the view at the end while it is already at the end.
    pub scroll_to_end: bool,
    pub cross_alignment: CrossAxisAlignment,
    /// Let items exceed the cross extent; the overflow is scrolled with
    /// `cross_offset`.
    pub minor_scroll: bool,
    /// Pixels scrolled along the cross axis (only with `minor_scroll`).
    pub cross_offset: i32,
}

impl List {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            ..Self::default()
        }
    }

    pub fn vertical() -> Self {
        Self::new(Axis::Vertical)
    }

    pub fn horizontal() -> Self {
        Self::new(Axis::Horizontal)
    }

    fn item_constraints(&self, constraints: Constraints) -> Constraints {
        let viewport_cross = constraints.cross_max(self.axis);
        let cross_max = if self.minor_scroll { INFINITE } else { viewport_cross };
        let cross_min = match self.cross_alignment {
            CrossAxisAlignment::Stretch if viewport_cross < INFINITE => viewport_cross,
            _ => 0,
        };
        Constraints::new(
            self.axis.size(0, cross_min),
            self.axis.size(INFINITE, cross_max),
        )
    }

    /// Lay out the visible part of a `len`-item list.
    ///
    /// `item(cx, constraints, index)` measures and draws item `index`.
    /// `position` is normalized in place.
    pub fn layout<F>(
        &self,
        cx: &mut LayoutContext<'_>,
        constraints: Constraints,
        position: &mut Position,
        len: usize,
        mut item: F,
    ) -> ListMetrics
    where
        F: FnMut(&mut LayoutContext<'_>, Constraints, usize) -> Size,
    {
        cx.enter("List");
        let axis = self.axis;
        let viewport = constraints.major_max(axis);
        let item_cs = self.item_constraints(constraints);

        if len == 0 {
            *position = Position::default();
            let size = constraints.constrain(Size::ZERO);
            cx.log_layout(constraints, size);
            cx.exit();
            return ListMetrics { size, content_cross: 0 };
        }

        let before = (position.first, position.offset);
        if self.scroll_to_end && !position.before_end {
            position.first = len;
            position.offset = 0;
        }
        let mut first = position.first.min(len);
        // Pixel sums run in i64: an offset near i32::MAX plus tall items
        // would overflow i32.
        let viewport_px = i64::from(viewport);
        let mut offset = if position.first > len { 0 } else { i64::from(position.offset) };

        let mut lay_out = |cx: &mut LayoutContext<'_>, index: usize| {
            let (size, recording) = cx.record(|cx| item(cx, item_cs, index));
            Laid { size, recording }
        };
        let main_of = |laid: &Laid| i64::from(axis.main(laid.size));

        let mut children: VecDeque<Laid> = VecDeque::new();
        let mut total = 0i64;

        // Scrolled back past the first item: pull in earlier items.
        while offset < 0 && first > 0 {
            first -= 1;
            let laid = lay_out(cx, first);
            offset += main_of(&laid);
            total += main_of(&laid);
            children.push_front(laid);
        }
        offset = offset.max(0);

        // Fill the viewport forward.
        let mut next = first + children.len();
        while next < len && total - offset < viewport_px {
            let laid = lay_out(cx, next);
            total += main_of(&laid);
            children.push_back(laid);
            next += 1;
        }

        // Hit the end with room to spare: shift the view back.
        if next == len && total - offset < viewport_px {
            offset = total - viewport_px;
            while offset < 0 && first > 0 {
                first -= 1;
                let laid = lay_out(cx, first);
                offset += main_of(&laid);
                total += main_of(&laid);
                children.push_front(laid);
            }
            offset = offset.max(0);
        }

        // Drop leading items scrolled entirely out of view.
        while offset > 0 {
            let Some(front) = children.front() else { break };
            let main = main_of(front);
            if main > offset {
                break;
            }
            offset -= main;
            total -= main;
            first += 1;
            children.pop_front();
        }

        if children.is_empty() {
            first = first.min(len - 1);
            offset = 0;
        }

        let visible_end = total - offset;
        let count = children.len();
        position.first = first;
        position.offset = saturate(offset);
        position.count = count;
        position.offset_last = saturate(viewport_px - visible_end);
        position.before_end = next < len || visible_end > viewport_px;
        position.length = if count > 0 {
            (total as f64 / count as f64 * len as f64).round() as i32
        } else {
            0
        };
        if (position.first, position.offset) != before {
            tracing::debug!(
                target: "trellis::layout",
                first = position.first,
                offset = position.offset,
                "list position normalized"
            );
        }

        let content_cross = children
            .iter()
            .map(|c| axis.cross_of(c.size))
            .max()
            .unwrap_or(0);
        let cross = content_cross.min(constraints.cross_max(axis));
        let size = constraints.constrain(axis.size(saturate(visible_end.min(viewport_px)), cross));

        // Composite, clipped to the viewport.
        let cross_offset = if self.minor_scroll { self.cross_offset.max(0) } else { 0 };
        cx.primitives_mut()
            .push_clip(Rect::new(0, 0, size.width, size.height));
        let mut main_pos = -position.offset;
        for child in children {
            let cross_pos = self
                .cross_alignment
                .offset(axis.cross_of(size), axis.cross_of(child.size))
                - cross_offset;
            let main = axis.main(child.size);
            cx.replay(child.recording, axis.point(main_pos, cross_pos));
            main_pos = main_pos.saturating_add(main);
        }
        cx.primitives_mut().pop_clip();

        cx.log_layout(constraints, size);
        cx.exit();
        ListMetrics { size, content_cross }
    }
}

fn saturate(px: i64) -> i32 {
    px.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display_list::DisplayList;

    /// Items of fixed height that paint their index.
    fn rows(height: i32) -> impl FnMut(&mut LayoutContext<'_>, Constraints, usize) -> Size {
        move |cx, cs, index| {
            let size = cs.constrain(Size::new(50, height));
            cx.primitives_mut()
                .add_paint(Rect::new(0, 0, size.width, size.height), index as u64);
            size
        }
    }

    fn run(
        list: &List,
        pos: &mut Position,
        len: usize,
        viewport: i32,
    ) -> (ListMetrics, DisplayList) {
        let mut out = DisplayList::new();
        let mut cx = LayoutContext::new(&mut out);
        let cs = Constraints::loose(Size::new(100, viewport));
        let m = list.layout(&mut cx, cs, pos, len, rows(10));
        (m, out)
    }

    #[test]
    fn test_lays_out_only_visible_items() {
        let mut pos = Position::default();
        let (m, out) = run(&List::vertical(), &mut pos, 100, 35);
        assert_eq!(m.size, Size::new(50, 35));
        assert_eq!(out.paint_ids(), vec![0, 1, 2, 3]);
        assert_eq!(pos.count, 4);
        assert_eq!(pos.length, 1000);
        assert!(pos.before_end);
        assert_eq!(pos.offset_last, -5);
    }

    #[test]
    fn test_offset_scrolls_and_drops_hidden_items() {
        let mut pos = Position { first: 0, offset: 25, ..Position::default() };
        let (_, out) = run(&List::vertical(), &mut pos, 100, 30);
        assert_eq!(pos.first, 2);
        assert_eq!(pos.offset, 5);
        assert_eq!(out.paint_rect(2), Some(Rect::new(0, -5, 50, 10)));
        assert_eq!(out.paint_ids(), vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_negative_offset_pulls_in_previous_items() {
        let mut pos = Position { first: 5, offset: -15, ..Position::default() };
        run(&List::vertical(), &mut pos, 100, 30);
        assert_eq!(pos.first, 3);
        assert_eq!(pos.offset, 5);

        let mut pos = Position { first: 1, offset: -50, ..Position::default() };
        run(&List::vertical(), &mut pos, 100, 30);
        assert_eq!((pos.first, pos.offset), (0, 0));
    }

    #[test]
    fn test_clamps_at_end() {
        let mut pos = Position { first: 98, offset: 7, ..Position::default() };
        let (_, out) = run(&List::vertical(), &mut pos, 100, 35);
        // Last item flush with the viewport end.
        assert_eq!(pos.first, 96);
        assert_eq!(pos.offset, 5);
        assert!(!pos.before_end);
        assert_eq!(out.paint_rect(99), Some(Rect::new(0, 25, 50, 10)));

        let mut pos = Position { first: 500, offset: 3, ..Position::default() };
        run(&List::vertical(), &mut pos, 100, 35);
        assert_eq!((pos.first, pos.offset), (96, 5));
    }

    #[test]
    fn test_short_list_fits() {
        let mut pos = Position { first: 2, offset: 4, ..Position::default() };
        let (m, _) = run(&List::vertical(), &mut pos, 3, 100);
        assert_eq!((pos.first, pos.offset), (0, 0));
        assert_eq!(m.size.height, 30);
        assert_eq!(pos.length, 30);
        assert!(!pos.before_end);
    }

    #[test]
    fn test_empty_list() {
        let mut pos = Position { first: 3, offset: 4, ..Position::default() };
        let (m, out) = run(&List::vertical(), &mut pos, 0, 100);
        assert_eq!(pos, Position::default());
        assert_eq!(m.size, Size::ZERO);
        assert!(out.is_empty());
    }

    #[test]
    fn test_scroll_to_end_sticks() {
        let list = List { scroll_to_end: true, ..List::vertical() };
        let mut pos = Position::default();
        run(&list, &mut pos, 20, 35);
        assert_eq!(pos.first, 16);
        assert!(!pos.before_end);
        // New items arrive; still at the end.
        run(&list, &mut pos, 25, 35);
        assert_eq!(pos.first, 21);
        // Once scrolled away, the view stays put.
        pos.offset -= 40;
        pos.before_end = true;
        run(&list, &mut pos, 30, 35);
        assert_eq!(pos.first, 17);
    }

    #[test]
    fn test_minor_scroll_offsets_items() {
        let list = List { minor_scroll: true, cross_offset: 30, ..List::vertical() };
        let mut pos = Position::default();
        let mut out = DisplayList::new();
        let mut cx = LayoutContext::new(&mut out);
        let m = list.layout(
            &mut cx,
            Constraints::loose(Size::new(100, 20)),
            &mut pos,
            5,
            |cx, cs, index| {
                let size = cs.constrain(Size::new(300, 10));
                cx.primitives_mut()
                    .add_paint(Rect::new(0, 0, size.width, size.height), index as u64);
                size
            },
        );
        assert_eq!(m.content_cross, 300);
        assert_eq!(m.size, Size::new(100, 20));
        assert_eq!(out.paint_rect(0), Some(Rect::new(-30, 0, 300, 10)));
    }

    #[test]
    fn test_huge_offset_with_tall_items() {
        let mut pos = Position {
            offset: i32::MAX - 10,
            ..Position::default()
        };
        let mut out = DisplayList::new();
        let mut cx = LayoutContext::new(&mut out);
        let m = List::vertical().layout(
            &mut cx,
            Constraints::loose(Size::new(100, 100)),
            &mut pos,
            3000,
            |_cx, cs, _index| cs.constrain(Size::new(10, INFINITE)),
        );
        // 2147 whole items scrolled past, the rest of the offset is inside
        // the next one.
        assert_eq!(pos.first, 2147);
        assert_eq!(pos.offset, 483_637);
        assert_eq!(pos.count, 1);
        assert!(pos.before_end);
        assert_eq!(m.size, Size::new(10, 100));
    }

    #[test]
    fn test_flexible_child_in_item_takes_no_space() {
        use crate::layout::child::{Block, Spacer};
        use crate::layout::column::Column;

        let mut pos = Position::default();
        let mut out = DisplayList::new();
        let mut cx = LayoutContext::new(&mut out);
        let m = List::vertical().layout(
            &mut cx,
            Constraints::loose(Size::new(100, 100)),
            &mut pos,
            5000,
            |cx, cs, index| {
                Column::new()
                    .push(Block::new(index as u64, 50, 10))
                    .push_flex(1.0, Spacer::default())
                    .layout(cx, cs)
            },
        );
        assert_eq!(m.size, Size::new(50, 100));
        assert_eq!(pos.count, 10);
        assert_eq!(pos.offset_last, 0);
        assert_eq!(pos.length, 50_000);
        assert_eq!(out.paint_rect(9), Some(Rect::new(0, 90, 50, 10)));
    }

    #[test]
    fn test_viewport_fractions() {
        assert_eq!(viewport_fractions(0, 0, 10, 100, 20), (0.0, 0.2));
        assert_eq!(viewport_fractions(5, 0, 10, 100, 20), (0.5, 0.7));
        assert_eq!(viewport_fractions(9, 5, 10, 100, 20), (0.95, 1.0));
        assert_eq!(viewport_fractions(0, 0, 0, 100, 20), (0.0, 1.0));
        assert_eq!(viewport_fractions(0, 0, 10, 0, 20), (0.0, 1.0));
    }

    #[test]
    fn test_scroll_px_round_trip() {
        let mut pos = Position { length: 1000, ..Position::default() };
        pos.set_scroll_px(255.0, 100);
        assert_eq!((pos.first, pos.offset), (25, 5));
        assert_eq!(pos.scroll_px(100), 255.0);
        pos.set_scroll_px(5000.0, 100);
        assert_eq!(pos.first, 99);
    }
}
