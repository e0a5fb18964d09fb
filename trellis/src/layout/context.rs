//! Layout context for record/replay, tracing and scratch buffers.
//!
//! The LayoutContext carries state through the layout tree:
//! - The op sink widgets draw into (the frame's display list, or a recording)
//! - Depth/name tracking for layout tracing
//! - Reusable scratch buffers for flex allocation

use crate::display_list::{DisplayList, Recording};
use crate::primitives::{Point, Size};

use super::constraints::Constraints;

/// Per-child result of a flex pass.
#[derive(Debug, Default)]
pub struct FlexAllocation {
    /// Actual size the child returned.
    pub size: Size,
    /// Whether this child is flex (vs rigid).
    pub is_flex: bool,
    /// Recorded draw output, taken when the child is composited.
    pub recording: Option<Recording>,
}

/// Layout context passed through the widget tree.
pub struct LayoutContext<'a> {
    /// Current op sink. Swapped out while recording.
    ops: &'a mut DisplayList,

    /// Pool of flex scratch buffers; nested containers each take one.
    flex_pool: Vec<Vec<FlexAllocation>>,

    depth: u32,
    current_name: &'static str,
    name_stack: Vec<&'static str>,
}

impl<'a> LayoutContext<'a> {
    pub fn new(ops: &'a mut DisplayList) -> Self {
        Self {
            ops,
            flex_pool: Vec::with_capacity(8),
            depth: 0,
            current_name: "Root",
            name_stack: Vec::with_capacity(16),
        }
    }

    /// The sink widgets draw into.
    #[inline]
    pub fn primitives_mut(&mut self) -> &mut DisplayList {
        &mut *self.ops
    }

    /// Run `f` with a fresh op sink and return what it drew as a recording.
    ///
    /// This is the measure half of measure-and-draw: the size comes back
    /// now, the output is replayed once the container knows the offset.
    pub fn record<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> (T, Recording) {
        let outer = self.ops.take();
        let value = f(self);
        let inner = std::mem::replace(&mut *self.ops, outer);
        (value, Recording::from_list(inner))
    }

    /// Replay a recording into the current sink, translated by `offset`.
    #[inline]
    pub fn replay(&mut self, recording: Recording, offset: Point) {
        self.ops.append(recording, offset);
    }

    /// Enter a named container scope (for tracing).
    pub fn enter(&mut self, name: &'static str) {
        self.name_stack.push(self.current_name);
        self.current_name = name;
        self.depth += 1;
    }

    /// Exit the current scope.
    pub fn exit(&mut self) {
        self.current_name = self.name_stack.pop().unwrap_or("Root");
        self.depth = self.depth.saturating_sub(1);
    }

    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[inline]
    pub fn current_name(&self) -> &'static str {
        self.current_name
    }

    pub(crate) fn take_flex_scratch(&mut self) -> Vec<FlexAllocation> {
        let mut v = self.flex_pool.pop().unwrap_or_default();
        v.clear();
        v
    }

    pub(crate) fn return_flex_scratch(&mut self, mut v: Vec<FlexAllocation>) {
        v.clear();
        self.flex_pool.push(v);
    }

    /// Log a layout decision.
    pub fn log_layout(&self, constraints: Constraints, result: Size) {
        tracing::trace!(
            target: "trellis::layout",
            container = self.current_name,
            depth = self.depth,
            %constraints,
            width = result.width,
            height = result.height,
            "layout"
        );
    }

    /// Warn when rigid children overflow the available extent.
    pub fn warn_oversized(&self, actual: i32, max: i32, axis: &str) {
        if actual > max {
            tracing::warn!(
                target: "trellis::layout",
                container = self.current_name,
                depth = self.depth,
                "{} produced {} {} but only {} available",
                self.current_name,
                actual,
                axis,
                max
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Rect;

    #[test]
    fn test_record_captures_and_restores_sink() {
        let mut list = DisplayList::new();
        let mut cx = LayoutContext::new(&mut list);
        cx.primitives_mut().add_paint(Rect::new(0, 0, 1, 1), 1);

        let (size, rec) = cx.record(|cx| {
            cx.primitives_mut().add_paint(Rect::new(0, 0, 5, 5), 2);
            Size::new(5, 5)
        });
        assert_eq!(size, Size::new(5, 5));
        assert_eq!(rec.ops().paint_ids(), vec![2]);
        assert_eq!(cx.primitives_mut().paint_ids(), vec![1]);

        cx.replay(rec, Point::new(10, 0));
        assert_eq!(list.paint_rect(2), Some(Rect::new(10, 0, 5, 5)));
    }

    #[test]
    fn test_nested_record() {
        let mut list = DisplayList::new();
        let mut cx = LayoutContext::new(&mut list);
        let (_, outer) = cx.record(|cx| {
            let (_, inner) = cx.record(|cx| {
                cx.primitives_mut().add_paint(Rect::new(0, 0, 1, 1), 9);
            });
            cx.replay(inner, Point::new(1, 1));
        });
        cx.replay(outer, Point::new(2, 2));
        assert_eq!(list.paint_rect(9), Some(Rect::new(3, 3, 1, 1)));
    }

    #[test]
    fn test_enter_exit() {
        let mut list = DisplayList::new();
        let mut cx = LayoutContext::new(&mut list);
        assert_eq!(cx.depth(), 0);
        cx.enter("Flex");
        cx.enter("List");
        assert_eq!(cx.depth(), 2);
        assert_eq!(cx.current_name(), "List");
        cx.exit();
        assert_eq!(cx.current_name(), "Flex");
        cx.exit();
        assert_eq!(cx.depth(), 0);
        assert_eq!(cx.current_name(), "Root");
    }

    #[test]
    fn test_flex_scratch_reuse() {
        let mut list = DisplayList::new();
        let mut cx = LayoutContext::new(&mut list);
        let mut a = cx.take_flex_scratch();
        a.push(FlexAllocation::default());
        let cap = a.capacity();
        cx.return_flex_scratch(a);
        let b = cx.take_flex_scratch();
        assert!(b.is_empty());
        assert_eq!(b.capacity(), cap);
    }
}
