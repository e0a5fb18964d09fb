//! Display list - recorded draw output.
//!
//! Widgets never draw directly to the host. They append primitives to the
//! op sink of the current [`LayoutContext`](crate::layout::LayoutContext),
//! which is either the frame's `DisplayList` or a [`Recording`] captured by a
//! container. Containers decide where a child goes only after all children
//! have been measured, then replay each recording at its final offset.

use crate::primitives::{Color, Point, Rect};

/// A single draw operation, in the coordinate space of whoever recorded it.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// A solid rectangle (backgrounds, scrollbar tracks and thumbs).
    Fill { rect: Rect, color: Color },
    /// A host-defined paint operation occupying `rect`. `id` is opaque to
    /// layout; the host resolves it (text run, icon, image...).
    Paint { rect: Rect, id: u64 },
    /// Restrict subsequent primitives to `rect` until the matching `PopClip`.
    PushClip(Rect),
    PopClip,
}

impl Primitive {
    fn translated(self, offset: Point) -> Self {
        match self {
            Primitive::Fill { rect, color } => Primitive::Fill {
                rect: rect.translate(offset),
                color,
            },
            Primitive::Paint { rect, id } => Primitive::Paint {
                rect: rect.translate(offset),
                id,
            },
            Primitive::PushClip(rect) => Primitive::PushClip(rect.translate(offset)),
            Primitive::PopClip => Primitive::PopClip,
        }
    }
}

/// Ordered list of primitives.
///
/// Used both as the frame's output and, wrapped in [`Recording`], as the
/// deferred output of a single child.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DisplayList {
    ops: Vec<Primitive>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all primitives, keeping the allocation for the next frame.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    pub fn push(&mut self, op: Primitive) -> &mut Self {
        self.ops.push(op);
        self
    }

    pub fn add_solid_rect(&mut self, rect: Rect, color: Color) -> &mut Self {
        self.push(Primitive::Fill { rect, color })
    }

    pub fn add_paint(&mut self, rect: Rect, id: u64) -> &mut Self {
        self.push(Primitive::Paint { rect, id })
    }

    pub fn push_clip(&mut self, rect: Rect) -> &mut Self {
        self.push(Primitive::PushClip(rect))
    }

    pub fn pop_clip(&mut self) -> &mut Self {
        self.push(Primitive::PopClip)
    }

    /// Append a recording translated by `offset`. Consumes the recording.
    pub fn append(&mut self, recording: Recording, offset: Point) {
        if offset == Point::ORIGIN {
            self.ops.extend(recording.list.ops);
        } else {
            self.ops
                .extend(recording.list.ops.into_iter().map(|op| op.translated(offset)));
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Primitive> {
        self.ops.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Rect of the first `Paint` with this id, if any.
    pub fn paint_rect(&self, id: u64) -> Option<Rect> {
        self.ops.iter().find_map(|op| match op {
            Primitive::Paint { rect, id: p } if *p == id => Some(*rect),
            _ => None,
        })
    }

    /// Ids of all `Paint` ops, in draw order.
    pub fn paint_ids(&self) -> Vec<u64> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Primitive::Paint { id, .. } => Some(*id),
                _ => None,
            })
            .collect()
    }

    /// All `Fill` rects with the given color, in draw order.
    pub fn fills_with(&self, color: Color) -> Vec<Rect> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Primitive::Fill { rect, color: c } if *c == color => Some(*rect),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn take(&mut self) -> DisplayList {
        std::mem::take(self)
    }
}

/// Deferred draw output of one child, replayed later at an offset.
///
/// A recording is consumed by [`DisplayList::append`], so it can be replayed
/// at most once.
#[derive(Debug, Default, Clone, PartialEq)]
#[must_use = "a recording draws nothing until it is replayed"]
pub struct Recording {
    list: DisplayList,
}

impl Recording {
    pub(crate) fn from_list(list: DisplayList) -> Self {
        Self { list }
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Primitives in the recording's local coordinates.
    pub fn ops(&self) -> &DisplayList {
        &self.list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_translates_every_primitive() {
        let mut child = DisplayList::new();
        child
            .push_clip(Rect::new(0, 0, 10, 10))
            .add_paint(Rect::new(1, 2, 3, 4), 7)
            .add_solid_rect(Rect::new(0, 0, 5, 5), Color::BLACK)
            .pop_clip();

        let mut out = DisplayList::new();
        out.append(Recording::from_list(child), Point::new(100, 50));

        let ops: Vec<_> = out.iter().cloned().collect();
        assert_eq!(ops[0], Primitive::PushClip(Rect::new(100, 50, 10, 10)));
        assert_eq!(out.paint_rect(7), Some(Rect::new(101, 52, 3, 4)));
        assert_eq!(out.fills_with(Color::BLACK), vec![Rect::new(100, 50, 5, 5)]);
        assert_eq!(ops[3], Primitive::PopClip);
    }

    #[test]
    fn test_append_at_origin_keeps_ops() {
        let mut child = DisplayList::new();
        child.add_paint(Rect::new(1, 1, 1, 1), 1);
        let mut out = DisplayList::new();
        out.add_paint(Rect::ZERO, 0);
        out.append(Recording::from_list(child), Point::ORIGIN);
        assert_eq!(out.paint_ids(), vec![0, 1]);
        assert_eq!(out.paint_rect(1), Some(Rect::new(1, 1, 1, 1)));
    }
}
