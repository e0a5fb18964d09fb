//! Widgets and flex children.
//!
//! A widget is anything that can be measured and drawn in one call:
//! `layout(cx, constraints) -> Size`, drawing into `cx` as a side effect.
//! Containers capture that drawing with [`LayoutContext::record`] and place
//! it afterwards.

use crate::primitives::{Rect, Size};

use super::constraints::Constraints;
use super::context::LayoutContext;

/// The measure-and-draw contract every child exposes.
///
/// Implementations must return a size inside `constraints` and must be
/// deterministic: the same constraints give the same size.
pub trait Widget {
    fn layout(&mut self, cx: &mut LayoutContext<'_>, constraints: Constraints) -> Size;
}

impl<F> Widget for F
where
    F: FnMut(&mut LayoutContext<'_>, Constraints) -> Size,
{
    #[inline]
    fn layout(&mut self, cx: &mut LayoutContext<'_>, constraints: Constraints) -> Size {
        self(cx, constraints)
    }
}

/// Pin a closure's signature so it is usable as a [`Widget`].
///
/// ```ignore
/// let label = widget(|cx, cs| {
///     cx.primitives_mut().add_paint(Rect::new(0, 0, 40, 12), LABEL);
///     cs.constrain(Size::new(40, 12))
/// });
/// ```
#[inline]
pub fn widget<F>(f: F) -> F
where
    F: FnMut(&mut LayoutContext<'_>, Constraints) -> Size,
{
    f
}

/// A leaf with a fixed natural size that paints one host op.
///
/// Stands in for labels, icons and other content whose intrinsic size the
/// host already knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub natural: Size,
    pub id: u64,
}

impl Block {
    pub fn new(id: u64, width: i32, height: i32) -> Self {
        Self {
            natural: Size::new(width, height),
            id,
        }
    }
}

impl Widget for Block {
    fn layout(&mut self, cx: &mut LayoutContext<'_>, constraints: Constraints) -> Size {
        let size = constraints.constrain(self.natural);
        cx.primitives_mut()
            .add_paint(Rect::new(0, 0, size.width, size.height), self.id);
        size
    }
}

/// Empty space. Takes the minimum it is offered, or a fixed natural size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spacer {
    pub natural: Size,
}

impl Spacer {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            natural: Size::new(width, height),
        }
    }
}

impl Widget for Spacer {
    fn layout(&mut self, _cx: &mut LayoutContext<'_>, constraints: Constraints) -> Size {
        constraints.constrain(self.natural)
    }
}

/// A child of a flex container: a widget plus its weight.
///
/// Weight `<= 0` (or NaN, or infinite) makes the child rigid: it is sized
/// from its own content. A positive weight makes it flexible: it gets that share of the
/// space left after all rigid children.
pub struct FlexChild<'w> {
    pub(crate) weight: f32,
    pub(crate) widget: Box<dyn Widget + 'w>,
}

impl<'w> FlexChild<'w> {
    pub fn rigid(widget: impl Widget + 'w) -> Self {
        Self {
            weight: 0.0,
            widget: Box::new(widget),
        }
    }

    pub fn flexed(weight: f32, widget: impl Widget + 'w) -> Self {
        Self {
            weight,
            widget: Box::new(widget),
        }
    }

    #[inline]
    pub fn weight(&self) -> f32 {
        self.weight
    }

    /// Whether this child takes a share of flexible space.
    #[inline]
    pub fn is_flex(&self) -> bool {
        is_flex_weight(self.weight)
    }

    pub(crate) fn set_weight(&mut self, weight: f32) {
        self.weight = weight;
    }
}

/// Whether `weight` asks for a share of flexible space.
#[inline]
pub(crate) fn is_flex_weight(weight: f32) -> bool {
    weight.is_finite() && weight > 0.0
}

impl std::fmt::Debug for FlexChild<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlexChild")
            .field("weight", &self.weight)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display_list::DisplayList;

    #[test]
    fn test_block_clamps_to_constraints() {
        let mut list = DisplayList::new();
        let mut cx = LayoutContext::new(&mut list);
        let mut b = Block::new(3, 50, 20);
        let size = b.layout(&mut cx, Constraints::loose(Size::new(30, 100)));
        assert_eq!(size, Size::new(30, 20));
        assert_eq!(list.paint_rect(3), Some(Rect::new(0, 0, 30, 20)));
    }

    #[test]
    fn test_closure_widget() {
        let mut list = DisplayList::new();
        let mut cx = LayoutContext::new(&mut list);
        let mut w = widget(|_cx, cs| cs.max);
        let size = w.layout(&mut cx, Constraints::tight(Size::new(7, 8)));
        assert_eq!(size, Size::new(7, 8));
    }

    #[test]
    fn test_weight_classification() {
        assert!(!FlexChild::rigid(Spacer::default()).is_flex());
        assert!(FlexChild::flexed(0.5, Spacer::default()).is_flex());
        assert!(!FlexChild::flexed(-1.0, Spacer::default()).is_flex());
        assert!(!FlexChild::flexed(f32::NAN, Spacer::default()).is_flex());
        assert!(!FlexChild::flexed(f32::INFINITY, Spacer::default()).is_flex());
    }
}
