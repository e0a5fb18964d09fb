//! Column - Vertical layout container.
//!
//! Children flow top to bottom. A thin builder over [`Flex`] so call sites
//! read like the layout they describe.

use crate::primitives::Size;

use super::child::{FlexChild, Widget};
use super::constraints::Constraints;
use super::context::LayoutContext;
use super::flex::Flex;
use super::length::{Alignment, CrossAxisAlignment};

/// A vertical layout container (children flow top to bottom).
pub struct Column<'w> {
    flex: Flex<'w>,
}

impl Default for Column<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'w> Column<'w> {
    pub fn new() -> Self {
        Self { flex: Flex::column() }
    }

    /// Add a child at its natural height.
    pub fn push(mut self, widget: impl Widget + 'w) -> Self {
        self.flex = self.flex.push(FlexChild::rigid(widget));
        self
    }

    /// Add a child that takes a `weight` share of the leftover height.
    pub fn push_flex(mut self, weight: f32, widget: impl Widget + 'w) -> Self {
        self.flex = self.flex.push(FlexChild::flexed(weight, widget));
        self
    }

    /// Assign weights to the children added so far, in order.
    pub fn weights(mut self, weights: &[f32]) -> Self {
        self.flex = self.flex.weights(weights);
        self
    }

    /// Set main axis alignment.
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.flex = self.flex.align(alignment);
        self
    }

    /// Set cross axis alignment.
    pub fn cross_align(mut self, alignment: CrossAxisAlignment) -> Self {
        self.flex = self.flex.cross_align(alignment);
        self
    }

    pub fn len(&self) -> usize {
        self.flex.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flex.is_empty()
    }

    pub fn layout(&mut self, cx: &mut LayoutContext<'_>, constraints: Constraints) -> Size {
        cx.enter("Column");
        let size = self.flex.layout(cx, constraints);
        cx.exit();
        size
    }
}

impl Widget for Column<'_> {
    fn layout(&mut self, cx: &mut LayoutContext<'_>, constraints: Constraints) -> Size {
        Column::layout(self, cx, constraints)
    }
}
