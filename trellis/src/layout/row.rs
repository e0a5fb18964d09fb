//! Row - Horizontal layout container.
//!
//! Children flow left to right. Rows with the same weights line up as grid
//! rows: flexible cells get identical widths in every row.

use crate::primitives::Size;

use super::child::{FlexChild, Widget};
use super::constraints::Constraints;
use super::context::LayoutContext;
use super::flex::Flex;
use super::length::{Alignment, CrossAxisAlignment};

/// A horizontal layout container (children flow left to right).
pub struct Row<'w> {
    flex: Flex<'w>,
}

impl Default for Row<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'w> Row<'w> {
    pub fn new() -> Self {
        Self { flex: Flex::row() }
    }

    /// Build a row from cells and their weights. Cells without a weight
    /// are rigid.
    pub fn with_weights<W>(weights: &[f32], cells: impl IntoIterator<Item = W>) -> Self
    where
        W: Widget + 'w,
    {
        let mut row = Self::new();
        for cell in cells {
            row = row.push(cell);
        }
        row.weights(weights)
    }

    /// Add a child at its natural width.
    pub fn push(mut self, widget: impl Widget + 'w) -> Self {
        self.flex = self.flex.push(FlexChild::rigid(widget));
        self
    }

    /// Add a child that takes a `weight` share of the leftover width.
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
        cx.enter("Row");
        let size = self.flex.layout(cx, constraints);
        cx.exit();
        size
    }
}

impl Widget for Row<'_> {
    fn layout(&mut self, cx: &mut LayoutContext<'_>, constraints: Constraints) -> Size {
        Row::layout(self, cx, constraints)
    }
}
