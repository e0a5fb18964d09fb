//! Shared flex distribution logic for Column, Row and the list chrome.
//!
//! Children are laid out in two groups. Rigid children go first, in order,
//! each measured against whatever extent is still left. Flexible children
//! then split the remainder by weight. Every child's output is recorded and
//! replayed at its final offset once all sizes are known.

use crate::primitives::{Axis, Size};

use super::child::{FlexChild, Widget, is_flex_weight};
use super::constraints::{Constraints, INFINITE};
use super::context::{FlexAllocation, LayoutContext};
use super::length::{Alignment, CrossAxisAlignment};

/// Splits a fixed extent among weighted children in whole pixels.
///
/// Each share is rounded after adding the error left over from the previous
/// share, so the rounded shares always add up to the full extent instead of
/// drifting by up to half a pixel per child.
#[derive(Debug, Clone, Copy)]
pub struct FlexDistributor {
    flex_total: i32,
    total_weight: f64,
    fraction: f64,
}

impl FlexDistributor {
    pub fn new(flex_total: i32, total_weight: f64) -> Self {
        Self {
            flex_total: flex_total.max(0),
            total_weight,
            fraction: 0.0,
        }
    }

    /// Size for the next child of `weight`, capped at `remaining`.
    pub fn next(&mut self, weight: f32, remaining: i32) -> i32 {
        if remaining <= 0 || self.total_weight <= 0.0 || !is_flex_weight(weight) {
            return 0;
        }
        let ideal = self.flex_total as f64 * weight as f64 / self.total_weight;
        let running = ideal + self.fraction;
        let size = running.round();
        self.fraction = running - size;
        (size as i32).clamp(0, remaining)
    }
}

/// Distribute `total` among children by weight.
///
/// Non-positive and non-finite weights get 0. When at least one weight is
/// positive and finite the result sums to exactly `max(total, 0)`.
pub fn distribute_flex(weights: &[f32], total: i32) -> Vec<i32> {
    let total_weight: f64 = weights
        .iter()
        .filter(|w| is_flex_weight(**w))
        .map(|w| *w as f64)
        .sum();
    let mut remaining = total.max(0);
    let mut dist = FlexDistributor::new(remaining, total_weight);
    weights
        .iter()
        .map(|&w| {
            let size = dist.next(w, remaining);
            remaining -= size;
            size
        })
        .collect()
}

/// A flex container along one axis.
pub struct Flex<'w> {
    axis: Axis,
    alignment: Alignment,
    cross_alignment: CrossAxisAlignment,
    children: Vec<FlexChild<'w>>,
}

impl<'w> Flex<'w> {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            alignment: Alignment::Start,
            cross_alignment: CrossAxisAlignment::Start,
            children: Vec::new(),
        }
    }

    /// Vertical flex (children flow top to bottom).
    pub fn column() -> Self {
        Self::new(Axis::Vertical)
    }

    /// Horizontal flex (children flow left to right).
    pub fn row() -> Self {
        Self::new(Axis::Horizontal)
    }

    /// Set main axis alignment.
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set cross axis alignment.
    pub fn cross_align(mut self, alignment: CrossAxisAlignment) -> Self {
        self.cross_alignment = alignment;
        self
    }

    pub fn push(mut self, child: FlexChild<'w>) -> Self {
        self.children.push(child);
        self
    }

    /// Add a child sized from its own content.
    pub fn rigid(self, widget: impl Widget + 'w) -> Self {
        self.push(FlexChild::rigid(widget))
    }

    /// Add a child that takes a `weight` share of the leftover space.
    pub fn flexed(self, weight: f32, widget: impl Widget + 'w) -> Self {
        self.push(FlexChild::flexed(weight, widget))
    }

    /// Assign weights positionally. Children past the end of `weights`
    /// become rigid.
    pub fn weights(mut self, weights: &[f32]) -> Self {
        for (i, child) in self.children.iter_mut().enumerate() {
            child.set_weight(weights.get(i).copied().unwrap_or(0.0));
        }
        self
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Constraints for a child along `self.axis` with the given major bounds.
    fn child_constraints(&self, constraints: Constraints, min: i32, max: i32) -> Constraints {
        let cross_max = constraints.cross_max(self.axis);
        let cross_min = match self.cross_alignment {
            CrossAxisAlignment::Stretch if cross_max < INFINITE => cross_max,
            _ => 0,
        };
        constraints
            .with_major(self.axis, min, max)
            .with_cross(self.axis, cross_min, cross_max)
    }

    /// Lay out all children and composite their output.
    ///
    /// Never fails: children that exceed their constraints are placed at
    /// their offsets anyway and may draw past the container's extent.
    pub fn layout(&mut self, cx: &mut LayoutContext<'_>, constraints: Constraints) -> Size {
        cx.enter("Flex");
        let axis = self.axis;
        let main_max = constraints.major_max(axis);
        let main_min = constraints.major_min(axis);

        let mut slots = cx.take_flex_scratch();
        slots.extend(self.children.iter().map(|c| FlexAllocation {
            is_flex: c.is_flex(),
            ..FlexAllocation::default()
        }));

        let mut remaining = main_max;
        let mut used = 0i32;

        // Rigid children, each against what the previous ones left.
        for i in 0..self.children.len() {
            if slots[i].is_flex {
                continue;
            }
            let cs = self.child_constraints(constraints, 0, remaining);
            let child = &mut self.children[i];
            let (size, recording) = cx.record(|cx| child.widget.layout(cx, cs));
            let main = axis.main(size);
            used = used.saturating_add(main);
            remaining = (remaining - main).max(0);
            slots[i].size = size;
            slots[i].recording = Some(recording);
        }
        cx.warn_oversized(used, main_max, axis_name(axis));

        // Flexible children split the rest. An unbounded extent has no rest
        // to split, so they get nothing.
        let flex_total = if main_max >= INFINITE { 0 } else { remaining };
        let total_weight: f64 = self
            .children
            .iter()
            .filter(|c| c.is_flex())
            .map(|c| c.weight as f64)
            .sum();
        if total_weight > 0.0 && main_max >= INFINITE {
            tracing::debug!(
                target: "trellis::layout",
                axis = axis_name(axis),
                "flexible children in an unbounded flex get no space"
            );
        }
        let mut dist = FlexDistributor::new(flex_total, total_weight);
        for i in 0..self.children.len() {
            if !slots[i].is_flex {
                continue;
            }
            let share = dist.next(self.children[i].weight, remaining);
            let cs = self.child_constraints(constraints, share, share);
            let child = &mut self.children[i];
            let (size, recording) = cx.record(|cx| child.widget.layout(cx, cs));
            let main = axis.main(size);
            used = used.saturating_add(main);
            remaining = (remaining - main).max(0);
            slots[i].size = size;
            slots[i].recording = Some(recording);
        }

        let cross = slots
            .iter()
            .map(|s| axis.cross_of(s.size))
            .max()
            .unwrap_or(0)
            .max(constraints.cross_min(axis));

        // Composite in original order.
        let space = (main_min - used).max(0);
        let count = slots.len();
        let mut offset = 0i32;
        for (i, slot) in slots.iter_mut().enumerate() {
            let lead = self.alignment.space_before(space, i, count);
            let cross_offset = self.cross_alignment.offset(cross, axis.cross_of(slot.size));
            if let Some(recording) = slot.recording.take() {
                cx.replay(recording, axis.point(offset + lead, cross_offset));
            }
            offset = offset.saturating_add(axis.main(slot.size));
        }
        cx.return_flex_scratch(slots);

        let size = constraints.constrain(axis.size(used.max(main_min), cross));
        cx.log_layout(constraints, size);
        cx.exit();
        size
    }
}

impl Widget for Flex<'_> {
    fn layout(&mut self, cx: &mut LayoutContext<'_>, constraints: Constraints) -> Size {
        Flex::layout(self, cx, constraints)
    }
}

fn axis_name(axis: Axis) -> &'static str {
    match axis {
        Axis::Vertical => "height",
        Axis::Horizontal => "width",
    }
}

// =========================================================================
// Tests
// =========================================================================
