//! Scroll State
//!
//! Everything a scrollable list keeps between frames: the list [`Position`]
//! on the major axis, the pixel offset on the minor axis, and the extents
//! synced from the last layout. Input arrives as [`ScrollEvent`]s and is
//! applied with [`ScrollState::apply`]; the next layout normalizes the
//! result.

use crate::config::ScrollConfig;
use crate::layout::list::Position;
use crate::layout::scrollbar::ScrollbarVisibility;

/// Which scroll axis an event targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollAxis {
    /// The list direction.
    Major,
    /// Perpendicular to the list direction.
    Minor,
}

/// Wheel input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollDelta {
    /// Discrete notches, converted with [`ScrollConfig::line_height_px`].
    Lines(f32),
    /// Smooth scrolling (trackpads).
    Pixels(i32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollEventKind {
    /// Positive scrolls towards the end of the content.
    Wheel(ScrollDelta),
    /// Press on the scrollbar track at this fraction of its length.
    DragStart(f32),
    /// Thumb moved by this fraction of the track length.
    DragMove(f32),
    DragEnd,
}

/// A scroll input event for one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollEvent {
    pub axis: ScrollAxis,
    pub kind: ScrollEventKind,
}

impl ScrollEvent {
    pub fn wheel(axis: ScrollAxis, px: i32) -> Self {
        Self {
            axis,
            kind: ScrollEventKind::Wheel(ScrollDelta::Pixels(px)),
        }
    }

    pub fn lines(axis: ScrollAxis, lines: f32) -> Self {
        Self {
            axis,
            kind: ScrollEventKind::Wheel(ScrollDelta::Lines(lines)),
        }
    }

    pub fn drag_start(axis: ScrollAxis, at: f32) -> Self {
        Self {
            axis,
            kind: ScrollEventKind::DragStart(at),
        }
    }

    pub fn drag_move(axis: ScrollAxis, delta: f32) -> Self {
        Self {
            axis,
            kind: ScrollEventKind::DragMove(delta),
        }
    }

    pub fn drag_end(axis: ScrollAxis) -> Self {
        Self {
            axis,
            kind: ScrollEventKind::DragEnd,
        }
    }
}

/// Scroll state for a single list.
///
/// Owned by the caller and handed to
/// [`ListStyle`](crate::layout::list_style::ListStyle) every frame.
///
/// # Example
/// ```ignore
/// struct Inbox {
///     messages: Vec<Message>,
///     scroll: ScrollState,
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    /// Major-axis position. Mutated by input and normalized by layout.
    pub position: Position,
    minor_offset: i32,
    config: ScrollConfig,

    // Synced from the last layout.
    item_count: usize,
    viewport: i32,
    viewport_minor: i32,
    content_minor: i32,
    visibility: ScrollbarVisibility,

    dragging: Option<ScrollAxis>,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ScrollConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    // =====================================================================
    // Scroll operations
    // =====================================================================

    /// Apply an input event.
    pub fn apply(&mut self, event: ScrollEvent) {
        match event.kind {
            ScrollEventKind::Wheel(ScrollDelta::Pixels(px)) => self.scroll_by(event.axis, px),
            ScrollEventKind::Wheel(ScrollDelta::Lines(lines)) => {
                self.scroll_lines(event.axis, lines)
            }
            ScrollEventKind::DragStart(at) => self.start_drag(event.axis, at),
            ScrollEventKind::DragMove(delta) => self.drag_by(event.axis, delta),
            ScrollEventKind::DragEnd => self.end_drag(),
        }
    }

    /// Scroll by `px` pixels (positive = towards the end).
    pub fn scroll_by(&mut self, axis: ScrollAxis, px: i32) {
        match axis {
            ScrollAxis::Major => {
                self.position.offset = self.position.offset.saturating_add(px);
                if px < 0 {
                    self.position.before_end = true;
                }
            }
            ScrollAxis::Minor => {
                self.minor_offset = self
                    .minor_offset
                    .saturating_add(px)
                    .clamp(0, self.max_minor_offset());
            }
        }
    }

    pub fn scroll_lines(&mut self, axis: ScrollAxis, lines: f32) {
        let px = (lines * self.config.line_height_px as f32).round() as i32;
        self.scroll_by(axis, px);
    }

    /// Press on the track at fraction `at`.
    ///
    /// On (or within the grab tolerance of) the thumb the view stays put;
    /// elsewhere the thumb centre jumps to the press.
    pub fn start_drag(&mut self, axis: ScrollAxis, at: f32) {
        self.dragging = Some(axis);
        let at = at.clamp(0.0, 1.0);
        let (start, end) = self.fractions(axis);
        let tolerance = self.config.grab_tolerance;
        if at >= start - tolerance && at <= end + tolerance {
            return;
        }
        let half = (end - start) / 2.0;
        self.set_start_fraction(axis, (at - half) as f64);
    }

    /// Move the thumb by `delta` track fractions.
    pub fn drag_by(&mut self, axis: ScrollAxis, delta: f32) {
        let delta = delta.clamp(-1.0, 1.0) as f64;
        match axis {
            ScrollAxis::Major => {
                let length = self.position.length as f64;
                let start = self.position.scroll_px(self.item_count);
                self.set_major_px(start + delta * length);
                if delta < 0.0 {
                    self.position.before_end = true;
                }
            }
            ScrollAxis::Minor => {
                let px = self.minor_offset as f64 + delta * self.content_minor as f64;
                self.minor_offset = (px.round() as i32).clamp(0, self.max_minor_offset());
            }
        }
    }

    pub fn end_drag(&mut self) {
        self.dragging = None;
    }

    /// The axis whose thumb is being dragged, if any.
    pub fn dragging(&self) -> Option<ScrollAxis> {
        self.dragging
    }

    fn set_start_fraction(&mut self, axis: ScrollAxis, fraction: f64) {
        let fraction = fraction.clamp(0.0, 1.0);
        match axis {
            ScrollAxis::Major => {
                let px = fraction * self.position.length as f64;
                self.set_major_px(px);
            }
            ScrollAxis::Minor => {
                let px = (fraction * self.content_minor as f64).round() as i32;
                self.minor_offset = px.clamp(0, self.max_minor_offset());
            }
        }
    }

    fn set_major_px(&mut self, px: f64) {
        let max = (self.position.length - self.viewport).max(0) as f64;
        self.position.set_scroll_px(px.clamp(0.0, max), self.item_count);
    }

    fn max_minor_offset(&self) -> i32 {
        (self.content_minor - self.viewport_minor).max(0)
    }

    // =====================================================================
    // Queries
    // =====================================================================

    /// Start and end of the visible window on `axis`, as fractions of the
    /// content.
    pub fn fractions(&self, axis: ScrollAxis) -> (f32, f32) {
        match axis {
            ScrollAxis::Major => self
                .position
                .viewport_fractions(self.item_count, self.viewport),
            ScrollAxis::Minor => {
                if self.content_minor <= 0 {
                    return (0.0, 1.0);
                }
                let content = self.content_minor as f64;
                let start = (self.minor_offset as f64 / content).clamp(0.0, 1.0);
                let end = (start + self.viewport_minor as f64 / content).clamp(0.0, 1.0);
                (start as f32, end as f32)
            }
        }
    }

    /// Pixels scrolled on the minor axis.
    pub fn minor_offset(&self) -> i32 {
        self.minor_offset
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Scrollbars shown in the last frame.
    pub fn visibility(&self) -> ScrollbarVisibility {
        self.visibility
    }

    // =====================================================================
    // Layout sync
    // =====================================================================

    /// Record the extents of the frame just laid out.
    pub fn sync(
        &mut self,
        item_count: usize,
        viewport: i32,
        viewport_minor: i32,
        content_minor: i32,
    ) {
        self.item_count = item_count;
        self.viewport = viewport.max(0);
        self.viewport_minor = viewport_minor.max(0);
        self.content_minor = content_minor.max(0);
        self.minor_offset = self.minor_offset.clamp(0, self.max_minor_offset());
    }

    pub(crate) fn set_visibility(&mut self, visibility: ScrollbarVisibility) {
        if visibility != self.visibility {
            tracing::debug!(
                target: "trellis::layout",
                major = visibility.major,
                minor = visibility.minor,
                "scrollbar visibility changed"
            );
        }
        self.visibility = visibility;
    }
}
