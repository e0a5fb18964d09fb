//! Scrollbar indicator and two-axis visibility resolution.

use crate::config::ScrollbarConfig;
use crate::primitives::{Axis, Color, Rect, Size};

use super::child::{Spacer, Widget, widget};
use super::constraints::{Constraints, INFINITE};
use super::context::LayoutContext;
use super::flex::Flex;
use super::length::CrossAxisAlignment;

/// Which scrollbars a list shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollbarVisibility {
    pub major: bool,
    pub minor: bool,
}

/// Decide which scrollbars are needed for `content` inside `viewport`.
///
/// A visible bar takes `thickness` from the other axis, which can make that
/// axis overflow in turn. This runs a fixed two passes: major assuming no
/// minor bar, then minor given the major bar, then (only if the minor bar is
/// shown) major again given the minor bar. The minor decision is not
/// revisited, so content sitting exactly on the threshold of both axes can
/// flip between frames.
pub fn resolve_scrollbars(
    axis: Axis,
    content: Size,
    viewport: Size,
    thickness: i32,
) -> ScrollbarVisibility {
    let thickness = thickness.max(0);
    let (content_major, content_minor) = (axis.main(content), axis.cross_of(content));
    let (viewport_major, viewport_minor) = (axis.main(viewport), axis.cross_of(viewport));

    let mut major = content_major > viewport_major;
    let minor = content_minor > viewport_minor - if major { thickness } else { 0 };
    if minor {
        major = content_major > viewport_major - thickness;
    }
    ScrollbarVisibility { major, minor }
}

/// A proportional scrollbar: a track with a thumb covering
/// `[start, end]` of it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scrollbar {
    /// Direction of the track.
    pub axis: Axis,
    pub start: f32,
    pub end: f32,
    pub thickness: i32,
    pub min_thumb: i32,
    pub track_color: Color,
    pub thumb_color: Color,
}

impl Scrollbar {
    pub fn new(axis: Axis, (start, end): (f32, f32)) -> Self {
        Self::from_config(axis, (start, end), &ScrollbarConfig::default())
    }

    pub fn from_config(axis: Axis, (start, end): (f32, f32), config: &ScrollbarConfig) -> Self {
        Self {
            axis,
            start,
            end,
            thickness: config.thickness_px,
            min_thumb: config.min_thumb_px,
            track_color: config.track_color,
            thumb_color: config.thumb_color,
        }
    }

    /// Thumb fractions on a track `track_len` pixels long, widened to at
    /// least `min_thumb` pixels without leaving the track.
    pub fn thumb(&self, track_len: i32) -> (f32, f32) {
        let start = self.start.clamp(0.0, 1.0);
        let end = self.end.clamp(start, 1.0);
        if track_len <= 0 {
            return (start, end);
        }
        let min = (self.min_thumb.max(0) as f32 / track_len as f32).min(1.0);
        let len = end - start;
        if len >= min {
            return (start, end);
        }
        // Keep the thumb at the same relative spot in the shrunken free space.
        let free = 1.0 - len;
        let start = if free > 0.0 { start * (1.0 - min) / free } else { 0.0 };
        (start, (start + min).min(1.0))
    }

    /// Whether `at` (a track fraction) hits the thumb, allowing `tolerance`
    /// on either side.
    pub fn contains_fraction(&self, track_len: i32, at: f32, tolerance: f32) -> bool {
        let (start, end) = self.thumb(track_len);
        at >= start - tolerance && at <= end + tolerance
    }

    pub fn layout(&mut self, cx: &mut LayoutContext<'_>, constraints: Constraints) -> Size {
        cx.enter("Scrollbar");
        let axis = self.axis;
        let mut track_len = constraints.major_max(axis);
        if track_len >= INFINITE {
            track_len = constraints.major_min(axis);
        }
        let size = constraints.constrain(axis.size(track_len, self.thickness));
        let (start, end) = self.thumb(axis.main(size));

        cx.primitives_mut()
            .add_solid_rect(Rect::new(0, 0, size.width, size.height), self.track_color);

        let thumb_color = self.thumb_color;
        let thumb = widget(move |cx, cs| {
            let size = cs.min;
            if size.width > 0 && size.height > 0 {
                cx.primitives_mut()
                    .add_solid_rect(Rect::new(0, 0, size.width, size.height), thumb_color);
            }
            size
        });
        Flex::new(axis)
            .cross_align(CrossAxisAlignment::Stretch)
            .flexed(start, Spacer::default())
            .flexed(end - start, thumb)
            .flexed(1.0 - end, Spacer::default())
            .layout(cx, Constraints::tight(size));

        cx.log_layout(constraints, size);
        cx.exit();
        size
    }
}

impl Widget for Scrollbar {
    fn layout(&mut self, cx: &mut LayoutContext<'_>, constraints: Constraints) -> Size {
        Scrollbar::layout(self, cx, constraints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display_list::DisplayList;

    const T: i32 = 10;

    fn vis(major: bool, minor: bool) -> ScrollbarVisibility {
        ScrollbarVisibility { major, minor }
    }

    #[test]
    fn test_resolve_fits() {
        let v = resolve_scrollbars(Axis::Vertical, Size::new(100, 100), Size::new(100, 100), T);
        assert_eq!(v, vis(false, false));
    }

    #[test]
    fn test_resolve_major_only() {
        let v = resolve_scrollbars(Axis::Vertical, Size::new(80, 300), Size::new(100, 100), T);
        assert_eq!(v, vis(true, false));
    }

    #[test]
    fn test_major_bar_pushes_minor_over() {
        // 95 wide fits in 100, but not in 100 - 10.
        let v = resolve_scrollbars(Axis::Vertical, Size::new(95, 300), Size::new(100, 100), T);
        assert_eq!(v, vis(true, true));
    }

    #[test]
    fn test_minor_bar_pushes_major_over() {
        let v = resolve_scrollbars(Axis::Vertical, Size::new(150, 95), Size::new(100, 100), T);
        assert_eq!(v, vis(true, true));

        let v = resolve_scrollbars(Axis::Vertical, Size::new(150, 50), Size::new(100, 100), T);
        assert_eq!(v, vis(false, true));
    }

    #[test]
    fn test_horizontal_list_axes() {
        // Horizontal list: major is width.
        let v = resolve_scrollbars(Axis::Horizontal, Size::new(300, 50), Size::new(100, 100), T);
        assert_eq!(v, vis(true, false));
    }

    #[test]
    fn test_one_pixel_over_threshold_is_stable() {
        let viewport = Size::new(100, 100);
        let content = Size::new(100, 101);
        let first = resolve_scrollbars(Axis::Vertical, content, viewport, T);
        let second = resolve_scrollbars(Axis::Vertical, content, viewport, T);
        assert_eq!(first, vis(true, true));
        assert_eq!(first, second);
    }

    #[test]
    fn test_scrollbar_draws_track_and_thumb() {
        let mut out = DisplayList::new();
        let mut cx = LayoutContext::new(&mut out);
        let mut bar = Scrollbar::new(Axis::Vertical, (0.25, 0.75));
        let size = bar.layout(&mut cx, Constraints::loose(Size::new(50, 100)));
        assert_eq!(size, Size::new(10, 100));
        let track = bar.track_color;
        let thumb = bar.thumb_color;
        assert_eq!(out.fills_with(track), vec![Rect::new(0, 0, 10, 100)]);
        assert_eq!(out.fills_with(thumb), vec![Rect::new(0, 25, 10, 50)]);
    }

    #[test]
    fn test_thumb_widened_to_minimum() {
        let bar = Scrollbar::new(Axis::Vertical, (0.5, 0.51));
        let (start, end) = bar.thumb(100);
        assert!((end - start - 0.16).abs() < 1e-6);
        assert!(start > 0.4 && end < 0.6);

        let mut out = DisplayList::new();
        let mut cx = LayoutContext::new(&mut out);
        let mut bar = bar;
        bar.layout(&mut cx, Constraints::tight(Size::new(10, 100)));
        let thumb = out.fills_with(bar.thumb_color);
        assert_eq!(thumb.len(), 1);
        assert_eq!(thumb[0].height, 16);
        assert_eq!(thumb[0].y, 42);
    }

    #[test]
    fn test_full_thumb() {
        let bar = Scrollbar::new(Axis::Horizontal, (0.0, 1.0));
        assert_eq!(bar.thumb(100), (0.0, 1.0));
        assert!(bar.contains_fraction(100, 0.5, 0.0));
    }

    #[test]
    fn test_contains_fraction_tolerance() {
        let bar = Scrollbar::new(Axis::Vertical, (0.4, 0.6));
        assert!(bar.contains_fraction(200, 0.39, 0.02));
        assert!(!bar.contains_fraction(200, 0.3, 0.02));
        assert!(!bar.contains_fraction(200, 0.7, 0.02));
    }
}
