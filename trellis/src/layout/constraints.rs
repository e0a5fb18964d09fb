//! Layout constraints for constraint-based layout.
//!
//! Constraints flow down the widget tree, specifying the min/max bounds
//! that a widget can occupy. Every layout call takes constraints and returns
//! a size inside them: `layout(constraints) -> Size`.

use std::fmt;

use crate::primitives::{Axis, Size};

/// Stand-in for an unbounded extent. Large enough that no real content
/// reaches it, small enough that sums of a few of them cannot overflow.
pub const INFINITE: i32 = 1_000_000;

/// Constraints passed down to children during layout.
///
/// Invariant: `0 <= min <= max` componentwise. Constructors clamp instead of
/// failing, so layout code can feed them arbitrary arithmetic results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraints {
    pub min: Size,
    pub max: Size,
}

impl Constraints {
    /// Unbounded constraints (zero min, infinite max).
    pub const UNBOUNDED: Self = Self {
        min: Size::ZERO,
        max: Size::new(INFINITE, INFINITE),
    };

    /// Create constraints, clamping so that `0 <= min <= max`.
    #[inline]
    pub fn new(min: Size, max: Size) -> Self {
        let max = Size::new(max.width.max(0), max.height.max(0));
        let min = Size::new(
            min.width.clamp(0, max.width),
            min.height.clamp(0, max.height),
        );
        Self { min, max }
    }

    /// Tight constraints (exact size required).
    #[inline]
    pub fn tight(size: Size) -> Self {
        Self::new(size, size)
    }

    /// Loose constraints with maximum bounds.
    #[inline]
    pub fn loose(max: Size) -> Self {
        Self::new(Size::ZERO, max)
    }

    /// Same maximum, zero minimum.
    #[inline]
    pub fn loosen(self) -> Self {
        Self {
            min: Size::ZERO,
            max: self.max,
        }
    }

    /// Probe constraints for measuring natural size along `axis`:
    /// zero min and infinite max on that axis, cross bounds unchanged.
    #[inline]
    pub fn unbounded_major(self, axis: Axis) -> Self {
        self.with_major(axis, 0, INFINITE)
    }

    /// Replace the bounds along `axis`, keeping the cross bounds.
    #[inline]
    pub fn with_major(self, axis: Axis, min: i32, max: i32) -> Self {
        let cross_min = axis.cross_of(self.min);
        let cross_max = axis.cross_of(self.max);
        Self::new(axis.size(min, cross_min), axis.size(max, cross_max))
    }

    /// Replace the bounds across `axis`, keeping the major bounds.
    #[inline]
    pub fn with_cross(self, axis: Axis, min: i32, max: i32) -> Self {
        self.with_major(axis.cross(), min, max)
    }

    /// Pin the major extent to exactly `size`.
    #[inline]
    pub fn tighten_major(self, axis: Axis, size: i32) -> Self {
        self.with_major(axis, size, size)
    }

    /// Shrink both bounds along `axis` by `amount` pixels.
    #[inline]
    pub fn deflate(self, axis: Axis, amount: i32) -> Self {
        let min = (self.major_min(axis) - amount).max(0);
        let max = (self.major_max(axis) - amount).max(0);
        self.with_major(axis, min, max)
    }

    #[inline]
    pub fn major_min(&self, axis: Axis) -> i32 {
        axis.main(self.min)
    }

    #[inline]
    pub fn major_max(&self, axis: Axis) -> i32 {
        axis.main(self.max)
    }

    #[inline]
    pub fn cross_min(&self, axis: Axis) -> i32 {
        axis.cross_of(self.min)
    }

    #[inline]
    pub fn cross_max(&self, axis: Axis) -> i32 {
        axis.cross_of(self.max)
    }

    /// Constrain a size to these bounds.
    #[inline]
    pub fn constrain(&self, size: Size) -> Size {
        Size {
            width: size.width.clamp(self.min.width, self.max.width),
            height: size.height.clamp(self.min.height, self.max.height),
        }
    }

    /// Check if a size satisfies these constraints.
    #[inline]
    pub fn is_satisfied_by(&self, size: Size) -> bool {
        size.width >= self.min.width
            && size.width <= self.max.width
            && size.height >= self.min.height
            && size.height <= self.max.height
    }

    #[inline]
    pub fn has_bounded_width(&self) -> bool {
        self.max.width < INFINITE
    }

    #[inline]
    pub fn has_bounded_height(&self) -> bool {
        self.max.height < INFINITE
    }

    /// Whether these are tight constraints (min == max).
    #[inline]
    pub fn is_tight(&self) -> bool {
        self.min == self.max
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

impl fmt::Display for Constraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn bound(v: i32) -> String {
            if v >= INFINITE {
                "inf".to_string()
            } else {
                v.to_string()
            }
        }
        write!(
            f,
            "{{w:{}-{}, h:{}-{}}}",
            self.min.width,
            bound(self.max.width),
            self.min.height,
            bound(self.max.height)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tight_constraints() {
        let c = Constraints::tight(Size::new(100, 50));
        assert!(c.is_tight());
        assert_eq!(c.min, Size::new(100, 50));
        assert_eq!(c.max, Size::new(100, 50));
    }

    #[test]
    fn test_new_clamps_min_to_max() {
        let c = Constraints::new(Size::new(300, -5), Size::new(200, 40));
        assert_eq!(c.min, Size::new(200, 0));
        assert_eq!(c.max, Size::new(200, 40));

        let c = Constraints::new(Size::new(10, 10), Size::new(-1, -1));
        assert_eq!(c.min, Size::ZERO);
        assert_eq!(c.max, Size::ZERO);
    }

    #[test]
    fn test_constrain() {
        let c = Constraints::loose(Size::new(100, 50));
        assert_eq!(c.constrain(Size::new(50, 25)), Size::new(50, 25));
        assert_eq!(c.constrain(Size::new(200, 100)), Size::new(100, 50));
        assert!(c.is_satisfied_by(Size::new(100, 0)));
        assert!(!c.is_satisfied_by(Size::new(101, 0)));
    }

    #[test]
    fn test_unbounded_major_keeps_cross() {
        let c = Constraints::new(Size::new(20, 10), Size::new(200, 100));
        let probe = c.unbounded_major(Axis::Horizontal);
        assert_eq!(probe.min, Size::new(0, 10));
        assert_eq!(probe.max, Size::new(INFINITE, 100));
        assert!(!probe.has_bounded_width());
        assert!(probe.has_bounded_height());
    }

    #[test]
    fn test_tighten_and_deflate() {
        let c = Constraints::loose(Size::new(200, 100));
        let t = c.tighten_major(Axis::Vertical, 30);
        assert_eq!(t.min.height, 30);
        assert_eq!(t.max.height, 30);
        assert_eq!(t.max.width, 200);

        let d = c.deflate(Axis::Horizontal, 10);
        assert_eq!(d.max, Size::new(190, 100));
        let d = c.deflate(Axis::Horizontal, 500);
        assert_eq!(d.max.width, 0);
    }

    #[test]
    fn test_display() {
        let c = Constraints::loose(Size::new(100, 50)).unbounded_major(Axis::Vertical);
        assert_eq!(c.to_string(), "{w:0-100, h:0-inf}");
    }
}
