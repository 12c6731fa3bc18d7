//! Value types shared by every layout: constraints, sizes, offsets and units.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, LayoutResult};

/// A layout axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    /// The x axis (widths)
    Horizontal,
    /// The y axis (heights)
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => f.write_str("width"),
            Axis::Vertical => f.write_str("height"),
        }
    }
}

/// Horizontal reading direction used when placing children relative to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LayoutDirection {
    /// Left to right
    #[default]
    Ltr,
    /// Right to left
    Rtl,
}

/// Integer size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IntSize {
    pub width: i32,
    pub height: i32,
}

impl IntSize {
    pub const ZERO: IntSize = IntSize { width: 0, height: 0 };

    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Integer position in pixels, relative to the parent's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IntOffset {
    pub x: i32,
    pub y: i32,
}

impl IntOffset {
    pub const ZERO: IntOffset = IntOffset { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Min/max bounds a parent hands to a child during measurement.
///
/// A max bound equal to [`Constraints::INFINITY`] means the axis is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Constraints {
    pub min_width: i32,
    pub max_width: i32,
    pub min_height: i32,
    pub max_height: i32,
}

impl Default for Constraints {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl Constraints {
    /// Marker for an unbounded max dimension.
    pub const INFINITY: i32 = i32::MAX;

    /// Create validated constraints.
    pub fn new(
        min_width: i32,
        max_width: i32,
        min_height: i32,
        max_height: i32,
    ) -> LayoutResult<Self> {
        let constraints = Self {
            min_width,
            max_width,
            min_height,
            max_height,
        };
        constraints.validate()?;
        Ok(constraints)
    }

    /// Constraints that allow exactly one size.
    pub fn fixed(width: i32, height: i32) -> Self {
        Self {
            min_width: width,
            max_width: width,
            min_height: height,
            max_height: height,
        }
    }

    /// Constraints with zero minimums and the given maximums.
    pub fn loose(max_width: i32, max_height: i32) -> Self {
        Self {
            min_width: 0,
            max_width,
            min_height: 0,
            max_height,
        }
    }

    /// Constraints with zero minimums and no maximums.
    pub fn unbounded() -> Self {
        Self::loose(Self::INFINITY, Self::INFINITY)
    }

    /// Check that every bound is non-negative and `min <= max` on both axes.
    pub fn validate(&self) -> LayoutResult<()> {
        check_axis(Axis::Horizontal, self.min_width, self.max_width)?;
        check_axis(Axis::Vertical, self.min_height, self.max_height)?;
        Ok(())
    }

    pub fn has_bounded_width(&self) -> bool {
        self.max_width != Self::INFINITY
    }

    pub fn has_bounded_height(&self) -> bool {
        self.max_height != Self::INFINITY
    }

    /// Clamp a width into `[min_width, max_width]`.
    pub fn constrain_width(&self, width: i32) -> i32 {
        width.max(self.min_width).min(self.max_width)
    }

    /// Clamp a height into `[min_height, max_height]`.
    pub fn constrain_height(&self, height: i32) -> i32 {
        height.max(self.min_height).min(self.max_height)
    }

    /// Clamp a size into these constraints.
    pub fn constrain(&self, size: IntSize) -> IntSize {
        IntSize::new(
            self.constrain_width(size.width),
            self.constrain_height(size.height),
        )
    }

    /// Grow (or shrink, for negative deltas) both bounds of each axis.
    ///
    /// Results are floored at zero and unbounded maximums stay unbounded.
    pub fn offset(&self, horizontal: i32, vertical: i32) -> Self {
        Self {
            min_width: self.min_width.saturating_add(horizontal).max(0),
            max_width: add_max(self.max_width, horizontal),
            min_height: self.min_height.saturating_add(vertical).max(0),
            max_height: add_max(self.max_height, vertical),
        }
    }
}

fn check_axis(axis: Axis, min: i32, max: i32) -> Result<(), ConfigError> {
    if min < 0 || max < 0 {
        return Err(ConfigError::NegativeConstraint { axis, min, max });
    }
    if min > max {
        return Err(ConfigError::MalformedConstraints { axis, min, max });
    }
    Ok(())
}

fn add_max(max: i32, delta: i32) -> i32 {
    if max == Constraints::INFINITY {
        max
    } else {
        max.saturating_add(delta).max(0)
    }
}

/// Density-independent length.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dp(pub f32);

/// Screen density used to turn [`Dp`] into pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Density {
    /// Pixels per dp
    pub density: f32,
}

impl Default for Density {
    fn default() -> Self {
        Self { density: 1.0 }
    }
}

impl Density {
    pub fn new(density: f32) -> Self {
        Self { density }
    }

    /// Convert to pixels without rounding.
    pub fn to_px(&self, dp: Dp) -> f32 {
        dp.0 * self.density
    }

    /// Convert to whole pixels. Infinite lengths map to [`Constraints::INFINITY`].
    pub fn round_to_px(&self, dp: Dp) -> i32 {
        let px = self.to_px(dp);
        if px.is_infinite() {
            Constraints::INFINITY
        } else {
            px.round() as i32
        }
    }
}
