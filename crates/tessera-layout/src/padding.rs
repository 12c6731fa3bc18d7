//! Padding modifier.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use tessera_core::{
    ConfigError, Constraints, Density, Dp, IntOffset, IntSize, LayoutDirection, LayoutResult,
};
use tracing::trace;

use crate::measure::{measure_single, Measurable};
use crate::modifier::{LayoutModifier, ModifiedLayout};

/// Space around a child, in pixels.
///
/// `start` and `end` follow the layout direction when `rtl_aware` is set;
/// otherwise `start` is always the left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Padding {
    pub start: i32,
    pub top: i32,
    pub end: i32,
    pub bottom: i32,
    pub rtl_aware: bool,
    pub direction: LayoutDirection,
}

impl Padding {
    /// Uniform, direction-aware padding.
    pub fn all(value: i32) -> Self {
        Self {
            start: value,
            top: value,
            end: value,
            bottom: value,
            rtl_aware: true,
            direction: LayoutDirection::Ltr,
        }
    }

    /// Same horizontal padding on both sides, same vertical padding top and bottom.
    pub fn symmetric(horizontal: i32, vertical: i32) -> Self {
        Self {
            start: horizontal,
            top: vertical,
            end: horizontal,
            bottom: vertical,
            rtl_aware: true,
            direction: LayoutDirection::Ltr,
        }
    }

    /// Padding from dp values, rounded to whole pixels.
    pub fn from_dp(density: Density, start: Dp, top: Dp, end: Dp, bottom: Dp) -> Self {
        Self {
            start: density.round_to_px(start),
            top: density.round_to_px(top),
            end: density.round_to_px(end),
            bottom: density.round_to_px(bottom),
            rtl_aware: true,
            direction: LayoutDirection::Ltr,
        }
    }

    pub fn with_direction(mut self, direction: LayoutDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_rtl_aware(mut self, rtl_aware: bool) -> Self {
        self.rtl_aware = rtl_aware;
        self
    }

    pub fn horizontal(&self) -> i32 {
        self.start.saturating_add(self.end)
    }

    pub fn vertical(&self) -> i32 {
        self.top.saturating_add(self.bottom)
    }

    fn validate(&self) -> LayoutResult<()> {
        if self.start < 0 || self.top < 0 || self.end < 0 || self.bottom < 0 {
            return Err(ConfigError::NegativePadding {
                start: self.start,
                top: self.top,
                end: self.end,
                bottom: self.bottom,
            }
            .into());
        }
        Ok(())
    }
}

impl LayoutModifier for Padding {
    fn layout<M: Measurable + ?Sized>(
        &self,
        child: &M,
        constraints: Constraints,
    ) -> LayoutResult<ModifiedLayout> {
        self.validate()?;
        constraints.validate()?;

        let horizontal = self.horizontal();
        let vertical = self.vertical();
        let measured = measure_single(child, constraints.offset(-horizontal, -vertical))?;

        let size = IntSize::new(
            constraints.constrain_width(measured.width.saturating_add(horizontal)),
            constraints.constrain_height(measured.height.saturating_add(vertical)),
        );

        let x = if self.rtl_aware && self.direction == LayoutDirection::Rtl {
            size.width - measured.width - self.start
        } else {
            self.start
        };
        trace!(x, y = self.top, width = size.width, height = size.height, "padded child");

        Ok(ModifiedLayout {
            size,
            child: measured,
            child_offset: IntOffset::new(x, self.top),
            first_baseline: measured.first_baseline.map(|b| b.saturating_add(self.top)),
        })
    }
}
