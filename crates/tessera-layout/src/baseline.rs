//! Baseline-relative padding.
//!
//! Positions a child so that its first baseline sits a fixed distance below
//! the top of the modified box, regardless of the child's font metrics.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use tessera_core::{Constraints, Density, Dp, IntOffset, IntSize, InvariantError, LayoutResult};
use tracing::trace;

use crate::measure::{measure_single, Measurable};
use crate::modifier::{LayoutModifier, ModifiedLayout};

/// Place a child so its first baseline is `distance` pixels from the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FirstBaselineToTop {
    pub distance: i32,
}

impl FirstBaselineToTop {
    pub fn new(distance: i32) -> Self {
        Self { distance }
    }

    pub fn from_dp(density: Density, distance: Dp) -> Self {
        Self::new(density.round_to_px(distance))
    }
}

impl LayoutModifier for FirstBaselineToTop {
    fn layout<M: Measurable + ?Sized>(
        &self,
        child: &M,
        constraints: Constraints,
    ) -> LayoutResult<ModifiedLayout> {
        constraints.validate()?;
        let measured = measure_single(child, constraints)?;

        let baseline = measured.first_baseline.ok_or(InvariantError::MissingBaseline)?;
        let y = self.distance.saturating_sub(baseline);
        // A baseline below the requested distance pulls the child up; the box
        // never goes below zero height.
        let height = measured.height.saturating_add(y).max(0);
        trace!(baseline, y, height, "baseline placement");

        Ok(ModifiedLayout {
            size: IntSize::new(measured.width, height),
            child: measured,
            child_offset: IntOffset::new(0, y),
            first_baseline: Some(self.distance),
        })
    }
}
