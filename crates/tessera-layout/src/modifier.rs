//! Layout modifiers: single-child layouts that wrap a measurable.
//!
//! A modifier measures its child once, decides its own size and where the
//! child sits inside it. Wrapping a child in a modifier yields another
//! [`Measurable`], so modifiers chain.

use tessera_core::{Constraints, IntOffset, IntSize, LayoutResult};

use crate::baseline::FirstBaselineToTop;
use crate::measure::{Measurable, MeasuredChild};
use crate::padding::Padding;

/// Result of running a modifier over its child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModifiedLayout {
    /// Size of the modifier's own box
    pub size: IntSize,
    /// The wrapped child's measurement
    pub child: MeasuredChild,
    /// Child position inside the modifier's box
    pub child_offset: IntOffset,
    /// First baseline of the modified box, if the child has one
    pub first_baseline: Option<i32>,
}

impl ModifiedLayout {
    /// The modified box as seen by its own parent.
    pub fn measured(&self) -> MeasuredChild {
        MeasuredChild {
            width: self.size.width,
            height: self.size.height,
            first_baseline: self.first_baseline,
        }
    }
}

pub trait LayoutModifier {
    fn layout<M: Measurable + ?Sized>(
        &self,
        child: &M,
        constraints: Constraints,
    ) -> LayoutResult<ModifiedLayout>;
}

/// A measurable wrapped in a modifier.
#[derive(Debug, Clone)]
pub struct Modified<M, L> {
    child: M,
    modifier: L,
}

impl<M: Measurable, L: LayoutModifier> Modified<M, L> {
    pub fn new(child: M, modifier: L) -> Self {
        Self { child, modifier }
    }

    /// Run the modifier, keeping the child's placement.
    pub fn layout(&self, constraints: Constraints) -> LayoutResult<ModifiedLayout> {
        self.modifier.layout(&self.child, constraints)
    }
}

impl<M: Measurable, L: LayoutModifier> Measurable for Modified<M, L> {
    fn measure(&self, constraints: Constraints) -> LayoutResult<MeasuredChild> {
        self.layout(constraints).map(|layout| layout.measured())
    }
}

/// Chaining helpers for any measurable.
pub trait MeasurableExt: Measurable + Sized {
    fn then<L: LayoutModifier>(self, modifier: L) -> Modified<Self, L> {
        Modified::new(self, modifier)
    }

    fn padding(self, padding: Padding) -> Modified<Self, Padding> {
        self.then(padding)
    }

    fn first_baseline_to_top(self, distance: i32) -> Modified<Self, FirstBaselineToTop> {
        self.then(FirstBaselineToTop::new(distance))
    }
}

impl<M: Measurable> MeasurableExt for M {}
