//! Placement output and sinks.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use tessera_core::IntOffset;

/// Where a child ends up, relative to its container's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    /// Index of the child in the input sequence
    pub index: usize,
    /// Bucket (row) the child was assigned to; 0 for single-track layouts
    pub bucket: usize,
    pub x: i32,
    pub y: i32,
}

impl Placement {
    pub fn offset(&self) -> IntOffset {
        IntOffset::new(self.x, self.y)
    }
}

/// Receives placements as a layout positions its children.
///
/// Layouts call `place` once per child, in input order, and only after every
/// child has been measured successfully.
pub trait PlacementSink {
    fn place(&mut self, placement: Placement);
}

impl PlacementSink for Vec<Placement> {
    fn place(&mut self, placement: Placement) {
        self.push(placement);
    }
}

impl<S: PlacementSink + ?Sized> PlacementSink for &mut S {
    fn place(&mut self, placement: Placement) {
        (**self).place(placement);
    }
}

/// Adapter turning a closure into a [`PlacementSink`].
pub struct FnSink<F>(F);

/// Wrap a closure as a placement sink.
pub fn sink_fn<F: FnMut(Placement)>(f: F) -> FnSink<F> {
    FnSink(f)
}

impl<F: FnMut(Placement)> PlacementSink for FnSink<F> {
    fn place(&mut self, placement: Placement) {
        (self.0)(placement);
    }
}
