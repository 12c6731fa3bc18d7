//! Measurement contracts and the single-measurement guard.
//!
//! Every layout measures each child at most once per pass. [`MeasurePass`]
//! enforces this explicitly instead of trusting the host to do so.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use tessera_core::{ConfigError, Constraints, IntSize, InvariantError, LayoutResult};

/// Result of measuring one child under a set of constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeasuredChild {
    /// Measured width in pixels
    pub width: i32,
    /// Measured height in pixels
    pub height: i32,
    /// Distance from the child's top edge to its first text baseline,
    /// `None` when the child has no baseline
    pub first_baseline: Option<i32>,
}

impl MeasuredChild {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            first_baseline: None,
        }
    }

    pub fn with_baseline(mut self, baseline: i32) -> Self {
        self.first_baseline = Some(baseline);
        self
    }

    pub fn size(&self) -> IntSize {
        IntSize::new(self.width, self.height)
    }
}

/// Something that can report its size under constraints.
///
/// Implementations are expected to be pure: a layout calls `measure` at most
/// once per pass through a [`MeasurePass`].
pub trait Measurable {
    fn measure(&self, constraints: Constraints) -> LayoutResult<MeasuredChild>;
}

impl<T: Measurable + ?Sized> Measurable for &T {
    fn measure(&self, constraints: Constraints) -> LayoutResult<MeasuredChild> {
        (**self).measure(constraints)
    }
}

impl<T: Measurable + ?Sized> Measurable for Box<T> {
    fn measure(&self, constraints: Constraints) -> LayoutResult<MeasuredChild> {
        (**self).measure(constraints)
    }
}

/// A box with a preferred size, clamped into whatever constraints it receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FixedBox {
    pub width: i32,
    pub height: i32,
    pub baseline: Option<i32>,
}

impl FixedBox {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            baseline: None,
        }
    }

    pub fn with_baseline(mut self, baseline: i32) -> Self {
        self.baseline = Some(baseline);
        self
    }
}

impl Measurable for FixedBox {
    fn measure(&self, constraints: Constraints) -> LayoutResult<MeasuredChild> {
        let size = constraints.constrain(IntSize::new(self.width, self.height));
        Ok(MeasuredChild {
            width: size.width,
            height: size.height,
            first_baseline: self.baseline,
        })
    }
}

/// Tracks which children of a layout have been measured during one pass.
pub struct MeasurePass<'a, M> {
    children: &'a [M],
    measured: Vec<Option<MeasuredChild>>,
}

impl<'a, M: Measurable> MeasurePass<'a, M> {
    pub fn new(children: &'a [M]) -> Self {
        Self {
            children,
            measured: vec![None; children.len()],
        }
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Measure child `index`. A second call for the same child fails with
    /// [`InvariantError::DoubleMeasurement`].
    pub fn measure(
        &mut self,
        index: usize,
        constraints: Constraints,
    ) -> LayoutResult<MeasuredChild> {
        let count = self.len();
        let slot = self
            .measured
            .get_mut(index)
            .ok_or(ConfigError::ChildOutOfRange { index, count })?;
        if slot.is_some() {
            return Err(InvariantError::DoubleMeasurement { index }.into());
        }

        let child = self.children[index].measure(constraints)?;
        if child.width < 0 || child.height < 0 {
            return Err(ConfigError::NegativeMeasurement {
                index,
                width: child.width,
                height: child.height,
            }
            .into());
        }

        *slot = Some(child);
        Ok(child)
    }

    /// Measure every child once, in order, under the same constraints.
    pub fn measure_all(&mut self, constraints: Constraints) -> LayoutResult<Vec<MeasuredChild>> {
        (0..self.len())
            .map(|index| self.measure(index, constraints))
            .collect()
    }

    /// Consume the pass, returning every measurement in input order.
    pub fn finish(self) -> LayoutResult<Vec<MeasuredChild>> {
        self.measured
            .into_iter()
            .enumerate()
            .map(|(index, child)| child.ok_or_else(|| InvariantError::Unmeasured { index }.into()))
            .collect()
    }
}

/// Measure a single child exactly once; used by modifiers wrapping one child.
pub(crate) fn measure_single<M: Measurable + ?Sized>(
    child: &M,
    constraints: Constraints,
) -> LayoutResult<MeasuredChild> {
    let children = [child];
    let mut pass = MeasurePass::new(&children);
    pass.measure(0, constraints)
}
