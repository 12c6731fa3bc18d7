//! Simple vertical stack.
//!
//! Every child is measured under the incoming constraints and stacked top to
//! bottom at `x = 0`. The column takes the full max size it is given.

use tessera_core::{Axis, ConfigError, Constraints, IntSize, LayoutResult};
use tracing::debug;

use crate::measure::{Measurable, MeasurePass};
use crate::placement::{Placement, PlacementSink};

/// Output of a column pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    pub size: IntSize,
    pub placements: Vec<Placement>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Column;

impl Column {
    pub fn layout<M: Measurable>(
        &self,
        children: &[M],
        constraints: Constraints,
    ) -> LayoutResult<ColumnLayout> {
        let mut placements = Vec::with_capacity(children.len());
        let size = self.layout_with(children, constraints, &mut placements)?;
        Ok(ColumnLayout { size, placements })
    }

    pub fn layout_with<M: Measurable, S: PlacementSink>(
        &self,
        children: &[M],
        constraints: Constraints,
        mut sink: S,
    ) -> LayoutResult<IntSize> {
        constraints.validate()?;
        if !constraints.has_bounded_width() {
            return Err(ConfigError::UnboundedConstraint { axis: Axis::Horizontal }.into());
        }
        if !constraints.has_bounded_height() {
            return Err(ConfigError::UnboundedConstraint { axis: Axis::Vertical }.into());
        }

        let mut pass = MeasurePass::new(children);
        let measured = pass.measure_all(constraints)?;

        let size = IntSize::new(constraints.max_width, constraints.max_height);
        debug!(
            children = children.len(),
            width = size.width,
            height = size.height,
            "column measured"
        );

        let mut y = 0i32;
        for (index, child) in measured.iter().enumerate() {
            sink.place(Placement {
                index,
                bucket: 0,
                x: 0,
                y,
            });
            y = y.saturating_add(child.height);
        }

        Ok(size)
    }
}
