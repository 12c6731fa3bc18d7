//! Staggered grid layout.
//!
//! Children are dealt into a fixed number of rows ("buckets") by input
//! position: child `i` goes to row `i % rows`. Each row is as wide as the sum
//! of its children and as tall as its tallest child; rows stack vertically.
//! The assignment is positional only and does not balance rows by size.

use smallvec::SmallVec;
use tracing::{debug, debug_span, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use tessera_core::{ConfigError, Constraints, IntSize, LayoutResult};

use crate::measure::{Measurable, MeasurePass, MeasuredChild};
use crate::placement::{Placement, PlacementSink};

/// Staggered grid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StaggeredGrid {
    /// Number of rows children are distributed across
    pub rows: usize,
}

impl Default for StaggeredGrid {
    fn default() -> Self {
        Self { rows: 3 }
    }
}

/// One row of a staggered grid after measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bucket {
    pub index: usize,
    /// Sum of the widths of children assigned to this row
    pub accumulated_width: i32,
    /// Height of the tallest child in this row
    pub max_height: i32,
}

/// Output of a staggered grid pass.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StaggeredLayout {
    /// Container size, clamped into the incoming constraints
    pub size: IntSize,
    /// One placement per child, in input order
    pub placements: Vec<Placement>,
    /// Rows that received at least one child, in row order. Rows past the
    /// child count stay empty and are not listed.
    pub buckets: Vec<Bucket>,
}

/// Measured children plus everything needed to place them.
struct Arrangement {
    size: IntSize,
    measured: Vec<MeasuredChild>,
    buckets: Vec<Bucket>,
    row_origins: Vec<i32>,
}

impl StaggeredGrid {
    pub fn new(rows: usize) -> Self {
        Self { rows }
    }

    /// Set the number of rows.
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    /// Check the configuration and constraints before any child is measured.
    pub fn validate(&self, constraints: &Constraints) -> LayoutResult<()> {
        if self.rows == 0 {
            return Err(ConfigError::InvalidBucketCount { count: self.rows }.into());
        }
        constraints.validate()
    }

    /// Measure and place `children`, collecting placements in input order.
    pub fn layout<M: Measurable>(
        &self,
        children: &[M],
        constraints: Constraints,
    ) -> LayoutResult<StaggeredLayout> {
        let arrangement = self.arrange(children, constraints)?;
        let mut placements = Vec::with_capacity(children.len());
        self.place(&arrangement, &mut placements);

        Ok(StaggeredLayout {
            size: arrangement.size,
            placements,
            buckets: arrangement.buckets,
        })
    }

    /// Measure and place `children`, handing each placement to `sink`.
    ///
    /// The sink sees nothing if measurement fails.
    pub fn layout_with<M: Measurable, S: PlacementSink>(
        &self,
        children: &[M],
        constraints: Constraints,
        mut sink: S,
    ) -> LayoutResult<IntSize> {
        let arrangement = self.arrange(children, constraints)?;
        self.place(&arrangement, &mut sink);
        Ok(arrangement.size)
    }

    fn arrange<M: Measurable>(
        &self,
        children: &[M],
        constraints: Constraints,
    ) -> LayoutResult<Arrangement> {
        self.validate(&constraints)?;
        let _span =
            debug_span!("staggered_grid", rows = self.rows, children = children.len()).entered();

        let mut pass = MeasurePass::new(children);
        let measured = pass.measure_all(constraints)?;

        // Rows at or past the child count are empty and add no width or height.
        let occupied = self.rows.min(measured.len());
        let mut buckets: Vec<Bucket> = (0..occupied)
            .map(|index| Bucket {
                index,
                ..Default::default()
            })
            .collect();
        for (index, child) in measured.iter().enumerate() {
            let bucket = &mut buckets[index % self.rows];
            bucket.accumulated_width = bucket.accumulated_width.saturating_add(child.width);
            bucket.max_height = bucket.max_height.max(child.height);
        }

        let widest = buckets
            .iter()
            .map(|b| b.accumulated_width)
            .max()
            .unwrap_or(0);
        let total_height = buckets
            .iter()
            .fold(0i32, |acc, b| acc.saturating_add(b.max_height));
        let size = IntSize::new(
            constraints.constrain_width(widest),
            constraints.constrain_height(total_height),
        );

        let mut row_origins = Vec::with_capacity(occupied);
        let mut y = 0i32;
        for bucket in &buckets {
            row_origins.push(y);
            y = y.saturating_add(bucket.max_height);
        }

        debug!(
            width = size.width,
            height = size.height,
            widest,
            total_height,
            "staggered grid measured"
        );

        Ok(Arrangement {
            size,
            measured,
            buckets,
            row_origins,
        })
    }

    fn place<S: PlacementSink + ?Sized>(&self, arrangement: &Arrangement, sink: &mut S) {
        let mut row_x: SmallVec<[i32; 8]> = SmallVec::from_elem(0, arrangement.buckets.len());

        for (index, child) in arrangement.measured.iter().enumerate() {
            let bucket = index % self.rows;
            let x = row_x[bucket];
            let y = arrangement.row_origins[bucket];
            trace!(index, bucket, x, y, "placing child");
            sink.place(Placement { index, bucket, x, y });
            row_x[bucket] = x.saturating_add(child.width);
        }
    }
}

/// Lay out `children` in a staggered grid with `bucket_count` rows.
pub fn staggered_layout<M: Measurable>(
    children: &[M],
    constraints: Constraints,
    bucket_count: usize,
) -> LayoutResult<StaggeredLayout> {
    StaggeredGrid::new(bucket_count).layout(children, constraints)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::FixedBox;
    use tessera_core::{InvariantError, LayoutError};

    fn boxes(sizes: &[(i32, i32)]) -> Vec<FixedBox> {
        sizes.iter().map(|&(w, h)| FixedBox::new(w, h)).collect()
    }

    #[test]
    fn test_staggered_basic() {
        let children = boxes(&[(10, 5), (20, 8), (30, 4), (40, 6)]);
        let grid = StaggeredGrid::new(2);
        let result = grid.layout(&children, Constraints::loose(1000, 1000)).unwrap();

        // Row 0: children 0 and 2; row 1: children 1 and 3
        assert_eq!(result.buckets[0].accumulated_width, 40);
        assert_eq!(result.buckets[0].max_height, 5);
        assert_eq!(result.buckets[1].accumulated_width, 60);
        assert_eq!(result.buckets[1].max_height, 8);
        assert_eq!(result.size, IntSize::new(60, 13));

        let offsets: Vec<(i32, i32)> = result.placements.iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(offsets, vec![(0, 0), (0, 5), (10, 0), (20, 5)]);
    }

    #[test]
    fn test_staggered_default_rows() {
        assert_eq!(StaggeredGrid::default().rows, 3);
        assert_eq!(StaggeredGrid::default().with_rows(5), StaggeredGrid::new(5));
    }

    #[test]
    fn test_width_is_widest_row() {
        // Three rows with widths 30, 45, 20
        let children = boxes(&[(10, 1), (20, 1), (20, 1), (20, 1), (25, 1)]);
        let result = staggered_layout(&children, Constraints::loose(1000, 1000), 3).unwrap();
        let widths: Vec<i32> = result.buckets.iter().map(|b| b.accumulated_width).collect();
        assert_eq!(widths, vec![30, 45, 20]);
        assert_eq!(result.size.width, 45);
    }

    #[test]
    fn test_height_is_sum_of_row_heights() {
        let children = boxes(&[(1, 10), (1, 25), (1, 15), (1, 3)]);
        let result = staggered_layout(&children, Constraints::loose(1000, 1000), 3).unwrap();
        assert_eq!(result.size.height, 50);
        let origins: Vec<i32> = result
            .placements
            .iter()
            .take(3)
            .map(|p| p.y)
            .collect();
        assert_eq!(origins, vec![0, 10, 35]);
        // Fourth child goes back to row 0, after the first child
        assert_eq!(
            result.placements[3],
            Placement {
                index: 3,
                bucket: 0,
                x: 1,
                y: 0,
            }
        );
    }

    #[test]
    fn test_container_clamped() {
        let children = boxes(&[(10, 10), (10, 10)]);
        let constraints = Constraints::new(50, 80, 0, 15).unwrap();
        let result = staggered_layout(&children, constraints, 2).unwrap();
        assert_eq!(result.size, IntSize::new(50, 15));
    }

    #[test]
    fn test_empty_children() {
        let children: Vec<FixedBox> = Vec::new();
        let constraints = Constraints::new(12, 100, 7, 100).unwrap();
        let result = staggered_layout(&children, constraints, 4).unwrap();
        assert_eq!(result.size, IntSize::new(12, 7));
        assert!(result.placements.is_empty());
        assert!(result.buckets.is_empty());
    }

    #[test]
    fn test_more_rows_than_children() {
        let children = boxes(&[(10, 4)]);
        let result = staggered_layout(&children, Constraints::loose(100, 100), 5).unwrap();
        assert_eq!(result.size, IntSize::new(10, 4));
        assert_eq!(result.buckets.len(), 1);
        assert_eq!(result.placements[0].bucket, 0);
    }

    #[test]
    fn test_huge_row_count() {
        let children = boxes(&[(10, 4), (20, 5)]);
        let result = staggered_layout(&children, Constraints::loose(100, 100), usize::MAX).unwrap();
        assert_eq!(result.size, IntSize::new(20, 9));
        assert_eq!(result.buckets.len(), 2);
        let offsets: Vec<(usize, i32, i32)> =
            result.placements.iter().map(|p| (p.bucket, p.x, p.y)).collect();
        assert_eq!(offsets, vec![(0, 0, 0), (1, 0, 4)]);

        let result = staggered_layout(&children, Constraints::loose(100, 100), 1 << 40).unwrap();
        assert_eq!(result.size, IntSize::new(20, 9));
    }

    #[test]
    fn test_zero_rows_rejected() {
        let children = boxes(&[(10, 4)]);
        let err = staggered_layout(&children, Constraints::loose(100, 100), 0).unwrap_err();
        assert_eq!(
            err,
            LayoutError::InvalidConfiguration(ConfigError::InvalidBucketCount { count: 0 })
        );
    }

    #[test]
    fn test_malformed_constraints_rejected() {
        let children = boxes(&[(10, 4)]);
        let constraints = Constraints {
            min_width: 10,
            max_width: 5,
            min_height: 0,
            max_height: 5,
        };
        let err = staggered_layout(&children, constraints, 2).unwrap_err();
        assert!(err.is_configuration());
    }

    struct Failing;

    impl Measurable for Failing {
        fn measure(&self, _constraints: Constraints) -> LayoutResult<MeasuredChild> {
            Err(InvariantError::MissingBaseline.into())
        }
    }

    #[test]
    fn test_failed_measurement_places_nothing() {
        let children: Vec<Box<dyn Measurable>> =
            vec![Box::new(FixedBox::new(1, 1)), Box::new(Failing)];
        let mut placed: Vec<Placement> = Vec::new();
        let err = StaggeredGrid::new(2)
            .layout_with(&children, Constraints::unbounded(), &mut placed)
            .unwrap_err();
        assert!(err.is_invariant());
        assert!(placed.is_empty());
    }

    struct Negative;

    impl Measurable for Negative {
        fn measure(&self, _constraints: Constraints) -> LayoutResult<MeasuredChild> {
            Ok(MeasuredChild::new(-1, 5))
        }
    }

    #[test]
    fn test_negative_child_size_places_nothing() {
        let children: Vec<Box<dyn Measurable>> = vec![
            Box::new(FixedBox::new(10, 10)),
            Box::new(FixedBox::new(10, 10)),
            Box::new(Negative),
        ];
        let mut placed: Vec<Placement> = Vec::new();
        let err = StaggeredGrid::new(2)
            .layout_with(&children, Constraints::loose(100, 100), &mut placed)
            .unwrap_err();
        assert!(matches!(
            err,
            LayoutError::InvalidConfiguration(ConfigError::NegativeMeasurement { index: 2, .. })
        ));
        assert!(placed.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_grid_config_from_json() {
        let grid: StaggeredGrid = serde_json::from_str("{}").unwrap();
        assert_eq!(grid, StaggeredGrid::default());
        let grid: StaggeredGrid = serde_json::from_str(r#"{"rows": 4}"#).unwrap();
        assert_eq!(grid.rows, 4);
    }
}
