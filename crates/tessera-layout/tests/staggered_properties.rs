//! Property tests for the staggered grid and baseline placement.

use proptest::prelude::*;

use tessera_core::{Constraints, IntSize, InvariantError, LayoutError, LayoutResult};
use tessera_layout::{
    staggered_layout, FixedBox, Measurable, MeasurableExt, MeasurePass, MeasuredChild,
    Placement, StaggeredGrid,
};

fn child_sizes() -> impl Strategy<Value = Vec<(i32, i32)>> {
    prop::collection::vec((0i32..200, 0i32..200), 0..40)
}

fn boxes(sizes: &[(i32, i32)]) -> Vec<FixedBox> {
    sizes.iter().map(|&(w, h)| FixedBox::new(w, h)).collect()
}

proptest! {
    #[test]
    fn layout_is_deterministic(sizes in child_sizes(), rows in 1usize..8) {
        let children = boxes(&sizes);
        let constraints = Constraints::loose(10_000, 10_000);
        let first = staggered_layout(&children, constraints, rows).unwrap();
        let second = staggered_layout(&children, constraints, rows).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn children_assigned_by_position(sizes in child_sizes(), rows in 1usize..8) {
        let children = boxes(&sizes);
        let constraints = Constraints::loose(10_000, 10_000);
        let result = staggered_layout(&children, constraints, rows).unwrap();
        for (i, placement) in result.placements.iter().enumerate() {
            prop_assert_eq!(placement.index, i);
            prop_assert_eq!(placement.bucket, i % rows);
        }
    }

    #[test]
    fn size_matches_rows(sizes in child_sizes(), rows in 1usize..8) {
        let children = boxes(&sizes);
        let constraints = Constraints::loose(10_000, 10_000);
        let result = staggered_layout(&children, constraints, rows).unwrap();

        let mut widths = vec![0; rows];
        let mut heights = vec![0; rows];
        for (i, &(w, h)) in sizes.iter().enumerate() {
            widths[i % rows] += w;
            heights[i % rows] = heights[i % rows].max(h);
        }
        let expected_width = widths.iter().copied().max().unwrap_or(0).min(10_000);
        let expected_height = heights.iter().sum::<i32>().min(10_000);
        prop_assert_eq!(result.size, IntSize::new(expected_width, expected_height));
    }

    #[test]
    fn size_stays_within_constraints(
        sizes in child_sizes(),
        rows in 1usize..8,
        min_w in 0i32..100,
        extra_w in 0i32..300,
        min_h in 0i32..100,
        extra_h in 0i32..300,
    ) {
        let children = boxes(&sizes);
        let constraints =
            Constraints::new(min_w, min_w + extra_w, min_h, min_h + extra_h).unwrap();
        let result = staggered_layout(&children, constraints, rows).unwrap();
        prop_assert!(result.size.width >= constraints.min_width);
        prop_assert!(result.size.width <= constraints.max_width);
        prop_assert!(result.size.height >= constraints.min_height);
        prop_assert!(result.size.height <= constraints.max_height);
    }

    #[test]
    fn rows_do_not_overlap(sizes in child_sizes(), rows in 1usize..8) {
        let children = boxes(&sizes);
        let constraints = Constraints::loose(10_000, 10_000);
        let result = staggered_layout(&children, constraints, rows).unwrap();
        // Within a row, each child starts where the previous one ended
        let mut cursor = vec![0; rows];
        for placement in &result.placements {
            prop_assert_eq!(placement.x, cursor[placement.bucket]);
            cursor[placement.bucket] += sizes[placement.index].0;
        }
    }
}

#[test]
fn seven_children_three_rows() {
    let children = boxes(&[(1, 1); 7]);
    let result = staggered_layout(&children, Constraints::loose(100, 100), 3).unwrap();
    let buckets: Vec<usize> = result.placements.iter().map(|p| p.bucket).collect();
    assert_eq!(buckets, vec![0, 1, 2, 0, 1, 2, 0]);
}

#[test]
fn empty_input_uses_min_size() {
    let children: Vec<FixedBox> = Vec::new();
    let constraints = Constraints::new(30, 300, 40, 400).unwrap();
    for rows in 1..5 {
        let result = staggered_layout(&children, constraints, rows).unwrap();
        assert_eq!(result.size, IntSize::new(30, 40));
        assert!(result.placements.is_empty());
    }
}

#[test]
fn sink_receives_input_order() {
    let children = boxes(&[(5, 5), (6, 6), (7, 7), (8, 8)]);
    let mut seen = Vec::new();
    let size = StaggeredGrid::new(2)
        .layout_with(
            &children,
            Constraints::loose(100, 100),
            tessera_layout::sink_fn(|p: Placement| seen.push(p.index)),
        )
        .unwrap();
    assert_eq!(seen, vec![0, 1, 2, 3]);
    assert_eq!(size, IntSize::new(14, 15));
}

/// A host child whose own layout measures its single inner child twice.
struct Greedy(FixedBox);

impl Measurable for Greedy {
    fn measure(&self, constraints: Constraints) -> LayoutResult<MeasuredChild> {
        let inner = [self.0];
        let mut pass = MeasurePass::new(&inner);
        pass.measure(0, constraints)?;
        pass.measure(0, constraints)
    }
}

#[test]
fn nested_double_measurement_propagates() {
    let children: Vec<Box<dyn Measurable>> = vec![
        Box::new(FixedBox::new(10, 10)),
        Box::new(Greedy(FixedBox::new(10, 10))),
    ];
    let mut placed: Vec<Placement> = Vec::new();
    let err = StaggeredGrid::new(2)
        .layout_with(&children, Constraints::loose(100, 100), &mut placed)
        .unwrap_err();
    // The index is the inner child's position within `Greedy`, not the grid's
    assert_eq!(
        err,
        LayoutError::InvariantViolation(InvariantError::DoubleMeasurement { index: 0 })
    );
    assert!(placed.is_empty());
}

#[test]
fn baseline_placement() {
    let layout = FixedBox::new(40, 16)
        .with_baseline(12)
        .first_baseline_to_top(32)
        .layout(Constraints::loose(100, 100))
        .unwrap();
    assert_eq!(layout.child_offset.y, 20);
    assert_eq!(layout.size.height, 16 + 20);
}

#[test]
fn huge_row_count_behaves_like_one_row_per_child() {
    let children = boxes(&[(10, 4), (20, 5), (30, 6)]);
    let constraints = Constraints::loose(100, 100);
    let huge = staggered_layout(&children, constraints, usize::MAX).unwrap();
    let exact = staggered_layout(&children, constraints, children.len()).unwrap();
    assert_eq!(huge, exact);
}
