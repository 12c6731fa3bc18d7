//! Measure and place layouts for Tessera.
//!
//! Every layout follows the same two-step pass:
//!
//! 1. **Measure**: each child is measured exactly once under the incoming
//!    constraints, guarded by [`MeasurePass`]
//! 2. **Place**: the container size is derived from the measurements and each
//!    child's offset is handed to a [`PlacementSink`] in input order
//!
//! Layouts are pure functions of their children, constraints and
//! configuration; nothing is cached between passes.
//!
//! # Example
//!
//! ```
//! use tessera_core::Constraints;
//! use tessera_layout::{FixedBox, StaggeredGrid};
//!
//! let chips: Vec<FixedBox> = (1..=7).map(|i| FixedBox::new(10 * i, 20)).collect();
//! let layout = StaggeredGrid::new(3)
//!     .layout(&chips, Constraints::loose(400, 400))
//!     .unwrap();
//!
//! assert_eq!(layout.placements.len(), 7);
//! assert_eq!(layout.size.height, 60);
//! ```

mod baseline;
mod column;
mod measure;
mod modifier;
mod padding;
mod placement;
mod staggered;
mod text;

pub use baseline::FirstBaselineToTop;
pub use column::{Column, ColumnLayout};
pub use measure::{FixedBox, Measurable, MeasurePass, MeasuredChild};
pub use modifier::{LayoutModifier, MeasurableExt, Modified, ModifiedLayout};
pub use padding::Padding;
pub use placement::{sink_fn, FnSink, Placement, PlacementSink};
pub use staggered::{staggered_layout, Bucket, StaggeredGrid, StaggeredLayout};
pub use text::{measure_text, Text, TextMetrics, TextStyle};
