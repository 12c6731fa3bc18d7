//! Lay out topic chips in a staggered grid and print where each one lands.
//!
//! Run with: cargo run --example topics
//! Set `RUST_LOG=tessera_layout=trace` to see every placement.

use tessera_core::{Constraints, Density, Dp};
use tessera_layout::{
    Column, FirstBaselineToTop, MeasurableExt, Padding, StaggeredGrid, Text, TextStyle,
};
use tracing_subscriber::EnvFilter;

const TOPICS: &[&str] = &[
    "Arts & Crafts", "Beauty", "Books", "Business", "Comics", "Culinary",
    "Design", "Fashion", "Film", "History", "Maths", "Music", "People", "Philosophy",
    "Religion", "Social sciences", "Technology", "TV", "Writing",
];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let density = Density::new(2.0);
    let style = TextStyle {
        font_size: density.to_px(Dp(14.0)) as f64,
        ..Default::default()
    };

    // Chip: text with 8x4dp inner padding, 8dp outer margin
    let inner = Padding::from_dp(density, Dp(8.0), Dp(4.0), Dp(8.0), Dp(4.0));
    let outer = Padding::all(density.round_to_px(Dp(8.0)));
    let chips: Vec<_> = TOPICS
        .iter()
        .map(|topic| Text::new(*topic).with_style(style).padding(inner).padding(outer))
        .collect();

    // The grid scrolls horizontally, so its width is unbounded
    let constraints = Constraints::loose(Constraints::INFINITY, density.round_to_px(Dp(200.0)));

    match StaggeredGrid::default().layout(&chips, constraints) {
        Ok(layout) => {
            println!("grid {}x{}", layout.size.width, layout.size.height);
            for placement in &layout.placements {
                println!(
                    "  row {} ({:>4}, {:>4})  {}",
                    placement.bucket, placement.x, placement.y, TOPICS[placement.index]
                );
            }
        }
        Err(e) => eprintln!("layout failed: {}", e),
    }

    let greetings = [
        Text::new("Hi there!").then(FirstBaselineToTop::from_dp(density, Dp(32.0))),
        Text::new("Hello again").then(FirstBaselineToTop::from_dp(density, Dp(32.0))),
    ];
    match Column.layout(&greetings, Constraints::loose(400, 400)) {
        Ok(layout) => {
            for placement in &layout.placements {
                println!("text {} at y = {}", placement.index, placement.y);
            }
        }
        Err(e) => eprintln!("column failed: {}", e),
    }
}
