//! Text measurement for layout.
//!
//! Provides estimated text metrics so text children can report a size and a
//! first baseline without a font shaper.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use tessera_core::{Constraints, IntSize, LayoutResult};

use crate::measure::{Measurable, MeasuredChild};

/// Text measurement configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TextStyle {
    /// Font size in pixels
    pub font_size: f64,
    /// Line height as a multiplier (e.g., 1.5 = 150%)
    pub line_height: f64,
    /// Letter spacing in pixels
    pub letter_spacing: f64,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 16.0,
            line_height: 1.2,
            letter_spacing: 0.0,
        }
    }
}

/// Measured text metrics.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextMetrics {
    /// Width of the widest line
    pub width: f64,
    /// Height of all lines
    pub height: f64,
    /// First baseline offset from top
    pub baseline: f64,
    /// Number of lines
    pub lines: u32,
}

/// Measure text with the given style.
///
/// Uses character-count estimation. Wraps on whitespace when `max_width` is
/// a positive width.
pub fn measure_text(text: &str, style: &TextStyle, max_width: Option<f64>) -> TextMetrics {
    if text.is_empty() {
        return TextMetrics {
            width: 0.0,
            height: style.font_size * style.line_height,
            baseline: baseline_offset(style),
            lines: 1,
        };
    }

    let avg_char_width = estimate_char_width(style);

    match max_width {
        Some(max_w) if max_w > 0.0 => measure_wrapped_text(text, style, max_w, avg_char_width),
        _ => measure_single_line(text, style, avg_char_width),
    }
}

fn estimate_char_width(style: &TextStyle) -> f64 {
    // Roughly 0.55 em for proportional fonts
    style.font_size * 0.55 + style.letter_spacing
}

fn baseline_offset(style: &TextStyle) -> f64 {
    style.font_size * 0.8
}

fn measure_single_line(text: &str, style: &TextStyle, avg_char_width: f64) -> TextMetrics {
    let char_count = text.chars().count();

    TextMetrics {
        width: char_count as f64 * avg_char_width,
        height: style.font_size * style.line_height,
        baseline: baseline_offset(style),
        lines: 1,
    }
}

fn measure_wrapped_text(
    text: &str,
    style: &TextStyle,
    max_width: f64,
    avg_char_width: f64,
) -> TextMetrics {
    let line_height = style.font_size * style.line_height;
    let space_width = avg_char_width;

    let mut lines: Vec<f64> = Vec::new();
    let mut current_line_width = 0.0;

    for word in text.split_whitespace() {
        let word_width = word.chars().count() as f64 * avg_char_width;

        if current_line_width == 0.0 {
            current_line_width = word_width;
        } else if current_line_width + space_width + word_width <= max_width {
            current_line_width += space_width + word_width;
        } else {
            lines.push(current_line_width);
            current_line_width = word_width;
        }
    }

    if current_line_width > 0.0 {
        lines.push(current_line_width);
    }

    let num_lines = lines.len().max(1) as u32;
    let max_line_width = lines.iter().copied().fold(0.0_f64, f64::max);

    TextMetrics {
        width: max_line_width,
        height: num_lines as f64 * line_height,
        baseline: baseline_offset(style),
        lines: num_lines,
    }
}

/// A text child. Reports its first baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub content: String,
    pub style: TextStyle,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            style: TextStyle::default(),
        }
    }

    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }
}

impl Measurable for Text {
    fn measure(&self, constraints: Constraints) -> LayoutResult<MeasuredChild> {
        let max_width = constraints
            .has_bounded_width()
            .then_some(constraints.max_width as f64);
        let metrics = measure_text(&self.content, &self.style, max_width);

        let size = constraints.constrain(IntSize::new(
            metrics.width.ceil() as i32,
            metrics.height.ceil() as i32,
        ));
        Ok(MeasuredChild {
            width: size.width,
            height: size.height,
            first_baseline: Some(metrics.baseline.round() as i32),
        })
    }
}
