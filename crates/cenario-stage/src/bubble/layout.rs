use cenario_engine::coords::Rect;
use cenario_engine::text::TextMeasure;

use super::metrics;
use super::style::BubbleStyle;

/// Resolved geometry of one bubble: wrapped lines, the body rect inside the
/// raster, and the raster dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct BubbleLayout {
    /// Wrapped text lines, top to bottom. Never empty; degenerate input
    /// yields a single empty line.
    pub lines: Vec<String>,
    /// Measured width of the speaker name at badge size (0 when absent).
    pub name_width: f32,
    /// Body rect (the rounded rectangle) in raster coordinates.
    pub body: Rect,
    /// Total raster width in pixels.
    pub width: u32,
    /// Total raster height in pixels.
    pub height: u32,
}

/// Greedy word wrap: tokens accumulate into a line while the measured width
/// of `line + " " + token` stays under the wrap width. A single token wider
/// than the wrap width still gets its own line, without hyphenation.
fn wrap_text(text: &str, measure: &dyn TextMeasure) -> Vec<String> {
    let mut tokens = text.split_whitespace();
    let Some(first) = tokens.next() else {
        return vec![String::new()];
    };

    let mut lines = Vec::new();
    let mut current = first.to_owned();

    for token in tokens {
        let candidate = format!("{current} {token}");
        if measure.line_width(&candidate, metrics::FONT_SIZE) < metrics::WRAP_WIDTH {
            current = candidate;
        } else {
            lines.push(current);
            current = token.to_owned();
        }
    }
    lines.push(current);
    lines
}

/// Computes wrapped lines and all derived dimensions for `style`.
///
/// Pure: the only inputs are the style and the measurer, and the measurer
/// must be the same font the raster backend paints with.
pub fn layout(style: &BubbleStyle, measure: &dyn TextMeasure) -> BubbleLayout {
    let lines = wrap_text(&style.text, measure);

    let max_line_width = lines
        .iter()
        .map(|l| measure.line_width(l, metrics::FONT_SIZE))
        .fold(0.0f32, f32::max);

    let body_w = (max_line_width + metrics::PADDING * 2.0).max(metrics::MIN_BUBBLE_WIDTH);
    let body_h = lines.len() as f32 * metrics::LINE_HEIGHT + metrics::PADDING * 2.0;

    let (name_allowance, name_shift, name_width) = if style.has_name() {
        (
            metrics::NAME_ALLOWANCE,
            metrics::NAME_TOP_SHIFT,
            measure.line_width(style.speaker_name.trim(), metrics::NAME_FONT_SIZE),
        )
    } else {
        (0.0, 0.0, 0.0)
    };

    let total_w = body_w + metrics::EXTRA_BUFFER;
    let total_h = body_h + metrics::TAIL_HEIGHT + name_allowance + metrics::EXTRA_BUFFER;

    let body = Rect::new(
        metrics::OUTER_MARGIN,
        metrics::OUTER_MARGIN + name_shift,
        body_w,
        body_h,
    );

    BubbleLayout {
        lines,
        name_width,
        body,
        width: total_w.ceil() as u32,
        height: total_h.ceil() as u32,
    }
}
