use cenario_engine::coords::{Rect, Vec2};
use cenario_engine::paint::{Color, Paint};
use cenario_engine::scene::shapes::PathVerb;
use cenario_engine::scene::{Border, DrawList, ZIndex};
use cenario_engine::text::FontId;

use super::layout::BubbleLayout;
use super::metrics;
use super::style::{BubbleStyle, ShapeKind};

/// Gray-700: body text color on the white bubble fill.
const TEXT_COLOR: Color = Color::from_premul(
    0x37 as f32 / 255.0,
    0x41 as f32 / 255.0,
    0x51 as f32 / 255.0,
    1.0,
);

const Z_BODY: ZIndex = ZIndex::new(0);
const Z_TEXT: ZIndex = ZIndex::new(1);
const Z_BADGE: ZIndex = ZIndex::new(2);

/// Horizontal tail attachment on the body's bottom edge, before corner
/// clamping. Strictly increases left → center → right.
pub(crate) fn tail_base_x(style: &BubbleStyle, body: Rect) -> f32 {
    body.origin.x + body.size.x * style.tail.fraction()
}

/// Records the complete bubble (body, tail, text, name badge) as draw
/// commands. Pure: no measurement happens here, everything geometric comes
/// from the precomputed `layout`.
pub fn build(style: &BubbleStyle, layout: &BubbleLayout, font: FontId) -> DrawList {
    let mut list = DrawList::new();
    let body = layout.body;
    let border = Border::new(metrics::BORDER_THICKNESS, style.border_color);

    match style.shape {
        ShapeKind::Thought => push_thought_body(&mut list, style, body, border),
        ShapeKind::Speech => push_speech_body(&mut list, style, body, border),
    }

    push_lines(&mut list, layout, font, body);

    if style.has_name() {
        push_name_badge(&mut list, style, layout, font, body);
    }

    list
}

fn push_thought_body(list: &mut DrawList, style: &BubbleStyle, body: Rect, border: Border) {
    list.push_outlined_rounded_rect(
        Z_BODY,
        body,
        metrics::THOUGHT_RADIUS,
        Color::WHITE,
        border,
    );

    // Two detached circles below the body approximate the trail of thought.
    let trail_x = tail_base_x(style, body);
    let bottom = body.origin.y + body.size.y;

    list.push_circle(
        Z_BODY,
        Vec2::new(trail_x, bottom + metrics::THOUGHT_CIRCLE_BIG_DROP),
        metrics::THOUGHT_CIRCLE_BIG,
        Paint::solid(Color::WHITE),
        Some(border),
    );

    let drift = style.tail.direction() * metrics::THOUGHT_CIRCLE_DRIFT;
    list.push_circle(
        Z_BODY,
        Vec2::new(trail_x + drift, bottom + metrics::THOUGHT_CIRCLE_SMALL_DROP),
        metrics::THOUGHT_CIRCLE_SMALL,
        Paint::solid(Color::WHITE),
        Some(border),
    );
}

/// Body and tail as one continuous closed outline. Filling and stroking the
/// combined path once is what keeps the body/tail junction seamless.
fn push_speech_body(list: &mut DrawList, style: &BubbleStyle, body: Rect, border: Border) {
    let r = metrics::SPEECH_RADIUS;
    let (x, y) = (body.origin.x, body.origin.y);
    let (w, h) = (body.size.x, body.size.y);
    let bottom = y + h;

    // Tip tracks the unclamped anchor; only the base is kept clear of the
    // rounded corners.
    let raw_base = tail_base_x(style, body);
    let tip_x = raw_base + style.tail.direction() * metrics::TAIL_TIP_OFFSET;
    let clearance = r + metrics::TAIL_CORNER_CLEARANCE;
    let base_x = raw_base.clamp(x + clearance, x + w - clearance);

    let tail_left = base_x - metrics::TAIL_HALF_WIDTH;
    let tail_right = base_x + metrics::TAIL_HALF_WIDTH;
    let tail_bottom = bottom + metrics::TAIL_HEIGHT;
    let curve_y = bottom + metrics::TAIL_HEIGHT * metrics::TAIL_CURVE_DEPTH;
    let pull = metrics::TAIL_CURVE_PULL;

    let verbs = vec![
        // Top edge, left corner to right corner.
        PathVerb::MoveTo(Vec2::new(x + r, y)),
        PathVerb::LineTo(Vec2::new(x + w - r, y)),
        PathVerb::QuadTo(Vec2::new(x + w, y), Vec2::new(x + w, y + r)),
        // Right edge down to the bottom-right corner.
        PathVerb::LineTo(Vec2::new(x + w, bottom - r)),
        PathVerb::QuadTo(Vec2::new(x + w, bottom), Vec2::new(x + w - r, bottom)),
        // Bottom edge to the tail's right base.
        PathVerb::LineTo(Vec2::new(tail_right, bottom)),
        // Curved thorn: out to the tip, back to the left base.
        PathVerb::QuadTo(Vec2::new(tail_right - pull, curve_y), Vec2::new(tip_x, tail_bottom)),
        PathVerb::QuadTo(Vec2::new(tail_left + pull, curve_y), Vec2::new(tail_left, bottom)),
        // Rest of the bottom edge and the left side back up.
        PathVerb::LineTo(Vec2::new(x + r, bottom)),
        PathVerb::QuadTo(Vec2::new(x, bottom), Vec2::new(x, bottom - r)),
        PathVerb::LineTo(Vec2::new(x, y + r)),
        PathVerb::QuadTo(Vec2::new(x, y), Vec2::new(x + r, y)),
        PathVerb::Close,
    ];

    list.push_path(Z_BODY, verbs, Paint::solid(Color::WHITE), Some(border));
}

fn push_lines(list: &mut DrawList, layout: &BubbleLayout, font: FontId, body: Rect) {
    for (i, line) in layout.lines.iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        let origin = Vec2::new(
            body.origin.x + metrics::PADDING,
            body.origin.y + metrics::PADDING + i as f32 * metrics::LINE_HEIGHT,
        );
        list.push_text(Z_TEXT, line.clone(), font, metrics::FONT_SIZE, TEXT_COLOR, origin);
    }
}

fn push_name_badge(
    list: &mut DrawList,
    style: &BubbleStyle,
    layout: &BubbleLayout,
    font: FontId,
    body: Rect,
) {
    let badge_w = layout.name_width + metrics::NAME_BADGE_PAD;
    let badge_h = metrics::NAME_BADGE_HEIGHT;
    let badge = Rect::new(
        body.origin.x + metrics::NAME_BADGE_INSET,
        body.origin.y - badge_h * 0.5,
        badge_w,
        badge_h,
    );

    // Badge filled with the bubble's border color; thin white stroke keeps it
    // legible against arbitrary backgrounds.
    list.push_outlined_rounded_rect(
        Z_BADGE,
        badge,
        metrics::NAME_BADGE_RADIUS,
        style.border_color,
        Border::new(metrics::NAME_BADGE_STROKE, Color::WHITE),
    );

    let origin = Vec2::new(
        badge.origin.x + (badge_w - layout.name_width) * 0.5,
        badge.origin.y + (badge_h - metrics::NAME_FONT_SIZE) * 0.5 + 1.0,
    );
    list.push_text(
        Z_BADGE,
        style.speaker_name.trim().to_owned(),
        font,
        metrics::NAME_FONT_SIZE,
        Color::WHITE,
        origin,
    );
}
