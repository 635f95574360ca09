use tiny_skia::{FillRule, LineCap, LineJoin, PathBuilder, Stroke, Transform};

use crate::paint::{Color, Paint};
use crate::scene::shapes::{CircleCmd, PathCmd, PathVerb, RoundedRectCmd, TextCmd};
use crate::scene::{Border, DrawCmd, DrawList};
use crate::text::FontSystem;

use super::{RasterError, Surface};

/// Rasterizes the draw list in paint order onto a fresh transparent surface.
///
/// Every shape is filled first and stroked second from the same path object,
/// so stroked outlines sit exactly on the filled geometry with no seams.
pub fn rasterize(
    list: &mut DrawList,
    fonts: &FontSystem,
    width: u32,
    height: u32,
) -> Result<Surface, RasterError> {
    let mut surface = Surface::new(width, height)?;

    for item in list.iter_in_paint_order() {
        match &item.cmd {
            DrawCmd::RoundedRect(cmd) => draw_rounded_rect(&mut surface, cmd),
            DrawCmd::Circle(cmd) => draw_circle(&mut surface, cmd),
            DrawCmd::Path(cmd) => draw_path(&mut surface, cmd),
            DrawCmd::Text(cmd) => draw_text(&mut surface, fonts, cmd),
        }
    }

    log::trace!(
        "rasterized {} draw commands onto {}x{} surface",
        list.items().len(),
        width,
        height
    );
    Ok(surface)
}

fn to_skia_color(color: Color) -> tiny_skia::Color {
    let (r, g, b, a) = color.to_straight();
    tiny_skia::Color::from_rgba(r, g, b, a).unwrap_or(tiny_skia::Color::TRANSPARENT)
}

fn solid_paint(paint: &Paint) -> tiny_skia::Paint<'static> {
    let Paint::Solid(color) = paint;
    let mut p = tiny_skia::Paint::default();
    p.set_color(to_skia_color(*color));
    p.anti_alias = true;
    p
}

/// Round joins and caps, matching the hand-drawn line style of the source art.
fn stroke_for(border: &Border) -> Stroke {
    Stroke {
        width: border.width,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Stroke::default()
    }
}

fn fill_and_stroke(
    surface: &mut Surface,
    path: Option<tiny_skia::Path>,
    paint: &Paint,
    border: Option<Border>,
) {
    let Some(path) = path else {
        // Degenerate geometry (zero-size rect, empty verb list): nothing to draw.
        return;
    };

    surface.pixmap.fill_path(
        &path,
        &solid_paint(paint),
        FillRule::Winding,
        Transform::identity(),
        None,
    );

    if let Some(border) = border {
        let mut p = tiny_skia::Paint::default();
        p.set_color(to_skia_color(border.color));
        p.anti_alias = true;
        surface.pixmap.stroke_path(
            &path,
            &p,
            &stroke_for(&border),
            Transform::identity(),
            None,
        );
    }
}

fn draw_rounded_rect(surface: &mut Surface, cmd: &RoundedRectCmd) {
    let r = cmd.rect.normalized();
    let (x, y) = (r.origin.x, r.origin.y);
    let (w, h) = (r.size.x, r.size.y);
    if w <= 0.0 || h <= 0.0 {
        return;
    }

    let limit = w.min(h) * 0.5;
    let radii = cmd.radii.clamped(limit);
    let (tl, tr, br, bl) = (radii.top_left, radii.top_right, radii.bottom_right, radii.bottom_left);

    // Corner arcs approximated with quadratic curves, the same construction
    // the canvas `arcTo` round-rect produces.
    let mut pb = PathBuilder::new();
    pb.move_to(x + tl, y);
    pb.line_to(x + w - tr, y);
    pb.quad_to(x + w, y, x + w, y + tr);
    pb.line_to(x + w, y + h - br);
    pb.quad_to(x + w, y + h, x + w - br, y + h);
    pb.line_to(x + bl, y + h);
    pb.quad_to(x, y + h, x, y + h - bl);
    pb.line_to(x, y + tl);
    pb.quad_to(x, y, x + tl, y);
    pb.close();

    fill_and_stroke(surface, pb.finish(), &cmd.paint, cmd.border);
}

fn draw_circle(surface: &mut Surface, cmd: &CircleCmd) {
    if cmd.radius <= 0.0 {
        return;
    }
    let mut pb = PathBuilder::new();
    pb.push_circle(cmd.center.x, cmd.center.y, cmd.radius);
    fill_and_stroke(surface, pb.finish(), &cmd.paint, cmd.border);
}

fn draw_path(surface: &mut Surface, cmd: &PathCmd) {
    let mut pb = PathBuilder::new();
    for verb in &cmd.verbs {
        match *verb {
            PathVerb::MoveTo(p) => pb.move_to(p.x, p.y),
            PathVerb::LineTo(p) => pb.line_to(p.x, p.y),
            PathVerb::QuadTo(c, p) => pb.quad_to(c.x, c.y, p.x, p.y),
            PathVerb::Close => pb.close(),
        }
    }
    fill_and_stroke(surface, pb.finish(), &cmd.paint, cmd.border);
}

fn draw_text(surface: &mut Surface, fonts: &FontSystem, cmd: &TextCmd) {
    use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

    let Some(font) = fonts.get(cmd.font) else {
        log::warn!("text command references unknown font {:?}", cmd.font);
        return;
    };

    let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
    layout.reset(&LayoutSettings {
        x: cmd.origin.x,
        y: cmd.origin.y,
        ..LayoutSettings::default()
    });
    layout.append(&[font], &TextStyle::new(&cmd.text, cmd.size, 0));

    let (tr, tg, tb, ta) = cmd.color.to_straight();
    for glyph in layout.glyphs() {
        if glyph.width == 0 || glyph.height == 0 {
            continue;
        }
        let (metrics, coverage) = font.rasterize_indexed(glyph.key.glyph_index, cmd.size);
        blend_glyph(
            surface,
            glyph.x as i32,
            glyph.y as i32,
            metrics.width,
            metrics.height,
            &coverage,
            (tr, tg, tb, ta),
        );
    }
}

/// Source-over blend of 8-bit glyph coverage, in premultiplied space.
fn blend_glyph(
    surface: &mut Surface,
    left: i32,
    top: i32,
    gw: usize,
    gh: usize,
    coverage: &[u8],
    (tr, tg, tb, ta): (f32, f32, f32, f32),
) {
    let sw = surface.width() as i32;
    let sh = surface.height() as i32;
    let pixels = surface.pixmap.pixels_mut();

    for gy in 0..gh as i32 {
        let py = top + gy;
        if py < 0 || py >= sh {
            continue;
        }
        for gx in 0..gw as i32 {
            let px = left + gx;
            if px < 0 || px >= sw {
                continue;
            }

            let cov = coverage[(gy as usize) * gw + gx as usize];
            if cov == 0 {
                continue;
            }

            let a = (cov as f32 / 255.0) * ta;
            let idx = (py * sw + px) as usize;
            let dst = pixels[idx];

            let inv = 1.0 - a;
            let out_r = tr * a + dst.red() as f32 / 255.0 * inv;
            let out_g = tg * a + dst.green() as f32 / 255.0 * inv;
            let out_b = tb * a + dst.blue() as f32 / 255.0 * inv;
            let out_a = a + dst.alpha() as f32 / 255.0 * inv;

            let quant = |v: f32| (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8;
            // Premultiplied output can never exceed its alpha after clamping,
            // so the checked constructor only rejects rounding artifacts.
            if let Some(c) = tiny_skia::PremultipliedColorU8::from_rgba(
                quant(out_r).min(quant(out_a)),
                quant(out_g).min(quant(out_a)),
                quant(out_b).min(quant(out_a)),
                quant(out_a),
            ) {
                pixels[idx] = c;
            }
        }
    }
}
