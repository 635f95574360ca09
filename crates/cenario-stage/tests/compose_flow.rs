//! End-to-end flow: render a bubble, place it on a stage, manipulate it
//! with gestures, re-edit it in place.

use anyhow::Result;

use cenario_engine::coords::Vec2;
use cenario_engine::paint::Color;
use cenario_stage::bubble::{BubbleRenderer, BubbleStyle, ShapeKind, TailAnchor};
use cenario_stage::gesture::GestureEvent;
use cenario_stage::stage::Stage;

/// Probes the usual system font locations, as the rendering demos do.
fn load_system_font() -> Option<Vec<u8>> {
    [
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    ]
    .iter()
    .find_map(|p| std::fs::read(p).ok())
}

#[test]
fn bubble_lifecycle_on_stage() -> Result<()> {
    cenario_engine::logging::init_logging(Default::default());

    let Some(font) = load_system_font() else {
        // No system font installed; glyph-dependent coverage lives in the
        // unit tests against the fixed-advance measurer.
        return Ok(());
    };
    let renderer = BubbleRenderer::new(&font)?;

    let style = BubbleStyle::new(
        "Olá! Como vai?",
        "Nome",
        Color::from_hex("#FF8FAB"),
        ShapeKind::Speech,
        TailAnchor::Center,
    );
    let raster = renderer.render(&style)?;
    assert!(raster.width > 0 && raster.height > 0);

    let mut stage = Stage::new();
    let id = stage.add_bubble(style.clone(), &raster);
    assert_eq!(stage.selected(), Some(id));

    // Drag the bubble 30 right, 15 down.
    stage.handle_event(&GestureEvent::down(Vec2::new(10.0, 10.0)));
    stage.handle_event(&GestureEvent::moved(Vec2::new(40.0, 25.0)));
    stage.handle_event(&GestureEvent::up());

    let t = stage.items().get(id).unwrap().transform;
    assert_eq!((t.x, t.y), (30.0, 15.0));

    // Re-edit: new style and raster, same id / transform / stack order.
    let edited = BubbleStyle {
        shape: ShapeKind::Thought,
        ..style
    };
    let new_raster = renderer.render(&edited)?;
    let old_order = stage.items().get(id).unwrap().stack_order;
    stage.edit_bubble(id, edited.clone(), &new_raster);

    let item = stage.items().get(id).unwrap();
    assert_eq!(item.id, id);
    assert_eq!(item.stack_order, old_order);
    assert_eq!(item.transform, t);
    assert_eq!(item.bubble_style.as_ref(), Some(&edited));
    assert_eq!(item.image.height, new_raster.height);

    Ok(())
}
