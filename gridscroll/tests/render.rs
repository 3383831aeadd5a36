use gridscroll::{
    Canvas, Color, DrawCommand, DrawList, GridViewport, LineCap, Point, Rect, Rgb,
    ScrollController, ScrollerConfig, ViewportMetrics,
};

fn controller(metrics: ViewportMetrics, config: ScrollerConfig) -> ScrollController<GridViewport> {
    let mut controller = ScrollController::new(GridViewport::new(metrics), config);
    controller.reset();
    controller
}

fn wide() -> ScrollController<GridViewport> {
    controller(
        ViewportMetrics::new(800.0, 600.0)
            .content(2000.0, 1200.0)
            .header(30.0),
        ScrollerConfig::default(),
    )
}

fn draw(c: &ScrollController<GridViewport>) -> Vec<DrawCommand> {
    let mut list = DrawList::new();
    c.draw(&mut list);
    list.into_commands()
}

fn thumb_lines(commands: &[DrawCommand]) -> Vec<&DrawCommand> {
    commands
        .iter()
        .filter(|cmd| matches!(cmd, DrawCommand::Line { style, .. } if style.cap == LineCap::Round))
        .collect()
}

// ============================================================================
// Command order
// ============================================================================

#[test]
fn test_draw_order_with_both_thumbs() {
    let config = ScrollerConfig::default();
    let palette = config.palette;
    let commands = draw(&wide());
    assert_eq!(commands.len(), 6);

    match &commands[0] {
        DrawCommand::Rect { rect, style } => {
            assert_eq!(*rect, Rect::new(0.0, 585.0, 800.0, 15.0));
            assert_eq!(style.fill, palette.fill);
            assert!(style.border.is_some());
        }
        other => panic!("expected horizontal track, got {other:?}"),
    }

    match &commands[1] {
        DrawCommand::Line { points, style } => {
            assert_eq!(points, &vec![Point::new(785.0, 585.0), Point::new(785.0, 600.0)]);
            assert_eq!(style.color, palette.border);
            assert_eq!(style.cap, LineCap::Butt);
        }
        other => panic!("expected boundary line, got {other:?}"),
    }

    match &commands[2] {
        DrawCommand::Line { points, style } => {
            assert_eq!(points, &vec![Point::new(5.0, 592.5), Point::new(313.0, 592.5)]);
            assert_eq!(style.width, 10.0);
            assert_eq!(style.cap, LineCap::Round);
            assert_eq!(style.color, palette.thumb);
        }
        other => panic!("expected horizontal thumb, got {other:?}"),
    }

    match &commands[3] {
        DrawCommand::Rect { rect, style } => {
            assert_eq!(*rect, Rect::new(785.0, 0.0, 15.0, 585.0));
            assert_eq!(style.fill, palette.fill);
        }
        other => panic!("expected vertical track, got {other:?}"),
    }

    match &commands[4] {
        DrawCommand::Rect { rect, style } => {
            assert_eq!(*rect, Rect::new(785.0, 0.0, 15.0, 30.0));
            assert_eq!(style.fill, palette.header_background);
        }
        other => panic!("expected header overlay, got {other:?}"),
    }

    match &commands[5] {
        DrawCommand::Line { points, style } => {
            assert_eq!(points, &vec![Point::new(792.5, 35.0), Point::new(792.5, 291.0)]);
            assert_eq!(style.cap, LineCap::Round);
        }
        other => panic!("expected vertical thumb, got {other:?}"),
    }
}

#[test]
fn test_disabled_axes_draw_tracks_only() {
    let c = controller(
        ViewportMetrics::new(1000.0, 800.0).content(900.0, 700.0),
        ScrollerConfig::default(),
    );
    let commands = draw(&c);
    assert!(thumb_lines(&commands).is_empty());
    assert_eq!(commands.iter().filter(|cmd| cmd.is_rect()).count(), 3);
}

#[test]
fn test_no_border_draws_no_lines_or_outlines() {
    let c = controller(
        ViewportMetrics::new(1000.0, 800.0).content(900.0, 700.0),
        ScrollerConfig::default().border(false),
    );
    let commands = draw(&c);
    assert_eq!(commands.len(), 3);
    for command in &commands {
        match command {
            DrawCommand::Rect { style, .. } => assert!(style.border.is_none()),
            DrawCommand::Line { .. } => panic!("unexpected line"),
        }
    }
}

#[test]
fn test_thumb_follows_scroll_position() {
    let mut c = wide();
    c.update(-600.0, gridscroll::Axis::Vertical);
    let offset = c.vertical().thumb_offset();

    let commands = draw(&c);
    let lines = thumb_lines(&commands);
    match lines[1] {
        DrawCommand::Line { points, .. } => {
            assert_eq!(points[0].y, offset + 5.0 + 30.0);
            assert_eq!(points[1].y - points[0].y, 256.0);
        }
        other => panic!("expected vertical thumb, got {other:?}"),
    }
}

// ============================================================================
// Emphasis
// ============================================================================

#[test]
fn test_hovered_thumb_uses_focus_color() {
    let mut c = wide();
    let palette = c.config().palette;
    c.mouse_move(400.0, 590.0);

    let commands = draw(&c);
    let lines = thumb_lines(&commands);
    let colors: Vec<Color> = lines
        .iter()
        .map(|cmd| match cmd {
            DrawCommand::Line { style, .. } => style.color,
            DrawCommand::Rect { .. } => unreachable!(),
        })
        .collect();
    assert_eq!(colors, vec![palette.thumb_focus, palette.thumb]);
}

#[test]
fn test_dragged_thumb_stays_emphasized_off_track() {
    let mut c = wide();
    let palette = c.config().palette;
    c.mouse_down(790.0, 100.0);
    c.mouse_move(100.0, 150.0);
    assert!(!c.vertical().is_hovered());

    let commands = draw(&c);
    match thumb_lines(&commands)[1] {
        DrawCommand::Line { style, .. } => assert_eq!(style.color, palette.thumb_focus),
        other => panic!("expected vertical thumb, got {other:?}"),
    }

    c.mouse_up();
    let commands = draw(&c);
    match thumb_lines(&commands)[1] {
        DrawCommand::Line { style, .. } => assert_eq!(style.color, palette.thumb),
        other => panic!("expected vertical thumb, got {other:?}"),
    }
}

// ============================================================================
// Rasterized output
// ============================================================================

#[test]
fn test_canvas_snapshot_layers() {
    let c = wide();
    let palette = c.config().palette;
    let mut canvas = Canvas::new(800, 600);
    c.draw(&mut canvas);

    assert_eq!(canvas.get(100, 592), Some(palette.thumb.to_rgb()));
    assert_eq!(canvas.get(600, 592), Some(palette.fill.to_rgb()));
    assert_eq!(canvas.get(792, 10), Some(palette.header_background.to_rgb()));
    assert_eq!(canvas.get(792, 100), Some(palette.thumb.to_rgb()));
    assert_eq!(canvas.get(792, 400), Some(palette.fill.to_rgb()));
    // Grid area is untouched
    assert_eq!(canvas.get(400, 300), Some(Rgb::default()));
}

#[test]
fn test_draw_list_replays_onto_canvas() {
    let c = wide();
    let mut list = DrawList::new();
    c.draw(&mut list);

    let mut direct = Canvas::new(800, 600);
    let mut replayed = Canvas::new(800, 600);
    c.draw(&mut direct);
    list.replay(&mut replayed);

    for (x, y) in [(100, 592), (792, 10), (792, 100), (790, 590)] {
        assert_eq!(direct.get(x, y), replayed.get(x, y));
    }
}
