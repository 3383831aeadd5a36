//! Replays a scripted thumb drag against an in-memory grid and prints what
//! would be painted. Logs go to `drag.log`.

use std::fs::File;

use gridscroll::{
    Axis, DrawCommand, DrawList, GridViewport, PointerEvent, ScrollController, ScrollerConfig,
    ViewportMetrics,
};
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_file = File::create("drag.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)?;

    let config = match std::env::args().nth(1) {
        Some(path) => ScrollerConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => ScrollerConfig::default(),
    };

    let metrics = ViewportMetrics::new(800.0, 600.0)
        .content(2000.0, 1200.0)
        .header(30.0);
    let mut scroller = ScrollController::new(GridViewport::new(metrics), config);
    scroller.reset();

    let script = [
        PointerEvent::Move { x: 50.0, y: 590.0 },
        PointerEvent::Down { x: 50.0, y: 590.0 },
        PointerEvent::Move { x: 150.0, y: 590.0 },
        PointerEvent::Move { x: 400.0, y: 590.0 },
        PointerEvent::Move { x: 900.0, y: 590.0 },
        PointerEvent::Up,
        PointerEvent::Down { x: 790.0, y: 60.0 },
        PointerEvent::Move { x: 790.0, y: 160.0 },
        PointerEvent::Up,
    ];

    for event in script {
        scroller.handle_pointer(event);
        println!(
            "{:<40} scroll=({:>9.2}, {:>9.2}) thumbs=({:>5}, {:>5})",
            format!("{event:?}"),
            scroller.host().scroll_x,
            scroller.host().scroll_y,
            scroller.horizontal().thumb_offset(),
            scroller.vertical().thumb_offset(),
        );
    }

    scroller.update(-120.0, Axis::Vertical);
    println!(
        "after update(-120, {}): scroll_y={}",
        Axis::Vertical,
        scroller.host().scroll_y
    );

    let mut list = DrawList::new();
    scroller.draw(&mut list);
    for command in list.commands() {
        match command {
            DrawCommand::Rect { rect, style } => println!("rect {rect:?} fill={}", style.fill),
            DrawCommand::Line { points, style } => {
                println!("line {points:?} color={} width={}", style.color, style.width)
            }
        }
    }

    Ok(())
}
