//! Trellis demo - lays out a scrolling table for a few simulated frames.
//!
//! Usage: `trellis-demo [config.json]`. Set `RUST_LOG=trellis=debug` (or
//! `trace`) to watch the layout decisions.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use trellis::layout::{
    Block, Column, Constraints, Flex, LayoutContext, ListStyle, Row, Spacer, widget,
};
use trellis::{
    DisplayList, Primitive, Rect, ScrollAxis, ScrollEvent, ScrollState, Size, TrellisConfig,
    UiState, Value,
};

const WINDOW: Size = Size::new(640, 480);
const ROWS: usize = 500;
const COLUMN_WEIGHTS: [f32; 3] = [3.0, 1.0, 1.0];

/// Paint ids: row `r`, column `c` -> `r * 10 + c`; chrome above that.
const HEADER_ID: u64 = 1_000_000;
const PROGRESS_ID: u64 = 1_000_001;

fn load_config() -> Result<TrellisConfig> {
    match std::env::args().nth(1) {
        Some(path) => TrellisConfig::from_path(&path)
            .with_context(|| format!("loading config from {path}")),
        None => Ok(TrellisConfig::default()),
    }
}

fn table_row(index: usize) -> Row<'static> {
    let id = index as u64 * 10;
    let height = 18 + (index % 3) as i32 * 4;
    let cells = (0..COLUMN_WEIGHTS.len() as u64).map(move |c| Block::new(id + c, 0, height));
    Row::with_weights(&COLUMN_WEIGHTS, cells)
}

fn frame(config: &TrellisConfig, scroll: &mut ScrollState, ui: &UiState) -> DisplayList {
    let progress = ui
        .read()
        .get("progress")
        .and_then(Value::as_float)
        .unwrap_or(0.0)
        .clamp(0.0, 1.0);

    let mut out = DisplayList::new();
    let mut cx = LayoutContext::new(&mut out);

    let progress_bar = Flex::row()
        .flexed(
            progress as f32,
            widget(|cx, cs| {
                let size = Size::new(cs.min.width, cs.max.height);
                cx.primitives_mut()
                    .add_paint(Rect::new(0, 0, size.width, size.height), PROGRESS_ID);
                size
            }),
        )
        .flexed(1.0 - progress as f32, Spacer::default());

    let table = widget(|cx, cs| {
        ListStyle::from_config(&mut *scroll, config).layout(cx, cs, ROWS, |cx, cs, i| {
            table_row(i).layout(cx, cs)
        })
    });

    Column::new()
        .push(Block::new(HEADER_ID, WINDOW.width, 24))
        .push_flex(1.0, table)
        .push(progress_bar)
        .layout(&mut cx, Constraints::tight(WINDOW));

    out
}

fn summarize(n: usize, out: &DisplayList, scroll: &ScrollState) {
    let fills = out
        .iter()
        .filter(|op| matches!(op, Primitive::Fill { .. }))
        .count();
    let rows: Vec<u64> = out
        .paint_ids()
        .into_iter()
        .filter(|id| *id < HEADER_ID && id % 10 == 0)
        .map(|id| id / 10)
        .collect();
    let (start, end) = scroll.fractions(ScrollAxis::Major);
    tracing::info!(
        frame = n,
        ops = out.len(),
        fills,
        first_row = ?rows.first(),
        last_row = ?rows.last(),
        thumb = %format!("{start:.3}..{end:.3}"),
        "frame laid out"
    );
}

fn main() -> Result<()> {
    // Set up logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = load_config()?;
    tracing::debug!(config = %serde_json::to_string(&config)?, "starting trellis demo");

    let ui = UiState::shared();
    ui.set("progress", 0.0);
    let updater = {
        let ui = Arc::clone(&ui);
        thread::spawn(move || {
            for step in 1..=20 {
                ui.set("progress", step as f64 / 20.0);
                thread::sleep(Duration::from_millis(5));
            }
        })
    };

    let mut scroll = ScrollState::with_config(config.scroll);
    let inputs = [
        None,
        Some(ScrollEvent::lines(ScrollAxis::Major, 3.0)),
        Some(ScrollEvent::wheel(ScrollAxis::Major, 250)),
        Some(ScrollEvent::drag_start(ScrollAxis::Major, 0.5)),
        Some(ScrollEvent::drag_move(ScrollAxis::Major, 0.25)),
        Some(ScrollEvent::drag_end(ScrollAxis::Major)),
        Some(ScrollEvent::wheel(ScrollAxis::Major, -100_000)),
    ];
    for (n, input) in inputs.into_iter().enumerate() {
        if let Some(event) = input {
            tracing::debug!(?event, "input");
            scroll.apply(event);
        }
        let out = frame(&config, &mut scroll, &ui);
        summarize(n, &out, &scroll);
        thread::sleep(Duration::from_millis(10));
    }

    if updater.join().is_err() {
        anyhow::bail!("progress updater panicked");
    }
    tracing::info!(progress = ?ui.get("progress"), "done");
    Ok(())
}
