//! Playback screen: the grid on the left, legend and statistics on the right.
//!
//! [`render`] is a pure function of the grid and a playback snapshot;
//! [`animate`] drives it frame by frame through the terminal driver.

use std::io;
use std::time::Duration;

use blindpath_core::{Grid, Position};
use blindpath_crossterm::{AttrMask, Canvas, Cell, Color, CrosstermDriver, Key, Style};
use blindpath_search::Trace;
use blindpath_search::playback::{self, CellKind, Snapshot, Status};

use crate::colors;

/// Screen columns per grid cell.
const CELL_W: u16 = 3;
const BOARD_X: u16 = 1;
const BOARD_Y: u16 = 2;
const PANEL_GAP: u16 = 3;
const PANEL_W: u16 = 34;
const LEGEND_Y: u16 = 0;
const STATS_Y: u16 = 12;
const MIN_HEIGHT: u16 = 21;

/// Canvas dimensions needed for `grid`, or `None` when the board does not
/// fit in terminal coordinates.
pub fn screen_size(grid: &Grid) -> Option<(u16, u16)> {
    let cols = u64::try_from(grid.cols()).ok()?;
    let rows = u64::try_from(grid.rows()).ok()?;
    let w = u64::from(BOARD_X) + cols * u64::from(CELL_W) + u64::from(PANEL_GAP + PANEL_W);
    let h = (u64::from(BOARD_Y) + rows + 1).max(u64::from(MIN_HEIGHT));
    Some((u16::try_from(w).ok()?, u16::try_from(h).ok()?))
}

/// Top-left screen cell of `p`. Only valid for grids [`screen_size`] accepts.
fn cell_origin(p: Position) -> (u16, u16) {
    (BOARD_X + p.col as u16 * CELL_W, BOARD_Y + p.row as u16)
}

fn title_suffix(status: Status) -> &'static str {
    match status {
        Status::Searching => "  searching\u{2026}",
        Status::Found => "  \u{2714} DONE",
        Status::NotFound => "  \u{2716} NO PATH",
    }
}

/// Background, label and label colour for a grid cell.
fn cell_look(kind: CellKind, path_len: usize) -> (Color, String, Color) {
    match kind {
        CellKind::Wall => (colors::WALL, " \u{25a0} ".into(), colors::WALL_LABEL),
        CellKind::Start => (colors::START, " S ".into(), colors::WHITE),
        CellKind::Goal => (colors::GOAL, " T ".into(), colors::WHITE),
        CellKind::Path(i) => {
            let label = if i > 0 && i + 1 < path_len {
                format!("{i:^3}").chars().take(CELL_W as usize).collect()
            } else {
                "   ".into()
            };
            (colors::PATH, label, colors::DARK_LABEL)
        }
        CellKind::Frontier => (colors::FRONTIER, " F ".into(), colors::DARK_LABEL),
        CellKind::Visited => (colors::VISITED, " \u{b7} ".into(), colors::VISITED_LABEL),
        CellKind::Empty => (colors::BG, "   ".into(), colors::BG),
    }
}

/// Draw one frame into `canvas`, which should be at least [`screen_size`].
/// A grid too large for the screen leaves the canvas blank.
pub fn render(canvas: &mut Canvas, grid: &Grid, name: &str, snap: &Snapshot<'_>) {
    canvas.clear();
    let Some((width, _)) = screen_size(grid) else {
        return;
    };

    let title = Style::default()
        .with_fg(colors::WHITE)
        .with_attrs(AttrMask::BOLD);
    canvas.text(BOARD_X, 0, &format!("{name}{}", title_suffix(snap.status)), title);

    for p in grid.positions() {
        let (x, y) = cell_origin(p);
        let (bg, label, fg) = cell_look(snap.cell(grid, p), snap.path.len());
        let mut style = Style::default().with_bg(bg).with_fg(fg);
        if matches!(snap.cell(grid, p), CellKind::Start | CellKind::Goal) {
            style = style.with_attrs(AttrMask::BOLD);
        }
        canvas.text(x, y, &label, style);
        if snap.is_current(p) {
            let mark = style.with_fg(colors::CURRENT).with_attrs(AttrMask::BOLD);
            canvas.set(x, y, Cell { ch: '[', style: mark });
            canvas.set(x + CELL_W - 1, y, Cell { ch: ']', style: mark });
        }
    }

    let px = width - PANEL_W;
    let panel = Cell::default().with_style(Style::default().with_bg(colors::PANEL_BG));
    canvas.fill(px, 0, PANEL_W, canvas.height(), panel);
    draw_legend(canvas, px);
    draw_stats(canvas, px, name, snap);
}

fn panel_text(canvas: &mut Canvas, x: u16, y: u16, text: &str, fg: Color, bold: bool) {
    let mut style = Style::default().with_bg(colors::PANEL_BG).with_fg(fg);
    if bold {
        style = style.with_attrs(AttrMask::BOLD);
    }
    canvas.text(x, y, text, style);
}

fn centered(canvas: &mut Canvas, px: u16, y: u16, text: &str, fg: Color) {
    let len = text.chars().count() as u16;
    let x = px + PANEL_W.saturating_sub(len) / 2;
    panel_text(canvas, x, y, text, fg, true);
}

fn header(canvas: &mut Canvas, px: u16, y: u16, text: &str) {
    let len = text.chars().count() as u16;
    let x = px + PANEL_W.saturating_sub(len) / 2;
    let style = Style::default()
        .with_bg(colors::PANEL_BG)
        .with_fg(colors::WHITE)
        .with_attrs(AttrMask::BOLD | AttrMask::UNDERLINE);
    canvas.text(x, y, text, style);
}

fn draw_legend(canvas: &mut Canvas, px: u16) {
    header(canvas, px, LEGEND_Y, "LEGEND");
    let items = [
        (colors::START, 'S', "Start node"),
        (colors::GOAL, 'T', "Target / Goal"),
        (colors::WALL, '\u{25a0}', "Static wall"),
        (colors::FRONTIER, 'F', "Frontier (queue/stack)"),
        (colors::VISITED, '\u{b7}', "Explored node"),
        (colors::PATH, '\u{2605}', "Final path"),
    ];
    for (i, (color, sym, desc)) in items.into_iter().enumerate() {
        let y = LEGEND_Y + 2 + i as u16;
        let swatch = Style::default()
            .with_bg(color)
            .with_fg(colors::WHITE)
            .with_attrs(AttrMask::BOLD);
        canvas.text(px + 2, y, &format!(" {sym} "), swatch);
        panel_text(canvas, px + 7, y, desc, colors::PANEL_TEXT, false);
    }
    centered(canvas, px, LEGEND_Y + 9, "Move order:", colors::PANEL_HINT);
    centered(
        canvas,
        px,
        LEGEND_Y + 10,
        "\u{2191}  \u{2192}  \u{2193}  \u{2198}  \u{2190}  \u{2196}",
        colors::PANEL_HINT,
    );
}

/// Label/value rows of the statistics panel.
pub fn stats_rows(name: &str, snap: &Snapshot<'_>) -> [(&'static str, String); 6] {
    let found = match snap.status {
        Status::Found => "YES  \u{2714}",
        Status::NotFound => "NO  \u{2716}",
        Status::Searching => "Searching\u{2026}",
    };
    let path_len = snap
        .path_length()
        .map_or_else(|| "\u{2014}".to_string(), |n| n.to_string());
    [
        ("Algorithm:", name.to_string()),
        ("Step:", format!("{} / {}", snap.step_number, snap.step_count)),
        ("Nodes explored:", snap.nodes_explored().to_string()),
        ("Frontier size:", snap.frontier_size().to_string()),
        ("Path found:", found.to_string()),
        ("Path length:", path_len),
    ]
}

fn draw_stats(canvas: &mut Canvas, px: u16, name: &str, snap: &Snapshot<'_>) {
    header(canvas, px, STATS_Y, "STATISTICS");
    for (i, (label, value)) in stats_rows(name, snap).iter().enumerate() {
        let y = STATS_Y + 2 + i as u16;
        panel_text(canvas, px + 2, y, label, colors::PANEL_LABEL, true);
        let color = if value.contains("YES") {
            colors::YES
        } else if value.contains("NO") {
            colors::NO
        } else {
            colors::VALUE
        };
        let len = value.chars().count() as u16;
        let vx = (px + PANEL_W).saturating_sub(2 + len);
        panel_text(canvas, vx, y, value, color, true);
    }
}

/// Play `trace` in the terminal, one frame per `interval`.
///
/// `q` or `Esc` stops playback, space pauses, and the arrow keys step while
/// paused. The final frame is held for the playback's hold frames.
///
/// A grid too large to draw is rejected with [`io::ErrorKind::InvalidInput`]
/// before the terminal is touched.
pub fn animate(grid: &Grid, name: &str, trace: &Trace, interval: Duration) -> io::Result<()> {
    let Some(size) = screen_size(grid) else {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "a {}x{} grid is too large to draw in a terminal",
                grid.rows(),
                grid.cols()
            ),
        ));
    };
    let mut driver = CrosstermDriver::new();
    driver.init()?;
    let result = play(&mut driver, size, grid, name, trace, interval);
    driver.close();
    result
}

fn play(
    driver: &mut CrosstermDriver,
    (w, h): (u16, u16),
    grid: &Grid,
    name: &str,
    trace: &Trace,
    interval: Duration,
) -> io::Result<()> {
    let (tw, th) = driver.size()?;
    if tw < w || th < h {
        log::warn!("terminal is {tw}x{th}, playback needs {w}x{h}");
    }
    let total = playback::frame_count(trace);
    let mut canvas = Canvas::new(w, h);
    // Zero-sized so the first frame is drawn in full.
    let mut prev = Canvas::new(0, 0);
    let mut frame = 0;
    let mut paused = false;

    while frame < total {
        let snap = playback::snapshot(frame, trace);
        render(&mut canvas, grid, name, &snap);
        driver.flush(&canvas.diff(&prev))?;
        prev.clone_from(&canvas);

        match driver.poll_key(interval)? {
            Some(Key::Char('q') | Key::Escape) => {
                log::debug!("playback stopped at frame {frame}/{total}");
                break;
            }
            Some(Key::Char(' ')) => paused = !paused,
            Some(Key::ArrowRight) if paused => frame = (frame + 1).min(total - 1),
            Some(Key::ArrowLeft) if paused => frame = frame.saturating_sub(1),
            _ if !paused => frame += 1,
            _ => {}
        }
    }
    Ok(())
}
