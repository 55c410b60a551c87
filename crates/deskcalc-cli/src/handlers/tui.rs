//! Interactive terminal calculator

use std::io::{self, Write};

use crossterm::{
    cursor::Show,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use deskcalc::tui::{layout, render, CalculatorApp};
use ratatui::{backend::Backend, backend::CrosstermBackend, layout::Rect, Terminal};
use tracing::{debug, info};

use crate::error::CliResult;

/// Runs the terminal calculator until the user quits.
///
/// The terminal is restored on every exit path once raw mode is on. An error
/// from the session wins over an error from restoring.
pub fn run_tui() -> CliResult<()> {
    enable_raw_mode()?;
    let result = run_session();
    let restored = restore_terminal(&mut io::stdout());
    result.and(restored)
}

fn run_session() -> CliResult<()> {
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    info!("terminal calculator started");
    run_app(&mut terminal)
}

/// Runs every restore step, reporting the first failure
fn restore_terminal<W: Write>(out: &mut W) -> CliResult<()> {
    let steps = [
        disable_raw_mode(),
        execute!(out, LeaveAlternateScreen),
        execute!(out, DisableMouseCapture),
        execute!(out, Show),
    ];
    steps.into_iter().collect::<io::Result<()>>()?;
    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>) -> CliResult<()> {
    let mut app = CalculatorApp::new();

    while !app.should_quit() {
        let area = terminal.draw(|f| render(&app, f))?.area;
        let event = event::read()?;
        handle_event(&mut app, &event, area);
    }

    debug!(display = app.display(), "terminal calculator closed");
    Ok(())
}

/// Applies one terminal event to the app.
///
/// `area` is the screen area of the last draw, used to map mouse clicks to
/// keypad buttons. Returns true if the event did anything.
pub fn handle_event(app: &mut CalculatorApp, event: &Event, area: Rect) -> bool {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(*key),
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => app
            .click(layout(area).keypad, mouse.column, mouse.row)
            .is_some(),
        _ => false,
    }
}
