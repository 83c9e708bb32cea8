mod app;
mod view;

use std::io;
use std::time::Instant;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;

use wf_simulation::Simulation;

use app::App;

/// Run the interactive view until a stop key is pressed. Returns the
/// still-running simulation after the terminal has been restored.
pub fn run(sim: Simulation) -> Result<Simulation, String> {
    let mut app = App::new(sim)?;

    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result.map(|()| app.into_simulation())
}

/// Tick, draw, then wait out the rest of the interval while listening for
/// keys. A stop key ends the wait immediately.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), String> {
    let interval = app.sim.clock().interval();

    loop {
        app.step()?;
        terminal
            .draw(|frame| view::draw(frame, app))
            .map_err(|e| format!("draw error: {e}"))?;

        let started = Instant::now();
        loop {
            let remaining = interval.saturating_sub(started.elapsed());
            if remaining.is_zero() {
                break;
            }
            if !event::poll(remaining).map_err(|e| format!("event error: {e}"))? {
                break;
            }
            if let Event::Key(key) = event::read().map_err(|e| format!("event error: {e}"))?
                && key.kind == KeyEventKind::Press
            {
                app.handle_key(key);
            }
            if app.should_stop {
                return Ok(());
            }
        }
    }
}
