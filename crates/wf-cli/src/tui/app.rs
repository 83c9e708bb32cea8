use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use wf_simulation::{Simulation, WeedId};

use crate::grid::FieldGrid;

pub struct App {
    pub sim: Simulation,
    pub grid: FieldGrid,
    pub should_stop: bool,
}

impl App {
    pub fn new(sim: Simulation) -> Result<Self, String> {
        let mut grid = FieldGrid::for_config(sim.config())?;
        grid.plot(sim.field());
        Ok(Self {
            sim,
            grid,
            should_stop: false,
        })
    }

    /// Run one simulation step and re-rasterize the field.
    pub fn step(&mut self) -> Result<(), String> {
        self.sim
            .tick()
            .map_err(|e| format!("simulation error: {e}"))?;
        self.grid.plot(self.sim.field());
        Ok(())
    }

    /// `q`, `Esc` and Ctrl+C request a stop; everything else is ignored.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl_c =
            key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c');
        if ctrl_c || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            self.should_stop = true;
        }
    }

    /// The most recently spawned weed, if any.
    pub fn newest(&self) -> Option<WeedId> {
        self.sim.field().as_slice().last().map(|w| w.id())
    }

    pub fn into_simulation(self) -> Simulation {
        self.sim
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wf_simulation::SimConfig;

    fn app() -> App {
        App::new(Simulation::new(SimConfig::default()).unwrap()).unwrap()
    }

    #[test]
    fn stop_keys() {
        for key in [
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            let mut app = app();
            app.handle_key(key);
            assert!(app.should_stop);
        }

        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE));
        assert!(!app.should_stop);
    }

    #[test]
    fn step_updates_grid() {
        let mut app = app();
        assert_eq!(app.newest(), None);
        app.step().unwrap();
        app.step().unwrap();
        assert_eq!(app.newest(), Some(WeedId(2)));
        assert!(app.grid.occupied() >= 1);
        assert_eq!(app.into_simulation().current_tick(), 2);
    }
}
