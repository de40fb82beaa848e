use std::time::{Duration, Instant};

use blockfall_engine::{GameEngine, HorizontalDirection, PieceSeed};
use blockfall_runtime::{App, Runtime};
use crossterm::event::Event;
use rand::Rng as _;
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use crate::{
    command::play::input::{self, Command, SoftDropLatch},
    view::widgets::{GameDisplay, KeyBinding, KeyBindingDisplay},
};

#[derive(Debug, Clone, Copy)]
pub struct Timing {
    pub gravity: Duration,
    pub soft_drop: Duration,
    pub render: Duration,
    pub soft_drop_hold: Duration,
}

const PLAYING_KEYS: &[KeyBinding] = &[
    (&["←", "→"], "Move"),
    (&["↑"], "Rotate"),
    (&["↓"], "Soft Drop"),
    (&["Q", "Esc"], "Quit"),
];

const GAME_OVER_KEYS: &[KeyBinding] = &[(&["R"], "Restart"), (&["Q", "Esc"], "Quit")];

#[derive(Debug)]
pub struct PlayApp {
    engine: GameEngine,
    seed: Option<PieceSeed>,
    timing: Timing,
    soft_drop: SoftDropLatch,
    is_exiting: bool,
}

impl PlayApp {
    /// Creates the app. Without a seed, every game gets a fresh random one.
    pub fn new(seed: Option<PieceSeed>, timing: Timing) -> Self {
        Self {
            engine: new_engine(seed),
            seed,
            timing,
            soft_drop: SoftDropLatch::new(timing.soft_drop_hold),
            is_exiting: false,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    fn apply(&mut self, runtime: &mut Runtime, command: Command, now: Instant) {
        match command {
            Command::Quit => self.is_exiting = true,
            Command::Restart if self.engine.is_game_over() => self.restart(runtime),
            Command::Restart => {}
            Command::MoveLeft => _ = self.engine.move_horizontal(HorizontalDirection::Left),
            Command::MoveRight => _ = self.engine.move_horizontal(HorizontalDirection::Right),
            Command::Rotate => _ = self.engine.rotate(),
            Command::SoftDropStart => {
                if self.engine.soft_drop().is_some() && self.soft_drop.press(now) {
                    runtime.set_gravity_interval(Some(self.timing.soft_drop));
                }
            }
            Command::SoftDropEnd => {
                if self.soft_drop.release() {
                    runtime.set_gravity_interval(Some(self.timing.gravity));
                }
            }
        }
        self.stop_gravity_if_over(runtime);
    }

    fn restart(&mut self, runtime: &mut Runtime) {
        self.engine = new_engine(self.seed);
        self.soft_drop.release();
        runtime.set_gravity_interval(Some(self.timing.gravity));
    }

    fn stop_gravity_if_over(&mut self, runtime: &mut Runtime) {
        if self.engine.is_game_over() && runtime.gravity_interval().is_some() {
            self.soft_drop.release();
            runtime.set_gravity_interval(None);
        }
    }
}

fn new_engine(seed: Option<PieceSeed>) -> GameEngine {
    GameEngine::with_seed(seed.unwrap_or_else(|| rand::rng().random()))
}

impl App for PlayApp {
    fn init(&mut self, runtime: &mut Runtime) {
        runtime.set_render_interval(Some(self.timing.render));
        runtime.set_gravity_interval(Some(self.timing.gravity));
    }

    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, runtime: &mut Runtime, event: Event) {
        if let Some(key) = event.as_key_event()
            && let Some(command) = input::map_key(&key)
        {
            self.apply(runtime, command, Instant::now());
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let bindings = if self.engine.is_game_over() {
            GAME_OVER_KEYS
        } else {
            PLAYING_KEYS
        };
        let game_display = GameDisplay::new(self.engine.state());
        let help = KeyBindingDisplay::new(bindings);

        let [main_area, help_area] =
            Layout::vertical([Constraint::Length(game_display.height()), Constraint::Length(1)])
                .areas::<2>(frame.area());
        frame.render_widget(game_display, main_area);
        frame.render_widget(help, help_area);
    }

    fn on_gravity(&mut self, runtime: &mut Runtime) {
        if !runtime.key_release_events() && self.soft_drop.expire(Instant::now()) {
            runtime.set_gravity_interval(Some(self.timing.gravity));
        }
        self.engine.tick();
        self.stop_gravity_if_over(runtime);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMING: Timing = Timing {
        gravity: Duration::from_millis(1000),
        soft_drop: Duration::from_millis(50),
        render: Duration::from_millis(50),
        soft_drop_hold: Duration::from_millis(150),
    };

    fn seed() -> PieceSeed {
        "0f1e2d3c4b5a69788796a5b4c3d2e1f0".parse().unwrap()
    }

    fn started() -> (PlayApp, Runtime) {
        let mut app = PlayApp::new(Some(seed()), TIMING);
        let mut runtime = Runtime::new();
        app.init(&mut runtime);
        (app, runtime)
    }

    fn play_until_game_over(app: &mut PlayApp, runtime: &mut Runtime) {
        let now = Instant::now();
        for _ in 0..10_000 {
            if app.engine().is_game_over() {
                return;
            }
            app.apply(runtime, Command::SoftDropStart, now);
        }
        panic!("game did not end");
    }

    #[test]
    fn test_init_starts_gravity() {
        let (_, runtime) = started();
        assert_eq!(runtime.gravity_interval(), Some(TIMING.gravity));
    }

    #[test]
    fn test_soft_drop_switches_gravity_period() {
        let (mut app, mut runtime) = started();
        let now = Instant::now();
        let y0 = app.engine().active_piece().position().y();

        app.apply(&mut runtime, Command::SoftDropStart, now);
        assert_eq!(app.engine().active_piece().position().y(), y0 + 1);
        assert_eq!(runtime.gravity_interval(), Some(TIMING.soft_drop));

        // Repeats keep dropping without restarting the fast period.
        app.apply(&mut runtime, Command::SoftDropStart, now);
        assert_eq!(app.engine().active_piece().position().y(), y0 + 2);

        app.apply(&mut runtime, Command::SoftDropEnd, now);
        assert_eq!(runtime.gravity_interval(), Some(TIMING.gravity));
        assert_eq!(app.engine().active_piece().position().y(), y0 + 2);
    }

    #[test]
    fn test_moves_reach_engine() {
        let (mut app, mut runtime) = started();
        let now = Instant::now();
        let x0 = app.engine().active_piece().position().x();
        app.apply(&mut runtime, Command::MoveLeft, now);
        assert_eq!(app.engine().active_piece().position().x(), x0 - 1);
        app.apply(&mut runtime, Command::MoveRight, now);
        app.apply(&mut runtime, Command::MoveRight, now);
        assert_eq!(app.engine().active_piece().position().x(), x0 + 1);
    }

    #[test]
    fn test_game_over_stops_gravity_and_restart_resumes() {
        let (mut app, mut runtime) = started();
        play_until_game_over(&mut app, &mut runtime);
        assert_eq!(runtime.gravity_interval(), None);

        let frozen = app.engine().state().clone();
        app.apply(&mut runtime, Command::MoveLeft, Instant::now());
        app.apply(&mut runtime, Command::SoftDropStart, Instant::now());
        assert_eq!(app.engine().state(), &frozen);
        assert_eq!(runtime.gravity_interval(), None);

        app.apply(&mut runtime, Command::Restart, Instant::now());
        assert!(!app.engine().is_game_over());
        assert_eq!(app.engine().score(), 0);
        assert_eq!(app.engine().seed(), seed());
        assert_eq!(runtime.gravity_interval(), Some(TIMING.gravity));
    }

    #[test]
    fn test_restart_ignored_while_running() {
        let (mut app, mut runtime) = started();
        let now = Instant::now();
        app.apply(&mut runtime, Command::SoftDropStart, now);
        let before = app.engine().state().clone();
        app.apply(&mut runtime, Command::Restart, now);
        assert_eq!(app.engine().state(), &before);
    }

    #[test]
    fn test_quit() {
        let (mut app, mut runtime) = started();
        assert!(!app.should_exit());
        app.apply(&mut runtime, Command::Quit, Instant::now());
        assert!(app.should_exit());
    }

    #[test]
    fn test_gravity_ticks_engine() {
        let (mut app, mut runtime) = started();
        let y0 = app.engine().active_piece().position().y();
        app.on_gravity(&mut runtime);
        assert_eq!(app.engine().active_piece().position().y(), y0 + 1);
    }

    #[test]
    fn test_inferred_soft_drop_release() {
        let (mut app, mut runtime) = started();
        // The test runtime never set up a terminal, so releases are inferred.
        assert!(!runtime.key_release_events());
        let long_ago = Instant::now() - Duration::from_secs(5);
        app.apply(&mut runtime, Command::SoftDropStart, long_ago);
        assert_eq!(runtime.gravity_interval(), Some(TIMING.soft_drop));

        app.on_gravity(&mut runtime);
        assert_eq!(runtime.gravity_interval(), Some(TIMING.gravity));
    }

    #[test]
    fn test_single_tap_ends_fast_gravity_after_hold_window() {
        let (mut app, mut runtime) = started();
        let tapped = Instant::now() - Duration::from_millis(200);
        app.apply(&mut runtime, Command::SoftDropStart, tapped);
        assert_eq!(runtime.gravity_interval(), Some(TIMING.soft_drop));

        app.on_gravity(&mut runtime);
        assert_eq!(runtime.gravity_interval(), Some(TIMING.gravity));

        // A fresh press starts a new hold.
        app.apply(&mut runtime, Command::SoftDropStart, Instant::now());
        assert_eq!(runtime.gravity_interval(), Some(TIMING.soft_drop));
        app.on_gravity(&mut runtime);
        assert_eq!(runtime.gravity_interval(), Some(TIMING.soft_drop));
    }
}
