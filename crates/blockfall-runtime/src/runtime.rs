use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::supports_keyboard_enhancement,
};
use ratatui::DefaultTerminal;

use crate::{App, event::TuiEvent, event_loop::EventLoop};

/// TUI application runtime.
///
/// Manages the event loop and executes applications that implement the `App` trait.
/// Gravity and render timing are controlled independently, and either can be
/// stopped or re-periodized at any time from within the application callbacks.
#[derive(Default, Debug)]
pub struct Runtime {
    events: EventLoop,
    key_release_events: bool,
}

impl Runtime {
    /// Creates a new Runtime.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the gravity interval, restarting the gravity period from now.
    ///
    /// Pass `None` to stop gravity events.
    pub fn set_gravity_interval(&mut self, interval: Option<Duration>) {
        self.events.set_gravity_interval(interval, Instant::now());
    }

    /// Returns the current gravity interval, or `None` if gravity is stopped.
    #[must_use]
    pub fn gravity_interval(&self) -> Option<Duration> {
        self.events.gravity_interval()
    }

    /// Sets the render interval.
    ///
    /// Pass `None` to render only after state changes.
    pub fn set_render_interval(&mut self, interval: Option<Duration>) {
        self.events.set_render_interval(interval, Instant::now());
    }

    /// Returns whether the terminal reports key release and repeat events.
    ///
    /// Only meaningful once `run()` has started. When this is false, every key
    /// event arrives as a press and releases must be inferred.
    #[must_use]
    pub fn key_release_events(&self) -> bool {
        self.key_release_events
    }

    /// Runs the application.
    ///
    /// 1. Sets up the terminal, asking it to report key releases if it can
    /// 2. Calls `app.init()` for initialization
    /// 3. Runs the event loop until `app.should_exit()` returns true
    ///    - `TuiEvent::Gravity`: calls `app.on_gravity()`
    ///    - `TuiEvent::Render`: calls `app.draw()`
    ///    - `TuiEvent::Crossterm`: calls `app.handle_event()`
    pub fn run<A>(mut self, app: &mut A) -> io::Result<()>
    where
        A: App,
    {
        ratatui::run(|terminal| {
            self.key_release_events = supports_keyboard_enhancement().unwrap_or(false);
            if self.key_release_events {
                execute!(
                    io::stdout(),
                    PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
                )?;
            }

            app.init(&mut self);
            let result = self.run_loop(app, terminal);

            if self.key_release_events {
                execute!(io::stdout(), PopKeyboardEnhancementFlags)?;
            }
            result
        })
    }

    fn run_loop<A>(&mut self, app: &mut A, terminal: &mut DefaultTerminal) -> io::Result<()>
    where
        A: App,
    {
        while !app.should_exit() {
            match self.events.next()? {
                TuiEvent::Gravity => {
                    app.on_gravity(self);
                }
                TuiEvent::Render => {
                    terminal.draw(|f| app.draw(f))?;
                }
                TuiEvent::Crossterm(event) => {
                    app.handle_event(self, event);
                }
            }
        }
        Ok(())
    }
}
