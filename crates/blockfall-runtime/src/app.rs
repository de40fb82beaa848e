use crossterm::event::Event;
use ratatui::Frame;

use crate::Runtime;

/// A game driven by [`Runtime::run`].
///
/// Every callback runs on the runtime's thread, one at a time, so an
/// implementation never sees two of them overlap.
pub trait App {
    /// Called once the terminal is ready and before the first event.
    ///
    /// Gravity and rendering stay stopped until this sets their intervals.
    fn init(&mut self, runtime: &mut Runtime);

    /// Checked before each event; `true` leaves the loop and restores the terminal.
    fn should_exit(&self) -> bool;

    /// Key presses, releases, resizes and other terminal input.
    fn handle_event(&mut self, runtime: &mut Runtime, event: Event);

    fn draw(&self, frame: &mut Frame);

    /// One gravity step. The interval may be changed or stopped from here.
    fn on_gravity(&mut self, runtime: &mut Runtime);
}
