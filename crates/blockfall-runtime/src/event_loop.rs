use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::event;

use crate::{event::TuiEvent, timer::PeriodicTimer};

/// Event loop state management.
///
/// Multiplexes two periodic timers (gravity and render) with terminal input and
/// returns one event at a time via `next()`. A stopped timer generates no
/// events. Any gravity step or terminal event marks the screen dirty, and a
/// dirty screen is rendered before more input is read.
#[derive(Debug)]
pub(super) struct EventLoop {
    gravity: PeriodicTimer,
    render: PeriodicTimer,
    dirty: bool,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLoop {
    /// Creates a new `EventLoop` with both timers stopped.
    pub fn new() -> Self {
        Self {
            gravity: PeriodicTimer::new(),
            render: PeriodicTimer::new(),
            dirty: true, // Initial render is required on startup
        }
    }

    /// Sets the gravity interval. `None` stops gravity events.
    pub(super) fn set_gravity_interval(&mut self, interval: Option<Duration>, now: Instant) {
        self.gravity.set(interval, now);
    }

    /// Sets the render interval. `None` leaves only state-change renders.
    pub(super) fn set_render_interval(&mut self, interval: Option<Duration>, now: Instant) {
        self.render.set(interval, now);
    }

    pub(super) fn gravity_interval(&self) -> Option<Duration> {
        self.gravity.interval()
    }

    /// Returns the next event.
    ///
    /// Blocks until a timer is due or a crossterm event occurs. If both timers
    /// are stopped and nothing is dirty, only waits for crossterm events.
    pub(super) fn next(&mut self) -> io::Result<TuiEvent> {
        loop {
            let now = Instant::now();
            if let Some(event) = self.due_event(now) {
                return Ok(event);
            }

            if let Some(timeout) = self.compute_timeout(now)
                && !event::poll(timeout)?
            {
                continue;
            }

            self.dirty = true;
            return Ok(event::read()?.into());
        }
    }

    /// Returns the timer event due at `now`, if any. Gravity wins over render.
    fn due_event(&mut self, now: Instant) -> Option<TuiEvent> {
        if self.gravity.poll(now) {
            self.dirty = true;
            return Some(TuiEvent::Gravity);
        }
        // Poll the render timer even when dirty so that it re-arms.
        let render_due = self.render.poll(now);
        if render_due || self.dirty {
            self.dirty = false;
            return Some(TuiEvent::Render);
        }
        None
    }

    /// Returns how long input may be awaited before the next timer is due.
    fn compute_timeout(&self, now: Instant) -> Option<Duration> {
        let next_timeout_at = [self.gravity.deadline(), self.render.deadline()]
            .into_iter()
            .flatten()
            .min()?;
        Some(next_timeout_at.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    fn idle_loop(t0: Instant) -> EventLoop {
        let mut events = EventLoop::new();
        assert!(events.due_event(t0).is_some_and(|e| e.is_render()));
        events
    }

    #[test]
    fn test_initial_render() {
        let t0 = Instant::now();
        let mut events = EventLoop::new();
        assert!(events.due_event(t0).is_some_and(|e| e.is_render()));
        assert!(events.due_event(t0).is_none());
        assert_eq!(events.compute_timeout(t0), None);
    }

    #[test]
    fn test_gravity_and_render_timers() {
        let t0 = Instant::now();
        let mut events = idle_loop(t0);
        events.set_gravity_interval(Some(1000 * MS), t0);
        events.set_render_interval(Some(50 * MS), t0);
        assert_eq!(events.gravity_interval(), Some(1000 * MS));

        assert_eq!(events.compute_timeout(t0), Some(50 * MS));
        assert!(events.due_event(t0 + 10 * MS).is_none());
        assert!(events.due_event(t0 + 50 * MS).is_some_and(|e| e.is_render()));
        assert!(events.due_event(t0 + 50 * MS).is_none());

        assert!(events.due_event(t0 + 1000 * MS).is_some_and(|e| e.is_gravity()));
        // The gravity step dirtied the screen, so a render follows right away.
        assert!(events.due_event(t0 + 1000 * MS).is_some_and(|e| e.is_render()));
        assert!(events.due_event(t0 + 1000 * MS).is_none());
        assert_eq!(events.compute_timeout(t0 + 1000 * MS), Some(50 * MS));
    }

    #[test]
    fn test_stopped_gravity_produces_nothing() {
        let t0 = Instant::now();
        let mut events = idle_loop(t0);
        events.set_gravity_interval(Some(100 * MS), t0);
        events.set_gravity_interval(None, t0 + 50 * MS);
        assert_eq!(events.gravity_interval(), None);
        assert!(events.due_event(t0 + 500 * MS).is_none());
        assert_eq!(events.compute_timeout(t0 + 500 * MS), None);
    }

    #[test]
    fn test_timeout_saturates_when_overdue() {
        let t0 = Instant::now();
        let mut events = idle_loop(t0);
        events.set_gravity_interval(Some(20 * MS), t0);
        assert_eq!(events.compute_timeout(t0 + 30 * MS), Some(Duration::ZERO));
    }
}
