use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Player commands decoded from key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Rotate,
    SoftDropStart,
    SoftDropEnd,
    Restart,
    Quit,
}

/// Maps a key event to a command.
///
/// Presses and auto-repeats trigger commands. Of the releases, only the down
/// arrow means something: it ends a soft drop.
pub fn map_key(event: &KeyEvent) -> Option<Command> {
    if event.kind == KeyEventKind::Release {
        return (event.code == KeyCode::Down).then_some(Command::SoftDropEnd);
    }
    let command = match event.code {
        KeyCode::Left => Command::MoveLeft,
        KeyCode::Right => Command::MoveRight,
        KeyCode::Up => Command::Rotate,
        KeyCode::Down => Command::SoftDropStart,
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => Command::Quit,
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        KeyCode::Char('r') => Command::Restart,
        _ => return None,
    };
    Some(command)
}

/// Tracks whether the soft-drop key is held.
///
/// Terminals that report key releases end a hold explicitly with
/// [`Self::release`]. Elsewhere a held key only shows up as a stream of
/// repeated presses, so the hold is considered over once no press has arrived
/// for the hold window (see [`Self::expire`]).
#[derive(Debug, Clone)]
pub struct SoftDropLatch {
    hold_window: Duration,
    last_press: Option<Instant>,
}

impl SoftDropLatch {
    pub fn new(hold_window: Duration) -> Self {
        Self {
            hold_window,
            last_press: None,
        }
    }

    /// Records a press. Returns `true` if this starts a new hold.
    pub fn press(&mut self, now: Instant) -> bool {
        self.last_press.replace(now).is_none()
    }

    /// Ends the hold. Returns `true` if a hold was active.
    pub fn release(&mut self) -> bool {
        self.last_press.take().is_some()
    }

    /// Ends the hold if the last press is at least one hold window old.
    ///
    /// Returns `true` if the hold ended.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.last_press {
            Some(last) if now.saturating_duration_since(last) >= self.hold_window => {
                self.release()
            }
            _ => false,
        }
    }
}
