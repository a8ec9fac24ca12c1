use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseEvent};

/// Terminal events read by the runtime's event loop.
///
/// The runtime hands each `TerminalEvent` to
/// [`Model::on_event`](crate::Model::on_event), which maps it into the
/// application's message type (or discards it by returning `None`). Key and
/// mouse variants wrap the corresponding [`crossterm::event`] payloads, so
/// handlers can match on key codes, modifiers, and buttons with the full
/// crossterm API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// A key press.
    Key(KeyEvent),
    /// A mouse event.
    Mouse(MouseEvent),
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
    /// Bracketed paste content.
    Paste(String),
}

impl TerminalEvent {
    /// Convert a raw crossterm event, dropping the ones the runtime does not
    /// deliver (focus changes, key releases/repeats on Windows).
    pub fn from_crossterm(event: Event) -> Option<Self> {
        match event {
            Event::Key(k) if k.kind == KeyEventKind::Press => Some(TerminalEvent::Key(k)),
            Event::Key(_) => None,
            Event::Mouse(m) => Some(TerminalEvent::Mouse(m)),
            Event::Resize(w, h) => Some(TerminalEvent::Resize(w, h)),
            Event::Paste(s) => Some(TerminalEvent::Paste(s)),
            Event::FocusGained | Event::FocusLost => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    #[test]
    fn key_press_converts() {
        let key = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        };
        assert_eq!(
            TerminalEvent::from_crossterm(Event::Key(key)),
            Some(TerminalEvent::Key(key))
        );
    }

    #[test]
    fn key_release_is_dropped() {
        let key = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(TerminalEvent::from_crossterm(Event::Key(key)), None);
    }

    #[test]
    fn focus_events_are_dropped() {
        assert_eq!(TerminalEvent::from_crossterm(Event::FocusGained), None);
        assert_eq!(TerminalEvent::from_crossterm(Event::FocusLost), None);
    }

    #[test]
    fn resize_converts() {
        assert_eq!(
            TerminalEvent::from_crossterm(Event::Resize(80, 24)),
            Some(TerminalEvent::Resize(80, 24))
        );
    }
}
