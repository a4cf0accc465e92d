//! Key handlers

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;

impl App {
    pub(crate) fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // Until the gate opens only quitting is possible
        if !self.ready {
            if key.code == KeyCode::Char('q') {
                self.should_quit = true;
            }
            return;
        }

        if self.popups.any_visible() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                self.popups.close_all();
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('k') => {
                // Ignored while a run is active; the sequencer guards itself
                self.sequencer.trigger(Instant::now());
            }
            KeyCode::Char('i') => self.popups.kontroll_info.open(),
            KeyCode::Char('e') => self.popups.eu_card.open(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(c: char) -> KeyEvent {
        KeyEvent::from(KeyCode::Char(c))
    }

    fn ready_app() -> App {
        let mut app = App::new();
        app.ready = true;
        app
    }

    #[test]
    fn test_trigger_unreachable_before_gate_opens() {
        let mut app = App::new();
        app.handle_key(key('k'));
        assert!(!app.sequencer.is_running());
        app.handle_key(key('i'));
        assert!(!app.popups.any_visible());
    }

    #[test]
    fn test_kontroll_key_starts_sequence() {
        let mut app = ready_app();
        app.handle_key(key('k'));
        assert!(app.sequencer.is_running());
    }

    #[test]
    fn test_popups_open_and_close_independently() {
        let mut app = ready_app();

        app.handle_key(key('i'));
        assert!(app.popups.kontroll_info.visible);
        app.handle_key(KeyEvent::from(KeyCode::Esc));
        assert!(!app.popups.any_visible());

        app.handle_key(key('e'));
        assert!(app.popups.eu_card.visible);
        app.handle_key(KeyEvent::from(KeyCode::Esc));
        assert!(!app.popups.any_visible());
    }

    #[test]
    fn test_trigger_not_reachable_under_popup() {
        let mut app = ready_app();
        app.handle_key(key('i'));
        app.handle_key(key('k'));
        assert!(!app.sequencer.is_running());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = ready_app();
        app.handle_key(key('q'));
        assert!(app.should_quit);

        let mut app = App::new();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
