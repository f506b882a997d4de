use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::App;

impl App {
    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Try global keys first
        if self.handle_global_keys(key) {
            return; // Key was handled globally
        }

        self.handle_search_field_key(key);
    }

    /// Handle global keys
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        // Esc: Exit application
        if key.code == KeyCode::Esc {
            self.should_quit = true;
            return true;
        }

        // Ctrl+C: Exit application
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        false // Key not handled
    }

    /// Handle keys for the search field
    ///
    /// Every other printable key belongs to the field, including 'q';
    /// quitting is Esc or Ctrl+C only.
    fn handle_search_field_key(&mut self, key: KeyEvent) {
        // Single-line field: there is nothing to submit, queries already
        // fire on every change
        if key.code == KeyCode::Enter {
            return;
        }

        // A text change fires one query; pure cursor movement fires none
        if self.textarea.input(key) {
            let raw_input = self.query().to_string();
            self.suggest.request(&raw_input);
        }
    }
}
