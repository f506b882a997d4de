use std::sync::mpsc;

use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

use crate::suggest::{SuggestClient, SuggestState, spawn_worker};

/// Application state
pub struct App {
    pub textarea: TextArea<'static>,
    pub suggest: SuggestState,
    pub should_quit: bool,
}

impl App {
    /// Create a new App instance and start the suggest worker
    pub fn new(client: SuggestClient) -> Self {
        let mut app = Self::detached();

        // Wire the suggest pipeline to a background worker
        let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();
        spawn_worker(client, request_rx, response_tx);
        app.suggest.set_channels(request_tx, response_rx);

        app
    }

    /// Create an App with no worker attached; requests go nowhere
    pub fn detached() -> Self {
        // Create textarea for search input
        let mut textarea = TextArea::default();

        // Configure for single-line input
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .border_style(Style::default().fg(Color::Cyan)),
        );

        // Remove default underline from cursor line
        textarea.set_cursor_line_style(Style::default());

        Self {
            textarea,
            suggest: SuggestState::new(),
            should_quit: false,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Get the current search text
    pub fn query(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Apply suggest responses that arrived since the last frame
    pub fn poll_suggest_responses(&mut self) {
        self.suggest.poll_responses();
    }
}
