use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::state::App;

impl App {
    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        // Split the terminal into two panes: skills (top) and search (bottom)
        let layout = Layout::vertical([
            Constraint::Min(3),    // Skills pane takes most of the space
            Constraint::Length(3), // Search field is fixed 3 lines
        ])
        .split(frame.area());

        let skills_area = layout[0];
        let search_area = layout[1];

        // Render skills pane
        self.render_skills_pane(frame, skills_area);

        // Render search field
        self.render_search_field(frame, search_area);
    }

    /// Render the search field (bottom)
    fn render_search_field(&self, frame: &mut Frame, area: ratatui::layout::Rect) {
        frame.render_widget(&self.textarea, area);
    }

    /// Render the skills pane (top)
    fn render_skills_pane(&self, frame: &mut Frame, area: ratatui::layout::Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Skills ")
            .border_style(Style::default().fg(Color::DarkGray));

        // One concatenated display string; wrapping carries long result
        // lists across rows
        let content = Paragraph::new(self.suggest.display_text())
            .block(block)
            .wrap(Wrap { trim: false });

        frame.render_widget(content, area);
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
