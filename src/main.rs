use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use skq::app::App;
use skq::config;
use skq::suggest::SuggestClient;

/// How long one loop tick waits for a key before applying responses and
/// redrawing
const TICK: Duration = Duration::from_millis(50);

#[derive(Debug, Parser)]
#[command(version, about = "Interactive skill search against a GraphQL endpoint")]
struct Args {
    /// GraphQL endpoint URL (overrides the config file)
    #[arg(long)]
    endpoint: Option<String>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    skq::logging::init();

    // The endpoint is fixed for the life of the process: CLI flag, then
    // config file, then the built-in default
    let config = config::load()?;
    let endpoint = args
        .endpoint
        .as_deref()
        .or_else(|| config.endpoint_url())
        .unwrap_or(config::DEFAULT_ENDPOINT);

    // A bad endpoint is fatal before the terminal is touched
    let client = SuggestClient::new(endpoint)?;

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    // Run the application
    let result = run(terminal, client);

    // Restore terminal (automatic cleanup)
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, client: SuggestClient) -> Result<()> {
    let mut app = App::new(client);

    loop {
        // Apply whatever suggest responses arrived since the last frame
        app.poll_suggest_responses();

        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        // Wait at most one tick for a key so response polling keeps running
        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (avoid duplicates)
                if key.kind == KeyEventKind::Press {
                    app.handle_key_event(key);
                }
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
