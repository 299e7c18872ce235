use std::io;
use std::time::Duration;

use crossterm::event::KeyEventKind;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

mod app;
mod config;
mod error;
mod models;
mod services;
mod toast;
mod tui;
mod workflow;

use app::App;
use config::Config;
use error::Result;
use models::SummaryRecord;
use services::BackendClient;
use tui::{draw, handle_key_event};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging (only show warnings and errors by default)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();

    // Load configuration
    let config = Config::load()?;

    // Check for --resolve flag (headless share-link resolution)
    if args.len() >= 3 && args[1] == "--resolve" {
        return resolve_shared(&config, &args[2]).await;
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config);

    // Run the app
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

/// Resolve a shared summary id and print the stored record. This is the
/// share-link route run as its own process; failure is terminal for the
/// invocation and exits non-zero.
async fn resolve_shared(config: &Config, id: &str) -> Result<()> {
    let backend = BackendClient::new(config);

    match backend.lookup(id).await {
        Ok(record) => {
            print_record(&record);
            Ok(())
        }
        Err(e) => {
            eprintln!("Erro: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_record(record: &SummaryRecord) {
    println!("{}", record.summary);
    println!();
    println!("Link Original: {}", record.original_url);
    if !record.category.is_empty() {
        if record.subcategory.is_empty() {
            println!("Categoria: {}", record.category);
        } else {
            println!("Categoria: {} / {}", record.category, record.subcategory);
        }
    }
    println!(
        "Resumido em: {}",
        record
            .created_at
            .with_timezone(&chrono::Local)
            .format("%d/%m/%Y %H:%M")
    );
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, app))?;

        // Advance spinner animation and expire toasts
        app.tick();

        // Poll for completed summarize requests
        app.poll_outcome();

        // Poll for events with timeout to allow async operations
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(action) =
                        handle_key_event(key, app.url_input_active, app.show_help)
                    {
                        if app.handle_action(action) {
                            return Ok(());
                        }
                    }
                }
            }
        }
    }
}
