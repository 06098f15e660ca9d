use std::io::stdout;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use tokio::sync::mpsc::unbounded_channel;

use usersuggest::app::App;
use usersuggest::config::load_config;
use usersuggest::logging;
use usersuggest::lookup::{LookupChannel, SearchClient, spawn_worker};

const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Type a username and pick from live suggestions
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Page the search endpoint is resolved against
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Config file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Percent-encode the typed text in lookup URLs
    #[arg(long)]
    encode_query: bool,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    let mut config = load_config(args.config.as_deref())?;
    if let Some(url) = args.url {
        config.search.page_url = url;
    }
    if args.encode_query {
        config.search.encode_query = true;
    }

    // Bad URLs are reported before the terminal is taken over
    let client = SearchClient::new(
        &config.search.page_url,
        &config.search.endpoint,
        config.search.encode_query,
    )?;

    if let Err(e) = logging::init() {
        eprintln!("usersuggest: logging disabled: {}", e);
    }
    log::info!("Looking up usernames at {}", client.endpoint());

    let (request_tx, request_rx) = unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();
    let worker = spawn_worker(client, request_rx, response_tx);

    let mut app = App::new(&config, LookupChannel::new(request_tx), response_rx);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    let result = with_terminal(
        || execute!(stdout(), EnableMouseCapture),
        || run(terminal, &mut app),
        || {
            let _ = execute!(stdout(), DisableMouseCapture);
            ratatui::restore();
        },
    );

    // Unbind before the worker goes so late responses have nowhere to land
    app.detach();
    worker.shutdown();

    result?;

    if let Some(username) = app.accepted_username() {
        println!("{}", username);
    }

    Ok(())
}

/// Run `body` once `setup` succeeds; `restore` runs whatever happened
fn with_terminal<T>(
    setup: impl FnOnce() -> std::io::Result<()>,
    body: impl FnOnce() -> Result<T>,
    restore: impl FnOnce(),
) -> Result<T> {
    let result = setup().map_err(Into::into).and_then(|()| body());
    restore();
    result
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(EVENT_POLL_INTERVAL)? {
            app.handle_event(event::read()?);
        }

        app.poll_lookups();

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
