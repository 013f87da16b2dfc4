use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;

use remocon::app::{r#loop::run_loop, state::AppState};
use remocon::cli::{self, Cli, Commands};
use remocon::config::{self, AppConfig};
use remocon::domain::remote::RemoteApi;
use remocon::infrastructure::http::HttpRemote;
use remocon::logging;

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    let command = args.command.unwrap_or(Commands::Tui);

    match &command {
        Commands::Tui => {
            logging::init_tui(config::config_dir().as_deref());
        }
        _ => logging::init_stderr(),
    }

    let config = AppConfig::load(args.config.as_deref())
        .with_overrides(args.url, std::env::var(config::URL_ENV).ok());
    tracing::info!("Using server {}", config.base_url);

    // Build the client before touching the terminal so a bad setup
    // doesn't leave it in raw mode.
    let remote = HttpRemote::new(&config.base_url, config.timeout())?;

    let mut stdout = io::stdout();
    match command {
        Commands::List => return cli::list(&remote, &mut stdout).await,
        Commands::Send { commands } => return cli::send(&remote, &commands, &mut stdout).await,
        Commands::Status => return cli::status(&remote, &mut stdout).await,
        Commands::Tui => {}
    }

    setup_panic_hook();
    let api: Arc<dyn RemoteApi> = Arc::new(remote);
    let app_state = AppState::new(config.document, api.base_url());

    // Setup terminal
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, api).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("{:?}", err);
        println!("{:?}", err);
    }

    Ok(())
}
