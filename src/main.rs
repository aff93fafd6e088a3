mod auth;
mod controller;
mod error;
mod logging;
mod model;
mod view;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::Mutex;

use controller::{AppController, MSG_AUTH_FAILED, MSG_CONFIG_MISSING, MSG_CONNECT_FAILED};
use model::{AppModel, SpotifyClient};
use view::AppView;

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== Album Explorer Starting ===");

    let http = reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let model = Arc::new(Mutex::new(AppModel::new()));

    // Credentials are checked once at startup. Missing ones put the app
    // into the configuration-error screen; there is no recovery path.
    match auth::Credentials::from_env() {
        Ok(credentials) => {
            spawn_token_exchange(model.clone(), http, credentials);
        }
        Err(e) => {
            tracing::error!(error = %e, "Missing Spotify credentials");
            model
                .lock()
                .await
                .set_config_error(MSG_CONFIG_MISSING.to_string())
                .await;
        }
    }

    tracing::info!("Starting TUI...");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let controller = AppController::new(model.clone());

    let res = run_app(&mut terminal, model, controller).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("Album Explorer shutting down");
    Ok(())
}

/// Exchange the credentials for a bearer token in the background so the
/// welcome screen comes up immediately. On success the catalog client is
/// installed on the model; until then searches are refused with a
/// readiness message.
fn spawn_token_exchange(
    model: Arc<Mutex<AppModel>>,
    http: reqwest::Client,
    credentials: auth::Credentials,
) {
    tokio::spawn(async move {
        match auth::acquire_token(&http, &credentials).await {
            Ok(token) => {
                tracing::info!("Spotify token acquired");
                let client = SpotifyClient::new(http, token);
                model.lock().await.set_catalog(Arc::new(client));
            }
            Err(e @ auth::AuthError::Rejected(_)) => {
                tracing::error!(error = %e, "Token exchange rejected");
                model.lock().await.set_error(MSG_AUTH_FAILED.to_string()).await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Token exchange failed");
                model
                    .lock()
                    .await
                    .set_error(MSG_CONNECT_FAILED.to_string())
                    .await;
            }
        }
    });
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: Arc<Mutex<AppModel>>,
    controller: AppController,
) -> io::Result<()> {
    loop {
        let (ui_state, should_quit) = {
            let model_guard = model.lock().await;
            (
                model_guard.get_ui_state().await,
                model_guard.should_quit().await,
            )
        };

        terminal.draw(|f| {
            AppView::render(f, &ui_state);
        })?;

        // Short poll time keeps the loading screen responsive while
        // background requests run
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                let _ = controller.handle_key_event(key).await;
            }
        }

        if should_quit {
            break;
        }
    }

    Ok(())
}
