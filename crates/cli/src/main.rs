//! Shopfront terminal client

use std::process;

use tracing::{debug, error, warn};

use shopfront_app::{context::AppContext, session::SessionState};

use crate::config::CliConfig;

mod commands;
mod config;
mod logging;
mod output;

/// Shopfront terminal client entry point
#[tokio::main]
async fn main() {
    // Load configuration from .env and CLI arguments
    let config = CliConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("{e}");
        }

        process::exit(1);
    });

    if let Err(init_error) = logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {init_error}");

        process::exit(1);
    }

    let app = match AppContext::from_config(config.backend.to_config()) {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    // The application's single push-style session subscription.
    let observer = app.session.subscribe(|state| match state {
        SessionState::SignedIn(user) => debug!(user = %user.email, "signed in"),
        SessionState::SignedOut => debug!("signed out"),
    });

    if let Err(restore_error) = app.session.start().await {
        warn!("session restore failed: {restore_error}");
    }

    let result = commands::dispatch(&app, &config.account, config.command).await;

    app.session.unsubscribe(observer);
    app.session.stop();

    if let Err(error) = result {
        error!("{error}");

        process::exit(1);
    }
}
