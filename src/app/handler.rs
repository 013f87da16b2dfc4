use crate::app::{action::Action, command::Command, reducer};
use crate::domain::remote::{ApiError, RemoteApi};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Runs a command in the background. Every request is its own task, so
/// repeated presses are neither merged nor ordered.
pub fn handle_command(command: Command, api: Arc<dyn RemoteApi>, tx: mpsc::Sender<Action>) {
    match command {
        Command::LoadStatus { epoch, startup } => {
            tokio::spawn(async move {
                let result = api.fetch_status().await;
                if let Err(e) = &result {
                    log_fetch_error("status", e);
                }
                let _ = tx
                    .send(Action::StatusLoaded {
                        epoch,
                        startup,
                        result,
                    })
                    .await;
            });
        }
        Command::LoadCatalog { epoch } => {
            tokio::spawn(async move {
                let result = api.fetch_commands().await;
                match &result {
                    Ok(catalog) => tracing::info!(
                        "Fetched {} commands in {} groups",
                        catalog.commands.len(),
                        catalog.groups.len()
                    ),
                    Err(e) => log_fetch_error("commands", e),
                }
                let _ = tx.send(Action::CatalogLoaded { epoch, result }).await;
            });
        }
        Command::Send(name) => {
            tokio::spawn(async move {
                let result = api.send_command(&name).await;
                match &result {
                    Ok(()) => tracing::debug!("Sent command {name}"),
                    Err(e @ ApiError::Transport(_)) => {
                        tracing::error!("Error sending command {name}: {e}");
                    }
                    Err(e) => tracing::error!("Failed to send command {name}: {e}"),
                }
                let _ = tx.send(Action::CommandSent(name, result)).await;
            });
        }
        Command::TogglePower { power_on, epoch } => {
            let name = if power_on {
                reducer::POWER_ON
            } else {
                reducer::POWER_OFF
            };
            handle_command(Command::Send(name.to_string()), api.clone(), tx.clone());
            handle_command(
                Command::LoadStatus {
                    epoch,
                    startup: false,
                },
                api,
                tx,
            );
        }
    }
}

fn log_fetch_error(what: &str, e: &ApiError) {
    match e {
        ApiError::Http { .. } => tracing::error!("Failed to fetch {what}: {e}"),
        _ => tracing::error!("Error fetching {what}: {e}"),
    }
}
