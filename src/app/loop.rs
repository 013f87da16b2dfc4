use crate::app::{
    action::Action, handler::handle_command, input::map_event_to_action, reducer,
    state::AppState, ui,
};
use crate::domain::remote::RemoteApi;

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

/// Drives the spinner and the press flash.
const TICK_RATE: Duration = Duration::from_millis(100);

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState,
    api: Arc<dyn RemoteApi>,
) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, api, event_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState,
    api: Arc<dyn RemoteApi>,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut interval = interval(TICK_RATE);

    if let Some(cmd) = reducer::update(&mut app_state, Action::Load) {
        handle_command(cmd, api.clone(), action_tx.clone());
    }

    while !app_state.should_quit {
        let area = terminal.draw(|f| ui::draw(f, &app_state))?.area;
        app_state.panel_scroll = ui::panel_scroll(area, &app_state);

        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            input = event_rx.recv() => match input {
                Some(Ok(event)) => map_event_to_action(event, &app_state, terminal.size()?),
                Some(Err(e)) => {
                    tracing::error!("Terminal input failed: {e}");
                    return Err(e.into());
                }
                // Input reader is gone, nothing can drive the app any more.
                None => Some(Action::Quit),
            },

            Some(result) = action_rx.recv() => Some(result),
        };

        let Some(action) = action else { continue };
        if let Some(cmd) = reducer::update(&mut app_state, action) {
            handle_command(cmd, api.clone(), action_tx.clone());
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
