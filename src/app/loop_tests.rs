use super::*;
use crate::app::action::Action;
use crate::app::command::Command;
use crate::app::state::{AppMode, AppState};
use crate::domain::interface::{ButtonId, Document};
use crate::domain::models::{CommandCatalog, DeviceStatus};
use crate::domain::remote::{ApiError, MockRemoteApi};
use crossterm::event::{Event, KeyCode, KeyModifiers};
use rand::{Rng, SeedableRng};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::Arc;
use tokio::sync::mpsc;

fn catalog() -> CommandCatalog {
    CommandCatalog {
        commands: vec!["x".into(), "menuUp".into()],
        groups: vec![
            ("misc".into(), vec!["x".into()]),
            ("menu".into(), vec!["menuUp".into()]),
        ],
    }
}

/// Feeds every command through the handler until the reducer stops asking.
async fn drive(
    state: &mut AppState,
    first: Option<Command>,
    api: Arc<dyn RemoteApi>,
    tx: &mpsc::Sender<Action>,
    rx: &mut mpsc::Receiver<Action>,
) {
    let mut next = first;
    while let Some(cmd) = next.take() {
        handle_command(cmd, api.clone(), tx.clone());
        let action = rx.recv().await.unwrap();
        next = reducer::update(state, action);
    }
}

#[tokio::test]
async fn test_send_success() {
    let mut mock = MockRemoteApi::new();
    mock.expect_send_command()
        .withf(|name| name == "menuOk")
        .times(1)
        .returning(|_| Ok(()));

    let (tx, mut rx) = mpsc::channel(1);
    handle_command(Command::Send("menuOk".into()), Arc::new(mock), tx);

    let action = rx.recv().await.unwrap();
    assert_eq!(action, Action::CommandSent("menuOk".into(), Ok(())));
}

#[tokio::test]
async fn test_send_transport_error_propagates() {
    let mut mock = MockRemoteApi::new();
    mock.expect_send_command()
        .returning(|_| Err(ApiError::Transport("connection refused".into())));

    let (tx, mut rx) = mpsc::channel(1);
    let mut state = AppState::default();
    state.mode = AppMode::Normal;

    handle_command(Command::Send("menuUp".into()), Arc::new(mock), tx);
    let action = rx.recv().await.unwrap();
    reducer::update(&mut state, action);

    assert_eq!(state.mode, AppMode::Alert);
    assert!(state
        .last_error
        .unwrap()
        .message
        .contains("Error sending command menuUp"));
}

#[tokio::test]
async fn test_toggle_power_sends_and_refreshes() {
    let mut mock = MockRemoteApi::new();
    mock.expect_send_command()
        .withf(|name| name == "powerOff")
        .times(1)
        .returning(|_| Ok(()));
    mock.expect_fetch_status().times(1).returning(|| {
        Ok(DeviceStatus {
            last_power_command: Some(false),
        })
    });

    let (tx, mut rx) = mpsc::channel(2);
    handle_command(
        Command::TogglePower {
            power_on: false,
            epoch: 7,
        },
        Arc::new(mock),
        tx,
    );

    let mut actions = vec![rx.recv().await.unwrap(), rx.recv().await.unwrap()];
    actions.sort_by_key(|a| matches!(a, Action::StatusLoaded { .. }));
    assert_eq!(actions[0], Action::CommandSent("powerOff".into(), Ok(())));
    assert_eq!(
        actions[1],
        Action::StatusLoaded {
            epoch: 7,
            startup: false,
            result: Ok(DeviceStatus {
                last_power_command: Some(false)
            }),
        }
    );
}

#[tokio::test]
async fn test_generated_button_posts_exactly_once() {
    let mut mock = MockRemoteApi::new();
    mock.expect_fetch_status()
        .times(1)
        .returning(|| Ok(DeviceStatus::default()));
    mock.expect_fetch_commands()
        .times(1)
        .returning(|| Ok(catalog()));
    mock.expect_send_command()
        .withf(|name| name == "x")
        .times(1)
        .returning(|_| Ok(()));

    let api: Arc<dyn RemoteApi> = Arc::new(mock);
    let (tx, mut rx) = mpsc::channel(4);
    let mut state = AppState::new(Document::default(), "http://test".into());

    let first = reducer::update(&mut state, Action::Load);
    drive(&mut state, first, api.clone(), &tx, &mut rx).await;
    assert_eq!(state.interface.sections.len(), 2);

    let press = reducer::update(
        &mut state,
        Action::Press(ButtonId::Group {
            section: 0,
            index: 0,
        }),
    );
    drive(&mut state, press, api, &tx, &mut rx).await;
    assert_eq!(state.status_message.as_deref(), Some("Sent x"));
    assert_eq!(state.in_flight, 0);
}

#[tokio::test]
async fn test_catalog_failure_generates_nothing() {
    let mut mock = MockRemoteApi::new();
    mock.expect_fetch_status()
        .returning(|| Err(ApiError::Transport("down".into())));
    mock.expect_fetch_commands().returning(|| {
        Err(ApiError::Http {
            status: 503,
            reason: "Service Unavailable".into(),
        })
    });
    mock.expect_send_command().never();

    let api: Arc<dyn RemoteApi> = Arc::new(mock);
    let (tx, mut rx) = mpsc::channel(4);
    let mut state = AppState::new(Document::default(), "http://test".into());

    let first = reducer::update(&mut state, Action::Load);
    drive(&mut state, first, api, &tx, &mut rx).await;

    assert!(state.interface.sections.is_empty());
    assert!(state.interface.power_toggle.as_ref().unwrap().action.is_none());
    assert_eq!(state.mode, AppMode::Normal);
}

#[tokio::test]
async fn test_keystroke_fuzzing() {
    let mut mock = MockRemoteApi::new();
    mock.expect_fetch_status().returning(|| {
        Ok(DeviceStatus {
            last_power_command: Some(true),
        })
    });
    mock.expect_fetch_commands().returning(|| Ok(catalog()));
    mock.expect_send_command().returning(|_| Ok(()));
    mock.expect_base_url()
        .returning(|| "http://test".to_string());

    let api = Arc::new(mock);
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let app_state = AppState::new(
        Document {
            pinned: vec!["x".into(), "volumeUp".into()],
            ..Document::default()
        },
        "http://test".into(),
    );

    let (event_tx, event_rx) = mpsc::channel(100);

    // Spawn a task to feed random events
    let fuzzer_handle = tokio::spawn(async move {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for _ in 0..10000 {
            let event = match rng.gen_range(0..100) {
                0..=5 => {
                    let w = rng.gen_range(10..200);
                    let h = rng.gen_range(10..100);
                    Event::Resize(w, h)
                }
                6..=15 => generate_random_mouse(&mut rng, ratatui::layout::Size::new(80, 24)),
                _ => generate_random_key(&mut rng),
            };
            if event_tx.send(Ok(event)).await.is_err() {
                return;
            }
            // Yield to allow the loop to process events
            if rng.gen_bool(0.1) {
                tokio::task::yield_now().await;
            }
        }
        // Close any overlay and release the keyboard, then quit
        for code in [KeyCode::Esc, KeyCode::Esc, KeyCode::Esc, KeyCode::Char('q')] {
            let _ = event_tx
                .send(Ok(Event::Key(crossterm::event::KeyEvent::new(
                    code,
                    KeyModifiers::NONE,
                ))))
                .await;
        }
    });

    // Run the real loop (with a test backend)
    let result = tokio::time::timeout(
        std::time::Duration::from_secs(30),
        run_loop_with_events(&mut terminal, app_state, api, event_rx),
    )
    .await;

    match result {
        Ok(res) => res.unwrap(),
        Err(_) => panic!("Fuzzer timed out - possible deadlock or too slow"),
    }

    fuzzer_handle.await.unwrap();
}

fn generate_random_key<R: Rng>(rng: &mut R) -> Event {
    use crossterm::event::KeyEvent;
    let code = match rng.gen_range(0..20) {
        0 => KeyCode::Esc,
        1 => KeyCode::Enter,
        2 => KeyCode::Left,
        3 => KeyCode::Right,
        4 => KeyCode::Up,
        5 => KeyCode::Down,
        6 => KeyCode::F(rng.gen_range(1..=12)),
        7 => KeyCode::Char('c'),
        8 => KeyCode::Char('p'),
        9 => KeyCode::Char('r'),
        10 => KeyCode::Tab,
        11 => KeyCode::BackTab,
        12 => KeyCode::Delete,
        13 => KeyCode::Backspace,
        _ => {
            let c = rng.gen_range(b' '..=b'~') as char;
            // Quitting early would end the run before the events are used up.
            if c == 'q' {
                KeyCode::Char('?')
            } else {
                KeyCode::Char(c)
            }
        }
    };

    let mut modifiers = KeyModifiers::empty();
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::CONTROL);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::SHIFT);
    }

    Event::Key(KeyEvent::new(code, modifiers))
}

fn generate_random_mouse<R: Rng>(rng: &mut R, size: ratatui::layout::Size) -> Event {
    use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
    let kind = match rng.gen_range(0..5) {
        0 => MouseEventKind::Down(MouseButton::Left),
        1 => MouseEventKind::Down(MouseButton::Right),
        2 => MouseEventKind::ScrollUp,
        3 => MouseEventKind::ScrollDown,
        _ => MouseEventKind::Moved,
    };

    let column = rng.gen_range(0..size.width);
    let row = rng.gen_range(0..size.height);

    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: crossterm::event::KeyModifiers::empty(),
    })
}
