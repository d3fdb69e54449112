use crate::client::LightClient;
use crate::shutdown::{ShutdownCoordinator, ShutdownHandle};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, AppEventSender, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::plain::render_plain;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the full-screen UI until the user quits or a signal arrives.
///
/// Mounts on the terminal, issues the one fetch, then draws on every event.
pub fn run(
    app: &mut App,
    client: Arc<LightClient>,
    runtime: &Handle,
    tick_rate: Duration,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let shutdown = ShutdownCoordinator::new();
    let events = EventHandler::with_terminal_input(tick_rate, shutdown.handle());
    spawn_signal_listener(runtime, shutdown.handle(), events.sender());

    app.start(client, runtime, events.sender());

    loop {
        terminal.draw(|frame| draw(frame, app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(app, key),
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize(..)) => {}
            Ok(AppEvent::LightsFetched(result)) => app.on_lights_fetched(result),
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    app.teardown();
    shutdown.signal();
    drop(guard);
    Ok(())
}

/// Issue the one fetch, wait for its outcome, and render it as text.
///
/// Fetch failures are not errors here: the output simply shows no lights.
pub fn run_headless(app: &mut App, client: Arc<LightClient>, runtime: &Handle) -> String {
    let events = EventHandler::channel();
    app.start(client, runtime, events.sender());

    loop {
        match events.next(Duration::from_millis(100)) {
            Ok(AppEvent::LightsFetched(result)) => {
                app.on_lights_fetched(result);
                break;
            }
            Err(RecvTimeoutError::Timeout) if app.fetch_lost() => {
                // The result may have been queued between the timeout and the check
                match events.next(Duration::ZERO) {
                    Ok(AppEvent::LightsFetched(result)) => app.on_lights_fetched(result),
                    _ => app.on_fetch_lost(),
                }
                break;
            }
            Ok(_) | Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    render_plain(app)
}

fn spawn_signal_listener(runtime: &Handle, shutdown: ShutdownHandle, events: AppEventSender) {
    runtime.spawn(async move {
        tokio::select! {
            _ = wait_for_signal() => {
                tracing::info!("Signal received");
                let _ = events.send(AppEvent::Shutdown);
                shutdown.signal();
            }
            _ = shutdown.wait() => {}
        }
    });
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let Ok(mut terminate) = signal(SignalKind::terminate()) else {
        let _ = tokio::signal::ctrl_c().await;
        return;
    };
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {}
        _ = terminate.recv() => {}
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
