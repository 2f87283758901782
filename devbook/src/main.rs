//! A simple TUI to sign up for and log into devbook from the command line

/// The "functional core" to the main module's "imperative shell"
mod app;

/// Configuration and argument parsing
mod config;

/// Tab-order enums for form fields
mod form_fields;

use app::{App, EffectContext};
use clap::Parser;
use crossterm::event::{Event, EventStream};
use devbook_core::Client;
use futures::StreamExt;
use ratatui::DefaultTerminal;
use std::{io, process::ExitCode, sync::Arc};
use tokio::{
    sync::mpsc::{unbounded_channel, UnboundedSender},
    task::JoinHandle,
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> io::Result<ExitCode> {
    let config = config::Config::parse();

    let client = Client::new(&config.server);
    if let Err(err) = client.base_url() {
        eprintln!("can't use {} as a server: {err}", config.server);
        return Ok(ExitCode::FAILURE);
    }

    // The terminal belongs to the UI, so logs go to a file instead. Hold on to
    // the guard so buffered lines get flushed on the way out.
    let _log_guard = init_tracing(&config).await?;
    tracing::info!(server = %client.server(), "starting");

    let mut terminal = ratatui::init();
    terminal.clear()?;
    let res = run(terminal, Arc::new(EffectContext::new(client))).await;
    ratatui::restore();
    res
}

/// Send `tracing` output to `devbook.log` in the data directory, filtered by
/// `RUST_LOG`.
async fn init_tracing(config: &config::Config) -> io::Result<WorkerGuard> {
    let dir = config.ensure_data_dir().await?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(
        &dir,
        "devbook.log",
    ));

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer),
        )
        .init();

    Ok(guard)
}

/// Manage the lifecycle of the app
async fn run(mut terminal: DefaultTerminal, conn: Arc<EffectContext>) -> io::Result<ExitCode> {
    let mut app = App::new();

    // We expect side-effectful behaviors (that is, network access) to take
    // place via async tasks. Once those tasks are done, we read their results
    // off of a channel. We keep track of outstanding effects so we can exit
    // cleanly.
    let (effect_tx, mut effect_rx) = unbounded_channel();
    let mut outstanding_effects: Vec<JoinHandle<()>> = Vec::with_capacity(1);

    terminal.draw(|frame| app.render(frame))?;

    let mut event_stream = EventStream::new();

    // Start our event loop!
    loop {
        // First thing we do is wait for an event. This can be either external
        // input or the async result of a effect. This is an `Option<_>` because
        // we don't necessarily need to pay attention to every single piece of
        // external input.
        let next_action_opt = tokio::select! {
            event_opt = event_stream.next() => {
                match event_opt {
                    Some(Ok(Event::Key(key_event))) => {
                        Some(app::Action::Key(key_event))
                    }
                    Some(Err(err)) => {
                        Some(app::Action::Problem(err.to_string()))
                    }
                    _ => None,
                }
            },

            effect_opt = effect_rx.recv() => {
                effect_opt
            }
        };

        // Once we have an action, we send it to `app.handle` to get any next
        // effects. Requests go out as separate tasks; nothing stops the user
        // from submitting again while one is in flight.
        if let Some(action) = next_action_opt {
            for effect in app.handle(action) {
                outstanding_effects.push(spawn_effect_task(
                    effect_tx.clone(),
                    Arc::clone(&conn),
                    effect,
                ));
            }
        }

        // Now that we handle the event, we re-render to display any changes the
        // app cares about.
        terminal.draw(|frame| app.render(frame))?;

        // If the message we just handled was from an outstanding effect, we
        // need to remove the completed `JoinHandle` from the list. This list
        // should never be too long (since we do this on every pass through the
        // event loop) so a full scan is fine.
        outstanding_effects.retain(|handle| !handle.is_finished());

        // Finally, if the app indicates that it should exit, we wait for all
        // outstanding requests to finish before exiting the loop with the exit
        // code from the app.
        if let Some(code) = app.should_exit() {
            for effect in outstanding_effects.drain(..) {
                if let Err(err) = effect.await {
                    tracing::error!(?err, "effect task failed while exiting");
                }
            }

            return Ok(code);
        }
    }
}

/// Spawn a task to run an effect and send the next action to the app.
fn spawn_effect_task(
    effect_tx: UnboundedSender<app::Action>,
    conn: Arc<EffectContext>,
    effect: app::Effect,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let next_action = effect.run(&conn).await;

        // If the channel is closed we're shutting down, and nobody is left to
        // show the result to.
        if effect_tx.send(next_action).is_err() {
            tracing::debug!("dropping effect result after shutdown");
        }
    })
}
