//! Actor runtime
//!
//! Moves a [`NavigationController`] into a tokio task that owns it
//! exclusively. Input arrives as messages, timers are served by sleeping
//! until the controller's next deadline, and every [`NavigationEvent`] is
//! forwarded to an optional channel.

use serde::Serialize;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::input::{EventOutcome, InputEvent};
use crate::navigation::{Direction, NavigationController, NavigationEvent};
use crate::section::SectionSurface;
use crate::{Error, Result};

/// Point-in-time view of the controller state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub current_section: usize,
    pub section_count: usize,
    pub pending: Vec<Direction>,
    pub processing_queue: bool,
    pub scrolling: bool,
    pub visited: Vec<usize>,
    pub active: Vec<usize>,
}

impl Snapshot {
    pub fn capture<S: SectionSurface>(controller: &NavigationController<S>) -> Self {
        Self {
            current_section: controller.current_section(),
            section_count: controller.section_count(),
            pending: controller.pending(),
            processing_queue: controller.is_processing_queue(),
            scrolling: controller.is_scrolling(),
            visited: controller.visits().sorted(),
            active: controller.registry().active_indices(),
        }
    }
}

enum Command {
    Input {
        event: InputEvent,
        reply: oneshot::Sender<EventOutcome>,
    },
    Snapshot(oneshot::Sender<Snapshot>),
}

/// Handle to a running navigator actor
pub struct NavigatorHandle<S> {
    commands: mpsc::UnboundedSender<Command>,
    shutdown: watch::Sender<bool>,
    task: JoinHandle<NavigationController<S>>,
}

/// Idle wait when no timer is pending
const IDLE_WAIT: Duration = Duration::from_secs(3600);

/// Bootstrap `controller` and run it on its own task
pub fn spawn<S>(
    controller: NavigationController<S>,
    event_tx: Option<mpsc::UnboundedSender<NavigationEvent>>,
) -> NavigatorHandle<S>
where
    S: SectionSurface + Send + 'static,
{
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let task = tokio::spawn(run(controller, command_rx, shutdown_rx, event_tx));

    NavigatorHandle {
        commands: command_tx,
        shutdown: shutdown_tx,
        task,
    }
}

async fn run<S: SectionSurface>(
    mut controller: NavigationController<S>,
    mut commands: mpsc::UnboundedReceiver<Command>,
    mut shutdown: watch::Receiver<bool>,
    event_tx: Option<mpsc::UnboundedSender<NavigationEvent>>,
) -> NavigationController<S> {
    controller.bootstrap(Instant::now().into_std());
    info!("Navigator actor started");

    loop {
        forward_events(&mut controller, event_tx.as_ref());

        let wake_at = controller
            .next_deadline()
            .map(Instant::from_std)
            .unwrap_or_else(|| Instant::now() + IDLE_WAIT);

        tokio::select! {
            result = shutdown.changed() => {
                if result.is_err() || *shutdown.borrow() {
                    info!("Navigator received shutdown signal");
                    break;
                }
            }

            command = commands.recv() => {
                match command {
                    Some(Command::Input { event, reply }) => {
                        debug!("Input {:?}", event);
                        let outcome = controller.handle_event(event, Instant::now().into_std());
                        let _ = reply.send(outcome);
                    }
                    Some(Command::Snapshot(reply)) => {
                        let _ = reply.send(Snapshot::capture(&controller));
                    }
                    None => {
                        debug!("All navigator handles dropped");
                        break;
                    }
                }
            }

            _ = tokio::time::sleep_until(wake_at) => {
                controller.advance(Instant::now().into_std());
            }
        }
    }

    forward_events(&mut controller, event_tx.as_ref());
    info!("Navigator actor stopped");
    controller
}

fn forward_events<S: SectionSurface>(
    controller: &mut NavigationController<S>,
    event_tx: Option<&mpsc::UnboundedSender<NavigationEvent>>,
) {
    let events = controller.take_events();
    let Some(tx) = event_tx else {
        return;
    };
    for event in events {
        if tx.send(event).is_err() {
            warn!("Failed to send navigation event: receiver dropped");
            return;
        }
    }
}

impl<S> NavigatorHandle<S> {
    /// Deliver an input event and wait for the controller to handle it
    pub async fn send_input(&self, event: InputEvent) -> Result<EventOutcome> {
        let (reply, rx) = oneshot::channel();
        self.commands
            .send(Command::Input { event, reply })
            .map_err(|_| Error::ActorClosed)?;
        rx.await.map_err(|_| Error::ActorClosed)
    }

    pub async fn snapshot(&self) -> Result<Snapshot> {
        let (reply, rx) = oneshot::channel();
        self.commands
            .send(Command::Snapshot(reply))
            .map_err(|_| Error::ActorClosed)?;
        rx.await.map_err(|_| Error::ActorClosed)
    }

    /// Stop the actor and get the controller back
    pub async fn shutdown(self) -> Result<NavigationController<S>> {
        let _ = self.shutdown.send(true);
        self.task.await.map_err(|_| Error::ActorClosed)
    }
}
