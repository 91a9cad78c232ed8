use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{debug, info};

use sectionflow_core::{
    deck::Deck,
    replay::ReplayScript,
    runtime::{self, Snapshot},
    AnimatableGroup, AppConfig, GroupKind, NavigationController, NavigationEvent, SectionState,
    SectionSurface,
};
use sectionflow_tui::surface::DeckSurface;

/// What the replayed navigator moves through
pub enum Source {
    Sections(usize),
    Deck(PathBuf),
}

/// Surface without any presentation; state changes only show up in the log
pub struct HeadlessSurface;

impl SectionSurface for HeadlessSurface {
    fn add_state(&mut self, section: usize, state: SectionState, _at: std::time::Instant) {
        debug!("section {} +{}", section, state);
    }

    fn remove_state(&mut self, section: usize, state: SectionState) {
        debug!("section {} -{}", section, state);
    }

    fn group_mut(&mut self, _section: usize, _kind: GroupKind) -> Option<&mut dyn AnimatableGroup> {
        None
    }
}

/// Event observed during playback, stamped with time since start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observed {
    pub elapsed: Duration,
    pub event: NavigationEvent,
}

pub async fn run(
    config: &AppConfig,
    source: Source,
    script_path: &Path,
    speed: f64,
    json: bool,
) -> Result<()> {
    let script = ReplayScript::load(script_path)
        .with_context(|| format!("Failed to load script {}", script_path.display()))?;
    info!("Replaying {} input events", script.len());

    let nav = config.navigation.clone();
    let (observed, snapshot) = match source {
        Source::Sections(count) => {
            let controller = NavigationController::new(HeadlessSurface, count, nav)?;
            play(controller, &script, speed, |o| print_event(o, json)).await?
        }
        Source::Deck(path) => {
            let deck = Deck::load(&path)
                .with_context(|| format!("Failed to load deck {}", path.display()))?;
            let controller =
                NavigationController::new(DeckSurface::from_deck(&deck), deck.len(), nav)?;
            play(controller, &script, speed, |o| print_event(o, json)).await?
        }
    };

    debug!("{} navigation events", observed.len());
    if json {
        println!("{}", serde_json::to_string(&snapshot)?);
    } else {
        println!("final: {}", serde_json::to_string_pretty(&snapshot)?);
    }
    Ok(())
}

fn print_event(observed: &Observed, json: bool) {
    if json {
        let line = serde_json::json!({
            "at_ms": observed.elapsed.as_millis() as u64,
            "event": observed.event,
        });
        println!("{}", line);
        return;
    }

    let at = observed.elapsed.as_millis();
    match observed.event {
        NavigationEvent::SectionChanged { from, to, direction } => {
            println!("{:>6}ms  {} {} -> {}", at, direction, from, to)
        }
        NavigationEvent::AnimationRestarted { section } => {
            println!("{:>6}ms  restart animations in {}", at, section)
        }
        NavigationEvent::Settled { from, to } => println!("{:>6}ms  settled {} -> {}", at, from, to),
        NavigationEvent::RequestDropped { direction } => {
            println!("{:>6}ms  dropped {} request", at, direction)
        }
    }
}

/// Playback offset of every step at `speed`
fn scaled_offsets(script: &ReplayScript, speed: f64) -> Result<Vec<Duration>> {
    if !(speed.is_finite() && speed > 0.0) {
        bail!("--speed must be a positive number, got {}", speed);
    }
    script
        .steps
        .iter()
        .map(|step| {
            Duration::try_from_secs_f64(step.offset().as_secs_f64() / speed).with_context(|| {
                format!("step at {}ms cannot be played at speed {}", step.at_ms, speed)
            })
        })
        .collect()
}

/// Feed `script` to a navigator actor and wait for it to go quiet
///
/// Script offsets are divided by `speed`; controller timings always run in real time.
pub async fn play<S, F>(
    controller: NavigationController<S>,
    script: &ReplayScript,
    speed: f64,
    mut on_event: F,
) -> Result<(Vec<Observed>, Snapshot)>
where
    S: SectionSurface + Send + 'static,
    F: FnMut(&Observed),
{
    let offsets = scaled_offsets(script, speed)?;
    let nav = controller.config().clone();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let start = Instant::now();
    let handle = runtime::spawn(controller, Some(event_tx));

    let mut observed = Vec::new();
    let mut record = |event: NavigationEvent, observed: &mut Vec<Observed>| {
        let o = Observed {
            elapsed: start.elapsed(),
            event,
        };
        on_event(&o);
        observed.push(o);
    };

    for (step, offset) in script.steps.iter().zip(offsets) {
        let Some(at) = start.checked_add(offset) else {
            bail!("step at {}ms is too far in the future", step.at_ms);
        };
        loop {
            tokio::select! {
                _ = tokio::time::sleep_until(at) => break,
                Some(event) = event_rx.recv() => record(event, &mut observed),
            }
        }
        let outcome = handle.send_input(step.event.clone()).await?;
        debug!("{:?} default prevented: {}", step.event, outcome.default_prevented);
    }

    // Quiet once the queue is drained and the last slide and cooldown are over
    let linger = nav.settle_delay().max(nav.swipe_cooldown()) + nav.drain_interval();
    loop {
        let snapshot = handle.snapshot().await?;
        if !snapshot.processing_queue && !snapshot.scrolling {
            break;
        }
        let until = Instant::now() + nav.drain_interval();
        loop {
            tokio::select! {
                _ = tokio::time::sleep_until(until) => break,
                Some(event) = event_rx.recv() => record(event, &mut observed),
            }
        }
    }
    let until = Instant::now() + linger;
    loop {
        tokio::select! {
            _ = tokio::time::sleep_until(until) => break,
            Some(event) = event_rx.recv() => record(event, &mut observed),
        }
    }

    let snapshot = handle.snapshot().await?;
    handle.shutdown().await?;
    while let Ok(event) = event_rx.try_recv() {
        record(event, &mut observed);
    }

    Ok((observed, snapshot))
}
