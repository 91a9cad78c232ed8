use std::sync::Arc;
use std::time::{Duration, Instant};

use sectionflow_core::deck::Deck;
use sectionflow_core::{AppConfig, NavigationController, NavigationEvent};
use tracing::{debug, info};

use crate::event::AppEvent;
use crate::input::{translate, Action};
use crate::keymap::{help_hint, Keymap};
use crate::slide::{SlideAnimator, UiConfigExt};
use crate::surface::DeckSurface;
use crate::theme::Theme;

/// Presenter state
pub struct App {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Deck being presented
    pub deck: Deck,
    /// Navigation state machine drawing onto the deck surface
    pub navigator: NavigationController<DeckSurface>,
    pub keymap: Keymap,
    pub theme: Theme,
    pub animator: SlideAnimator,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Last navigation event, shown in the status bar
    pub status_message: Option<String>,
    /// Key summary for the status bar, from the configured keymap
    pub help_hint: String,
}

impl App {
    pub fn new(config: Arc<AppConfig>, deck: Deck) -> sectionflow_core::Result<Self> {
        let surface = DeckSurface::from_deck(&deck);
        let navigator =
            NavigationController::new(surface, deck.len(), config.navigation.clone())?;
        let animator = SlideAnimator::new(config.navigation.settle_delay(), config.ui.easing);
        let keymap = Keymap::from_config(&config.keymap);
        let help_hint = help_hint(&config.keymap);

        Ok(Self {
            config,
            deck,
            navigator,
            keymap,
            theme: Theme::default(),
            animator,
            should_quit: false,
            status_message: None,
            help_hint,
        })
    }

    /// Activate the first section
    pub fn start(&mut self, now: Instant) {
        info!("Presenting {} sections", self.deck.len());
        self.navigator.bootstrap(now);
    }

    /// Handle one terminal event
    pub fn handle_event(&mut self, event: &AppEvent, now: Instant) {
        match translate(event, &self.keymap, self.config.ui.row_height_px) {
            Action::Navigate(input) => {
                let outcome = self.navigator.handle_event(input, now);
                debug!("Input handled, default prevented: {}", outcome.default_prevented);
            }
            Action::Quit => self.should_quit = true,
            Action::Redraw | Action::None => {}
        }
    }

    /// Fire due navigator timers and refresh the status line
    pub fn update(&mut self, now: Instant) {
        self.navigator.advance(now);
        for event in self.navigator.take_events() {
            if let Some(message) = describe(&event) {
                self.status_message = Some(message);
            }
        }
    }

    /// Whether a slide or reveal is in progress, so frames should come faster
    pub fn needs_fast_update(&self, now: Instant) -> bool {
        let step = self.reveal_step();
        self.navigator.surface().sections().iter().any(|view| {
            view.slide()
                .is_some_and(|(_, started)| self.animator.is_running(started, now))
                || view.groups().iter().any(|g| g.is_revealing(step, now))
        })
    }

    pub fn reveal_step(&self) -> Duration {
        self.config.ui.reveal_step()
    }
}

fn describe(event: &NavigationEvent) -> Option<String> {
    match event {
        NavigationEvent::SectionChanged { from, to, direction } => Some(format!(
            "{} {} -> {}",
            direction,
            from + 1,
            to + 1
        )),
        NavigationEvent::RequestDropped { direction } => {
            Some(format!("queue full, dropped {}", direction))
        }
        NavigationEvent::AnimationRestarted { .. } | NavigationEvent::Settled { .. } => None,
    }
}
