use std::time::{Duration, Instant};

use tracing::debug;

use super::{Direction, NavigationEvent};
use crate::section::{GroupKind, SectionRegistry, SectionState, SectionSurface, VisitTracker};
use crate::timer::TimerQueue;

/// Deferred work owned by the controller's timer queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Replay the entry animation of a section
    RestartAnimations(usize),
    /// Clear the slide states left by a transition
    Settle { from: usize, to: usize },
    /// Pop the next scroll request
    DrainStep,
    /// Accept swipes again
    SwipeCooldownEnd,
}

/// Performs the visible handoff between two sections.
///
/// Keeps the registry in step with the surface: every state change is
/// applied to both.
pub struct TransitionEngine<S> {
    surface: S,
    registry: SectionRegistry,
    visits: VisitTracker,
    entry_delay: Duration,
    settle_delay: Duration,
}

impl<S: SectionSurface> TransitionEngine<S> {
    pub fn new(
        surface: S,
        registry: SectionRegistry,
        entry_delay: Duration,
        settle_delay: Duration,
    ) -> Self {
        Self {
            surface,
            registry,
            visits: VisitTracker::new(),
            entry_delay,
            settle_delay,
        }
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    pub fn visits(&self) -> &VisitTracker {
        &self.visits
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn add(&mut self, section: usize, state: SectionState, at: Instant) {
        self.registry.add_state(section, state);
        self.surface.add_state(section, state, at);
    }

    fn remove(&mut self, section: usize, state: SectionState) {
        self.registry.remove_state(section, state);
        self.surface.remove_state(section, state);
    }

    /// Mark the first section active and schedule its entry animation
    pub fn activate_initial(
        &mut self,
        now: Instant,
        startup_delay: Duration,
        timers: &mut TimerQueue<Task>,
    ) {
        self.surface.disable_native_scroll();
        self.add(0, SectionState::Active, now);
        timers.schedule(now, startup_delay, Task::RestartAnimations(0));
        self.visits.mark(0);
    }

    /// Hand the viewport from `from` to `to`.
    ///
    /// Bounds and `from != to` are the caller's responsibility.
    pub fn transition(
        &mut self,
        from: usize,
        to: usize,
        direction: Direction,
        now: Instant,
        timers: &mut TimerQueue<Task>,
        events: &mut Vec<NavigationEvent>,
    ) {
        debug!("Transition {} -> {} ({})", from, to, direction);

        self.remove(from, SectionState::Active);
        self.add(from, direction.exit_state(), now);
        self.add(to, direction.entry_state(), now);
        self.add(to, SectionState::Active, now);

        // Marked when scheduled; a section restarts at most once
        if self.visits.mark(to) {
            timers.schedule(now, self.entry_delay, Task::RestartAnimations(to));
        }

        timers.schedule(now, self.settle_delay, Task::Settle { from, to });
        events.push(NavigationEvent::SectionChanged {
            from,
            to,
            direction,
        });
    }

    /// Restart every animated group the section exposes
    pub fn restart_animations(
        &mut self,
        section: usize,
        at: Instant,
        events: &mut Vec<NavigationEvent>,
    ) {
        let mut restarted = 0;
        for kind in GroupKind::ALL {
            if let Some(group) = self.surface.group_mut(section, kind) {
                group.restart(at);
                restarted += 1;
            }
        }
        debug!("Restarted {} animation groups in section {}", restarted, section);
        events.push(NavigationEvent::AnimationRestarted { section });
    }

    /// Return both sections of a finished transition to their steady state
    pub fn settle(&mut self, from: usize, to: usize, events: &mut Vec<NavigationEvent>) {
        self.remove(from, SectionState::SlideOutUp);
        self.remove(from, SectionState::SlideOutDown);
        self.remove(to, SectionState::SlideInFromBottom);
        self.remove(to, SectionState::SlideInFromTop);
        events.push(NavigationEvent::Settled { from, to });
    }
}
