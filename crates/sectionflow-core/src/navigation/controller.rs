use std::time::Instant;

use tracing::{debug, info};

use super::queue::{PushOutcome, ScrollQueue};
use super::transition::{Task, TransitionEngine};
use super::{Direction, NavigationEvent};
use crate::config::NavigationConfig;
use crate::input::{swipe_direction, wheel_direction, EventOutcome, InputEvent, KeyIntent};
use crate::section::{SectionRegistry, SectionSurface, VisitTracker};
use crate::timer::TimerQueue;
use crate::Result;

/// Section navigation state machine
///
/// Owns every piece of mutable navigation state: the current section, the
/// scroll queue, the guard flags and the pending timers. It never reads the
/// clock itself; callers pass `now` into every operation and call
/// [`advance`](Self::advance) to fire due timers, which makes the controller
/// equally usable from a render loop, a tokio actor or a test.
///
/// `current_section` changes synchronously with each transition, so queued
/// logic always sees the post-transition index even while the slide
/// animation is still running.
pub struct NavigationController<S> {
    engine: TransitionEngine<S>,
    config: NavigationConfig,
    queue: ScrollQueue,
    timers: TimerQueue<Task>,
    current: usize,
    /// Drain loop is scheduled or running
    processing_queue: bool,
    /// Swipe cooldown window is open
    scrolling: bool,
    touch_start_y: Option<f64>,
    bootstrapped: bool,
    events: Vec<NavigationEvent>,
}

impl<S: SectionSurface> NavigationController<S> {
    /// Create a controller for `section_count` sections drawn on `surface`.
    ///
    /// Call [`bootstrap`](Self::bootstrap) before feeding input.
    pub fn new(surface: S, section_count: usize, config: NavigationConfig) -> Result<Self> {
        let registry = SectionRegistry::new(section_count)?;
        let engine = TransitionEngine::new(
            surface,
            registry,
            config.entry_delay(),
            config.settle_delay(),
        );
        let queue = ScrollQueue::new(config.queue_capacity, config.overflow_policy);

        Ok(Self {
            engine,
            config,
            queue,
            timers: TimerQueue::new(),
            current: 0,
            processing_queue: false,
            scrolling: false,
            touch_start_y: None,
            bootstrapped: false,
            events: Vec::new(),
        })
    }

    /// Activate the first section and schedule its entry animation
    pub fn bootstrap(&mut self, now: Instant) {
        if self.bootstrapped {
            return;
        }
        self.bootstrapped = true;
        self.current = 0;
        self.engine
            .activate_initial(now, self.config.startup_delay(), &mut self.timers);
        info!(
            "Navigator ready: {} sections, drain every {}ms",
            self.section_count(),
            self.config.drain_interval_ms
        );
    }

    pub fn current_section(&self) -> usize {
        self.current
    }

    pub fn section_count(&self) -> usize {
        self.engine.registry().len()
    }

    pub fn is_last(&self) -> bool {
        self.current == self.engine.registry().last_index()
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_processing_queue(&self) -> bool {
        self.processing_queue
    }

    pub fn is_scrolling(&self) -> bool {
        self.scrolling
    }

    /// Pending scroll requests, head first
    pub fn pending(&self) -> Vec<Direction> {
        self.queue.to_vec()
    }

    pub fn registry(&self) -> &SectionRegistry {
        self.engine.registry()
    }

    pub fn visits(&self) -> &VisitTracker {
        self.engine.visits()
    }

    pub fn surface(&self) -> &S {
        self.engine.surface()
    }

    pub fn surface_mut(&mut self) -> &mut S {
        self.engine.surface_mut()
    }

    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    /// Earliest instant at which [`advance`](Self::advance) has work to do
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Events produced since the last call
    pub fn take_events(&mut self) -> Vec<NavigationEvent> {
        std::mem::take(&mut self.events)
    }

    /// Move to the next section unless already on the last one
    pub fn step_forward(&mut self, now: Instant) {
        if !self.is_last() {
            self.transition_to(self.current + 1, Direction::Forward, now);
        }
    }

    /// Move to the previous section unless already on the first one
    pub fn step_backward(&mut self, now: Instant) {
        if !self.is_first() {
            self.transition_to(self.current - 1, Direction::Backward, now);
        }
    }

    pub fn step(&mut self, direction: Direction, now: Instant) {
        match direction {
            Direction::Forward => self.step_forward(now),
            Direction::Backward => self.step_backward(now),
        }
    }

    /// Go straight to `index`; out-of-range or current indices are ignored.
    ///
    /// Returns whether a transition happened.
    pub fn jump_to(&mut self, index: usize, now: Instant) -> bool {
        if !self.engine.registry().contains(index) || index == self.current {
            return false;
        }
        self.transition_to(index, Direction::between(self.current, index), now);
        true
    }

    fn transition_to(&mut self, index: usize, direction: Direction, now: Instant) {
        let from = self.current;
        self.engine.transition(
            from,
            index,
            direction,
            now,
            &mut self.timers,
            &mut self.events,
        );
        self.current = index;
    }

    /// Queue a scroll request and start the drain loop if it is idle
    pub fn enqueue(&mut self, direction: Direction, now: Instant) {
        match self.queue.push(direction) {
            PushOutcome::Queued => {}
            PushOutcome::Evicted(dropped) => {
                debug!("Scroll queue full, dropped oldest {} request", dropped);
                self.events
                    .push(NavigationEvent::RequestDropped { direction: dropped });
            }
            PushOutcome::Rejected => {
                debug!("Scroll queue full, rejected {} request", direction);
                self.events.push(NavigationEvent::RequestDropped { direction });
            }
        }

        if !self.processing_queue {
            self.drain_step(now);
        }
    }

    /// Drop every queued request that has not started yet
    pub fn clear_queue(&mut self) {
        self.queue.clear();
    }

    fn drain_step(&mut self, now: Instant) {
        let Some(direction) = self.queue.pop() else {
            self.processing_queue = false;
            return;
        };
        self.processing_queue = true;

        match direction {
            Direction::Forward if !self.is_last() => self.step_forward(now),
            Direction::Backward if !self.is_first() => self.step_backward(now),
            _ => debug!(
                "Dropped {} request at section {}",
                direction, self.current
            ),
        }

        self.timers
            .schedule(now, self.config.drain_interval(), Task::DrainStep);
    }

    /// Feed one normalized input event
    pub fn handle_event(&mut self, event: InputEvent, now: Instant) -> EventOutcome {
        match event {
            InputEvent::Wheel { delta_y } => {
                self.enqueue(wheel_direction(delta_y), now);
                EventOutcome::prevented()
            }
            InputEvent::TouchStart { y } => {
                self.touch_start_y = Some(y);
                EventOutcome::passthrough()
            }
            InputEvent::TouchEnd { y } => {
                self.handle_touch_end(y, now);
                EventOutcome::passthrough()
            }
            InputEvent::Key(key) => match key.intent() {
                Some(KeyIntent::Enqueue(direction)) => {
                    self.enqueue(direction, now);
                    EventOutcome::prevented()
                }
                Some(KeyIntent::JumpFirst) => {
                    self.clear_queue();
                    self.jump_to(0, now);
                    EventOutcome::prevented()
                }
                Some(KeyIntent::JumpLast) => {
                    self.clear_queue();
                    let last = self.engine.registry().last_index();
                    self.jump_to(last, now);
                    EventOutcome::prevented()
                }
                None => EventOutcome::passthrough(),
            },
        }
    }

    fn handle_touch_end(&mut self, end_y: f64, now: Instant) {
        let start_y = self.touch_start_y.take();
        if self.scrolling {
            debug!("Swipe ignored during cooldown");
            return;
        }
        let Some(start_y) = start_y else {
            return;
        };
        let Some(direction) =
            swipe_direction(start_y, end_y, self.config.swipe_threshold_px)
        else {
            return;
        };

        self.scrolling = true;
        self.step(direction, now);
        self.timers
            .schedule(now, self.config.swipe_cooldown(), Task::SwipeCooldownEnd);
    }

    /// Fire every timer due at `now`, in order. Returns how many fired.
    ///
    /// Each task runs at its own deadline, so follow-up timers keep their
    /// exact spacing even if the caller is late.
    pub fn advance(&mut self, now: Instant) -> usize {
        let mut fired = 0;
        while let Some((deadline, task)) = self.timers.pop_due(now) {
            self.run_task(task, deadline);
            fired += 1;
        }
        fired
    }

    fn run_task(&mut self, task: Task, at: Instant) {
        match task {
            Task::RestartAnimations(section) => {
                self.engine.restart_animations(section, at, &mut self.events)
            }
            Task::Settle { from, to } => self.engine.settle(from, to, &mut self.events),
            Task::DrainStep => self.drain_step(at),
            Task::SwipeCooldownEnd => self.scrolling = false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OverflowPolicy;
    use crate::input::Key;
    use crate::section::SectionState;
    use crate::testing::RecordingSurface;
    use std::time::Duration;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn controller(count: usize) -> (NavigationController<RecordingSurface>, Instant) {
        controller_with(count, NavigationConfig::default())
    }

    fn controller_with(
        count: usize,
        config: NavigationConfig,
    ) -> (NavigationController<RecordingSurface>, Instant) {
        let t0 = Instant::now();
        let mut nav =
            NavigationController::new(RecordingSurface::with_all_groups(count), count, config)
                .unwrap();
        nav.bootstrap(t0);
        (nav, t0)
    }

    fn key(id: &str) -> InputEvent {
        InputEvent::Key(Key::from_identifier(id))
    }

    fn changes(events: &[NavigationEvent]) -> Vec<(usize, usize)> {
        events
            .iter()
            .filter_map(|e| match e {
                NavigationEvent::SectionChanged { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_zero_sections_rejected() {
        let result = NavigationController::new(
            RecordingSurface::new(0),
            0,
            NavigationConfig::default(),
        );
        assert!(matches!(result, Err(crate::Error::EmptyRegistry)));
    }

    #[test]
    fn test_bootstrap() {
        let (mut nav, t0) = controller(3);
        assert_eq!(nav.current_section(), 0);
        assert_eq!(nav.registry().active_indices(), vec![0]);
        assert!(nav.visits().contains(0));
        assert!(nav.surface().native_scroll_disabled);

        nav.advance(t0 + ms(299));
        assert_eq!(nav.surface().entry_animations(0), 0);
        nav.advance(t0 + ms(300));
        assert_eq!(nav.surface().entry_animations(0), 1);

        // second bootstrap is a no-op
        nav.bootstrap(t0 + ms(400));
        nav.advance(t0 + ms(2000));
        assert_eq!(nav.surface().entry_animations(0), 1);
    }

    #[test]
    fn test_single_active_section_after_any_transition() {
        for i in 0..4 {
            for j in 0..4 {
                if i == j {
                    continue;
                }
                let (mut nav, t0) = controller(4);
                nav.jump_to(i, t0);
                nav.advance(t0 + ms(1000));
                assert!(nav.jump_to(j, t0 + ms(1000)));
                nav.advance(t0 + ms(2000));

                assert_eq!(nav.registry().active_indices(), vec![j], "{i} -> {j}");
                assert!(nav.registry().iter().all(|s| !s.is_transitioning()));
            }
        }
    }

    #[test]
    fn test_boundary_steps_are_noops() {
        let (mut nav, t0) = controller(3);
        let log_len = nav.surface().log.len();
        nav.step_backward(t0);
        assert_eq!(nav.current_section(), 0);
        assert_eq!(nav.visits().sorted(), vec![0]);
        assert_eq!(nav.surface().log.len(), log_len);

        nav.jump_to(2, t0);
        let log_len = nav.surface().log.len();
        let visited = nav.visits().sorted();
        nav.step_forward(t0);
        assert_eq!(nav.current_section(), 2);
        assert_eq!(nav.visits().sorted(), visited);
        assert_eq!(nav.surface().log.len(), log_len);
    }

    #[test]
    fn test_jump_to_ignores_invalid_targets() {
        let (mut nav, t0) = controller(3);
        assert!(!nav.jump_to(3, t0));
        assert!(!nav.jump_to(0, t0));
        assert!(nav.jump_to(2, t0));
        assert!(nav.jump_to(0, t0));
        assert_eq!(
            changes(&nav.take_events()),
            vec![(0, 2), (2, 0)]
        );
    }

    #[test]
    fn test_jump_direction_follows_index_order() {
        let (mut nav, t0) = controller(4);
        nav.jump_to(3, t0);
        assert!(nav.registry().get(3).unwrap().has(SectionState::SlideInFromBottom));
        nav.advance(t0 + ms(1000));
        nav.jump_to(1, t0 + ms(1000));
        assert!(nav.registry().get(3).unwrap().has(SectionState::SlideOutDown));
        assert!(nav.registry().get(1).unwrap().has(SectionState::SlideInFromTop));
    }

    #[test]
    fn test_entry_animation_fires_once_per_section() {
        let (mut nav, t0) = controller(3);
        let mut now = t0;
        for _ in 0..3 {
            nav.step_forward(now);
            now += ms(1000);
            nav.advance(now);
            nav.step_backward(now);
            now += ms(1000);
            nav.advance(now);
        }

        assert_eq!(nav.surface().entry_animations(0), 1);
        assert_eq!(nav.surface().entry_animations(1), 1);
        assert_eq!(nav.surface().entry_animations(2), 0);
        assert_eq!(nav.surface().restarts(1), 4);
    }

    #[test]
    fn test_entry_animation_delay() {
        let (mut nav, t0) = controller(3);
        nav.step_forward(t0);
        assert!(nav.visits().contains(1));
        nav.advance(t0 + ms(99));
        assert_eq!(nav.surface().entry_animations(1), 0);
        nav.advance(t0 + ms(100));
        assert_eq!(nav.surface().entry_animations(1), 1);
    }

    #[test]
    fn test_surface_is_stamped_with_navigator_clock() {
        let (mut nav, t0) = controller(3);
        nav.step_forward(t0 + ms(50));

        // Driver polls late; restarts still carry their own deadlines
        nav.advance(t0 + ms(2000));

        let word = |section| {
            nav.surface().groups[&(section, crate::section::GroupKind::Word)].last_restart
        };
        assert_eq!(word(0), Some(t0 + ms(300)));
        assert_eq!(word(1), Some(t0 + ms(150)));
        assert!(nav
            .surface()
            .applied_at
            .iter()
            .any(|&(section, state, at)| section == 1
                && state == SectionState::SlideInFromBottom
                && at == t0 + ms(50)));
    }

    #[test]
    fn test_settle_after_delay() {
        let (mut nav, t0) = controller(3);
        nav.step_forward(t0);
        nav.advance(t0 + ms(699));
        assert!(nav.registry().get(0).unwrap().has(SectionState::SlideOutUp));
        nav.advance(t0 + ms(700));
        assert!(!nav.registry().get(0).unwrap().is_transitioning());
        assert!(!nav.registry().get(1).unwrap().is_transitioning());
    }

    #[test]
    fn test_queue_bound_drops_oldest() {
        let (mut nav, t0) = controller(10);
        // Start the loop so later requests stay queued.
        nav.enqueue(Direction::Forward, t0);
        nav.take_events();

        // A, B, C, D
        nav.enqueue(Direction::Backward, t0);
        nav.enqueue(Direction::Forward, t0);
        nav.enqueue(Direction::Forward, t0);
        nav.enqueue(Direction::Backward, t0);

        assert_eq!(
            nav.pending(),
            vec![Direction::Forward, Direction::Forward, Direction::Backward]
        );
        assert_eq!(
            nav.take_events(),
            vec![NavigationEvent::RequestDropped {
                direction: Direction::Backward
            }]
        );
    }

    #[test]
    fn test_reject_newest_policy() {
        let config = NavigationConfig {
            overflow_policy: OverflowPolicy::RejectNewest,
            ..Default::default()
        };
        let (mut nav, t0) = controller_with(10, config);
        nav.enqueue(Direction::Forward, t0);
        for direction in [
            Direction::Backward,
            Direction::Forward,
            Direction::Forward,
            Direction::Backward,
        ] {
            nav.enqueue(direction, t0);
        }
        assert_eq!(
            nav.pending(),
            vec![Direction::Backward, Direction::Forward, Direction::Forward]
        );
    }

    #[test]
    fn test_drain_is_fifo_one_transition_per_tick() {
        let (mut nav, t0) = controller(10);
        nav.enqueue(Direction::Forward, t0);
        nav.enqueue(Direction::Forward, t0);
        nav.enqueue(Direction::Backward, t0);
        nav.enqueue(Direction::Forward, t0);
        assert_eq!(nav.current_section(), 1);
        assert!(nav.is_processing_queue());

        nav.advance(t0 + ms(449));
        assert_eq!(nav.current_section(), 1);
        nav.advance(t0 + ms(450));
        assert_eq!(nav.current_section(), 2);
        nav.advance(t0 + ms(900));
        assert_eq!(nav.current_section(), 1);
        nav.advance(t0 + ms(1350));
        assert_eq!(nav.current_section(), 2);

        // empty queue: the next tick ends the loop
        assert!(nav.is_processing_queue());
        nav.advance(t0 + ms(1800));
        assert!(!nav.is_processing_queue());

        assert_eq!(
            changes(&nav.take_events()),
            vec![(0, 1), (1, 2), (2, 1), (1, 2)]
        );
    }

    #[test]
    fn test_drain_keeps_cadence_when_driver_is_late() {
        let (mut nav, t0) = controller(10);
        for _ in 0..3 {
            nav.enqueue(Direction::Forward, t0);
        }
        // A single late advance still processes the ticks at 450 and 900.
        nav.advance(t0 + ms(1000));
        assert_eq!(nav.current_section(), 3);

        nav.enqueue(Direction::Forward, t0 + ms(1000));
        nav.advance(t0 + ms(1349));
        assert_eq!(nav.current_section(), 3);
        nav.advance(t0 + ms(1350));
        assert_eq!(nav.current_section(), 4);
    }

    #[test]
    fn test_idle_loop_restarts_on_enqueue() {
        let (mut nav, t0) = controller(5);
        nav.enqueue(Direction::Forward, t0);
        nav.advance(t0 + ms(450));
        assert!(!nav.is_processing_queue());

        nav.enqueue(Direction::Forward, t0 + ms(2000));
        assert_eq!(nav.current_section(), 2);
        assert!(nav.is_processing_queue());
    }

    #[test]
    fn test_five_rapid_wheel_ticks_stop_at_last_section() {
        let (mut nav, t0) = controller(4);
        for _ in 0..5 {
            let outcome = nav.handle_event(InputEvent::Wheel { delta_y: 100.0 }, t0);
            assert!(outcome.default_prevented);
        }

        let mut now = t0;
        for _ in 0..10 {
            now += ms(450);
            nav.advance(now);
            assert!(nav.current_section() <= 3);
        }
        assert_eq!(nav.current_section(), 3);
        assert_eq!(
            changes(&nav.take_events()),
            vec![(0, 1), (1, 2), (2, 3)]
        );
        assert!(!nav.is_processing_queue());
    }

    #[test]
    fn test_wheel_up_at_first_section_is_dropped() {
        let (mut nav, t0) = controller(4);
        nav.handle_event(InputEvent::Wheel { delta_y: -1.0 }, t0);
        assert_eq!(nav.current_section(), 0);
        assert!(nav.is_processing_queue());
        nav.advance(t0 + ms(450));
        assert!(!nav.is_processing_queue());
    }

    #[test]
    fn test_swipe_steps_immediately_with_cooldown() {
        let (mut nav, t0) = controller(4);
        nav.handle_event(InputEvent::TouchStart { y: 500.0 }, t0);
        let outcome = nav.handle_event(InputEvent::TouchEnd { y: 400.0 }, t0);
        assert!(!outcome.default_prevented);
        assert_eq!(nav.current_section(), 1);
        assert!(nav.is_scrolling());
        assert!(nav.pending().is_empty());

        // second swipe inside the cooldown window
        nav.advance(t0 + ms(500));
        nav.handle_event(InputEvent::TouchStart { y: 500.0 }, t0 + ms(500));
        nav.handle_event(InputEvent::TouchEnd { y: 400.0 }, t0 + ms(600));
        assert_eq!(nav.current_section(), 1);

        nav.advance(t0 + ms(1000));
        assert!(!nav.is_scrolling());
        nav.handle_event(InputEvent::TouchStart { y: 500.0 }, t0 + ms(1100));
        nav.handle_event(InputEvent::TouchEnd { y: 400.0 }, t0 + ms(1100));
        assert_eq!(nav.current_section(), 2);
    }

    #[test]
    fn test_swipe_down_goes_back_and_short_swipes_ignored() {
        let (mut nav, t0) = controller(4);
        nav.jump_to(2, t0);

        nav.handle_event(InputEvent::TouchStart { y: 300.0 }, t0);
        nav.handle_event(InputEvent::TouchEnd { y: 340.0 }, t0);
        assert_eq!(nav.current_section(), 2);
        assert!(!nav.is_scrolling());

        nav.handle_event(InputEvent::TouchStart { y: 300.0 }, t0);
        nav.handle_event(InputEvent::TouchEnd { y: 420.0 }, t0);
        assert_eq!(nav.current_section(), 1);
    }

    #[test]
    fn test_touch_end_without_start_is_ignored() {
        let (mut nav, t0) = controller(4);
        nav.handle_event(InputEvent::TouchEnd { y: 0.0 }, t0);
        assert_eq!(nav.current_section(), 0);
        assert!(!nav.is_scrolling());
    }

    #[test]
    fn test_keyboard_queueing() {
        let (mut nav, t0) = controller(5);
        assert!(nav.handle_event(key("ArrowDown"), t0).default_prevented);
        assert!(nav.handle_event(key(" "), t0).default_prevented);
        assert!(nav.handle_event(key("PageDown"), t0).default_prevented);
        assert!(nav.handle_event(key("PageUp"), t0).default_prevented);
        assert!(!nav.handle_event(key("Enter"), t0).default_prevented);

        assert_eq!(nav.current_section(), 1);
        assert_eq!(
            nav.pending(),
            vec![Direction::Forward, Direction::Forward, Direction::Backward]
        );
        nav.advance(t0 + ms(2000));
        assert_eq!(nav.current_section(), 2);
    }

    #[test]
    fn test_home_and_end_clear_pending_requests() {
        let (mut nav, t0) = controller(5);
        nav.handle_event(key("ArrowDown"), t0);
        nav.handle_event(key("ArrowDown"), t0);
        nav.handle_event(key("ArrowDown"), t0);
        assert_eq!(nav.pending().len(), 2);

        nav.handle_event(key("End"), t0 + ms(10));
        assert!(nav.pending().is_empty());
        assert_eq!(nav.current_section(), 4);

        nav.advance(t0 + ms(3000));
        assert_eq!(nav.current_section(), 4);

        nav.handle_event(key("ArrowUp"), t0 + ms(3000));
        nav.handle_event(key("ArrowUp"), t0 + ms(3000));
        assert_eq!(nav.pending().len(), 1);
        nav.handle_event(key("Home"), t0 + ms(3010));
        assert!(nav.pending().is_empty());
        assert_eq!(nav.current_section(), 0);
        nav.advance(t0 + ms(6000));
        assert_eq!(nav.current_section(), 0);
    }

    #[test]
    fn test_home_at_first_section_is_noop() {
        let (mut nav, t0) = controller(3);
        assert!(nav.handle_event(key("Home"), t0).default_prevented);
        assert_eq!(nav.current_section(), 0);
        assert!(changes(&nav.take_events()).is_empty());
    }

    #[test]
    fn test_end_then_arrow_up() {
        let (mut nav, t0) = controller(5);
        // drain loop already running when End arrives
        nav.handle_event(key("ArrowDown"), t0);
        nav.handle_event(key("End"), t0 + ms(100));
        assert_eq!(nav.current_section(), 4);

        nav.handle_event(key("ArrowUp"), t0 + ms(200));
        assert_eq!(nav.current_section(), 4);
        assert_eq!(nav.pending(), vec![Direction::Backward]);

        nav.advance(t0 + ms(450));
        assert_eq!(nav.current_section(), 3);
        assert_eq!(
            changes(&nav.take_events()),
            vec![(0, 1), (1, 4), (4, 3)]
        );
    }

    #[test]
    fn test_shortened_timings_are_honoured() {
        let config = NavigationConfig {
            entry_delay_ms: 5,
            settle_delay_ms: 10,
            drain_interval_ms: 20,
            startup_delay_ms: 0,
            ..Default::default()
        };
        let (mut nav, t0) = controller_with(4, config);
        nav.advance(t0);
        assert_eq!(nav.surface().entry_animations(0), 1);

        nav.enqueue(Direction::Forward, t0);
        nav.enqueue(Direction::Forward, t0);
        nav.advance(t0 + ms(30));
        assert_eq!(nav.current_section(), 2);
        assert_eq!(nav.surface().entry_animations(2), 1);
        assert!(!nav.registry().get(1).unwrap().is_transitioning());
    }
}
