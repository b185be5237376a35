//! Swipe-dismiss-and-advance state machine
//!
//! The controller owns the collection, the active index and the transient
//! visual state. Hosts feed it gestures and call [`SliderController::tick`]
//! every frame; the returned events tell the host when the active item
//! changed so it can fetch that item's display data.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::config::SliderConfig;

use super::effect::AnimationEffect;
use super::schedule::ScheduledTask;
use super::transition::Transition;
use super::visual::{Offset, Viewport, VisualState};

/// Interaction phase of the slider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Active item settled
    Idle,
    /// Offset follows the pointer
    Dragging,
    /// Short drag released, offset animating back to zero
    Returning,
    /// Active item flying out, removal scheduled
    Dismissing,
    /// Next item animating from its off-stage pose
    Entering,
    /// No items left
    Empty,
}

/// Direction a dismissed item leaves in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Up,
    Down,
}

/// Notifications produced by controller operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderEvent {
    /// A drag passed the threshold; the item at `index` will be removed
    Dismissed { index: usize, direction: SwipeDirection },
    /// The item at `index` was removed from the collection
    Removed { index: usize },
    /// A different item became active; `generation` tags display fetches
    ActiveChanged { index: usize, generation: u64 },
    /// The last item was removed
    Emptied,
    /// An animation finished and the active item is at rest
    Settled,
}

#[derive(Debug, Clone, Copy)]
struct PendingRemoval {
    index: usize,
    generation: u64,
    /// Where the dismissed item flies to
    target: Offset,
}

/// Start of the last entrance, kept so it can be replayed once the
/// incoming item's display data arrives
#[derive(Debug, Clone, Copy)]
struct Entrance {
    generation: u64,
    from: VisualState,
}

/// Slider state machine generic over the item type
#[derive(Debug)]
pub struct SliderController<T> {
    items: Vec<T>,
    current_index: usize,
    visual: VisualState,
    phase: Phase,
    effect: AnimationEffect,
    config: SliderConfig,
    viewport: Viewport,
    transition: Option<Transition>,
    removal: ScheduledTask<PendingRemoval>,
    entrance: Option<Entrance>,
    generation: u64,
}

impl<T> SliderController<T> {
    /// Create an empty controller; the effect is fixed from `config.effect`
    pub fn new(config: SliderConfig) -> Self {
        Self {
            items: Vec::new(),
            current_index: 0,
            visual: VisualState::settled(),
            phase: Phase::Empty,
            effect: config.effect,
            config,
            viewport: Viewport::default(),
            transition: None,
            removal: ScheduledTask::new(),
            entrance: None,
            generation: 0,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The single rendered item
    pub fn active(&self) -> Option<&T> {
        self.items.get(self.current_index)
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn visual(&self) -> VisualState {
        self.visual
    }

    #[inline]
    pub fn effect(&self) -> AnimationEffect {
        self.effect
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport = Viewport::new(width.max(0.0), height.max(0.0));
    }

    /// True while a transition runs or a removal is pending
    pub fn is_animating(&self) -> bool {
        self.transition.is_some() || self.removal.is_pending()
    }

    /// True when the host should render at animation frame rate
    pub fn needs_update(&self) -> bool {
        self.is_animating() || self.phase == Phase::Dragging
    }

    /// Replace the collection and return to the first item at rest
    pub fn reset(&mut self, items: Vec<T>) -> Vec<SliderEvent> {
        if self.removal.cancel().is_some() {
            debug!("Reset dropped a pending removal");
        }
        self.transition = None;
        self.entrance = None;
        self.items = items;
        self.current_index = 0;
        self.visual = VisualState::settled();
        self.generation += 1;

        info!("Slider reset with {} items", self.items.len());

        if self.items.is_empty() {
            self.phase = Phase::Empty;
            vec![SliderEvent::Emptied]
        } else {
            self.phase = Phase::Idle;
            vec![SliderEvent::ActiveChanged {
                index: 0,
                generation: self.generation,
            }]
        }
    }

    /// Make the item at `index` active without removing anything
    pub fn select(&mut self, index: usize, now: Instant) -> Vec<SliderEvent> {
        let mut events = self.flush_removal(now);
        if self.items.is_empty() || index >= self.items.len() {
            return events;
        }
        self.transition = None;
        self.entrance = None;
        self.visual = VisualState::settled();
        self.phase = Phase::Idle;
        if index != self.current_index {
            self.current_index = index;
            self.generation += 1;
            events.push(SliderEvent::ActiveChanged {
                index,
                generation: self.generation,
            });
        }
        events
    }

    /// Pointer moved; `vertical_delta` is the translation since drag start
    pub fn on_drag_changed(&mut self, vertical_delta: f64, now: Instant) -> Vec<SliderEvent> {
        let events = if self.phase == Phase::Dragging {
            Vec::new()
        } else {
            self.begin_drag(now)
        };
        if self.phase == Phase::Dragging {
            self.visual = self.visual.with_offset(Offset::vertical(vertical_delta));
        }
        events
    }

    /// Pointer released; dismisses past one third of the viewport height,
    /// snaps back otherwise
    pub fn on_drag_ended(&mut self, vertical_delta: f64, now: Instant) -> Vec<SliderEvent> {
        let mut events = if self.phase == Phase::Dragging {
            Vec::new()
        } else {
            self.begin_drag(now)
        };
        if self.phase != Phase::Dragging {
            return events;
        }

        self.visual = self.visual.with_offset(Offset::vertical(vertical_delta));
        let threshold = self.viewport.dismiss_threshold();

        if vertical_delta.abs() > threshold {
            let (direction, target) = if vertical_delta > 0.0 {
                (SwipeDirection::Down, self.viewport.height)
            } else {
                (SwipeDirection::Up, -self.viewport.height)
            };

            let target = Offset::vertical(target);
            self.start_transition(
                now,
                self.visual.with_offset(target),
                self.config.dismiss_duration(),
            );
            self.phase = Phase::Dismissing;

            let index = self.current_index;
            self.removal.schedule(
                now + self.config.dismiss_delay(),
                PendingRemoval {
                    index,
                    generation: self.generation,
                    target,
                },
            );
            info!(
                "Dismissing item {} {:?} (drag {:.1}, threshold {:.1})",
                index, direction, vertical_delta, threshold
            );
            events.push(SliderEvent::Dismissed { index, direction });
        } else {
            debug!(
                "Drag {:.1} within threshold {:.1}, snapping back",
                vertical_delta, threshold
            );
            self.start_transition(now, VisualState::settled(), self.config.snap_back_duration());
            self.phase = Phase::Returning;
        }

        events
    }

    /// Keyboard equivalent of a full-height drag
    pub fn swipe(&mut self, direction: SwipeDirection, now: Instant) -> Vec<SliderEvent> {
        let delta = match direction {
            SwipeDirection::Up => -self.viewport.height,
            SwipeDirection::Down => self.viewport.height,
        };
        self.on_drag_ended(delta, now)
    }

    /// Replay the entrance of the active item from its off-stage pose.
    ///
    /// Hosts call this when the display data of an item that entered after
    /// a removal becomes ready. Returns false when the active item did not
    /// enter that way or a gesture has taken over since.
    pub fn restart_entrance(&mut self, now: Instant) -> bool {
        let Some(entrance) = self.entrance.take() else {
            return false;
        };
        if entrance.generation != self.generation
            || !matches!(self.phase, Phase::Entering | Phase::Idle)
        {
            return false;
        }
        debug!("Restarting entrance of item {}", self.current_index);
        self.visual = entrance.from;
        self.start_transition(now, VisualState::settled(), self.config.entrance_duration());
        self.phase = Phase::Entering;
        true
    }

    /// Advance animations and fire the scheduled removal when due
    pub fn tick(&mut self, now: Instant) -> Vec<SliderEvent> {
        let mut events = Vec::new();

        if let Some(ref transition) = self.transition {
            self.visual = transition.sample(now);
            if transition.is_complete(now) {
                self.transition = None;
                if matches!(self.phase, Phase::Returning | Phase::Entering) {
                    self.phase = Phase::Idle;
                    events.push(SliderEvent::Settled);
                }
            }
        }

        if let Some(removal) = self.removal.take_due(now) {
            events.extend(self.remove(removal, now));
        }

        events
    }

    /// Start a drag, cancelling whatever was in flight
    fn begin_drag(&mut self, now: Instant) -> Vec<SliderEvent> {
        // The pending removal is executed rather than dropped so a committed
        // dismiss always removes its item.
        let events = self.flush_removal(now);
        if self.items.is_empty() {
            return events;
        }
        if self.transition.take().is_some() {
            debug!("Drag interrupted a running transition");
        }
        self.entrance = None;
        self.visual = VisualState::settled();
        self.phase = Phase::Dragging;
        events
    }

    fn flush_removal(&mut self, now: Instant) -> Vec<SliderEvent> {
        match self.removal.cancel() {
            Some(removal) => {
                debug!("Flushing pending removal of item {}", removal.index);
                self.remove(removal, now)
            }
            None => Vec::new(),
        }
    }

    fn remove(&mut self, removal: PendingRemoval, now: Instant) -> Vec<SliderEvent> {
        if removal.generation != self.generation || removal.index >= self.items.len() {
            debug!("Skipping stale removal of item {}", removal.index);
            return Vec::new();
        }

        self.items.remove(removal.index);
        self.generation += 1;
        let mut events = vec![SliderEvent::Removed { index: removal.index }];
        info!("Removed item {}, {} remaining", removal.index, self.items.len());

        if self.items.is_empty() {
            self.current_index = 0;
            self.visual = VisualState::settled();
            self.transition = None;
            self.entrance = None;
            self.phase = Phase::Empty;
            events.push(SliderEvent::Emptied);
            return events;
        }

        self.current_index = removal.index % self.items.len();

        // Unchanged pose fields take the dismiss end state
        let dismissed = self.visual.with_offset(removal.target);
        let posed = self.effect.pose().apply(dismissed, self.viewport);
        let start = if self.config.animate_scale_opacity {
            posed
        } else {
            VisualState::settled().with_offset(posed.offset)
        };
        self.visual = start;
        self.start_transition(now, VisualState::settled(), self.config.entrance_duration());
        self.phase = Phase::Entering;
        self.entrance = Some(Entrance {
            generation: self.generation,
            from: start,
        });

        events.push(SliderEvent::ActiveChanged {
            index: self.current_index,
            generation: self.generation,
        });
        events
    }

    fn start_transition(&mut self, now: Instant, to: VisualState, duration: Duration) {
        self.transition = Some(Transition::new(
            now,
            self.visual,
            to,
            duration,
            self.config.easing,
        ));
    }
}

impl SliderConfig {
    pub fn dismiss_duration(&self) -> Duration {
        Duration::from_millis(self.dismiss_duration_ms)
    }

    pub fn dismiss_delay(&self) -> Duration {
        Duration::from_millis(self.dismiss_delay_ms)
    }

    pub fn entrance_duration(&self) -> Duration {
        Duration::from_millis(self.entrance_duration_ms)
    }

    pub fn snap_back_duration(&self) -> Duration {
        Duration::from_millis(self.snap_back_duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f64 = 400.0;
    const HEIGHT: f64 = 800.0;

    fn controller(items: &[&'static str]) -> SliderController<&'static str> {
        controller_with(items, SliderConfig::default())
    }

    fn controller_with(items: &[&'static str], config: SliderConfig) -> SliderController<&'static str> {
        let mut slider = SliderController::new(config);
        slider.set_viewport(WIDTH, HEIGHT);
        slider.reset(items.to_vec());
        slider
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    /// Drive ticks until everything has settled
    fn run_to_rest<T>(slider: &mut SliderController<T>, start: Instant) -> Vec<SliderEvent> {
        let mut events = Vec::new();
        let mut now = start;
        for _ in 0..200 {
            now += ms(16);
            events.extend(slider.tick(now));
            if !slider.is_animating() {
                break;
            }
        }
        events
    }

    #[test]
    fn test_reset_populates_and_settles() {
        let slider = controller(&["A", "B"]);
        assert_eq!(slider.len(), 2);
        assert_eq!(slider.current_index(), 0);
        assert_eq!(slider.active(), Some(&"A"));
        assert_eq!(slider.phase(), Phase::Idle);
        assert!(slider.visual().is_settled());
    }

    #[test]
    fn test_reset_empty_is_empty_state() {
        let mut slider = controller(&["A"]);
        let events = slider.reset(Vec::new());
        assert_eq!(events, vec![SliderEvent::Emptied]);
        assert_eq!(slider.phase(), Phase::Empty);
        assert_eq!(slider.current_index(), 0);
    }

    #[test]
    fn test_drag_tracks_vertical_translation() {
        let now = Instant::now();
        let mut slider = controller(&["A", "B"]);
        slider.on_drag_changed(42.0, now);
        assert_eq!(slider.phase(), Phase::Dragging);
        assert_eq!(slider.visual().offset, Offset::new(0.0, 42.0));
        slider.on_drag_changed(-13.5, now + ms(10));
        assert_eq!(slider.visual().offset, Offset::new(0.0, -13.5));
    }

    #[test]
    fn test_short_drag_snaps_back_to_exactly_zero() {
        for delta in [0.0, 10.0, -150.0, HEIGHT / 3.0, -HEIGHT / 3.0] {
            let now = Instant::now();
            let mut slider = controller(&["A", "B"]);
            slider.on_drag_changed(delta, now);
            let events = slider.on_drag_ended(delta, now);
            assert!(events.is_empty());
            assert_eq!(slider.phase(), Phase::Returning);

            let events = run_to_rest(&mut slider, now);
            assert!(events.contains(&SliderEvent::Settled));
            assert_eq!(slider.phase(), Phase::Idle);
            assert_eq!(slider.visual().offset, Offset::ZERO, "delta {}", delta);
            assert_eq!(slider.len(), 2);
        }
    }

    #[test]
    fn test_dismiss_scenario_removes_active_item() {
        let now = Instant::now();
        let mut slider = controller(&["A", "B", "C"]);
        slider.select(1, now);
        assert_eq!(slider.active(), Some(&"B"));

        slider.on_drag_changed(500.0, now);
        let events = slider.on_drag_ended(500.0, now);
        assert_eq!(
            events,
            vec![SliderEvent::Dismissed { index: 1, direction: SwipeDirection::Down }]
        );
        assert_eq!(slider.phase(), Phase::Dismissing);

        // Nothing removed before the delay elapses
        assert!(slider.tick(now + ms(50)).is_empty());
        assert_eq!(slider.len(), 3);

        let events = slider.tick(now + ms(100));
        assert_eq!(events[0], SliderEvent::Removed { index: 1 });
        assert_eq!(slider.items(), &["A", "C"]);
        assert_eq!(slider.current_index(), 1);
        assert_eq!(slider.active(), Some(&"C"));
        assert_eq!(slider.phase(), Phase::Entering);
    }

    #[test]
    fn test_dismiss_moves_offset_toward_edge() {
        let now = Instant::now();
        let mut slider = controller(&["A", "B"]);
        slider.on_drag_ended(-300.0, now);
        slider.tick(now + ms(50));
        assert!(slider.visual().offset.y < -300.0);
        assert!(slider.visual().offset.y >= -HEIGHT);
    }

    #[test]
    fn test_last_item_dismiss_empties() {
        let now = Instant::now();
        let mut slider = controller(&["only"]);
        slider.on_drag_ended(HEIGHT / 2.0, now);
        let events = slider.tick(now + ms(100));
        assert_eq!(
            events,
            vec![SliderEvent::Removed { index: 0 }, SliderEvent::Emptied]
        );
        assert!(slider.is_empty());
        assert_eq!(slider.current_index(), 0);
        assert_eq!(slider.phase(), Phase::Empty);
        assert!(slider.visual().is_settled());
        assert!(!slider.is_animating());
    }

    #[test]
    fn test_gestures_ignored_when_empty() {
        let now = Instant::now();
        let mut slider = controller(&[]);
        assert!(slider.on_drag_changed(100.0, now).is_empty());
        assert!(slider.on_drag_ended(HEIGHT, now).is_empty());
        assert_eq!(slider.phase(), Phase::Empty);
        assert!(slider.visual().is_settled());
    }

    #[test]
    fn test_removal_index_wraps_for_every_position() {
        let labels = ["a", "b", "c", "d", "e", "f"];
        for n in 1..=labels.len() {
            for idx in 0..n {
                let now = Instant::now();
                let mut slider = controller(&labels[..n]);
                slider.select(idx, now);
                slider.swipe(SwipeDirection::Up, now);
                run_to_rest(&mut slider, now);

                let mut expected: Vec<_> = labels[..n].to_vec();
                expected.remove(idx);
                assert_eq!(slider.items(), expected.as_slice());
                if n > 1 {
                    assert_eq!(slider.current_index(), idx % (n - 1));
                } else {
                    assert_eq!(slider.current_index(), 0);
                    assert_eq!(slider.phase(), Phase::Empty);
                }
            }
        }
    }

    #[test]
    fn test_every_effect_ends_settled() {
        for effect in AnimationEffect::ALL {
            let now = Instant::now();
            let config = SliderConfig {
                effect,
                ..Default::default()
            };
            let mut slider = controller_with(&["A", "B", "C"], config);
            slider.on_drag_changed(400.0, now);
            slider.on_drag_ended(400.0, now);
            let events = run_to_rest(&mut slider, now);

            assert!(events.contains(&SliderEvent::Settled), "{}", effect);
            assert_eq!(slider.phase(), Phase::Idle, "{}", effect);
            assert_eq!(slider.visual(), VisualState::settled(), "{}", effect);
            assert_eq!(slider.len(), 2);
        }
    }

    #[test]
    fn test_entrance_starts_from_pose() {
        let now = Instant::now();
        let config = SliderConfig {
            effect: AnimationEffect::SlideInFromLeft,
            ..Default::default()
        };
        let mut slider = controller_with(&["A", "B"], config);
        slider.swipe(SwipeDirection::Down, now);
        slider.tick(now + ms(100));

        let visual = slider.visual();
        assert_eq!(visual.offset, Offset::new(-WIDTH, 0.0));
        assert_eq!(visual.scale, 0.0);
        assert_eq!(visual.opacity, 0.0);
    }

    #[test]
    fn test_unchanged_offset_enters_from_dismiss_edge() {
        for effect in [AnimationEffect::FadeIn, AnimationEffect::Rotate, AnimationEffect::Flip] {
            for (delta, edge) in [(400.0, HEIGHT), (-400.0, -HEIGHT)] {
                let now = Instant::now();
                let config = SliderConfig {
                    effect,
                    ..Default::default()
                };
                let mut slider = controller_with(&["A", "B"], config);
                slider.on_drag_changed(delta, now);
                slider.on_drag_ended(delta, now);
                slider.tick(now + ms(100));

                assert_eq!(slider.phase(), Phase::Entering, "{}", effect);
                assert_eq!(slider.visual().offset, Offset::vertical(edge), "{}", effect);
                assert_eq!(slider.visual().opacity, 0.0, "{}", effect);
            }
        }
    }

    #[test]
    fn test_restart_entrance_replays_from_pose() {
        let now = Instant::now();
        let config = SliderConfig {
            effect: AnimationEffect::SlideInFromLeft,
            ..Default::default()
        };
        let mut slider = controller_with(&["A", "B"], config);
        slider.swipe(SwipeDirection::Down, now);
        slider.tick(now + ms(100));
        run_to_rest(&mut slider, now + ms(100));
        assert_eq!(slider.phase(), Phase::Idle);

        let late = now + ms(2000);
        assert!(slider.restart_entrance(late));
        assert_eq!(slider.phase(), Phase::Entering);
        assert_eq!(slider.visual().offset, Offset::new(-WIDTH, 0.0));

        // Only once per entrance
        assert!(!slider.restart_entrance(late));
        run_to_rest(&mut slider, late);
        assert_eq!(slider.visual(), VisualState::settled());
    }

    #[test]
    fn test_restart_entrance_needs_a_removal() {
        let now = Instant::now();
        let mut slider = controller(&["A", "B", "C"]);
        assert!(!slider.restart_entrance(now));

        slider.swipe(SwipeDirection::Up, now);
        slider.tick(now + ms(100));
        slider.select(0, now + ms(150));
        assert!(!slider.restart_entrance(now + ms(200)));
        assert!(slider.visual().is_settled());

        slider.swipe(SwipeDirection::Up, now + ms(300));
        slider.tick(now + ms(400));
        slider.on_drag_changed(10.0, now + ms(450));
        assert!(!slider.restart_entrance(now + ms(500)));
        assert_eq!(slider.phase(), Phase::Dragging);
    }

    #[test]
    fn test_offset_only_entrance_keeps_scale_and_opacity() {
        let now = Instant::now();
        let config = SliderConfig {
            effect: AnimationEffect::CombinedEffect,
            animate_scale_opacity: false,
            ..Default::default()
        };
        let mut slider = controller_with(&["A", "B"], config);
        slider.swipe(SwipeDirection::Up, now);
        slider.tick(now + ms(100));

        let visual = slider.visual();
        assert_eq!(visual.offset, Offset::new(WIDTH, 0.0));
        assert_eq!(visual.scale, 1.0);
        assert_eq!(visual.opacity, 1.0);

        let mut later = now + ms(100);
        for _ in 0..10 {
            later += ms(60);
            slider.tick(later);
            assert_eq!(slider.visual().scale, 1.0);
            assert_eq!(slider.visual().opacity, 1.0);
        }
    }

    #[test]
    fn test_new_drag_flushes_pending_removal() {
        let now = Instant::now();
        let mut slider = controller(&["A", "B", "C"]);
        slider.on_drag_ended(HEIGHT, now);

        // Second drag starts before the removal delay elapsed
        let events = slider.on_drag_changed(20.0, now + ms(30));
        assert_eq!(events[0], SliderEvent::Removed { index: 0 });
        assert_eq!(slider.items(), &["B", "C"]);
        assert_eq!(slider.phase(), Phase::Dragging);
        assert_eq!(slider.visual().offset, Offset::vertical(20.0));
        assert_eq!(slider.visual().scale, 1.0);

        // The cancelled timer never fires a second removal
        let events = run_to_rest(&mut slider, now + ms(30));
        assert!(!events.iter().any(|e| matches!(e, SliderEvent::Removed { .. })));
        assert_eq!(slider.len(), 2);
    }

    #[test]
    fn test_new_drag_cancels_entrance() {
        let now = Instant::now();
        let mut slider = controller(&["A", "B", "C"]);
        slider.swipe(SwipeDirection::Down, now);
        slider.tick(now + ms(100));
        assert_eq!(slider.phase(), Phase::Entering);

        slider.on_drag_changed(-5.0, now + ms(150));
        assert!(!slider.is_animating());
        assert_eq!(slider.visual(), VisualState::settled().with_offset(Offset::vertical(-5.0)));
    }

    #[test]
    fn test_reset_cancels_pending_removal() {
        let now = Instant::now();
        let mut slider = controller(&["A", "B"]);
        slider.swipe(SwipeDirection::Up, now);
        let events = slider.reset(vec!["X", "Y", "Z"]);
        assert_eq!(
            events,
            vec![SliderEvent::ActiveChanged { index: 0, generation: slider.generation() }]
        );

        let events = run_to_rest(&mut slider, now);
        assert!(events.is_empty());
        assert_eq!(slider.items(), &["X", "Y", "Z"]);
        assert_eq!(slider.current_index(), 0);
        assert!(slider.visual().is_settled());
    }

    #[test]
    fn test_generation_advances_on_active_change() {
        let now = Instant::now();
        let mut slider = controller(&["A", "B", "C"]);
        let initial = slider.generation();

        slider.swipe(SwipeDirection::Down, now);
        let events = slider.tick(now + ms(100));
        let changed = events.iter().find_map(|e| match e {
            SliderEvent::ActiveChanged { generation, .. } => Some(*generation),
            _ => None,
        });
        assert_eq!(changed, Some(initial + 1));
        assert_eq!(slider.generation(), initial + 1);

        // Selecting the already active item is not a change
        assert!(slider.select(slider.current_index(), now + ms(200)).is_empty());
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let now = Instant::now();
        let mut slider = controller(&["A", "B"]);
        assert!(slider.select(5, now).is_empty());
        assert_eq!(slider.current_index(), 0);
    }

    #[test]
    fn test_needs_update_tracks_activity() {
        let now = Instant::now();
        let mut slider = controller(&["A", "B"]);
        assert!(!slider.needs_update());
        slider.on_drag_changed(1.0, now);
        assert!(slider.needs_update());
        slider.on_drag_ended(1.0, now);
        assert!(slider.needs_update());
        run_to_rest(&mut slider, now);
        assert!(!slider.needs_update());
    }
}
