//! Hero image carousel: state machine, document binding, autoplay driver.
//!
//! The state machine is synchronous and takes an explicit `now`, so every
//! timing rule (transition lock, gesture debounce, autoplay countdown) is
//! plain data and tests can drive time deterministically. The only async
//! piece is `run_autoplay`, which sleeps until the published deadline and
//! feeds ticks back in; because the deadline is state rather than a live
//! timer, a cancelled or re-armed countdown can never fire stale.

use crate::page::{Document, Element};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info};

/// Autoplay advances one slide this often with no interaction.
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(5000);
/// Navigation is locked for this long after each accepted command, matching
/// the visual transition length.
pub const TRANSITION_LOCK: Duration = Duration::from_millis(600);
/// Minimum spacing between two accepted swipes, and between two accepted
/// key presses.
pub const GESTURE_DEBOUNCE: Duration = Duration::from_millis(300);
/// Horizontal displacement a touch gesture must exceed to count as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// How often the autoplay driver re-checks while autoplay is suspended.
const SUSPEND_POLL: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDirection {
    Left,
    Right,
}

/// Where input focus sits when a key event arrives. Keys are honored only
/// when the carousel region, or nothing more specific than the body, holds
/// focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Carousel,
    Body,
    Other,
}

/// The carousel state machine.
///
/// Invariant: `current` is always a valid index into the slide set. Step
/// navigation wraps via modulo; `goto` snaps out-of-range targets to the
/// far endpoint.
#[derive(Debug)]
pub struct Carousel {
    slide_count: usize,
    current: usize,
    /// `Some` while in the `Transitioning` state; expires on its own
    transition_ends: Option<Instant>,
    /// `Some` while autoplay is armed; `None` while suspended (hover/focus)
    autoplay_due: Option<Instant>,
    last_swipe: Option<Instant>,
    last_key: Option<Instant>,
    pointer_over: bool,
    focus_within: bool,
}

impl Carousel {
    /// # Panics
    /// Panics if `slide_count` is zero; a carousel without slides is never
    /// constructed (the binding refuses to attach instead).
    pub fn new(slide_count: usize, now: Instant) -> Self {
        assert!(slide_count > 0, "carousel needs at least one slide");
        Self {
            slide_count,
            current: 0,
            transition_ends: None,
            autoplay_due: Some(now + AUTOPLAY_INTERVAL),
            last_swipe: None,
            last_key: None,
            pointer_over: false,
            focus_within: false,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn is_transitioning(&self, now: Instant) -> bool {
        self.transition_ends.is_some_and(|t| now < t)
    }

    pub fn autoplay_due(&self) -> Option<Instant> {
        self.autoplay_due
    }

    fn suspended(&self) -> bool {
        self.pointer_over || self.focus_within
    }

    /// Pagination indicator state; exactly one entry is true, the current
    /// slide's.
    pub fn indicator(&self) -> Vec<bool> {
        (0..self.slide_count).map(|i| i == self.current).collect()
    }

    /// Accept a navigation to `index`: update position, enter
    /// `Transitioning`, and restart the autoplay countdown from full.
    fn commit(&mut self, index: usize, now: Instant) {
        self.current = index;
        self.transition_ends = Some(now + TRANSITION_LOCK);
        if !self.suspended() {
            self.autoplay_due = Some(now + AUTOPLAY_INTERVAL);
        }
    }

    fn navigate_by(&mut self, step: i64, now: Instant) -> bool {
        if self.is_transitioning(now) {
            debug!("navigation ignored, transition in flight");
            return false;
        }
        let n = self.slide_count as i64;
        let index = (self.current as i64 + step).rem_euclid(n) as usize;
        self.commit(index, now);
        true
    }

    pub fn next(&mut self, now: Instant) -> bool {
        self.navigate_by(1, now)
    }

    pub fn previous(&mut self, now: Instant) -> bool {
        self.navigate_by(-1, now)
    }

    /// Go to a specific slide. Out-of-range indices snap to the far
    /// endpoint: anything below zero lands on the last slide, anything past
    /// the end on the first.
    pub fn goto(&mut self, index: i64, now: Instant) -> bool {
        if self.is_transitioning(now) {
            return false;
        }
        let n = self.slide_count as i64;
        let index = if index < 0 {
            n - 1
        } else if index >= n {
            0
        } else {
            index
        };
        self.commit(index as usize, now);
        true
    }

    /// Autoplay tick: behaves as `next`, except it is wholly suppressed
    /// while a transition is in flight. The countdown keeps its existing
    /// cadence instead of restarting.
    pub fn autoplay_tick(&mut self, now: Instant) -> bool {
        if self.suspended() {
            return false;
        }
        if self.is_transitioning(now) {
            self.autoplay_due = self.autoplay_due.map(|d| d + AUTOPLAY_INTERVAL);
            return false;
        }
        self.navigate_by(1, now)
    }

    /// Suspend autoplay; any transition in flight keeps running.
    pub fn pointer_enter(&mut self) {
        self.pointer_over = true;
        self.autoplay_due = None;
    }

    /// Resume autoplay from a full fresh interval.
    pub fn pointer_leave(&mut self, now: Instant) {
        self.pointer_over = false;
        if !self.suspended() {
            self.autoplay_due = Some(now + AUTOPLAY_INTERVAL);
        }
    }

    pub fn focus_enter(&mut self) {
        self.focus_within = true;
        self.autoplay_due = None;
    }

    pub fn focus_leave(&mut self, now: Instant) {
        self.focus_within = false;
        if !self.suspended() {
            self.autoplay_due = Some(now + AUTOPLAY_INTERVAL);
        }
    }

    /// Touch gesture, `delta_px` being start minus end of the horizontal
    /// displacement: positive maps to `next`, negative to `previous`.
    /// Gestures under the threshold are ignored; gestures within the
    /// debounce window of the previously accepted one are dropped.
    pub fn swipe(&mut self, delta_px: f64, now: Instant) -> bool {
        if delta_px.abs() <= SWIPE_THRESHOLD_PX {
            return false;
        }
        if within_debounce(self.last_swipe, now) {
            debug!("swipe dropped by debounce");
            return false;
        }
        self.last_swipe = Some(now);
        if delta_px > 0.0 {
            self.next(now)
        } else {
            self.previous(now)
        }
    }

    pub fn key_left(&mut self, now: Instant) -> bool {
        if within_debounce(self.last_key, now) {
            return false;
        }
        self.last_key = Some(now);
        self.previous(now)
    }

    pub fn key_right(&mut self, now: Instant) -> bool {
        if within_debounce(self.last_key, now) {
            return false;
        }
        self.last_key = Some(now);
        self.next(now)
    }
}

fn within_debounce(last: Option<Instant>, now: Instant) -> bool {
    last.is_some_and(|t| now.duration_since(t) < GESTURE_DEBOUNCE)
}

/// Binds a [`Carousel`] to the document: creates pagination dots, keeps the
/// track transform and dots consistent with the current index, and gates key
/// events on focus.
pub struct CarouselBinding {
    carousel: Carousel,
    attached: bool,
}

impl CarouselBinding {
    /// Attach to the document's carousel markup. Returns `None` when the
    /// page has no carousel (track, controls, or slides missing); an absent
    /// carousel is not an error, the controller simply does not initialize.
    pub fn for_document(doc: &mut Document, now: Instant) -> Option<Self> {
        let slide_count = doc.ids_with_prefix("carousel-slide-").len();
        if slide_count == 0
            || doc.get("carousel-track").is_none()
            || doc.get("carousel-prev").is_none()
            || doc.get("carousel-next").is_none()
        {
            return None;
        }

        let mut binding = Self {
            carousel: Carousel::new(slide_count, now),
            attached: false,
        };
        binding.attach(doc);
        info!(slides = slide_count, "carousel attached");
        Some(binding)
    }

    /// Create the pagination dots and mark the binding live. Idempotent:
    /// re-attachment (after dynamic content replacement) first detaches, so
    /// dots and bindings never accumulate.
    pub fn attach(&mut self, doc: &mut Document) {
        if self.attached {
            self.detach(doc);
        }
        for i in 0..self.carousel.slide_count() {
            let mut dot = Element::button(format!("carousel-dot-{i}"), "");
            dot.active = i == self.carousel.current_index();
            doc.push(dot);
        }
        self.attached = true;
        self.sync(doc);
    }

    /// Remove everything this binding added to the document.
    pub fn detach(&mut self, doc: &mut Document) {
        for id in doc.ids_with_prefix("carousel-dot-") {
            doc.remove(&id);
        }
        self.attached = false;
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn autoplay_due(&self) -> Option<Instant> {
        self.carousel.autoplay_due()
    }

    /// Push the current index out to the track transform and the dots.
    fn sync(&self, doc: &mut Document) {
        let current = self.carousel.current_index();
        if let Some(track) = doc.get_mut("carousel-track") {
            track.transform = format!("translateX(-{}%)", current * 100);
        }
        for i in 0..self.carousel.slide_count() {
            if let Some(dot) = doc.get_mut(&format!("carousel-dot-{i}")) {
                dot.active = i == current;
            }
        }
    }

    // Event entry points; each applies the command and re-syncs the view.

    pub fn next(&mut self, doc: &mut Document, now: Instant) -> bool {
        let moved = self.carousel.next(now);
        self.sync(doc);
        moved
    }

    pub fn previous(&mut self, doc: &mut Document, now: Instant) -> bool {
        let moved = self.carousel.previous(now);
        self.sync(doc);
        moved
    }

    /// A pagination dot's click action.
    pub fn goto(&mut self, doc: &mut Document, index: i64, now: Instant) -> bool {
        let moved = self.carousel.goto(index, now);
        self.sync(doc);
        moved
    }

    pub fn autoplay_tick(&mut self, doc: &mut Document, now: Instant) -> bool {
        let moved = self.carousel.autoplay_tick(now);
        self.sync(doc);
        moved
    }

    pub fn swipe(&mut self, doc: &mut Document, delta_px: f64, now: Instant) -> bool {
        let moved = self.carousel.swipe(delta_px, now);
        self.sync(doc);
        moved
    }

    /// Keyboard navigation, honored only when the carousel region (or
    /// nothing more specific than the body) holds input focus.
    pub fn key(
        &mut self,
        doc: &mut Document,
        direction: KeyDirection,
        focus: FocusTarget,
        now: Instant,
    ) -> bool {
        if focus == FocusTarget::Other {
            return false;
        }
        let moved = match direction {
            KeyDirection::Left => self.carousel.key_left(now),
            KeyDirection::Right => self.carousel.key_right(now),
        };
        self.sync(doc);
        moved
    }

    pub fn pointer_enter(&mut self) {
        self.carousel.pointer_enter();
    }

    pub fn pointer_leave(&mut self, now: Instant) {
        self.carousel.pointer_leave(now);
    }

    pub fn focus_enter(&mut self) {
        self.carousel.focus_enter();
    }

    pub fn focus_leave(&mut self, now: Instant) {
        self.carousel.focus_leave(now);
    }
}

/// Drive autoplay: sleep until the carousel's published deadline, then feed
/// the tick back in. Re-checks the deadline after waking so a countdown that
/// was re-armed or suspended while sleeping never produces a stale tick.
pub async fn run_autoplay(shared: Arc<Mutex<(Document, CarouselBinding)>>) {
    loop {
        let due = {
            let guard = shared.lock().expect("carousel lock poisoned");
            guard.1.autoplay_due()
        };

        match due {
            Some(deadline) => {
                tokio::time::sleep_until(deadline).await;
                let now = Instant::now();
                let mut guard = shared.lock().expect("carousel lock poisoned");
                let (doc, binding) = &mut *guard;
                if binding.autoplay_due() == Some(deadline) && now >= deadline {
                    binding.autoplay_tick(doc, now);
                }
            }
            // Suspended; check again shortly
            None => tokio::time::sleep(SUSPEND_POLL).await,
        }
    }
}
