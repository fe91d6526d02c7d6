// SPDX-License-Identifier: MPL-2.0
//! Snackbar lifecycle state machine.
//!
//! A [`Snackbar`] owns one animated progress value and at most one armed
//! auto-hide deadline. Ticks carry the current [`Instant`], so tests can
//! drive the whole lifecycle with synthetic time.

use std::fmt;
use std::time::{Duration, Instant};

use iced::{event, time, window, Subscription};

use crate::animation::{self, Animated};
use crate::defaults;
use crate::design_tokens::sizing;
use crate::position::{Horizontal, Vertical};
use crate::transition::{self, Transition, TransitionStyle};
use crate::variant::Variant;

/// Callback invoked once when a dismissal fully completes.
pub type CloseCallback = Box<dyn FnOnce()>;

/// Callback observing the dismissal of the instance.
pub type DismissCallback = Box<dyn FnMut()>;

/// Lifecycle phase of a snackbar instance.
///
/// The phase only ever moves forward; `Dismissed` is terminal and a new
/// message requires a new instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Animating in after construction.
    Entering,
    /// Fully shown, possibly counting down to auto-hide.
    Visible,
    /// Animating out after `close` or deadline expiry.
    Dismissing,
    /// Gone; the instance renders nothing.
    Dismissed,
}

/// Messages for a snackbar instance.
#[derive(Debug, Clone)]
pub enum Message {
    /// Animation/timer tick with the current instant.
    Tick(Instant),
    /// Window width changed.
    ScreenResized(f32),
    /// The action button was pressed.
    ActionPressed,
}

/// A single transient notification message.
pub struct Snackbar {
    message: String,
    action: Option<String>,
    variant: Variant,
    transition: Transition,
    vertical: Vertical,
    horizontal: Horizontal,
    /// `None` means the snackbar never auto-hides.
    duration: Option<Duration>,
    phase: Phase,
    fade: Animated,
    /// Armed auto-hide deadline. Cleared on every transition out of the
    /// countdown so a stale expiry can never dismiss twice.
    deadline: Option<Instant>,
    is_mobile: bool,
    on_dismiss: Option<DismissCallback>,
    pending_close: Vec<CloseCallback>,
}

impl Snackbar {
    /// Creates a snackbar showing `message`, already animating in.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        let mut fade = Animated::new(0.0);
        fade.animate_to(1.0);

        Self {
            message: message.into(),
            action: None,
            variant: Variant::default(),
            transition: Transition::default(),
            vertical: Vertical::default(),
            horizontal: Horizontal::default(),
            duration: None,
            phase: Phase::Entering,
            fade,
            deadline: None,
            is_mobile: true,
            on_dismiss: None,
            pending_close: Vec::new(),
        }
    }

    /// Sets the color variant.
    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the entrance/exit transition kind.
    #[must_use]
    pub fn transition(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }

    /// Sets the vertical anchor, which also picks the slide direction.
    #[must_use]
    pub fn vertical(mut self, vertical: Vertical) -> Self {
        self.vertical = vertical;
        self
    }

    /// Sets the horizontal anchor.
    #[must_use]
    pub fn horizontal(mut self, horizontal: Horizontal) -> Self {
        self.horizontal = horizontal;
        self
    }

    /// Sets the auto-hide duration; `None` keeps the snackbar up until an
    /// explicit close.
    #[must_use]
    pub fn duration(mut self, duration: Option<Duration>) -> Self {
        self.set_duration(duration);
        self
    }

    /// Adds an action button with the given label; pressing it closes the
    /// snackbar.
    #[must_use]
    pub fn action(mut self, label: impl Into<String>) -> Self {
        self.action = Some(label.into());
        self
    }

    /// Registers the dismissal observer. Auto-hide only arms when one is
    /// registered, since expiry would otherwise be unobservable.
    #[must_use]
    pub fn on_dismiss(mut self, callback: impl FnMut() + 'static) -> Self {
        self.set_on_dismiss(callback);
        self
    }

    /// Seeds the responsive flag with the current screen width.
    #[must_use]
    pub fn screen_width(mut self, width: f32) -> Self {
        self.screen_resized(width);
        self
    }

    /// Replaces the auto-hide duration, disarming any countdown in flight
    /// so it re-arms from the next tick.
    pub fn set_duration(&mut self, duration: Option<Duration>) {
        self.duration = duration;
        self.deadline = None;
    }

    /// Replaces the dismissal observer, disarming any countdown in flight
    /// so it re-arms from the next tick.
    pub fn set_on_dismiss(&mut self, callback: impl FnMut() + 'static) {
        self.on_dismiss = Some(Box::new(callback));
        self.deadline = None;
    }

    /// Starts dismissing the snackbar.
    ///
    /// The exit animation continues from the current progress value, so
    /// calling this mid-entrance (or a second time mid-exit) never causes a
    /// visual jump. `on_complete` runs once the exit animation finishes,
    /// before the dismissal observer; repeated calls queue their callbacks
    /// in order. A no-op once the snackbar is dismissed.
    pub fn close(&mut self, on_complete: Option<CloseCallback>) {
        if self.phase == Phase::Dismissed {
            return;
        }

        if let Some(callback) = on_complete {
            self.pending_close.push(callback);
        }

        self.deadline = None;
        self.phase = Phase::Dismissing;
        self.fade.animate_to(0.0);
    }

    /// Handles a snackbar message.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Tick(now) => self.tick(now),
            Message::ScreenResized(width) => self.screen_resized(width),
            Message::ActionPressed => self.close(None),
        }
    }

    /// Recomputes the responsive flag from the screen width.
    pub fn screen_resized(&mut self, width: f32) {
        self.is_mobile = width < defaults::MOBILE_BREAKPOINT;
    }

    /// Subscription driving this instance: animation ticks while anything
    /// is in motion or counting down, plus window resize events.
    pub fn subscription(&self) -> Subscription<Message> {
        let ticks = if self.needs_ticks() {
            time::every(Duration::from_millis(defaults::TICK_INTERVAL_MS)).map(Message::Tick)
        } else {
            Subscription::none()
        };

        let resizes = event::listen_with(|event, _status, _window| {
            if let event::Event::Window(window::Event::Resized(size)) = &event {
                return Some(Message::ScreenResized(size.width));
            }
            None
        });

        Subscription::batch([ticks, resizes])
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the instance still renders anything.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.phase != Phase::Dismissed
    }

    /// The message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The action button label, if any.
    #[must_use]
    pub fn action_label(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// The color variant.
    #[must_use]
    pub fn variant_kind(&self) -> Variant {
        self.variant
    }

    /// Current raw animation progress (0.0 hidden, 1.0 shown).
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.fade.value()
    }

    /// Whether the screen currently counts as mobile.
    #[must_use]
    pub fn is_mobile(&self) -> bool {
        self.is_mobile
    }

    /// Width cap for the current screen class, if one applies.
    #[must_use]
    pub fn max_width(&self) -> Option<f32> {
        (!self.is_mobile).then_some(sizing::SNACKBAR_MAX_WIDTH)
    }

    /// Transition style at the current (eased) animation progress.
    #[must_use]
    pub fn transition_style(&self) -> TransitionStyle {
        transition::style(
            self.transition,
            self.fade.eased(animation::ease_in_out),
            self.vertical,
            self.horizontal,
        )
    }

    pub(crate) fn needs_ticks(&self) -> bool {
        match self.phase {
            Phase::Entering | Phase::Dismissing => true,
            Phase::Visible => self.can_auto_hide(),
            Phase::Dismissed => false,
        }
    }

    fn can_auto_hide(&self) -> bool {
        self.duration.is_some() && self.on_dismiss.is_some()
    }

    fn tick(&mut self, now: Instant) {
        match self.phase {
            Phase::Entering => {
                if self.fade.tick(now) {
                    self.phase = Phase::Visible;
                }
                self.poll_auto_hide(now);
            }
            Phase::Visible => self.poll_auto_hide(now),
            Phase::Dismissing => {
                // A close issued while progress is already at zero (an
                // instant close mid-entrance) has nothing left to animate.
                if self.fade.tick(now) || !self.fade.is_animating() {
                    self.finish_dismiss();
                }
            }
            Phase::Dismissed => {}
        }
    }

    /// Arms the deadline on the first countdown tick, then fires once it
    /// passes. Nothing arms without a duration and a dismissal observer.
    fn poll_auto_hide(&mut self, now: Instant) {
        let Some(duration) = self.duration else {
            return;
        };
        if self.on_dismiss.is_none() {
            return;
        }

        let deadline = *self.deadline.get_or_insert(now + duration);
        if now >= deadline {
            self.close(None);
        }
    }

    /// Completes a dismissal. Ordering is part of the contract: queued
    /// close callbacks first, then the dismissal observer, then the
    /// visibility flip.
    fn finish_dismiss(&mut self) {
        for callback in self.pending_close.drain(..) {
            callback();
        }
        if let Some(on_dismiss) = self.on_dismiss.as_mut() {
            on_dismiss();
        }
        self.phase = Phase::Dismissed;
    }
}

impl fmt::Debug for Snackbar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snackbar")
            .field("message", &self.message)
            .field("variant", &self.variant)
            .field("phase", &self.phase)
            .field("progress", &self.fade.value())
            .field("duration", &self.duration)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    const SWEEP: u64 = defaults::TRANSITION_SWEEP_MS;

    /// Drives ticks at the given millisecond offsets from `start`.
    fn run_ticks(snackbar: &mut Snackbar, start: Instant, offsets_ms: &[u64]) {
        for &ms in offsets_ms {
            snackbar.update(Message::Tick(start + Duration::from_millis(ms)));
        }
    }

    fn dismiss_counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
        let count = Rc::new(Cell::new(0));
        let observer = Rc::clone(&count);
        (count, move || observer.set(observer.get() + 1))
    }

    #[test]
    fn starts_entering_and_becomes_visible() {
        let start = Instant::now();
        let mut snackbar = Snackbar::new("saved");
        assert_eq!(snackbar.phase(), Phase::Entering);
        assert!(snackbar.is_visible());

        run_ticks(&mut snackbar, start, &[0, SWEEP]);
        assert_eq!(snackbar.phase(), Phase::Visible);
        assert_eq!(snackbar.progress(), 1.0);
    }

    #[test]
    fn no_timer_without_on_dismiss() {
        let start = Instant::now();
        let mut snackbar = Snackbar::new("stays").duration(Some(Duration::from_millis(100)));

        run_ticks(&mut snackbar, start, &[0, SWEEP, 60_000]);
        assert_eq!(snackbar.phase(), Phase::Visible);
    }

    #[test]
    fn no_timer_without_duration() {
        let (count, observer) = dismiss_counter();
        let start = Instant::now();
        let mut snackbar = Snackbar::new("stays").on_dismiss(observer);

        run_ticks(&mut snackbar, start, &[0, SWEEP, 60_000]);
        assert_eq!(snackbar.phase(), Phase::Visible);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn auto_hide_fires_at_the_deadline_exactly_once() {
        let (count, observer) = dismiss_counter();
        let start = Instant::now();
        let mut snackbar = Snackbar::new("bye")
            .duration(Some(Duration::from_millis(3000)))
            .on_dismiss(observer);

        // The countdown arms on the first tick.
        run_ticks(&mut snackbar, start, &[0, 2999]);
        assert_eq!(snackbar.phase(), Phase::Visible);
        assert_eq!(count.get(), 0);

        run_ticks(&mut snackbar, start, &[3000]);
        assert_eq!(snackbar.phase(), Phase::Dismissing);

        run_ticks(&mut snackbar, start, &[3016, 3000 + SWEEP + 16]);
        assert_eq!(snackbar.phase(), Phase::Dismissed);
        assert_eq!(count.get(), 1);

        // A stale expiry must not fire again.
        run_ticks(&mut snackbar, start, &[60_000]);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn close_cancels_the_pending_timer() {
        let (count, observer) = dismiss_counter();
        let start = Instant::now();
        let mut snackbar = Snackbar::new("bye")
            .duration(Some(Duration::from_millis(3000)))
            .on_dismiss(observer);

        run_ticks(&mut snackbar, start, &[0, 1000]);
        snackbar.close(None);
        run_ticks(&mut snackbar, start, &[1016, 1000 + SWEEP + 16]);
        assert_eq!(snackbar.phase(), Phase::Dismissed);
        assert_eq!(count.get(), 1);

        // Past the original deadline: nothing further happens.
        run_ticks(&mut snackbar, start, &[10_000]);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn dropping_before_the_timer_fires_never_dismisses() {
        let (count, observer) = dismiss_counter();
        let start = Instant::now();
        let mut snackbar = Snackbar::new("bye")
            .duration(Some(Duration::from_millis(3000)))
            .on_dismiss(observer);

        run_ticks(&mut snackbar, start, &[0, 1000]);
        drop(snackbar);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn dismissal_callbacks_run_in_contract_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let start = Instant::now();

        let observer = Rc::clone(&order);
        let mut snackbar = Snackbar::new("bye").on_dismiss(move || {
            observer.borrow_mut().push("dismiss");
        });

        run_ticks(&mut snackbar, start, &[0, SWEEP]);

        let completion = Rc::clone(&order);
        snackbar.close(Some(Box::new(move || {
            completion.borrow_mut().push("complete");
        })));
        assert!(snackbar.is_visible());

        run_ticks(&mut snackbar, start, &[SWEEP + 16, 2 * SWEEP + 16]);
        assert_eq!(*order.borrow(), vec!["complete", "dismiss"]);
        assert!(!snackbar.is_visible());
    }

    #[test]
    fn reentrant_close_queues_callbacks_and_keeps_animating() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let start = Instant::now();
        let mut snackbar = Snackbar::new("bye");

        run_ticks(&mut snackbar, start, &[0, SWEEP]);

        let first = Rc::clone(&order);
        snackbar.close(Some(Box::new(move || first.borrow_mut().push("first"))));
        run_ticks(&mut snackbar, start, &[SWEEP + 16, SWEEP + 166]);
        let mid = snackbar.progress();
        assert!(mid < 1.0 && mid > 0.0);

        let second = Rc::clone(&order);
        snackbar.close(Some(Box::new(move || second.borrow_mut().push("second"))));
        run_ticks(&mut snackbar, start, &[SWEEP + 216]);
        assert!(snackbar.progress() < mid);

        run_ticks(&mut snackbar, start, &[3 * SWEEP]);
        assert_eq!(snackbar.phase(), Phase::Dismissed);
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn close_after_dismissed_is_a_no_op() {
        let start = Instant::now();
        let mut snackbar = Snackbar::new("bye");
        snackbar.close(None);
        run_ticks(&mut snackbar, start, &[0, SWEEP]);
        assert_eq!(snackbar.phase(), Phase::Dismissed);

        let called = Rc::new(Cell::new(false));
        let flag = Rc::clone(&called);
        snackbar.close(Some(Box::new(move || flag.set(true))));
        run_ticks(&mut snackbar, start, &[2 * SWEEP]);
        assert_eq!(snackbar.phase(), Phase::Dismissed);
        assert!(!called.get());
    }

    #[test]
    fn zero_duration_dismisses_on_the_arming_tick() {
        let (count, observer) = dismiss_counter();
        let start = Instant::now();
        let mut snackbar = Snackbar::new("gone")
            .duration(Some(Duration::ZERO))
            .on_dismiss(observer);

        run_ticks(&mut snackbar, start, &[0]);
        assert_eq!(snackbar.phase(), Phase::Dismissing);
        run_ticks(&mut snackbar, start, &[16, SWEEP + 16]);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn changing_duration_rearms_from_the_next_tick() {
        let (count, observer) = dismiss_counter();
        let start = Instant::now();
        let mut snackbar = Snackbar::new("bye")
            .duration(Some(Duration::from_millis(1000)))
            .on_dismiss(observer);

        run_ticks(&mut snackbar, start, &[0, 500]);
        snackbar.set_duration(Some(Duration::from_millis(5000)));

        // The old deadline has passed, the new one has not.
        run_ticks(&mut snackbar, start, &[1500]);
        assert_eq!(snackbar.phase(), Phase::Visible);

        run_ticks(&mut snackbar, start, &[1500 + 5000]);
        assert_eq!(snackbar.phase(), Phase::Dismissing);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn action_press_routes_through_close() {
        let (count, observer) = dismiss_counter();
        let start = Instant::now();
        let mut snackbar = Snackbar::new("undo?").action("Undo").on_dismiss(observer);

        run_ticks(&mut snackbar, start, &[0, SWEEP]);
        snackbar.update(Message::ActionPressed);
        assert_eq!(snackbar.phase(), Phase::Dismissing);

        run_ticks(&mut snackbar, start, &[SWEEP + 16, 2 * SWEEP + 16]);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn breakpoint_toggles_the_width_cap_deterministically() {
        let mut snackbar = Snackbar::new("wide");
        assert!(snackbar.is_mobile());
        assert_eq!(snackbar.max_width(), None);

        snackbar.screen_resized(defaults::MOBILE_BREAKPOINT);
        assert_eq!(snackbar.max_width(), Some(sizing::SNACKBAR_MAX_WIDTH));

        // Repeated notifications at the same width change nothing.
        snackbar.screen_resized(defaults::MOBILE_BREAKPOINT);
        assert_eq!(snackbar.max_width(), Some(sizing::SNACKBAR_MAX_WIDTH));

        snackbar.screen_resized(defaults::MOBILE_BREAKPOINT - 1.0);
        assert_eq!(snackbar.max_width(), None);
    }

    #[test]
    fn ticks_are_only_requested_while_needed() {
        let start = Instant::now();
        let mut snackbar = Snackbar::new("idle");
        assert!(snackbar.needs_ticks());

        run_ticks(&mut snackbar, start, &[0, SWEEP]);
        assert!(!snackbar.needs_ticks());

        snackbar.set_duration(Some(Duration::from_millis(1000)));
        assert!(!snackbar.needs_ticks());
        snackbar.set_on_dismiss(|| {});
        assert!(snackbar.needs_ticks());

        snackbar.close(None);
        run_ticks(&mut snackbar, start, &[SWEEP + 16, 2 * SWEEP + 16]);
        assert!(!snackbar.needs_ticks());
    }
}
