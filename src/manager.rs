// SPDX-License-Identifier: MPL-2.0
//! Multi-snackbar lifecycle management.
//!
//! [`Snackbars`] owns live [`Snackbar`] instances, caps how many are on
//! screen at once, queues the overflow, and promotes queued entries as
//! visible ones finish dismissing. Queued entries are not ticked, so their
//! entrance animation and auto-hide countdown only start once promoted.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use iced::{event, time, window, Element, Subscription};

use crate::container::SnackbarContainer;
use crate::defaults;
use crate::position::{Horizontal, Vertical};
use crate::snackbar::{self, Snackbar};

/// Maximum number of snackbars visible at once.
const MAX_VISIBLE: usize = 3;

/// Unique identifier for a managed snackbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SnackbarId(u64);

impl SnackbarId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Messages for the snackbar stack.
#[derive(Debug, Clone)]
pub enum Message {
    /// A message for one managed snackbar.
    Snackbar(SnackbarId, snackbar::Message),
    /// Animation/timer tick fanned out to every visible snackbar.
    Tick(Instant),
    /// Window width change fanned out to every managed snackbar.
    ScreenResized(f32),
}

/// Manages a stack of snackbars rendered through one container.
#[derive(Debug, Default)]
pub struct Snackbars {
    /// Currently shown snackbars, oldest first.
    visible: VecDeque<(SnackbarId, Snackbar)>,
    /// Snackbars waiting for a visible slot.
    queue: VecDeque<(SnackbarId, Snackbar)>,
    container: SnackbarContainer,
}

impl Snackbars {
    /// Creates an empty stack anchored at the default bottom-center
    /// position.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty stack anchored at the given position.
    #[must_use]
    pub fn anchored(vertical: Vertical, horizontal: Horizontal) -> Self {
        Self {
            container: SnackbarContainer::new()
                .vertical(vertical)
                .horizontal(horizontal),
            ..Self::default()
        }
    }

    /// Adds a snackbar, showing it immediately if a slot is free and
    /// queuing it otherwise. Returns its id for later [`close`](Self::close).
    pub fn push(&mut self, snackbar: Snackbar) -> SnackbarId {
        let id = SnackbarId::next();
        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_back((id, snackbar));
        } else {
            self.queue.push_back((id, snackbar));
        }
        id
    }

    /// Closes a snackbar by id.
    ///
    /// A visible snackbar animates out; a queued one is removed before it
    /// ever shows. Returns `true` if the id was found.
    pub fn close(&mut self, id: SnackbarId) -> bool {
        if let Some((_, snackbar)) = self.visible.iter_mut().find(|(sid, _)| *sid == id) {
            snackbar.close(None);
            return true;
        }

        if let Some(index) = self.queue.iter().position(|(sid, _)| *sid == id) {
            self.queue.remove(index);
            return true;
        }

        false
    }

    /// Starts dismissing every visible snackbar and drops the queue.
    pub fn dismiss_all(&mut self) {
        for (_, snackbar) in &mut self.visible {
            snackbar.close(None);
        }
        self.queue.clear();
    }

    /// Handles a stack message.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Snackbar(id, inner) => {
                if let Some((_, snackbar)) =
                    self.visible.iter_mut().find(|(sid, _)| *sid == id)
                {
                    snackbar.update(inner);
                }
            }
            Message::Tick(now) => self.tick(now),
            Message::ScreenResized(width) => {
                for (_, snackbar) in self.visible.iter_mut().chain(self.queue.iter_mut()) {
                    snackbar.screen_resized(width);
                }
            }
        }
    }

    /// Renders the visible snackbars through the container.
    pub fn view(&self) -> Element<'_, Message> {
        self.container.view(self.visible.iter().map(|(id, snackbar)| {
            let id = *id;
            snackbar::view(snackbar).map(move |inner| Message::Snackbar(id, inner))
        }))
    }

    /// Subscription driving the stack: ticks while any visible snackbar is
    /// animating or counting down, plus window resize events.
    pub fn subscription(&self) -> Subscription<Message> {
        let ticks = if self.visible.iter().any(|(_, s)| s.needs_ticks()) {
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

    /// Number of snackbars currently shown.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Number of snackbars waiting for a slot.
    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Whether any snackbar is shown or waiting.
    #[must_use]
    pub fn has_snackbars(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    fn tick(&mut self, now: Instant) {
        for (_, snackbar) in &mut self.visible {
            snackbar.update(snackbar::Message::Tick(now));
        }

        self.visible.retain(|(_, snackbar)| snackbar.is_visible());
        self.promote_from_queue();
    }

    /// Fills freed visible slots from the queue, in arrival order.
    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            if let Some(entry) = self.queue.pop_front() {
                self.visible.push_back(entry);
            } else {
                break;
            }
        }
    }
}
