// SPDX-License-Identifier: MPL-2.0
//! Notifier lifecycle management.
//!
//! The `Notifier` owns the message queue, the currently displayed surface,
//! and the show/advance/dismiss control flow. Messages display strictly in
//! enqueue order; each one either advances to the next queued message or
//! settles to idle after the auto-hide duration, unless a tap interrupts
//! the whole run.
//!
//! Every method here is a total function over the current state. Deferred
//! work (the one-shot auto-advance) is described by the returned [`Effect`]
//! and scheduled by the Iced shell; the core itself never blocks.

use super::timer::{AdvanceToken, TimerSlot};
use crate::config::Config;
use crate::diagnostics::{DiagnosticsHandle, ToastEventKind};
use crate::surface::Surface;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Deferred work requested by the notifier core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing to schedule.
    None,
    /// Arm a one-shot timer that delivers `token` back via
    /// [`Notifier::advance`] once `after` has elapsed.
    ScheduleAdvance { token: AdvanceToken, after: Duration },
}

/// Owns the toast queue and the display cycle.
///
/// Construct one per application and keep it in the host state; there is no
/// global instance. The host routes surface taps and timer completions back
/// in as messages, which keeps all state mutation on the UI update loop.
#[derive(Debug)]
pub struct Notifier {
    /// Queued messages waiting to be displayed (front is next).
    queue: VecDeque<String>,
    /// The surface currently showing a message, if any.
    active: Option<Surface>,
    /// A surface mid fade-out, kept only until removal.
    retiring: Option<Surface>,
    /// How long each message stays visible. Fixed at construction.
    auto_hide: Duration,
    /// Vertical anchor for the surface. Fixed at construction.
    anchor: f32,
    /// The single outstanding auto-advance slot.
    timer: TimerSlot,
    /// Optional diagnostics handle for lifecycle events.
    diagnostics: Option<DiagnosticsHandle>,
}

impl Notifier {
    /// Creates a notifier from the given configuration.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            queue: VecDeque::new(),
            active: None,
            retiring: None,
            auto_hide: config.auto_hide(),
            anchor: config.anchor(),
            timer: TimerSlot::default(),
            diagnostics: None,
        }
    }

    /// Sets the diagnostics handle for lifecycle event logging.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Queues a message for display.
    ///
    /// Empty messages are silently dropped. If a surface is already active
    /// the message waits its turn - the running display picks it up when it
    /// advances. If the notifier is idle the display cycle starts
    /// immediately.
    pub fn show_message(&mut self, message: impl Into<String>) -> Effect {
        let message = message.into();
        if message.is_empty() {
            self.log(ToastEventKind::DroppedEmpty);
            return Effect::None;
        }

        let chars = message.chars().count();
        self.queue.push_back(message);
        self.log(ToastEventKind::Enqueued {
            chars,
            queue_len: self.queue.len(),
        });

        if self.active.is_some() {
            return Effect::None;
        }

        self.process_queue()
    }

    /// Delivers an elapsed auto-advance timer.
    ///
    /// A stale `token` - one superseded by a later arm or canceled by an
    /// interrupt - is ignored, so a timer firing after the queue was
    /// cleared cannot resurrect the display cycle.
    pub fn advance(&mut self, token: AdvanceToken) -> Effect {
        if !self.timer.consume(token) {
            return Effect::None;
        }
        self.process_queue()
    }

    /// Handles a recognized tap on the surface: flushes the queue, hides,
    /// and cancels the pending advance. Safe no-op while idle.
    pub fn interrupt(&mut self) {
        if let Some(flushed) = self.flush_and_hide() {
            self.log(ToastEventKind::Interrupted { flushed });
        }
    }

    /// Explicit dismissal entry point with the same effect as a tap.
    pub fn dismiss(&mut self) {
        if let Some(flushed) = self.flush_and_hide() {
            self.log(ToastEventKind::Dismissed { flushed });
        }
    }

    /// Advances transition housekeeping: settles a finished fade-in and
    /// drops the retiring surface once its fade-out completes.
    pub fn tick(&mut self, now: Instant) {
        if let Some(surface) = &mut self.active {
            surface.settle(now);
        }
        if self.retiring.as_ref().is_some_and(|s| s.is_detached(now)) {
            self.retiring = None;
        }
    }

    /// True when no message is visible or fading in.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.active.is_none()
    }

    /// The message currently displayed, if any.
    #[must_use]
    pub fn current_message(&self) -> Option<&str> {
        self.active.as_ref().map(Surface::message)
    }

    /// Number of messages waiting behind the current one.
    #[must_use]
    pub fn queued_len(&self) -> usize {
        self.queue.len()
    }

    /// True while any surface exists, including one still fading out.
    /// Gates the repaint tick subscription.
    #[must_use]
    pub fn has_surface(&self) -> bool {
        self.active.is_some() || self.retiring.is_some()
    }

    /// The active surface, for rendering.
    #[must_use]
    pub fn active_surface(&self) -> Option<&Surface> {
        self.active.as_ref()
    }

    /// The retiring surface still fading out, for rendering.
    #[must_use]
    pub fn retiring_surface(&self) -> Option<&Surface> {
        self.retiring.as_ref()
    }

    /// The configured display duration per message.
    #[must_use]
    pub fn auto_hide(&self) -> Duration {
        self.auto_hide
    }

    /// The configured vertical anchor fraction.
    #[must_use]
    pub fn anchor(&self) -> f32 {
        self.anchor
    }

    /// True while an auto-advance is outstanding.
    #[must_use]
    pub fn is_advance_pending(&self) -> bool {
        self.timer.is_armed()
    }

    /// Pops and presents the next message, or settles to idle when the
    /// queue is empty. Arms a fresh auto-advance for every presentation.
    fn process_queue(&mut self) -> Effect {
        let Some(message) = self.queue.pop_front() else {
            if self.active.is_some() {
                self.log(ToastEventKind::QueueDrained);
            }
            self.hide();
            return Effect::None;
        };

        let now = Instant::now();
        let chars = message.chars().count();
        match &mut self.active {
            Some(surface) => surface.present(message, now),
            None => self.active = Some(Surface::new(message, now)),
        }
        self.log(ToastEventKind::Presented { chars });

        let token = self.timer.arm();
        Effect::ScheduleAdvance {
            token,
            after: self.auto_hide,
        }
    }

    /// Shared tail of interrupt/dismiss. Returns the flushed queue length
    /// when something was actually showing, `None` for the idle no-op.
    fn flush_and_hide(&mut self) -> Option<usize> {
        let was_showing = self.active.is_some();
        let flushed = self.queue.len();
        self.queue.clear();
        self.hide();
        self.timer.cancel();
        was_showing.then_some(flushed)
    }

    /// Begins the detach fade-out and clears the active slot. Idempotent
    /// while already idle.
    fn hide(&mut self) {
        if let Some(mut surface) = self.active.take() {
            surface.begin_detach(Instant::now());
            self.retiring = Some(surface);
        }
    }

    fn log(&self, kind: ToastEventKind) {
        if let Some(handle) = &self.diagnostics {
            handle.log(kind);
        }
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
