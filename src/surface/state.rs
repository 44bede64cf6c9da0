// SPDX-License-Identifier: MPL-2.0
//! Surface state: the message currently rendered and its fade phase.

use super::transition::Transition;
use std::time::Instant;

/// A toast surface showing one message.
///
/// Created by the notifier when a message needs to be shown and none is on
/// screen; dropped by the notifier once the queue drains and the fade-out
/// completes. Owned exclusively by the notifier.
#[derive(Debug, Clone)]
pub struct Surface {
    message: String,
    transition: Transition,
}

impl Surface {
    /// Creates a surface presenting `message`, fading in from `now`.
    #[must_use]
    pub(crate) fn new(message: String, now: Instant) -> Self {
        Self {
            message,
            transition: Transition::fade_in(now),
        }
    }

    /// Replaces the rendered message and restarts the fade-in.
    ///
    /// Every message re-fades in, including queue advances on an already
    /// attached surface.
    pub(crate) fn present(&mut self, message: String, now: Instant) {
        self.message = message;
        self.transition = Transition::fade_in(now);
    }

    /// Starts the detach fade-out.
    pub(crate) fn begin_detach(&mut self, now: Instant) {
        self.transition = Transition::fade_out(now);
    }

    /// Collapses a completed fade-in.
    pub(crate) fn settle(&mut self, now: Instant) {
        self.transition.settle(now);
    }

    /// The text currently rendered.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The surface opacity at `now`.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        self.transition.opacity(now)
    }

    /// True while the detach fade-out is running or done.
    #[must_use]
    pub fn is_detaching(&self) -> bool {
        matches!(self.transition, Transition::FadingOut { .. })
    }

    /// True once the detach fade-out has completed and the surface can be
    /// removed from the display tree.
    #[must_use]
    pub fn is_detached(&self, now: Instant) -> bool {
        self.transition.is_faded_out(now)
    }
}
