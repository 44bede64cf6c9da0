// SPDX-License-Identifier: MPL-2.0
//! Time-based fade envelope for the toast surface.
//!
//! Attach and detach are rendered as short opacity ramps. The envelope is
//! computed from elapsed wall-clock time against a monotonic start instant,
//! so the periodic tick only has to trigger repaints - it carries no
//! animation state of its own.

use crate::design_tokens::timing;
use std::time::Instant;

/// The surface's current fade phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Attaching: opacity ramps from 0 to 1 over [`timing::FADE`].
    FadingIn { started: Instant },
    /// Fully attached and opaque.
    Visible,
    /// Detaching: opacity ramps from 1 to 0 over [`timing::FADE`].
    FadingOut { started: Instant },
}

impl Transition {
    /// Starts a fade-in at `now`.
    #[must_use]
    pub fn fade_in(now: Instant) -> Self {
        Transition::FadingIn { started: now }
    }

    /// Starts a fade-out at `now`.
    #[must_use]
    pub fn fade_out(now: Instant) -> Self {
        Transition::FadingOut { started: now }
    }

    /// Returns the opacity of the surface at `now`, in `0.0..=1.0`.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        match self {
            Transition::FadingIn { started } => progress(*started, now),
            Transition::Visible => 1.0,
            Transition::FadingOut { started } => 1.0 - progress(*started, now),
        }
    }

    /// Collapses a completed fade-in into `Visible`.
    pub fn settle(&mut self, now: Instant) {
        if let Transition::FadingIn { started } = self {
            if progress(*started, now) >= 1.0 {
                *self = Transition::Visible;
            }
        }
    }

    /// Returns true once a fade-out has fully completed at `now`.
    #[must_use]
    pub fn is_faded_out(&self, now: Instant) -> bool {
        match self {
            Transition::FadingOut { started } => progress(*started, now) >= 1.0,
            _ => false,
        }
    }
}

/// Linear ramp over [`timing::FADE`], clamped to `0.0..=1.0`.
fn progress(started: Instant, now: Instant) -> f32 {
    let elapsed = now.saturating_duration_since(started);
    (elapsed.as_secs_f32() / timing::FADE.as_secs_f32()).clamp(0.0, 1.0)
}
