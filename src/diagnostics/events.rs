// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle event types.
//!
//! This module defines the events the notifier emits while processing its
//! queue. Events carry message lengths rather than message text so recent
//! activity can be inspected without exposing user-facing content.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// The type and associated data for a toast lifecycle event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToastEventKind {
    /// A message was accepted into the queue.
    Enqueued {
        /// Length of the message text, in characters.
        chars: usize,
        /// Queue length after the append.
        queue_len: usize,
    },

    /// An empty message was passed to `show_message` and dropped.
    DroppedEmpty,

    /// A message became the currently displayed one.
    Presented {
        /// Length of the message text, in characters.
        chars: usize,
    },

    /// The auto-advance timer fired and the queue was drained to idle.
    QueueDrained,

    /// The user tapped the surface, flushing the queue.
    Interrupted {
        /// Number of queued messages discarded.
        flushed: usize,
    },

    /// The host explicitly dismissed the toast, flushing the queue.
    Dismissed {
        /// Number of queued messages discarded.
        flushed: usize,
    },
}

/// A timestamped toast lifecycle event.
#[derive(Debug, Clone)]
pub struct ToastEvent {
    /// When the event occurred (monotonic clock for duration calculations).
    pub timestamp: Instant,
    /// The type and data of the event.
    pub kind: ToastEventKind,
}

impl ToastEvent {
    /// Creates a new event with the current timestamp.
    #[must_use]
    pub fn new(kind: ToastEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }

    /// Creates a new event with a specific timestamp.
    #[must_use]
    pub fn with_timestamp(kind: ToastEventKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}
