// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing toast lifecycle events.
//!
//! This module provides the central collector that receives events from the
//! notifier and stores them in a circular buffer.

use crossbeam_channel::{bounded, Receiver, Sender};

use super::{BufferCapacity, CircularBuffer, ToastEvent, ToastEventKind};

/// Size of the bounded channel between producers and the collector.
///
/// Toast activity is sparse; the bound exists so a host that never drains
/// the collector cannot grow memory without limit.
const CHANNEL_CAPACITY: usize = 256;

/// Handle for sending toast lifecycle events to the collector.
///
/// This handle is cheap to clone and can be shared across threads.
/// Events are sent via a bounded channel to avoid blocking the UI thread.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<ToastEvent>,
}

impl DiagnosticsHandle {
    /// Logs a toast lifecycle event.
    ///
    /// This method is non-blocking and will drop the event if the
    /// internal channel is full (backpressure protection).
    pub fn log(&self, kind: ToastEventKind) {
        let _ = self.event_tx.try_send(ToastEvent::new(kind));
    }
}

/// Collects toast lifecycle events into a memory-bounded buffer.
///
/// Producers log through cloned [`DiagnosticsHandle`]s; the host calls
/// [`DiagnosticsCollector::process_pending`] from its update loop to drain
/// the channel into the buffer.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<ToastEvent>,
    event_rx: Receiver<ToastEvent>,
    event_tx: Sender<ToastEvent>,
}

impl DiagnosticsCollector {
    /// Creates a new collector with the given buffer capacity.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(CHANNEL_CAPACITY);
        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
        }
    }

    /// Returns a handle that producers can use to log events.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Drains all pending events from the channel into the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Returns the number of buffered events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if no events are buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns an iterator over buffered events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &ToastEvent> {
        self.buffer.iter()
    }

    /// Clears all buffered events.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Returns the buffer capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}
