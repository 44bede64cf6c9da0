// SPDX-License-Identifier: MPL-2.0
//! Iced integration for the notifier.
//!
//! This file binds the pure state machine to the runtime: messages carry
//! surface taps, timer completions, and repaint ticks back into the
//! notifier, and [`Effect::ScheduleAdvance`] becomes a sleep-backed task.
//! Hosts embed it the usual way - route `Message` through `update`, stack
//! `view` over their content, and batch `subscription` with their own.

use super::state::{Effect, Notifier};
use super::timer::AdvanceToken;
use crate::surface::widget::ToastOverlay;
use iced::{time, Element, Subscription, Task};
use std::time::{Duration, Instant};

/// Messages for notifier state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// The one-shot auto-advance timer elapsed.
    AdvanceElapsed(AdvanceToken),
    /// A recognized tap on the toast surface.
    SurfaceTapped,
    /// Explicit dismissal requested by the host.
    Dismiss,
    /// Periodic repaint/cleanup tick while a surface is on screen.
    Tick(Instant),
}

/// Repaint cadence while a surface is on screen.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

impl Notifier {
    /// Queues a message for display and returns the task that drives the
    /// auto-advance. Empty messages are dropped and produce no work.
    pub fn show(&mut self, message: impl Into<String>) -> Task<Message> {
        run(self.show_message(message))
    }

    /// Handles a notifier message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::AdvanceElapsed(token) => run(self.advance(token)),
            Message::SurfaceTapped => {
                self.interrupt();
                Task::none()
            }
            Message::Dismiss => {
                self.dismiss();
                Task::none()
            }
            Message::Tick(now) => {
                self.tick(now);
                Task::none()
            }
        }
    }

    /// Ticks only while a surface is on screen; idle notifiers subscribe
    /// to nothing.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.has_surface() {
            time::every(TICK_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    /// Renders the toast overlay. Stack this over the host's content; when
    /// no surface exists it renders nothing.
    pub fn view(&self) -> Element<'_, Message> {
        ToastOverlay::view_overlay(
            self.active_surface(),
            self.retiring_surface(),
            self.anchor(),
            Instant::now(),
        )
    }
}

/// Translates a core effect into runtime work.
fn run(effect: Effect) -> Task<Message> {
    match effect {
        Effect::None => Task::none(),
        Effect::ScheduleAdvance { token, after } => Task::perform(
            tokio::time::sleep(after),
            move |()| Message::AdvanceElapsed(token),
        ),
    }
}
