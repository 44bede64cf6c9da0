// SPDX-License-Identifier: MPL-2.0
//! Toast notifier: queue, timing, and dismissal control flow.
//!
//! This module owns the toast state machine. Messages queue in arrival
//! order; one is visible at a time; each displayed message auto-advances
//! to the next (or to idle) after the configured duration; a tap on the
//! surface flushes everything early.
//!
//! # Components
//!
//! - `state` - `Notifier` state machine with the pure core API
//! - `component` - Iced glue: `Message`, `update`, `view`, `subscription`
//! - `timer` - the cancelable one-shot auto-advance slot
//!
//! # Usage
//!
//! ```ignore
//! use iced_toast::config;
//! use iced_toast::notifier::{Message, Notifier};
//!
//! // In the host state
//! let mut toasts = Notifier::new(&config::load().unwrap_or_default());
//!
//! // Anywhere in the host's update
//! let task = toasts.show("Contact saved").map(HostMessage::Toast);
//!
//! // In the host's view, stacked over the content
//! let overlay = toasts.view().map(HostMessage::Toast);
//! ```

mod component;
mod state;
mod timer;

pub use component::Message;
pub use state::{Effect, Notifier};
pub use timer::AdvanceToken;
