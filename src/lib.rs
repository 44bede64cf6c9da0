// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` provides queued, auto-dismissing toast notifications for
//! applications built with the Iced GUI framework.
//!
//! One toast is visible at a time; further messages queue and display in
//! arrival order, each for a fixed duration, until the queue drains or the
//! user taps the toast to flush everything early. The host embeds the
//! [`notifier::Notifier`] in its state and routes its messages, view, and
//! subscription the usual Iced way.

#![doc(html_root_url = "https://docs.rs/iced_toast/0.1.0")]

pub mod config;
pub mod design_tokens;
pub mod diagnostics;
pub mod error;
pub mod notifier;
pub mod surface;

#[cfg(test)]
mod test_utils;
