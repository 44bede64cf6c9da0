// SPDX-License-Identifier: MPL-2.0
//! End-to-end queue flow over the public API.
//!
//! These tests drive the notifier the way the Iced shell does - delivering
//! timer tokens, taps, and ticks as discrete events - and check the
//! externally observable guarantees: FIFO display order, single visible
//! message, timer cancellation, and idempotent dismissal.

use std::time::{Duration, Instant};

use iced_toast::config::Config;
use iced_toast::notifier::{AdvanceToken, Effect, Notifier};

fn token_of(effect: Effect) -> AdvanceToken {
    match effect {
        Effect::ScheduleAdvance { token, .. } => token,
        Effect::None => panic!("expected a scheduled advance"),
    }
}

#[test]
fn first_show_displays_and_later_shows_queue() {
    let mut notifier = Notifier::default();

    let _ = notifier.show_message("first");
    assert_eq!(notifier.current_message(), Some("first"));
    assert_eq!(notifier.queued_len(), 0);

    let _ = notifier.show_message("second");
    let _ = notifier.show_message("third");
    assert_eq!(notifier.current_message(), Some("first"));
    assert_eq!(notifier.queued_len(), 2);
}

#[test]
fn empty_input_changes_nothing() {
    let mut notifier = Notifier::default();

    assert_eq!(notifier.show_message(""), Effect::None);
    assert!(notifier.is_idle());

    let _ = notifier.show_message("real");
    assert_eq!(notifier.show_message(String::new()), Effect::None);
    assert_eq!(notifier.queued_len(), 0);
    assert_eq!(notifier.current_message(), Some("real"));
}

#[test]
fn queue_drains_in_enqueue_order() {
    let mut notifier = Notifier::default();
    let mut shown = Vec::new();

    let mut effect = notifier.show_message("A");
    let _ = notifier.show_message("B");
    let _ = notifier.show_message("C");

    while let Effect::ScheduleAdvance { token, .. } = effect {
        shown.push(notifier.current_message().expect("showing").to_string());
        effect = notifier.advance(token);
    }

    assert_eq!(shown, vec!["A", "B", "C"]);
    assert!(notifier.is_idle());
}

#[test]
fn single_message_round_trip() {
    let mut notifier = Notifier::default();

    let effect = notifier.show_message("Hello");
    assert_eq!(notifier.queued_len(), 0);
    assert_eq!(notifier.current_message(), Some("Hello"));
    assert!(!notifier.is_idle());

    // The shell would deliver this token after the auto-hide duration.
    let next = notifier.advance(token_of(effect));
    assert_eq!(next, Effect::None);
    assert!(notifier.is_idle());
    assert_eq!(notifier.current_message(), None);
}

#[test]
fn scheduled_advance_carries_the_configured_duration() {
    let config = Config {
        auto_hide_secs: Some(1.5),
        vertical_anchor: None,
    };
    let mut notifier = Notifier::new(&config);

    match notifier.show_message("timed") {
        Effect::ScheduleAdvance { after, .. } => {
            assert_eq!(after, Duration::from_secs_f32(1.5));
        }
        Effect::None => panic!("expected a scheduled advance"),
    }
}

#[test]
fn interrupt_mid_run_flushes_everything() {
    let mut notifier = Notifier::default();
    let token = token_of(notifier.show_message("A"));
    let _ = notifier.show_message("B");
    let _ = notifier.show_message("C");

    notifier.interrupt();

    assert!(notifier.is_idle());
    assert_eq!(notifier.queued_len(), 0);

    // The outstanding timer was canceled; its late delivery is inert.
    assert_eq!(notifier.advance(token), Effect::None);
    assert!(notifier.is_idle());
    assert_eq!(notifier.queued_len(), 0);
}

#[test]
fn dismiss_while_idle_is_idempotent() {
    let mut notifier = Notifier::default();

    notifier.dismiss();
    notifier.interrupt();
    notifier.dismiss();

    assert!(notifier.is_idle());
    assert_eq!(notifier.queued_len(), 0);
    assert!(!notifier.has_surface());
}

#[test]
fn advances_without_display_root() {
    // The overlay is declarative: whether the host ever mounts `view()`
    // must not change queue or timer behavior. This run never renders.
    let mut notifier = Notifier::default();

    let mut effect = notifier.show_message("invisible A");
    let _ = notifier.show_message("invisible B");

    let mut cycles = 0;
    while let Effect::ScheduleAdvance { token, .. } = effect {
        cycles += 1;
        effect = notifier.advance(token);
    }

    assert_eq!(cycles, 2);
    assert!(notifier.is_idle());
}

#[test]
fn retired_surface_is_pruned_by_ticks() {
    let mut notifier = Notifier::default();
    let token = token_of(notifier.show_message("bye"));
    let _ = notifier.advance(token);

    assert!(notifier.is_idle());
    assert!(notifier.has_surface());

    // Immediately after hiding, the fade-out is still running.
    notifier.tick(Instant::now());
    assert!(notifier.has_surface());

    // Well past the fade, the surface is removed from the display tree.
    notifier.tick(Instant::now() + Duration::from_secs(1));
    assert!(!notifier.has_surface());
}

#[test]
fn new_show_during_fade_out_starts_a_fresh_surface() {
    let mut notifier = Notifier::default();
    let token = token_of(notifier.show_message("old"));
    let _ = notifier.advance(token);
    assert!(notifier.is_idle());

    let effect = notifier.show_message("new");

    assert_eq!(notifier.current_message(), Some("new"));
    assert!(matches!(effect, Effect::ScheduleAdvance { .. }));
}
