// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Auto-hide**: How long each toast stays visible
//! - **Anchor**: Vertical placement of the toast on screen

// ==========================================================================
// Auto-hide Defaults
// ==========================================================================

/// Default display duration for a toast before it auto-advances (in seconds).
pub const DEFAULT_AUTO_HIDE_SECS: f32 = 2.5;

/// Minimum allowed auto-hide duration (in seconds).
pub const MIN_AUTO_HIDE_SECS: f32 = 0.5;

/// Maximum allowed auto-hide duration (in seconds).
pub const MAX_AUTO_HIDE_SECS: f32 = 30.0;

// ==========================================================================
// Anchor Defaults
// ==========================================================================

/// Default vertical anchor of the toast center, as a fraction of the
/// display height (0.0 = top, 1.0 = bottom).
pub const DEFAULT_VERTICAL_ANCHOR: f32 = 0.8;

/// Minimum allowed vertical anchor.
pub const MIN_VERTICAL_ANCHOR: f32 = 0.1;

/// Maximum allowed vertical anchor.
pub const MAX_VERTICAL_ANCHOR: f32 = 0.95;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Auto-hide validation
    assert!(MIN_AUTO_HIDE_SECS > 0.0);
    assert!(MAX_AUTO_HIDE_SECS > MIN_AUTO_HIDE_SECS);
    assert!(DEFAULT_AUTO_HIDE_SECS >= MIN_AUTO_HIDE_SECS);
    assert!(DEFAULT_AUTO_HIDE_SECS <= MAX_AUTO_HIDE_SECS);

    // Anchor validation
    assert!(MIN_VERTICAL_ANCHOR > 0.0);
    assert!(MAX_VERTICAL_ANCHOR < 1.0);
    assert!(DEFAULT_VERTICAL_ANCHOR >= MIN_VERTICAL_ANCHOR);
    assert!(DEFAULT_VERTICAL_ANCHOR <= MAX_VERTICAL_ANCHOR);
};
