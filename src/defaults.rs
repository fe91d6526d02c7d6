// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for the snackbar behavior constants.
//!
//! Single source of truth for the timing and layout thresholds used by the
//! widgets. Positional and visual defaults live on their enums as `Default`
//! impls; everything numeric lives here.
//!
//! # Categories
//!
//! - **Transition**: entrance/exit animation timing
//! - **Ticking**: animation frame cadence
//! - **Responsive**: mobile breakpoint

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Time for a full entrance or exit sweep of the animation value,
/// in milliseconds.
pub const TRANSITION_SWEEP_MS: u64 = 500;

// ==========================================================================
// Ticking Defaults
// ==========================================================================

/// Interval between animation ticks while a snackbar is live,
/// in milliseconds (roughly one tick per frame at 60 Hz).
pub const TICK_INTERVAL_MS: u64 = 16;

// ==========================================================================
// Responsive Defaults
// ==========================================================================

/// Screen widths below this threshold are treated as mobile, in logical
/// pixels. Non-mobile screens cap the snackbar width.
pub const MOBILE_BREAKPOINT: f32 = 600.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Transition validation
    assert!(TRANSITION_SWEEP_MS > 0);

    // Ticking validation
    assert!(TICK_INTERVAL_MS > 0);
    assert!(TICK_INTERVAL_MS < TRANSITION_SWEEP_MS);

    // Responsive validation
    assert!(MOBILE_BREAKPOINT > 0.0);
};
