// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the snackbar widget set.
//!
//! Single source of truth for colors, spacing, sizing, typography, radii and
//! shadows used by the widgets. Tokens are plain constants so they can be
//! validated at compile time and referenced from style functions without
//! allocation.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Variant colors
    pub const NEUTRAL_900: Color = Color::from_rgb(0.192, 0.192, 0.192); // #313131
    pub const ERROR_500: Color = Color::from_rgb(0.827, 0.184, 0.184); // #d32f2f
    pub const INFO_500: Color = Color::from_rgb(0.129, 0.588, 0.953); // #2196f3
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.627, 0.278); // #43a047
    pub const WARNING_500: Color = Color::from_rgb(1.0, 0.596, 0.0); // #ff9800

    /// Text color rendered on top of any variant background.
    pub const ON_SNACKBAR: Color = WHITE;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Width cap applied to a snackbar on non-mobile screens.
    pub const SNACKBAR_MAX_WIDTH: f32 = 450.0;

    /// Travel distance of the slide transition, in logical pixels.
    pub const SNACKBAR_SLIDE_DISTANCE: f32 = 120.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Standard body text used for the snackbar message.
    pub const BODY: f32 = 14.0;

    /// Smaller text used for the action label.
    pub const BODY_SM: f32 = 13.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Sizing validation
    assert!(sizing::SNACKBAR_MAX_WIDTH > 0.0);
    assert!(sizing::SNACKBAR_SLIDE_DISTANCE > 0.0);
    assert!(sizing::SNACKBAR_SLIDE_DISTANCE < sizing::SNACKBAR_MAX_WIDTH);

    // Typography validation
    assert!(typography::BODY > typography::BODY_SM);

    // Radius validation
    assert!(radius::MD > radius::SM);

    // Color validation
    assert!(palette::NEUTRAL_900.r >= 0.0 && palette::NEUTRAL_900.r <= 1.0);
};
