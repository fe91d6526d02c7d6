// SPDX-License-Identifier: MPL-2.0
//! Snackbar color variants.

use iced::Color;

use crate::design_tokens::palette;

/// Semantic category of a snackbar message, controlling its background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// Neutral message (dark gray).
    #[default]
    Default,
    /// Something went wrong (red).
    Error,
    /// Informational message (blue).
    Info,
    /// Operation completed successfully (green).
    Success,
    /// Warning that doesn't block operation (orange).
    Warning,
}

impl Variant {
    /// Every variant, in declaration order.
    pub const ALL: [Variant; 5] = [
        Variant::Default,
        Variant::Error,
        Variant::Info,
        Variant::Success,
        Variant::Warning,
    ];

    /// Returns the background color for this variant.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Variant::Default => palette::NEUTRAL_900,
            Variant::Error => palette::ERROR_500,
            Variant::Info => palette::INFO_500,
            Variant::Success => palette::SUCCESS_500,
            Variant::Warning => palette::WARNING_500,
        }
    }

    /// Returns the lowercase name of this variant.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Default => "default",
            Variant::Error => "error",
            Variant::Info => "info",
            Variant::Success => "success",
            Variant::Warning => "warning",
        }
    }

    /// Resolves a variant from its lowercase name.
    ///
    /// Unrecognized names resolve to [`Variant::Default`], so a bad name
    /// renders as a neutral message rather than failing.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "error" => Variant::Error,
            "info" => Variant::Info,
            "success" => Variant::Success,
            "warning" => Variant::Warning,
            _ => Variant::Default,
        }
    }
}
