// SPDX-License-Identifier: MPL-2.0
//! `iced_snackbar` provides transient snackbar notifications for the Iced
//! GUI toolkit.
//!
//! A snackbar is a short message that animates in over the application,
//! optionally dismisses itself after a configurable duration, and animates
//! out again. The crate follows the Elm-style "state down, messages up"
//! pattern: every component is plain state driven by messages, so all
//! behavior is testable without a running event loop.
//!
//! # Components
//!
//! - [`Snackbar`] - a single message with variant color, anchor position,
//!   transition animation and auto-hide countdown
//! - [`SnackbarContainer`] - the full-screen region anchoring snackbars to
//!   an edge or corner without blocking input
//! - [`Snackbars`] - a managed stack with a visible cap and pending queue
//!
//! # Usage
//!
//! ```ignore
//! use iced_snackbar::{Snackbar, Snackbars, Variant};
//! use std::time::Duration;
//!
//! // In your application state
//! let mut snackbars = Snackbars::new();
//!
//! // Push a message
//! snackbars.push(
//!     Snackbar::new("Image saved")
//!         .variant(Variant::Success)
//!         .duration(Some(Duration::from_secs(3)))
//!         .on_dismiss(|| {}),
//! );
//!
//! // In view, layer the stack over your content
//! // iced::widget::stack![content, snackbars.view().map(Message::Snackbars)]
//! // and forward snackbars.subscription() in your subscription function.
//! ```

pub mod animation;
pub mod container;
pub mod defaults;
pub mod design_tokens;
pub mod manager;
pub mod position;
pub mod snackbar;
pub mod transition;
pub mod variant;

#[cfg(test)]
pub(crate) mod test_utils;

pub use container::SnackbarContainer;
pub use manager::{SnackbarId, Snackbars};
pub use position::{Horizontal, Vertical};
pub use snackbar::{Phase, Snackbar};
pub use transition::{Transition, TransitionStyle};
pub use variant::Variant;
