// SPDX-License-Identifier: MPL-2.0
//! The snackbar component.
//!
//! A [`Snackbar`] is a single transient message that animates in on
//! construction, optionally counts down to an auto-hide, and animates out
//! when closed. It follows the Elm-style split used across this crate:
//! the state machine lives in [`state`], rendering in [`view`].
//!
//! # Usage
//!
//! ```ignore
//! use iced_snackbar::{Snackbar, Variant};
//! use std::time::Duration;
//!
//! let snackbar = Snackbar::new("Image saved")
//!     .variant(Variant::Success)
//!     .duration(Some(Duration::from_secs(3)))
//!     .on_dismiss(|| println!("gone"));
//!
//! // In update: snackbar.update(message)
//! // In view: iced_snackbar::snackbar::view(&snackbar).map(Message::Snackbar)
//! // In subscription: snackbar.subscription().map(Message::Snackbar)
//! ```

mod state;
mod view;

pub use state::{CloseCallback, DismissCallback, Message, Phase, Snackbar};
pub use view::{view, Shifted};
