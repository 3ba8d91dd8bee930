//! Fundraiser donation form.
//!
//! Shows the active fundraiser, collects the donor's details and sends the
//! donation to the backend, which answers with the payment provider's
//! checkout URL. State lives in an immutable `PageState` moved through pure
//! transitions; `FormController` runs the asynchronous parts against any
//! `Transport` and `Navigator`. The `browser` module wires both to `fetch`
//! and `window.location` and exports `DonationPage` to JavaScript.

pub mod console;

pub mod api;
pub mod config;
pub mod error;
pub mod instructions;
pub mod navigator;
pub mod state;
pub mod view;

#[cfg(target_arch = "wasm32")]
pub mod browser;

#[cfg(test)]
mod testing;

pub use crate::api::{ApiClient, Transport};
pub use crate::config::Config;
pub use crate::error::{ApiError, FormError};
pub use crate::instructions::FormController;
pub use crate::navigator::Navigator;
pub use crate::state::*;
pub use crate::view::PageView;
