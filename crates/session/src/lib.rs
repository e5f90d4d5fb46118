// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! One picking session: decode the inbound token, apply user commands,
//! encode the outbound token.
//!
//! ## Lifecycle
//!
//! ```text
//! Session::start(token, clock)   -> Loaded (or a terminal SessionError)
//! Session::dispatch(command, ..) -> Loaded, re-rendered when changed
//! Session::finish()              -> outbound token
//! ```
//!
//! Rejected commands leave the session usable. Startup and save failures do not.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod clock;
mod error;
mod payload;
mod session;
mod view;

#[cfg(test)]
mod tests;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::SessionError;
pub use payload::{Action, InboundPayload, OutboundPayload};
pub use session::Session;
pub use view::{CellView, DateRow, MonthView, Presenter, SlotHeader};
