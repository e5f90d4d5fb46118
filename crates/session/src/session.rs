// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::Arc;

use slot_picker::{Command, Outcome, SelectionState, SessionState, TransitionResult, apply};
use slot_picker_domain::{CalendarWindow, Heatmap, OptionsConfig};
use time::Date;
use tracing::{error, info};

use crate::clock::Clock;
use crate::error::SessionError;
use crate::payload::{InboundPayload, OutboundPayload};
use crate::view::{MonthView, Presenter};

/// A single picking session.
///
/// Created from the inbound token, mutated only through [`Session::apply`]
/// and [`Session::dispatch`], and closed by [`Session::finish`].
#[derive(Debug, Clone)]
pub struct Session {
    window: CalendarWindow,
    heatmap: Arc<Heatmap>,
    state: SessionState,
}

impl Session {
    /// Starts a session from the inbound token.
    ///
    /// # Errors
    ///
    /// * `SessionError::MissingInput` if no token (or an empty one) was supplied
    /// * `SessionError::Window` if today's window cannot be computed
    /// * `SessionError::Decode` if the token does not decode to a payload
    pub async fn start(token: Option<&str>, clock: &impl Clock) -> Result<Self, SessionError> {
        let Some(token) = token.filter(|token| !token.is_empty()) else {
            error!("No inbound data provided");
            return Err(SessionError::MissingInput);
        };

        let today: Date = clock.today().map_err(SessionError::Window)?;

        let payload: InboundPayload = slot_picker_codec::decode(token).await.map_err(|err| {
            error!(stage = %err.stage(), error = %err, "Failed to decode inbound data");
            SessionError::Decode(err)
        })?;

        Self::from_payload(payload, today)
    }

    /// Starts a session from an already-decoded payload.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Window` if the window cannot be computed from `today`.
    pub fn from_payload(payload: InboundPayload, today: Date) -> Result<Self, SessionError> {
        let window: CalendarWindow = CalendarWindow::compute(today).map_err(SessionError::Window)?;
        let options: OptionsConfig = payload.options();
        let selection: SelectionState = payload.whitelisted_sessions.unwrap_or_default();
        let heatmap: Heatmap = payload.heatmap.unwrap_or_default();

        info!(
            today = %today,
            eligible_dates = window.dates().len(),
            selected_dates = selection.date_count(),
            heatmap_dates = heatmap.len(),
            "Session started"
        );

        let state: SessionState = SessionState::new(selection, options, &window);
        Ok(Self {
            window,
            heatmap: Arc::new(heatmap),
            state,
        })
    }

    /// Applies a command.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Command` if the command is rejected. The state
    /// is unchanged and the session stays usable.
    pub fn apply(&mut self, command: Command) -> Result<Outcome, SessionError> {
        let result: TransitionResult = apply(&self.window, &self.state, command)?;
        self.state = result.new_state;
        Ok(result.outcome)
    }

    /// Applies a command and re-renders when it changed anything.
    ///
    /// # Errors
    ///
    /// See [`Session::apply`]. Nothing is rendered on error.
    pub fn dispatch(
        &mut self,
        command: Command,
        presenter: &mut impl Presenter,
    ) -> Result<Outcome, SessionError> {
        let outcome: Outcome = self.apply(command)?;
        if outcome.is_changed() {
            presenter.render(&self.month_view());
        }
        Ok(outcome)
    }

    /// Builds the view of the month currently shown.
    #[must_use]
    pub fn month_view(&self) -> MonthView {
        MonthView::build(&self.window, &self.state, &self.heatmap)
    }

    /// The payload [`Session::finish`] would encode.
    #[must_use]
    pub fn outbound(&self) -> OutboundPayload {
        OutboundPayload::save(self.state.selection.clone(), self.state.options)
    }

    /// Encodes the final selection and options into the outbound token.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Encode` if the payload cannot be encoded.
    pub async fn finish(&self) -> Result<String, SessionError> {
        let payload: OutboundPayload = self.outbound();
        let token: String = slot_picker_codec::encode(&payload).await.map_err(|err| {
            error!(stage = %err.stage(), error = %err, "Failed to encode outbound data");
            SessionError::Encode(err)
        })?;

        info!(
            selected_dates = payload.whitelisted_sessions.date_count(),
            selected_cells = payload.whitelisted_sessions.cell_count(),
            token_len = token.len(),
            "Session finished"
        );

        Ok(token)
    }

    /// The eligible dates and navigable months of this session.
    #[must_use]
    pub const fn window(&self) -> &CalendarWindow {
        &self.window
    }

    /// The current selection, options and viewed month.
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Shared handle to the read-only heatmap.
    #[must_use]
    pub fn heatmap(&self) -> Arc<Heatmap> {
        Arc::clone(&self.heatmap)
    }
}
