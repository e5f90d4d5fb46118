// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{FixedClock, InboundPayload, MonthView, Presenter, Session};
use slot_picker_domain::{DateKey, SlotId};
use time::macros::date;

/// Saturday 15 March 2025.
pub const TODAY: FixedClock = FixedClock(date!(2025 - 03 - 15));

pub fn slot(ordinal: u8) -> SlotId {
    SlotId::new(ordinal).unwrap()
}

pub fn key(text: &str) -> DateKey {
    text.parse().unwrap()
}

pub async fn token_for(json: &serde_json::Value) -> String {
    slot_picker_codec::encode(json).await.unwrap()
}

pub fn session_from(json: serde_json::Value) -> Session {
    let payload: InboundPayload = serde_json::from_value(json).unwrap();
    Session::from_payload(payload, TODAY.0).unwrap()
}

/// Records every rendered view.
#[derive(Default)]
pub struct RecordingPresenter {
    pub views: Vec<MonthView>,
}

impl Presenter for RecordingPresenter {
    fn render(&mut self, view: &MonthView) {
        self.views.push(view.clone());
    }
}
