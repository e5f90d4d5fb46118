// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only view of the viewed month, handed to the presentation layer.

use slot_picker::{SessionState, visible_dates};
use slot_picker_domain::{
    CalendarWindow, DateKey, Heatmap, SlotId, is_weekend_excluded, shade_opacity,
};

/// Renders views after state changes.
///
/// Implemented by the presentation layer. The session never reaches into a
/// presentation tree; it only hands over a fresh view.
pub trait Presenter {
    /// Draws the given view.
    fn render(&mut self, view: &MonthView);
}

/// A column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotHeader {
    /// The slot of the column.
    pub slot: SlotId,
    /// The wall-clock label, e.g. `"08:30"`.
    pub label: &'static str,
}

/// One cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellView {
    /// The slot of the cell.
    pub slot: SlotId,
    /// Whether the cell is selected.
    pub selected: bool,
    /// Popularity count.
    pub heat: u32,
    /// Weekend evening cells are shown as unavailable-looking and never shaded.
    pub weekend_excluded: bool,
    /// Heat shading opacity, if shaded.
    pub shade: Option<f64>,
}

/// One row of the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct DateRow {
    /// The date of the row.
    pub date: DateKey,
    /// Short weekday, e.g. `"Sat"`.
    pub weekday: String,
    /// Day and short month, e.g. `"15 Mar"`.
    pub full_date: String,
    /// Whether the date is a Saturday or Sunday.
    pub is_weekend: bool,
    /// One cell per slot, ascending.
    pub cells: Vec<CellView>,
}

/// Everything needed to draw the viewed month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthView {
    /// Month title, e.g. `"Mar 2025"`.
    pub title: String,
    /// Whether the previous-month control is enabled.
    pub can_go_back: bool,
    /// Whether the next-month control is enabled.
    pub can_go_forward: bool,
    /// Column headers.
    pub slots: Vec<SlotHeader>,
    /// One row per eligible date of the month.
    pub rows: Vec<DateRow>,
}

impl MonthView {
    /// Builds the view of the month `state` is on.
    #[must_use]
    pub fn build(window: &CalendarWindow, state: &SessionState, heatmap: &Heatmap) -> Self {
        let slots: Vec<SlotHeader> = SlotId::ALL
            .iter()
            .map(|slot| SlotHeader {
                slot: *slot,
                label: slot.label(),
            })
            .collect();

        let rows: Vec<DateRow> = visible_dates(window, state)
            .into_iter()
            .map(|date| DateRow {
                date,
                weekday: date.weekday_label(),
                full_date: date.full_date_label(),
                is_weekend: date.is_weekend(),
                cells: SlotId::ALL
                    .iter()
                    .map(|slot| build_cell(state, heatmap, date, *slot))
                    .collect(),
            })
            .collect();

        Self {
            title: state.cursor.title(),
            can_go_back: state.cursor.can_go_back(window),
            can_go_forward: state.cursor.can_go_forward(window),
            slots,
            rows,
        }
    }
}

fn build_cell(state: &SessionState, heatmap: &Heatmap, date: DateKey, slot: SlotId) -> CellView {
    let heat: u32 = heatmap.heat_for(date, slot);
    let weekend_excluded: bool = is_weekend_excluded(date, slot);
    CellView {
        slot,
        selected: state.selection.contains(date, slot),
        heat,
        weekend_excluded,
        shade: shade_opacity(heat, weekend_excluded),
    }
}
