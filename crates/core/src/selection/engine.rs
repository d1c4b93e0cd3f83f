use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::grid::TimeGrid;

/// One grid cell a pointer can touch: a date, a slot, and optionally the
/// resource column the cell belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotCell {
    pub date: NaiveDate,
    pub slot: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
}

impl SlotCell {
    pub fn new(date: NaiveDate, slot: impl Into<String>, resource_id: Option<String>) -> Self {
        Self {
            date,
            slot: slot.into(),
            resource_id,
        }
    }
}

/// The normalized outcome of a completed drag: a contiguous slot range on one
/// date, optionally bound to a resource.
///
/// `end_slot` is already bumped one slot past the highest selected cell
/// (clamped at the ruler end), ready to be stored as an appointment's
/// inclusive `end_slot`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSelection {
    pub date: NaiveDate,
    pub start_slot: String,
    pub end_slot: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    Idle,
    Dragging { anchor: SlotCell, cursor: SlotCell },
}

/// Turns pointer-down/enter/up sequences over grid cells into a normalized
/// slot range.
///
/// Two invariants hold while dragging: the cursor never leaves the anchor's
/// date, and once the selection is bound to a resource column it never crosses
/// into another one. Enter events violating either are ignored.
#[derive(Debug, Clone)]
pub struct SelectionEngine {
    grid: TimeGrid,
    state: State,
}

impl SelectionEngine {
    pub fn new(grid: TimeGrid) -> Self {
        Self {
            grid,
            state: State::Idle,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, State::Dragging { .. })
    }

    /// Starts a drag: anchor and cursor both at the pressed cell.
    pub fn pointer_down(&mut self, date: NaiveDate, slot: &str, resource_id: Option<&str>) {
        let cell = SlotCell::new(date, slot, resource_id.map(str::to_string));
        self.state = State::Dragging {
            anchor: cell.clone(),
            cursor: cell,
        };
    }

    /// Extends the drag to another cell, if the invariants allow it.
    pub fn pointer_enter(&mut self, date: NaiveDate, slot: &str, resource_id: Option<&str>) {
        let State::Dragging { anchor, cursor } = &mut self.state else {
            return;
        };

        if date != anchor.date {
            tracing::debug!(%date, anchor = %anchor.date, "cross-date enter ignored");
            return;
        }
        let crosses_resource = match (resource_id, anchor.resource_id.as_deref()) {
            (Some(entered), Some(anchored)) => entered != anchored,
            _ => false,
        };
        if crosses_resource {
            tracing::debug!(slot = %slot, "cross-resource enter ignored");
            return;
        }

        *cursor = SlotCell::new(
            date,
            slot,
            resource_id
                .map(str::to_string)
                .or_else(|| anchor.resource_id.clone()),
        );
    }

    /// Ends the drag and emits the normalized range, or `None` when no drag
    /// was in progress or a slot is not on the ruler. Always returns to idle.
    pub fn pointer_up(
        &mut self,
        _date: NaiveDate,
        slot: &str,
        resource_id: Option<&str>,
    ) -> Option<SlotSelection> {
        let State::Dragging { anchor, .. } = std::mem::replace(&mut self.state, State::Idle)
        else {
            return None;
        };

        let resource_id = resource_id
            .map(str::to_string)
            .or_else(|| anchor.resource_id.clone());

        let anchor_index = self.grid.index_of(&anchor.slot)?;
        let cursor_index = self.grid.index_of(slot)?;
        let min = anchor_index.min(cursor_index);
        let max = anchor_index.max(cursor_index);

        Some(SlotSelection {
            date: anchor.date,
            start_slot: self.grid.slot_at(min)?.to_string(),
            end_slot: self.grid.bump(max).to_string(),
            resource_id,
        })
    }

    /// Drops any in-progress drag (dialog cancel/close).
    pub fn clear(&mut self) {
        self.state = State::Idle;
    }

    /// The highlight projection: one key per selected cell, in the
    /// `"YYYY-MM-DD-HH:MM-<resource|none>"` format the presentation keys
    /// cells by. Empty when idle.
    pub fn selected_slot_keys(&self) -> HashSet<String> {
        let State::Dragging { anchor, cursor } = &self.state else {
            return HashSet::new();
        };
        let (Some(anchor_index), Some(cursor_index)) =
            (self.grid.index_of(&anchor.slot), self.grid.index_of(&cursor.slot))
        else {
            return HashSet::new();
        };

        let min = anchor_index.min(cursor_index);
        let max = anchor_index.max(cursor_index);
        (min..=max)
            .filter_map(|i| self.grid.slot_at(i))
            .map(|slot| slot_key(anchor.date, slot, anchor.resource_id.as_deref()))
            .collect()
    }

    /// Whether a cell is part of the in-progress selection.
    pub fn is_selected(&self, date: NaiveDate, slot: &str, resource_id: Option<&str>) -> bool {
        self.selected_slot_keys()
            .contains(&slot_key(date, slot, resource_id))
    }
}

/// The cell key used for highlight lookups.
pub fn slot_key(date: NaiveDate, slot: &str, resource_id: Option<&str>) -> String {
    format!("{date}-{slot}-{}", resource_id.unwrap_or("none"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn make_engine() -> SelectionEngine {
        SelectionEngine::new(TimeGrid::new())
    }

    #[test]
    fn test_drag_commits_exclusive_bumped_range() {
        let mut engine = make_engine();
        let date = make_date(2024, 6, 15);

        engine.pointer_down(date, "09:00", None);
        engine.pointer_enter(date, "09:30", None);
        let selection = engine.pointer_up(date, "09:30", None).unwrap();

        assert_eq!(selection.date, date);
        assert_eq!(selection.start_slot, "09:00");
        assert_eq!(selection.end_slot, "09:45"); // one slot past the max
        assert!(!engine.is_dragging());
    }

    #[test]
    fn test_upward_drag_normalizes() {
        let mut engine = make_engine();
        let date = make_date(2024, 6, 15);

        engine.pointer_down(date, "10:00", None);
        let selection = engine.pointer_up(date, "09:00", None).unwrap();

        assert_eq!(selection.start_slot, "09:00");
        assert_eq!(selection.end_slot, "10:15");
    }

    #[test]
    fn test_single_click_selects_one_slot() {
        let mut engine = make_engine();
        let date = make_date(2024, 6, 15);

        engine.pointer_down(date, "09:00", None);
        let selection = engine.pointer_up(date, "09:00", None).unwrap();

        assert_eq!(selection.start_slot, "09:00");
        assert_eq!(selection.end_slot, "09:15");
    }

    #[test]
    fn test_end_clamps_at_ruler_end() {
        let mut engine = make_engine();
        let date = make_date(2024, 6, 15);

        engine.pointer_down(date, "23:45", None);
        engine.pointer_enter(date, "24:00", None);
        let selection = engine.pointer_up(date, "24:00", None).unwrap();

        assert_eq!(selection.start_slot, "23:45");
        assert_eq!(selection.end_slot, "24:00");
    }

    #[test]
    fn test_cross_date_enter_ignored() {
        let mut engine = make_engine();
        let date = make_date(2024, 6, 15);

        engine.pointer_down(date, "09:00", None);
        engine.pointer_enter(make_date(2024, 6, 16), "11:00", None);

        // Cursor stayed at the last valid position.
        assert!(engine.is_selected(date, "09:00", None));
        assert!(!engine.is_selected(date, "11:00", None));
    }

    #[test]
    fn test_cross_resource_enter_ignored() {
        let mut engine = make_engine();
        let date = make_date(2024, 6, 15);

        engine.pointer_down(date, "09:00", Some("room-1"));
        engine.pointer_enter(date, "10:00", Some("room-2"));

        assert!(!engine.is_selected(date, "10:00", Some("room-1")));

        engine.pointer_enter(date, "09:30", Some("room-1"));
        assert!(engine.is_selected(date, "09:30", Some("room-1")));
    }

    #[test]
    fn test_resourceless_enter_inherits_anchor_resource() {
        let mut engine = make_engine();
        let date = make_date(2024, 6, 15);

        engine.pointer_down(date, "09:00", Some("room-1"));
        engine.pointer_enter(date, "09:30", None);
        let selection = engine.pointer_up(date, "09:30", None).unwrap();

        assert_eq!(selection.resource_id.as_deref(), Some("room-1"));
    }

    #[test]
    fn test_selected_slot_keys_projection() {
        let mut engine = make_engine();
        let date = make_date(2024, 6, 15);

        engine.pointer_down(date, "09:00", Some("room-1"));
        engine.pointer_enter(date, "09:30", Some("room-1"));

        let keys = engine.selected_slot_keys();
        assert_eq!(keys.len(), 3);
        assert!(keys.contains("2024-06-15-09:00-room-1"));
        assert!(keys.contains("2024-06-15-09:15-room-1"));
        assert!(keys.contains("2024-06-15-09:30-room-1"));
    }

    #[test]
    fn test_slot_key_without_resource() {
        assert_eq!(
            slot_key(make_date(2024, 6, 15), "09:00", None),
            "2024-06-15-09:00-none"
        );
    }

    #[test]
    fn test_pointer_up_without_drag() {
        let mut engine = make_engine();
        assert_eq!(engine.pointer_up(make_date(2024, 6, 15), "09:00", None), None);
    }

    #[test]
    fn test_clear_drops_drag_from_any_state() {
        let mut engine = make_engine();
        let date = make_date(2024, 6, 15);

        engine.pointer_down(date, "09:00", None);
        engine.clear();

        assert!(!engine.is_dragging());
        assert!(engine.selected_slot_keys().is_empty());
        assert_eq!(engine.pointer_up(date, "09:30", None), None);
    }

    #[test]
    fn test_enter_while_idle_is_ignored() {
        let mut engine = make_engine();
        engine.pointer_enter(make_date(2024, 6, 15), "09:00", None);
        assert!(!engine.is_dragging());
    }
}
