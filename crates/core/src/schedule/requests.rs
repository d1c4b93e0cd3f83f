//! Boundary contracts with the presentation/dialog collaborator.
//!
//! These are pure data types: the engine hands an [`EditorRequest`] out when a
//! selection or edit wants a dialog, and receives an optional [`EditorResult`]
//! back when the dialog closes. Drag-and-drop commits arrive as
//! [`DragDropRequest`]s. No I/O happens here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::types::Resource;

/// Command asking the collaborator to open the appointment editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorRequest {
    pub date: NaiveDate,
    pub start_slot: String,
    pub end_slot: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    /// Catalog the dialog offers in its room picker.
    pub resources: Vec<Resource>,
}

/// What the editor dialog reports back when it closes with a result.
///
/// A missing `id` means "create"; `remove` turns the commit into a delete.
/// Closing the dialog without a result is modeled as `None` at the call site,
/// not as a variant here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub date: NaiveDate,
    pub title: String,
    pub start_slot: String,
    pub end_slot: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    /// Explicitly resubmitted color; absent means "keep the stored color".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub remove: bool,
}

impl EditorResult {
    /// A create result (no id yet).
    pub fn create(
        date: NaiveDate,
        title: impl Into<String>,
        start_slot: impl Into<String>,
        end_slot: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            date,
            title: title.into(),
            start_slot: start_slot.into(),
            end_slot: end_slot.into(),
            resource_id: None,
            color: None,
            remove: false,
        }
    }

    /// Targets an existing appointment.
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the resource assignment.
    pub fn with_resource(mut self, resource_id: impl Into<String>) -> Self {
        self.resource_id = Some(resource_id.into());
        self
    }

    /// Explicitly resubmits a color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Marks the result as a deletion.
    pub fn removal(mut self) -> Self {
        self.remove = true;
        self
    }
}

/// Field-wise patch for an existing appointment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAppointmentRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_slot: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_slot: Option<String>,
    /// `Some(None)` clears the resource assignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// When set, the patch deletes the appointment instead of updating it.
    #[serde(default)]
    pub remove: bool,
}

impl UpdateAppointmentRequest {
    /// Creates an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the date.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the slot range.
    pub fn with_slots(
        mut self,
        start_slot: impl Into<String>,
        end_slot: impl Into<String>,
    ) -> Self {
        self.start_slot = Some(start_slot.into());
        self.end_slot = Some(end_slot.into());
        self
    }

    /// Sets or clears the resource assignment.
    pub fn with_resource(mut self, resource_id: Option<String>) -> Self {
        self.resource_id = Some(resource_id);
        self
    }

    /// Sets the color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Turns the patch into a deletion.
    pub fn removal(mut self) -> Self {
        self.remove = true;
        self
    }

    /// Applies the present fields to an appointment.
    pub fn apply_to(self, appointment: &mut super::types::Appointment) {
        if let Some(date) = self.date {
            appointment.date = date;
        }
        if let Some(title) = self.title {
            appointment.title = title;
        }
        if let Some(start_slot) = self.start_slot {
            appointment.start_slot = start_slot;
        }
        if let Some(end_slot) = self.end_slot {
            appointment.end_slot = end_slot;
        }
        if let Some(resource_id) = self.resource_id {
            appointment.resource_id = resource_id;
        }
        if let Some(color) = self.color {
            appointment.color = color;
        }
    }
}

impl From<EditorResult> for UpdateAppointmentRequest {
    /// The dialog resubmits the full appointment, so the patch carries every
    /// field; the color stays untouched unless explicitly resubmitted.
    fn from(result: EditorResult) -> Self {
        Self {
            date: Some(result.date),
            title: Some(result.title),
            start_slot: Some(result.start_slot),
            end_slot: Some(result.end_slot),
            resource_id: Some(result.resource_id),
            color: result.color,
            remove: result.remove,
        }
    }
}

/// What the drag-and-drop collaborator reports when an appointment is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragDropRequest {
    pub appointment_id: Uuid,
    pub target_date: NaiveDate,
    /// When present, the appointment collapses to this single slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_slot: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_resource_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::types::Appointment;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_apply_to_replaces_present_fields_only() {
        let mut appointment = Appointment::new(
            make_date(2024, 6, 15),
            "Standup",
            "09:00",
            "09:30",
            Some("room-1".to_string()),
            "#e3f2fd",
        );

        UpdateAppointmentRequest::new()
            .with_title("Retro")
            .with_slots("10:00", "11:00")
            .apply_to(&mut appointment);

        assert_eq!(appointment.title, "Retro");
        assert_eq!(appointment.start_slot, "10:00");
        assert_eq!(appointment.end_slot, "11:00");
        // Untouched fields survive.
        assert_eq!(appointment.date, make_date(2024, 6, 15));
        assert_eq!(appointment.resource_id.as_deref(), Some("room-1"));
        assert_eq!(appointment.color, "#e3f2fd");
    }

    #[test]
    fn test_apply_to_can_clear_resource() {
        let mut appointment = Appointment::new(
            make_date(2024, 6, 15),
            "Standup",
            "09:00",
            "09:30",
            Some("room-1".to_string()),
            "#e3f2fd",
        );

        UpdateAppointmentRequest::new()
            .with_resource(None)
            .apply_to(&mut appointment);

        assert_eq!(appointment.resource_id, None);
    }

    #[test]
    fn test_editor_result_to_patch_keeps_color_unless_resubmitted() {
        let result = EditorResult::create(make_date(2024, 6, 15), "Standup", "09:00", "09:30")
            .with_resource("room-2");

        let patch = UpdateAppointmentRequest::from(result.clone());
        assert_eq!(patch.color, None);
        assert_eq!(patch.resource_id, Some(Some("room-2".to_string())));

        let patch = UpdateAppointmentRequest::from(result.with_color("#abcdef"));
        assert_eq!(patch.color, Some("#abcdef".to_string()));
    }

    #[test]
    fn test_editor_result_serde_defaults() {
        // A minimal dialog payload: no id, no resource, no remove flag.
        let json = r#"{
            "date": "2024-06-15",
            "title": "Standup",
            "start_slot": "09:00",
            "end_slot": "09:30"
        }"#;
        let result: EditorResult = serde_json::from_str(json).unwrap();

        assert_eq!(result.id, None);
        assert_eq!(result.resource_id, None);
        assert!(!result.remove);
    }

    #[test]
    fn test_drag_drop_request_serde_round_trip() {
        let request = DragDropRequest {
            appointment_id: Uuid::from_u128(1),
            target_date: make_date(2024, 6, 16),
            target_slot: Some("11:00".to_string()),
            target_resource_id: None,
        };

        let json = serde_json::to_string(&request).unwrap();
        let back: DragDropRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
        assert!(!json.contains("target_resource_id"));
    }
}
