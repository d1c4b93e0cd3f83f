use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bookable resource (a room), defined once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub name: String,
    /// Default color for appointments in this resource (CSS color value).
    pub color: String,
    /// Informational only; bookings are never rejected for exceeding it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
}

impl Resource {
    /// Creates a new resource with the given id, name and color.
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
            capacity: None,
        }
    }

    /// Sets the capacity for this resource.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = Some(capacity);
        self
    }
}

/// A booked appointment occupying a contiguous slot range on one date.
///
/// `start_slot` and `end_slot` are members of the slot ruler and the range is
/// inclusive at both ends; `start_slot <= end_slot` lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub date: NaiveDate,
    pub title: String,
    pub start_slot: String,
    pub end_slot: String,
    /// `None` means unassigned ("no room").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    /// Derived from the resource at creation; only refreshed when an editor
    /// result explicitly carries a color.
    pub color: String,
}

impl Appointment {
    /// Creates a new appointment with a fresh id.
    pub fn new(
        date: NaiveDate,
        title: impl Into<String>,
        start_slot: impl Into<String>,
        end_slot: impl Into<String>,
        resource_id: Option<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            title: title.into(),
            start_slot: start_slot.into(),
            end_slot: end_slot.into(),
            resource_id,
            color: color.into(),
        }
    }

    /// Sets a specific ID for this appointment (useful for testing and seeding).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Sets the accent color for this appointment.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

/// An appointment annotated with its start/end positions on the slot ruler.
///
/// `None` when the stored slot string is not a ruler member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionedAppointment {
    pub appointment: Appointment,
    pub start_index: Option<usize>,
    pub end_index: Option<usize>,
}
