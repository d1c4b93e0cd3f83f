use chrono::NaiveDate;
use uuid::Uuid;

use crate::grid::TimeGrid;

use super::color::random_translucent_color;
use super::error::ScheduleError;
use super::registry::ResourceRegistry;
use super::requests::UpdateAppointmentRequest;
use super::types::{Appointment, PositionedAppointment};

/// The insertion-ordered collection of appointments.
///
/// All lookups filter the sequence in order; mutations preserve the relative
/// order of surviving items. Overlapping bookings are allowed: neither slot
/// ranges nor resource capacity are checked anywhere.
#[derive(Debug, Clone, Default)]
pub struct AppointmentStore {
    appointments: Vec<Appointment>,
}

impl AppointmentStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// All appointments in insertion order.
    pub fn all(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    /// Looks up an appointment by id.
    pub fn get(&self, id: Uuid) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    /// Appends a new appointment with a fresh id.
    ///
    /// The color is resolved from the assigned resource, or falls back to a
    /// random translucent color when the id is absent or unknown.
    pub fn add(
        &mut self,
        date: NaiveDate,
        title: impl Into<String>,
        start_slot: impl Into<String>,
        end_slot: impl Into<String>,
        resource_id: Option<String>,
        registry: &ResourceRegistry,
    ) -> Appointment {
        let color = resource_id
            .as_deref()
            .and_then(|id| registry.by_id(id))
            .map(|resource| resource.color.clone())
            .unwrap_or_else(random_translucent_color);

        let appointment = Appointment::new(date, title, start_slot, end_slot, resource_id, color);
        tracing::debug!(id = %appointment.id, date = %appointment.date, "appointment added");
        self.appointments.push(appointment.clone());
        appointment
    }

    /// Appends a pre-built appointment as-is (seeding, tests).
    pub fn insert(&mut self, appointment: Appointment) {
        self.appointments.push(appointment);
    }

    /// Applies a patch to an appointment. A patch with the `remove` flag
    /// deletes instead; either way the affected appointment is returned.
    pub fn update(
        &mut self,
        id: Uuid,
        request: UpdateAppointmentRequest,
    ) -> Result<Appointment, ScheduleError> {
        let index = self
            .appointments
            .iter()
            .position(|a| a.id == id)
            .ok_or(ScheduleError::AppointmentNotFound(id))?;

        if request.remove {
            let removed = self.appointments.remove(index);
            tracing::debug!(id = %id, "appointment removed via editor");
            return Ok(removed);
        }

        request.apply_to(&mut self.appointments[index]);
        Ok(self.appointments[index].clone())
    }

    /// Removes an appointment. Returns whether it was found.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let Some(index) = self.appointments.iter().position(|a| a.id == id) else {
            return false;
        };
        self.appointments.remove(index);
        true
    }

    /// Appointments on the given calendar date, slot-agnostic.
    pub fn for_date(&self, date: NaiveDate) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|a| a.date == date)
            .collect()
    }

    /// Appointments occupying the given slot on the given date.
    ///
    /// An appointment occupies every slot of its inclusive start..=end range,
    /// compared in ruler (lexicographic) order. An exact resource filter is
    /// applied when `resource_id` is present.
    pub fn for_date_slot(
        &self,
        date: NaiveDate,
        slot: &str,
        resource_id: Option<&str>,
    ) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|a| {
                a.date == date && a.start_slot.as_str() <= slot && a.end_slot.as_str() >= slot
            })
            .filter(|a| resource_id.is_none_or(|id| a.resource_id.as_deref() == Some(id)))
            .collect()
    }

    /// Appointments for a date annotated with their ruler positions, for
    /// timeline layout.
    pub fn positioned_for_date(
        &self,
        date: NaiveDate,
        grid: &TimeGrid,
    ) -> Vec<PositionedAppointment> {
        self.for_date(date)
            .into_iter()
            .map(|appointment| PositionedAppointment {
                start_index: grid.index_of(&appointment.start_slot),
                end_index: grid.index_of(&appointment.end_slot),
                appointment: appointment.clone(),
            })
            .collect()
    }

    /// Applies a drag-drop commit: always retargets the date; a slot collapses
    /// the appointment to `start_slot == end_slot == slot`; a resource
    /// reassigns it. The color is never touched here.
    pub fn move_to(
        &mut self,
        id: Uuid,
        new_date: NaiveDate,
        new_slot: Option<&str>,
        new_resource_id: Option<&str>,
    ) -> Result<(), ScheduleError> {
        let appointment = self
            .appointments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(ScheduleError::AppointmentNotFound(id))?;

        appointment.date = new_date;
        if let Some(slot) = new_slot {
            appointment.start_slot = slot.to_string();
            appointment.end_slot = slot.to_string();
        }
        if let Some(resource_id) = new_resource_id {
            appointment.resource_id = Some(resource_id.to_string());
        }
        tracing::debug!(id = %id, date = %new_date, "appointment moved");
        Ok(())
    }
}
