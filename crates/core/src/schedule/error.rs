use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by schedule mutations.
///
/// Unknown resource ids never error: they degrade to "unassigned" labeling
/// and the random-color fallback instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Appointment not found: {0}")]
    AppointmentNotFound(Uuid),
}
