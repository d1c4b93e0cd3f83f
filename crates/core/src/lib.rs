//! Calendar engine for a resource-scheduling calendar.
//!
//! Pure, synchronous logic behind a room-booking calendar UI: date grids for
//! month/week/day views, a fixed 15-minute slot ruler, appointments bound to
//! resources, click-drag slot selection and drag-and-drop rescheduling.
//! Presentation, dialogs and persistence live outside; they talk to the
//! engine through plain data types ([`schedule::EditorRequest`],
//! [`schedule::EditorResult`], [`schedule::DragDropRequest`]).
//!
//! The entry point is [`service::SchedulingService`], which owns all state
//! and exposes every mutation.

pub mod grid;
pub mod schedule;
pub mod selection;
pub mod service;

pub use grid::{CalendarView, TimeGrid, ViewCells};
pub use schedule::{
    Appointment, AppointmentStore, DragDropRequest, EditorRequest, EditorResult, Resource,
    ResourceRegistry, ScheduleError, UpdateAppointmentRequest,
};
pub use selection::{SelectionEngine, SlotSelection};
pub use service::{Direction, SchedulingService};
