mod color;
mod error;
mod mock_data;
mod registry;
mod requests;
mod store;
mod types;

pub use color::random_translucent_color;
pub use error::ScheduleError;
pub use mock_data::{seed_appointments, seed_resources};
pub use registry::ResourceRegistry;
pub use requests::{DragDropRequest, EditorRequest, EditorResult, UpdateAppointmentRequest};
pub use store::AppointmentStore;
pub use types::{Appointment, PositionedAppointment, Resource};
