mod dates;
mod time;

pub use dates::{
    cells_for_view, day_cells, month_weeks, start_of_week, week_days, CalendarView, ViewCells,
};
pub use time::{TimeGrid, SLOT_COUNT, SLOT_MINUTES};
