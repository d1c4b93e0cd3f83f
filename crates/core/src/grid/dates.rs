use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// The three view modes of the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarView {
    Month,
    Week,
    Day,
}

/// The date cells visible for a view, arranged the way the view lays them out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewCells {
    /// Full weeks of 7 dates each, first cell of every week a Monday.
    Weeks(Vec<Vec<NaiveDate>>),
    /// A single row of dates (7 for week view, 1 for day view).
    Days(Vec<NaiveDate>),
}

impl ViewCells {
    /// All visible dates, flattened in order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        match self {
            ViewCells::Weeks(weeks) => weeks.iter().flatten().copied().collect(),
            ViewCells::Days(days) => days.clone(),
        }
    }

    /// The week rows, if this is a month view.
    pub fn weeks(&self) -> Option<&[Vec<NaiveDate>]> {
        match self {
            ViewCells::Weeks(weeks) => Some(weeks),
            ViewCells::Days(_) => None,
        }
    }
}

/// The Monday on or before the given date (ISO week start).
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_monday() as i64;
    date - Duration::days(offset)
}

/// The 7 dates of the week containing `anchor`, Monday through Sunday.
pub fn week_days(anchor: NaiveDate) -> Vec<NaiveDate> {
    let monday = start_of_week(anchor);
    (0..7).map(|offset| monday + Duration::days(offset)).collect()
}

/// The single cell of the day view.
pub fn day_cells(anchor: NaiveDate) -> Vec<NaiveDate> {
    vec![anchor]
}

/// The month grid for the month containing `anchor`, as full Monday-start weeks.
///
/// Every day of the month appears exactly once; the first week is front-padded
/// with the previous month's tail and the last week back-padded with the next
/// month's head, so the total cell count is always a multiple of 7.
pub fn month_weeks(anchor: NaiveDate) -> Vec<Vec<NaiveDate>> {
    let first = first_of_month(anchor);
    let last = first
        .checked_add_months(Months::new(1))
        .map(|next| next - Duration::days(1))
        .unwrap_or(first);

    let grid_start = start_of_week(first);
    let grid_end = start_of_week(last) + Duration::days(6);

    let mut weeks = Vec::new();
    let mut week = Vec::with_capacity(7);
    let mut day = grid_start;
    while day <= grid_end {
        week.push(day);
        if week.len() == 7 {
            weeks.push(std::mem::take(&mut week));
        }
        day += Duration::days(1);
    }
    weeks
}

/// The visible cells for a view anchored at `anchor`.
pub fn cells_for_view(view: CalendarView, anchor: NaiveDate) -> ViewCells {
    match view {
        CalendarView::Month => ViewCells::Weeks(month_weeks(anchor)),
        CalendarView::Week => ViewCells::Days(week_days(anchor)),
        CalendarView::Day => ViewCells::Days(day_cells(anchor)),
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    // Day 1 exists in every month.
    date.with_day(1).unwrap_or(date)
}
