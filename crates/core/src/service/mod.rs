//! The scheduling orchestrator.
//!
//! [`SchedulingService`] owns the slot ruler, the resource registry, the
//! appointment store, the selection engine and the view state, and is the
//! single mutation surface: the presentation layer feeds it discrete events
//! (pointer gestures, navigation clicks, editor/drag-drop results) and reads
//! plain data back. Everything runs synchronously on the caller's thread.

use chrono::{Datelike, Duration, Local, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::grid::{cells_for_view, CalendarView, TimeGrid, ViewCells};
use crate::schedule::{
    seed_appointments, seed_resources, Appointment, AppointmentStore, DragDropRequest,
    EditorRequest, EditorResult, PositionedAppointment, Resource, ResourceRegistry, ScheduleError,
    UpdateAppointmentRequest,
};
use crate::selection::SelectionEngine;

/// Navigation direction for [`SchedulingService::navigate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Prev,
    Next,
}

/// The calendar engine behind a resource-scheduling calendar.
#[derive(Debug, Clone)]
pub struct SchedulingService {
    grid: TimeGrid,
    registry: ResourceRegistry,
    store: AppointmentStore,
    selection: SelectionEngine,
    view: CalendarView,
    anchor_date: NaiveDate,
    cells: ViewCells,
}

impl SchedulingService {
    /// Creates a service over the given resource set, anchored at `anchor`
    /// in month view.
    pub fn new(resources: Vec<Resource>, anchor: NaiveDate) -> Self {
        let grid = TimeGrid::new();
        let view = CalendarView::Month;
        Self {
            selection: SelectionEngine::new(grid.clone()),
            grid,
            registry: ResourceRegistry::new(resources),
            store: AppointmentStore::new(),
            view,
            anchor_date: anchor,
            cells: cells_for_view(view, anchor),
        }
    }

    /// Creates a service pre-populated with the demo rooms and appointments.
    pub fn seeded(today: NaiveDate) -> Self {
        let resources = seed_resources();
        let appointments = seed_appointments(today, &resources);
        let mut service = Self::new(resources, today);
        for appointment in appointments {
            service.store.insert(appointment);
        }
        service
    }

    // ------------------------------------------------------------------
    // View state
    // ------------------------------------------------------------------

    pub fn view(&self) -> CalendarView {
        self.view
    }

    pub fn anchor_date(&self) -> NaiveDate {
        self.anchor_date
    }

    /// The visible date cells for the current view and anchor.
    pub fn cells(&self) -> &ViewCells {
        &self.cells
    }

    /// The slot ruler.
    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    /// Switches the view mode and recomputes the visible cells.
    pub fn switch_view(&mut self, view: CalendarView) {
        tracing::debug!(?view, "switching view");
        self.view = view;
        self.refresh_cells();
    }

    /// Moves the anchor one month, week or day depending on the current view.
    ///
    /// Month steps clamp at short months (Jan 31 -> Feb 28), so a prev/next
    /// round trip restores the month but not necessarily the day.
    pub fn navigate(&mut self, direction: Direction) {
        let anchor = self.anchor_date;
        let shifted = match (self.view, direction) {
            (CalendarView::Month, Direction::Prev) => anchor.checked_sub_months(Months::new(1)),
            (CalendarView::Month, Direction::Next) => anchor.checked_add_months(Months::new(1)),
            (CalendarView::Week, Direction::Prev) => Some(anchor - Duration::days(7)),
            (CalendarView::Week, Direction::Next) => Some(anchor + Duration::days(7)),
            (CalendarView::Day, Direction::Prev) => Some(anchor - Duration::days(1)),
            (CalendarView::Day, Direction::Next) => Some(anchor + Duration::days(1)),
        };
        self.anchor_date = shifted.unwrap_or(anchor);
        tracing::debug!(anchor = %self.anchor_date, ?direction, "navigated");
        self.refresh_cells();
    }

    /// Jumps the anchor to today's local date.
    pub fn go_today(&mut self) {
        self.go_to(Local::now().date_naive());
    }

    /// Jumps the anchor to a specific date.
    pub fn go_to(&mut self, date: NaiveDate) {
        self.anchor_date = date;
        self.refresh_cells();
    }

    pub fn is_today(&self, date: NaiveDate) -> bool {
        date == Local::now().date_naive()
    }

    /// Whether a cell belongs to the anchored month (month-view dimming).
    pub fn is_current_month(&self, date: NaiveDate) -> bool {
        date.year() == self.anchor_date.year() && date.month() == self.anchor_date.month()
    }

    fn refresh_cells(&mut self) {
        self.cells = cells_for_view(self.view, self.anchor_date);
    }

    // ------------------------------------------------------------------
    // Resources
    // ------------------------------------------------------------------

    pub fn resources(&self) -> &[Resource] {
        self.registry.list()
    }

    pub fn visible_resources(&self) -> Vec<&Resource> {
        self.registry.visible()
    }

    pub fn is_resource_visible(&self, id: &str) -> bool {
        self.registry.is_visible(id)
    }

    pub fn toggle_resource_visible(&mut self, id: &str) {
        self.registry.toggle_visible(id);
    }

    pub fn resource_display_name(&self, resource_id: Option<&str>) -> String {
        self.registry.display_name(resource_id)
    }

    // ------------------------------------------------------------------
    // Appointments
    // ------------------------------------------------------------------

    pub fn appointments(&self) -> &[Appointment] {
        self.store.all()
    }

    pub fn appointment(&self, id: Uuid) -> Option<&Appointment> {
        self.store.get(id)
    }

    pub fn appointments_for_date(&self, date: NaiveDate) -> Vec<&Appointment> {
        self.store.for_date(date)
    }

    pub fn appointments_for_date_slot(
        &self,
        date: NaiveDate,
        slot: &str,
        resource_id: Option<&str>,
    ) -> Vec<&Appointment> {
        self.store.for_date_slot(date, slot, resource_id)
    }

    pub fn positioned_appointments_for_date(&self, date: NaiveDate) -> Vec<PositionedAppointment> {
        self.store.positioned_for_date(date, &self.grid)
    }

    /// Opens the editor for an existing appointment: the full appointment plus
    /// the resource catalog, or `None` for an unknown id.
    pub fn edit_request(&self, id: Uuid) -> Option<(Appointment, Vec<Resource>)> {
        self.store
            .get(id)
            .map(|appointment| (appointment.clone(), self.registry.list().to_vec()))
    }

    // ------------------------------------------------------------------
    // Selection gestures
    // ------------------------------------------------------------------

    pub fn pointer_down(&mut self, date: NaiveDate, slot: &str, resource_id: Option<&str>) {
        self.selection.pointer_down(date, slot, resource_id);
    }

    pub fn pointer_enter(&mut self, date: NaiveDate, slot: &str, resource_id: Option<&str>) {
        self.selection.pointer_enter(date, slot, resource_id);
    }

    /// Ends a drag gesture. A completed selection becomes an "open editor"
    /// command carrying the normalized range and the resource catalog.
    pub fn pointer_up(
        &mut self,
        date: NaiveDate,
        slot: &str,
        resource_id: Option<&str>,
    ) -> Option<EditorRequest> {
        let selection = self.selection.pointer_up(date, slot, resource_id)?;
        Some(EditorRequest {
            date: selection.date,
            start_slot: selection.start_slot,
            end_slot: selection.end_slot,
            resource_id: selection.resource_id,
            resources: self.registry.list().to_vec(),
        })
    }

    pub fn is_slot_selected(&self, date: NaiveDate, slot: &str, resource_id: Option<&str>) -> bool {
        self.selection.is_selected(date, slot, resource_id)
    }

    pub fn selected_slot_keys(&self) -> std::collections::HashSet<String> {
        self.selection.selected_slot_keys()
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // ------------------------------------------------------------------
    // Commits
    // ------------------------------------------------------------------

    /// Commits a drag-drop move. Only the appointment's existence is
    /// validated; overlap and capacity are not.
    pub fn commit_drag_drop(&mut self, request: DragDropRequest) -> Result<(), ScheduleError> {
        self.store.move_to(
            request.appointment_id,
            request.target_date,
            request.target_slot.as_deref(),
            request.target_resource_id.as_deref(),
        )
    }

    /// Commits whatever the editor dialog reported back.
    ///
    /// `None` is a cancelled dialog and commits nothing. A result with
    /// `remove` deletes, one without an id creates, any other updates. The
    /// in-progress selection is cleared on every path.
    pub fn commit_editor_result(
        &mut self,
        result: Option<EditorResult>,
    ) -> Result<(), ScheduleError> {
        let outcome = match result {
            None => Ok(()),
            Some(result) if result.remove => match result.id {
                Some(id) => {
                    if self.store.remove(id) {
                        Ok(())
                    } else {
                        Err(ScheduleError::AppointmentNotFound(id))
                    }
                }
                None => {
                    tracing::warn!("editor requested removal without an id");
                    Ok(())
                }
            },
            Some(result) => match result.id {
                None => {
                    self.store.add(
                        result.date,
                        result.title,
                        result.start_slot,
                        result.end_slot,
                        result.resource_id,
                        &self.registry,
                    );
                    Ok(())
                }
                Some(id) => self
                    .store
                    .update(id, UpdateAppointmentRequest::from(result))
                    .map(|_| ()),
            },
        };
        self.clear_selection();
        outcome
    }
}
