//! Seed data for demos and tests.
//!
//! Pure generators mirroring the fixture set the calendar ships with: four
//! rooms and a handful of appointments spread around "today". No side effects.

use chrono::{Datelike, Duration, NaiveDate};
use uuid::Uuid;

use super::color::random_translucent_color;
use super::types::{Appointment, Resource};

/// The four demo rooms.
pub fn seed_resources() -> Vec<Resource> {
    vec![
        Resource::new("room-1", "Meeting Room A", "#e3f2fd").with_capacity(10),
        Resource::new("room-2", "Meeting Room B", "#f3e5f5").with_capacity(8),
        Resource::new("room-3", "Conference Hall", "#e8f5e9").with_capacity(50),
        Resource::new("room-4", "Small Office", "#fff3e0").with_capacity(4),
    ]
}

/// Five demo appointments spread around `today`, with fixed ids and colors
/// resolved from `resources` (random translucent fallback otherwise).
pub fn seed_appointments(today: NaiveDate, resources: &[Resource]) -> Vec<Appointment> {
    let resolve = |resource_id: &str| {
        resources
            .iter()
            .find(|r| r.id == resource_id)
            .map(|r| r.color.clone())
            .unwrap_or_else(random_translucent_color)
    };
    let day_of_month = |day: u32| today.with_day(day).unwrap_or(today);

    let fixtures = [
        (1u128, today, "Meeting with Bob", "09:00", "10:00", "room-1"),
        (2, day_of_month(2), "Lunch with Alice", "12:00", "13:00", "room-2"),
        (3, day_of_month(3), "Project Deadline", "15:00", "16:00", "room-3"),
        (4, today, "Doctor Appointment", "10:00", "11:00", "room-1"),
        (
            5,
            today + Duration::days(1),
            "Team Meeting",
            "14:00",
            "15:00",
            "room-2",
        ),
    ];

    fixtures
        .into_iter()
        .map(|(id, date, title, start, end, resource_id)| {
            Appointment::new(
                date,
                title,
                start,
                end,
                Some(resource_id.to_string()),
                resolve(resource_id),
            )
            .with_id(Uuid::from_u128(id))
        })
        .collect()
}
