use serde::{Deserialize, Serialize};

/// Granularity of the slot ruler, in minutes.
pub const SLOT_MINUTES: u32 = 15;

/// Number of entries in the slot ruler: 96 quarter-hours plus the closing "24:00".
pub const SLOT_COUNT: usize = 97;

/// The fixed time-of-day ruler: `00:00`, `00:15`, ... `23:45`, `24:00`.
///
/// Slots are zero-padded `"HH:MM"` strings, so lexicographic order matches
/// chronological order. Strings rather than `NaiveTime` because the ruler
/// closes with `24:00`, which has no time-of-day representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeGrid {
    slots: Vec<String>,
}

impl TimeGrid {
    /// Builds the 97-slot ruler. Deterministic; intended to be built once.
    pub fn new() -> Self {
        let mut slots = Vec::with_capacity(SLOT_COUNT);
        for hour in 0..24 {
            for minute in (0..60).step_by(SLOT_MINUTES as usize) {
                slots.push(format!("{hour:02}:{minute:02}"));
            }
        }
        slots.push("24:00".to_string());
        Self { slots }
    }

    /// All slots in ruler order.
    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    /// Position of a slot on the ruler, or `None` for strings that are not slots.
    pub fn index_of(&self, slot: &str) -> Option<usize> {
        self.slots.iter().position(|s| s == slot)
    }

    /// The slot at the given ruler position.
    pub fn slot_at(&self, index: usize) -> Option<&str> {
        self.slots.get(index).map(String::as_str)
    }

    /// Returns true if the string is a member of the ruler.
    pub fn contains(&self, slot: &str) -> bool {
        self.index_of(slot).is_some()
    }

    /// The slot one position past `index`, clamped to the last slot.
    ///
    /// Converts a half-open selection end into the inclusive `end_slot` an
    /// appointment stores.
    pub fn bump(&self, index: usize) -> &str {
        let clamped = (index + 1).min(self.slots.len() - 1);
        &self.slots[clamped]
    }
}

impl Default for TimeGrid {
    fn default() -> Self {
        Self::new()
    }
}
