mod engine;

pub use engine::{slot_key, SelectionEngine, SlotCell, SlotSelection};
