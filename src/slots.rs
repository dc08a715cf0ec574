use crate::types::{Interval, Slot, TimeOfDay};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessHours {
    pub open: TimeOfDay,
    pub close: TimeOfDay,
    pub slot_minutes: u16,
}

impl Default for BusinessHours {
    fn default() -> Self {
        Self {
            open: TimeOfDay::hm(9, 0),
            close: TimeOfDay::hm(17, 0),
            slot_minutes: 30,
        }
    }
}

impl BusinessHours {
    pub fn contains(&self, interval: &Interval) -> bool {
        interval.start() >= self.open && interval.end() <= self.close
    }
}

/// Candidate slots of the business day, each marked occupied when it
/// overlaps one of `existing`.
///
/// A slot is emitted as long as it *starts* before closing time, so with a
/// window that is not a multiple of the slot length the last slot runs past
/// `close`.
pub fn generate_slots(hours: &BusinessHours, existing: &[Interval]) -> Vec<Slot> {
    let mut slots = Vec::new();
    if hours.slot_minutes == 0 {
        return slots;
    }

    let mut current = hours.open;
    while current < hours.close {
        let Some(interval) = Interval::new(current, current.plus_minutes(hours.slot_minutes)) else {
            break;
        };
        let occupied = existing.iter().any(|booked| interval.overlaps(booked));
        slots.push(Slot { interval, occupied });
        current = interval.end();
    }
    slots
}
