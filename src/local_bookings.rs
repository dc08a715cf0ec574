use crate::{
    backend::BookingBackend,
    error::RejectionReason,
    types::{Booking, BookingKey, Interval, StylistId},
};
use chrono::NaiveDate;
use dashmap::DashMap;
use std::sync::{Arc, PoisonError, RwLock};
use uuid::Uuid;

type SharedDay = Arc<RwLock<Vec<Booking>>>;

/// In-memory bookings, one lock per stylist day.
#[derive(Debug, Clone, Default)]
pub struct LocalBookings {
    days: Arc<DashMap<BookingKey, SharedDay>>,
}

impl LocalBookings {
    fn day(&self, key: BookingKey) -> SharedDay {
        self.days.entry(key).or_default().value().clone()
    }

    fn existing_day(&self, key: BookingKey) -> Option<SharedDay> {
        self.days.get(&key).map(|entry| entry.value().clone())
    }
}

impl BookingBackend for LocalBookings {
    fn bookings_for(&self, stylist_id: StylistId, date: NaiveDate) -> Vec<Interval> {
        let Some(day) = self.existing_day(BookingKey { stylist_id, date }) else {
            return Vec::new();
        };
        let bookings = day.read().unwrap_or_else(PoisonError::into_inner);
        bookings.iter().map(|booking| booking.interval).collect()
    }

    fn commit(&self, key: BookingKey, interval: Interval) -> Result<Booking, RejectionReason> {
        let day = self.day(key);
        // The write guard spans the overlap check and the push.
        let mut bookings = day.write().unwrap_or_else(PoisonError::into_inner);
        if bookings
            .iter()
            .any(|booking| booking.interval.overlaps(&interval))
        {
            return Err(RejectionReason::SlotTaken);
        }

        let booking = Booking {
            id: Uuid::new_v4(),
            stylist_id: key.stylist_id,
            date: key.date,
            interval,
        };
        bookings.push(booking.clone());
        Ok(booking)
    }

    fn all_bookings(&self) -> Vec<Booking> {
        // Collect the handles first so no map shard is held while a day is locked.
        let days: Vec<SharedDay> = self.days.iter().map(|entry| entry.value().clone()).collect();

        let mut all: Vec<Booking> = days
            .iter()
            .flat_map(|day| day.read().unwrap_or_else(PoisonError::into_inner).clone())
            .collect();
        all.sort_unstable_by_key(|booking| (booking.key(), booking.interval));
        all
    }
}
