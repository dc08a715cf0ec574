use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Arc, Mutex,
};

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    backend::BookingBackend,
    configuration::Configuration,
    error::RejectionReason,
    slots::BusinessHours,
    types::{Booking, BookingKey, Interval, Stylist, StylistId},
};

pub struct MockBookingBackendInner {
    pub slot_taken: AtomicBool,
    pub calls_to_bookings_for: AtomicU64,
    pub calls_to_commit: AtomicU64,
    pub calls_to_all_bookings: AtomicU64,
    pub bookings: Mutex<Vec<Booking>>,
}

#[derive(Clone)]
pub struct MockBookingBackend(pub Arc<MockBookingBackendInner>);

impl MockBookingBackendInner {
    fn new() -> Self {
        Self {
            slot_taken: AtomicBool::new(false),
            calls_to_bookings_for: AtomicU64::default(),
            calls_to_commit: AtomicU64::default(),
            calls_to_all_bookings: AtomicU64::default(),
            bookings: Mutex::default(),
        }
    }
}

impl MockBookingBackend {
    pub fn new() -> Self {
        Self(Arc::new(MockBookingBackendInner::new()))
    }

    pub fn seed(&self, stylist_id: StylistId, date: &str, start: &str, end: &str) {
        let interval = Interval::new(start.parse().unwrap(), end.parse().unwrap()).unwrap();
        self.0.bookings.lock().unwrap().push(Booking {
            id: Uuid::new_v4(),
            stylist_id,
            date: date.parse().unwrap(),
            interval,
        });
    }
}

impl BookingBackend for MockBookingBackend {
    fn bookings_for(&self, stylist_id: StylistId, date: NaiveDate) -> Vec<Interval> {
        self.0.calls_to_bookings_for.fetch_add(1, Ordering::SeqCst);
        self.0
            .bookings
            .lock()
            .unwrap()
            .iter()
            .filter(|booking| booking.stylist_id == stylist_id && booking.date == date)
            .map(|booking| booking.interval)
            .collect()
    }

    fn commit(&self, key: BookingKey, interval: Interval) -> Result<Booking, RejectionReason> {
        self.0.calls_to_commit.fetch_add(1, Ordering::SeqCst);
        if self.0.slot_taken.load(Ordering::SeqCst) {
            return Err(RejectionReason::SlotTaken);
        }
        Ok(Booking {
            id: Uuid::new_v4(),
            stylist_id: key.stylist_id,
            date: key.date,
            interval,
        })
    }

    fn all_bookings(&self) -> Vec<Booking> {
        self.0.calls_to_all_bookings.fetch_add(1, Ordering::SeqCst);
        self.0.bookings.lock().unwrap().clone()
    }
}

#[derive(Clone)]
pub struct TestConfiguration;

impl Configuration for TestConfiguration {
    fn port(&self) -> u16 {
        0
    }

    fn admin_user(&self) -> String {
        "admin".into()
    }

    fn admin_password(&self) -> String {
        "admin".into()
    }

    fn business_hours(&self) -> BusinessHours {
        BusinessHours::default()
    }

    fn stylists(&self) -> Vec<Stylist> {
        vec![
            Stylist {
                id: 1,
                name: "Katrin".into(),
            },
            Stylist {
                id: 2,
                name: "Marko".into(),
            },
        ]
    }
}
