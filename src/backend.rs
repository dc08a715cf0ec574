use crate::{
    error::RejectionReason,
    types::{Booking, BookingKey, Interval, StylistId},
};
use chrono::NaiveDate;

pub trait BookingBackend: Clone + Send + Sync + 'static {
    /// Committed intervals of one stylist day, empty when nothing is booked.
    fn bookings_for(&self, stylist_id: StylistId, date: NaiveDate) -> Vec<Interval>;

    /// Checks `interval` against the day's bookings and stores it, as one
    /// step with respect to other writers of the same key.
    fn commit(&self, key: BookingKey, interval: Interval) -> Result<Booking, RejectionReason>;

    fn all_bookings(&self) -> Vec<Booking>;
}
