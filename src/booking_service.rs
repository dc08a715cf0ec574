use crate::{
    backend::BookingBackend,
    error::RejectionReason,
    slots::{generate_slots, BusinessHours},
    stylists::StylistRegistry,
    types::{Booking, BookingKey, Interval, Slot, Stylist, StylistId},
    validation::{parse_date, validate_request, BookingRequest},
};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
pub struct Availability {
    pub stylist_id: StylistId,
    pub stylist_name: String,
    pub date: NaiveDate,
    pub slots: Vec<Slot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BookedDay {
    pub stylist_id: StylistId,
    pub stylist_name: String,
    pub date: NaiveDate,
    pub bookings: Vec<Interval>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminOverview {
    pub stylists: Vec<Stylist>,
    pub days: Vec<BookedDay>,
}

pub fn availability<T: BookingBackend>(
    backend: &T,
    hours: &BusinessHours,
    stylists: &StylistRegistry,
    stylist_id: StylistId,
    date: &str,
) -> Result<Availability, RejectionReason> {
    let date = parse_date(date)?;
    let existing = backend.bookings_for(stylist_id, date);

    Ok(Availability {
        stylist_id,
        stylist_name: stylists.name_of(stylist_id).to_owned(),
        date,
        slots: generate_slots(hours, &existing),
    })
}

/// Validates the request and hands it to the backend, which re-checks the
/// day for overlaps at commit time. A slot shown as free earlier may have
/// been taken in between.
pub fn submit_booking<T: BookingBackend>(
    backend: &T,
    hours: &BusinessHours,
    request: &BookingRequest,
) -> Result<Booking, RejectionReason> {
    let (key, interval) = validate_request(request, hours)?;
    backend.commit(key, interval)
}

pub fn admin_overview<T: BookingBackend>(backend: &T, stylists: &StylistRegistry) -> AdminOverview {
    let mut grouped: BTreeMap<BookingKey, Vec<Interval>> = BTreeMap::new();
    for booking in backend.all_bookings() {
        grouped
            .entry(booking.key())
            .or_default()
            .push(booking.interval);
    }

    let days = grouped
        .into_iter()
        .map(|(key, mut bookings)| {
            bookings.sort_unstable();
            BookedDay {
                stylist_id: key.stylist_id,
                stylist_name: stylists.name_of(key.stylist_id).to_owned(),
                date: key.date,
                bookings,
            }
        })
        .collect();

    AdminOverview {
        stylists: stylists.all().to_vec(),
        days,
    }
}
