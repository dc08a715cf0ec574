use crate::{
    error::RejectionReason,
    slots::BusinessHours,
    types::{is_clock_text, BookingKey, Interval, StylistId, TimeOfDay},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Booking form as submitted by a client. Missing fields deserialize to
/// empty values so they are reported as a malformed request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct BookingRequest {
    #[validate(range(min = 1))]
    pub stylist_id: StylistId,
    #[validate(length(min = 1))]
    pub date: String,
    #[validate(length(min = 1))]
    pub start: String,
    #[validate(length(min = 1))]
    pub end: String,
}

/// Accepts only canonical `YYYY-MM-DD` dates that exist in the calendar.
pub fn parse_date(date: &str) -> Result<NaiveDate, RejectionReason> {
    let parsed =
        NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| RejectionReason::InvalidDate)?;
    if parsed.format(DATE_FORMAT).to_string() != date {
        return Err(RejectionReason::InvalidDate);
    }
    Ok(parsed)
}

/// Everything that can be checked without looking at existing bookings.
pub fn validate_request(
    request: &BookingRequest,
    hours: &BusinessHours,
) -> Result<(BookingKey, Interval), RejectionReason> {
    request
        .validate()
        .map_err(|_| RejectionReason::MalformedRequest)?;

    let date = parse_date(&request.date)?;
    if !is_clock_text(&request.start) || !is_clock_text(&request.end) {
        return Err(RejectionReason::InvalidTimeFormat);
    }
    let start: TimeOfDay = request.start.parse()?;
    let end: TimeOfDay = request.end.parse()?;

    let interval = Interval::new(start, end)
        .filter(|interval| hours.contains(interval))
        .ok_or(RejectionReason::OutOfHours)?;

    let key = BookingKey {
        stylist_id: request.stylist_id,
        date,
    };
    Ok((key, interval))
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    fn request(stylist_id: StylistId, date: &str, start: &str, end: &str) -> BookingRequest {
        BookingRequest {
            stylist_id,
            date: date.into(),
            start: start.into(),
            end: end.into(),
        }
    }

    #[test_case("2025-01-10" ; "regular day")]
    #[test_case("2024-02-29" ; "leap day")]
    #[test_case("2025-12-31" ; "end of year")]
    fn test_parse_date_accepts(date: &str) {
        assert_eq!(parse_date(date).unwrap().format(DATE_FORMAT).to_string(), date);
    }

    #[test_case("2025-02-30" ; "nonexistent day")]
    #[test_case("2025-02-29" ; "no leap day")]
    #[test_case("2025-13-01" ; "month out of range")]
    #[test_case("2025-1-10" ; "unpadded month")]
    #[test_case("10.01.2025" ; "other format")]
    #[test_case("2025-01-10 " ; "trailing whitespace")]
    #[test_case("tomorrow" ; "not a date")]
    fn test_parse_date_rejects(date: &str) {
        assert_eq!(parse_date(date), Err(RejectionReason::InvalidDate));
    }

    #[test]
    fn test_valid_request() {
        let (key, interval) = validate_request(
            &request(2, "2025-01-10", "09:00", "09:30"),
            &BusinessHours::default(),
        )
        .unwrap();

        assert_eq!(key.stylist_id, 2);
        assert_eq!(key.date, NaiveDate::from_ymd_opt(2025, 1, 10).unwrap());
        assert_eq!(interval.to_string(), "09:00-09:30");
    }

    #[test]
    fn test_full_day_request_is_within_hours() {
        validate_request(
            &request(1, "2025-01-10", "09:00", "17:00"),
            &BusinessHours::default(),
        )
        .unwrap();
    }

    #[test_case(request(0, "2025-01-10", "09:00", "09:30"), RejectionReason::MalformedRequest ; "zero stylist")]
    #[test_case(request(-4, "2025-01-10", "09:00", "09:30"), RejectionReason::MalformedRequest ; "negative stylist")]
    #[test_case(request(1, "", "09:00", "09:30"), RejectionReason::MalformedRequest ; "missing date")]
    #[test_case(request(1, "2025-01-10", "", "09:30"), RejectionReason::MalformedRequest ; "missing start")]
    #[test_case(request(1, "2025-01-10", "09:00", ""), RejectionReason::MalformedRequest ; "missing end")]
    #[test_case(BookingRequest::default(), RejectionReason::MalformedRequest ; "empty request")]
    #[test_case(request(1, "2025-02-30", "09:00", "09:30"), RejectionReason::InvalidDate ; "nonexistent date")]
    #[test_case(request(1, "2025-02-30", "9", "09:30"), RejectionReason::InvalidDate ; "date checked before time")]
    #[test_case(request(1, "2025-01-10", "9:00", "09:30"), RejectionReason::InvalidTimeFormat ; "unpadded start")]
    #[test_case(request(1, "2025-01-10", "09:00", "0930"), RejectionReason::InvalidTimeFormat ; "end without colon")]
    #[test_case(request(1, "2025-01-10", "08:75", "9:00"), RejectionReason::InvalidTimeFormat ; "format checked before range")]
    #[test_case(request(1, "2025-01-10", "08:30", "09:00"), RejectionReason::OutOfHours ; "before opening")]
    #[test_case(request(1, "2025-01-10", "16:30", "24:00"), RejectionReason::OutOfHours ; "end at twenty four")]
    #[test_case(request(1, "2025-01-10", "99:00", "99:30"), RejectionReason::OutOfHours ; "hour beyond the day")]
    #[test_case(request(1, "2025-01-10", "09:75", "10:00"), RejectionReason::OutOfHours ; "minute past fifty nine")]
    #[test_case(request(1, "2025-01-10", "16:30", "17:30"), RejectionReason::OutOfHours ; "after closing")]
    #[test_case(request(1, "2025-01-10", "09:00", "08:30"), RejectionReason::OutOfHours ; "end before start")]
    #[test_case(request(1, "2025-01-10", "10:00", "10:00"), RejectionReason::OutOfHours ; "empty range")]
    fn test_rejections(request: BookingRequest, expected: RejectionReason) {
        assert_eq!(
            validate_request(&request, &BusinessHours::default()),
            Err(expected)
        );
    }

    #[test]
    fn test_missing_fields_deserialize_as_malformed() {
        let request: BookingRequest = serde_json::from_str(r#"{"date":"2025-01-10"}"#).unwrap();
        assert_eq!(
            validate_request(&request, &BusinessHours::default()),
            Err(RejectionReason::MalformedRequest)
        );
    }
}
