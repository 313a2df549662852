//! Normalization boundary between the reservation API and the engine.
//!
//! The API returns the same entities under several shapes (camelCase and
//! snake_case keys, capacity under three different names, numeric or string
//! ids). All of that variability is absorbed here, once, on fetch: raw JSON
//! rows become canonical [`Resource`] and [`Booking`] records and nothing
//! downstream ever probes for alternate field names. Rows that cannot be
//! normalized are skipped with a warning — one bad record must not blank the
//! whole schedule.

use chrono::{DateTime, NaiveDateTime, Timelike};
use serde_json::Value;
use tracing::warn;

use crate::model::*;

#[derive(Debug, PartialEq, Eq)]
pub enum IngestError {
    MissingField(&'static str),
    BadTimestamp(String),
    BadHour(String),
    UnknownStatus(String),
    NonPositiveSpan { start: Minutes, end: Minutes },
    NotAnArray,
}

impl std::fmt::Display for IngestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IngestError::MissingField(name) => write!(f, "missing field: {name}"),
            IngestError::BadTimestamp(raw) => write!(f, "unparseable timestamp: {raw}"),
            IngestError::BadHour(raw) => write!(f, "unparseable HH:mm value: {raw}"),
            IngestError::UnknownStatus(raw) => write!(f, "unknown booking status: {raw}"),
            IngestError::NonPositiveSpan { start, end } => {
                write!(f, "booking span is empty or reversed: minutes [{start}, {end})")
            }
            IngestError::NotAnArray => write!(f, "expected a JSON array of rows"),
        }
    }
}

impl std::error::Error for IngestError {}

// ── Field access across shape variants ───────────────────────────

/// First present field among the known aliases for one logical field.
fn field<'a>(row: &'a Value, aliases: &[&str]) -> Option<&'a Value> {
    aliases.iter().find_map(|name| row.get(name))
}

/// Ids arrive as strings or numbers depending on the endpoint.
fn id_string(v: &Value) -> Option<String> {
    match v {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn string_or_default(row: &Value, aliases: &[&str]) -> String {
    field(row, aliases)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

// ── Scalar parsers ───────────────────────────────────────────────

/// Parse `HH:mm` into minutes since midnight.
pub fn parse_hhmm(raw: &str) -> Result<Minutes, IngestError> {
    let bad = || IngestError::BadHour(raw.to_string());
    let (h, m) = raw.split_once(':').ok_or_else(bad)?;
    let h: Minutes = h.parse().map_err(|_| bad())?;
    let m: Minutes = m.parse().map_err(|_| bad())?;
    if !(0..24).contains(&h) || !(0..60).contains(&m) {
        return Err(bad());
    }
    Ok(h * 60 + m)
}

/// Parse an ISO-8601 timestamp into its wall-clock date and minute-of-day.
/// Offsets are tolerated but not applied — the schedule renders the
/// facility's local wall clock, which is what the API writes.
fn parse_timestamp(raw: &str) -> Result<(chrono::NaiveDate, Minutes), IngestError> {
    let naive: NaiveDateTime = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.naive_local())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S"))
        .map_err(|_| IngestError::BadTimestamp(raw.to_string()))?;
    let minute = (naive.hour() * 60 + naive.minute()) as Minutes;
    Ok((naive.date(), minute))
}

// ── Row normalization ────────────────────────────────────────────

pub fn normalize_resource(row: &Value) -> Result<Resource, IngestError> {
    let id = field(row, &["id", "_id", "courtId"])
        .and_then(id_string)
        .ok_or(IngestError::MissingField("id"))?;
    let name = string_or_default(row, &["name", "courtName"]);

    let opening_raw = field(row, &["openingHour", "opening_hour", "openTime"])
        .and_then(Value::as_str)
        .ok_or(IngestError::MissingField("openingHour"))?;
    let closing_raw = field(row, &["closingHour", "closing_hour", "closeTime"])
        .and_then(Value::as_str)
        .ok_or(IngestError::MissingField("closingHour"))?;
    let hours = OpenHours {
        opening: parse_hhmm(opening_raw)?,
        closing: parse_hhmm(closing_raw)?,
    };

    let capacity = field(row, &["capacity", "maxCapacity", "max_capacity"])
        .and_then(Value::as_u64)
        .unwrap_or(1)
        .max(1) as u32;

    Ok(Resource { id, name, hours, capacity })
}

pub fn normalize_booking(row: &Value) -> Result<Booking, IngestError> {
    let id = field(row, &["id", "_id", "bookingId"])
        .and_then(id_string)
        .ok_or(IngestError::MissingField("id"))?;
    let resource_id = field(row, &["resourceId", "courtId", "court_id"])
        .and_then(id_string)
        .ok_or(IngestError::MissingField("resourceId"))?;

    let start_raw = field(row, &["timeSlotStart", "time_slot_start", "startTime"])
        .and_then(Value::as_str)
        .ok_or(IngestError::MissingField("timeSlotStart"))?;
    let end_raw = field(row, &["timeSlotEnd", "time_slot_end", "endTime"])
        .and_then(Value::as_str)
        .ok_or(IngestError::MissingField("timeSlotEnd"))?;
    let (date, start_minute) = parse_timestamp(start_raw)?;
    let (_, end_minute) = parse_timestamp(end_raw)?;
    // A midnight end rolls to 24:00; anything still empty or reversed after
    // that (zero duration, or an end deeper into the next day) is malformed.
    let span = Span::checked_day_span(start_minute, end_minute).ok_or(
        IngestError::NonPositiveSpan { start: start_minute, end: end_minute },
    )?;

    let status_raw = field(row, &["status"])
        .and_then(Value::as_str)
        .ok_or(IngestError::MissingField("status"))?;
    let status = BookingStatus::from_wire(status_raw)
        .ok_or_else(|| IngestError::UnknownStatus(status_raw.to_string()))?;

    let capacity_mode = field(row, &["isCapacityBooking", "is_capacity_booking"])
        .and_then(Value::as_bool)
        .unwrap_or_else(|| {
            field(row, &["bookingType", "booking_type"])
                .and_then(Value::as_str)
                .is_some_and(|t| t.eq_ignore_ascii_case("capacity"))
        });

    Ok(Booking {
        id,
        resource_id,
        customer_name: string_or_default(row, &["customerName", "customer_name"]),
        customer_phone: string_or_default(row, &["customerPhone", "customer_phone"]),
        date,
        span,
        kind: if capacity_mode { BookingKind::Capacity } else { BookingKind::Slot },
        status,
        paid: field(row, &["isPaid", "is_paid", "paid"])
            .and_then(Value::as_bool)
            .unwrap_or(false),
    })
}

// ── Batch normalization (skip and warn) ──────────────────────────

pub fn normalize_resources(rows: &Value) -> Result<Vec<Resource>, IngestError> {
    let rows = rows.as_array().ok_or(IngestError::NotAnArray)?;
    Ok(rows
        .iter()
        .filter_map(|row| match normalize_resource(row) {
            Ok(r) => Some(r),
            Err(e) => {
                warn!("skipping resource row: {e}");
                None
            }
        })
        .collect())
}

pub fn normalize_bookings(rows: &Value) -> Result<Vec<Booking>, IngestError> {
    let rows = rows.as_array().ok_or(IngestError::NotAnArray)?;
    Ok(rows
        .iter()
        .filter_map(|row| match normalize_booking(row) {
            Ok(b) => Some(b),
            Err(e) => {
                warn!("skipping booking row: {e}");
                None
            }
        })
        .collect())
}
