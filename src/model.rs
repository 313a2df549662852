use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Minutes since midnight of the displayed day — the only time unit in the
/// engine. `end` values may reach [`MINUTES_PER_DAY`] (a midnight close).
pub type Minutes = i32;

pub const MINUTES_PER_DAY: Minutes = 1440;

/// Half-open interval `[start, end)` in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: Minutes,
    pub end: Minutes,
}

impl Span {
    pub fn new(start: Minutes, end: Minutes) -> Self {
        debug_assert!(start < end, "Span start must be before end");
        Self { start, end }
    }

    /// Build a within-day span from wall-clock minutes, rolling an end of
    /// `00:00` over to `24:00`. Everything downstream sees canonical
    /// `[start, end)` minutes.
    pub fn day_span(start: Minutes, end: Minutes) -> Self {
        Self::new(start, roll_midnight(end))
    }

    /// Like [`day_span`], but returns `None` when the span is still empty or
    /// reversed after the rollover — a zero-duration row, or an end that
    /// lands on a later calendar day and projects before the start. Untrusted
    /// input goes through this; [`day_span`] is for spans already known to be
    /// well formed.
    ///
    /// [`day_span`]: Span::day_span
    pub fn checked_day_span(start: Minutes, end: Minutes) -> Option<Self> {
        let end = roll_midnight(end);
        (start < end).then_some(Self { start, end })
    }

    pub fn duration_minutes(&self) -> Minutes {
        self.end - self.start
    }

    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn contains_instant(&self, t: Minutes) -> bool {
        self.start <= t && t < self.end
    }
}

/// The only place the "end of `00:00` means midnight" rollover happens.
fn roll_midnight(end: Minutes) -> Minutes {
    if end == 0 { MINUTES_PER_DAY } else { end }
}

/// Booking workflow status. The wire labels are an external contract and
/// round-trip unchanged; the engine never invents new ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
    NoShow,
}

impl BookingStatus {
    pub fn as_wire(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "PENDING",
            BookingStatus::Confirmed => "CONFIRMED",
            BookingStatus::Completed => "COMPLETED",
            BookingStatus::Cancelled => "CANCELLED",
            BookingStatus::NoShow => "NO_SHOW",
        }
    }

    pub fn from_wire(label: &str) -> Option<Self> {
        match label {
            "PENDING" => Some(BookingStatus::Pending),
            "CONFIRMED" => Some(BookingStatus::Confirmed),
            "COMPLETED" => Some(BookingStatus::Completed),
            "CANCELLED" => Some(BookingStatus::Cancelled),
            "NO_SHOW" => Some(BookingStatus::NoShow),
            _ => None,
        }
    }

    /// Whether a booking with this status is shown in a view of the given
    /// kind. Slot views hide cancelled/no-show rows (the slot is free again);
    /// capacity views keep the full history visible.
    pub fn visible_in(&self, kind: BookingKind) -> bool {
        match kind {
            BookingKind::Slot => {
                !matches!(self, BookingStatus::Cancelled | BookingStatus::NoShow)
            }
            BookingKind::Capacity => true,
        }
    }
}

/// The two mutually exclusive schedule views a booking can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingKind {
    /// Exclusive-use resource (capacity 1), e.g. a single court.
    Slot,
    /// Shared resource with a headcount limit, e.g. a gym floor.
    Capacity,
}

/// A reservation record as canonicalized by ingest. Immutable input — the
/// engine only groups and re-projects, it never creates or edits bookings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub resource_id: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub date: NaiveDate,
    pub span: Span,
    pub kind: BookingKind,
    pub status: BookingStatus,
    pub paid: bool,
}

/// Daily operating window in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenHours {
    pub opening: Minutes,
    pub closing: Minutes,
}

impl OpenHours {
    /// A closing of `00:00` with a later-than-midnight opening means
    /// "closes at midnight", i.e. 24:00, not a zero-width window.
    fn effective_closing(&self) -> Minutes {
        if self.closing == 0 && self.opening > 0 {
            MINUTES_PER_DAY
        } else {
            self.closing
        }
    }

    /// Whether the resource is open at `slot` (a minute of the day).
    ///
    /// A window whose effective closing precedes its opening wraps past
    /// midnight and is open on both sides of it.
    pub fn is_open_at(&self, slot: Minutes) -> bool {
        let closing = self.effective_closing();
        if closing < self.opening {
            slot >= self.opening || slot < closing
        } else {
            slot >= self.opening && slot < closing
        }
    }
}

/// A bookable court or facility, canonicalized by ingest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub name: String,
    pub hours: OpenHours,
    /// Max concurrent bookings (always >= 1).
    pub capacity: u32,
}

impl Resource {
    pub fn kind(&self) -> BookingKind {
        if self.capacity > 1 {
            BookingKind::Capacity
        } else {
            BookingKind::Slot
        }
    }
}

/// One or more contiguous same-customer same-status bookings collapsed into
/// a single schedule-grid element. Ephemeral — rebuilt on every render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedBlock {
    /// Source booking ids in chronological order.
    pub ids: Vec<String>,
    pub customer_phone: String,
    pub customer_name: String,
    pub span: Span,
    pub status: BookingStatus,
}

impl MergedBlock {
    /// Open a new run from a single booking.
    pub fn open(booking: &Booking) -> Self {
        Self {
            ids: vec![booking.id.clone()],
            customer_phone: booking.customer_phone.clone(),
            customer_name: booking.customer_name.clone(),
            span: booking.span,
            status: booking.status,
        }
    }

    /// Merge precondition: same non-empty phone, same status, and the run's
    /// end exactly meets the booking's start (back-to-back, no gap).
    pub fn can_extend(&self, booking: &Booking) -> bool {
        !booking.customer_phone.is_empty()
            && booking.customer_phone == self.customer_phone
            && booking.status == self.status
            && booking.span.start == self.span.end
    }

    /// Extend the run. Caller must have checked [`can_extend`].
    ///
    /// [`can_extend`]: MergedBlock::can_extend
    pub fn extend(&mut self, booking: &Booking) {
        debug_assert!(self.can_extend(booking));
        self.span.end = booking.span.end;
        self.ids.push(booking.id.clone());
    }
}
