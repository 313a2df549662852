use crate::model::BookingStatus;

/// Background/text color pairing for a booking block. Pure presentation
/// lookup — no business logic keys off these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    pub background: &'static str,
    pub text: &'static str,
}

/// Fallback bucket for anything the mapping doesn't recognize.
pub const NEUTRAL: StatusStyle = StatusStyle {
    background: "#e2e8f0",
    text: "#475569",
};

impl StatusStyle {
    pub fn of(status: BookingStatus) -> Self {
        match status {
            BookingStatus::Pending => StatusStyle {
                background: "#fef3c7",
                text: "#b45309",
            },
            BookingStatus::Confirmed => StatusStyle {
                background: "#dcfce7",
                text: "#15803d",
            },
            BookingStatus::Completed => StatusStyle {
                background: "#dbeafe",
                text: "#1d4ed8",
            },
            BookingStatus::Cancelled => StatusStyle {
                background: "#fee2e2",
                text: "#b91c1c",
            },
            BookingStatus::NoShow => StatusStyle {
                background: "#f3e8ff",
                text: "#7e22ce",
            },
        }
    }

    /// Map a raw wire label, falling back to [`NEUTRAL`] for unknown values
    /// rather than failing.
    pub fn of_wire(label: &str) -> Self {
        BookingStatus::from_wire(label).map_or(NEUTRAL, Self::of)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_status_has_a_distinct_bucket() {
        let styles = [
            StatusStyle::of(BookingStatus::Pending),
            StatusStyle::of(BookingStatus::Confirmed),
            StatusStyle::of(BookingStatus::Completed),
            StatusStyle::of(BookingStatus::Cancelled),
            StatusStyle::of(BookingStatus::NoShow),
        ];
        for (i, a) in styles.iter().enumerate() {
            for b in &styles[i + 1..] {
                assert_ne!(a, b);
            }
            assert_ne!(*a, NEUTRAL);
        }
    }

    #[test]
    fn wire_labels_resolve() {
        assert_eq!(
            StatusStyle::of_wire("CONFIRMED"),
            StatusStyle::of(BookingStatus::Confirmed)
        );
    }

    #[test]
    fn unknown_label_falls_back_to_neutral() {
        assert_eq!(StatusStyle::of_wire("ARCHIVED"), NEUTRAL);
        assert_eq!(StatusStyle::of_wire(""), NEUTRAL);
    }
}
