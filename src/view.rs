//! Derived view models for the day-schedule screen.
//!
//! [`DaySchedule::build`] is the computation the UI re-runs whenever a fetch
//! resolves or the selected date changes: full recompute from the current
//! canonical lists, no incremental state. [`ScreenState`] replaces the
//! original screen's loose modal/edit/form flags with one explicit machine,
//! so "viewing and editing at the same time" cannot be represented.

use chrono::NaiveDate;
use tracing::debug;

use crate::engine::{BlockLayout, StatusStyle, layout_block, merge_bookings_for_resource};
use crate::model::*;

// ── Day schedule ─────────────────────────────────────────────────

/// Visible hour range and row height for the grid. The grid is hour-grained:
/// one row per whole hour, and open/closed gating is evaluated per row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    /// First hour-of-day rendered at the top of the grid.
    pub start_hour: i32,
    /// One-past-last hour rendered.
    pub end_hour: i32,
    pub row_height_px: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { start_hour: 0, end_hour: 24, row_height_px: 48.0 }
    }
}

/// A merged block with its grid geometry and color bucket resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedBlock {
    pub block: MergedBlock,
    pub layout: BlockLayout,
    pub style: StatusStyle,
}

/// One resource's column: placed blocks plus the per-hour bookable mask.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceColumn {
    pub resource_id: String,
    pub name: String,
    pub kind: BookingKind,
    pub blocks: Vec<PlacedBlock>,
    /// One entry per rendered hour row; `false` rows draw as closed and are
    /// not tappable. Sampled at the top of each hour, so a resource opening
    /// mid-hour (06:30) shows its first partial hour as a closed row —
    /// bookings start on the hour, matching the grid's hour granularity.
    pub open_rows: Vec<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DaySchedule {
    pub date: NaiveDate,
    pub config: GridConfig,
    pub columns: Vec<ResourceColumn>,
}

impl DaySchedule {
    pub fn build(
        resources: &[Resource],
        bookings: &[Booking],
        date: NaiveDate,
        config: GridConfig,
    ) -> Self {
        let todays: Vec<Booking> = bookings.iter().filter(|b| b.date == date).cloned().collect();

        let columns = resources
            .iter()
            .map(|resource| {
                let kind = resource.kind();
                let blocks = merge_bookings_for_resource(&todays, &resource.id, kind)
                    .into_iter()
                    .map(|block| PlacedBlock {
                        layout: layout_block(block.span, config.start_hour, config.row_height_px),
                        style: StatusStyle::of(block.status),
                        block,
                    })
                    .collect();
                let open_rows = (config.start_hour..config.end_hour)
                    .map(|hour| resource.hours.is_open_at(hour * 60))
                    .collect();
                ResourceColumn {
                    resource_id: resource.id.clone(),
                    name: resource.name.clone(),
                    kind,
                    blocks,
                    open_rows,
                }
            })
            .collect();

        let schedule = Self { date, config, columns };
        debug!(
            date = %date,
            columns = schedule.columns.len(),
            blocks = schedule.columns.iter().map(|c| c.blocks.len()).sum::<usize>(),
            "day schedule rebuilt"
        );
        schedule
    }
}

// ── Screen state machine ─────────────────────────────────────────

/// Editable fields of the booking sheet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Draft {
    pub status: Option<BookingStatus>,
    pub paid: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenState {
    Idle,
    Viewing { booking_ids: Vec<String> },
    Editing { booking_ids: Vec<String>, draft: Draft },
    Submitting { booking_ids: Vec<String>, draft: Draft },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenEvent {
    /// A merged block was tapped; carries its source booking ids.
    BlockTapped { booking_ids: Vec<String> },
    EditRequested { draft: Draft },
    DraftChanged(Draft),
    SubmitPressed,
    SubmitSucceeded,
    SubmitFailed,
    Dismissed,
}

/// Single transition function for the booking sheet. Events that make no
/// sense in the current state leave it unchanged — notably, an in-flight
/// submit cannot be dismissed or re-entered.
pub fn reduce(state: ScreenState, event: ScreenEvent) -> ScreenState {
    use ScreenEvent as E;
    use ScreenState as S;
    match (state, event) {
        (S::Idle, E::BlockTapped { booking_ids }) => S::Viewing { booking_ids },
        (S::Viewing { booking_ids }, E::EditRequested { draft }) => {
            S::Editing { booking_ids, draft }
        }
        (S::Viewing { .. }, E::Dismissed) => S::Idle,
        // Tapping another block while viewing switches the sheet over.
        (S::Viewing { .. }, E::BlockTapped { booking_ids }) => S::Viewing { booking_ids },
        (S::Editing { booking_ids, .. }, E::DraftChanged(draft)) => {
            S::Editing { booking_ids, draft }
        }
        (S::Editing { booking_ids, draft }, E::SubmitPressed) => {
            S::Submitting { booking_ids, draft }
        }
        // Backing out of the editor discards the draft but keeps the sheet.
        (S::Editing { booking_ids, .. }, E::Dismissed) => S::Viewing { booking_ids },
        (S::Submitting { .. }, E::SubmitSucceeded) => S::Idle,
        (S::Submitting { booking_ids, draft }, E::SubmitFailed) => {
            S::Editing { booking_ids, draft }
        }
        (state, _) => state,
    }
}
