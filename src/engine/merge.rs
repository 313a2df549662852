use crate::model::*;

// ── Merge Algorithm ──────────────────────────────────────────────

/// Collapse a flat booking list into the merged blocks a day-schedule view
/// draws for one resource.
///
/// Filters to bookings on `resource_id` that belong to the `kind` view (slot
/// and capacity bookings are never shown together) and whose status is
/// visible in that view, sorts ascending by start, then walks once: each
/// booking either extends the open run (same non-empty phone, same status,
/// back-to-back with no gap) or closes it and opens a new one.
///
/// The output is chronological and partitions the filtered input — every
/// surviving booking id lands in exactly one block. The sort is stable, so
/// equal starts keep source order; overlapping input (an upstream
/// data-integrity fault) still produces a deterministic grouping, it just
/// never merges.
pub fn merge_bookings_for_resource(
    bookings: &[Booking],
    resource_id: &str,
    kind: BookingKind,
) -> Vec<MergedBlock> {
    let mut visible: Vec<&Booking> = bookings
        .iter()
        .filter(|b| {
            b.resource_id == resource_id && b.kind == kind && b.status.visible_in(kind)
        })
        .collect();
    visible.sort_by_key(|b| b.span.start);

    let mut blocks: Vec<MergedBlock> = Vec::new();
    for booking in visible {
        if let Some(run) = blocks.last_mut()
            && run.can_extend(booking) {
                run.extend(booking);
                continue;
            }
        blocks.push(MergedBlock::open(booking));
    }
    blocks
}
