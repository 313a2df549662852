//! courtgrid — schedule-grid engine for a court/facility booking front end.
//!
//! Pure, synchronous, in-process: the host application fetches booking and
//! court lists from the reservation API, runs them through [`ingest`] once to
//! get canonical records, and rebuilds a [`view::DaySchedule`] from scratch
//! whenever the data or selected date changes. The [`engine`] underneath is
//! the testable core: merging contiguous same-customer bookings into blocks,
//! projecting them onto a fixed-row grid, and gating cells by open hours.

pub mod engine;
pub mod ingest;
pub mod model;
pub mod view;
