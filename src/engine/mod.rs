mod layout;
mod merge;
mod style;
#[cfg(test)]
mod tests;

pub use layout::{BlockLayout, layout_block};
pub use merge::merge_bookings_for_resource;
pub use style::{NEUTRAL, StatusStyle};
