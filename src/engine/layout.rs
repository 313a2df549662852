use crate::model::{Minutes, Span};

// ── Grid Geometry ────────────────────────────────────────────────

/// Vertical placement of a block on the schedule grid, in the same unit as
/// `row_height_px`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockLayout {
    pub top: f32,
    pub height: f32,
}

/// Project a canonical minute span onto a fixed-row-height grid.
///
/// `grid_start_hour` is the first hour rendered at the top of the grid and
/// `row_height_px` the height of one hour. Spans are already canonical
/// (`Span::day_span` rolled a midnight end to 24:00), so this is straight
/// arithmetic: later starts always get a larger `top`, and any well-formed
/// span gets a positive height.
pub fn layout_block(span: Span, grid_start_hour: i32, row_height_px: f32) -> BlockLayout {
    let grid_start: Minutes = grid_start_hour * 60;
    BlockLayout {
        top: minutes_to_rows(span.start - grid_start) * row_height_px,
        height: minutes_to_rows(span.duration_minutes()) * row_height_px,
    }
}

fn minutes_to_rows(minutes: Minutes) -> f32 {
    minutes as f32 / 60.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MINUTES_PER_DAY;

    const H: Minutes = 60;
    const ROW: f32 = 48.0;

    #[test]
    fn whole_hour_placement() {
        let l = layout_block(Span::new(9 * H, 10 * H), 0, ROW);
        assert_eq!(l.top, 9.0 * ROW);
        assert_eq!(l.height, ROW);
    }

    #[test]
    fn half_hour_granularity() {
        let l = layout_block(Span::new(9 * H, 10 * H + 30), 0, ROW);
        assert_eq!(l.top, 9.0 * ROW);
        assert_eq!(l.height, 1.5 * ROW);
    }

    #[test]
    fn minute_offset_shifts_top() {
        let l = layout_block(Span::new(9 * H + 15, 10 * H), 0, ROW);
        assert_eq!(l.top, 9.25 * ROW);
        assert_eq!(l.height, 0.75 * ROW);
    }

    #[test]
    fn grid_start_offsets_top() {
        let l = layout_block(Span::new(9 * H, 10 * H), 6, ROW);
        assert_eq!(l.top, 3.0 * ROW);
        assert_eq!(l.height, ROW);
    }

    #[test]
    fn midnight_end_has_positive_height() {
        let span = Span::day_span(23 * H, 0);
        assert_eq!(span.end, MINUTES_PER_DAY);
        let l = layout_block(span, 0, ROW);
        assert_eq!(l.top, 23.0 * ROW);
        assert_eq!(l.height, ROW);
    }

    #[test]
    fn later_start_never_smaller_top() {
        let starts = [0, 6 * H, 9 * H + 5, 13 * H + 30, 23 * H];
        let tops: Vec<f32> = starts
            .iter()
            .map(|&s| layout_block(Span::new(s, s + 30), 0, ROW).top)
            .collect();
        assert!(tops.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn block_before_grid_start_goes_off_grid() {
        // Off-grid coordinates are the rendering layer's concern, not an error.
        let l = layout_block(Span::new(5 * H, 6 * H), 6, ROW);
        assert_eq!(l.top, -ROW);
        assert_eq!(l.height, ROW);
    }
}
