#![warn(clippy::all, clippy::pedantic)]

#[cfg(test)]
mod tests {
    use crate::game::*;
    use crate::layout;
    use crate::symbols::Size;

    #[test]
    fn test_default_grid_fits_the_canvas() {
        let width = layout::extent(COLUMNS, INSTANCE_SIZE, SPACING);
        let height = layout::extent(ROWS, INSTANCE_SIZE, SPACING);

        assert!(width <= CANVAS_WIDTH);
        assert!(height <= CANVAS_HEIGHT);
    }

    #[test]
    fn test_default_window() {
        let margins = layout::margins(
            Size {
                width: CANVAS_WIDTH,
                height: CANVAS_HEIGHT,
            },
            COLUMNS,
            ROWS,
            Size::square(INSTANCE_SIZE),
            SPACING,
        );
        assert_eq!(margins.horizontal, 140.0);
        assert_eq!(margins.vertical, 30.0);
    }

    #[test]
    fn test_bet_table_is_ordered() {
        assert!(!BET_TABLE.is_empty());
        assert_eq!(BET_TABLE[0].0, 1);
        for pair in BET_TABLE.windows(2) {
            assert!(pair[0].0 < pair[1].0);
            assert!(pair[0].1 < pair[1].1);
        }
    }

    #[test]
    fn test_payout_constants() {
        // The last big slot stays above the wildcard value
        let smallest_big = u64::from(MAX_VALUE) - (BIG_VALUE_SLOTS as u64 - 1) * u64::from(WILDCARD_VALUE);
        assert!(smallest_big >= u64::from(DEFAULT_VALUE));
        assert!(MIN_RUN >= 2);
        assert_eq!(HIGHLIGHT_TICKS, TICKS_PER_SECOND * 3 / 2);
    }

    #[test]
    fn test_default_names_carry_one_wildcard() {
        let wilds = DEFAULT_SYMBOL_NAMES
            .iter()
            .filter(|name| name.to_lowercase().contains("wild"))
            .count();
        assert_eq!(wilds, 1);
    }
}
