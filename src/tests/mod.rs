#![warn(clippy::all, clippy::pedantic)]

pub mod game_tests;
pub mod integration_tests;
pub mod systems_tests;

// Import test utilities
#[cfg(test)]
pub mod test_utils {
    use crate::app::App;
    use crate::config::Config;
    use crate::reels::Grid;
    use crate::symbols::{Position, Size, SymbolInstance, SymbolKind, WILDCARD_ID};

    // Helper to build a seeded default config
    #[must_use]
    pub fn test_config() -> Config {
        let mut config = Config::default();
        config.slot.seed = Some(42);
        config
    }

    // Helper function to create a test app
    #[must_use]
    pub fn create_test_app() -> App {
        App::new(test_config()).expect("default config is valid")
    }

    // Ordinary symbol with the given id and value
    #[must_use]
    pub fn ordinary(id: i32, value: u32) -> SymbolInstance {
        SymbolInstance {
            symbol: usize::try_from(id).unwrap_or(0),
            kind: SymbolKind::Ordinary(id),
            value,
            position: Position::default(),
            size: Size::square(100.0),
            highlighted: false,
        }
    }

    #[must_use]
    pub fn wild(value: u32) -> SymbolInstance {
        SymbolInstance {
            symbol: 99,
            kind: SymbolKind::Wildcard(WILDCARD_ID),
            value,
            position: Position::default(),
            size: Size::square(100.0),
            highlighted: false,
        }
    }

    // Builds a column-major grid from row-major symbols
    #[must_use]
    pub fn grid_from_rows(rows: &[Vec<SymbolInstance>]) -> Grid {
        let columns = rows.first().map_or(0, Vec::len);
        (0..columns)
            .map(|c| rows.iter().map(|row| row[c].clone()).collect())
            .collect()
    }

    // A single column of `len` symbols stacked at the given y positions
    #[must_use]
    pub fn column_at(ys: &[f32]) -> Vec<SymbolInstance> {
        ys.iter()
            .enumerate()
            .map(|(i, &y)| {
                let mut instance = ordinary(i32::try_from(i).unwrap_or(0), 10);
                instance.position.y = y;
                instance
            })
            .collect()
    }
}
