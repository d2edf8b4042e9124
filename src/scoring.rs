#![warn(clippy::all, clippy::pedantic)]

use log::debug;

use crate::game::MIN_RUN;
use crate::paylines::{Cell, Payline};
use crate::reels::Grid;
use crate::symbols::SymbolInstance;

/// A paying run: the leading symbols of one payline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningRun {
    /// Index of the payline in the active line set
    pub line: usize,
    pub cells: Vec<Cell>,
    pub payout: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpinResult {
    pub total: u64,
    /// Paying runs in payline order
    pub runs: Vec<WinningRun>,
}

/// Transposes the top `rows` symbols of each column into `visible[row][column]`.
/// A column shorter than `rows` leaves `None` holes.
#[must_use]
pub fn visible_rows(grid: &Grid, rows: usize) -> Vec<Vec<Option<&SymbolInstance>>> {
    (0..rows)
        .map(|row| grid.iter().map(|column| column.get(row)).collect())
        .collect()
}

/// Symbols under each cell of `line`, or `None` when a cell is off the grid.
#[must_use]
pub fn get_values<'a>(
    visible: &[Vec<Option<&'a SymbolInstance>>],
    line: &Payline,
) -> Option<Vec<&'a SymbolInstance>> {
    line.cells
        .iter()
        .map(|&(column, row)| visible.get(row).and_then(|cells| cells.get(column)).copied().flatten())
        .collect()
}

/// Length of the leading run. The anchor is the first ordinary symbol, or the
/// first symbol when the line holds nothing but wildcards.
#[must_use]
pub fn run_length(values: &[&SymbolInstance]) -> usize {
    let Some(anchor) = values
        .iter()
        .find(|instance| !instance.kind.is_wildcard())
        .or_else(|| values.first())
    else {
        return 0;
    };

    values
        .iter()
        .take_while(|instance| instance.matches(anchor))
        .count()
}

/// Scores `lines` against a settled grid.
#[must_use]
pub fn score_lines(grid: &Grid, rows: usize, lines: &[Payline], multiplier: u32) -> SpinResult {
    let visible = visible_rows(grid, rows);
    let mut result = SpinResult::default();

    for (index, line) in lines.iter().enumerate() {
        let Some(values) = get_values(&visible, line) else {
            continue;
        };

        let run = run_length(&values);
        if run < MIN_RUN {
            continue;
        }

        let payout = values[..run]
            .iter()
            .map(|instance| u64::from(instance.value))
            .sum::<u64>()
            * u64::from(multiplier);

        debug!("Line {index} pays {payout} for a run of {run}");

        result.total += payout;
        result.runs.push(WinningRun {
            line: index,
            cells: line.cells[..run].to_vec(),
            payout,
        });
    }

    result
}
