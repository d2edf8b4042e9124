#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Column counts and lengths are tiny, converting them to f32 loses nothing
    clippy::cast_precision_loss
)]

use log::trace;

use crate::symbols::{Catalog, SymbolInstance};

/// Index 0 is the top, most recently added symbol.
pub type Column = Vec<SymbolInstance>;
pub type Grid = Vec<Column>;

/// Draws `depth` independent copies per column, uniformly and with replacement.
#[must_use]
pub fn roll(catalog: &Catalog, columns: usize, depth: usize, rng: &mut fastrand::Rng) -> Grid {
    if catalog.is_empty() {
        return vec![Vec::new(); columns];
    }

    (0..columns)
        .map(|_| {
            (0..depth)
                .filter_map(|_| catalog.instantiate(rng.usize(..catalog.len())))
                .collect()
        })
        .collect()
}

/// Stacks each new column on top of the matching existing one.
pub fn extend(grid: &mut Grid, new_rolls: Grid) {
    for (index, mut fresh) in new_rolls.into_iter().enumerate() {
        match grid.get_mut(index) {
            Some(column) => {
                fresh.append(column);
                *column = fresh;
            }
            None => grid.push(fresh),
        }
    }
}

/// Column speed multiplier, `columns` for the left-most column down to 1.
#[must_use]
pub fn speed_factor(index: usize, columns: usize) -> f32 {
    columns.saturating_sub(index).max(1) as f32
}

/// Moves every unsettled column down one tick and snaps settled ones to `top_y`.
///
/// The step of a column with `len` symbols is
/// `speed_factor * base_speed * len / 4`, clamped so the last of the top
/// `target_rows` symbols never passes `lower_bound`. Trimming therefore never
/// leaves a column shorter than `target_rows`.
pub fn advance(grid: &mut Grid, target_rows: usize, top_y: f32, base_speed: f32, lower_bound: f32) {
    let columns = grid.len();

    for (index, column) in grid.iter_mut().enumerate() {
        let len = column.len();

        if len > target_rows {
            let nominal = speed_factor(index, columns) * base_speed * len as f32 / 4.0;
            // Bottom-most symbol that stays once the overflow is trimmed
            let survivor = target_rows.checked_sub(1);
            let step = match survivor {
                Some(survivor) => nominal
                    .min(lower_bound - column[survivor].position.y)
                    .max(0.0),
                None => nominal,
            };

            for instance in column.iter_mut() {
                instance.position.y += step;
            }
            if let Some(survivor) = survivor {
                let y = &mut column[survivor].position.y;
                *y = y.min(lower_bound);
            }

            trace!("Column {index}: {len} symbols, step {step}");
        } else if len == target_rows {
            let Some(top) = column.first() else {
                continue;
            };
            let shift = top_y - top.position.y;
            if shift != 0.0 {
                for instance in column.iter_mut() {
                    instance.position.y += shift;
                }
            }
        }
    }
}

/// Copy of `grid` without the symbols that fell below `lower_bound`.
#[must_use]
pub fn trim(grid: &Grid, lower_bound: f32) -> Grid {
    grid.iter()
        .map(|column| {
            column
                .iter()
                .filter(|instance| instance.position.y <= lower_bound)
                .cloned()
                .collect()
        })
        .collect()
}

/// Symbols above the target row count, summed over all columns.
#[must_use]
pub fn excess_rows(grid: &Grid, target_rows: usize) -> usize {
    grid.iter()
        .map(|column| column.len().saturating_sub(target_rows))
        .sum()
}

#[must_use]
pub fn is_settled(grid: &Grid, target_rows: usize) -> bool {
    grid.iter().all(|column| column.len() == target_rows)
}

/// Drops every highlight mark in the grid.
pub fn clear_highlights(grid: &mut Grid) {
    for instance in grid.iter_mut().flatten() {
        instance.highlighted = false;
    }
}
