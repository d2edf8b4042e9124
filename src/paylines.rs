#![warn(clippy::all, clippy::pedantic)]

//! Payline generation.
//!
//! A line holds one `(column, row)` pair per column. Each family is a closed
//! form `row(x)` over the line length `n`:
//!
//! | family   | row(x)                                         | height |
//! |----------|------------------------------------------------|--------|
//! | straight | `0`                                            | 1      |
//! | triangle | `min(x, n - 1 - x)`                            | (n+1)/2 |
//! | dip      | `1` at `x == 0` or `x == n - 1`, else `0`; `0` for `n == 1` | 2 |
//! | saw      | `x mod 2`                                      | 2      |
//! | middle   | `1` at the middle index (two for even `n`), else `0` | 2 |
//!
//! Every family is emitted upright, then mirrored, each shifted down across
//! every row offset that keeps the shape inside the grid.

use log::debug;

use crate::error::SlotError;

pub type Cell = (usize, usize);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Payline {
    pub cells: Vec<Cell>,
}

impl Payline {
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn min_row(&self) -> usize {
        self.cells.iter().map(|&(_, y)| y).min().unwrap_or(0)
    }

    #[must_use]
    pub fn max_row(&self) -> usize {
        self.cells.iter().map(|&(_, y)| y).max().unwrap_or(0)
    }

    /// Rows spanned by the line, counted from row 0.
    #[must_use]
    pub fn height(&self) -> usize {
        if self.cells.is_empty() {
            0
        } else {
            self.max_row() + 1
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Straight,
    Triangle,
    Dip,
    Saw,
    Middle,
}

impl Family {
    pub const ALL: [Family; 5] = [
        Family::Straight,
        Family::Triangle,
        Family::Dip,
        Family::Saw,
        Family::Middle,
    ];

    #[must_use]
    pub fn row(self, x: usize, n: usize) -> usize {
        match self {
            Family::Straight => 0,
            Family::Triangle => x.min(n - 1 - x),
            Family::Dip => usize::from(n > 1 && (x == 0 || x == n - 1)),
            Family::Saw => x % 2,
            Family::Middle => {
                let middle = n / 2;
                usize::from(x == middle || (n % 2 == 0 && x + 1 == middle))
            }
        }
    }

    /// The family's base line for `columns` columns, touching row 0.
    #[must_use]
    pub fn line(self, columns: usize) -> Payline {
        Payline {
            cells: (0..columns).map(|x| (x, self.row(x, columns))).collect(),
        }
    }
}

#[must_use]
pub fn straight(columns: usize) -> Payline {
    Family::Straight.line(columns)
}

#[must_use]
pub fn triangle(columns: usize) -> Payline {
    Family::Triangle.line(columns)
}

#[must_use]
pub fn dip(columns: usize) -> Payline {
    Family::Dip.line(columns)
}

#[must_use]
pub fn saw(columns: usize) -> Payline {
    Family::Saw.line(columns)
}

#[must_use]
pub fn middle(columns: usize) -> Payline {
    Family::Middle.line(columns)
}

/// Reflects a line vertically inside the rows it already spans.
#[must_use]
pub fn mirror(line: &Payline) -> Payline {
    let span = line.min_row() + line.max_row();
    Payline {
        cells: line.cells.iter().map(|&(x, y)| (x, span - y)).collect(),
    }
}

/// One copy of `line` per row offset that keeps it within `rows`.
#[must_use]
pub fn expand(line: &Payline, rows: usize, columns: usize) -> Vec<Payline> {
    if line.len() != columns || line.max_row() >= rows {
        return Vec::new();
    }

    (0..rows - line.max_row())
        .map(|offset| Payline {
            cells: line.cells.iter().map(|&(x, y)| (x, y + offset)).collect(),
        })
        .collect()
}

/// All paylines for a grid, grouped by family, orientation, then offset.
#[derive(Debug, Clone, Default)]
pub struct LineSet {
    lines: Vec<Payline>,
}

impl LineSet {
    pub fn generate(rows: usize, columns: usize) -> Result<Self, SlotError> {
        if rows == 0 || columns == 0 {
            return Err(SlotError::InvalidShape { rows, columns });
        }

        let mut lines = Vec::new();
        for family in Family::ALL {
            let upright = family.line(columns);
            let mirrored = mirror(&upright);

            let before = lines.len();
            lines.extend(expand(&upright, rows, columns));
            if mirrored != upright {
                lines.extend(expand(&mirrored, rows, columns));
            }

            debug!(
                "{family:?} lines for {rows}x{columns}: {}",
                lines.len() - before
            );
        }

        Ok(Self { lines })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn lines(&self) -> &[Payline] {
        &self.lines
    }

    /// The first `count` lines, clamped to the set size.
    #[must_use]
    pub fn prefix(&self, count: usize) -> &[Payline] {
        &self.lines[..count.min(self.lines.len())]
    }
}
