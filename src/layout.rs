#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]

use crate::reels::Grid;
use crate::symbols::Size;

/// Space left around the centered grid.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Margins {
    /// Height of the strips above and below the grid
    pub horizontal: f32,
    /// Width of the strips left and right of the grid
    pub vertical: f32,
}

impl Margins {
    /// Top edge of the grid window, where row 0 rests.
    #[must_use]
    pub fn top(&self) -> f32 {
        self.horizontal
    }

    /// Bottom edge of the grid window. Symbols whose top passes it are off-grid.
    #[must_use]
    pub fn lower_bound(&self, canvas: Size) -> f32 {
        canvas.height - self.horizontal
    }

    #[must_use]
    pub fn contains(&self, canvas: Size, x: f32, y: f32) -> bool {
        x >= self.vertical
            && x <= canvas.width - self.vertical
            && y >= self.horizontal
            && y <= canvas.height - self.horizontal
    }
}

/// Extent of `count` symbols laid out with `spacing` between them.
#[must_use]
pub fn extent(count: usize, side: f32, spacing: f32) -> f32 {
    if count == 0 {
        0.0
    } else {
        count as f32 * side + (count - 1) as f32 * spacing
    }
}

#[must_use]
pub fn margins(canvas: Size, columns: usize, rows: usize, instance_size: Size, spacing: f32) -> Margins {
    Margins {
        horizontal: (canvas.height - extent(rows, instance_size.height, spacing)) / 2.0,
        vertical: (canvas.width - extent(columns, instance_size.width, spacing)) / 2.0,
    }
}

/// Places every symbol of `grid` on the canvas and returns the margins.
///
/// The bottom `target_rows` symbols of each column fill the centered window;
/// any extra symbols of a rolling column stack upwards above it.
pub fn position(grid: &mut Grid, canvas: Size, target_rows: usize, instance_size: Size, spacing: f32) -> Margins {
    let margins = margins(canvas, grid.len(), target_rows, instance_size, spacing);
    let pitch_x = instance_size.width + spacing;
    let pitch_y = instance_size.height + spacing;

    for (c, column) in grid.iter_mut().enumerate() {
        let x = margins.vertical + c as f32 * pitch_x;
        let overflow = column.len() as f32 - target_rows as f32;

        for (r, instance) in column.iter_mut().enumerate() {
            instance.position.x = x;
            instance.position.y = margins.horizontal + (r as f32 - overflow) * pitch_y;
            instance.size = instance_size;
        }
    }

    margins
}
