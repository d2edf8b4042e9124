use thiserror::Error;

/// Configuration defects detected while building the catalog, the line set
/// or the machine layout. None of these are recoverable at runtime.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SlotError {
    #[error("catalog produced {actual} values, expected {expected}")]
    CatalogSize { expected: usize, actual: usize },

    #[error("payout slot {slot} drops {max_value} below zero in steps of {step}")]
    PayoutUnderflow { max_value: u32, step: u32, slot: usize },

    #[error("catalog has no ordinary symbols")]
    EmptyCatalog,

    #[error("canvas {width}x{height} must be finite and positive")]
    InvalidCanvas { width: f32, height: f32 },

    #[error("grid shape {rows}x{columns} is invalid, both dimensions must be at least 1")]
    InvalidShape { rows: usize, columns: usize },

    #[error("instance size {width}x{height} must be positive")]
    InvalidInstanceSize { width: f32, height: f32 },

    #[error("spacing {0} must be finite and leave a positive pitch between symbols")]
    InvalidSpacing(f32),

    #[error("grid of {grid_width}x{grid_height} does not fit a {canvas_width}x{canvas_height} canvas")]
    GridTooLarge {
        grid_width: f32,
        grid_height: f32,
        canvas_width: f32,
        canvas_height: f32,
    },

    #[error("base animation speed must be finite and positive, got {0}")]
    InvalidSpeed(f32),

    #[error("cost table is empty")]
    NoBets,

    #[error("bet option {index} purchases zero lines")]
    ZeroLineBet { index: usize },
}

