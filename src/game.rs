#![warn(clippy::all, clippy::pedantic)]

// Logical canvas the grid is centered in
pub const CANVAS_WIDTH: f32 = 600.0;
pub const CANVAS_HEIGHT: f32 = 600.0;

// Grid dimensions
pub const ROWS: usize = 3;
pub const COLUMNS: usize = 5;
pub const INSTANCE_SIZE: f32 = 100.0;
pub const SPACING: f32 = 10.0;

// Reel animation
pub const EXTRA_DEPTH: usize = 20; // Symbols stacked on top of each column per spin
pub const BASE_SPEED: f32 = 2.0; // Logical units per tick, before column factor and depth scaling
pub const TICKS_PER_SECOND: u32 = 60;
pub const HIGHLIGHT_TICKS: u32 = 90; // 1.5 seconds at 60 ticks per second

// Scoring
pub const MIN_RUN: usize = 3; // Shortest run that pays
pub const DEFAULT_MULTIPLIER: u32 = 1;

// Symbol payouts
pub const WILDCARD_VALUE: u32 = 5;
pub const DEFAULT_VALUE: u32 = 10;
pub const MAX_VALUE: u32 = 30;
pub const BIG_VALUE_SLOTS: usize = 3;

// Wallet
pub const STARTING_BALANCE: u64 = 100;

// Lines purchased and what they cost
pub const BET_TABLE: &[(usize, u64)] = &[
    (1, 1),  // A single straight line
    (5, 4),  // Straights and both triangles
    (9, 7),  // etc.
    (13, 10),
    (17, 12),
];

// Asset names used when no asset directory is configured
pub const DEFAULT_SYMBOL_NAMES: &[&str] = &["seven", "bell", "cherry", "lemon", "plum", "wild"];
