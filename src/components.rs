#![warn(clippy::all, clippy::pedantic)]

use bevy_ecs::prelude::*;

use crate::config::{BetOption, SlotConfig};
use crate::layout::{self, Margins};
use crate::paylines::LineSet;
use crate::reels::Grid;
use crate::scoring::SpinResult;
use crate::symbols::{Catalog, Position, Size};

/// The live reel columns.
#[derive(Resource, Debug, Clone, Default)]
pub struct Reels {
    pub grid: Grid,
}

/// Symbol definitions and the generated line set.
#[derive(Resource, Debug, Clone)]
pub struct Paytable {
    pub catalog: Catalog,
    pub lines: LineSet,
}

/// Fixed machine geometry and tuning, derived from the slot config.
#[derive(Resource, Debug, Clone)]
pub struct Machine {
    pub canvas: Size,
    pub rows: usize,
    pub columns: usize,
    pub instance_size: Size,
    pub spacing: f32,
    pub extra_depth: usize,
    pub base_speed: f32,
    pub highlight_ticks: u32,
    pub multiplier: u32,
    pub bets: Vec<BetOption>,
    pub margins: Margins,
}

impl Machine {
    #[must_use]
    pub fn from_config(config: &SlotConfig) -> Self {
        Self {
            canvas: config.canvas,
            rows: config.rows,
            columns: config.columns,
            instance_size: config.instance_size,
            spacing: config.spacing,
            extra_depth: config.extra_depth,
            base_speed: config.base_speed,
            highlight_ticks: config.highlight_ticks,
            multiplier: config.multiplier,
            bets: config.bets.clone(),
            margins: layout::margins(
                config.canvas,
                config.columns,
                config.rows,
                config.instance_size,
                config.spacing,
            ),
        }
    }

    #[must_use]
    pub fn lower_bound(&self) -> f32 {
        self.margins.lower_bound(self.canvas)
    }

    #[must_use]
    pub fn in_window(&self, point: Position) -> bool {
        self.margins.contains(self.canvas, point.x, point.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Rolling,
    Scoring,
    /// Showing winning run `run`, for `ticks` ticks so far
    Highlighting { run: usize, ticks: u32 },
}

#[derive(Resource, Debug, Clone, Default)]
pub struct GameState {
    pub phase: Phase,
    pub balance: u64,
    /// Index into the machine's bet table
    pub bet: usize,
    pub spins: u32,
    pub last_win: u64,
    pub total_won: u64,
    pub result: SpinResult,
}

impl GameState {
    #[must_use]
    pub fn new(balance: u64) -> Self {
        Self {
            balance,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// The selected bet, falling back to the first entry.
    #[must_use]
    pub fn bet_option(&self, bets: &[BetOption]) -> Option<BetOption> {
        bets.get(self.bet).or_else(|| bets.first()).copied()
    }

    pub fn next_bet(&mut self, bets: &[BetOption]) {
        if !bets.is_empty() {
            self.bet = (self.bet + 1) % bets.len();
        }
    }

    pub fn prev_bet(&mut self, bets: &[BetOption]) {
        if !bets.is_empty() {
            self.bet = (self.bet + bets.len() - 1) % bets.len();
        }
    }
}

/// Input polled this tick. Cleared every tick, honored only while idle.
#[derive(Resource, Debug, Clone, Default)]
pub struct Input {
    pub spin: bool,
    pub pointer: Option<Position>, // Pointer-down in canvas coordinates
    pub bet_up: bool,
    pub bet_down: bool,
}

#[derive(Resource, Debug, Clone)]
pub struct SlotRng(pub fastrand::Rng);

impl SlotRng {
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(fastrand::Rng::with_seed(seed)),
            None => Self(fastrand::Rng::new()),
        }
    }
}

