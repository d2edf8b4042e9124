pub mod loader;

use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SlotError;
use crate::game;
use crate::layout;
use crate::symbols::{PayoutRule, Size};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub slot: SlotConfig,
    pub symbols: SymbolConfig,
}

impl Config {
    /// Rejects any setting the engine cannot lay out or score.
    pub fn validate(&self) -> Result<(), SlotError> {
        self.slot.validate()
    }
}

// Lines purchased for a spin and their price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetOption {
    pub lines: usize,
    pub cost: u64,
}

// Machine shape, animation and wallet settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotConfig {
    pub canvas: Size,
    pub rows: usize,
    pub columns: usize,
    pub instance_size: Size,
    pub spacing: f32,
    pub extra_depth: usize,
    pub base_speed: f32,
    pub highlight_ticks: u32,
    pub multiplier: u32,
    pub starting_balance: u64,
    pub bets: Vec<BetOption>,
    pub seed: Option<u64>,
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self {
            canvas: Size {
                width: game::CANVAS_WIDTH,
                height: game::CANVAS_HEIGHT,
            },
            rows: game::ROWS,
            columns: game::COLUMNS,
            instance_size: Size::square(game::INSTANCE_SIZE),
            spacing: game::SPACING,
            extra_depth: game::EXTRA_DEPTH,
            base_speed: game::BASE_SPEED,
            highlight_ticks: game::HIGHLIGHT_TICKS,
            multiplier: game::DEFAULT_MULTIPLIER,
            starting_balance: game::STARTING_BALANCE,
            bets: game::BET_TABLE
                .iter()
                .map(|&(lines, cost)| BetOption { lines, cost })
                .collect(),
            seed: None,
        }
    }
}

impl SlotConfig {
    pub fn validate(&self) -> Result<(), SlotError> {
        let canvas = self.canvas;
        if !(canvas.width.is_finite() && canvas.height.is_finite()) || canvas.width <= 0.0 || canvas.height <= 0.0 {
            return Err(SlotError::InvalidCanvas {
                width: canvas.width,
                height: canvas.height,
            });
        }

        if self.rows == 0 || self.columns == 0 {
            return Err(SlotError::InvalidShape {
                rows: self.rows,
                columns: self.columns,
            });
        }

        let size = self.instance_size;
        if !(size.width.is_finite() && size.height.is_finite()) || size.width <= 0.0 || size.height <= 0.0 {
            return Err(SlotError::InvalidInstanceSize {
                width: size.width,
                height: size.height,
            });
        }

        // Symbols must stack at a positive pitch or trimming never catches up
        if !self.spacing.is_finite()
            || size.width + self.spacing <= 0.0
            || size.height + self.spacing <= 0.0
        {
            return Err(SlotError::InvalidSpacing(self.spacing));
        }

        let grid_width = layout::extent(self.columns, size.width, self.spacing);
        let grid_height = layout::extent(self.rows, size.height, self.spacing);
        if grid_width > canvas.width || grid_height > canvas.height {
            return Err(SlotError::GridTooLarge {
                grid_width,
                grid_height,
                canvas_width: canvas.width,
                canvas_height: canvas.height,
            });
        }

        if !self.base_speed.is_finite() || self.base_speed <= 0.0 {
            return Err(SlotError::InvalidSpeed(self.base_speed));
        }

        if self.bets.is_empty() {
            return Err(SlotError::NoBets);
        }
        if let Some(index) = self.bets.iter().position(|bet| bet.lines == 0) {
            return Err(SlotError::ZeroLineBet { index });
        }

        Ok(())
    }
}

// Symbol assets and payout values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymbolConfig {
    pub names: Vec<String>,
    pub asset_dir: Option<PathBuf>,
    pub wildcard_value: u32,
    pub default_value: u32,
    pub max_value: u32,
    pub big_value_slots: usize,
}

impl Default for SymbolConfig {
    fn default() -> Self {
        let rule = PayoutRule::default();
        Self {
            names: game::DEFAULT_SYMBOL_NAMES
                .iter()
                .map(ToString::to_string)
                .collect(),
            asset_dir: None,
            wildcard_value: rule.wildcard_value,
            default_value: rule.default_value,
            max_value: rule.max_value,
            big_value_slots: rule.big_value_slots,
        }
    }
}

impl SymbolConfig {
    #[must_use]
    pub fn payout_rule(&self) -> PayoutRule {
        PayoutRule {
            wildcard_value: self.wildcard_value,
            default_value: self.default_value,
            max_value: self.max_value,
            big_value_slots: self.big_value_slots,
        }
    }

    /// Asset names, read from `asset_dir` when one is configured and readable.
    #[must_use]
    pub fn asset_names(&self) -> Vec<String> {
        let Some(dir) = &self.asset_dir else {
            return self.names.clone();
        };

        match scan_asset_dir(dir) {
            Ok(names) if !names.is_empty() => names,
            Ok(_) => {
                warn!("No assets in {}, using configured names", dir.display());
                self.names.clone()
            }
            Err(e) => {
                warn!("Failed to read assets from {}: {e}", dir.display());
                self.names.clone()
            }
        }
    }
}

// File stems of every regular file in `dir`, sorted
fn scan_asset_dir(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
            names.push(stem.to_string());
        }
    }
    names.sort();
    names.dedup();
    Ok(names)
}
