#![warn(clippy::all, clippy::pedantic)]

use bevy_ecs::prelude::*;
use log::{debug, info};
use std::time::Duration;

use crate::Time;
use crate::components::{GameState, Input, Machine, Paytable, Phase, Reels, SlotRng};
use crate::config::Config;
use crate::error::SlotError;
use crate::game::TICKS_PER_SECOND;
use crate::layout;
use crate::paylines::LineSet;
use crate::reels;
use crate::symbols::{Catalog, Position, Size};
use crate::systems;

pub type AppResult<T> = anyhow::Result<T>;

/// One symbol as the render sink sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSymbol {
    pub name: String,
    pub wildcard: bool,
    pub position: Position,
    pub size: Size,
    pub highlighted: bool,
}

pub struct App {
    pub world: World,
    pub should_quit: bool,
    config: Config,
}

impl App {
    /// Builds the catalog, line set and an initial settled grid from `config`.
    pub fn new(config: Config) -> Result<Self, SlotError> {
        config.validate()?;

        let mut app = Self {
            world: World::new(),
            should_quit: false,
            config,
        };
        app.reset()?;

        Ok(app)
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Reset the machine to a fresh idle grid and the starting balance
    pub fn reset(&mut self) -> Result<(), SlotError> {
        let slot = &self.config.slot;
        let machine = Machine::from_config(slot);

        let catalog = Catalog::from_asset_names(
            self.config.symbols.asset_names(),
            &self.config.symbols.payout_rule(),
            slot.instance_size,
        )?;
        let lines = LineSet::generate(slot.rows, slot.columns)?;

        info!(
            "Machine {}x{} with {} symbols and {} paylines",
            slot.columns,
            slot.rows,
            catalog.len(),
            lines.len()
        );

        let mut rng = SlotRng::new(slot.seed);
        let mut grid = reels::roll(&catalog, slot.columns, slot.rows, &mut rng.0);
        layout::position(
            &mut grid,
            slot.canvas,
            slot.rows,
            slot.instance_size,
            slot.spacing,
        );

        self.world.insert_resource(Time::new());
        self.world.insert_resource(Input::default());
        self.world.insert_resource(GameState::new(slot.starting_balance));
        self.world.insert_resource(Reels { grid });
        self.world.insert_resource(Paytable { catalog, lines });
        self.world.insert_resource(machine);
        self.world.insert_resource(rng);

        Ok(())
    }

    pub fn on_tick(&mut self) {
        let delta = {
            let mut time = self.world.resource_mut::<Time>();
            time.update();
            time.delta_seconds()
        };

        // More than two frames late
        let budget = (Duration::from_secs(2) / TICKS_PER_SECOND).as_secs_f32();
        if delta > budget {
            debug!("Slow tick: {:.1} ms since the last one", delta * 1000.0);
        }

        systems::game_tick_system(&mut self.world);
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.world.resource::<GameState>().phase
    }

    /// Every symbol in every column, for drawing this frame.
    #[must_use]
    pub fn render_symbols(&self) -> Vec<RenderSymbol> {
        let paytable = self.world.resource::<Paytable>();
        let reel_state = self.world.resource::<Reels>();

        reel_state
            .grid
            .iter()
            .flatten()
            .map(|instance| RenderSymbol {
                name: paytable
                    .catalog
                    .get(instance.symbol)
                    .map(|def| def.name.clone())
                    .unwrap_or_default(),
                wildcard: instance.kind.is_wildcard(),
                position: instance.position,
                size: instance.size,
                highlighted: instance.highlighted,
            })
            .collect()
    }
}
