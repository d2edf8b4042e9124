use bevy_ecs::prelude::*;
use log::{debug, info, trace};

use crate::Time;
use crate::components::{GameState, Input, Machine, Paytable, Phase, Reels, SlotRng};
use crate::layout;
use crate::reels::{self, Grid};
use crate::scoring::{self, SpinResult, WinningRun};

/// Runs exactly one state-machine step for this tick.
pub fn game_tick_system(world: &mut World) {
    world.resource_mut::<Time>().tick();

    let phase = world.resource::<GameState>().phase;
    match phase {
        Phase::Idle => input_system(world),
        Phase::Rolling => reel_system(world),
        Phase::Scoring => scoring_system(world),
        Phase::Highlighting { .. } => highlight_system(world),
    }

    // Input that arrived while the reels were busy is dropped, not queued
    *world.resource_mut::<Input>() = Input::default();
}

pub fn input_system(world: &mut World) {
    let input = std::mem::take(&mut *world.resource_mut::<Input>());

    if !world.resource::<GameState>().is_idle() {
        if input.spin || input.pointer.is_some() {
            trace!("Ignoring spin while the reels are busy");
        }
        return;
    }

    let machine = world.resource::<Machine>().clone();
    {
        let mut state = world.resource_mut::<GameState>();
        if input.bet_up {
            state.next_bet(&machine.bets);
        }
        if input.bet_down {
            state.prev_bet(&machine.bets);
        }
    }

    let pointer_spin = input.pointer.is_some_and(|point| machine.in_window(point));
    if input.spin || pointer_spin {
        start_spin(world);
    }
}

/// Charges the selected bet and stacks a fresh roll on every column.
/// Returns false, changing nothing, when not idle or the balance is short.
pub fn start_spin(world: &mut World) -> bool {
    let machine = world.resource::<Machine>().clone();

    {
        let mut state = world.resource_mut::<GameState>();
        if !state.is_idle() {
            return false;
        }
        let Some(bet) = state.bet_option(&machine.bets) else {
            return false;
        };
        if state.balance < bet.cost {
            debug!(
                "Spin refused: balance {} below cost {} for {} lines",
                state.balance, bet.cost, bet.lines
            );
            return false;
        }

        state.balance -= bet.cost;
        state.spins += 1;
        state.result = SpinResult::default();
        state.phase = Phase::Rolling;

        info!(
            "Spin {} on {} lines for {}, balance {}",
            state.spins, bet.lines, bet.cost, state.balance
        );
    }

    let rolls = world.resource_scope(|world, mut rng: Mut<SlotRng>| {
        let paytable = world.resource::<Paytable>();
        reels::roll(
            &paytable.catalog,
            machine.columns,
            machine.extra_depth,
            &mut rng.0,
        )
    });

    let mut reel_state = world.resource_mut::<Reels>();
    reels::clear_highlights(&mut reel_state.grid);
    reels::extend(&mut reel_state.grid, rolls);
    layout::position(
        &mut reel_state.grid,
        machine.canvas,
        machine.rows,
        machine.instance_size,
        machine.spacing,
    );

    true
}

/// Advances and trims the rolling columns; moves to scoring once settled.
pub fn reel_system(world: &mut World) {
    if world.resource::<GameState>().phase != Phase::Rolling {
        return;
    }

    let machine = world.resource::<Machine>().clone();
    let lower_bound = machine.lower_bound();

    let settled = {
        let mut reel_state = world.resource_mut::<Reels>();
        reels::advance(
            &mut reel_state.grid,
            machine.rows,
            machine.margins.top(),
            machine.base_speed,
            lower_bound,
        );
        reel_state.grid = reels::trim(&reel_state.grid, lower_bound);

        trace!(
            "Excess rows: {}",
            reels::excess_rows(&reel_state.grid, machine.rows)
        );

        reels::is_settled(&reel_state.grid, machine.rows)
    };

    if settled {
        let mut reel_state = world.resource_mut::<Reels>();
        layout::position(
            &mut reel_state.grid,
            machine.canvas,
            machine.rows,
            machine.instance_size,
            machine.spacing,
        );

        world.resource_mut::<GameState>().phase = Phase::Scoring;
        info!("Reels settled");
    }
}

/// Scores the settled grid and starts showing the first winning run.
pub fn scoring_system(world: &mut World) {
    if world.resource::<GameState>().phase != Phase::Scoring {
        return;
    }

    let machine = world.resource::<Machine>().clone();
    let lines = world
        .resource::<GameState>()
        .bet_option(&machine.bets)
        .map_or(0, |bet| bet.lines);

    let result = {
        let paytable = world.resource::<Paytable>();
        let reel_state = world.resource::<Reels>();
        scoring::score_lines(
            &reel_state.grid,
            machine.rows,
            paytable.lines.prefix(lines),
            machine.multiplier,
        )
    };

    info!(
        "Spin pays {} across {} winning runs",
        result.total,
        result.runs.len()
    );

    if let Some(first) = result.runs.first() {
        mark_run(&mut world.resource_mut::<Reels>().grid, first, true);
    }

    let mut state = world.resource_mut::<GameState>();
    state.result = result;
    state.phase = Phase::Highlighting { run: 0, ticks: 0 };
}

/// Holds each winning run highlighted for the configured ticks, then pays out.
pub fn highlight_system(world: &mut World) {
    let Phase::Highlighting { run, ticks } = world.resource::<GameState>().phase else {
        return;
    };

    let duration = world.resource::<Machine>().highlight_ticks;
    let (current, next) = {
        let runs = &world.resource::<GameState>().result.runs;
        (runs.get(run).cloned(), runs.get(run + 1).cloned())
    };

    let Some(current) = current else {
        finish_spin(world);
        return;
    };

    let ticks = ticks + 1;
    if ticks < duration {
        world.resource_mut::<GameState>().phase = Phase::Highlighting { run, ticks };
        return;
    }

    {
        let mut reel_state = world.resource_mut::<Reels>();
        mark_run(&mut reel_state.grid, &current, false);
        if let Some(next) = &next {
            mark_run(&mut reel_state.grid, next, true);
        }
    }

    if next.is_some() {
        world.resource_mut::<GameState>().phase = Phase::Highlighting {
            run: run + 1,
            ticks: 0,
        };
    } else {
        finish_spin(world);
    }
}

fn finish_spin(world: &mut World) {
    reels::clear_highlights(&mut world.resource_mut::<Reels>().grid);

    let mut state = world.resource_mut::<GameState>();
    let won = state.result.total;
    state.balance += won;
    state.last_win = won;
    state.total_won += won;
    state.phase = Phase::Idle;

    info!("Paid {won}, balance {}", state.balance);
}

fn mark_run(grid: &mut Grid, run: &WinningRun, highlighted: bool) {
    for &(column, row) in &run.cells {
        if let Some(instance) = grid.get_mut(column).and_then(|column| column.get_mut(row)) {
            instance.highlighted = highlighted;
        }
    }
}
