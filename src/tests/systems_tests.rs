#[cfg(test)]
mod tests {
    use crate::app::App;
    use crate::components::*;
    use crate::layout;
    use crate::symbols::Position;
    use crate::systems::*;
    use crate::tests::test_utils::create_test_app;
    use bevy_ecs::prelude::*;

    // Replaces the grid with a settled 3x5 block of the top-paying symbol
    fn fill_uniform(world: &mut World) {
        let machine = world.resource::<Machine>().clone();
        let instance = world
            .resource::<Paytable>()
            .catalog
            .instantiate(0)
            .unwrap();

        let mut grid = vec![vec![instance; machine.rows]; machine.columns];
        layout::position(
            &mut grid,
            machine.canvas,
            machine.rows,
            machine.instance_size,
            machine.spacing,
        );
        world.resource_mut::<Reels>().grid = grid;
    }

    fn state(app: &App) -> &GameState {
        app.world.resource::<GameState>()
    }

    #[test]
    fn test_spin_input_deducts_the_bet() {
        let mut app = create_test_app();
        app.world.resource_mut::<Input>().spin = true;

        app.on_tick();

        let state = state(&app);
        assert_eq!(state.balance, 99);
        assert_eq!(state.spins, 1);
        assert_eq!(state.phase, Phase::Rolling);

        // Three settled rows plus twenty fresh ones per column
        let reel_state = app.world.resource::<Reels>();
        assert_eq!(reel_state.grid.len(), 5);
        assert!(reel_state.grid.iter().all(|column| column.len() == 23));
    }

    #[test]
    fn test_spin_is_ignored_while_rolling() {
        let mut app = create_test_app();
        assert!(start_spin(&mut app.world));
        assert!(!start_spin(&mut app.world));

        app.world.resource_mut::<Input>().spin = true;
        app.on_tick();

        let state = state(&app);
        assert_eq!(state.balance, 99);
        assert_eq!(state.spins, 1);
        // Busy-time input is dropped, not queued
        assert!(!app.world.resource::<Input>().spin);
    }

    #[test]
    fn test_spin_refused_when_balance_is_short() {
        let mut app = create_test_app();
        {
            let mut state = app.world.resource_mut::<GameState>();
            state.balance = 3;
            state.bet = 1; // 5 lines for 4
        }

        assert!(!start_spin(&mut app.world));

        let state = state(&app);
        assert_eq!(state.balance, 3);
        assert_eq!(state.spins, 0);
        assert!(state.is_idle());
    }

    #[test]
    fn test_pointer_inside_the_window_spins() {
        let mut app = create_test_app();
        app.world.resource_mut::<Input>().pointer = Some(Position { x: 300.0, y: 300.0 });

        app.on_tick();

        assert_eq!(app.phase(), Phase::Rolling);
    }

    #[test]
    fn test_pointer_outside_the_window_does_nothing() {
        let mut app = create_test_app();
        app.world.resource_mut::<Input>().pointer = Some(Position { x: 5.0, y: 5.0 });

        app.on_tick();

        assert_eq!(app.phase(), Phase::Idle);
        assert_eq!(state(&app).balance, 100);
    }

    #[test]
    fn test_bet_selection_wraps() {
        let mut app = create_test_app();

        app.world.resource_mut::<Input>().bet_up = true;
        app.on_tick();
        assert_eq!(state(&app).bet, 1);

        app.world.resource_mut::<Input>().bet_down = true;
        app.on_tick();
        app.world.resource_mut::<Input>().bet_down = true;
        app.on_tick();
        assert_eq!(state(&app).bet, 4);
    }

    #[test]
    fn test_bet_is_locked_while_rolling() {
        let mut app = create_test_app();
        start_spin(&mut app.world);

        app.world.resource_mut::<Input>().bet_up = true;
        app.on_tick();

        assert_eq!(state(&app).bet, 0);
    }

    #[test]
    fn test_uniform_grid_scores_every_purchased_line() {
        let mut app = create_test_app();
        fill_uniform(&mut app.world);
        {
            let mut state = app.world.resource_mut::<GameState>();
            state.bet = 1;
            state.phase = Phase::Scoring;
        }

        game_tick_system(&mut app.world);

        let state = state(&app);
        // Five lines of five sevens at 30 each
        assert_eq!(state.result.runs.len(), 5);
        assert_eq!(state.result.total, 750);
        assert_eq!(state.phase, Phase::Highlighting { run: 0, ticks: 0 });

        // The first run is the top straight line
        let grid = &app.world.resource::<Reels>().grid;
        assert!(grid.iter().all(|column| column[0].highlighted));
        assert!(grid.iter().all(|column| !column[1].highlighted));
    }

    #[test]
    fn test_highlight_moves_to_the_next_run() {
        let mut app = create_test_app();
        fill_uniform(&mut app.world);
        {
            let mut state = app.world.resource_mut::<GameState>();
            state.bet = 1;
            state.phase = Phase::Scoring;
        }
        game_tick_system(&mut app.world);

        let duration = app.world.resource::<Machine>().highlight_ticks;
        for _ in 0..duration - 1 {
            game_tick_system(&mut app.world);
        }
        assert_eq!(
            state(&app).phase,
            Phase::Highlighting {
                run: 0,
                ticks: duration - 1
            }
        );

        game_tick_system(&mut app.world);
        assert_eq!(state(&app).phase, Phase::Highlighting { run: 1, ticks: 0 });

        let grid = &app.world.resource::<Reels>().grid;
        assert!(grid.iter().all(|column| !column[0].highlighted));
        assert!(grid.iter().all(|column| column[1].highlighted));
    }

    #[test]
    fn test_last_run_pays_out() {
        let mut app = create_test_app();
        fill_uniform(&mut app.world);
        {
            let mut state = app.world.resource_mut::<GameState>();
            state.bet = 1;
            state.balance = 96;
            state.phase = Phase::Scoring;
        }
        game_tick_system(&mut app.world);

        let duration = app.world.resource::<Machine>().highlight_ticks;
        for _ in 0..5 * duration {
            game_tick_system(&mut app.world);
        }

        let state = state(&app);
        assert!(state.is_idle());
        assert_eq!(state.balance, 96 + 750);
        assert_eq!(state.last_win, 750);
        assert_eq!(state.total_won, 750);

        let grid = &app.world.resource::<Reels>().grid;
        assert!(grid.iter().flatten().all(|instance| !instance.highlighted));
    }

    #[test]
    fn test_no_runs_returns_to_idle() {
        let mut app = create_test_app();
        app.world.resource_mut::<GameState>().phase = Phase::Highlighting { run: 0, ticks: 0 };

        game_tick_system(&mut app.world);

        let state = state(&app);
        assert!(state.is_idle());
        assert_eq!(state.balance, 100);
        assert_eq!(state.last_win, 0);
    }

    #[test]
    fn test_full_spin_cycle() {
        let mut app = create_test_app();
        let rows = app.world.resource::<Machine>().rows;
        assert!(start_spin(&mut app.world));

        let mut ticks = 0;
        while app.phase() == Phase::Rolling {
            app.on_tick();
            let grid = &app.world.resource::<Reels>().grid;
            assert!(grid.iter().all(|column| column.len() >= rows));
            ticks += 1;
            assert!(ticks < 100_000, "reels never settled");
        }

        while app.phase() != Phase::Idle {
            app.on_tick();
            ticks += 1;
            assert!(ticks < 100_000, "spin never finished");
        }

        let state = state(&app);
        assert_eq!(state.balance, 100 - 1 + state.last_win);
        assert_eq!(state.total_won, state.last_win);

        let machine = app.world.resource::<Machine>();
        let grid = &app.world.resource::<Reels>().grid;
        assert!(grid.iter().all(|column| column.len() == rows));
        for column in grid {
            assert_eq!(column[0].position.y, machine.margins.top());
        }
    }
}
