#[cfg(test)]
mod tests {
    use crate::app::App;
    use crate::components::{GameState, Phase, Reels};
    use crate::config::Config;

    fn run_until_idle(app: &mut App) -> u32 {
        let mut ticks = 0;
        loop {
            app.on_tick();
            ticks += 1;
            if app.phase() == Phase::Idle {
                return ticks;
            }
            assert!(ticks < 100_000, "spin never finished");
        }
    }

    #[test]
    fn test_game_cycle() {
        let mut config = Config::default();
        config.slot.seed = Some(1234);
        let mut app = App::new(config).unwrap();

        // Play a handful of spins on the widest bet
        app.world.resource_mut::<GameState>().bet = 4;
        let mut expected = 100;
        for _ in 0..5 {
            let balance = app.world.resource::<GameState>().balance;
            if balance < 12 {
                break;
            }

            app.world.resource_mut::<crate::components::Input>().spin = true;
            run_until_idle(&mut app);

            let state = app.world.resource::<GameState>();
            expected = expected - 12 + state.last_win;
            assert_eq!(state.balance, expected);
        }

        let state = app.world.resource::<GameState>();
        assert!(state.spins >= 1);
        assert!(state.total_won >= state.last_win);

        let grid = &app.world.resource::<Reels>().grid;
        assert!(grid.iter().all(|column| column.len() == 3));
    }

    #[test]
    fn test_larger_machine() {
        let mut config = Config::default();
        config.slot.rows = 4;
        config.slot.columns = 4;
        config.slot.seed = Some(8);
        config.slot.highlight_ticks = 1;
        let mut app = App::new(config).unwrap();

        app.world.resource_mut::<crate::components::Input>().spin = true;
        run_until_idle(&mut app);

        let grid = &app.world.resource::<Reels>().grid;
        assert_eq!(grid.len(), 4);
        assert!(grid.iter().all(|column| column.len() == 4));
        assert_eq!(app.world.resource::<GameState>().spins, 1);
    }

    #[test]
    fn test_broke_player_cannot_spin() {
        let mut app = App::new(Config::default()).unwrap();
        app.world.resource_mut::<GameState>().balance = 0;

        app.world.resource_mut::<crate::components::Input>().spin = true;
        app.on_tick();

        assert_eq!(app.phase(), Phase::Idle);
        assert_eq!(app.world.resource::<GameState>().spins, 0);
    }
}
