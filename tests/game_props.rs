use battleships::{Game, GameConfig, GameError, GameStatus};
use proptest::prelude::*;
use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};

fn random_game(seed: u64) -> Game {
    let mut rng = SmallRng::seed_from_u64(seed);
    Game::new(&mut rng, &GameConfig::default()).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn guess_idempotent(seed in any::<u64>(), x in 0usize..10, y in 0usize..10) {
        let mut game = random_game(seed);
        let first = game.guess(x, y).unwrap();
        let after_first = game.grid().clone();
        let second = game.guess(x, y).unwrap();
        prop_assert!(second.is_repeat());
        prop_assert_eq!(first.is_hit(), second.is_hit());
        prop_assert_eq!(game.grid(), &after_first);
    }

    #[test]
    fn out_of_bounds_is_harmless(seed in any::<u64>(), x in 10usize..1000, y in 0usize..1000) {
        let mut game = random_game(seed);
        let before = game.grid().clone();
        prop_assert_eq!(game.guess(x, y).unwrap_err(), GameError::OutOfBounds { x, y });
        prop_assert_eq!(game.guess(y % 10, x).unwrap_err(), GameError::OutOfBounds { x: y % 10, y: x });
        prop_assert_eq!(game.grid(), &before);
    }

    #[test]
    fn won_iff_every_ship_cell_hit(seed in any::<u64>()) {
        let mut game = random_game(seed);
        let mut rng = SmallRng::seed_from_u64(seed ^ 0x5eed);
        let mut order: Vec<(usize, usize)> =
            (0..10).flat_map(|y| (0..10).map(move |x| (x, y))).collect();
        order.shuffle(&mut rng);
        for (x, y) in order {
            if game.is_won() {
                break;
            }
            game.guess(x, y).unwrap();
            let all_hit = game
                .grid()
                .cells()
                .all(|(_, c)| !c.occupied() || c.hit());
            prop_assert_eq!(all_hit, game.status() == GameStatus::Won);
        }
        prop_assert!(game.is_won());
    }
}
