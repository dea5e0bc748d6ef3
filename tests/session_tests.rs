use battleships::{run_session, Console, GameConfig, SessionEnd, SessionOptions, ShipType};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::io::Cursor;
use std::time::Duration;

fn quiet() -> SessionOptions {
    SessionOptions {
        reveal: false,
        clear: false,
        delay: Duration::ZERO,
    }
}

fn dinghy_config() -> GameConfig {
    // every cell holds a ship, so any two distinct guesses win
    GameConfig {
        width: 2,
        height: 1,
        fleet: vec![ShipType::new("Dinghy", 2)],
        ..GameConfig::default()
    }
}

#[test]
fn test_win_replay_then_decline() {
    let input = Cursor::new("A0\nA0\nB0\ny\nb0\nC0\na0\nn\n");
    let mut console = Console::new(input, Vec::new());
    let mut rng = SmallRng::seed_from_u64(1);
    let (wins, end) = run_session(&mut console, &mut rng, &dinghy_config(), &quiet()).unwrap();
    assert_eq!(wins, 2);
    assert_eq!(end, SessionEnd::Declined);

    let out = String::from_utf8(console.into_output()).unwrap();
    assert_eq!(out.matches("You hit all the ships, well done!").count(), 2);
    assert!(out.contains("A0: You already guessed this one!"));
    assert!(out.contains("2 shots, 2 hits, 1 repeated guesses."));
    assert!(out.contains("Invalid cell"));
}

#[test]
fn test_input_closed_mid_game() {
    let input = Cursor::new("A0\n");
    let mut console = Console::new(input, Vec::new());
    let mut rng = SmallRng::seed_from_u64(1);
    let (wins, end) = run_session(&mut console, &mut rng, &dinghy_config(), &quiet()).unwrap();
    assert_eq!(wins, 0);
    assert_eq!(end, SessionEnd::InputClosed);
}

#[test]
fn test_clear_and_reveal_options() {
    let input = Cursor::new("");
    let mut console = Console::new(input, Vec::new());
    let mut rng = SmallRng::seed_from_u64(1);
    let options = SessionOptions {
        reveal: true,
        clear: true,
        delay: Duration::ZERO,
    };
    run_session(&mut console, &mut rng, &dinghy_config(), &options).unwrap();
    let out = String::from_utf8(console.into_output()).unwrap();
    assert!(out.starts_with("\x1B[2J"));
    assert!(out.contains(" 0 #  # "));
}

#[test]
fn test_impossible_setup_is_an_error() {
    let config = GameConfig {
        width: 2,
        height: 2,
        fleet: vec![ShipType::new("Carrier", 5)],
        ..GameConfig::default()
    };
    let mut console = Console::new(Cursor::new(""), Vec::new());
    let mut rng = SmallRng::seed_from_u64(1);
    assert!(run_session(&mut console, &mut rng, &config, &quiet()).is_err());
}

#[test]
fn test_out_of_bounds_guess_reprompts() {
    use battleships::{commit_run, play_guess, Game, GameStatus, Grid, GuessResult, Orientation, ShipRun};

    let mut grid = Grid::new(2, 1);
    commit_run(&mut grid, &ShipRun::new(0, 0, Orientation::Horizontal, 1)).unwrap();
    let mut game = Game::from_grid(grid);
    let mut out = Vec::new();

    assert_eq!(play_guess(&mut out, &mut game, 5, 0).unwrap(), None);
    assert_eq!(play_guess(&mut out, &mut game, 1, 0).unwrap(), Some(GuessResult::Miss));
    assert_eq!(game.status(), GameStatus::Playing);
    assert_eq!(play_guess(&mut out, &mut game, 0, 0).unwrap(), Some(GuessResult::Hit));
    assert!(game.is_won());
    assert!(play_guess(&mut out, &mut game, 0, 0).is_err());

    let out = String::from_utf8(out).unwrap();
    assert!(out.starts_with("Invalid cell\n"));
    assert!(out.contains("B0: Nothing here!"));
}
