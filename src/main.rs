#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleships::{init_logging, run_session, Console, GameConfig, SessionEnd, SessionOptions};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::time::Duration;

/// Sink every ship hidden in the ocean.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Show ship positions on the board")]
    reveal: bool,
    #[arg(long, help = "Do not clear the console between turns")]
    no_clear: bool,
    #[arg(long, default_value_t = 1000, help = "Pause after each guess, in milliseconds")]
    delay_ms: u64,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let options = SessionOptions {
        reveal: cli.reveal,
        clear: !cli.no_clear,
        delay: Duration::from_millis(cli.delay_ms),
    };
    let config = GameConfig::default();

    let stdin = std::io::stdin();
    let mut console = Console::new(stdin.lock(), std::io::stdout());
    let (wins, end) = run_session(&mut console, &mut rng, &config, &options)?;
    if end == SessionEnd::Declined {
        println!("Thanks for playing! Games won: {}", wins);
    }
    Ok(())
}
