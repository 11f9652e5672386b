#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io::{self, Write};

#[cfg(feature = "std")]
use aviones::{
    coord_to_string, init_logging, outcome_message, parse_command, print_player_view, Command,
    ComputerMove, GameConfig, GameEngine, GameError, ShotOutcome, TurnState,
    DEFAULT_COMPUTER_DELAY_MS, DEFAULT_FLEET, DEFAULT_GRID_SIZE, MAX_PLACEMENT_ATTEMPTS,
};
#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use tokio::io::{AsyncBufReadExt, BufReader};
#[cfg(feature = "std")]
use tokio::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
        size: usize,
        #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_FLEET)]
        ships: Vec<usize>,
        #[arg(long, default_value_t = DEFAULT_COMPUTER_DELAY_MS, help = "Pause before each computer shot")]
        delay_ms: u64,
        #[arg(long, help = "Show the computer's ships (debugging)")]
        reveal: bool,
    },
}

#[cfg(feature = "std")]
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging(log::LevelFilter::Warn);
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            size,
            ships,
            delay_ms,
            reveal,
        } => {
            let config = GameConfig {
                size,
                fleet: ships,
                max_attempts: MAX_PLACEMENT_ATTEMPTS,
            };
            let rng = if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            play(config, rng, Duration::from_millis(delay_ms), reveal).await?;
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
async fn play(
    config: GameConfig,
    rng: SmallRng,
    delay: Duration,
    mut reveal: bool,
) -> anyhow::Result<()> {
    let mut engine = GameEngine::new(&config, rng).map_err(|e| anyhow::anyhow!(e))?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    println!("Welcome to Aviones! Sink the computer's fleet before it sinks yours.");

    loop {
        match engine.turn_state() {
            TurnState::PlayerTurn => {
                print_player_view(&engine, reveal);
                print!("Enter a coordinate (e.g. A5 or 5 1), 'reset', 'reveal' or 'q' to quit: ");
                io::stdout().flush()?;
                let Some(line) = lines.next_line().await? else {
                    println!("\nGoodbye.");
                    return Ok(());
                };
                match parse_command(&line, engine.size()) {
                    Ok(Command::Quit) => {
                        println!("Thanks for playing. Goodbye.");
                        return Ok(());
                    }
                    Ok(Command::Reset) => {
                        engine
                            .reset(&config.fleet)
                            .map_err(|e| anyhow::anyhow!(e))?;
                        println!("Game restarted. Your turn.");
                    }
                    Ok(Command::Reveal) => reveal = !reveal,
                    Ok(Command::Fire { row, col }) => {
                        let report = engine
                            .submit_player_shot(row, col)
                            .map_err(|e| anyhow::anyhow!(e))?;
                        let name = coord_to_string(row, col);
                        match report.outcome {
                            ShotOutcome::AlreadyShot => {
                                println!("You already fired at {}. Try another coordinate.", name)
                            }
                            ShotOutcome::Hit if report.turn_state.is_terminal() => {
                                println!("Hit at {}!", name)
                            }
                            ShotOutcome::Hit => println!("Hit at {}! Fire again.", name),
                            ShotOutcome::Miss => println!("Miss at {}. Computer's turn...", name),
                        }
                    }
                    Err(GameError::InvalidCoordinate { .. } | GameError::MalformedCoordinate) => {
                        println!("Invalid input. Use A5 or 'row col' (e.g. 5 1).");
                    }
                    Err(e) => return Err(anyhow::anyhow!(e)),
                }
            }
            TurnState::ComputerTurn => {
                tokio::time::sleep(delay).await;
                if let ComputerMove::Shot(report) =
                    engine.computer_step().map_err(|e| anyhow::anyhow!(e))?
                {
                    let result = match report.outcome {
                        ShotOutcome::Hit => "hit",
                        _ => "miss",
                    };
                    println!(
                        "Computer fires at {}: {}.",
                        coord_to_string(report.row, report.col),
                        result
                    );
                }
            }
            finished => {
                print_player_view(&engine, true);
                if let Some(msg) = outcome_message(finished) {
                    println!("\n{}", msg);
                }
                return Ok(());
            }
        }
    }
}
