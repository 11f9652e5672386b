use aviones::{choose_shot, ComputerMove, GameConfig, GameEngine, Side, TurnState};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

// Plays one game where the human side fires uniformly at random and prints a
// JSON summary.
fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let mut engine = GameEngine::new(&GameConfig::default(), SmallRng::seed_from_u64(seed))
        .map_err(|e| anyhow::anyhow!(e))?;
    let mut player_rng = SmallRng::seed_from_u64(seed.wrapping_add(1));

    let mut turns = 0usize;
    while !engine.turn_state().is_terminal() {
        turns += 1;
        match engine.turn_state() {
            TurnState::PlayerTurn => {
                let (r, c) = choose_shot(engine.view_grid(Side::Player), &mut player_rng)
                    .ok_or_else(|| anyhow::anyhow!("player has no shots left"))?;
                engine
                    .submit_player_shot(r, c)
                    .map_err(|e| anyhow::anyhow!(e))?;
            }
            TurnState::ComputerTurn => {
                if let ComputerMove::NoCandidate =
                    engine.computer_step().map_err(|e| anyhow::anyhow!(e))?
                {
                    break;
                }
            }
            _ => break,
        }
    }

    let state = engine.turn_state();
    let winner = match state {
        TurnState::PlayerWon => Some("player"),
        TurnState::ComputerWon => Some("computer"),
        _ => None,
    };

    let result = json!({
        "seed": seed,
        "turn_state": state,
        "winner": winner,
        "shots": turns,
        "player_shots": engine.shots_fired(Side::Player),
        "computer_shots": engine.shots_fired(Side::Computer),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
