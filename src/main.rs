#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use gomoku::{init_logging, print_game, GameModel, MoveOutcome, Player, RandomPlayer, Winner};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use serde_json::json;

/// Random self-play simulator: both sides pick uniformly among the empty
/// cells until the engine reports a win or tie.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = 1, help = "Number of games to play")]
    games: u32,
    #[arg(long, help = "Print the final board of every game")]
    show_boards: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut player = RandomPlayer::new();
    let mut black_wins = 0u32;
    let mut white_wins = 0u32;
    let mut ties = 0u32;
    let mut total_steps = 0u64;

    for game_no in 1..=cli.games {
        let mut game = GameModel::new();
        loop {
            let at = player
                .select_move(&mut rng, &game)
                .ok_or_else(|| anyhow::anyhow!("no move available before termination"))?;
            let outcome = game.take_move(at).map_err(|e| anyhow::anyhow!(e))?;
            let stone = game.last_move().map_err(|e| anyhow::anyhow!(e))?;
            log::debug!("game {}: {} played {}", game_no, stone.color, stone.at);
            if let MoveOutcome::Terminated(winner) = outcome {
                log::info!(
                    "game {} finished after {} steps: {}",
                    game_no,
                    game.steps(),
                    winner
                );
                match winner {
                    Winner::Black => black_wins += 1,
                    Winner::White => white_wins += 1,
                    Winner::Tie => ties += 1,
                }
                break;
            }
        }
        total_steps += game.steps() as u64;
        if cli.show_boards {
            print_game(&game);
        }
    }

    let summary = json!({
        "games": cli.games,
        "black_wins": black_wins,
        "white_wins": white_wins,
        "ties": ties,
        "mean_steps": total_steps as f64 / f64::from(cli.games.max(1)),
    });
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
