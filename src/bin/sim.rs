//! Headless game: a random clicker plays the human side against `RandomAi`.
//! Prints one JSON object with the winner and shot statistics.

use broadside::driver::{run_session, InputSource, LogReporter, NullRenderer};
use broadside::{init_logging, LayoutConfig, Outcome, PixelPoint, Session};
use log::LevelFilter;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde_json::json;

const MAX_CLICKS: usize = 1_000_000;

/// Clicks uniformly anywhere on the canvas, border and gap included.
struct RandomClicker {
    rng: SmallRng,
    width: f64,
    height: f64,
    clicks: usize,
}

#[async_trait::async_trait]
impl InputSource for RandomClicker {
    async fn next_click(&mut self) -> anyhow::Result<Option<PixelPoint>> {
        if self.clicks >= MAX_CLICKS {
            anyhow::bail!("no result after {} clicks", MAX_CLICKS);
        }
        self.clicks += 1;
        Ok(Some(PixelPoint::new(
            self.rng.random_range(0.0..self.width),
            self.rng.random_range(0.0..self.height),
        )))
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging(LevelFilter::Off);
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <game-seed> <clicker-seed>", args[0]);
        std::process::exit(1);
    }
    let game_seed: u64 = args[1].parse()?;
    let clicker_seed: u64 = args[2].parse()?;

    let mut session = Session::new(LayoutConfig::default(), SmallRng::seed_from_u64(game_seed))?;
    let (width, height) = session.layout().canvas_size();
    let mut clicker = RandomClicker {
        rng: SmallRng::seed_from_u64(clicker_seed),
        width,
        height,
        clicks: 0,
    };

    let outcome = run_session(&mut session, &mut clicker, &mut NullRenderer, &mut LogReporter).await?;

    let winner = match outcome {
        Some(Outcome::Won) => Some("player"),
        Some(Outcome::Lost) => Some("opponent"),
        None => None,
    };
    let result = json!({
        "winner": winner,
        "clicks": clicker.clicks,
        "player": {"shots": session.opponent().shot_count(), "hits": session.opponent().hit_count()},
        "opponent": {"shots": session.human().shot_count(), "hits": session.human().hit_count()},
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
