use std::path::PathBuf;

use anyhow::Context;
use broadside::driver::{run_session, InputSource, Renderer, StatusReporter};
use broadside::render::render_text;
use broadside::scene::build_scene;
use broadside::{init_logging, Coord, GameState, Grid, LayoutConfig, Outcome, PixelPoint, Session};
use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

#[derive(Parser)]
#[command(author, version, about = "Battleship against a random-shooting computer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Debug)]
struct LayoutArgs {
    #[arg(long, default_value_t = broadside::DEFAULT_SQUARE_SIZE,
          value_parser = clap::value_parser!(u32).range(1..=1000))]
    square_size: u32,
    #[arg(long, default_value_t = broadside::DEFAULT_LINE_WIDTH,
          value_parser = clap::value_parser!(u32).range(0..=100))]
    line_width: u32,
    #[arg(long, default_value_t = broadside::GRID_GAP,
          value_parser = clap::value_parser!(u32).range(0..=1000))]
    gap: u32,
}

impl From<LayoutArgs> for LayoutConfig {
    fn from(a: LayoutArgs) -> Self {
        LayoutConfig {
            square_size: a.square_size,
            line_width: a.line_width,
            gap: a.gap,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal. Enter a square (`C7`) or a canvas pixel (`400 120`).
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[command(flatten)]
        layout: LayoutArgs,
        /// Resume the game saved in this file.
        #[arg(long)]
        resume: Option<PathBuf>,
        /// Save the game here when quitting before it ends.
        #[arg(long)]
        save: Option<PathBuf>,
    },
    /// Print the draw list of a freshly dealt game as JSON.
    Scene {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[command(flatten)]
        layout: LayoutArgs,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_rng(&mut rand::rng()),
    }
}

/// Reads commands from stdin and turns them into clicks.
struct StdinInput {
    lines: Lines<BufReader<Stdin>>,
    target_grid: Grid,
}

enum Command {
    Click(PixelPoint),
    Quit,
    Invalid,
}

fn parse_command(line: &str, grid: &Grid) -> Command {
    let line = line.trim();
    if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("q") {
        return Command::Quit;
    }
    if let Ok(c) = line.parse::<Coord>() {
        return match grid.center_of(c) {
            Some(p) => Command::Click(p),
            None => Command::Invalid,
        };
    }
    let mut parts = line.split_whitespace().map(str::parse::<f64>);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(Ok(x)), Some(Ok(y)), None) => Command::Click(PixelPoint::new(x, y)),
        _ => Command::Invalid,
    }
}

#[async_trait::async_trait]
impl InputSource for StdinInput {
    async fn next_click(&mut self) -> anyhow::Result<Option<PixelPoint>> {
        loop {
            println!("Your move (e.g. C7, or `x y` pixels, `quit` to stop):");
            let Some(line) = self.lines.next_line().await? else {
                return Ok(None);
            };
            match parse_command(&line, &self.target_grid) {
                Command::Click(p) => return Ok(Some(p)),
                Command::Quit => return Ok(None),
                Command::Invalid => println!("Unrecognised input: {:?}", line.trim()),
            }
        }
    }
}

struct TerminalRenderer;

impl Renderer for TerminalRenderer {
    fn render(&mut self, session: &Session) {
        println!("\n{}", render_text(session));
    }
}

struct ConsoleReporter;

impl StatusReporter for ConsoleReporter {
    fn report(&mut self, outcome: Outcome, message: &str) {
        match outcome {
            Outcome::Won => println!("*** VICTORY *** {}", message),
            Outcome::Lost => println!("*** DEFEAT *** {}", message),
        }
    }
}

async fn play(
    seed: Option<u64>,
    layout: LayoutConfig,
    resume: Option<PathBuf>,
    save: Option<PathBuf>,
) -> anyhow::Result<()> {
    let rng = make_rng(seed);
    let mut session = match resume {
        Some(path) => {
            let bytes = std::fs::read(&path)
                .with_context(|| format!("reading saved game {}", path.display()))?;
            let state = GameState::from_bytes(&bytes)?;
            println!("Resumed game from {}", path.display());
            Session::restore(state, layout, rng)
        }
        None => Session::new(layout, rng)?,
    };

    let mut input = StdinInput {
        lines: BufReader::new(tokio::io::stdin()).lines(),
        target_grid: session.layout().opponent_grid,
    };
    let outcome = run_session(&mut session, &mut input, &mut TerminalRenderer, &mut ConsoleReporter).await?;

    if outcome.is_none() {
        if let Some(path) = save {
            let bytes = session.snapshot().to_bytes()?;
            std::fs::write(&path, bytes)
                .with_context(|| format!("saving game to {}", path.display()))?;
            println!("Game saved to {}", path.display());
        }
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging(LevelFilter::Warn);
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            layout,
            resume,
            save,
        } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            play(seed, layout.into(), resume, save).await?;
        }
        Commands::Scene { seed, layout } => {
            let session = Session::new(layout.into(), make_rng(seed))?;
            println!("{}", serde_json::to_string(&build_scene(&session))?);
        }
    }
    Ok(())
}
