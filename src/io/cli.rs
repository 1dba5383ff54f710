//! Command-line interface: greedy-solver simulations and picture scrambling

use std::fmt;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use crate::board::Board;
use crate::game::bot;
use crate::game::level::{Level, stars_for_time};
use crate::game::records::LevelRecords;
use crate::game::session::{GameSession, LoggedFeedback};
use crate::io::configuration::{
    DEFAULT_GAMES, DEFAULT_LEVEL, DEFAULT_SEED, OUTPUT_SUFFIX, SECONDS_PER_MOVE,
    STANDARD_GRID_SIZE,
};
use crate::io::error::{PuzzleError, Result, invalid_parameter};
use crate::io::image::{TileAtlas, export_board_as_png};
use crate::io::progress::ProgressManager;

const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

#[derive(Parser, Debug)]
#[command(name = "jigsolitaire")]
#[command(
    author,
    version,
    about = "Tile grouping and group displacement engine for jigsaw puzzles"
)]
/// Command-line arguments for the puzzle tool
pub struct Cli {
    /// Operation to run
    #[command(subcommand)]
    pub command: Command,

    /// Suppress progress output and informational logs
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available operations
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play seeded games with the greedy solver and report move statistics
    Simulate(SimulateArgs),
    /// Shuffle pictures into scrambled boards and export them as PNG
    Scramble(ScrambleArgs),
}

/// Arguments of the `simulate` operation
#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Level to play (every fifth level is a three-puzzle hard level)
    #[arg(short, long, default_value_t = DEFAULT_LEVEL)]
    pub level: u32,

    /// Number of games to play
    #[arg(short, long, default_value_t = DEFAULT_GAMES)]
    pub games: usize,

    /// Random seed for reproducible deals
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,
}

/// Arguments of the `scramble` operation
#[derive(Args, Debug)]
pub struct ScrambleArgs {
    /// Input picture (PNG or JPEG) or directory of pictures
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Grid dimension of the scrambled board
    #[arg(short = 'n', long, default_value_t = STANDARD_GRID_SIZE)]
    pub size: usize,

    /// Random seed for reproducible shuffles
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Process pictures even if scrambled output exists
    #[arg(long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Default log filter when `RUST_LOG` is unset
    pub const fn log_filter(&self) -> &'static str {
        if self.quiet { "warn" } else { "info" }
    }

    /// Run the selected operation
    ///
    /// # Errors
    ///
    /// Returns an error if the operation fails
    // Allow print for the user-facing result of each operation
    #[allow(clippy::print_stdout)]
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Command::Simulate(args) => {
                let progress = ProgressManager::with_visibility(
                    "games",
                    args.games,
                    self.should_show_progress(),
                );
                let summary = simulate(args, &progress)?;
                progress.finish();
                println!("{summary}");
                Ok(())
            }
            Command::Scramble(args) => {
                let mut processor = FileProcessor::new(args, self.should_show_progress());
                processor.process()
            }
        }
    }
}

/// Aggregate statistics of a simulation batch
#[derive(Debug, Clone)]
pub struct SimulationSummary {
    /// Level that was played
    pub level: Level,
    /// Number of games played
    pub games: usize,
    /// Moves summed over every game
    pub total_moves: u64,
    /// Fewest moves needed by a game
    pub min_moves: u32,
    /// Most moves needed by a game
    pub max_moves: u32,
    /// Stars summed over every game
    pub total_stars: u64,
    /// Best results across the batch
    pub records: LevelRecords,
}

impl SimulationSummary {
    /// Average moves per game
    pub fn mean_moves(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_moves as f64 / self.games as f64
        }
    }

    /// Average stars per game
    pub fn mean_stars(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_stars as f64 / self.games as f64
        }
    }
}

impl fmt::Display for SimulationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "level {} ({} puzzle(s) of {}x{}), {} games",
            self.level.number(),
            self.level.puzzle_count(),
            self.level.grid_size(),
            self.level.grid_size(),
            self.games
        )?;
        writeln!(
            f,
            "moves: mean {:.2}, min {}, max {}",
            self.mean_moves(),
            self.min_moves,
            self.max_moves
        )?;
        write!(f, "stars: mean {:.2}", self.mean_stars())?;
        if let Some(record) = self.records.get(self.level) {
            write!(f, ", best {} in {}s", record.stars, record.best_time)?;
        }
        Ok(())
    }
}

/// Play `args.games` seeded games with the greedy solver
///
/// Each move is charged [`SECONDS_PER_MOVE`] when rating a game.
///
/// # Errors
///
/// Returns an error if the level is invalid or a session rejects a move
pub fn simulate(args: &SimulateArgs, progress: &ProgressManager) -> Result<SimulationSummary> {
    let level = Level::new(args.level)?;
    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut summary = SimulationSummary {
        level,
        games: 0,
        total_moves: 0,
        min_moves: u32::MAX,
        max_moves: 0,
        total_stars: 0,
        records: LevelRecords::new(),
    };

    for game in 0..args.games {
        let mut session = GameSession::new(level, &mut rng, LoggedFeedback)?;
        let report = bot::solve(&mut session)?;
        let seconds = u64::from(report.moves) * SECONDS_PER_MOVE;
        summary.records.save(level, seconds);

        summary.games += 1;
        summary.total_moves += u64::from(report.moves);
        summary.min_moves = summary.min_moves.min(report.moves);
        summary.max_moves = summary.max_moves.max(report.moves);
        summary.total_stars += u64::from(stars_for_time(seconds));
        progress.advance(&format!("game {game}: {} moves", report.moves));
    }

    if summary.games == 0 {
        summary.min_moves = 0;
    }
    info!(
        level = level.number(),
        games = summary.games,
        mean_moves = summary.mean_moves(),
        "simulation finished"
    );
    Ok(summary)
}

/// Orchestrates scrambling of picture files with progress tracking
pub struct FileProcessor<'a> {
    args: &'a ScrambleArgs,
    show_progress: bool,
    rng: StdRng,
}

impl<'a> FileProcessor<'a> {
    /// Create a processor for the given scramble arguments
    pub fn new(args: &'a ScrambleArgs, show_progress: bool) -> Self {
        Self {
            args,
            show_progress,
            rng: StdRng::seed_from_u64(args.seed),
        }
    }

    /// Scramble every selected picture
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or picture processing fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;
        if files.is_empty() {
            return Ok(());
        }

        let progress =
            ProgressManager::with_visibility("pictures", files.len(), self.show_progress);
        for file in &files {
            let output = self.process_file(file)?;
            progress.advance(&output.display().to_string());
        }
        progress.finish();
        Ok(())
    }

    /// Pictures selected by the target argument, sorted by path
    ///
    /// # Errors
    ///
    /// Returns an error if the target is neither a picture nor a directory
    pub fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.args.target;
        if target.is_file() {
            if !is_picture(target) {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"file must be a PNG or JPEG picture",
                ));
            }
            Ok(if self.should_process_file(target) {
                vec![target.clone()]
            } else {
                vec![]
            })
        } else if target.is_dir() {
            let entries = std::fs::read_dir(target).map_err(|e| PuzzleError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source: e,
            })?;
            let mut files = Vec::new();
            for entry in entries {
                let path = entry
                    .map_err(|e| PuzzleError::FileSystem {
                        path: target.clone(),
                        operation: "read directory entry",
                        source: e,
                    })?
                    .path();
                if is_picture(&path) && !is_output(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be a picture file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if self.args.no_skip {
            return true;
        }
        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            info!(input = %input_path.display(), "skipping, scrambled output exists");
            false
        } else {
            true
        }
    }

    // Allow print for the text rendering of each scrambled board
    #[allow(clippy::print_stdout)]
    fn process_file(&mut self, input_path: &Path) -> Result<PathBuf> {
        let output_path = Self::get_output_path(input_path);
        let atlas = TileAtlas::from_path(input_path, self.args.size)?;
        let board = Board::solved(self.args.size, None)?.shuffled(&mut self.rng);
        export_board_as_png(&atlas, &board, &output_path)?;

        let groups = board.all_groups();
        let largest = groups.iter().map(Vec::len).max().unwrap_or(0);
        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            groups = groups.len(),
            largest,
            "scrambled picture"
        );
        println!(
            "{}:\n{board}groups: {} (largest {largest})",
            output_path.display(),
            groups.len()
        );
        Ok(output_path)
    }

    /// Output path for a picture: `<stem>_scrambled.png` beside the input
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{OUTPUT_SUFFIX}.png", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

fn is_picture(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

fn is_output(path: &Path) -> bool {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX))
}
