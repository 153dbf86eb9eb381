#![warn(clippy::pedantic)]

use std::{fs, path::PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::{
    eyre::{OptionExt, WrapErr},
    owo_colors::OwoColorize,
};
use cube_core::{Color, ColorScheme, Cube, FaceId, Move};
use cube_solver::solver_for;
use env_logger::TimestampPrecision;
use itertools::Itertools;
use log::{LevelFilter, info, warn};

/// Scrambles and solves N×N cubes
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    log_level: u8,

    /// A TOML file giving the color of each face, e.g. `U = "White"`
    #[arg(long, global = true, value_name = "SCHEME")]
    scheme: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scramble a cube, solve it and show both states
    Solve {
        /// The number of stickers along each edge
        #[arg(long, default_value_t = 3)]
        size: usize,
        /// How many random moves to scramble with
        #[arg(short = 'n', long, default_value_t = 100)]
        shuffle_moves: usize,
        /// Seed for a reproducible scramble
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Report the average solution length over many scrambled 3x3 cubes
    Bench {
        /// How many cubes to solve
        #[arg(long, default_value_t = 1000)]
        runs: u64,
        /// How many random moves to scramble each cube with
        #[arg(short = 'n', long, default_value_t = 100)]
        shuffle_moves: usize,
        /// Seed of the first scramble; later runs count up from it
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.log_level {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let scheme = match &cli.scheme {
        Some(path) => {
            let text = fs::read_to_string(path)
                .wrap_err_with(|| format!("Failed to read the color scheme {path:?}"))?;
            toml::from_str::<ColorScheme>(&text)
                .wrap_err_with(|| format!("Failed to parse the color scheme {path:?}"))?
        }
        None => ColorScheme::default(),
    };
    info!("Using color scheme {scheme:?}");

    match cli.command {
        Commands::Solve {
            size,
            shuffle_moves,
            seed,
        } => solve(&scheme, size, shuffle_moves, seed),
        Commands::Bench {
            runs,
            shuffle_moves,
            seed,
        } => bench(&scheme, runs, shuffle_moves, seed),
    }
}

fn scramble(
    cube: &mut Cube,
    shuffle_moves: usize,
    seed: Option<u64>,
) -> color_eyre::Result<Vec<Move>> {
    let moves = match seed {
        Some(seed) => cube
            .generate_seeded_shuffle_moves(shuffle_moves, seed)
            .collect_vec(),
        None => cube.generate_shuffle_moves(shuffle_moves).collect_vec(),
    };
    cube.execute_moves(&moves)?;
    Ok(moves)
}

fn solve(
    scheme: &ColorScheme,
    size: usize,
    shuffle_moves: usize,
    seed: Option<u64>,
) -> color_eyre::Result<()> {
    let mut cube = Cube::with_scheme(size, scheme);
    let moves = scramble(&mut cube, shuffle_moves, seed)?;
    println!("Scramble: {}", moves.iter().join(" "));
    println!("{}", render_net(&cube));

    let mut solver = solver_for(&mut cube)?
        .ok_or_eyre(format!("There is no solver for {size}x{size} cubes"))?;
    let solution = solver.solve()?;
    drop(solver);

    println!(
        "Solution ({} moves): {}",
        solution.moves.len(),
        solution.moves.iter().join(" ")
    );
    println!("{}", render_net(&cube));
    match solution.unsolvable {
        None => println!("{}", "Solved".green()),
        Some(reason) => println!("{} {reason}", "Unsolvable:".red()),
    }

    Ok(())
}

fn bench(
    scheme: &ColorScheme,
    runs: u64,
    shuffle_moves: usize,
    seed: Option<u64>,
) -> color_eyre::Result<()> {
    let mut total = 0;
    let mut failures = 0;
    for run in 0..runs {
        let mut cube = Cube::with_scheme(3, scheme);
        let seed = seed.map(|seed| seed.wrapping_add(run));
        scramble(&mut cube, shuffle_moves, seed)?;
        let mut solver = solver_for(&mut cube)?.ok_or_eyre("There is no 3x3 solver")?;
        let solution = solver.solve()?;
        if let Some(reason) = solution.unsolvable {
            warn!("Run {run} was not solved: {reason}");
            failures += 1;
        }
        total += solution.moves.len();
    }

    #[allow(clippy::cast_precision_loss)]
    let average = total as f64 / runs.max(1) as f64;
    println!("Average solution length over {runs} cubes: {average:.2} moves");
    if failures > 0 {
        println!("{} {failures} cubes were not solved", "Warning:".yellow());
    }

    Ok(())
}

/// Lays the faces out as an unfolded cross with `U` on top and `D` below `F`.
fn render_net(cube: &Cube) -> String {
    let size = cube.size();
    let blank = "  ".repeat(size);
    let row_of = |face: FaceId, row: usize| {
        cube[face][row]
            .iter()
            .map(|&color| sticker(color))
            .collect::<String>()
    };

    let mut out = String::new();
    for row in 0..size {
        out += &format!("{blank} {}\n", row_of(FaceId::U, row));
    }
    for row in 0..size {
        out += &[FaceId::L, FaceId::F, FaceId::R, FaceId::B]
            .into_iter()
            .map(|face| row_of(face, row))
            .join(" ");
        out.push('\n');
    }
    for row in 0..size {
        out += &format!("{blank} {}\n", row_of(FaceId::D, row));
    }
    out
}

fn sticker(color: Color) -> String {
    let block = "██";
    match color {
        Color::White => block.white().to_string(),
        Color::Blue => block.blue().to_string(),
        Color::Orange => block.truecolor(255, 140, 0).to_string(),
        Color::Green => block.green().to_string(),
        Color::Red => block.red().to_string(),
        Color::Yellow => block.yellow().to_string(),
    }
}
