//! Cube Piece Collector
//!
//! Tracks a collection of puzzle pieces and assembles them into a 3x3x4
//! cube: each piece lands in the first layer its fixed footprint fits, and
//! the cube is complete when four layers are fully occupied. Also generates
//! weighted-random demo sequences that always finish a cube.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rustc_hash::FxHashMap;

use cubestack::cubemap::{evaluate, format_cube};
use cubestack::generator;
use cubestack::packer::pack;
use cubestack::persistence;
use cubestack::pieces::PieceColor;

/// Collects puzzle pieces and assembles them into a cube.
#[derive(Parser)]
#[command(name = "cubestack")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory where the piece collection is stored.
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Add acquired pieces to the collection and show the cube.
    Add {
        /// Piece colors, oldest first (purple, green, pink, orange, blue).
        #[arg(required = true, value_parser = parse_color)]
        colors: Vec<PieceColor>,
    },
    /// Show the assembled cube for the current collection.
    Show,
    /// Generate a demo sequence that assembles a complete cube.
    Demo {
        /// RNG seed for a reproducible demo.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the number of collected pieces.
    Count,
}

fn parse_color(s: &str) -> Result<PieceColor, String> {
    s.parse()
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Add { colors }) => run_add(&cli.data_dir, colors),
        Some(Command::Show) | None => run_show(&cli.data_dir),
        Some(Command::Demo { seed }) => run_demo(seed),
        Some(Command::Count) => run_count(&cli.data_dir),
    }
}

/// Appends pieces to the stored collection and prints the updated cube.
fn run_add(data_dir: &std::path::Path, new_colors: Vec<PieceColor>) {
    let mut colors = persistence::load(data_dir).unwrap_or_default();
    colors.extend(new_colors);

    if let Err(e) = persistence::save(data_dir, &colors) {
        eprintln!("Failed to save collection: {}", e);
        return;
    }

    print_cube(&colors);
}

/// Loads the stored collection and prints the assembled cube.
fn run_show(data_dir: &std::path::Path) {
    match persistence::load(data_dir) {
        Some(colors) => print_cube(&colors),
        None => {
            eprintln!("No pieces.bin found. Run 'cubestack add <color>...' first.");
        }
    }
}

/// Generates and prints a demo sequence that finishes a cube.
fn run_demo(seed: Option<u64>) {
    let colors = match seed {
        Some(seed) => generator::generate_complete_sequence_with(&mut StdRng::seed_from_u64(seed)),
        None => generator::generate_complete_sequence(),
    };

    let names: Vec<&str> = colors.iter().map(|color| color.name()).collect();
    println!("Demo sequence ({} pieces): {}", colors.len(), names.join(", "));
    print_cube(&colors);
}

/// Prints the count of collected pieces.
fn run_count(data_dir: &std::path::Path) {
    match persistence::count(data_dir) {
        Some(count) => println!("{} pieces", count),
        None => eprintln!("No pieces.bin found. Run 'cubestack add <color>...' first."),
    }
}

/// Packs, evaluates and prints a collection: cube, tally, completion.
fn print_cube(colors: &[PieceColor]) {
    let evaluation = evaluate(&pack(colors));
    print!("{}", format_cube(&evaluation.grid));

    let mut tally: FxHashMap<PieceColor, usize> = FxHashMap::default();
    for &color in colors {
        *tally.entry(color).or_default() += 1;
    }
    let summary: Vec<String> = PieceColor::ALL
        .into_iter()
        .filter_map(|color| {
            tally
                .get(&color)
                .map(|count| format!("{} {}", count, color))
        })
        .collect();
    if !summary.is_empty() {
        println!("{}", summary.join(", "));
    }

    if evaluation.complete {
        println!("Cube complete!");
    } else {
        println!(
            "Cube incomplete ({}/{} layers started)",
            evaluation.grid.len(),
            cubestack::pieces::CUBE_LAYERS
        );
    }
}
