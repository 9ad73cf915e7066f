use std::fs;
use std::path::PathBuf;

use bpg::{generate, init_logging, save_armada, save_matrix, GenOptions};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Battleship puzzle batch generator", long_about = None)]
struct Cli {
    /// Number of puzzles to generate, in the range [1, 100].
    #[arg(default_value_t = 1)]
    n_puzzles: u16,

    /// Number of board rows, in the range [7, 16].
    #[arg(long, default_value_t = 10)]
    rows: u16,

    /// Number of board columns, in the range [7, 16].
    #[arg(long, default_value_t = 10)]
    cols: u16,

    /// Fix the RNG seed for reproducible batches (e.g., --seed 12345).
    #[arg(long)]
    seed: Option<u64>,

    /// Directory where the armada and matrix files are written.
    #[arg(long, default_value = "output")]
    output_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    println!("------Battleship Puzzle Game------");
    println!("-------------Welcome--------------");
    println!("------Here are your puzzles:------\n");

    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (batch will be reproducible)", s);
    }
    let mut rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let opts = GenOptions::new(cli.rows, cli.cols, cli.n_puzzles);
    let puzzles = generate(opts, &mut rng)?;

    fs::create_dir_all(&cli.output_dir)?;
    save_armada(&cli.output_dir.join("puzzles_armada.bp"), &puzzles)?;
    save_matrix(&cli.output_dir.join("puzzles_matrix.bp"), &puzzles)?;

    println!(">>> Job finished!\n");
    Ok(())
}
