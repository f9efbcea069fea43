use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use log::info;

use mosaicle::{puzzle, render, solver};

/// Solve a Mosaic (Fill-a-Pix) puzzle and print the resulting grid.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Puzzle file: a JSON array of row strings, '.' or '0'-'9' per cell.
    puzzle: PathBuf,

    /// Directory to write SVG renderings of the input grid (input.svg) and
    /// the final board (final.svg).
    #[arg(long)]
    svg_dir: Option<PathBuf>,
}

fn init_logging() {
    env_logger::init();
}

fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();

    let board = match puzzle::load(&args.puzzle) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    if let Some(dir) = &args.svg_dir {
        if let Err(err) = render::write_svg(&board, &dir.join("input.svg")) {
            eprintln!("error: failed to write input.svg: {}", err);
            return ExitCode::FAILURE;
        }
    }

    let start = Instant::now();
    let report = solver::solve(board);
    info!("solve took {:?}", start.elapsed());

    println!("{}", report.board);
    println!(
        "solved: {} ({} propagation passes)",
        report.solved, report.passes
    );

    if let Some(dir) = &args.svg_dir {
        if let Err(err) = render::write_svg(&report.board, &dir.join("final.svg")) {
            eprintln!("error: failed to write final.svg: {}", err);
            return ExitCode::FAILURE;
        }
    }

    if report.solved {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
