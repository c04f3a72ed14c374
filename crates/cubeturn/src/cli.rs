use std::io::Read;
use std::path::PathBuf;

use cubeturn_core::notation::tokenize;
use cubeturn_core::{Algorithm, Cube, Facelets, Scrambler, parse_algorithm, table};
use cubeturn_prefs::Preferences;
use eyre::{Context, Result};
use itertools::Itertools;
use serde::Serialize;

/// Cubeturn command-line interface
///
/// Algorithms are written in standard notation, such as `R U R' U'`. Moves
/// may be split across several arguments.
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    /// Preferences file to use instead of the one in the user's config
    /// directory.
    #[arg(long, global = true)]
    pub prefs: Option<PathBuf>,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Apply an algorithm to a solved cube and print the net.
    Apply {
        /// Moves to apply.
        algorithm: Vec<String>,

        /// Read the algorithm from a file instead, use '-' for stdin.
        #[arg(short, long, value_parser, conflicts_with = "algorithm")]
        file: Option<clio::Input>,

        /// Print the facelets of each face as JSON.
        #[arg(long)]
        json: bool,

        /// Color the net using ANSI escape codes.
        #[arg(long)]
        color: bool,
    },
    /// Print the inverse of an algorithm.
    Invert {
        /// Moves to invert.
        algorithm: Vec<String>,
    },
    /// Print how an algorithm is split into moves, as JSON.
    Tokens {
        /// Moves to split.
        algorithm: Vec<String>,
    },
    /// Print a random scramble.
    Scramble {
        /// Seed string. The same seed always gives the same scramble.
        #[arg(short, long)]
        seed: Option<String>,

        /// Number of moves. Defaults to the length set in preferences.
        #[arg(short, long)]
        length: Option<usize>,

        /// Also print the net of the scrambled cube.
        #[arg(long)]
        show: bool,
    },
    /// Print every supported move and how it turns the cube.
    Moves,
}

/// Result of `apply --json`.
#[derive(Serialize, Debug)]
struct ApplyOutput {
    algorithm: String,
    solved: bool,
    facelets: Facelets,
}

pub(crate) fn exec(subcommand: Subcommand, prefs: &Preferences) -> Result<()> {
    match subcommand {
        Subcommand::Apply {
            algorithm,
            file,
            json,
            color,
        } => {
            let algorithm = match file {
                Some(mut input) => {
                    let mut buffer = String::new();
                    input
                        .read_to_string(&mut buffer)
                        .context("error reading algorithm file")?;
                    buffer
                }
                None => join_args(&algorithm),
            };

            let mut cube = Cube::with_color_scheme(prefs.color_scheme)
                .context("invalid color scheme")?;
            cube.execute(&algorithm)
                .context("error applying algorithm")?;

            if json {
                write_json_output(&ApplyOutput {
                    algorithm: algorithm.trim().to_owned(),
                    solved: cube.is_solved(),
                    facelets: cube.facelets(prefs.net.missing),
                })
            } else {
                let mut style = prefs.net.clone();
                style.ansi_colors |= color;
                println!("{}", cube.render(&style));
                println!();
                println!("{}", if cube.is_solved() { "Solved" } else { "Not solved" });
                Ok(())
            }
        }

        Subcommand::Invert { algorithm } => {
            let algorithm = parse_args(&algorithm)?;
            println!("{}", algorithm.inv());
            Ok(())
        }

        Subcommand::Tokens { algorithm } => write_json_output(&tokenize(&join_args(&algorithm))),

        Subcommand::Scramble { seed, length, show } => {
            let seed = seed.unwrap_or_else(Scrambler::random_seed);
            let length = length.unwrap_or(prefs.scramble.length);
            log::info!("scrambling with seed {seed:?}");

            let scramble = Scrambler::from_seed(&seed).generate(length);
            println!("{scramble}");

            if show {
                let mut cube = Cube::with_color_scheme(prefs.color_scheme)
                    .context("invalid color scheme")?;
                cube.apply_moves(&scramble)?;
                println!();
                println!("{}", cube.render(&prefs.net));
            }
            Ok(())
        }

        Subcommand::Moves => {
            for (m, descriptor) in table::entries() {
                let layers = descriptor.layers.range();
                println!(
                    "{:<3} axis {} layers {}..{} turn {} x{}",
                    m.to_string(),
                    descriptor.slice_axis,
                    layers.start,
                    layers.end,
                    descriptor.rotation,
                    descriptor.quarter_turns,
                );
            }
            Ok(())
        }
    }
}

/// Joins algorithm arguments into one string.
fn join_args(args: &[String]) -> String {
    args.iter().join(" ")
}

/// Parses algorithm arguments, failing on the first unrecognized move.
fn parse_args(args: &[String]) -> Result<Algorithm> {
    parse_algorithm(&join_args(args)).context("error parsing algorithm")
}

fn write_json_output<T: Serialize>(value: &T) -> Result<()> {
    serde_json::to_writer_pretty(std::io::stdout(), value)
        .context("error serializing data and writing to stdout")?;
    println!();
    Ok(())
}

