//! Command-line tool for turning a 3x3x3 Rubik's Cube.

use clap::Parser;
use cubeturn_prefs::Preferences;

mod cli;

fn main() -> eyre::Result<()> {
    color_eyre::install().expect("error initializing panic handler");

    // Initialize logging.
    env_logger::builder().init();

    let args = cli::Args::parse();

    // A file named on the command line must load. The default file may be
    // missing or broken.
    let prefs = match &args.prefs {
        Some(path) => Preferences::try_load(Some(path.as_path()))?,
        None => Preferences::load(None),
    };

    cli::exec(args.subcommand, &prefs)
}

#[cfg(test)]
mod tests;
