use std::path::PathBuf;

use clap::Parser;

/// Runs Conways game of life in the terminal.
///
/// Values given here override the values in the configuration file.
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// The path to the directory which contains the user configuration data.
    #[arg(short, long, value_name = "DIR")]
    pub(crate) config_path: Option<PathBuf>,

    /// The amount of rows on the board.
    #[arg(long)]
    pub(crate) rows: Option<usize>,

    /// The amount of columns on the board.
    #[arg(long)]
    pub(crate) cols: Option<usize>,

    /// The fraction of cells that start alive, between 0 and 1.
    #[arg(short, long)]
    pub(crate) fraction: Option<f64>,

    /// The seed used to randomly populate the board.
    #[arg(short, long)]
    pub(crate) seed: Option<u64>,

    /// The delay between generations in milliseconds.
    #[arg(short, long, value_name = "MS")]
    pub(crate) delay: Option<u64>,

    /// The amount of generations to simulate before exiting.
    #[arg(short, long)]
    pub(crate) generations: Option<u64>,
}
