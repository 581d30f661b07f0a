use std::{
    fs::File,
    io,
    path::{Path, PathBuf},
    time::Duration,
};

use gol_bounded::Board;
use gol_lib::{BoardError, communication::SimulationSpeed};

use crate::args::Args;

/// The name of the configuration file within the configuration directory.
pub(crate) const CONFIG_FILE: &str = "config_data.json";

/// The errors that can occur when reading the configuration file.
#[derive(thiserror::Error, Debug)]
pub(crate) enum SettingsError {
    /// Unable to read file.
    #[error("Unable to read configuration file '{path:?}': {io_error}")]
    Read { io_error: io::Error, path: PathBuf },
    /// The file contains invalid data.
    #[error("Configuration file '{path:?}' is not valid: {serde_error}")]
    InvalidData {
        serde_error: serde_json::Error,
        path: PathBuf,
    },
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Default, PartialEq)]
#[serde(default)]
pub(crate) struct Settings {
    pub(crate) board: BoardSettings,
    pub(crate) simulation: SimulationSettings,
    pub(crate) render: RenderSettings,
}

#[derive(serde::Deserialize, serde::Serialize, Debug, PartialEq)]
#[serde(default)]
pub(crate) struct BoardSettings {
    /// The amount of rows on the board.
    pub(crate) rows: usize,
    /// The amount of columns on the board.
    pub(crate) cols: usize,
    /// The fraction of cells that start alive.
    pub(crate) fraction: f64,
    /// The seed used to populate the board. A random seed is used if there is none.
    pub(crate) seed: Option<u64>,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            rows: 50,
            cols: 50,
            fraction: 0.2,
            seed: None,
        }
    }
}

#[derive(serde::Deserialize, serde::Serialize, Debug, PartialEq)]
#[serde(default)]
pub(crate) struct SimulationSettings {
    /// The delay between each generation.
    pub(crate) delay_ms: u64,
    /// The amount of generations to simulate before exiting.
    pub(crate) generations: u64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            delay_ms: SimulationSpeed::INITIAL_DELAY.as_millis() as u64,
            generations: 100,
        }
    }
}

#[derive(serde::Deserialize, serde::Serialize, Debug, PartialEq)]
#[serde(default)]
pub(crate) struct RenderSettings {
    /// The character alive cells are drawn with.
    pub(crate) alive: char,
    /// The character dead cells are drawn with.
    pub(crate) dead: char,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            alive: '#',
            dead: '.',
        }
    }
}

impl Settings {
    /// Reads the settings from the given configuration file.
    ///
    /// If the file does not exist the default settings are used.
    pub(crate) fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();

        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("No configuration file at {path:?}, using defaults");
                return Ok(Self::default());
            }
            Err(io_error) => {
                return Err(SettingsError::Read {
                    io_error,
                    path: path.to_path_buf(),
                });
            }
        };

        serde_json::from_reader(file).map_err(|serde_error| SettingsError::InvalidData {
            serde_error,
            path: path.to_path_buf(),
        })
    }

    /// Overwrites the settings with any values given on the command line.
    pub(crate) fn apply_args(&mut self, args: &Args) {
        if let Some(rows) = args.rows {
            self.board.rows = rows;
        }
        if let Some(cols) = args.cols {
            self.board.cols = cols;
        }
        if let Some(fraction) = args.fraction {
            self.board.fraction = fraction;
        }
        if let Some(seed) = args.seed {
            self.board.seed = Some(seed);
        }
        if let Some(delay) = args.delay {
            self.simulation.delay_ms = delay;
        }
        if let Some(generations) = args.generations {
            self.simulation.generations = generations;
        }
    }

    /// The speed the simulation runs at.
    pub(crate) fn speed(&self) -> Result<SimulationSpeed, BoardError> {
        SimulationSpeed::new(Duration::from_millis(self.simulation.delay_ms))
    }

    /// Creates the board to simulate.
    ///
    /// The board is blank if the fraction of alive cells is zero.
    pub(crate) fn create_board(&self) -> Result<Board, BoardError> {
        let BoardSettings {
            rows,
            cols,
            fraction,
            seed,
        } = self.board;

        match seed {
            _ if fraction == 0.0 => Board::new_blank(rows, cols),
            Some(seed) => Board::new_seeded(rows, cols, fraction, seed),
            None => Board::new_random(rows, cols, fraction, &mut rand::thread_rng()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use gol_lib::{InvalidArgument, Simulator};
    use tempfile::tempdir;

    use super::*;

    #[test]
    /// A missing configuration file gives the default settings.
    fn missing_file() {
        let temp_dir = tempdir().expect("Able to create temp dir");
        let settings = Settings::load(temp_dir.path().join(CONFIG_FILE));

        assert_eq!(settings.ok(), Some(Settings::default()));
    }

    #[test]
    /// Values missing from the configuration file use their defaults.
    fn partial_file() {
        let temp_dir = tempdir().expect("Able to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        File::create(&path)
            .and_then(|mut file| file.write_all(br#"{ "board": { "rows": 10 }, "render": { "alive": "@" } }"#))
            .expect("Able to write config file");

        let settings = Settings::load(&path).expect("Valid config file");
        assert_eq!(settings.board.rows, 10);
        assert_eq!(settings.board.cols, 50);
        assert_eq!(settings.render.alive, '@');
        assert_eq!(settings.render.dead, '.');
        assert_eq!(settings.simulation, SimulationSettings::default());
    }

    #[test]
    fn invalid_file() {
        let temp_dir = tempdir().expect("Able to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        File::create(&path)
            .and_then(|mut file| file.write_all(b"{ not json"))
            .expect("Able to write config file");

        let error = Settings::load(&path).expect_err("Invalid config file must error");
        assert!(matches!(error, SettingsError::InvalidData { .. }));
    }

    #[test]
    /// Command line values take priority over the configuration file.
    fn args_override() {
        let mut settings = Settings::default();
        let args = Args {
            rows: Some(7),
            seed: Some(99),
            delay: Some(17),
            ..Default::default()
        };

        settings.apply_args(&args);
        assert_eq!(settings.board.rows, 7);
        assert_eq!(settings.board.cols, 50);
        assert_eq!(settings.board.seed, Some(99));
        assert_eq!(settings.simulation.delay_ms, 17);
        assert_eq!(settings.simulation.generations, 100);
    }

    #[test]
    fn speed_out_of_range() {
        let mut settings = Settings::default();
        settings.simulation.delay_ms = 5;

        assert!(matches!(
            settings.speed(),
            Err(BoardError::InvalidArgument(InvalidArgument::Delay { .. }))
        ));
    }

    #[test]
    /// A fraction of zero creates a blank board.
    fn create_blank_board() {
        let mut settings = Settings::default();
        settings.board.fraction = 0.0;

        let board = settings.create_board().expect("Valid board settings");
        assert_eq!(board.population(), 0);
        assert_eq!(board.rows(), 50);
    }

    #[test]
    /// Seeded boards are the same every time they are created.
    fn create_seeded_board() {
        let mut settings = Settings::default();
        settings.board.seed = Some(5);

        let board_a = settings.create_board().expect("Valid board settings");
        let board_b = settings.create_board().expect("Valid board settings");
        assert_eq!(board_a.snapshot(), board_b.snapshot());
    }

    #[test]
    fn create_board_invalid_fraction() {
        let mut settings = Settings::default();
        settings.board.fraction = 2.0;

        assert!(matches!(
            settings.create_board(),
            Err(BoardError::InvalidArgument(InvalidArgument::Fraction(_)))
        ));
    }
}
