use std::time::Duration;

use crate::{BoardError, Cell, CellPosition, InvalidArgument};

/// The data packets that the UI will send to the simulator.
///
/// Packets are processed in the order they are sent, so edits & steps never interleave with a generation that is
/// being computed.
#[derive(Debug, PartialEq)]
pub enum UiPacket {
    /// Sets a cell on the board.
    Set {
        /// The position of the cell to set.
        position: CellPosition,
        /// The state of the cell to set.
        cell_state: Cell,
    },
    /// Flips the state of a cell on the board.
    Toggle {
        /// The position of the cell to flip.
        position: CellPosition,
    },

    /// Stops the simulation if it is running & advances the board by one generation.
    Step,
    /// Starts the simulation.
    Start,
    /// Starts the simulation, with it automatically stopping at the given generation.
    StartUntil { generation: u64 },
    /// Stops the simulation.
    Stop,
    /// Stops the simulation & clears the board back to generation 0.
    Reset,

    /// Sets the current speed of the simulation.
    SimulationSpeed { speed: SimulationSpeed },

    /// Terminates the simulator thread.
    /// This is unrecoverable without relaunching the application.
    Terminate,
}

/// The data packets that the simulator will send to the ui.
#[derive(Debug, PartialEq)]
pub enum SimulatorPacket {
    /// A command could not be applied to the board.
    /// The board was left unchanged.
    Rejected { error: BoardError },

    /// The simulation reached the generation it was started until & has stopped.
    Paused { generation: u64 },
}

/// The delay between each generation of a running simulation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SimulationSpeed {
    pub(crate) delay: Duration,
}

impl Default for SimulationSpeed {
    fn default() -> Self {
        Self {
            delay: Self::INITIAL_DELAY,
        }
    }
}

impl SimulationSpeed {
    /// The shortest supported delay, which is roughly 60 generations per second.
    pub const MIN_DELAY: Duration = Duration::from_millis(17);
    /// The longest supported delay.
    pub const MAX_DELAY: Duration = Duration::from_millis(1_000);
    /// The delay a simulation starts with.
    pub const INITIAL_DELAY: Duration = Duration::from_millis(1_000);

    /// The position of the speed slider for the slowest speed.
    pub const MIN_SLIDER_POSITION: u32 = 1;
    /// The position of the speed slider for the fastest speed.
    pub const MAX_SLIDER_POSITION: u32 = 100;

    /// Creates a speed with the given delay between generations.
    ///
    /// The delay must be between [`Self::MIN_DELAY`] & [`Self::MAX_DELAY`] (inclusive).
    pub fn new(delay: Duration) -> Result<Self, BoardError> {
        if delay < Self::MIN_DELAY || delay > Self::MAX_DELAY {
            return Err(InvalidArgument::Delay {
                delay,
                min: Self::MIN_DELAY,
                max: Self::MAX_DELAY,
            }
            .into());
        }

        Ok(Self { delay })
    }

    /// Creates a speed from the position of a speed slider, by linearly interpolating the position onto the
    /// supported delay range.
    ///
    /// The higher the position, the shorter the delay.
    ///
    /// # Examples
    /// ```
    /// # use gol_lib::communication::SimulationSpeed;
    /// let fastest = SimulationSpeed::from_slider(SimulationSpeed::MAX_SLIDER_POSITION).unwrap();
    /// assert_eq!(fastest.get(), SimulationSpeed::MIN_DELAY);
    ///
    /// let slowest = SimulationSpeed::from_slider(SimulationSpeed::MIN_SLIDER_POSITION).unwrap();
    /// assert_eq!(slowest.get(), SimulationSpeed::MAX_DELAY);
    /// ```
    pub fn from_slider(position: u32) -> Result<Self, BoardError> {
        if !(Self::MIN_SLIDER_POSITION..=Self::MAX_SLIDER_POSITION).contains(&position) {
            return Err(InvalidArgument::SliderPosition {
                position,
                min: Self::MIN_SLIDER_POSITION,
                max: Self::MAX_SLIDER_POSITION,
            }
            .into());
        }

        let min = Self::MIN_DELAY.as_millis() as u64;
        let max = Self::MAX_DELAY.as_millis() as u64;
        let slider_range = (Self::MAX_SLIDER_POSITION - Self::MIN_SLIDER_POSITION) as u64;
        let from_fastest = (Self::MAX_SLIDER_POSITION - position) as u64;

        Self::new(Duration::from_millis(
            min + (max - min) * from_fastest / slider_range,
        ))
    }

    /// Gets the delay between each generation.
    pub fn get(&self) -> Duration {
        self.delay
    }
}
