mod cell;
pub mod communication;
mod display;
mod error;
mod observer;
mod position;
mod simulator;

pub use cell::Cell;
pub use display::BoardDisplay;
pub use error::{BoardError, InvalidArgument};
pub use observer::{BoardEvent, Observer, Observers};
pub use position::CellPosition;
pub use simulator::Simulator;

#[cfg(test)]
pub(crate) use error::BoardErrorKind;

use communication::{SimulationSpeed, SimulatorPacket, UiPacket};
use std::sync::{Arc, Mutex, mpsc};
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
    time::Duration,
};

const UI_CLOSED_COMS: &str = "UI closed communication to simulation!";

/// A pointer to the [`Mutex`] used to share the display board.
/// The time either the ui or the [`Simulator`] will hold a lock on the [`Mutex`] is not guaranteed.
///
/// The [`Simulator`] only writes a new [`BoardDisplay`] once the ui has taken the previous one.
pub type SharedDisplay = Arc<Mutex<Option<BoardDisplay>>>;

/// The [`Receiver`] for [`UiPacket`]s from the ui.
///
/// [`Receiver`]: std::sync::mpsc::Receiver
pub type UiReceiver = mpsc::Receiver<UiPacket>;
/// The [`Sender`] for [`UiPacket`]s being sent from the ui.
/// Only the ui should ever have this [`Sender`].
///
/// [`Sender`]: std::sync::mpsc::Sender
pub type UiSender = mpsc::Sender<UiPacket>;
/// The [`Receiver`] for [`SimulatorPacket`]s from the [`Simulator`].
///
/// [`Receiver`]: std::sync::mpsc::Receiver
pub type SimulatorReceiver = mpsc::Receiver<SimulatorPacket>;
/// The [`Sender`] for [`SimulatorPacket`]s being sent from the [`Simulator`].
/// Only the [`Simulator`] should ever have this [`Sender`].
///
/// [`Sender`]: std::sync::mpsc::Sender
pub type SimulatorSender = mpsc::Sender<SimulatorPacket>;

/// Creates the channels for communication between the [`Simulator`] & the UI.
pub fn create_channels() -> ((UiSender, UiReceiver), (SimulatorSender, SimulatorReceiver)) {
    (mpsc::channel(), mpsc::channel())
}

/// Starts the simulation on a new thread without a callback.
///
/// For more information see [`start_simulator_with_callback`].
pub fn start_simulator(
    simulator: impl Simulator + 'static,
    display: SharedDisplay,
    ui_receiver: Receiver<UiPacket>,
    simulator_sender: Sender<SimulatorPacket>,
) -> Result<thread::JoinHandle<()>, std::io::Error> {
    start_simulator_with_callback(
        simulator,
        display,
        ui_receiver,
        simulator_sender,
        (),
        |_, _| {},
    )
}

/// Starts the given simulation on a new thread.
/// The thread owns the simulation; every change to the board is made by processing [`UiPacket`]s in the order they
/// were sent, so edits & steps are never applied part way through a generation.
///
/// The given callback is called on every loop of the simulation.
/// Due to this the callback **should not** be computationally intensive.
///
/// The callback will not have any effect on the state of the simulation.
/// The only value it can mutate is the given `Data` value, which allows the callback to persist its own state between simulation ticks.
///
/// # Panics
/// If the callback panics, this will be propagrated to the simulation thread and terminate the simulation.
/// If the ui drops its end of either channel the simulation thread will panic.
pub fn start_simulator_with_callback<Data, Callback>(
    mut simulator: impl Simulator + 'static,
    display: SharedDisplay,
    ui_receiver: Receiver<UiPacket>,
    simulator_sender: Sender<SimulatorPacket>,
    mut data: Data,
    mut callback: Callback,
) -> Result<thread::JoinHandle<()>, std::io::Error>
where
    Callback: FnMut(&mut Data, IsRunning) + Send + 'static,
    Data: Send + 'static,
{
    thread::Builder::new()
        .name("Simulator_Thread".into())
        .spawn(move || {
            log::debug!(
                "Simulator started with a {}x{} board",
                simulator.rows(),
                simulator.cols()
            );

            let mut state = DriverState::new();

            loop {
                if process_packets(&mut simulator, &ui_receiver, &simulator_sender, &mut state)
                    .is_terminate()
                {
                    return;
                }

                // Execute the user defined callback with the user data.
                callback(&mut data, IsRunning(state.is_running));

                if state.target_reached(&simulator) {
                    state.is_running = false;
                    state.run_until = None;
                    send_packet(
                        &simulator_sender,
                        SimulatorPacket::Paused {
                            generation: simulator.generation_count(),
                        },
                    );
                }

                // If the game is not running then wait for ≈ 100ms before performing any updates to save resources.
                if !state.is_running {
                    if state.display_needs_updating {
                        state.display_needs_updating = !update_display(&simulator, &display);
                    }

                    thread::sleep(Duration::from_millis(100));
                    continue;
                }

                state.tick_rate_limiter.tick();

                // Packets sent whilst waiting for the tick are applied before the generation is advanced, so a stop,
                // step or reset is never followed by a scheduled generation.
                if process_packets(&mut simulator, &ui_receiver, &simulator_sender, &mut state)
                    .is_terminate()
                {
                    return;
                }
                if !state.is_running || state.target_reached(&simulator) {
                    continue;
                }

                simulator.advance_generation();
                state.display_needs_updating = !update_display(&simulator, &display);
            }
        })
}

/// The state of the simulation thread between packets.
struct DriverState {
    is_running: bool,
    /// The generation to stop at, if any.
    run_until: Option<u64>,
    display_needs_updating: bool,
    /// Used to control the delay between generations.
    tick_rate_limiter: spin_sleep_util::Interval,
}

impl DriverState {
    fn new() -> Self {
        let mut tick_rate_limiter = spin_sleep_util::interval(SimulationSpeed::default().get());
        tick_rate_limiter.set_missed_tick_behavior(spin_sleep_util::MissedTickBehavior::Skip);

        Self {
            is_running: false,
            run_until: None,
            display_needs_updating: true,
            tick_rate_limiter,
        }
    }

    /// Whether the simulation has reached the generation it was started until.
    fn target_reached(&self, simulator: &impl Simulator) -> bool {
        self.run_until
            .is_some_and(|generation| simulator.generation_count() >= generation)
    }
}

/// Whether the simulation thread should keep going after processing packets.
enum Flow {
    Continue,
    Terminate,
}

impl Flow {
    fn is_terminate(&self) -> bool {
        matches!(self, Flow::Terminate)
    }
}

/// Sends a packet to the ui.
///
/// # Panics
/// If the ui has closed its receiver.
fn send_packet(simulator_sender: &SimulatorSender, packet: SimulatorPacket) {
    if simulator_sender.send(packet).is_err() {
        std::panic!("{}", UI_CLOSED_COMS)
    }
}

/// Applies every packet the ui has sent, in the order they were sent.
///
/// # Panics
/// If the ui has closed its sender.
fn process_packets(
    simulator: &mut impl Simulator,
    ui_receiver: &UiReceiver,
    simulator_sender: &SimulatorSender,
    state: &mut DriverState,
) -> Flow {
    let reject = |error: BoardError| {
        log::warn!("Rejected command: {error}");
        send_packet(simulator_sender, SimulatorPacket::Rejected { error });
    };

    loop {
        use std::sync::mpsc::TryRecvError;
        let ui_packet = match ui_receiver.try_recv() {
            Ok(ui_packet) => ui_packet,
            Err(TryRecvError::Empty) => {
                return Flow::Continue;
            }
            Err(TryRecvError::Disconnected) => {
                std::panic!("{}", UI_CLOSED_COMS);
            }
        };

        log::trace!("Processing {ui_packet:?}");

        match ui_packet {
            UiPacket::Set {
                position,
                cell_state,
            } => match simulator.set_cell(position, cell_state) {
                Ok(()) => state.display_needs_updating = true,
                Err(error) => reject(error),
            },
            UiPacket::Toggle { position } => match simulator.toggle_cell(position) {
                Ok(_) => state.display_needs_updating = true,
                Err(error) => reject(error),
            },
            UiPacket::Step => {
                state.is_running = false;
                state.run_until = None;
                simulator.advance_generation();
                state.display_needs_updating = true;
            }
            UiPacket::Start => {
                state.is_running = true;
                state.run_until = None;
            }
            UiPacket::StartUntil { generation } => {
                state.is_running = true;
                state.run_until = Some(generation);
            }
            UiPacket::Stop => state.is_running = false,
            UiPacket::Reset => {
                state.is_running = false;
                state.run_until = None;
                simulator.reset();
                state.display_needs_updating = true;
            }
            UiPacket::SimulationSpeed { speed } => {
                state.tick_rate_limiter.set_period(speed.get());
            }
            UiPacket::Terminate => {
                log::debug!(
                    "Simulator terminated at generation {}",
                    simulator.generation_count()
                );
                return Flow::Terminate;
            }
        }
    }
}

/// Writes a snapshot of the board into the shared display.
///
/// Returns false if the snapshot could not be written, because the ui holds the lock or has not taken the previous
/// snapshot yet.
fn update_display(simulator: &impl Simulator, display: &SharedDisplay) -> bool {
    // Attempts to acquire the lock on the display.
    // If a lock could not be acquired the method returns early.
    use std::sync::TryLockError;
    let mut display = match display.try_lock() {
        Ok(display) => display,
        Err(TryLockError::WouldBlock) => {
            return false;
        }
        Err(TryLockError::Poisoned(_)) => {
            core::panic!("Ui panicked!");
        }
    };

    // If the ui has not taken the display return early.
    if display.is_some() {
        return false;
    }

    *display = Some(simulator.snapshot());
    true
}

/// This boolean value represents whether the simulation is currently running or not.
///
/// If it is true, the simulation is running.
/// If it is false, the simulation is not running.
///
/// This value **cannot** be changed to control the state of the simulation.
#[derive(derive_more::Deref, Clone, Copy)]
pub struct IsRunning(bool);
