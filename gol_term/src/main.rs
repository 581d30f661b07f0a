use std::{error::Error, path::PathBuf, sync::mpsc::RecvTimeoutError, time::Duration};

use app_dirs2::{AppDataType, AppInfo, get_app_root};
use args::Args;
use clap::Parser;
use gol_lib::{
    BoardEvent, SharedDisplay, Simulator, SimulatorReceiver,
    communication::{SimulatorPacket, UiPacket},
};
use settings::{RenderSettings, Settings};

mod args;
mod render;
mod settings;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = Args::parse();

    let config_path = match &args.config_path {
        Some(config_path) => config_path.clone(),
        None => user_config_path()?,
    };

    let mut settings = Settings::load(config_path.join(settings::CONFIG_FILE))
        .inspect_err(|err| log::error!("{} - {}", error_text::LOAD_CONFIG, err))?;
    settings.apply_args(&args);

    let speed = settings.speed()?;
    let mut board = settings.create_board()?;
    board.subscribe(Box::new(|event: &BoardEvent| log::debug!("{event:?}")));

    let shared_display = SharedDisplay::default();
    let ((ui_sender, ui_receiver), (simulator_sender, simulator_receiver)) =
        gol_lib::create_channels();

    let simulator = gol_lib::start_simulator(
        board,
        shared_display.clone(),
        ui_receiver,
        simulator_sender,
    )
    .inspect_err(|_| log::error!("{}", error_text::CREATE_SIMULATION_THREAD))?;

    ui_sender.send(UiPacket::SimulationSpeed { speed })?;
    ui_sender.send(UiPacket::StartUntil {
        generation: settings.simulation.generations,
    })?;

    let result = display_until_paused(&shared_display, &simulator_receiver, &settings.render);

    // Command similator thread to terminate after the display has finished.
    if ui_sender.send(UiPacket::Terminate).is_err() {
        log::error!("{}", error_text::COMMAND_SIM_THREAD_TERM)
    };

    // The retuned error does not implement the Error trait so map it.
    simulator
        .join()
        .map_err(|_| error_text::SIM_THREAD_TERM)?;

    result
}

/// Prints every board published by the simulator, until the simulator has paused & the board it paused at has been
/// printed.
fn display_until_paused(
    shared_display: &SharedDisplay,
    simulator_receiver: &SimulatorReceiver,
    render_settings: &RenderSettings,
) -> Result<(), Box<dyn Error>> {
    let mut paused_at = None;
    let mut last_generation = None;

    loop {
        let board_display = shared_display
            .lock()
            .map_err(|_| error_text::SHARED_DISPLAY_POISIONED)?
            .take();

        if let Some(board_display) = board_display {
            print!("{}", render::render(&board_display, render_settings));
            last_generation = Some(board_display.get_generation());
        }

        if let (Some(paused_at), Some(last_generation)) = (paused_at, last_generation) {
            if last_generation >= paused_at {
                return Ok(());
            }
        }

        match simulator_receiver.recv_timeout(Duration::from_millis(10)) {
            Ok(SimulatorPacket::Paused { generation }) => {
                log::info!("Simulation paused at generation {generation}");
                paused_at = Some(generation);
            }
            Ok(SimulatorPacket::Rejected { error }) => {
                log::warn!("{} - {}", error_text::COMMAND_REJECTED, error);
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                return Err(error_text::RECEIVE_ERROR.into());
            }
        }
    }
}

/// The information used to get the default configuration location.
pub const APP_INFO: AppInfo = AppInfo {
    name: "game_of_life-term",
    author: "tye",
};

/// The path to where user configuration is stored.
///
/// On Linux:
/// `/home/<user>/.config/game_of_life-term`
fn user_config_path() -> Result<PathBuf, app_dirs2::AppDirsError> {
    get_app_root(AppDataType::UserConfig, &APP_INFO)
}

/// Creates a public constant string with the name as the name of the constant
/// and the text as the value of the string.
///
/// # Examples
/// ```
/// lang!{QUOTE, "Ya like jazz?"}
/// assert_eq!(QUOTE, "Ya like jazz?");
/// ```
#[macro_export]
macro_rules! lang {
    {$($name:tt, $text:literal);*} => {
        $(
        pub const $name: &str = $text;
        )*
    };
}

mod error_text {
    lang! {
        LOAD_CONFIG, "Unable to load configuration.";
        CREATE_SIMULATION_THREAD, "Unable to create thread for board simulation at OS level.";
        SIM_THREAD_TERM, "Simulator thread was unable to gracefully terminate";
        COMMAND_SIM_THREAD_TERM, "Unable to command similator thread to terminate.";
        COMMAND_REJECTED, "Simulator rejected command";
        RECEIVE_ERROR, "Unable to receive data from simulation.";
        SHARED_DISPLAY_POISIONED, "Unable to read board from simulation."
    }
}
