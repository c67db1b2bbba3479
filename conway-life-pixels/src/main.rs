#![deny(clippy::all)]
#![forbid(unsafe_code)]

use clap::Parser;
use life_board::{
    LifeConfig, LifeSimulator, DEFAULT_CELL_SIZE, DEFAULT_HEIGHT, DEFAULT_INTERVAL, DEFAULT_WIDTH,
};
use life_pixels_support::{animate, log_error, Error};
use log::info;
use std::process::ExitCode;
use std::time::Duration;

/// Conway's Game of Life. Click a cell to toggle it; Enter or R runs,
/// Space or S stops, N fills randomly, C clears, Escape or Q quits.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Cell edge length in pixels
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    cell_size: u32,

    /// Board width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u32,

    /// Board height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: u32,

    /// Milliseconds between generations while running
    #[arg(long, default_value_t = DEFAULT_INTERVAL.as_millis() as u64)]
    interval: u64,

    /// Seed for the random fill; seeded from the OS when absent
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    fn config(&self) -> Result<LifeConfig, Error> {
        let config = LifeConfig::new(
            self.cell_size,
            self.width,
            self.height,
            Duration::from_millis(self.interval),
        )?;
        Ok(config.with_seed(self.seed))
    }
}

fn main() -> ExitCode {
    env_logger::init();
    match run(&Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let config = args.config()?;
    let size = config.board_size();
    info!(
        "Board of {} rows x {} columns, {} ms per generation",
        size.rows,
        size.columns,
        config.interval().as_millis()
    );
    animate(LifeSimulator::new(&config))
}
