#![deny(clippy::all)]
#![forbid(unsafe_code)]

//! Conway's Game of Life on a bounded, non-wrapping board.

mod board;
mod config;
mod coords;
mod simulator;
mod timer;

pub use board::{count_neighbors, next_generation, Board, BoardSize, Loc, Neighborhood};
pub use config::{
    ConfigError, LifeConfig, DEFAULT_CELL_SIZE, DEFAULT_HEIGHT, DEFAULT_INTERVAL, DEFAULT_WIDTH,
};
pub use coords::CellCoord;
pub use simulator::{Control, LifeSimulator};
pub use timer::StepTimer;

use rand::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Debug)]
pub struct Random {
    rng: SmallRng,
}

impl Random {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn next_bool(&mut self, p: f64) -> bool {
        self.rng.random_bool(p)
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}
