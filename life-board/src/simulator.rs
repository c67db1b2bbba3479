use crate::board::{next_generation, Board, BoardSize};
use crate::config::LifeConfig;
use crate::coords::CellCoord;
use crate::timer::StepTimer;
use crate::Random;
use log::{debug, info};
use std::time::{Duration, Instant};

/// The four user control actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Run,
    Stop,
    Randomize,
    Clear,
}

/// Owns the board and the run loop state. All mutation goes through here.
#[derive(Debug)]
pub struct LifeSimulator {
    board: Board,
    cell_size: u32,
    timer: StepTimer,
    generation: u64,
    rand: Random,
}

impl LifeSimulator {
    pub fn new(config: &LifeConfig) -> Self {
        let rand = match config.seed() {
            Some(seed) => Random::from_seed(seed),
            None => Random::new(),
        };
        Self {
            board: Board::new_empty(config.board_size()),
            cell_size: config.cell_size(),
            timer: StepTimer::new(config.interval()),
            generation: 0,
            rand,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> BoardSize {
        self.board.size()
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn interval(&self) -> Duration {
        self.timer.interval()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.next_deadline()
    }

    pub fn live_cells(&self) -> Vec<CellCoord> {
        self.board.live_cells()
    }

    pub fn toggle(&mut self, coord: CellCoord) -> bool {
        self.board.toggle(coord)
    }

    /// Toggles the cell under a board-relative pixel position. Clicks outside
    /// the board are ignored and return `None`.
    pub fn toggle_at_pixel(&mut self, px: f64, py: f64) -> Option<CellCoord> {
        match CellCoord::from_pixel(px, py, self.cell_size) {
            Some(coord) if self.board.toggle(coord) => Some(coord),
            _ => {
                debug!("Ignoring click at ({px}, {py}) outside the board");
                None
            }
        }
    }

    pub fn randomize(&mut self) {
        self.board.randomize(&mut self.rand);
    }

    /// Empties the board and halts the run loop.
    pub fn clear(&mut self) {
        self.board = Board::new_empty(self.board.size());
        self.generation = 0;
        self.stop();
    }

    pub fn run(&mut self, now: Instant) -> bool {
        let started = self.timer.run(now);
        if started {
            info!("Running game");
        }
        started
    }

    pub fn stop(&mut self) -> bool {
        let stopped = self.timer.stop();
        if stopped {
            info!("Game stopped at generation {}", self.generation);
        }
        stopped
    }

    pub fn apply(&mut self, control: Control, now: Instant) {
        match control {
            Control::Run => {
                self.run(now);
            }
            Control::Stop => {
                self.stop();
            }
            Control::Randomize => self.randomize(),
            Control::Clear => self.clear(),
        }
    }

    /// Advances one generation if the run loop has a step due at `now`.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.timer.fire(now) {
            return false;
        }
        self.step();
        true
    }

    pub fn step(&mut self) {
        self.board = next_generation(&self.board);
        self.generation += 1;
        debug!(
            "Generation {}: {} live cells",
            self.generation,
            self.board.num_live_cells()
        );
    }
}
