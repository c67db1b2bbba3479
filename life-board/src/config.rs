use crate::board::BoardSize;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_CELL_SIZE: u32 = 20;
pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(500);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("cell size must be at least one pixel")]
    ZeroCellSize,
    #[error("step interval must be longer than zero")]
    ZeroInterval,
    #[error("a {width}x{height} pixel board cannot hold a single {cell_size} pixel cell")]
    BoardTooSmall {
        width: u32,
        height: u32,
        cell_size: u32,
    },
}

/// Validated board geometry and timing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LifeConfig {
    cell_size: u32,
    width: u32,
    height: u32,
    interval: Duration,
    seed: Option<u64>,
}

impl LifeConfig {
    pub fn new(
        cell_size: u32,
        width: u32,
        height: u32,
        interval: Duration,
    ) -> Result<Self, ConfigError> {
        if cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        if width < cell_size || height < cell_size {
            return Err(ConfigError::BoardTooSmall {
                width,
                height,
                cell_size,
            });
        }
        Ok(Self {
            cell_size,
            width,
            height,
            interval,
            seed: None,
        })
    }

    /// Seeds the random fill. `None` seeds from the operating system.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Whole cells only; a partial cell at the right or bottom edge is dropped.
    pub fn board_size(&self) -> BoardSize {
        BoardSize::new(self.height / self.cell_size, self.width / self.cell_size)
    }
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            interval: DEFAULT_INTERVAL,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_board_is_thirty_by_forty() {
        let config = LifeConfig::default();
        assert_eq!(config.board_size(), BoardSize::new(30, 40));
        assert_eq!(config.interval(), Duration::from_millis(500));
    }

    #[test]
    fn partial_cells_are_dropped() {
        let config = LifeConfig::new(20, 810, 619, DEFAULT_INTERVAL).unwrap();
        assert_eq!(config.board_size(), BoardSize::new(30, 40));
    }

    #[test]
    fn invalid_geometry_is_rejected() {
        assert_eq!(
            LifeConfig::new(0, 800, 600, DEFAULT_INTERVAL),
            Err(ConfigError::ZeroCellSize)
        );
        assert_eq!(
            LifeConfig::new(20, 800, 600, Duration::ZERO),
            Err(ConfigError::ZeroInterval)
        );
        assert_eq!(
            LifeConfig::new(20, 800, 19, DEFAULT_INTERVAL),
            Err(ConfigError::BoardTooSmall {
                width: 800,
                height: 19,
                cell_size: 20
            })
        );
    }

    #[test]
    fn seed_is_carried() {
        let config = LifeConfig::default().with_seed(Some(42));
        assert_eq!(config.seed(), Some(42));
    }
}
