use crate::error::{Error, Result};
use rand::{rngs::StdRng, SeedableRng};

/// Chance of any one cell being a mine when none is given.
pub const DEFAULT_MINE_PROBABILITY: f64 = 0.5;

/// Parameters for a freshly generated game.
#[derive(Debug, Copy, Clone, PartialEq, typed_builder::TypedBuilder)]
pub struct GameConfig {
    #[builder(default = 9)]
    pub rows: usize,

    #[builder(default = 9)]
    pub columns: usize,

    #[builder(default = DEFAULT_MINE_PROBABILITY)]
    pub mine_probability: f64,

    /// Fixes the layout, mostly for tests and reproducible bug reports.
    #[builder(default, setter(strip_option))]
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn cell_count(&self) -> Result<usize> {
        self.rows
            .checked_mul(self.columns)
            .ok_or(Error::GridTooLarge {
                rows: self.rows,
                columns: self.columns,
            })
    }

    pub(crate) fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
