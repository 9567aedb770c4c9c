mod frontier;

use rand::{thread_rng, Rng, SeedableRng as _};

use crate::{dims::Dims, error::MazeError, grid::Grid};
pub use frontier::FrontierGrowth;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

pub trait MazeAlgorithm {
    /// Builds a maze of the given size, all randomness is drawn from `rng`.
    ///
    /// Fails with [`MazeError::InvalidDimension`] if either side isn't positive.
    fn generate<R: Rng + ?Sized>(&self, size: Dims, rng: &mut R) -> Result<Grid, MazeError>;
}

/// Generates a maze with [`FrontierGrowth`] from `seed`, or from a fresh random seed.
///
/// Returns the seed that was used, so the same maze can be generated again.
pub fn generate_seeded(size: Dims, seed: Option<u64>) -> Result<(Grid, u64), MazeError> {
    let seed = seed.unwrap_or_else(|| thread_rng().gen());
    let mut rng = Random::seed_from_u64(seed);

    let grid = FrontierGrowth.generate(size, &mut rng)?;
    Ok((grid, seed))
}
