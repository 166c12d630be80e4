use crate::{config::Config, generic::random::MinimalPCG32};

use rand::SeedableRng;

use super::GenericContext;

/// A context which uses [MinimalPCG32] as a source of randomness.
pub type Context = GenericContext<MinimalPCG32>;

impl Context {
    /// Creates a context from some given configuration, with rng seeded from the configuration.
    pub fn from_config(config: Config) -> Self {
        let rng = MinimalPCG32::seed_from_u64(config.seed);
        Self::from_config_and_rng(config, rng)
    }
}
