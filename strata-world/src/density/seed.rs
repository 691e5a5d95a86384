use std::sync::Arc;

use strata_core::random::{xoroshiro128::Xoroshiro, RandomDeriver, RandomGenerator, RandomImpl};

use crate::noise::perlin::DoublePerlinNoiseSampler;

use super::{noise::InternalNoise, DensityFunction, Visitor};

/// Rewrites a density tree so every noise leaf carries a sampler derived from
/// the world seed. The original tree is left untouched.
pub struct SeedBinder {
    deriver: RandomDeriver,
}

impl SeedBinder {
    pub fn new(seed: u64) -> Self {
        let mut rand = Xoroshiro::from_seed(seed);
        Self {
            deriver: RandomDeriver::Xoroshiro(rand.next_splitter()),
        }
    }

    pub fn bind(&self, function: &DensityFunction) -> DensityFunction {
        function.apply(self)
    }
}

impl Visitor for SeedBinder {
    fn apply(&self, function: DensityFunction) -> DensityFunction {
        match function {
            DensityFunction::InterpolatedNoise(func) => {
                let mut rand = self.deriver.split_string("minecraft:terrain");
                DensityFunction::InterpolatedNoise(func.copy_with_random(&mut rand))
            }
            other => other,
        }
    }

    fn apply_internal_noise(&self, noise: &Arc<InternalNoise>) -> Arc<InternalNoise> {
        let parameters = noise.parameters;
        let mut rand = self.deriver.split_string(parameters.id());
        let sampler = DoublePerlinNoiseSampler::new(&mut rand, parameters, false);
        Arc::new(InternalNoise::new(parameters, Some(sampler)))
    }
}
