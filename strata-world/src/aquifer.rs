use crate::block::BlockState;
use crate::density::NoisePos;

#[derive(Clone)]
pub struct FluidLevel {
    max_y: i32,
    state: BlockState,
}

impl FluidLevel {
    pub fn new(max_y: i32, state: BlockState) -> Self {
        Self { max_y, state }
    }

    pub fn max_y_exclusive(&self) -> i32 {
        self.max_y
    }

    /// Fluid strictly below `max_y`, air at and above it.
    pub fn get_block_state(&self, y: i32) -> BlockState {
        if y < self.max_y {
            self.state
        } else {
            BlockState::AIR
        }
    }
}

pub trait FluidLevelSamplerImpl {
    fn get_fluid_level(&self, x: i32, y: i32, z: i32) -> FluidLevel;
}

pub struct StaticFluidLevelSampler {
    y: i32,
    state: BlockState,
}

impl StaticFluidLevelSampler {
    pub fn new(y: i32, state: BlockState) -> Self {
        Self { y, state }
    }
}

impl FluidLevelSamplerImpl for StaticFluidLevelSampler {
    fn get_fluid_level(&self, _x: i32, _y: i32, _z: i32) -> FluidLevel {
        FluidLevel::new(self.y, self.state)
    }
}

/// Two-tier column sampler: a bottom fluid (normally lava) below a cutoff and
/// the sea-level fluid everywhere above it.
pub struct StandardChunkFluidLevelSampler {
    top_fluid: FluidLevel,
    bottom_fluid: FluidLevel,
    bottom_y: i32,
}

impl StandardChunkFluidLevelSampler {
    pub fn new(top_fluid: FluidLevel, bottom_fluid: FluidLevel) -> Self {
        let bottom_y = top_fluid
            .max_y_exclusive()
            .min(bottom_fluid.max_y_exclusive());
        Self {
            top_fluid,
            bottom_fluid,
            bottom_y,
        }
    }
}

impl FluidLevelSamplerImpl for StandardChunkFluidLevelSampler {
    fn get_fluid_level(&self, _x: i32, y: i32, _z: i32) -> FluidLevel {
        if y < self.bottom_y {
            self.bottom_fluid.clone()
        } else {
            self.top_fluid.clone()
        }
    }
}

pub enum FluidLevelSampler {
    Static(StaticFluidLevelSampler),
    Chunk(StandardChunkFluidLevelSampler),
}

impl FluidLevelSamplerImpl for FluidLevelSampler {
    fn get_fluid_level(&self, x: i32, y: i32, z: i32) -> FluidLevel {
        match self {
            Self::Static(sampler) => sampler.get_fluid_level(x, y, z),
            Self::Chunk(sampler) => sampler.get_fluid_level(x, y, z),
        }
    }
}

/// Fluid placement without aquifer carving: solid wherever the density is
/// positive, otherwise whatever the column's fluid level dictates.
pub struct SeaLevelAquiferSampler {
    level_sampler: FluidLevelSampler,
}

impl SeaLevelAquiferSampler {
    pub fn new(level_sampler: FluidLevelSampler) -> Self {
        Self { level_sampler }
    }

    pub fn apply(&self, pos: &impl NoisePos, density: f64) -> Option<BlockState> {
        if density > 0f64 {
            None
        } else {
            Some(
                self.level_sampler
                    .get_fluid_level(pos.x(), pos.y(), pos.z())
                    .get_block_state(pos.y()),
            )
        }
    }
}

pub enum BlockStateSampler {
    Aquifer(SeaLevelAquiferSampler),
}

impl BlockStateSampler {
    pub fn sample(&self, pos: &impl NoisePos, density: f64) -> Option<BlockState> {
        match self {
            Self::Aquifer(sampler) => sampler.apply(pos, density),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::density::UnblendedNoisePos;

    fn overworld_sampler() -> SeaLevelAquiferSampler {
        let sea_level = 63;
        let sampler = StandardChunkFluidLevelSampler::new(
            FluidLevel::new(sea_level, BlockState::WATER),
            FluidLevel::new((-54i32).min(sea_level), BlockState::LAVA),
        );
        SeaLevelAquiferSampler::new(FluidLevelSampler::Chunk(sampler))
    }

    #[test]
    fn test_fluid_level_boundary_is_exclusive() {
        let level = FluidLevel::new(63, BlockState::WATER);
        assert_eq!(level.get_block_state(62), BlockState::WATER);
        assert_eq!(level.get_block_state(63), BlockState::AIR);
        assert_eq!(level.get_block_state(100), BlockState::AIR);
    }

    #[test]
    fn test_lava_tier_below_cutoff() {
        let sampler = overworld_sampler();

        let lava = sampler.apply(&UnblendedNoisePos::new(0, -55, 0), -1f64);
        assert_eq!(lava, Some(BlockState::LAVA));

        // At the cutoff the top fluid takes over.
        let water = sampler.apply(&UnblendedNoisePos::new(0, -54, 0), -1f64);
        assert_eq!(water, Some(BlockState::WATER));
    }

    #[test]
    fn test_water_column_up_to_sea_level() {
        let sampler = overworld_sampler();

        for y in [-54, 0, 62] {
            assert_eq!(
                sampler.apply(&UnblendedNoisePos::new(0, y, 0), -1f64),
                Some(BlockState::WATER)
            );
        }
        assert_eq!(
            sampler.apply(&UnblendedNoisePos::new(0, 63, 0), -1f64),
            Some(BlockState::AIR)
        );
    }

    #[test]
    fn test_positive_density_is_solid() {
        let sampler = overworld_sampler();
        assert_eq!(sampler.apply(&UnblendedNoisePos::new(0, 0, 0), 0.5f64), None);
        // Zero density is not solid.
        assert_eq!(
            sampler.apply(&UnblendedNoisePos::new(0, 0, 0), 0f64),
            Some(BlockState::WATER)
        );
    }

    #[test]
    fn test_static_sampler() {
        let sampler = SeaLevelAquiferSampler::new(FluidLevelSampler::Static(
            StaticFluidLevelSampler::new(-64, BlockState::WATER),
        ));
        assert_eq!(
            sampler.apply(&UnblendedNoisePos::new(0, 0, 0), -1f64),
            Some(BlockState::AIR)
        );
    }
}
