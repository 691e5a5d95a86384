use std::sync::Arc;

use super::{noise::InternalNoise, DensityFunction, DensityFunctionImpl, NoisePos, Visitor};

pub trait OffsetDensityFunction {
    fn offset_noise(&self) -> &InternalNoise;

    fn sample_3d(&self, x: f64, y: f64, z: f64) -> f64 {
        self.offset_noise()
            .sample(x * 0.25f64, y * 0.25f64, z * 0.25f64)
            * 4f64
    }
}

#[derive(Clone)]
pub struct ShiftAFunction {
    offset: Arc<InternalNoise>,
}

impl ShiftAFunction {
    pub fn new(offset: Arc<InternalNoise>) -> Self {
        Self { offset }
    }
}

impl OffsetDensityFunction for ShiftAFunction {
    fn offset_noise(&self) -> &InternalNoise {
        &self.offset
    }
}

impl DensityFunctionImpl for ShiftAFunction {
    fn sample(&self, pos: &impl NoisePos) -> f64 {
        self.sample_3d(pos.x() as f64, 0f64, pos.z() as f64)
    }

    fn apply(&self, visitor: &impl Visitor) -> DensityFunction {
        visitor.apply(DensityFunction::ShiftA(ShiftAFunction {
            offset: visitor.apply_internal_noise(&self.offset),
        }))
    }

    fn max(&self) -> f64 {
        self.offset_noise().max_value() * 4f64
    }

    fn min(&self) -> f64 {
        -self.max()
    }
}

#[derive(Clone)]
pub struct ShiftBFunction {
    offset: Arc<InternalNoise>,
}

impl ShiftBFunction {
    pub fn new(offset: Arc<InternalNoise>) -> Self {
        Self { offset }
    }
}

impl OffsetDensityFunction for ShiftBFunction {
    fn offset_noise(&self) -> &InternalNoise {
        &self.offset
    }
}

impl DensityFunctionImpl for ShiftBFunction {
    fn sample(&self, pos: &impl NoisePos) -> f64 {
        self.sample_3d(pos.z() as f64, pos.x() as f64, 0f64)
    }

    fn apply(&self, visitor: &impl Visitor) -> DensityFunction {
        visitor.apply(DensityFunction::ShiftB(ShiftBFunction {
            offset: visitor.apply_internal_noise(&self.offset),
        }))
    }

    fn max(&self) -> f64 {
        self.offset_noise().max_value() * 4f64
    }

    fn min(&self) -> f64 {
        -self.max()
    }
}
