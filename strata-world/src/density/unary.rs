use std::sync::Arc;

use super::{DensityFunction, DensityFunctionImpl, NoisePos, Visitor};

#[derive(Clone)]
pub struct ClampFunction {
    input: Arc<DensityFunction>,
    min: f64,
    max: f64,
}

impl ClampFunction {
    pub fn new(input: Arc<DensityFunction>, min: f64, max: f64) -> Self {
        assert!(min <= max);
        Self { input, min, max }
    }
}

impl DensityFunctionImpl for ClampFunction {
    #[inline]
    fn sample(&self, pos: &impl NoisePos) -> f64 {
        self.input.sample(pos).clamp(self.min, self.max)
    }

    fn apply(&self, visitor: &impl Visitor) -> DensityFunction {
        visitor.apply(DensityFunction::Clamp(ClampFunction {
            input: Arc::new(self.input.apply(visitor)),
            min: self.min,
            max: self.max,
        }))
    }

    fn min(&self) -> f64 {
        self.min
    }

    fn max(&self) -> f64 {
        self.max
    }
}

#[derive(Clone)]
pub enum UnaryType {
    Abs,
    Square,
    Cube,
    HalfNeg,
    QuartNeg,
    Squeeze,
}

#[derive(Clone)]
pub struct UnaryFunction {
    action: UnaryType,
    input: Arc<DensityFunction>,
    min: f64,
    max: f64,
}

impl UnaryFunction {
    pub fn create(action: UnaryType, input: Arc<DensityFunction>) -> Self {
        let base_min = input.min();
        let new_min = Self::internal_apply(&action, base_min);
        let new_max = Self::internal_apply(&action, input.max());
        match action {
            // Abs and square fold the negative range onto the positive one.
            UnaryType::Abs | UnaryType::Square => Self {
                action,
                input,
                min: f64::max(0f64, base_min),
                max: f64::max(new_min, new_max),
            },
            _ => Self {
                action,
                input,
                min: new_min,
                max: new_max,
            },
        }
    }

    fn internal_apply(action: &UnaryType, density: f64) -> f64 {
        match action {
            UnaryType::Abs => density.abs(),
            UnaryType::Square => density * density,
            UnaryType::Cube => density * density * density,
            UnaryType::HalfNeg => {
                if density > 0f64 {
                    density
                } else {
                    density * 0.5f64
                }
            }
            UnaryType::QuartNeg => {
                if density > 0f64 {
                    density
                } else {
                    density * 0.25f64
                }
            }
            UnaryType::Squeeze => {
                let d = density.clamp(-1f64, 1f64);
                d / 2f64 - d * d * d / 24f64
            }
        }
    }
}

impl DensityFunctionImpl for UnaryFunction {
    #[inline]
    fn sample(&self, pos: &impl NoisePos) -> f64 {
        Self::internal_apply(&self.action, self.input.sample(pos))
    }

    fn apply(&self, visitor: &impl Visitor) -> DensityFunction {
        visitor.apply(DensityFunction::Unary(Self::create(
            self.action.clone(),
            Arc::new(self.input.apply(visitor)),
        )))
    }

    fn min(&self) -> f64 {
        self.min
    }

    fn max(&self) -> f64 {
        self.max
    }
}
