use std::sync::Arc;

use super::{DensityFunction, DensityFunctionImpl, NoisePos, Visitor};

#[derive(Copy, Clone, PartialEq, Eq)]
pub enum LinearType {
    Mul,
    Add,
}

#[derive(Clone)]
pub struct LinearFunction {
    action: LinearType,
    input: Arc<DensityFunction>,
    arg: f64,
    min: f64,
    max: f64,
}

impl LinearFunction {
    pub fn create(action: LinearType, input: Arc<DensityFunction>, arg: f64) -> Self {
        let input_min = input.min();
        let input_max = input.max();
        let (min, max) = match action {
            LinearType::Add => (input_min + arg, input_max + arg),
            LinearType::Mul => {
                if arg >= 0f64 {
                    (input_min * arg, input_max * arg)
                } else {
                    (input_max * arg, input_min * arg)
                }
            }
        };
        Self {
            action,
            input,
            arg,
            min,
            max,
        }
    }

    #[inline]
    fn apply_density(&self, density: f64) -> f64 {
        match self.action {
            LinearType::Mul => density * self.arg,
            LinearType::Add => density + self.arg,
        }
    }
}

impl DensityFunctionImpl for LinearFunction {
    #[inline]
    fn sample(&self, pos: &impl NoisePos) -> f64 {
        self.apply_density(self.input.sample(pos))
    }

    fn apply(&self, visitor: &impl Visitor) -> DensityFunction {
        visitor.apply(DensityFunction::Linear(Self::create(
            self.action,
            Arc::new(self.input.apply(visitor)),
            self.arg,
        )))
    }

    fn min(&self) -> f64 {
        self.min
    }

    fn max(&self) -> f64 {
        self.max
    }
}

#[derive(Copy, Clone, PartialEq, Eq)]
pub enum BinaryType {
    Mul,
    Add,
    Min,
    Max,
}

#[derive(Clone)]
pub struct BinaryFunction {
    action: BinaryType,
    arg1: Arc<DensityFunction>,
    arg2: Arc<DensityFunction>,
    min: f64,
    max: f64,
}

impl BinaryFunction {
    pub fn create(
        action: BinaryType,
        arg1: DensityFunction,
        arg2: DensityFunction,
    ) -> DensityFunction {
        let min1 = arg1.min();
        let max1 = arg1.max();
        let min2 = arg2.min();
        let max2 = arg2.max();

        let (min, max) = match action {
            BinaryType::Add => (min1 + min2, max1 + max2),
            BinaryType::Mul => {
                // The extreme product is one of the bound combinations.
                let products = [min1 * min2, min1 * max2, max1 * min2, max1 * max2];
                let mut min = f64::INFINITY;
                let mut max = f64::NEG_INFINITY;
                for product in products {
                    min = min.min(product);
                    max = max.max(product);
                }
                (min, max)
            }
            BinaryType::Min => (min1.min(min2), max1.min(max2)),
            BinaryType::Max => (min1.max(min2), max1.max(max2)),
        };

        DensityFunction::Binary(Self {
            action,
            arg1: Arc::new(arg1),
            arg2: Arc::new(arg2),
            min,
            max,
        })
    }

    #[inline]
    fn apply_densities(&self, density1: f64, density2: f64) -> f64 {
        match self.action {
            BinaryType::Add => density1 + density2,
            BinaryType::Mul => density1 * density2,
            BinaryType::Min => density1.min(density2),
            BinaryType::Max => density1.max(density2),
        }
    }
}

impl DensityFunctionImpl for BinaryFunction {
    #[inline]
    fn sample(&self, pos: &impl NoisePos) -> f64 {
        self.apply_densities(self.arg1.sample(pos), self.arg2.sample(pos))
    }

    fn apply(&self, visitor: &impl Visitor) -> DensityFunction {
        visitor.apply(Self::create(
            self.action,
            self.arg1.apply(visitor),
            self.arg2.apply(visitor),
        ))
    }

    fn min(&self) -> f64 {
        self.min
    }

    fn max(&self) -> f64 {
        self.max
    }
}
