use std::sync::Arc;

use parking_lot::Mutex;

use math::{BinaryFunction, BinaryType, LinearFunction, LinearType};
use noise::{InternalNoise, InterpolatedNoiseFunction, NoiseFunction, ShiftedNoiseFunction};
use offset::{ShiftAFunction, ShiftBFunction};
use spline::SplineFunction;
use unary::{ClampFunction, UnaryFunction, UnaryType};

use crate::noise::clamped_map;

pub mod math;
pub mod noise;
pub mod offset;
pub mod seed;
pub mod spline;
pub mod unary;

pub fn peaks_valleys_noise(variance: f32) -> f32 {
    -((variance.abs() - 0.6666667f32).abs() - 0.33333334f32) * 3f32
}

#[derive(Clone)]
pub enum DensityFunction {
    Clamp(ClampFunction),
    Unary(UnaryFunction),
    Noise(NoiseFunction),
    ShiftA(ShiftAFunction),
    ShiftB(ShiftBFunction),
    ShiftedNoise(ShiftedNoiseFunction),
    Spline(SplineFunction),
    Constant(ConstantFunction),
    Linear(LinearFunction),
    Binary(BinaryFunction),
    ClampedY(YClampedFunction),
    RangeChoice(RangeChoiceFunction),
    CacheOnce(CacheOnceFunction),
    InterpolatedNoise(InterpolatedNoiseFunction),
}

impl DensityFunction {
    #[inline]
    pub fn sample(&self, pos: &impl NoisePos) -> f64 {
        match self {
            Self::Clamp(func) => func.sample(pos),
            Self::Unary(func) => func.sample(pos),
            Self::Noise(func) => func.sample(pos),
            Self::ShiftA(func) => func.sample(pos),
            Self::ShiftB(func) => func.sample(pos),
            Self::ShiftedNoise(func) => func.sample(pos),
            Self::Spline(func) => func.sample(pos),
            Self::Constant(func) => func.sample(pos),
            Self::Linear(func) => func.sample(pos),
            Self::Binary(func) => func.sample(pos),
            Self::ClampedY(func) => func.sample(pos),
            Self::RangeChoice(func) => func.sample(pos),
            Self::CacheOnce(func) => func.sample(pos),
            Self::InterpolatedNoise(func) => func.sample(pos),
        }
    }

    #[inline]
    pub fn apply(&self, visitor: &impl Visitor) -> DensityFunction {
        match self {
            Self::Clamp(func) => func.apply(visitor),
            Self::Unary(func) => func.apply(visitor),
            Self::Noise(func) => func.apply(visitor),
            Self::ShiftA(func) => func.apply(visitor),
            Self::ShiftB(func) => func.apply(visitor),
            Self::ShiftedNoise(func) => func.apply(visitor),
            Self::Spline(func) => func.apply(visitor),
            Self::Constant(func) => func.apply(visitor),
            Self::Linear(func) => func.apply(visitor),
            Self::Binary(func) => func.apply(visitor),
            Self::ClampedY(func) => func.apply(visitor),
            Self::RangeChoice(func) => func.apply(visitor),
            Self::CacheOnce(func) => func.apply(visitor),
            Self::InterpolatedNoise(func) => func.apply(visitor),
        }
    }

    #[inline]
    pub fn max(&self) -> f64 {
        match self {
            Self::Clamp(func) => func.max(),
            Self::Unary(func) => func.max(),
            Self::Noise(func) => func.max(),
            Self::ShiftA(func) => func.max(),
            Self::ShiftB(func) => func.max(),
            Self::ShiftedNoise(func) => func.max(),
            Self::Spline(func) => func.max(),
            Self::Constant(func) => func.max(),
            Self::Linear(func) => func.max(),
            Self::Binary(func) => func.max(),
            Self::ClampedY(func) => func.max(),
            Self::RangeChoice(func) => func.max(),
            Self::CacheOnce(func) => func.max(),
            Self::InterpolatedNoise(func) => func.max(),
        }
    }

    #[inline]
    pub fn min(&self) -> f64 {
        match self {
            Self::Clamp(func) => func.min(),
            Self::Unary(func) => func.min(),
            Self::Noise(func) => func.min(),
            Self::ShiftA(func) => func.min(),
            Self::ShiftB(func) => func.min(),
            Self::ShiftedNoise(func) => func.min(),
            Self::Spline(func) => func.min(),
            Self::Constant(func) => func.min(),
            Self::Linear(func) => func.min(),
            Self::Binary(func) => func.min(),
            Self::ClampedY(func) => func.min(),
            Self::RangeChoice(func) => func.min(),
            Self::CacheOnce(func) => func.min(),
            Self::InterpolatedNoise(func) => func.min(),
        }
    }

    pub fn clamp(&self, min: f64, max: f64) -> Self {
        Self::Clamp(ClampFunction::new(Arc::new(self.clone()), min, max))
    }

    pub fn abs(&self) -> Self {
        Self::Unary(UnaryFunction::create(
            UnaryType::Abs,
            Arc::new(self.clone()),
        ))
    }

    pub fn square(&self) -> Self {
        Self::Unary(UnaryFunction::create(
            UnaryType::Square,
            Arc::new(self.clone()),
        ))
    }

    pub fn cube(&self) -> Self {
        Self::Unary(UnaryFunction::create(
            UnaryType::Cube,
            Arc::new(self.clone()),
        ))
    }

    pub fn half_negative(&self) -> Self {
        Self::Unary(UnaryFunction::create(
            UnaryType::HalfNeg,
            Arc::new(self.clone()),
        ))
    }

    pub fn quarter_negative(&self) -> Self {
        Self::Unary(UnaryFunction::create(
            UnaryType::QuartNeg,
            Arc::new(self.clone()),
        ))
    }

    pub fn squeeze(&self) -> Self {
        Self::Unary(UnaryFunction::create(
            UnaryType::Squeeze,
            Arc::new(self.clone()),
        ))
    }

    pub fn add_const(&self, arg: f64) -> Self {
        Self::Linear(LinearFunction::create(
            LinearType::Add,
            Arc::new(self.clone()),
            arg,
        ))
    }

    pub fn mul_const(&self, arg: f64) -> Self {
        Self::Linear(LinearFunction::create(
            LinearType::Mul,
            Arc::new(self.clone()),
            arg,
        ))
    }

    pub fn add(&self, other: DensityFunction) -> Self {
        BinaryFunction::create(BinaryType::Add, self.clone(), other)
    }

    pub fn mul(&self, other: DensityFunction) -> Self {
        BinaryFunction::create(BinaryType::Mul, self.clone(), other)
    }

    pub fn binary_min(&self, other: DensityFunction) -> Self {
        BinaryFunction::create(BinaryType::Min, self.clone(), other)
    }

    pub fn binary_max(&self, other: DensityFunction) -> Self {
        BinaryFunction::create(BinaryType::Max, self.clone(), other)
    }

    pub fn cache_once(&self) -> Self {
        Self::CacheOnce(CacheOnceFunction::new(Arc::new(self.clone())))
    }

    pub fn range_choice(
        &self,
        min_inclusive: f64,
        max_exclusive: f64,
        when_in_range: DensityFunction,
        when_out_of_range: DensityFunction,
    ) -> Self {
        Self::RangeChoice(RangeChoiceFunction::new(
            Arc::new(self.clone()),
            min_inclusive,
            max_exclusive,
            Arc::new(when_in_range),
            Arc::new(when_out_of_range),
        ))
    }
}

pub trait NoisePos {
    fn x(&self) -> i32;
    fn y(&self) -> i32;
    fn z(&self) -> i32;
}

#[derive(Clone, Copy)]
pub struct UnblendedNoisePos {
    x: i32,
    y: i32,
    z: i32,
}

impl UnblendedNoisePos {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

impl NoisePos for UnblendedNoisePos {
    fn x(&self) -> i32 {
        self.x
    }

    fn y(&self) -> i32 {
        self.y
    }

    fn z(&self) -> i32 {
        self.z
    }
}

pub trait Visitor {
    fn apply(&self, function: DensityFunction) -> DensityFunction;

    fn apply_internal_noise(&self, noise: &Arc<InternalNoise>) -> Arc<InternalNoise> {
        noise.clone()
    }
}

pub trait DensityFunctionImpl {
    fn sample(&self, pos: &impl NoisePos) -> f64;

    fn apply(&self, visitor: &impl Visitor) -> DensityFunction;

    fn min(&self) -> f64;

    fn max(&self) -> f64;
}

#[derive(Clone)]
pub struct ConstantFunction {
    value: f64,
}

impl ConstantFunction {
    pub fn new(value: f64) -> Self {
        ConstantFunction { value }
    }
}

impl DensityFunctionImpl for ConstantFunction {
    fn sample(&self, _pos: &impl NoisePos) -> f64 {
        self.value
    }

    fn apply(&self, visitor: &impl Visitor) -> DensityFunction {
        visitor.apply(DensityFunction::Constant(self.clone()))
    }

    fn min(&self) -> f64 {
        self.value
    }

    fn max(&self) -> f64 {
        self.value
    }
}

/// A linear gradient over y, clamped outside `[from, to]`.
#[derive(Clone)]
pub struct YClampedFunction {
    from: i32,
    to: i32,
    from_val: f64,
    to_val: f64,
}

impl YClampedFunction {
    pub fn new(from: i32, to: i32, from_val: f64, to_val: f64) -> Self {
        Self {
            from,
            to,
            from_val,
            to_val,
        }
    }
}

impl DensityFunctionImpl for YClampedFunction {
    fn sample(&self, pos: &impl NoisePos) -> f64 {
        clamped_map(
            pos.y() as f64,
            self.from as f64,
            self.to as f64,
            self.from_val,
            self.to_val,
        )
    }

    fn apply(&self, visitor: &impl Visitor) -> DensityFunction {
        visitor.apply(DensityFunction::ClampedY(self.clone()))
    }

    fn min(&self) -> f64 {
        self.from_val.min(self.to_val)
    }

    fn max(&self) -> f64 {
        self.from_val.max(self.to_val)
    }
}

pub struct RangeChoiceFunction {
    input: Arc<DensityFunction>,
    min_inclusive: f64,
    max_exclusive: f64,
    when_in_range: Arc<DensityFunction>,
    when_out_of_range: Arc<DensityFunction>,
}

impl RangeChoiceFunction {
    pub fn new(
        input: Arc<DensityFunction>,
        min_inclusive: f64,
        max_exclusive: f64,
        when_in_range: Arc<DensityFunction>,
        when_out_of_range: Arc<DensityFunction>,
    ) -> Self {
        Self {
            input,
            min_inclusive,
            max_exclusive,
            when_in_range,
            when_out_of_range,
        }
    }
}

impl Clone for RangeChoiceFunction {
    fn clone(&self) -> Self {
        Self {
            input: self.input.clone(),
            min_inclusive: self.min_inclusive,
            max_exclusive: self.max_exclusive,
            when_in_range: self.when_in_range.clone(),
            when_out_of_range: self.when_out_of_range.clone(),
        }
    }
}

impl DensityFunctionImpl for RangeChoiceFunction {
    fn sample(&self, pos: &impl NoisePos) -> f64 {
        let density = self.input.sample(pos);
        if density >= self.min_inclusive && density < self.max_exclusive {
            self.when_in_range.sample(pos)
        } else {
            self.when_out_of_range.sample(pos)
        }
    }

    fn apply(&self, visitor: &impl Visitor) -> DensityFunction {
        visitor.apply(DensityFunction::RangeChoice(RangeChoiceFunction {
            input: Arc::new(self.input.apply(visitor)),
            min_inclusive: self.min_inclusive,
            max_exclusive: self.max_exclusive,
            when_in_range: Arc::new(self.when_in_range.apply(visitor)),
            when_out_of_range: Arc::new(self.when_out_of_range.apply(visitor)),
        }))
    }

    fn min(&self) -> f64 {
        self.when_in_range.min().min(self.when_out_of_range.min())
    }

    fn max(&self) -> f64 {
        self.when_in_range.max().max(self.when_out_of_range.max())
    }
}

/// Memoizes the wrapped function by exact block position. The cache holds a
/// single entry, so repeated lookups at the current evaluation position are
/// free while any new position recomputes.
pub struct CacheOnceFunction {
    input: Arc<DensityFunction>,
    cache: Mutex<Option<((i32, i32, i32), f64)>>,
}

impl CacheOnceFunction {
    pub fn new(input: Arc<DensityFunction>) -> Self {
        Self {
            input,
            cache: Mutex::new(None),
        }
    }
}

impl Clone for CacheOnceFunction {
    // Clones start with an empty cache.
    fn clone(&self) -> Self {
        Self::new(self.input.clone())
    }
}

impl DensityFunctionImpl for CacheOnceFunction {
    fn sample(&self, pos: &impl NoisePos) -> f64 {
        let key = (pos.x(), pos.y(), pos.z());
        let mut cache = self.cache.lock();
        if let Some((cached_key, cached_value)) = *cache {
            if cached_key == key {
                return cached_value;
            }
        }
        let value = self.input.sample(pos);
        *cache = Some((key, value));
        value
    }

    fn apply(&self, visitor: &impl Visitor) -> DensityFunction {
        visitor.apply(DensityFunction::CacheOnce(CacheOnceFunction::new(
            Arc::new(self.input.apply(visitor)),
        )))
    }

    fn min(&self) -> f64 {
        self.input.min()
    }

    fn max(&self) -> f64 {
        self.input.max()
    }
}
