use std::sync::Arc;

use strata_core::random::{xoroshiro128::Xoroshiro, RandomGenerator, RandomImpl};

use crate::noise::{
    clamped_lerp,
    perlin::{DoublePerlinNoiseParameters, DoublePerlinNoiseSampler, OctavePerlinNoiseSampler},
};

use super::{DensityFunction, DensityFunctionImpl, NoisePos, Visitor};

/// A named double-perlin noise slot. Until a seed binder runs, the sampler is
/// absent and the noise evaluates to 0 with a max value of 2.
pub struct InternalNoise {
    pub(crate) parameters: &'static DoublePerlinNoiseParameters,
    pub(crate) sampler: Option<DoublePerlinNoiseSampler>,
}

impl InternalNoise {
    pub fn new(
        parameters: &'static DoublePerlinNoiseParameters,
        sampler: Option<DoublePerlinNoiseSampler>,
    ) -> Self {
        Self {
            parameters,
            sampler,
        }
    }

    pub fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        match &self.sampler {
            Some(sampler) => sampler.sample(x, y, z),
            None => 0f64,
        }
    }

    pub fn max_value(&self) -> f64 {
        match &self.sampler {
            Some(sampler) => sampler.max_value(),
            None => 2f64,
        }
    }
}

#[derive(Clone)]
pub struct NoiseFunction {
    noise: Arc<InternalNoise>,
    xz_scale: f64,
    y_scale: f64,
}

impl NoiseFunction {
    pub fn new(noise: Arc<InternalNoise>, xz_scale: f64, y_scale: f64) -> Self {
        Self {
            noise,
            xz_scale,
            y_scale,
        }
    }
}

impl DensityFunctionImpl for NoiseFunction {
    #[inline]
    fn sample(&self, pos: &impl NoisePos) -> f64 {
        self.noise.sample(
            pos.x() as f64 * self.xz_scale,
            pos.y() as f64 * self.y_scale,
            pos.z() as f64 * self.xz_scale,
        )
    }

    fn apply(&self, visitor: &impl Visitor) -> DensityFunction {
        visitor.apply(DensityFunction::Noise(NoiseFunction {
            noise: visitor.apply_internal_noise(&self.noise),
            xz_scale: self.xz_scale,
            y_scale: self.y_scale,
        }))
    }

    fn max(&self) -> f64 {
        self.noise.max_value()
    }

    fn min(&self) -> f64 {
        -self.max()
    }
}

#[derive(Clone)]
pub struct ShiftedNoiseFunction {
    shift_x: Arc<DensityFunction>,
    shift_y: Arc<DensityFunction>,
    shift_z: Arc<DensityFunction>,
    xz_scale: f64,
    y_scale: f64,
    noise: Arc<InternalNoise>,
}

impl ShiftedNoiseFunction {
    pub fn new(
        shift_x: Arc<DensityFunction>,
        shift_y: Arc<DensityFunction>,
        shift_z: Arc<DensityFunction>,
        xz_scale: f64,
        y_scale: f64,
        noise: Arc<InternalNoise>,
    ) -> Self {
        Self {
            shift_x,
            shift_y,
            shift_z,
            xz_scale,
            y_scale,
            noise,
        }
    }
}

impl DensityFunctionImpl for ShiftedNoiseFunction {
    fn sample(&self, pos: &impl NoisePos) -> f64 {
        let x_pos = (pos.x() as f64) * self.xz_scale + self.shift_x.sample(pos);
        let y_pos = (pos.y() as f64) * self.y_scale + self.shift_y.sample(pos);
        let z_pos = (pos.z() as f64) * self.xz_scale + self.shift_z.sample(pos);

        self.noise.sample(x_pos, y_pos, z_pos)
    }

    fn apply(&self, visitor: &impl Visitor) -> DensityFunction {
        visitor.apply(DensityFunction::ShiftedNoise(ShiftedNoiseFunction {
            shift_x: Arc::new(self.shift_x.apply(visitor)),
            shift_y: Arc::new(self.shift_y.apply(visitor)),
            shift_z: Arc::new(self.shift_z.apply(visitor)),
            xz_scale: self.xz_scale,
            y_scale: self.y_scale,
            noise: visitor.apply_internal_noise(&self.noise),
        }))
    }

    fn max(&self) -> f64 {
        self.noise.max_value()
    }

    fn min(&self) -> f64 {
        -self.max()
    }
}

/// The composite terrain shaper: two 16-octave legacy stacks interpolated by
/// an 8-octave selector.
#[derive(Clone)]
pub struct InterpolatedNoiseFunction {
    lower: Arc<OctavePerlinNoiseSampler>,
    upper: Arc<OctavePerlinNoiseSampler>,
    interpolation: Arc<OctavePerlinNoiseSampler>,
    xz_scale_scaled: f64,
    y_scale_scaled: f64,
    xz_factor: f64,
    y_factor: f64,
    smear_scale: f64,
    xz_scale: f64,
    y_scale: f64,
    max_value: f64,
}

impl InterpolatedNoiseFunction {
    fn create_from_random(
        rand: &mut RandomGenerator,
        xz_scale: f64,
        y_scale: f64,
        xz_factor: f64,
        y_factor: f64,
        smear_scale: f64,
    ) -> Self {
        let (start_1, amplitudes_1) =
            OctavePerlinNoiseSampler::calculate_amplitudes(&(-15..=0).collect::<Vec<i32>>());

        let (start_2, amplitudes_2) =
            OctavePerlinNoiseSampler::calculate_amplitudes(&(-7..=0).collect::<Vec<i32>>());

        Self::new(
            OctavePerlinNoiseSampler::new(rand, start_1, &amplitudes_1, true),
            OctavePerlinNoiseSampler::new(rand, start_1, &amplitudes_1, true),
            OctavePerlinNoiseSampler::new(rand, start_2, &amplitudes_2, true),
            xz_scale,
            y_scale,
            xz_factor,
            y_factor,
            smear_scale,
        )
    }

    pub fn copy_with_random(&self, rand: &mut RandomGenerator) -> Self {
        Self::create_from_random(
            rand,
            self.xz_scale,
            self.y_scale,
            self.xz_factor,
            self.y_factor,
            self.smear_scale,
        )
    }

    pub fn create_base_3d_noise_function(
        xz_scale: f64,
        y_scale: f64,
        xz_factor: f64,
        y_factor: f64,
        smear_scale: f64,
    ) -> Self {
        let mut rand = RandomGenerator::Xoroshiro(Xoroshiro::from_seed(0));
        Self::create_from_random(
            &mut rand,
            xz_scale,
            y_scale,
            xz_factor,
            y_factor,
            smear_scale,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn new(
        lower: OctavePerlinNoiseSampler,
        upper: OctavePerlinNoiseSampler,
        interpolation: OctavePerlinNoiseSampler,
        xz_scale: f64,
        y_scale: f64,
        xz_factor: f64,
        y_factor: f64,
        smear_scale: f64,
    ) -> Self {
        let y_scale_scaled = 684.412f64 * y_scale;
        let max_value = lower.max_broken_value(y_scale_scaled);
        Self {
            lower: Arc::new(lower),
            upper: Arc::new(upper),
            interpolation: Arc::new(interpolation),
            xz_scale,
            y_scale,
            xz_factor,
            y_factor,
            smear_scale,
            y_scale_scaled,
            xz_scale_scaled: 684.412f64 * xz_scale,
            max_value,
        }
    }
}

impl DensityFunctionImpl for InterpolatedNoiseFunction {
    fn sample(&self, pos: &impl NoisePos) -> f64 {
        let d = pos.x() as f64 * self.xz_scale_scaled;
        let e = pos.y() as f64 * self.y_scale_scaled;
        let f = pos.z() as f64 * self.xz_scale_scaled;

        let g = d / self.xz_factor;
        let h = e / self.y_factor;
        let i = f / self.xz_factor;

        let j = self.y_scale_scaled * self.smear_scale;
        let k = j / self.y_factor;

        let mut n = 0f64;
        let mut o = 1f64;

        for p in 0..8 {
            let sampler = self.interpolation.get_octave(p);
            if let Some(sampler) = sampler {
                n += sampler.sample_no_fade(
                    OctavePerlinNoiseSampler::maintain_precision(g * o),
                    OctavePerlinNoiseSampler::maintain_precision(h * o),
                    OctavePerlinNoiseSampler::maintain_precision(i * o),
                    k * o,
                    h * o,
                ) / o;
            }

            o /= 2f64;
        }

        let q = (n / 10f64 + 1f64) / 2f64;
        let bl2 = q >= 1f64;
        let bl3 = q <= 0f64;
        let mut o = 1f64;
        let mut l = 0f64;
        let mut m = 0f64;

        for r in 0..16 {
            let s = OctavePerlinNoiseSampler::maintain_precision(d * o);
            let t = OctavePerlinNoiseSampler::maintain_precision(e * o);
            let u = OctavePerlinNoiseSampler::maintain_precision(f * o);
            let v = j * o;

            if !bl2 {
                let sampler = self.lower.get_octave(r);
                if let Some(sampler) = sampler {
                    l += sampler.sample_no_fade(s, t, u, v, e * o) / o;
                }
            }

            if !bl3 {
                let sampler = self.upper.get_octave(r);
                if let Some(sampler) = sampler {
                    m += sampler.sample_no_fade(s, t, u, v, e * o) / o;
                }
            }

            o /= 2f64;
        }

        clamped_lerp(l / 512f64, m / 512f64, q) / 128f64
    }

    fn apply(&self, visitor: &impl Visitor) -> DensityFunction {
        visitor.apply(DensityFunction::InterpolatedNoise(self.clone()))
    }

    fn max(&self) -> f64 {
        self.max_value
    }

    fn min(&self) -> f64 {
        -self.max()
    }
}
