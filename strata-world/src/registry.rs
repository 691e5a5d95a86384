use std::sync::{Arc, LazyLock};

use crate::block::BlockState;
use crate::density::noise::{
    InternalNoise, InterpolatedNoiseFunction, NoiseFunction, ShiftedNoiseFunction,
};
use crate::density::offset::{ShiftAFunction, ShiftBFunction};
use crate::density::spline::{FloatAmplifier, Spline, SplineBuilder, SplineFunction, SplineValue};
use crate::density::{peaks_valleys_noise, ConstantFunction, DensityFunction, YClampedFunction};
use crate::noise::builtin_noise_params;
use crate::noise::lerp_32;
use crate::noise::perlin::DoublePerlinNoiseParameters;
use crate::shape::GenerationShape;

type BuiltTree = LazyLock<DensityFunction>;

pub static ZERO: BuiltTree =
    LazyLock::new(|| DensityFunction::Constant(ConstantFunction::new(0f64)));

pub static SHIFT_X: BuiltTree = LazyLock::new(|| {
    DensityFunction::ShiftA(ShiftAFunction::new(Arc::new(InternalNoise::new(
        &builtin_noise_params::OFFSET,
        None,
    ))))
});

pub static SHIFT_Z: BuiltTree = LazyLock::new(|| {
    DensityFunction::ShiftB(ShiftBFunction::new(Arc::new(InternalNoise::new(
        &builtin_noise_params::OFFSET,
        None,
    ))))
});

pub static BASE_3D_NOISE: BuiltTree = LazyLock::new(|| {
    DensityFunction::InterpolatedNoise(InterpolatedNoiseFunction::create_base_3d_noise_function(
        0.25f64, 0.125f64, 80f64, 160f64, 8f64,
    ))
});

fn shifted_noise(params: &'static DoublePerlinNoiseParameters) -> DensityFunction {
    DensityFunction::ShiftedNoise(ShiftedNoiseFunction::new(
        Arc::new(SHIFT_X.clone()),
        Arc::new(ZERO.clone()),
        Arc::new(SHIFT_Z.clone()),
        0.25f64,
        0f64,
        Arc::new(InternalNoise::new(params, None)),
    ))
}

pub static CONTINENTS: BuiltTree =
    LazyLock::new(|| shifted_noise(&builtin_noise_params::CONTINENTALNESS));

pub static EROSION: BuiltTree = LazyLock::new(|| shifted_noise(&builtin_noise_params::EROSION));

pub static RIDGES: BuiltTree = LazyLock::new(|| shifted_noise(&builtin_noise_params::RIDGE));

pub static RIDGES_FOLDED: BuiltTree = LazyLock::new(|| {
    RIDGES
        .abs()
        .add_const(-0.6666666666666666f64)
        .abs()
        .add_const(-0.3333333333333333f64)
        .mul_const(-3f64)
});

pub static SLOPED_CHEESE: BuiltTree = LazyLock::new(|| {
    let jagged_noise = DensityFunction::Noise(NoiseFunction::new(
        Arc::new(InternalNoise::new(&builtin_noise_params::JAGGED, None)),
        1500f64,
        0f64,
    ));

    let offset = DensityFunction::Spline(SplineFunction::new(Arc::new(create_offset_spline(
        Arc::new(CONTINENTS.clone()),
        Arc::new(EROSION.clone()),
        Arc::new(RIDGES.clone()),
        false,
    ))))
    .add_const(-0.50375f32 as f64);

    let factor = DensityFunction::Spline(SplineFunction::new(Arc::new(create_factor_spline(
        Arc::new(CONTINENTS.clone()),
        Arc::new(EROSION.clone()),
        Arc::new(RIDGES.clone()),
        Arc::new(RIDGES_FOLDED.clone()),
        false,
    ))));

    let jaggedness =
        DensityFunction::Spline(SplineFunction::new(Arc::new(create_jaggedness_spline(
            Arc::new(CONTINENTS.clone()),
            Arc::new(EROSION.clone()),
            Arc::new(RIDGES.clone()),
            Arc::new(RIDGES_FOLDED.clone()),
            false,
        ))));

    let depth = DensityFunction::ClampedY(YClampedFunction::new(-64, 320, 1.564, -1.5f64))
        .add(offset);

    let density1 = jaggedness.mul(jagged_noise.half_negative());
    let density2 = DensityFunction::Constant(ConstantFunction::new(4f64))
        .mul(depth.add(density1).mul(factor).quarter_negative());

    density2.add(BASE_3D_NOISE.clone())
});

pub static FINAL_DENSITY: BuiltTree = LazyLock::new(|| {
    SLOPED_CHEESE
        .clamp(-64f64, 64f64)
        .mul_const(0.64f64)
        .squeeze()
        .cache_once()
});

pub fn noise_params(key: &str) -> Option<&'static DoublePerlinNoiseParameters> {
    match key {
        "minecraft:offset" => Some(&builtin_noise_params::OFFSET),
        "minecraft:continentalness" => Some(&builtin_noise_params::CONTINENTALNESS),
        "minecraft:erosion" => Some(&builtin_noise_params::EROSION),
        "minecraft:ridge" => Some(&builtin_noise_params::RIDGE),
        "minecraft:jagged" => Some(&builtin_noise_params::JAGGED),
        _ => None,
    }
}

/// Resolves a named density tree to an unbound copy.
pub fn density_function(key: &str) -> Option<DensityFunction> {
    match key {
        "minecraft:shift_x" => Some(SHIFT_X.clone()),
        "minecraft:shift_z" => Some(SHIFT_Z.clone()),
        "minecraft:continents" => Some(CONTINENTS.clone()),
        "minecraft:erosion" => Some(EROSION.clone()),
        "minecraft:ridges" => Some(RIDGES.clone()),
        "minecraft:ridges_folded" => Some(RIDGES_FOLDED.clone()),
        "minecraft:base_3d_noise" => Some(BASE_3D_NOISE.clone()),
        "minecraft:sloped_cheese" => Some(SLOPED_CHEESE.clone()),
        "minecraft:final_density" => Some(FINAL_DENSITY.clone()),
        _ => None,
    }
}

pub struct ChunkGeneratorSettings {
    pub shape: GenerationShape,
    pub sea_level: i32,
    pub default_block: BlockState,
    pub default_fluid: BlockState,
}

static OVERWORLD_SETTINGS: ChunkGeneratorSettings = ChunkGeneratorSettings {
    shape: GenerationShape::SURFACE,
    sea_level: 63,
    default_block: BlockState::STONE,
    default_fluid: BlockState::WATER,
};

pub fn generator_settings(key: &str) -> Option<&'static ChunkGeneratorSettings> {
    match key {
        "minecraft:overworld" => Some(&OVERWORLD_SETTINGS),
        _ => None,
    }
}

#[inline]
fn get_offset_value(f: f32, g: f32, h: f32) -> f32 {
    let k = 1f32 - (1f32 - g) * 0.5f32;
    let l = 0.5f32 * (1f32 - g);

    let m = (f + 1.17f32) * 0.46082947f32;
    let n = m * k - l;

    if f < h {
        n.max(-0.2222f32)
    } else {
        n.max(0f32)
    }
}

#[inline]
fn offset_derivative(f: f32, g: f32, h: f32, i: f32) -> f32 {
    (g - f) / (i - h)
}

fn ridge_offset_spline(
    ridges: Arc<DensityFunction>,
    target: f32,
    amplifier: FloatAmplifier,
) -> Spline {
    let i = get_offset_value(-1f32, target, -0.7f32);
    let k = get_offset_value(1f32, target, -0.7f32);
    let n = offset_derivative(i, k, -1f32, 1f32);

    SplineBuilder::new(ridges, amplifier)
        .add_value(-1f32, i, n)
        .add_value(1f32, k, n)
        .build()
}

fn continental_offset_spline(
    erosion: Arc<DensityFunction>,
    ridges: Arc<DensityFunction>,
    low: f32,
    mid: f32,
    high: f32,
    amplifier: FloatAmplifier,
) -> Spline {
    let spline = ridge_offset_spline(ridges.clone(), lerp_32(low, 0.6f32, 1.5f32), amplifier.clone());
    let spline2 = ridge_offset_spline(ridges.clone(), lerp_32(low, 0.6f32, 1f32), amplifier.clone());
    let spline3 = ridge_offset_spline(ridges.clone(), mid, amplifier.clone());
    let spline4 = ridge_offset_spline(ridges, high, amplifier.clone());

    SplineBuilder::new(erosion, amplifier)
        .add_spline(-0.85f32, SplineValue::Spline(spline), 0f32)
        .add_spline(-0.7f32, SplineValue::Spline(spline2), 0f32)
        .add_spline(-0.4f32, SplineValue::Spline(spline3), 0f32)
        .add_spline(0.7f32, SplineValue::Spline(spline4), 0f32)
        .build()
}

fn create_offset_spline(
    continents: Arc<DensityFunction>,
    erosion: Arc<DensityFunction>,
    ridges: Arc<DensityFunction>,
    amplified: bool,
) -> Spline {
    let amplification = if amplified {
        FloatAmplifier::Amplifier
    } else {
        FloatAmplifier::Identity
    };

    let spline = continental_offset_spline(
        erosion.clone(),
        ridges.clone(),
        0.132f32,
        0f32,
        -0.03f32,
        amplification.clone(),
    );
    let spline2 = continental_offset_spline(
        erosion.clone(),
        ridges.clone(),
        0.1f32,
        0.01f32,
        -0.03f32,
        amplification.clone(),
    );
    let spline3 = continental_offset_spline(
        erosion,
        ridges,
        1f32,
        0.01f32,
        0.01f32,
        amplification.clone(),
    );

    SplineBuilder::new(continents, amplification)
        .add_value(-1.1f32, 0.044f32, 0f32)
        .add_value(-1.02f32, -0.2222f32, 0f32)
        .add_value(-0.51f32, -0.2222f32, 0f32)
        .add_value(-0.44f32, -0.12f32, 0f32)
        .add_value(-0.18f32, -0.12f32, 0f32)
        .add_spline(-0.16f32, SplineValue::Spline(spline.clone()), 0f32)
        .add_spline(-0.15f32, SplineValue::Spline(spline), 0f32)
        .add_spline(-0.1f32, SplineValue::Spline(spline2), 0f32)
        .add_spline(1f32, SplineValue::Spline(spline3), 0f32)
        .build()
}

fn erosion_factor_spline(
    erosion: Arc<DensityFunction>,
    ridges: Arc<DensityFunction>,
    ridges_folded: Arc<DensityFunction>,
    value: f32,
    amplifier: FloatAmplifier,
) -> Spline {
    let ridge_spline = SplineBuilder::new(ridges.clone(), amplifier.clone())
        .add_value(-0.2f32, 6.3f32, 0f32)
        .add_value(0.2f32, value, 0f32)
        .build();

    let shattered = SplineBuilder::new(ridges_folded, amplifier.clone())
        .add_spline(-0.7f32, SplineValue::Spline(ridge_spline.clone()), 0f32)
        .add_value(-0.15f32, 1.37f32, 0f32)
        .build();

    SplineBuilder::new(erosion, amplifier.clone())
        .add_spline(-0.6f32, SplineValue::Spline(ridge_spline.clone()), 0f32)
        .add_spline(
            -0.5f32,
            SplineValue::Spline(
                SplineBuilder::new(ridges, amplifier)
                    .add_value(-0.05f32, 6.3f32, 0f32)
                    .add_value(0.05f32, 2.67f32, 0f32)
                    .build(),
            ),
            0f32,
        )
        .add_spline(-0.35f32, SplineValue::Spline(ridge_spline.clone()), 0f32)
        .add_spline(0.03f32, SplineValue::Spline(ridge_spline), 0f32)
        .add_spline(0.45f32, SplineValue::Spline(shattered.clone()), 0f32)
        .add_spline(0.55f32, SplineValue::Spline(shattered), 0f32)
        .add_value(0.62f32, value, 0f32)
        .build()
}

fn create_factor_spline(
    continents: Arc<DensityFunction>,
    erosion: Arc<DensityFunction>,
    ridges: Arc<DensityFunction>,
    ridges_folded: Arc<DensityFunction>,
    amplified: bool,
) -> Spline {
    let amplification = if amplified {
        FloatAmplifier::Amplifier
    } else {
        FloatAmplifier::Identity
    };

    SplineBuilder::new(continents, FloatAmplifier::Identity)
        .add_value(-0.19f32, 3.95f32, 0f32)
        .add_spline(
            -0.15f32,
            SplineValue::Spline(erosion_factor_spline(
                erosion.clone(),
                ridges.clone(),
                ridges_folded.clone(),
                6.25f32,
                FloatAmplifier::Identity,
            )),
            0f32,
        )
        .add_spline(
            -0.1f32,
            SplineValue::Spline(erosion_factor_spline(
                erosion.clone(),
                ridges.clone(),
                ridges_folded.clone(),
                5.47f32,
                amplification.clone(),
            )),
            0f32,
        )
        .add_spline(
            0.03f32,
            SplineValue::Spline(erosion_factor_spline(
                erosion.clone(),
                ridges.clone(),
                ridges_folded.clone(),
                5.08f32,
                amplification.clone(),
            )),
            0f32,
        )
        .add_spline(
            0.06f32,
            SplineValue::Spline(erosion_factor_spline(
                erosion,
                ridges,
                ridges_folded,
                4.69f32,
                amplification,
            )),
            0f32,
        )
        .build()
}

fn peak_spline(ridges: Arc<DensityFunction>, f: f32, amplifier: FloatAmplifier) -> Spline {
    let g = 0.63f32 * f;
    let h = 0.3f32 * f;
    SplineBuilder::new(ridges, amplifier)
        .add_value(-0.01f32, g, 0f32)
        .add_value(0.01f32, h, 0f32)
        .build()
}

fn ridge_jaggedness_spline(
    ridges: Arc<DensityFunction>,
    ridges_folded: Arc<DensityFunction>,
    f: f32,
    g: f32,
    amplifier: FloatAmplifier,
) -> Spline {
    let h = peaks_valleys_noise(0.4f32);
    let i = peaks_valleys_noise(0.56666666f32);
    let j = (h + i) / 2f32;

    let mut builder = SplineBuilder::new(ridges_folded, amplifier.clone());
    let builder = builder.add_value(h, 0f32, 0f32);

    let builder = if g > 0f32 {
        builder.add_spline(
            j,
            SplineValue::Spline(peak_spline(ridges.clone(), g, amplifier.clone())),
            0f32,
        )
    } else {
        builder.add_value(j, 0f32, 0f32)
    };

    let builder = if f > 0f32 {
        builder.add_spline(
            1f32,
            SplineValue::Spline(peak_spline(ridges, f, amplifier)),
            0f32,
        )
    } else {
        builder.add_value(1f32, 0f32, 0f32)
    };

    builder.build()
}

#[allow(clippy::too_many_arguments)]
fn erosion_jaggedness_spline(
    erosion: Arc<DensityFunction>,
    ridges: Arc<DensityFunction>,
    ridges_folded: Arc<DensityFunction>,
    f: f32,
    g: f32,
    h: f32,
    i: f32,
    amplifier: FloatAmplifier,
) -> Spline {
    let spline = ridge_jaggedness_spline(
        ridges.clone(),
        ridges_folded.clone(),
        f,
        h,
        amplifier.clone(),
    );
    let spline2 = ridge_jaggedness_spline(ridges, ridges_folded, g, i, amplifier.clone());

    SplineBuilder::new(erosion, amplifier)
        .add_spline(-1f32, SplineValue::Spline(spline), 0f32)
        .add_spline(-0.78f32, SplineValue::Spline(spline2.clone()), 0f32)
        .add_spline(-0.5775f32, SplineValue::Spline(spline2), 0f32)
        .add_value(-0.375f32, 0f32, 0f32)
        .build()
}

fn create_jaggedness_spline(
    continents: Arc<DensityFunction>,
    erosion: Arc<DensityFunction>,
    ridges: Arc<DensityFunction>,
    ridges_folded: Arc<DensityFunction>,
    amplified: bool,
) -> Spline {
    let amplification = if amplified {
        FloatAmplifier::Amplifier
    } else {
        FloatAmplifier::Identity
    };

    SplineBuilder::new(continents, amplification.clone())
        .add_value(-0.11f32, 0f32, 0f32)
        .add_spline(
            0.03f32,
            SplineValue::Spline(erosion_jaggedness_spline(
                erosion.clone(),
                ridges.clone(),
                ridges_folded.clone(),
                1f32,
                0.5f32,
                0f32,
                0f32,
                amplification.clone(),
            )),
            0f32,
        )
        .add_spline(
            0.65f32,
            SplineValue::Spline(erosion_jaggedness_spline(
                erosion,
                ridges,
                ridges_folded,
                1f32,
                1f32,
                1f32,
                0f32,
                amplification,
            )),
            0f32,
        )
        .build()
}
