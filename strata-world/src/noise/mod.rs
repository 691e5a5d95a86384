pub mod perlin;

pub mod builtin_noise_params {
    use super::perlin::DoublePerlinNoiseParameters;

    pub static OFFSET: DoublePerlinNoiseParameters =
        DoublePerlinNoiseParameters::new(-3, &[1f64; 4], "minecraft:offset");
    pub static CONTINENTALNESS: DoublePerlinNoiseParameters = DoublePerlinNoiseParameters::new(
        -9,
        &[1f64, 1f64, 2f64, 2f64, 2f64, 1f64, 1f64, 1f64, 1f64],
        "minecraft:continentalness",
    );
    pub static EROSION: DoublePerlinNoiseParameters = DoublePerlinNoiseParameters::new(
        -9,
        &[1f64, 1f64, 0f64, 1f64, 1f64],
        "minecraft:erosion",
    );
    pub static RIDGE: DoublePerlinNoiseParameters = DoublePerlinNoiseParameters::new(
        -7,
        &[1f64, 2f64, 1f64, 0f64, 0f64, 0f64],
        "minecraft:ridge",
    );
    pub static JAGGED: DoublePerlinNoiseParameters =
        DoublePerlinNoiseParameters::new(-16, &[1f64; 16], "minecraft:jagged");
}

pub fn lerp(delta: f64, start: f64, end: f64) -> f64 {
    start + delta * (end - start)
}

pub fn lerp_32(delta: f32, start: f32, end: f32) -> f32 {
    start + delta * (end - start)
}

pub fn lerp2(delta_x: f64, delta_y: f64, x0y0: f64, x1y0: f64, x0y1: f64, x1y1: f64) -> f64 {
    lerp(
        delta_y,
        lerp(delta_x, x0y0, x1y0),
        lerp(delta_x, x0y1, x1y1),
    )
}

#[allow(clippy::too_many_arguments)]
pub fn lerp3(
    delta_x: f64,
    delta_y: f64,
    delta_z: f64,
    x0y0z0: f64,
    x1y0z0: f64,
    x0y1z0: f64,
    x1y1z0: f64,
    x0y0z1: f64,
    x1y0z1: f64,
    x0y1z1: f64,
    x1y1z1: f64,
) -> f64 {
    lerp(
        delta_z,
        lerp2(delta_x, delta_y, x0y0z0, x1y0z0, x0y1z0, x1y1z0),
        lerp2(delta_x, delta_y, x0y0z1, x1y0z1, x0y1z1, x1y1z1),
    )
}

pub fn lerp_progress(value: f64, start: f64, end: f64) -> f64 {
    (value - start) / (end - start)
}

pub fn clamped_lerp(start: f64, end: f64, delta: f64) -> f64 {
    if delta < 0f64 {
        start
    } else if delta > 1f64 {
        end
    } else {
        lerp(delta, start, end)
    }
}

pub fn clamped_map(value: f64, old_start: f64, old_end: f64, new_start: f64, new_end: f64) -> f64 {
    clamped_lerp(new_start, new_end, lerp_progress(value, old_start, old_end))
}

pub(crate) struct Gradient {
    x: i32,
    y: i32,
    z: i32,
}

impl Gradient {
    #[inline]
    pub(crate) fn dot(&self, x: f64, y: f64, z: f64) -> f64 {
        self.x as f64 * x + self.y as f64 * y + self.z as f64 * z
    }
}

pub(crate) const GRADIENTS: [Gradient; 16] = [
    Gradient { x: 1, y: 1, z: 0 },
    Gradient { x: -1, y: 1, z: 0 },
    Gradient { x: 1, y: -1, z: 0 },
    Gradient { x: -1, y: -1, z: 0 },
    Gradient { x: 1, y: 0, z: 1 },
    Gradient { x: -1, y: 0, z: 1 },
    Gradient { x: 1, y: 0, z: -1 },
    Gradient { x: -1, y: 0, z: -1 },
    Gradient { x: 0, y: 1, z: 1 },
    Gradient { x: 0, y: -1, z: 1 },
    Gradient { x: 0, y: 1, z: -1 },
    Gradient { x: 0, y: -1, z: -1 },
    Gradient { x: 1, y: 1, z: 0 },
    Gradient { x: 0, y: -1, z: 1 },
    Gradient { x: -1, y: 1, z: 0 },
    Gradient { x: 0, y: -1, z: -1 },
];
