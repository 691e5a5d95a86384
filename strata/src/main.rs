use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use log::LevelFilter;
use rayon::prelude::*;
use serde::Deserialize;
use thiserror::Error;

use strata_world::chunk::ProtoChunk;
use strata_world::density::seed::SeedBinder;
use strata_world::density::UnblendedNoisePos;
use strata_world::registry;
use strata_world::CHUNK_DIM;

/// One fixture to produce. `x` and `z` are chunk coordinates.
///
/// Exactly one of `registry_key` and `function` must be set: a registry key
/// (or a `function` naming a density tree) samples that tree over the chunk
/// lattice, while `function: "chunk"` runs the full grid walk and dumps the
/// block states.
#[derive(Deserialize)]
struct Descriptor {
    name: String,
    seed: i64,
    x: i32,
    z: i32,
    #[serde(default)]
    registry_key: Option<String>,
    #[serde(default)]
    function: Option<String>,
}

#[derive(Error, Debug)]
enum DriverError {
    #[error("exactly one of `registry_key` and `function` must be set")]
    BadDescriptor,
    #[error("unknown density function `{0}`")]
    UnknownFunction(String),
    #[error("unknown generator settings `{0}`")]
    UnknownSettings(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

enum Target<'a> {
    Scalar(&'a str),
    Chunk,
}

impl Descriptor {
    fn target(&self) -> Result<Target, DriverError> {
        match (self.registry_key.as_deref(), self.function.as_deref()) {
            (Some(key), None) => Ok(Target::Scalar(key)),
            (None, Some("chunk")) => Ok(Target::Chunk),
            (None, Some(key)) => Ok(Target::Scalar(key)),
            _ => Err(DriverError::BadDescriptor),
        }
    }
}

const OVERWORLD_KEY: &str = "minecraft:overworld";

/// Descriptors may name a tree by its full registry key or by the bare path,
/// so "final_density" selects "minecraft:final_density".
fn resolve_function(key: &str) -> Option<strata_world::density::DensityFunction> {
    registry::density_function(key)
        .or_else(|| registry::density_function(&format!("minecraft:{key}")))
}

/// Samples a bound density tree over the chunk's block lattice, inclusive on
/// every axis, x outer / y middle / z inner.
fn run_scalar(descriptor: &Descriptor, key: &str, out_path: &Path) -> Result<(), DriverError> {
    let function =
        resolve_function(key).ok_or_else(|| DriverError::UnknownFunction(key.to_string()))?;
    let function = SeedBinder::new(descriptor.seed as u64).bind(&function);

    let settings = registry::generator_settings(OVERWORLD_KEY)
        .ok_or_else(|| DriverError::UnknownSettings(OVERWORLD_KEY.to_string()))?;
    let shape = settings.shape;

    let start_x = descriptor.x * i32::from(CHUNK_DIM);
    let start_z = descriptor.z * i32::from(CHUNK_DIM);
    let min_y = i32::from(shape.min_y());
    let max_y = min_y + i32::from(shape.height());

    let mut rows = Vec::with_capacity(
        (CHUNK_DIM as usize + 1).pow(2) * (shape.height() as usize + 1),
    );
    for x in 0..=i32::from(CHUNK_DIM) {
        for y in min_y..=max_y {
            for z in 0..=i32::from(CHUNK_DIM) {
                let pos = UnblendedNoisePos::new(start_x + x, y, start_z + z);
                rows.push((start_x + x, y, start_z + z, function.sample(&pos)));
            }
        }
    }

    write_json(out_path, &rows)
}

/// Runs the full chunk grid walk and dumps the flat block-state-id array.
fn run_chunk(descriptor: &Descriptor, out_path: &Path) -> Result<(), DriverError> {
    let settings = registry::generator_settings(OVERWORLD_KEY)
        .ok_or_else(|| DriverError::UnknownSettings(OVERWORLD_KEY.to_string()))?;

    let mut chunk = ProtoChunk::new(
        descriptor.x,
        descriptor.z,
        descriptor.seed as u64,
        settings,
    );
    chunk.populate_noise();

    let states = chunk
        .blocks()
        .iter()
        .map(|state| state.state_id)
        .collect::<Vec<u16>>();

    write_json(out_path, &states)
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), DriverError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}

fn run_case(descriptor: &Descriptor, out_dir: &Path) -> Result<(), DriverError> {
    let out_path: PathBuf = out_dir.join(format!("{}.json", descriptor.name));
    match descriptor.target()? {
        Target::Scalar(key) => run_scalar(descriptor, key, &out_path),
        Target::Chunk => run_chunk(descriptor, &out_path),
    }
}

fn run(input: &Path, out_dir: &Path) -> Result<usize, DriverError> {
    let reader = BufReader::new(File::open(input)?);
    let descriptors: Vec<Descriptor> = serde_json::from_reader(reader)?;
    fs::create_dir_all(out_dir)?;

    let failed = descriptors
        .par_iter()
        .filter(|descriptor| match run_case(descriptor, out_dir) {
            Ok(()) => {
                log::info!("wrote {}.json", descriptor.name);
                false
            }
            Err(err) => {
                log::warn!("skipping {}: {}", descriptor.name, err);
                true
            }
        })
        .count();

    Ok(failed)
}

fn init_logger() {
    simple_logger::SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()
        .unwrap();
}

fn main() -> ExitCode {
    init_logger();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        log::error!("usage: {} <descriptors.json> <output-dir>", args[0]);
        return ExitCode::FAILURE;
    }

    match run(Path::new(&args[1]), Path::new(&args[2])) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(failed) => {
            log::error!("{failed} case(s) failed");
            ExitCode::FAILURE
        }
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
