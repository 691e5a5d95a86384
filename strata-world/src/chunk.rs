use std::mem;

use crate::aquifer::{
    BlockStateSampler, FluidLevel, FluidLevelSampler, SeaLevelAquiferSampler,
    StandardChunkFluidLevelSampler,
};
use crate::block::BlockState;
use crate::density::seed::SeedBinder;
use crate::density::{DensityFunction, UnblendedNoisePos};
use crate::noise::lerp;
use crate::registry::{self, ChunkGeneratorSettings};
use crate::shape::GenerationShape;
use crate::CHUNK_DIM;

/// Walks the density tree over a chunk on the coarse cell lattice and
/// trilinearly refines cell interiors. The caller drives the pass order:
/// start plane, then per cell column the corner latch and the y/x/z
/// interpolation cascade, swapping buffers between cell_x planes.
pub struct ChunkNoiseGenerator {
    final_density: DensityFunction,
    state_sampler: BlockStateSampler,
    generation_shape: GenerationShape,
    start_cell_x: i32,
    start_cell_z: i32,
    is_interpolating: bool,

    start_buf: Box<[f64]>,
    end_buf: Box<[f64]>,

    first_pass: [f64; 8],
    second_pass: [f64; 4],
    third_pass: [f64; 2],
    result: f64,
}

impl ChunkNoiseGenerator {
    pub fn new(
        final_density: DensityFunction,
        state_sampler: BlockStateSampler,
        generation_shape: GenerationShape,
        start_block_x: i32,
        start_block_z: i32,
    ) -> Self {
        let horizontal_cell_block_count = generation_shape.horizontal_cell_block_count();
        let buf_len = (generation_shape.vertical_cell_count() as usize + 1)
            * (generation_shape.horizontal_cell_count() as usize + 1);

        Self {
            final_density,
            state_sampler,
            generation_shape,
            start_cell_x: start_block_x / horizontal_cell_block_count as i32,
            start_cell_z: start_block_z / horizontal_cell_block_count as i32,
            is_interpolating: false,
            start_buf: vec![0f64; buf_len].into(),
            end_buf: vec![0f64; buf_len].into(),
            first_pass: [0f64; 8],
            second_pass: [0f64; 4],
            third_pass: [0f64; 2],
            result: 0f64,
        }
    }

    fn yz_to_buf_index(&self, cell_y: u16, cell_z: u8) -> usize {
        cell_z as usize * (self.vertical_cell_count() as usize + 1) + cell_y as usize
    }

    fn minimum_cell_y(&self) -> i32 {
        self.min_y() as i32 / self.vertical_cell_block_count() as i32
    }

    fn sample_density(&mut self, start: bool, current_cell_x: i32) {
        let block_x = current_cell_x * self.horizontal_cell_block_count() as i32;

        for cell_z in 0..=self.horizontal_cell_count() {
            let block_z = (self.start_cell_z + cell_z as i32)
                * self.horizontal_cell_block_count() as i32;

            for cell_y in 0..=self.vertical_cell_count() {
                let block_y = (self.minimum_cell_y() + cell_y as i32)
                    * self.vertical_cell_block_count() as i32;

                let pos = UnblendedNoisePos::new(block_x, block_y, block_z);
                let density = self.final_density.sample(&pos);

                let index = self.yz_to_buf_index(cell_y, cell_z);
                if start {
                    self.start_buf[index] = density;
                } else {
                    self.end_buf[index] = density;
                }
            }
        }
    }

    pub fn sample_start_density(&mut self) {
        assert!(!self.is_interpolating);
        self.is_interpolating = true;
        self.sample_density(true, self.start_cell_x);
    }

    pub fn sample_end_density(&mut self, cell_x: u8) {
        self.sample_density(false, self.start_cell_x + cell_x as i32 + 1);
    }

    pub fn on_sampled_cell_corners(&mut self, cell_y: u16, cell_z: u8) {
        self.first_pass[0] = self.start_buf[self.yz_to_buf_index(cell_y, cell_z)];
        self.first_pass[1] = self.start_buf[self.yz_to_buf_index(cell_y, cell_z + 1)];
        self.first_pass[4] = self.end_buf[self.yz_to_buf_index(cell_y, cell_z)];
        self.first_pass[5] = self.end_buf[self.yz_to_buf_index(cell_y, cell_z + 1)];
        self.first_pass[2] = self.start_buf[self.yz_to_buf_index(cell_y + 1, cell_z)];
        self.first_pass[3] = self.start_buf[self.yz_to_buf_index(cell_y + 1, cell_z + 1)];
        self.first_pass[6] = self.end_buf[self.yz_to_buf_index(cell_y + 1, cell_z)];
        self.first_pass[7] = self.end_buf[self.yz_to_buf_index(cell_y + 1, cell_z + 1)];
    }

    pub fn interpolate_y(&mut self, delta: f64) {
        self.second_pass[0] = lerp(delta, self.first_pass[0], self.first_pass[2]);
        self.second_pass[2] = lerp(delta, self.first_pass[4], self.first_pass[6]);
        self.second_pass[1] = lerp(delta, self.first_pass[1], self.first_pass[3]);
        self.second_pass[3] = lerp(delta, self.first_pass[5], self.first_pass[7]);
    }

    pub fn interpolate_x(&mut self, delta: f64) {
        self.third_pass[0] = lerp(delta, self.second_pass[0], self.second_pass[2]);
        self.third_pass[1] = lerp(delta, self.second_pass[1], self.second_pass[3]);
    }

    pub fn interpolate_z(&mut self, delta: f64) {
        self.result = lerp(delta, self.third_pass[0], self.third_pass[1]);
    }

    pub fn swap_buffers(&mut self) {
        mem::swap(&mut self.start_buf, &mut self.end_buf);
    }

    pub fn stop_interpolation(&mut self) {
        assert!(self.is_interpolating);
        self.is_interpolating = false;
    }

    /// Resolves the interpolated density at `pos` to a block, or `None` when
    /// the position is solid.
    pub fn sample_block_state(&self, pos: &UnblendedNoisePos) -> Option<BlockState> {
        self.state_sampler.sample(pos, self.result)
    }

    pub fn horizontal_cell_block_count(&self) -> u8 {
        self.generation_shape.horizontal_cell_block_count()
    }

    pub fn vertical_cell_block_count(&self) -> u8 {
        self.generation_shape.vertical_cell_block_count()
    }

    pub fn horizontal_cell_count(&self) -> u8 {
        self.generation_shape.horizontal_cell_count()
    }

    pub fn vertical_cell_count(&self) -> u16 {
        self.generation_shape.vertical_cell_count()
    }

    pub fn min_y(&self) -> i8 {
        self.generation_shape.min_y()
    }

    pub fn height(&self) -> u16 {
        self.generation_shape.height()
    }
}

pub struct ProtoChunk {
    chunk_x: i32,
    chunk_z: i32,
    sampler: ChunkNoiseGenerator,
    default_block: BlockState,
    /// Indexed as height * 16 * x + 16 * y + z, relative to
    /// (start_block_x, min_y, start_block_z).
    flat_block_map: Vec<BlockState>,
}

impl ProtoChunk {
    pub fn new(chunk_x: i32, chunk_z: i32, seed: u64, settings: &ChunkGeneratorSettings) -> Self {
        let shape = settings.shape;

        let final_density = SeedBinder::new(seed).bind(&registry::FINAL_DENSITY);

        let fluid_levels = StandardChunkFluidLevelSampler::new(
            FluidLevel::new(settings.sea_level, settings.default_fluid),
            FluidLevel::new((-54i32).min(settings.sea_level), BlockState::LAVA),
        );
        let state_sampler = BlockStateSampler::Aquifer(SeaLevelAquiferSampler::new(
            FluidLevelSampler::Chunk(fluid_levels),
        ));

        let sampler = ChunkNoiseGenerator::new(
            final_density,
            state_sampler,
            shape,
            chunk_x * CHUNK_DIM as i32,
            chunk_z * CHUNK_DIM as i32,
        );

        Self {
            chunk_x,
            chunk_z,
            sampler,
            default_block: settings.default_block,
            flat_block_map: vec![
                BlockState::AIR;
                CHUNK_DIM as usize * CHUNK_DIM as usize * shape.height() as usize
            ],
        }
    }

    pub fn with_sampler(
        chunk_x: i32,
        chunk_z: i32,
        sampler: ChunkNoiseGenerator,
        default_block: BlockState,
    ) -> Self {
        let height = sampler.height() as usize;
        Self {
            chunk_x,
            chunk_z,
            sampler,
            default_block,
            flat_block_map: vec![BlockState::AIR; CHUNK_DIM as usize * CHUNK_DIM as usize * height],
        }
    }

    pub fn blocks(&self) -> &[BlockState] {
        &self.flat_block_map
    }

    #[inline]
    fn local_pos_to_index(&self, local_x: i32, local_y: i32, local_z: i32) -> usize {
        assert!(local_x >= 0 && local_x <= 15);
        assert!(local_y >= 0 && local_y < self.sampler.height() as i32);
        assert!(local_z >= 0 && local_z <= 15);

        self.sampler.height() as usize * CHUNK_DIM as usize * local_x as usize
            + CHUNK_DIM as usize * local_y as usize
            + local_z as usize
    }

    #[inline]
    pub fn get_block_state(&self, x: i32, y: i32, z: i32) -> BlockState {
        let local_y = y - self.sampler.min_y() as i32;
        if local_y < 0 || local_y >= self.sampler.height() as i32 {
            BlockState::AIR
        } else {
            self.flat_block_map[self.local_pos_to_index(x & 15, local_y, z & 15)]
        }
    }

    pub fn populate_noise(&mut self) {
        let horizontal_cell_block_count = self.sampler.horizontal_cell_block_count();
        let vertical_cell_block_count = self.sampler.vertical_cell_block_count();

        let horizontal_cells = CHUNK_DIM / horizontal_cell_block_count;

        let min_y = self.sampler.min_y();
        let minimum_cell_y = min_y as i32 / vertical_cell_block_count as i32;
        let cell_height = self.sampler.height() / vertical_cell_block_count as u16;

        self.sampler.sample_start_density();
        for cell_x in 0..horizontal_cells {
            self.sampler.sample_end_density(cell_x);

            for cell_z in 0..horizontal_cells {
                for cell_y in (0..cell_height).rev() {
                    self.sampler.on_sampled_cell_corners(cell_y, cell_z);
                    for local_y in (0..vertical_cell_block_count).rev() {
                        let block_y = (minimum_cell_y + cell_y as i32)
                            * vertical_cell_block_count as i32
                            + local_y as i32;
                        let delta_y = local_y as f64 / vertical_cell_block_count as f64;
                        self.sampler.interpolate_y(delta_y);

                        for local_x in 0..horizontal_cell_block_count {
                            let block_x = self.start_block_x()
                                + cell_x as i32 * horizontal_cell_block_count as i32
                                + local_x as i32;
                            let delta_x = local_x as f64 / horizontal_cell_block_count as f64;
                            self.sampler.interpolate_x(delta_x);

                            for local_z in 0..horizontal_cell_block_count {
                                let block_z = self.start_block_z()
                                    + cell_z as i32 * horizontal_cell_block_count as i32
                                    + local_z as i32;
                                let delta_z = local_z as f64 / horizontal_cell_block_count as f64;
                                self.sampler.interpolate_z(delta_z);

                                let pos = UnblendedNoisePos::new(block_x, block_y, block_z);
                                let block_state = self
                                    .sampler
                                    .sample_block_state(&pos)
                                    .unwrap_or(self.default_block);

                                let index = self.local_pos_to_index(
                                    block_x & 15,
                                    block_y - min_y as i32,
                                    block_z & 15,
                                );
                                self.flat_block_map[index] = block_state;
                            }
                        }
                    }
                }
            }

            self.sampler.swap_buffers();
        }
        self.sampler.stop_interpolation();
    }

    fn start_block_x(&self) -> i32 {
        self.chunk_x * CHUNK_DIM as i32
    }

    fn start_block_z(&self) -> i32 {
        self.chunk_z * CHUNK_DIM as i32
    }
}
