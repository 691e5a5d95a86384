use thiserror::Error;

use crate::CHUNK_DIM;

#[derive(Error, Debug)]
pub enum ShapeError {
    #[error("height {0} is not a multiple of the vertical cell size")]
    UnalignedHeight(u16),
    #[error("chunk width is not a multiple of the horizontal cell size")]
    UnalignedWidth,
}

/// Vertical extent and cell sizing for noise sampling.
///
/// `horizontal_size` and `vertical_size` are biome-scaled; the block size of a
/// cell is four times that.
#[derive(Clone, Copy)]
pub struct GenerationShape {
    min_y: i8,
    height: u16,
    /// Max: 4
    horizontal_size: u8,
    /// Max: 4
    vertical_size: u8,
}

impl GenerationShape {
    pub const SURFACE: Self = Self {
        min_y: -64,
        height: 384,
        horizontal_size: 1,
        vertical_size: 2,
    };

    pub fn new(
        min_y: i8,
        height: u16,
        horizontal_size: u8,
        vertical_size: u8,
    ) -> Result<Self, ShapeError> {
        let shape = Self {
            min_y,
            height,
            horizontal_size,
            vertical_size,
        };

        if height % shape.vertical_cell_block_count() as u16 != 0 {
            return Err(ShapeError::UnalignedHeight(height));
        }
        if CHUNK_DIM % shape.horizontal_cell_block_count() != 0 {
            return Err(ShapeError::UnalignedWidth);
        }

        Ok(shape)
    }

    pub fn vertical_cell_block_count(&self) -> u8 {
        self.vertical_size * 4
    }

    pub fn horizontal_cell_block_count(&self) -> u8 {
        self.horizontal_size * 4
    }

    pub fn vertical_cell_count(&self) -> u16 {
        self.height / self.vertical_cell_block_count() as u16
    }

    pub fn horizontal_cell_count(&self) -> u8 {
        CHUNK_DIM / self.horizontal_cell_block_count()
    }

    pub fn min_y(&self) -> i8 {
        self.min_y
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn max_y(&self) -> i32 {
        self.min_y as i32 + self.height as i32
    }
}
