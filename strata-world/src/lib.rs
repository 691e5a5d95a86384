pub mod aquifer;
pub mod block;
pub mod chunk;
pub mod density;
pub mod noise;
pub mod registry;
pub mod shape;

/// Blocks per chunk along each horizontal axis.
pub const CHUNK_DIM: u8 = 16;
