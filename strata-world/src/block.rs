/// A block state, identified by its id in the global palette.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BlockState {
    pub state_id: u16,
}

impl BlockState {
    pub const AIR: Self = Self { state_id: 0 };
    pub const STONE: Self = Self { state_id: 1 };
    pub const WATER: Self = Self { state_id: 86 };
    pub const LAVA: Self = Self { state_id: 102 };

    #[inline]
    pub fn is_air(&self) -> bool {
        self.state_id == Self::AIR.state_id
    }
}
