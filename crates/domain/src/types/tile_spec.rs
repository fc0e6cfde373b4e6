//! Special-tile codes from a map's `spec_tiles` layer.

/// Behaviour attached to a single map tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapTileSpec {
    Wall,
    ChairDown,
    ChairLeft,
    ChairRight,
    ChairUp,
    ChairDownRight,
    ChairUpLeft,
    ChairAll,
    Chest,
    GatherBlock,
    Gather,
    BankVault,
    NpcBoundary,
    Edge,
    FakeWall,
    /// Message boards, numbered 1 through 8
    Board(u8),
    Jukebox,
    Water,
    Arena,
    /// Ambient sound sources, numbered 1 through 3
    AmbientSource(u8),
    TimedSpikes,
    Spikes,
    Well,
    FishingDown,
    FishingLeft,
    FishingUp,
    FishingRight,
    Jump,
    Reserved(i32),
}

impl MapTileSpec {
    pub const CHEST_CODE: i32 = 9;

    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Wall,
            1 => Self::ChairDown,
            2 => Self::ChairLeft,
            3 => Self::ChairRight,
            4 => Self::ChairUp,
            5 => Self::ChairDownRight,
            6 => Self::ChairUpLeft,
            7 => Self::ChairAll,
            Self::CHEST_CODE => Self::Chest,
            14 => Self::GatherBlock,
            15 => Self::Gather,
            16 => Self::BankVault,
            17 => Self::NpcBoundary,
            18 => Self::Edge,
            19 => Self::FakeWall,
            20..=27 => Self::Board((code - 19) as u8),
            28 => Self::Jukebox,
            30 => Self::Water,
            32 => Self::Arena,
            33..=35 => Self::AmbientSource((code - 32) as u8),
            36 => Self::TimedSpikes,
            37 => Self::Spikes,
            38 => Self::Well,
            61 => Self::FishingDown,
            62 => Self::FishingLeft,
            63 => Self::FishingUp,
            64 => Self::FishingRight,
            81 => Self::Jump,
            other => Self::Reserved(other),
        }
    }

    pub fn is_fishing(self) -> bool {
        matches!(
            self,
            Self::FishingDown | Self::FishingLeft | Self::FishingUp | Self::FishingRight
        )
    }

    /// Tiles the player cannot walk onto.
    pub fn is_blocking(self) -> bool {
        matches!(self, Self::Wall | Self::Edge)
    }

    pub fn is_gather(self) -> bool {
        matches!(self, Self::Gather | Self::GatherBlock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_ranges_decode() {
        assert_eq!(MapTileSpec::from_code(20), MapTileSpec::Board(1));
        assert_eq!(MapTileSpec::from_code(27), MapTileSpec::Board(8));
        assert_eq!(MapTileSpec::from_code(35), MapTileSpec::AmbientSource(3));
    }

    #[test]
    fn gaps_are_reserved() {
        assert_eq!(MapTileSpec::from_code(8), MapTileSpec::Reserved(8));
        assert_eq!(MapTileSpec::from_code(29), MapTileSpec::Reserved(29));
        assert_eq!(MapTileSpec::from_code(83), MapTileSpec::Reserved(83));
    }

    #[test]
    fn categories() {
        assert!(MapTileSpec::from_code(18).is_blocking());
        assert!(MapTileSpec::from_code(0).is_blocking());
        assert!(MapTileSpec::from_code(14).is_gather());
        assert!((61..=64).all(|c| MapTileSpec::from_code(c).is_fishing()));
        assert_eq!(MapTileSpec::from_code(9), MapTileSpec::Chest);
    }
}
