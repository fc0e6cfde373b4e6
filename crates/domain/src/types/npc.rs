//! NPC behaviour and movement speed codes.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NpcBehavior {
    Friendly,
    Passive,
    Aggressive,
    Crafting,
    Shop,
    InnKeeper,
    Bank,
    Barber,
    GuildMaster,
    Priest,
    Lawyer,
    Trainer,
    Quest,
    Unknown(i32),
}

impl NpcBehavior {
    pub const QUEST_CODE: i32 = 15;

    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Friendly,
            1 => Self::Passive,
            2 => Self::Aggressive,
            5 => Self::Crafting,
            6 => Self::Shop,
            7 => Self::InnKeeper,
            9 => Self::Bank,
            10 => Self::Barber,
            11 => Self::GuildMaster,
            12 => Self::Priest,
            13 => Self::Lawyer,
            14 => Self::Trainer,
            Self::QUEST_CODE => Self::Quest,
            other => Self::Unknown(other),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Friendly => "Friendly",
            Self::Passive => "Passive",
            Self::Aggressive => "Aggressive",
            Self::Crafting => "Crafting",
            Self::Shop => "Shop",
            Self::InnKeeper => "Inn Keeper",
            Self::Bank => "Bank",
            Self::Barber => "Barber",
            Self::GuildMaster => "Guild Master",
            Self::Priest => "Priest",
            Self::Lawyer => "Lawyer",
            Self::Trainer => "Trainer",
            Self::Quest => "Quest",
            Self::Unknown(_) => "Unknown",
        }
    }
}

impl fmt::Display for NpcBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Movement speed code. Lower numbers are faster, 0 means the spawn sets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NpcSpeed {
    Custom,
    Tier(u8),
    Fixed,
    Unknown(i32),
}

impl NpcSpeed {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Custom,
            1..=11 => Self::Tier(code as u8),
            15 => Self::Fixed,
            other => Self::Unknown(other),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Custom => "Custom",
            Self::Tier(1) => "Ultra++",
            Self::Tier(2) => "Ultra+",
            Self::Tier(3) => "Ultra",
            Self::Tier(4) => "Speedy+",
            Self::Tier(5) => "Speedy",
            Self::Tier(6) => "Fast+",
            Self::Tier(7) => "Fast",
            Self::Tier(8) => "Medium+",
            Self::Tier(9) => "Medium",
            Self::Tier(10) => "Medium-",
            Self::Tier(_) => "Slow",
            Self::Fixed => "Fixed",
            Self::Unknown(_) => "Unknown",
        }
    }
}

impl fmt::Display for NpcSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(code) => write!(f, "Unknown ({code})"),
            other => f.write_str(other.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn behavior_gaps_are_unknown() {
        assert_eq!(NpcBehavior::from_code(15), NpcBehavior::Quest);
        assert_eq!(NpcBehavior::from_code(3), NpcBehavior::Unknown(3));
        assert_eq!(NpcBehavior::from_code(7).to_string(), "Inn Keeper");
    }

    #[test]
    fn speed_labels() {
        assert_eq!(NpcSpeed::from_code(0).label(), "Custom");
        assert_eq!(NpcSpeed::from_code(1).label(), "Ultra++");
        assert_eq!(NpcSpeed::from_code(11).label(), "Slow");
        assert_eq!(NpcSpeed::from_code(15).label(), "Fixed");
        assert_eq!(NpcSpeed::from_code(12), NpcSpeed::Unknown(12));
    }
}
