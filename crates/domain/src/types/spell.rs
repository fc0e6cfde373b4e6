//! Spell classification codes.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpellType {
    Heal,
    Attack,
    Bard,
    Fishing,
    Discover,
    Unknown(i32),
}

impl SpellType {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Heal,
            1 => Self::Attack,
            2 => Self::Bard,
            3 => Self::Fishing,
            6 => Self::Discover,
            other => Self::Unknown(other),
        }
    }
}

impl fmt::Display for SpellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Heal => f.write_str("Heal"),
            Self::Attack => f.write_str("Attack"),
            Self::Bard => f.write_str("Bard"),
            Self::Fishing => f.write_str("Fishing"),
            Self::Discover => f.write_str("Discover"),
            Self::Unknown(code) => write!(f, "Unknown ({code})"),
        }
    }
}

/// Who a spell lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpellTarget {
    Other,
    Caster,
    Group,
    Unknown(i32),
}

impl SpellTarget {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Other,
            1 => Self::Caster,
            3 => Self::Group,
            other => Self::Unknown(other),
        }
    }
}

impl fmt::Display for SpellTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Other => f.write_str("Other"),
            Self::Caster => f.write_str("Self"),
            Self::Group => f.write_str("Group"),
            Self::Unknown(code) => write!(f, "Unknown ({code})"),
        }
    }
}

/// Which kind of target a spell may be cast at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpellTargetRestrict {
    Npc,
    Friendly,
    Opponent,
    Unknown(i32),
}

impl SpellTargetRestrict {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Npc,
            1 => Self::Friendly,
            2 => Self::Opponent,
            other => Self::Unknown(other),
        }
    }
}

impl fmt::Display for SpellTargetRestrict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Npc => f.write_str("Npc"),
            Self::Friendly => f.write_str("Friendly"),
            Self::Opponent => f.write_str("Opponent"),
            Self::Unknown(code) => write!(f, "Unknown ({code})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_game_client_wording() {
        assert_eq!(SpellType::from_code(6).to_string(), "Discover");
        assert_eq!(SpellType::from_code(4).to_string(), "Unknown (4)");
        assert_eq!(SpellTarget::from_code(1).to_string(), "Self");
        assert_eq!(SpellTargetRestrict::from_code(2).to_string(), "Opponent");
    }
}
