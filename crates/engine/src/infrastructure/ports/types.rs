//! Types shared by several ports.

use std::fmt;

/// One of the seven dataset collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    Classes,
    Items,
    Maps,
    Npcs,
    Quests,
    Shops,
    Spells,
}

impl CollectionKind {
    /// Order in which a refresh fetches and rewrites the collections.
    pub const REFRESH_ORDER: [CollectionKind; 7] = [
        Self::Classes,
        Self::Items,
        Self::Maps,
        Self::Npcs,
        Self::Spells,
        Self::Quests,
        Self::Shops,
    ];

    /// File stem on disk and path segment on the upstream API.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Classes => "classes",
            Self::Items => "items",
            Self::Maps => "maps",
            Self::Npcs => "npcs",
            Self::Quests => "quests",
            Self::Shops => "shops",
            Self::Spells => "spells",
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.json", self.as_str())
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
