//! Seasonal ingredient lookup.
//!
//! Season keys are matched exactly; no trimming or case folding is applied.

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::error::ToolError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// All seasons in calendar order
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Autumn, Season::Winter];

    /// The literal key callers must pass to select this season
    pub fn key(self) -> &'static str {
        match self {
            Season::Spring => "春",
            Season::Summer => "夏",
            Season::Autumn => "秋",
            Season::Winter => "冬",
        }
    }

    pub fn ingredients(self) -> &'static [&'static str] {
        match self {
            Season::Spring => &["アスパラガス", "新玉ねぎ", "菜の花", "たけのこ", "いちご"],
            Season::Summer => &["トマト", "なす", "きゅうり", "とうもろこし", "すいか"],
            Season::Autumn => &["さつまいも", "きのこ", "さんま", "栗", "かぼちゃ"],
            Season::Winter => &["白菜", "大根", "ほうれん草", "みかん", "牡蠣"],
        }
    }
}

impl FromStr for Season {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Season::ALL
            .into_iter()
            .find(|season| season.key() == s)
            .ok_or_else(|| ToolError::InvalidSeason(s.to_string()))
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Look up the fixed ingredient list for a season key.
pub fn lookup(season: &str) -> Result<&'static [&'static str], ToolError> {
    let season: Season = season.parse()?;
    debug!("Seasonal lookup for {:?}", season);
    Ok(season.ingredients())
}
