//! Seasons and their palette

use serde::{Deserialize, Serialize};

/// Meteorological season
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    #[default]
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Autumn, Season::Winter];

    /// Season for a calendar month (1-12) at a latitude.
    ///
    /// Northern hemisphere uses March-May as spring; the southern hemisphere
    /// is shifted by six months. Out-of-range months fall through to winter.
    pub fn from_month(month: u32, latitude: f32) -> Season {
        let northern = match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Autumn,
            _ => Season::Winter,
        };
        if latitude >= 0.0 {
            northern
        } else {
            northern.opposite()
        }
    }

    /// The season on the other hemisphere
    pub fn opposite(self) -> Season {
        match self {
            Season::Spring => Season::Autumn,
            Season::Summer => Season::Winter,
            Season::Autumn => Season::Spring,
            Season::Winter => Season::Summer,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }

    pub fn parse(s: &str) -> Option<Season> {
        Season::ALL.into_iter().find(|season| season.name().eq_ignore_ascii_case(s))
    }

    /// Grass cap color (0xRRGGBB)
    pub fn grass_color(self) -> u32 {
        match self {
            Season::Spring => 0x7CFC00,
            Season::Summer => 0x228B22,
            Season::Autumn => 0xCD853F,
            Season::Winter => 0xF5F5F5,
        }
    }

    /// Daytime sky color (0xRRGGBB)
    pub fn sky_color(self) -> u32 {
        match self {
            Season::Spring => 0x87CEEB,
            Season::Summer => 0x1E90FF,
            Season::Autumn => 0xB8860B,
            Season::Winter => 0xDCDCDC,
        }
    }
}
