//! Weather condition classification
//!
//! Maps free-text descriptions such as "Patchy light rain" onto the closed
//! set of icon categories. Rules are checked in order and the first match
//! wins, so "Thundery showers" lands on thunderstorm before rain is tried.

use std::fmt;
use std::str::FromStr;

/// Icon category for a weather condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconCategory {
    Clear,
    PartlyCloudy,
    Cloudy,
    Overcast,
    Rain,
    HeavyRain,
    Thunderstorm,
    Snow,
    Fog,
    Wind,
    Default,
}

impl IconCategory {
    /// Every category, in declaration order
    pub const ALL: [IconCategory; 11] = [
        IconCategory::Clear,
        IconCategory::PartlyCloudy,
        IconCategory::Cloudy,
        IconCategory::Overcast,
        IconCategory::Rain,
        IconCategory::HeavyRain,
        IconCategory::Thunderstorm,
        IconCategory::Snow,
        IconCategory::Fog,
        IconCategory::Wind,
        IconCategory::Default,
    ];

    /// Stable identifier of the category
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            IconCategory::Clear => "clear",
            IconCategory::PartlyCloudy => "partlyCloudy",
            IconCategory::Cloudy => "cloudy",
            IconCategory::Overcast => "overcast",
            IconCategory::Rain => "rain",
            IconCategory::HeavyRain => "heavyRain",
            IconCategory::Thunderstorm => "thunderstorm",
            IconCategory::Snow => "snow",
            IconCategory::Fog => "fog",
            IconCategory::Wind => "wind",
            IconCategory::Default => "default",
        }
    }
}

impl fmt::Display for IconCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned by `IconCategory::from_str` for names outside the closed set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown icon category '{}'", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for IconCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IconCategory::ALL
            .into_iter()
            .find(|category| category.name() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Ordered keyword rules. Order is significant.
const RULES: &[(&[&str], IconCategory)] = &[
    (&["clear", "sunny"], IconCategory::Clear),
    (&["partly", "partial"], IconCategory::PartlyCloudy),
    (&["overcast"], IconCategory::Overcast),
    (&["cloudy", "cloud"], IconCategory::Cloudy),
    (&["thunder", "storm"], IconCategory::Thunderstorm),
    (&["heavy rain", "downpour"], IconCategory::HeavyRain),
    (&["rain", "shower", "drizzle"], IconCategory::Rain),
    (&["snow", "blizzard"], IconCategory::Snow),
    (&["fog", "mist", "haze"], IconCategory::Fog),
    (&["wind"], IconCategory::Wind),
];

/// Classify a weather description, case-insensitively
#[must_use]
pub fn classify(description: &str) -> IconCategory {
    let lowered = description.to_lowercase();

    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map_or(IconCategory::Default, |(_, category)| *category)
}
