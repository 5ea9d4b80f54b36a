//! Inline SVG icons, one per condition category

use crate::condition::{IconCategory, classify};

const CLEAR: &str = include_str!("../assets/icons/clear.svg");
const PARTLY_CLOUDY: &str = include_str!("../assets/icons/partly_cloudy.svg");
const CLOUDY: &str = include_str!("../assets/icons/cloudy.svg");
const OVERCAST: &str = include_str!("../assets/icons/overcast.svg");
const RAIN: &str = include_str!("../assets/icons/rain.svg");
const HEAVY_RAIN: &str = include_str!("../assets/icons/heavy_rain.svg");
const THUNDERSTORM: &str = include_str!("../assets/icons/thunderstorm.svg");
const SNOW: &str = include_str!("../assets/icons/snow.svg");
const FOG: &str = include_str!("../assets/icons/fog.svg");
const WIND: &str = include_str!("../assets/icons/wind.svg");
const DEFAULT: &str = include_str!("../assets/icons/default.svg");

/// SVG markup for a category
#[must_use]
pub fn svg(category: IconCategory) -> &'static str {
    match category {
        IconCategory::Clear => CLEAR,
        IconCategory::PartlyCloudy => PARTLY_CLOUDY,
        IconCategory::Cloudy => CLOUDY,
        IconCategory::Overcast => OVERCAST,
        IconCategory::Rain => RAIN,
        IconCategory::HeavyRain => HEAVY_RAIN,
        IconCategory::Thunderstorm => THUNDERSTORM,
        IconCategory::Snow => SNOW,
        IconCategory::Fog => FOG,
        IconCategory::Wind => WIND,
        IconCategory::Default => DEFAULT,
    }
}

/// SVG markup looked up by category identifier, `default` for unknown names
#[must_use]
pub fn svg_for_name(name: &str) -> &'static str {
    match name.parse::<IconCategory>() {
        Ok(category) => svg(category),
        Err(err) => {
            tracing::warn!("{err}, using default icon");
            DEFAULT
        }
    }
}

/// Classify a description and return the matching icon markup
#[must_use]
pub fn icon_for_description(description: &str) -> &'static str {
    svg(classify(description))
}
