//! wttr.in `format=j1` response structures
//!
//! The upstream API sends every measurement as text. Fields are decoded
//! leniently: absent fields default, numbers become text and null becomes an
//! empty string, so only non-JSON bodies fail to decode.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Top-level payload
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawWeatherPayload {
    pub current_condition: Vec<CurrentCondition>,
    pub nearest_area: Vec<NearestArea>,
    /// Forecast days, earliest first
    #[serde(rename = "weather")]
    pub forecast_days: Vec<ForecastDay>,
}

/// Observation at request time
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CurrentCondition {
    #[serde(rename = "temp_C", deserialize_with = "lenient_text")]
    pub temp_c: String,
    #[serde(rename = "temp_F", deserialize_with = "lenient_text")]
    pub temp_f: String,
    #[serde(rename = "FeelsLikeC", deserialize_with = "lenient_text")]
    pub feels_like_c: String,
    #[serde(rename = "FeelsLikeF", deserialize_with = "lenient_text")]
    pub feels_like_f: String,
    #[serde(deserialize_with = "lenient_text")]
    pub humidity: String,
    #[serde(rename = "windspeedKmph", deserialize_with = "lenient_text")]
    pub windspeed_kmph: String,
    /// 16-point compass direction, e.g. "WSW"
    #[serde(rename = "winddir16Point", deserialize_with = "lenient_text")]
    pub winddir_16_point: String,
    #[serde(deserialize_with = "lenient_text")]
    pub visibility: String,
    #[serde(rename = "weatherDesc")]
    pub weather_desc: Vec<TextValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NearestArea {
    #[serde(rename = "areaName")]
    pub area_name: Vec<TextValue>,
    pub country: Vec<TextValue>,
}

/// One forecast day
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ForecastDay {
    /// `YYYY-MM-DD`
    #[serde(deserialize_with = "lenient_text")]
    pub date: String,
    #[serde(rename = "maxtempC", deserialize_with = "lenient_text")]
    pub max_temp_c: String,
    #[serde(rename = "mintempC", deserialize_with = "lenient_text")]
    pub min_temp_c: String,
    pub hourly: Vec<HourlyCondition>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HourlyCondition {
    #[serde(rename = "weatherDesc")]
    pub weather_desc: Vec<TextValue>,
}

/// The `{"value": "..."}` wrapper wttr.in uses for names and descriptions
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TextValue {
    #[serde(deserialize_with = "lenient_text")]
    pub value: String,
}

/// Value of the first element, empty when the sequence is empty
pub(crate) fn first_value(values: &[TextValue]) -> &str {
    values.first().map_or("", |v| v.value.as_str())
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => text,
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(flag)) => flag.to_string(),
        _ => String::new(),
    })
}
