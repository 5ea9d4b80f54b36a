//! Raw payload to view model transformation
//!
//! Validation runs before any field is read. Once the three required
//! sections are present every leaf is optional: missing text becomes an
//! empty string and unparsable numbers fall back to zero.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::icons::icon_for_description;
use crate::models::raw::first_value;
use crate::models::{ForecastDay, ForecastEntry, RawWeatherPayload, ViewModel};
use crate::{Result, SkyglanceError};

/// Forecast days shown on the page
pub const MAX_FORECAST_DAYS: usize = 3;

/// Label used for the first forecast day
pub const TODAY: &str = "Today";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an integer field, returning `default` for anything unparsable
#[must_use]
pub fn parse_int_or_default(text: &str, default: i64) -> i64 {
    text.trim().parse().unwrap_or(default)
}

/// Check the payload carries every section the page needs
pub fn validate(payload: &RawWeatherPayload) -> Result<()> {
    if payload.current_condition.is_empty() {
        return Err(SkyglanceError::validation("missing current condition data"));
    }
    if payload.nearest_area.is_empty() {
        return Err(SkyglanceError::validation("missing location data"));
    }
    if payload.forecast_days.is_empty() {
        return Err(SkyglanceError::validation("missing forecast data"));
    }
    Ok(())
}

/// Build the page model, or an error-flagged one if validation fails
#[must_use]
pub fn transform(payload: &RawWeatherPayload) -> ViewModel {
    match try_transform(payload) {
        Ok(view) => view,
        Err(err) => {
            warn!("Invalid weather data: {err}");
            ViewModel::from_error(&err)
        }
    }
}

/// Build the page model from a validated payload
pub fn try_transform(payload: &RawWeatherPayload) -> Result<ViewModel> {
    validate(payload)?;

    let current = &payload.current_condition[0];
    let area = &payload.nearest_area[0];

    let location = format!(
        "{}, {}",
        first_value(&area.area_name),
        first_value(&area.country)
    );

    let temperature = format!(
        "{}°C ({}°F)",
        parse_int_or_default(&current.temp_c, 0),
        parse_int_or_default(&current.temp_f, 0)
    );

    let description = first_value(&current.weather_desc).to_string();

    // Feels-like is passed through as text, unlike the current temperature
    let feels_like = format!("{}°C ({}°F)", current.feels_like_c, current.feels_like_f);

    let forecast = build_forecast(&payload.forecast_days);
    debug!(
        location = %location,
        forecast_days = forecast.len(),
        "Transformed weather payload"
    );

    Ok(ViewModel {
        location,
        temperature,
        weather_icon: icon_for_description(&description).to_string(),
        description,
        feels_like,
        humidity: format!("{}%", current.humidity),
        wind: format!("{} km/h {}", current.windspeed_kmph, current.winddir_16_point),
        visibility: format!("{} km", current.visibility),
        forecast,
        error: None,
        has_data: true,
    })
}

fn build_forecast(days: &[ForecastDay]) -> Vec<ForecastEntry> {
    days.iter()
        .take(MAX_FORECAST_DAYS)
        .enumerate()
        .map(|(index, day)| {
            let description = representative_condition(day).to_string();
            ForecastEntry {
                day: day_label(index, &day.date),
                icon: icon_for_description(&description).to_string(),
                temperature: format!(
                    "{}° / {}°",
                    parse_int_or_default(&day.max_temp_c, 0),
                    parse_int_or_default(&day.min_temp_c, 0)
                ),
                description,
            }
        })
        .collect()
}

/// "Today" for the first day, abbreviated weekday name after that
#[must_use]
pub fn day_label(index: usize, date: &str) -> String {
    if index == 0 {
        return TODAY.to_string();
    }

    match parse_forecast_date(date) {
        Some(parsed) => parsed.format("%a").to_string(),
        None => {
            // TODO: label unparsable dates as "Day N" once the page copy is agreed
            warn!(index, date, "Unparsable forecast date, labelling as today");
            TODAY.to_string()
        }
    }
}

/// Strict `YYYY-MM-DD`. chrono alone accepts unpadded months and days.
fn parse_forecast_date(date: &str) -> Option<NaiveDate> {
    let bytes = date.as_bytes();
    let zero_padded = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !zero_padded {
        return None;
    }
    NaiveDate::parse_from_str(date, DATE_FORMAT).ok()
}

/// Description of the middle hour, used as a stand-in for midday
#[must_use]
pub fn representative_condition(day: &ForecastDay) -> &str {
    day.hourly
        .get(day.hourly.len() / 2)
        .map_or("", |hour| first_value(&hour.weather_desc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::IconCategory;
    use crate::error::MSG_INVALID_DATA;
    use crate::icons::svg;
    use crate::models::{CurrentCondition, HourlyCondition, NearestArea, TextValue};
    use rstest::rstest;

    const SAMPLE: &str = include_str!("../tests/fixtures/wttr_sample.json");

    fn sample() -> RawWeatherPayload {
        serde_json::from_str(SAMPLE).unwrap()
    }

    fn text(value: &str) -> Vec<TextValue> {
        vec![TextValue {
            value: value.to_string(),
        }]
    }

    fn day(date: &str, descriptions: &[&str]) -> ForecastDay {
        ForecastDay {
            date: date.to_string(),
            max_temp_c: "20".to_string(),
            min_temp_c: "10".to_string(),
            hourly: descriptions
                .iter()
                .map(|d| HourlyCondition {
                    weather_desc: text(d),
                })
                .collect(),
        }
    }

    #[test]
    fn test_sample_end_to_end() {
        let view = transform(&sample());

        assert!(view.has_data);
        assert!(view.error.is_none());
        assert_eq!(view.location, "London, United Kingdom");
        assert_eq!(view.temperature, "15°C (59°F)");
        assert_eq!(view.description, "Heavy rain");
        assert_eq!(view.weather_icon, svg(IconCategory::HeavyRain));
        assert_eq!(view.feels_like, "13°C (55°F)");
        assert_eq!(view.humidity, "82%");
        assert_eq!(view.wind, "19 km/h WSW");
        assert_eq!(view.visibility, "10 km");

        let days: Vec<&str> = view.forecast.iter().map(|f| f.day.as_str()).collect();
        assert_eq!(days, ["Today", "Fri", "Sat"]);

        assert_eq!(view.forecast[0].temperature, "16° / 9°");
        assert_eq!(view.forecast[1].description, "Partly cloudy");
        assert_eq!(view.forecast[1].icon, svg(IconCategory::PartlyCloudy));
        assert_eq!(view.forecast[2].description, "Light snow");
        assert_eq!(view.forecast[2].icon, svg(IconCategory::Snow));
    }

    #[rstest]
    #[case::no_current_condition(|p: &mut RawWeatherPayload| p.current_condition.clear())]
    #[case::no_nearest_area(|p: &mut RawWeatherPayload| p.nearest_area.clear())]
    #[case::no_forecast(|p: &mut RawWeatherPayload| p.forecast_days.clear())]
    fn test_missing_section_yields_validation_error(#[case] strip: fn(&mut RawWeatherPayload)) {
        let mut payload = sample();
        strip(&mut payload);

        assert!(matches!(
            try_transform(&payload),
            Err(SkyglanceError::Validation { .. })
        ));

        let view = transform(&payload);
        assert!(!view.has_data);
        assert_eq!(view.error.as_deref(), Some(MSG_INVALID_DATA));
        assert!(view.location.is_empty());
        assert!(view.forecast.is_empty());
    }

    #[test]
    fn test_empty_payload_does_not_panic() {
        let view = transform(&RawWeatherPayload::default());
        assert!(!view.has_data);
        assert_eq!(view.error.as_deref(), Some(MSG_INVALID_DATA));
    }

    #[test]
    fn test_sparse_sections_default_to_empty_strings() {
        let payload = RawWeatherPayload {
            current_condition: vec![CurrentCondition::default()],
            nearest_area: vec![NearestArea::default()],
            forecast_days: vec![ForecastDay::default()],
        };

        let view = transform(&payload);
        assert!(view.has_data);
        assert_eq!(view.location, ", ");
        assert_eq!(view.temperature, "0°C (0°F)");
        assert_eq!(view.description, "");
        assert_eq!(view.weather_icon, svg(IconCategory::Default));
        assert_eq!(view.forecast.len(), 1);
        assert_eq!(view.forecast[0].description, "");
        assert_eq!(view.forecast[0].temperature, "0° / 0°");
    }

    #[test]
    fn test_non_numeric_temperature_defaults_to_zero() {
        let mut payload = sample();
        payload.current_condition[0].temp_c = "warm".to_string();

        let view = transform(&payload);
        assert!(view.has_data);
        assert_eq!(view.temperature, "0°C (59°F)");
    }

    #[test]
    fn test_feels_like_is_passed_through_raw() {
        let mut payload = sample();
        payload.current_condition[0].temp_c = "07".to_string();
        payload.current_condition[0].feels_like_c = "07".to_string();
        payload.current_condition[0].feels_like_f = "44.6".to_string();

        let view = transform(&payload);
        assert_eq!(view.temperature, "7°C (59°F)");
        assert_eq!(view.feels_like, "07°C (44.6°F)");
    }

    #[test]
    fn test_forecast_truncated_to_three_in_order() {
        let mut payload = sample();
        payload.forecast_days = vec![
            day("2024-03-14", &["Sunny"]),
            day("2024-03-15", &["Cloudy"]),
            day("2024-03-16", &["Mist"]),
            day("2024-03-17", &["Light rain"]),
            day("2024-03-18", &["Blizzard"]),
        ];

        let view = transform(&payload);
        let descriptions: Vec<&str> = view
            .forecast
            .iter()
            .map(|f| f.description.as_str())
            .collect();
        assert_eq!(descriptions, ["Sunny", "Cloudy", "Mist"]);
    }

    #[rstest]
    #[case(0, "2024-03-15", "Today")]
    #[case(0, "garbage", "Today")]
    #[case(1, "2024-03-15", "Fri")]
    #[case(2, "2024-03-16", "Sat")]
    #[case(2, "2024-12-25", "Wed")]
    #[case(1, "15/03/2024", "Today")]
    #[case(1, "", "Today")]
    #[case(1, "2024-3-5", "Today")]
    #[case(1, "2024-03-5", "Today")]
    #[case(1, "+2024-03-15", "Today")]
    #[case(1, "2024-02-30", "Today")]
    #[case(1, "2024-03-05", "Tue")]
    fn test_day_label(#[case] index: usize, #[case] date: &str, #[case] expected: &str) {
        assert_eq!(day_label(index, date), expected);
    }

    #[test]
    fn test_middle_hour_selection() {
        let four = day("2024-03-15", &["Sunny", "Cloudy", "Mist", "Light rain"]);
        assert_eq!(representative_condition(&four), "Mist");

        let five = day("2024-03-15", &["a", "b", "c", "d", "e"]);
        assert_eq!(representative_condition(&five), "c");

        let one = day("2024-03-15", &["Overcast"]);
        assert_eq!(representative_condition(&one), "Overcast");
    }

    #[test]
    fn test_middle_hour_missing_data() {
        let no_hours = day("2024-03-15", &[]);
        assert_eq!(representative_condition(&no_hours), "");

        let mut blank_hour = day("2024-03-15", &["Sunny", "Sunny"]);
        blank_hour.hourly[1].weather_desc.clear();
        assert_eq!(representative_condition(&blank_hour), "");
    }

    #[rstest]
    #[case("15", 15)]
    #[case("-3", -3)]
    #[case("+4", 4)]
    #[case(" 21 ", 21)]
    #[case("", 0)]
    #[case("12.5", 0)]
    #[case("n/a", 0)]
    fn test_parse_int_or_default(#[case] input: &str, #[case] expected: i64) {
        assert_eq!(parse_int_or_default(input, 0), expected);
    }

    #[test]
    fn test_transform_is_deterministic() {
        let payload = sample();
        assert_eq!(transform(&payload), transform(&payload));
    }
}
