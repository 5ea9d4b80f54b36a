//! Page model handed to the template

use serde::Serialize;

use crate::SkyglanceError;

/// Everything the page template needs for one request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewModel {
    /// "area, country"
    pub location: String,
    /// "15°C (59°F)"
    pub temperature: String,
    pub description: String,
    /// Inline SVG markup, rendered unescaped
    pub weather_icon: String,
    pub feels_like: String,
    pub humidity: String,
    pub wind: String,
    pub visibility: String,
    pub forecast: Vec<ForecastEntry>,
    /// Banner text shown above the form
    pub error: Option<String>,
    pub has_data: bool,
}

/// One day of the short forecast
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForecastEntry {
    /// "Today" or an abbreviated weekday such as "Fri"
    pub day: String,
    pub icon: String,
    /// "14° / 7°"
    pub temperature: String,
    /// Condition taken from the middle hour of the day
    pub description: String,
}

impl ViewModel {
    /// Landing page state: form only, no banner
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Form plus an error banner carrying the user-facing message
    #[must_use]
    pub fn from_error(error: &SkyglanceError) -> Self {
        Self {
            error: Some(error.user_message()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{MSG_EMPTY_LOCATION, MSG_INVALID_DATA};

    #[test]
    fn test_empty_has_no_data_and_no_error() {
        let view = ViewModel::empty();
        assert!(!view.has_data);
        assert!(view.error.is_none());
        assert!(view.forecast.is_empty());
    }

    #[test]
    fn test_from_error_uses_user_message() {
        let view = ViewModel::from_error(&SkyglanceError::EmptyLocation);
        assert_eq!(view.error.as_deref(), Some(MSG_EMPTY_LOCATION));
        assert!(!view.has_data);

        let view = ViewModel::from_error(&SkyglanceError::validation("missing location data"));
        assert_eq!(view.error.as_deref(), Some(MSG_INVALID_DATA));
        assert!(view.location.is_empty());
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(ViewModel::empty()).unwrap();
        assert_eq!(json["has_data"], serde_json::json!(false));
        assert!(json["error"].is_null());
        assert!(json["weather_icon"].is_string());
    }
}
