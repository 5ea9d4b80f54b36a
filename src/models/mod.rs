//! Data models for Skyglance
//!
//! - Raw: the wttr.in `format=j1` payload as received
//! - View: the render-ready page model built from it

pub mod raw;
pub mod view;

pub use raw::{
    CurrentCondition, ForecastDay, HourlyCondition, NearestArea, RawWeatherPayload, TextValue,
};
pub use view::{ForecastEntry, ViewModel};
