//! `Skyglance` - current weather and a short forecast as an HTML page
//!
//! This library looks up a location on wttr.in, turns the loosely-typed
//! report into a page model and renders it with inline SVG icons.

pub mod condition;
pub mod config;
pub mod error;
pub mod icons;
pub mod models;
pub mod render;
pub mod telemetry;
pub mod transform;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use condition::{IconCategory, classify};
pub use config::AppConfig;
pub use error::SkyglanceError;
pub use models::{ForecastEntry, RawWeatherPayload, ViewModel};
pub use render::PageRenderer;
pub use transform::{parse_int_or_default, transform};
pub use weather::{WeatherProvider, WttrClient};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, SkyglanceError>;
