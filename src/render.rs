//! HTML page rendering with Tera
//!
//! The single page template is compiled once at startup and shared
//! read-only between requests. Auto-escaping is on; only icon markup is
//! marked `safe` in the template.

use std::error::Error as _;

use tera::{Context, Tera};
use tracing::debug;

use crate::models::ViewModel;
use crate::{Result, SkyglanceError};

const PAGE_TEMPLATE: &str = "weather.html";
const PAGE_SOURCE: &str = include_str!("../templates/weather.html");

/// Compiled page template plus page-level settings
#[derive(Debug)]
pub struct PageRenderer {
    tera: Tera,
    default_location: String,
}

impl PageRenderer {
    /// Compile the embedded page template
    pub fn new(default_location: impl Into<String>) -> Result<Self> {
        Self::from_source(PAGE_SOURCE, default_location)
    }

    pub(crate) fn from_source(source: &str, default_location: impl Into<String>) -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(PAGE_TEMPLATE, source)
            .map_err(|e| SkyglanceError::render(format!("failed to compile template: {e}")))?;

        Ok(Self {
            tera,
            default_location: default_location.into(),
        })
    }

    /// Render the page for a view model
    pub fn render(&self, view: &ViewModel) -> Result<String> {
        let mut context = Context::from_serialize(view)
            .map_err(|e| SkyglanceError::render(format!("failed to build context: {e}")))?;
        context.insert("default_location", &self.default_location);

        let html = self
            .tera
            .render(PAGE_TEMPLATE, &context)
            .map_err(|e| SkyglanceError::render(describe(&e)))?;

        debug!(bytes = html.len(), has_data = view.has_data, "Rendered page");
        Ok(html)
    }
}

/// Tera nests the useful detail in the error source chain
fn describe(error: &tera::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
