use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    Form, Router,
    extract::{State, rejection::FormRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::config::AppConfig;
use crate::error::MSG_RENDER_FAILED;
use crate::models::ViewModel;
use crate::render::PageRenderer;
use crate::transform::transform;
use crate::weather::{WeatherProvider, WttrClient};
use crate::SkyglanceError;

/// Form bodies are a single short field
const MAX_BODY_BYTES: usize = 16 * 1024;

/// Shared, read-only request state
#[derive(Clone)]
pub struct AppState {
    pub renderer: Arc<PageRenderer>,
    pub provider: Arc<dyn WeatherProvider>,
}

#[derive(Debug, Deserialize)]
pub struct LocationForm {
    #[serde(default)]
    pub location: String,
}

pub fn router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/weather", post(weather))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn home(State(state): State<AppState>) -> Response {
    render_page(&state.renderer, &ViewModel::empty())
}

/// An unreadable form body counts as no location at all
async fn weather(
    State(state): State<AppState>,
    form: Result<Form<LocationForm>, FormRejection>,
) -> Response {
    let location = match form {
        Ok(Form(form)) => form.location,
        Err(rejection) => {
            warn!("Unreadable location form ({}): {}", rejection.status(), rejection.body_text());
            String::new()
        }
    };
    let view = lookup(state.provider.as_ref(), &location).await;
    render_page(&state.renderer, &view)
}

/// Resolve a submitted location into the page model
///
/// Blank input never reaches the provider. Fetch and decode failures are
/// logged with their detail and shown to the user as one generic message.
pub async fn lookup(provider: &dyn WeatherProvider, raw_location: &str) -> ViewModel {
    let location = raw_location.trim();
    if location.is_empty() {
        return ViewModel::from_error(&SkyglanceError::EmptyLocation);
    }

    match provider.fetch(location).await {
        Ok(payload) => transform(&payload),
        Err(err) => {
            error!("Error fetching weather data for {:?}: {}", location, err);
            ViewModel::from_error(&err)
        }
    }
}

fn render_page(renderer: &PageRenderer, view: &ViewModel) -> Response {
    match renderer.render(view) {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            error!("Error executing template: {}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, MSG_RENDER_FAILED).into_response()
        }
    }
}

pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    let provider = WttrClient::new(&config.weather)?;
    let renderer = PageRenderer::new(config.server.default_location.clone())?;

    let state = AppState {
        renderer: Arc::new(renderer),
        provider: Arc::new(provider),
    };
    let app = router(state, &config.server.static_dir);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Web server running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("Shutdown signal received");
}
