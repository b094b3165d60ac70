//! Settings HTTP adapter.
//!
//! Makes the loaded [`Settings`] available to axum handlers:
//! - [`SettingsComponent`] is the per-request factory, stored in router state
//! - `Settings` is an extractor, so handlers take it as a plain parameter
//! - `Settings` is a response, rendered as the JSON settings tree
//!
//! [`SettingsHttpServer`] wires these into a small read-only settings API.

use axum::{
    extract::{FromRef, FromRequestParts, Path, State},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use std::convert::Infallible;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use crate::domain::errors::SettingsResult;
use crate::domain::models::Settings;

/// Resolves the loaded settings for each request.
///
/// Put it in router state directly, or embed it in a larger state struct and
/// implement `FromRef<YourState> for SettingsComponent`.
#[derive(Debug, Clone)]
pub struct SettingsComponent {
    settings: Settings,
}

impl SettingsComponent {
    /// Serve `settings` to every request.
    pub const fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Load `path`, select `environment`, and wrap the result.
    pub fn from_path(path: impl AsRef<std::path::Path>, environment: &str) -> SettingsResult<Self> {
        Settings::from_path(path, environment).map(Self::new)
    }

    /// The settings for one request. Shares the already-loaded tree.
    pub fn resolve(&self) -> Settings {
        self.settings.clone()
    }
}

impl<S> FromRequestParts<S> for Settings
where
    SettingsComponent: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Ok(SettingsComponent::from_ref(state).resolve())
    }
}

impl IntoResponse for Settings {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Configuration for the Settings HTTP Server.
#[derive(Debug, Clone)]
pub struct SettingsHttpConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Whether to enable CORS.
    pub enable_cors: bool,
}

impl Default for SettingsHttpConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 9200,
            enable_cors: false,
        }
    }
}

/// Settings HTTP Server.
pub struct SettingsHttpServer {
    component: SettingsComponent,
    config: SettingsHttpConfig,
}

impl SettingsHttpServer {
    /// Create a server over `component`.
    pub const fn new(component: SettingsComponent, config: SettingsHttpConfig) -> Self {
        Self { component, config }
    }

    /// Build the router with all endpoints.
    pub fn build_router(&self) -> Router {
        let mut router = Router::new()
            .route("/", get(index))
            .route("/settings/{*path}", get(lookup))
            .route("/health", get(health_check))
            .with_state(self.component.clone())
            .layer(TraceLayer::new_for_http());

        if self.config.enable_cors {
            router = router.layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            );
        }

        router
    }

    /// Start the server.
    pub async fn serve(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.serve_with_shutdown(std::future::pending()).await
    }

    /// Start the server with a shutdown signal.
    pub async fn serve_with_shutdown<F>(
        self,
        shutdown: F,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port).parse()?;
        let router = self.build_router();

        tracing::info!(
            environment = self.component.settings.environment(),
            "Settings HTTP server listening on {}",
            addr
        );

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;
        Ok(())
    }
}

/// Error response structure.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    code: String,
}

/// Successful lookup response.
#[derive(Debug, Serialize)]
struct LookupResponse {
    path: String,
    value: serde_json::Value,
}

/// Health check response.
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    service: String,
    environment: String,
}

/// The whole settings tree for the active environment.
async fn index(settings: Settings) -> Settings {
    settings
}

/// Dotted path lookup.
async fn lookup(settings: Settings, Path(path): Path<String>) -> Response {
    match settings.deep_get(&path) {
        Ok(Some(node)) => Json(LookupResponse {
            value: node.to_json(),
            path,
        })
        .into_response(),
        Ok(None) => {
            debug!(path = %path, "settings lookup found nothing");
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: format!("No setting at '{path}'"),
                    code: "NOT_FOUND".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            warn!(path = %path, error = %e, "settings lookup does not match settings shape");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse {
                    error: e.to_string(),
                    code: "INVALID_PATH".to_string(),
                }),
            )
                .into_response()
        }
    }
}

async fn health_check(State(component): State<SettingsComponent>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "settings-http".to_string(),
        environment: component.settings.environment().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::ConfigLoader;

    fn component() -> SettingsComponent {
        let doc = ConfigLoader::parse_str("[dev]\nport = 8080\n", "inline").unwrap();
        SettingsComponent::new(ConfigLoader::select_environment(&doc, "dev").unwrap())
    }

    #[test]
    fn test_config_default() {
        let config = SettingsHttpConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9200);
        assert!(!config.enable_cors);
    }

    #[test]
    fn test_component_resolves_same_settings() {
        let component = component();
        let first = component.resolve();
        let second = component.resolve();
        assert_eq!(first, second);
        assert_eq!(first.environment(), "dev");
    }

    #[test]
    fn test_component_clones_share_one_tree() {
        let component = component();
        let cloned = component.clone();
        assert!(std::ptr::eq(
            component.resolve().root(),
            cloned.resolve().root()
        ));
    }

    #[test]
    fn test_error_response_serialization() {
        let response = ErrorResponse {
            error: "No setting at 'a.b'".to_string(),
            code: "NOT_FOUND".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"code\":\"NOT_FOUND\""));
    }

    #[tokio::test]
    async fn test_extractor_reads_component_from_state() {
        let component = component();
        let (mut parts, ()) = axum::http::Request::new(()).into_parts();
        let settings = Settings::from_request_parts(&mut parts, &component)
            .await
            .unwrap();
        assert_eq!(settings.deep_get("port").unwrap().and_then(|n| n.as_integer()), Some(8080));
    }
}
