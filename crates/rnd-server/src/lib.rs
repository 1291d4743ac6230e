mod errors;
mod health;
mod language;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use rnd_catalog::{ErrorCatalog, SqliteCatalog};
use rnd_config::{Config, LocalizationConfig};
use rnd_response::ResponseFormatter;
use secrecy::ExposeSecret;
use tower_http::trace::TraceLayer;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// Connects to the SQLite error catalog named by `database.url`, creating
    /// the catalog table first when `database.migrate` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog database cannot be opened or migrated,
    /// or if the localization settings are rejected by the formatter
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let catalog = SqliteCatalog::connect(config.database.url.expose_secret(), config.database.max_connections).await?;

        if config.database.migrate {
            catalog.migrate().await?;
            tracing::info!("error catalog schema ready");
        }

        Self::with_catalog(&config, Arc::new(catalog))
    }

    /// Build the server on top of an already constructed catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the localization settings are rejected by the
    /// formatter
    pub fn with_catalog(config: &Config, catalog: Arc<dyn ErrorCatalog>) -> anyhow::Result<Self> {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

        let formatter = Arc::new(build_formatter(&config.localization, catalog)?);
        tracing::debug!(?formatter, "response formatter ready");

        let mut app = Router::new();

        // Health check
        if config.server.health.enabled {
            app = app.route(&config.server.health.path, get(health::health_handler));
        }

        let errors_state = errors::ErrorsState { formatter };
        app = app.merge(
            Router::new()
                .route("/v1/errors/{slug}", get(errors::render_error))
                .route("/v1/errors/{slug}/format", post(errors::render_formatted_error))
                .route("/v1/unique-violations", post(errors::render_unique_violation))
                .route("/v1/ok", get(errors::ok_handler))
                .with_state(errors_state),
        );

        // Request language (innermost, runs just before handlers)
        app = app.layer(axum::middleware::from_fn(language::language_middleware));

        // Tracing
        app = app.layer(TraceLayer::new_for_http());

        Ok(Self {
            router: app,
            listen_address,
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    #[must_use]
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}

fn build_formatter(localization: &LocalizationConfig, catalog: Arc<dyn ErrorCatalog>) -> anyhow::Result<ResponseFormatter> {
    let mut builder = ResponseFormatter::builder()
        .catalog(catalog)
        .default_language(localization.default_language_id);

    if let Some(locale) = &localization.default_locale {
        builder = builder.default_locale(locale.as_str());
    }

    for (column, token) in &localization.duplicate_keys {
        builder = builder.duplicate_key(column.as_str(), token.as_str());
    }

    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use http::{Request, StatusCode};
    use rnd_catalog::MemoryCatalog;
    use rnd_core::LanguageId;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;

    const EN: LanguageId = LanguageId::new(1);
    const HR: LanguageId = LanguageId::new(2);

    fn router() -> Router {
        let catalog = MemoryCatalog::new()
            .with_entry("generic_err", EN, "Something went wrong")
            .with_entry("record_not_found", EN, "Record not found")
            .with_entry("record_not_found", HR, "Zapis nije pronađen")
            .with_entry("name_too_long", EN, "Name %s exceeds %d characters");

        let mut config = Config::default();
        config.localization.default_language_id = EN;

        Server::with_catalog(&config, Arc::new(catalog))
            .unwrap()
            .into_router()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_route_answers_ok() {
        let response = router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn unset_default_language_is_rejected() {
        let result = Server::with_catalog(&Config::default(), Arc::new(MemoryCatalog::new()));
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn language_header_selects_translation() {
        let response = router()
            .oneshot(
                Request::get("/v1/errors/record_not_found")
                    .header("x-language-id", "2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Zapis nije pronađen");
        assert_eq!(body["error_slug"], "record_not_found");
    }

    #[tokio::test]
    async fn formatted_route_interpolates_values() {
        let response = router()
            .oneshot(
                Request::post("/v1/errors/name_too_long/format")
                    .header("content-type", "application/json")
                    .body(Body::from(json!({"values": ["Ana", 3]}).to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Name Ana exceeds 3 characters");
    }

    #[tokio::test]
    async fn unique_violation_route_uses_default_tokens() {
        let response = router()
            .oneshot(
                Request::post("/v1/unique-violations")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        json!({"detail": "Key (user_email)=(a@b.c) already exists."}).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["message"], "ERR_DUPLICATE_ENTRY_EMAIL");
    }
}
