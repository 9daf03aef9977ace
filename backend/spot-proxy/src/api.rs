//! Proxy endpoint: query validation and upstream passthrough
//!
//! The proxy owns parameter validation so the chart pipeline can trust
//! whatever record sequence it is handed. Upstream status, body, and
//! content type pass through untouched, with a short cache directive on
//! top.

use axum::{
    extract::{Query, State},
    http::{
        HeaderMap, StatusCode,
        header::{CACHE_CONTROL, CONTENT_TYPE},
    },
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use std::net::SocketAddr;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info, warn};

const CACHE_DIRECTIVE: &str = "max-age=60";

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub client: reqwest::Client,
    pub upstream: String,
}

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        };
        (status, self.to_string()).into_response()
    }
}

/// Raw query parameters for GET /api/prices, validated before use
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuery {
    pub region: Option<String>,
    pub price_resolution: Option<String>,
    pub look_forward_hours: Option<String>,
    pub include_forecast: Option<String>,
}

/// Validated, typed query forwarded upstream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedQuery {
    pub region: String,
    pub price_resolution: u32,
    pub look_forward_hours: u32,
    pub include_forecast: bool,
}

impl PriceQuery {
    pub fn validate(self) -> Result<ValidatedQuery, ProxyError> {
        let region = self
            .region
            .filter(|r| !r.is_empty())
            .ok_or_else(|| ProxyError::InvalidParameter("region is required".into()))?
            .to_uppercase();

        let price_resolution: u32 = self
            .price_resolution
            .ok_or_else(|| ProxyError::InvalidParameter("priceResolution is required".into()))?
            .parse()
            .map_err(|_| {
                ProxyError::InvalidParameter("priceResolution must be an integer".into())
            })?;
        if price_resolution != 15 && price_resolution != 60 {
            return Err(ProxyError::InvalidParameter(
                "priceResolution must be 15 or 60".into(),
            ));
        }

        let look_forward_hours: u32 = self
            .look_forward_hours
            .ok_or_else(|| ProxyError::InvalidParameter("lookForwardHours is required".into()))?
            .parse()
            .map_err(|_| {
                ProxyError::InvalidParameter("lookForwardHours must be an integer".into())
            })?;
        if !(1..=6).contains(&look_forward_hours) {
            return Err(ProxyError::InvalidParameter(
                "lookForwardHours must be between 1 and 6".into(),
            ));
        }

        let include_forecast = match self.include_forecast.as_deref() {
            None => false,
            Some(raw) => parse_bool_literal(raw)
                .ok_or_else(|| {
                    ProxyError::InvalidParameter(
                        "includeForecast must be \"true\" or \"false\"".into(),
                    )
                })?,
        };

        Ok(ValidatedQuery {
            region,
            price_resolution,
            look_forward_hours,
            include_forecast,
        })
    }
}

/// Only the literal strings pass; "True", "1", etc. are rejected
fn parse_bool_literal(raw: &str) -> Option<bool> {
    match raw {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

fn upstream_url(base: &str, query: &ValidatedQuery) -> String {
    format!(
        "{}/prices?region={}&priceResolution={}&lookForwardHours={}&includeForecast={}",
        base.trim_end_matches('/'),
        query.region,
        query.price_resolution,
        query.look_forward_hours,
        query.include_forecast,
    )
}

/// GET /api/prices - validate, forward, pass the upstream response through
pub async fn prices_handler(
    State(state): State<AppState>,
    Query(params): Query<PriceQuery>,
) -> Result<Response, ProxyError> {
    let query = params.validate()?;
    let url = upstream_url(&state.upstream, &query);
    debug!(%url, "forwarding to upstream");

    let upstream = state.client.get(&url).send().await?;
    let status =
        StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = upstream
        .headers()
        .get(CONTENT_TYPE.as_str())
        .and_then(|value| value.to_str().ok())
        .unwrap_or("application/json")
        .to_string();
    let body = upstream.bytes().await?;

    if !status.is_success() {
        warn!(%status, region = %query.region, "upstream returned error status");
    }

    let mut headers = HeaderMap::new();
    if let Ok(value) = CACHE_DIRECTIVE.parse() {
        headers.insert(CACHE_CONTROL, value);
    }
    if let Ok(value) = content_type.parse() {
        headers.insert(CONTENT_TYPE, value);
    }

    Ok((status, headers, body).into_response())
}

/// GET /health
pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

/// Start the axum server
pub async fn serve(upstream: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    info!(%upstream, "starting spot price proxy");

    let state = AppState {
        client: reqwest::Client::new(),
        upstream,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([axum::http::Method::GET])
        .allow_headers(Any);

    let app = Router::new()
        .route("/api/prices", get(prices_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(%addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
