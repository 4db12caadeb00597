use actix_web::{get, web, HttpResponse};
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;

use crate::state::AppState;
use crate::types::{HealthResponse, ServiceHealth};

const STATUS_HEALTHY: &str = "healthy";
const STATUS_UNHEALTHY: &str = "unhealthy";
const STATUS_DEGRADED: &str = "degraded";

/// Aggregated health check
///
/// The provider entry comes from a live probe call; the service itself
/// is always reported healthy when this handler runs at all.
#[get("/health")]
pub async fn health(state: web::Data<Arc<AppState>>) -> actix_web::Result<HttpResponse> {
    info!("Performing health check");

    let provider_healthy = state.summarizer.is_healthy().await;
    let provider_status = if provider_healthy {
        STATUS_HEALTHY
    } else {
        STATUS_UNHEALTHY
    };

    let mut services = BTreeMap::new();
    services.insert(
        "self".to_string(),
        ServiceHealth {
            status: STATUS_HEALTHY.to_string(),
            last_checked: Utc::now(),
        },
    );
    services.insert(
        "provider".to_string(),
        ServiceHealth {
            status: provider_status.to_string(),
            last_checked: Utc::now(),
        },
    );

    let overall = if provider_healthy {
        STATUS_HEALTHY
    } else {
        STATUS_DEGRADED
    };

    let response = HealthResponse {
        status: overall.to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        services,
    };

    info!("Health check completed with status: {}", overall);

    if provider_healthy {
        Ok(HttpResponse::Ok().json(response))
    } else {
        Ok(HttpResponse::ServiceUnavailable().json(response))
    }
}
