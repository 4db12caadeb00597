use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use textbrief_common::FieldError;

/// Generic failure response body
///
/// Carries a title and detail only; raw provider output never appears
/// here.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Short error title
    pub title: String,

    /// Human-readable detail
    pub detail: String,
}

/// Validation failure response body
#[derive(Debug, Serialize)]
pub struct ValidationErrorResponse {
    /// Short error title
    pub title: String,

    /// Per-field violations
    pub errors: Vec<FieldError>,
}

/// Per-service health entry
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceHealth {
    /// Service status label
    pub status: String,

    /// Check timestamp
    pub last_checked: DateTime<Utc>,
}

/// Aggregated health report
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Overall status (healthy or degraded)
    pub status: String,

    /// Report timestamp
    pub timestamp: DateTime<Utc>,

    /// Package version
    pub version: String,

    /// Per-service statuses
    pub services: BTreeMap<String, ServiceHealth>,
}
