use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::db::queries;
use crate::errors::AppError;
use crate::models::{service, Booking};
use crate::state::AppState;

fn check_auth(headers: &HeaderMap, expected_token: &str) -> Result<(), AppError> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let token = auth.strip_prefix("Bearer ").unwrap_or("");
    if token != expected_token {
        return Err(AppError::Unauthorized);
    }
    Ok(())
}

// GET /api/admin/bookings
#[derive(Deserialize)]
pub struct BookingsQuery {
    pub date: Option<NaiveDate>,
    pub search: Option<String>,
    pub service: Option<String>,
}

pub async fn get_bookings(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<BookingsQuery>,
) -> Result<Json<Vec<Booking>>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let mut bookings = {
        let db = state.db.lock().unwrap();
        queries::get_all_bookings(&db, query.date)?
    };

    if let Some(search) = query.search.as_deref().filter(|s| !s.is_empty()) {
        let needle = search.to_lowercase();
        bookings.retain(|b| {
            b.client_name.to_lowercase().contains(&needle) || b.client_phone.contains(search)
        });
    }
    if let Some(svc) = query.service.as_deref().filter(|s| !s.is_empty()) {
        bookings.retain(|b| b.service == svc);
    }

    Ok(Json(bookings))
}

// DELETE /api/admin/bookings/:id
pub async fn delete_booking(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let removed = {
        let db = state.db.lock().unwrap();
        queries::delete_booking(&db, &id)?
    };

    if removed {
        Ok(Json(serde_json::json!({"ok": true})))
    } else {
        Err(AppError::NotFound("booking not found".to_string()))
    }
}

// POST /api/admin/bookings/purge-past
pub async fn purge_past(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let today = Local::now().date_naive();
    let removed = {
        let db = state.db.lock().unwrap();
        queries::delete_past_bookings(&db, today)?
    };

    tracing::info!(removed, "purged past bookings");
    Ok(Json(serde_json::json!({"removed": removed})))
}

// GET /api/admin/stats
#[derive(Serialize)]
pub struct ServiceCount {
    pub service: String,
    pub count: i64,
}

#[derive(Serialize)]
pub struct StatsResponse {
    pub total_bookings: i64,
    pub today_bookings: i64,
    pub upcoming_bookings: i64,
    pub total_revenue: i64,
    pub services: Vec<ServiceCount>,
}

pub async fn get_stats(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<StatsResponse>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let today = Local::now().date_naive();
    let (stats, service_counts) = {
        let db = state.db.lock().unwrap();
        let stats = queries::get_dashboard_stats(&db, today)?;
        let counts = queries::get_service_counts(&db)?;
        (stats, counts)
    };

    let total_revenue = service_counts
        .iter()
        .map(|(name, count)| service::price_of(name) * count)
        .sum();
    let services = service_counts
        .into_iter()
        .map(|(service, count)| ServiceCount { service, count })
        .collect();

    Ok(Json(StatsResponse {
        total_bookings: stats.total_bookings,
        today_bookings: stats.today_bookings,
        upcoming_bookings: stats.upcoming_bookings,
        total_revenue,
        services,
    }))
}
