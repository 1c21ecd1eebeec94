use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{Local, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::queries;
use crate::errors::AppError;
use crate::models::{schedule, service, Booking, BookingRequest, Service};
use crate::services::scheduling;
use crate::services::scheduling::SlotDenied;
use crate::state::AppState;

// GET /api/services
pub async fn list_services() -> Json<&'static [Service]> {
    Json(service::CATALOG)
}

// GET /api/slots?date=YYYY-MM-DD
#[derive(Deserialize)]
pub struct SlotsQuery {
    pub date: NaiveDate,
}

#[derive(Serialize)]
pub struct SlotStatus {
    pub time: String,
    pub booked: bool,
}

#[derive(Serialize)]
pub struct SlotsResponse {
    pub date: NaiveDate,
    pub closed: bool,
    pub slots: Vec<SlotStatus>,
}

pub async fn list_slots(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<SlotsResponse>, AppError> {
    let labels = schedule::slots_for(query.date);
    let closed = labels.is_empty();

    let bookings = {
        let db = state.db.lock().unwrap();
        queries::get_bookings_for_date(&db, query.date)?
    };

    let slots = labels
        .into_iter()
        .map(|time| SlotStatus {
            booked: scheduling::is_slot_booked(query.date, &time, &bookings),
            time,
        })
        .collect();

    Ok(Json(SlotsResponse {
        date: query.date,
        closed,
        slots,
    }))
}

// GET /api/calendar?month=YYYY-MM
#[derive(Deserialize)]
pub struct CalendarQuery {
    pub month: String,
}

#[derive(Serialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub booked: i64,
    pub capacity: usize,
}

/// Per-day occupancy for the month's open days, starting at today. Past days
/// and closed days are omitted, as on the site's month strip.
pub async fn month_overview(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<Vec<DaySummary>>, AppError> {
    let first = NaiveDate::parse_from_str(&format!("{}-01", query.month), "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest("invalid month, expected YYYY-MM".to_string()))?;
    let next_month = first
        .checked_add_months(Months::new(1))
        .ok_or_else(|| AppError::BadRequest("month out of range".to_string()))?;

    let counts: HashMap<NaiveDate, i64> = {
        let db = state.db.lock().unwrap();
        queries::count_bookings_by_date(&db, first, next_month)?
            .into_iter()
            .collect()
    };

    let today = Local::now().date_naive();
    let mut days = Vec::new();
    let mut day = first;
    while day < next_month {
        if day >= today {
            let capacity = schedule::slots_for(day).len();
            if capacity > 0 {
                days.push(DaySummary {
                    date: day,
                    booked: counts.get(&day).copied().unwrap_or(0),
                    capacity,
                });
            }
        }
        day = match day.succ_opt() {
            Some(d) => d,
            None => break,
        };
    }

    Ok(Json(days))
}

// POST /api/bookings
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let new = req.validate().map_err(AppError::Validation)?;

    let db = state.db.lock().unwrap();
    let existing = queries::get_bookings_for_date(&db, new.date)?;
    scheduling::check_slot(new.date, &new.time, &existing)?;

    let booking = Booking {
        id: Uuid::new_v4().to_string(),
        date: new.date,
        time: new.time,
        client_name: new.client_name,
        client_phone: new.client_phone,
        service: new.service,
        created_at: Utc::now().naive_utc(),
    };

    // check_slot is advisory; the UNIQUE(date, time) constraint decides a
    // race between concurrent writers.
    if !queries::create_booking(&db, &booking)? {
        return Err(AppError::Slot(SlotDenied::AlreadyBooked));
    }

    tracing::info!(date = %booking.date, time = %booking.time, "booking created");
    Ok((StatusCode::CREATED, Json(booking)))
}
