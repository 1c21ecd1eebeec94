use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, Connection};

use crate::models::Booking;

// ── Bookings ──

/// Insert a booking. Returns `false` when the (date, time) slot is already
/// taken: the UNIQUE constraint is the authoritative serialization point for
/// concurrent writers, so a lost race surfaces here instead of as a second
/// row.
pub fn create_booking(conn: &Connection, booking: &Booking) -> anyhow::Result<bool> {
    let created_at = booking.created_at.format("%Y-%m-%d %H:%M:%S").to_string();

    let result = conn.execute(
        "INSERT INTO bookings (id, date, time, client_name, client_phone, service, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            booking.id,
            booking.date.to_string(),
            booking.time,
            booking.client_name,
            booking.client_phone,
            booking.service,
            created_at,
        ],
    );

    match result {
        Ok(_) => Ok(true),
        Err(rusqlite::Error::SqliteFailure(e, _))
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}

pub fn get_bookings_for_date(conn: &Connection, date: NaiveDate) -> anyhow::Result<Vec<Booking>> {
    let mut stmt = conn.prepare(
        "SELECT id, date, time, client_name, client_phone, service, created_at
         FROM bookings WHERE date = ?1 ORDER BY time ASC",
    )?;

    let rows = stmt.query_map(params![date.to_string()], |row| Ok(parse_booking_row(row)))?;

    let mut bookings = vec![];
    for row in rows {
        bookings.push(row??);
    }
    Ok(bookings)
}

pub fn get_all_bookings(
    conn: &Connection,
    date_filter: Option<NaiveDate>,
) -> anyhow::Result<Vec<Booking>> {
    let (sql, params_vec): (String, Vec<Box<dyn rusqlite::types::ToSql>>) = match date_filter {
        Some(date) => (
            "SELECT id, date, time, client_name, client_phone, service, created_at \
             FROM bookings WHERE date = ?1 ORDER BY date ASC, time ASC"
                .to_string(),
            vec![Box::new(date.to_string()) as Box<dyn rusqlite::types::ToSql>],
        ),
        None => (
            "SELECT id, date, time, client_name, client_phone, service, created_at \
             FROM bookings ORDER BY date ASC, time ASC"
                .to_string(),
            vec![],
        ),
    };

    let mut stmt = conn.prepare(&sql)?;
    let params_refs: Vec<&dyn rusqlite::types::ToSql> =
        params_vec.iter().map(|p| p.as_ref()).collect();
    let rows = stmt.query_map(params_refs.as_slice(), |row| Ok(parse_booking_row(row)))?;

    let mut bookings = vec![];
    for row in rows {
        bookings.push(row??);
    }
    Ok(bookings)
}

pub fn get_booking_by_id(conn: &Connection, id: &str) -> anyhow::Result<Option<Booking>> {
    let result = conn.query_row(
        "SELECT id, date, time, client_name, client_phone, service, created_at \
         FROM bookings WHERE id = ?1",
        params![id],
        |row| Ok(parse_booking_row(row)),
    );

    match result {
        Ok(booking) => Ok(Some(booking?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn delete_booking(conn: &Connection, id: &str) -> anyhow::Result<bool> {
    let count = conn.execute("DELETE FROM bookings WHERE id = ?1", params![id])?;
    Ok(count > 0)
}

/// Remove every booking strictly before `today`. Lexicographic TEXT
/// comparison is calendar order for the fixed-width ISO format. Idempotent.
pub fn delete_past_bookings(conn: &Connection, today: NaiveDate) -> anyhow::Result<usize> {
    let count = conn.execute(
        "DELETE FROM bookings WHERE date < ?1",
        params![today.to_string()],
    )?;
    Ok(count)
}

pub fn count_bookings_by_date(
    conn: &Connection,
    from: NaiveDate,
    to_exclusive: NaiveDate,
) -> anyhow::Result<Vec<(NaiveDate, i64)>> {
    let mut stmt = conn.prepare(
        "SELECT date, COUNT(*) FROM bookings
         WHERE date >= ?1 AND date < ?2
         GROUP BY date ORDER BY date ASC",
    )?;

    let rows = stmt.query_map(
        params![from.to_string(), to_exclusive.to_string()],
        |row| {
            let date_str: String = row.get(0)?;
            let count: i64 = row.get(1)?;
            Ok((date_str, count))
        },
    )?;

    let mut counts = vec![];
    for row in rows {
        let (date_str, count) = row?;
        let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")?;
        counts.push((date, count));
    }
    Ok(counts)
}

// ── Dashboard ──

pub struct DashboardStats {
    pub total_bookings: i64,
    pub today_bookings: i64,
    pub upcoming_bookings: i64,
}

pub fn get_dashboard_stats(conn: &Connection, today: NaiveDate) -> anyhow::Result<DashboardStats> {
    let today_str = today.to_string();

    let total_bookings: i64 =
        conn.query_row("SELECT COUNT(*) FROM bookings", [], |row| row.get(0))?;

    let today_bookings: i64 = conn.query_row(
        "SELECT COUNT(*) FROM bookings WHERE date = ?1",
        params![today_str],
        |row| row.get(0),
    )?;

    let upcoming_bookings: i64 = conn.query_row(
        "SELECT COUNT(*) FROM bookings WHERE date >= ?1",
        params![today_str],
        |row| row.get(0),
    )?;

    Ok(DashboardStats {
        total_bookings,
        today_bookings,
        upcoming_bookings,
    })
}

pub fn get_service_counts(conn: &Connection) -> anyhow::Result<Vec<(String, i64)>> {
    let mut stmt = conn.prepare(
        "SELECT service, COUNT(*) FROM bookings GROUP BY service ORDER BY COUNT(*) DESC, service ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        let service: String = row.get(0)?;
        let count: i64 = row.get(1)?;
        Ok((service, count))
    })?;

    let mut counts = vec![];
    for row in rows {
        counts.push(row?);
    }
    Ok(counts)
}

fn parse_booking_row(row: &rusqlite::Row) -> anyhow::Result<Booking> {
    let id: String = row.get(0)?;
    let date_str: String = row.get(1)?;
    let time: String = row.get(2)?;
    let client_name: String = row.get(3)?;
    let client_phone: String = row.get(4)?;
    let service: String = row.get(5)?;
    let created_at_str: String = row.get(6)?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")?;
    let created_at = NaiveDateTime::parse_from_str(&created_at_str, "%Y-%m-%d %H:%M:%S")?;

    Ok(Booking {
        id,
        date,
        time,
        client_name,
        client_phone,
        service,
        created_at,
    })
}
