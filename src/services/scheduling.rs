use chrono::NaiveDate;

use crate::models::schedule;
use crate::models::Booking;

/// Why a slot cannot be booked. All three are expected, user-correctable
/// outcomes, not failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotDenied {
    Closed,
    InvalidSlot,
    AlreadyBooked,
}

impl SlotDenied {
    /// Stable wire code for API consumers.
    pub fn reason(&self) -> &'static str {
        match self {
            SlotDenied::Closed => "CLOSED",
            SlotDenied::InvalidSlot => "INVALID_SLOT",
            SlotDenied::AlreadyBooked => "ALREADY_BOOKED",
        }
    }
}

impl std::fmt::Display for SlotDenied {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SlotDenied::Closed => {
                write!(f, "A barbearia está fechada aos domingos")
            }
            SlotDenied::InvalidSlot => {
                write!(f, "Horário inválido para este dia")
            }
            SlotDenied::AlreadyBooked => {
                write!(f, "Este horário já está reservado")
            }
        }
    }
}

/// Exact match on (date, time) against the supplied records. No
/// normalization: a label the policy never produced simply never matches.
pub fn is_slot_booked(date: NaiveDate, time: &str, bookings: &[Booking]) -> bool {
    bookings.iter().any(|b| b.date == date && b.time == time)
}

/// Closed-day and invalid-slot checks are content-independent and must
/// short-circuit before the occupancy scan, so callers always get the most
/// specific applicable reason.
pub fn check_slot(date: NaiveDate, time: &str, bookings: &[Booking]) -> Result<(), SlotDenied> {
    if !schedule::is_open(date) {
        return Err(SlotDenied::Closed);
    }
    if !schedule::has_slot(date, time) {
        return Err(SlotDenied::InvalidSlot);
    }
    if is_slot_booked(date, time, bookings) {
        return Err(SlotDenied::AlreadyBooked);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn booking(date_str: &str, time: &str) -> Booking {
        Booking {
            id: format!("bk-{date_str}-{time}"),
            date: date(date_str),
            time: time.to_string(),
            client_name: "Cliente Teste".to_string(),
            client_phone: "11987654321".to_string(),
            service: "Barba".to_string(),
            created_at: Utc::now().naive_utc(),
        }
    }

    #[test]
    fn test_free_slot_can_be_booked() {
        // 2025-06-09 is a Monday with no existing bookings
        assert_eq!(check_slot(date("2025-06-09"), "08:00", &[]), Ok(()));
    }

    #[test]
    fn test_booked_slot_rejected() {
        let bookings = vec![booking("2025-06-09", "08:00")];
        assert_eq!(
            check_slot(date("2025-06-09"), "08:00", &bookings),
            Err(SlotDenied::AlreadyBooked)
        );
        // The same time on another day is still free
        assert_eq!(check_slot(date("2025-06-10"), "08:00", &bookings), Ok(()));
    }

    #[test]
    fn test_sunday_rejected_as_closed() {
        // 2025-06-08 is a Sunday
        assert_eq!(
            check_slot(date("2025-06-08"), "10:00", &[]),
            Err(SlotDenied::Closed)
        );
    }

    #[test]
    fn test_closed_wins_over_occupancy() {
        // Even with a matching record, a closed day reports CLOSED
        let bookings = vec![booking("2025-06-08", "10:00")];
        assert_eq!(
            check_slot(date("2025-06-08"), "10:00", &bookings),
            Err(SlotDenied::Closed)
        );
    }

    #[test]
    fn test_invalid_slot_wins_over_occupancy() {
        // 07:00 is out of policy on any day; a stray record for it must not
        // flip the reason to AlreadyBooked
        let bookings = vec![booking("2025-06-09", "07:00")];
        assert_eq!(
            check_slot(date("2025-06-09"), "07:00", &bookings),
            Err(SlotDenied::InvalidSlot)
        );
    }

    #[test]
    fn test_saturday_evening_is_invalid() {
        // 2025-06-14 is a Saturday; 19:00 only exists Monday-Friday
        assert_eq!(
            check_slot(date("2025-06-14"), "19:00", &[]),
            Err(SlotDenied::InvalidSlot)
        );
        assert_eq!(check_slot(date("2025-06-14"), "18:00", &[]), Ok(()));
    }

    #[test]
    fn test_non_canonical_label_never_matches() {
        let bookings = vec![booking("2025-06-09", "08:00")];
        assert!(!is_slot_booked(date("2025-06-09"), "8:00", &bookings));
        assert!(is_slot_booked(date("2025-06-09"), "08:00", &bookings));
    }

    #[test]
    fn test_check_matches_slot_listing() {
        // A slot is bookable iff it is in the day's listing and unoccupied
        let bookings = vec![booking("2025-06-09", "10:00")];
        for time in crate::models::schedule::slots_for(date("2025-06-09")) {
            let bookable = check_slot(date("2025-06-09"), &time, &bookings).is_ok();
            assert_eq!(bookable, time != "10:00");
        }
    }

    #[test]
    fn test_reason_codes() {
        assert_eq!(SlotDenied::Closed.reason(), "CLOSED");
        assert_eq!(SlotDenied::InvalidSlot.reason(), "INVALID_SLOT");
        assert_eq!(SlotDenied::AlreadyBooked.reason(), "ALREADY_BOOKED");
    }
}
