use chrono::{Datelike, NaiveDate, Weekday};

const OPENING_HOUR: u32 = 8;
const WEEKDAY_CLOSING_HOUR: u32 = 20;
const SATURDAY_CLOSING_HOUR: u32 = 18;

fn hourly(from: u32, to: u32) -> Vec<String> {
    (from..=to).map(|h| format!("{h:02}:00")).collect()
}

/// The slot labels open on the given date's weekday. Empty means closed.
/// Occupancy is a separate question; see `services::scheduling`.
pub fn slots_for(date: NaiveDate) -> Vec<String> {
    match date.weekday() {
        Weekday::Sun => Vec::new(),
        Weekday::Sat => hourly(OPENING_HOUR, SATURDAY_CLOSING_HOUR),
        _ => hourly(OPENING_HOUR, WEEKDAY_CLOSING_HOUR),
    }
}

pub fn is_open(date: NaiveDate) -> bool {
    date.weekday() != Weekday::Sun
}

pub fn has_slot(date: NaiveDate, time: &str) -> bool {
    slots_for(date).iter().any(|s| s == time)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_sunday_closed() {
        // 2025-06-08 is a Sunday
        assert!(!is_open(date("2025-06-08")));
        assert!(slots_for(date("2025-06-08")).is_empty());
    }

    #[test]
    fn test_saturday_slots() {
        // 2025-06-14 is a Saturday
        let slots = slots_for(date("2025-06-14"));
        assert_eq!(slots.len(), 11);
        assert_eq!(slots.first().unwrap(), "08:00");
        assert_eq!(slots.last().unwrap(), "18:00");
    }

    #[test]
    fn test_weekday_slots() {
        // 2025-06-09 is a Monday
        let slots = slots_for(date("2025-06-09"));
        assert_eq!(slots.len(), 13);
        assert_eq!(slots.first().unwrap(), "08:00");
        assert_eq!(slots.last().unwrap(), "20:00");
    }

    #[test]
    fn test_all_weekdays_share_the_weekday_policy() {
        // 2025-06-09 through 2025-06-13 are Monday through Friday
        for day in 9..=13 {
            let slots = slots_for(date(&format!("2025-06-{day:02}")));
            assert_eq!(slots.len(), 13, "day 2025-06-{day:02}");
        }
    }

    #[test]
    fn test_labels_are_zero_padded() {
        let slots = slots_for(date("2025-06-09"));
        assert!(slots.contains(&"08:00".to_string()));
        assert!(slots.contains(&"09:00".to_string()));
        assert!(!slots.contains(&"8:00".to_string()));
    }

    #[test]
    fn test_has_slot_respects_weekday() {
        // 19:00 and 20:00 exist Monday but not Saturday
        assert!(has_slot(date("2025-06-09"), "20:00"));
        assert!(!has_slot(date("2025-06-14"), "20:00"));
        assert!(!has_slot(date("2025-06-14"), "19:00"));
        assert!(has_slot(date("2025-06-14"), "18:00"));
        // Sunday has nothing
        assert!(!has_slot(date("2025-06-08"), "10:00"));
    }
}
