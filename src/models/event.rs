//! Calendar events and the mocked schedule.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of scheduled event, drives icon and colour in the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Class,
    Study,
    Assignment,
}

/// Priority accent for an event row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventPriority {
    High,
    Medium,
    Low,
}

/// One scheduled event on a day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub event_type: EventType,
    pub title: String,
    pub time: String,
    /// Location, study technique, or due note depending on the type.
    pub detail: Option<String>,
    pub priority: EventPriority,
}

/// All events for a single date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaySchedule {
    pub date: NaiveDate,
    pub events: Vec<CalendarEvent>,
}

/// Events for `date`, by exact date match. Empty when nothing is scheduled.
pub fn events_on(schedule: &[DaySchedule], date: NaiveDate) -> &[CalendarEvent] {
    schedule
        .iter()
        .find(|day| day.date == date)
        .map(|day| day.events.as_slice())
        .unwrap_or(&[])
}

/// Whether any event is scheduled on `date`.
pub fn has_events(schedule: &[DaySchedule], date: NaiveDate) -> bool {
    schedule.iter().any(|day| day.date == date)
}

fn event(
    id: &str,
    event_type: EventType,
    title: &str,
    time: &str,
    detail: Option<&str>,
    priority: EventPriority,
) -> CalendarEvent {
    CalendarEvent {
        id: id.to_string(),
        event_type,
        title: title.to_string(),
        time: time.to_string(),
        detail: detail.map(str::to_string),
        priority,
    }
}

/// The mocked schedule: three sample days.
pub fn sample_schedule() -> Vec<DaySchedule> {
    vec![
        DaySchedule {
            date: NaiveDate::from_ymd_opt(2025, 4, 7).expect("valid date"),
            events: vec![
                event(
                    "class1",
                    EventType::Class,
                    "CSE101: Introduction to Computer Science",
                    "9:00 AM - 10:30 AM",
                    Some("Room 302"),
                    EventPriority::High,
                ),
                event(
                    "study1",
                    EventType::Study,
                    "Study: MATH204 Review",
                    "3:00 PM - 4:00 PM",
                    Some("Pomodoro: 25 min focus"),
                    EventPriority::Medium,
                ),
                event(
                    "assignment1",
                    EventType::Assignment,
                    "Assignment: PHY202 Lab Report",
                    "4:30 PM - 6:00 PM",
                    Some("Due tomorrow"),
                    EventPriority::High,
                ),
            ],
        },
        DaySchedule {
            date: NaiveDate::from_ymd_opt(2025, 4, 8).expect("valid date"),
            events: vec![
                event(
                    "class2",
                    EventType::Class,
                    "PHY202: Physics for Engineers",
                    "9:00 AM - 10:30 AM",
                    Some("Lab 101"),
                    EventPriority::High,
                ),
                event(
                    "class3",
                    EventType::Class,
                    "ENG207: Technical Writing",
                    "2:00 PM - 3:30 PM",
                    Some("Room 405"),
                    EventPriority::Medium,
                ),
            ],
        },
        DaySchedule {
            date: NaiveDate::from_ymd_opt(2025, 4, 9).expect("valid date"),
            events: vec![
                event(
                    "class4",
                    EventType::Class,
                    "CSE101: Introduction to Computer Science",
                    "9:00 AM - 10:30 AM",
                    Some("Room 302"),
                    EventPriority::High,
                ),
                event(
                    "study2",
                    EventType::Study,
                    "Study: CSE101 Concepts",
                    "2:00 PM - 3:30 PM",
                    Some("Time blocking: 90 min focus"),
                    EventPriority::High,
                ),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_exact_date() {
        let schedule = sample_schedule();
        let date = NaiveDate::from_ymd_opt(2025, 4, 8).unwrap();

        let events = events_on(&schedule, date);
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|e| e.event_type == EventType::Class));
    }

    #[test]
    fn test_lookup_empty_day() {
        let schedule = sample_schedule();
        let date = NaiveDate::from_ymd_opt(2025, 4, 10).unwrap();

        assert!(events_on(&schedule, date).is_empty());
        assert!(!has_events(&schedule, date));
    }

    #[test]
    fn test_has_events_matches_lookup() {
        let schedule = sample_schedule();
        for day in &schedule {
            assert!(has_events(&schedule, day.date));
            assert_eq!(events_on(&schedule, day.date).len(), day.events.len());
        }
    }
}
