//! Annotated timeline events

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEvent {
    pub id: u32,
    pub label: String,
    pub date: NaiveDate,
}

/// Visible window of a timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TimeWindow {
    /// Relative position of `date` in the window, clamped to `[0, 1]`.
    pub fn fraction(&self, date: NaiveDate) -> f64 {
        let span = (self.end - self.start).num_days();
        if span <= 0 {
            return 0.0;
        }
        let offset = (date - self.start).num_days();
        (offset as f64 / span as f64).clamp(0.0, 1.0)
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

pub fn sample_window() -> TimeWindow {
    TimeWindow {
        start: date(2023, 1, 1),
        end: date(2024, 1, 1),
    }
}

pub fn sample_events() -> Vec<TimelineEvent> {
    [
        (1, date(2023, 1, 1)),
        (2, date(2023, 3, 15)),
        (3, date(2023, 6, 1)),
        (4, date(2023, 9, 20)),
        (5, date(2023, 12, 31)),
    ]
    .into_iter()
    .map(|(id, date)| TimelineEvent {
        id,
        label: format!("Event {id}"),
        date,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_fall_inside_window() {
        let window = sample_window();
        let events = sample_events();
        assert_eq!(events.len(), 5);
        assert_eq!(window.fraction(events[0].date), 0.0);
        for event in &events {
            let f = window.fraction(event.date);
            assert!((0.0..=1.0).contains(&f));
        }
        assert!(window.fraction(events[4].date) > 0.99);
    }

    #[test]
    fn test_fraction_clamps_outside_window() {
        let window = sample_window();
        assert_eq!(window.fraction(date(2022, 6, 1)), 0.0);
        assert_eq!(window.fraction(date(2025, 6, 1)), 1.0);

        let empty = TimeWindow {
            start: window.start,
            end: window.start,
        };
        assert_eq!(empty.fraction(window.end), 0.0);
    }
}
