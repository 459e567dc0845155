use serde::{Deserialize, Serialize};

/// Opening hours as returned by the place-details provider: a Monday-first
/// list of display lines plus the raw daily open/close periods.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct OpeningHours {
    #[serde(default)]
    pub weekday_text: Vec<String>,
    pub periods: Option<Vec<Period>>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Period {
    pub open: DayTime,
    pub close: Option<DayTime>,
}

/// A point in the weekly schedule. `day` uses 0 = Sunday; `time` is the
/// provider's "HHMM" string, e.g. "0930".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DayTime {
    pub day: u8,
    pub time: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HoursStatus {
    Open,
    Closed,
    Unavailable,
}

/// Open/closed right now, from the fetched periods. `day` uses 0 = Sunday
/// and `hhmm` is the local time as hours * 100 + minutes. A period without a
/// close is treated as closing at 2359; closings past midnight are not
/// chased into the next day.
pub fn hours_status(hours: Option<&OpeningHours>, day: u8, hhmm: u32) -> HoursStatus {
    let periods = match hours.and_then(|h| h.periods.as_ref()) {
        Some(periods) => periods,
        None => return HoursStatus::Unavailable,
    };

    for period in periods.iter().filter(|p| p.open.day == day) {
        let open = match period.open.time.parse::<u32>() {
            Ok(t) => t,
            Err(_) => continue,
        };
        let close = period
            .close
            .as_ref()
            .and_then(|c| c.time.parse::<u32>().ok())
            .unwrap_or(2359);

        if hhmm >= open && hhmm <= close {
            return HoursStatus::Open;
        }
    }

    HoursStatus::Closed
}

/// Today's line of the Monday-first weekday text. Day 0 (Sunday) sits at the
/// last position, day 1 (Monday) at the first.
pub fn today_hours_line(hours: &OpeningHours, day: u8) -> Option<&str> {
    let index = if day == 0 { 6 } else { usize::from(day) - 1 };
    hours.weekday_text.get(index).map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuesday_nine_to_five() -> OpeningHours {
        OpeningHours {
            weekday_text: vec![
                "Monday: Closed".into(),
                "Tuesday: 9:00 AM – 5:00 PM".into(),
                "Wednesday: Closed".into(),
                "Thursday: Closed".into(),
                "Friday: Closed".into(),
                "Saturday: Closed".into(),
                "Sunday: Closed".into(),
            ],
            periods: Some(vec![Period {
                open: DayTime {
                    day: 2,
                    time: "0900".into(),
                },
                close: Some(DayTime {
                    day: 2,
                    time: "1700".into(),
                }),
            }]),
        }
    }

    #[test]
    fn open_within_todays_period() {
        let hours = tuesday_nine_to_five();
        assert_eq!(hours_status(Some(&hours), 2, 1200), HoursStatus::Open);
    }

    #[test]
    fn closed_after_todays_period() {
        let hours = tuesday_nine_to_five();
        assert_eq!(hours_status(Some(&hours), 2, 1800), HoursStatus::Closed);
    }

    #[test]
    fn closed_on_another_day() {
        let hours = tuesday_nine_to_five();
        assert_eq!(hours_status(Some(&hours), 3, 1200), HoursStatus::Closed);
    }

    #[test]
    fn unavailable_without_periods() {
        assert_eq!(hours_status(None, 2, 1200), HoursStatus::Unavailable);

        let no_periods = OpeningHours {
            weekday_text: vec![],
            periods: None,
        };
        assert_eq!(
            hours_status(Some(&no_periods), 2, 1200),
            HoursStatus::Unavailable
        );
    }

    #[test]
    fn missing_close_runs_to_end_of_day() {
        let mut hours = tuesday_nine_to_five();
        hours.periods.as_mut().unwrap()[0].close = None;
        assert_eq!(hours_status(Some(&hours), 2, 2350), HoursStatus::Open);
    }

    #[test]
    fn weekday_text_is_monday_first() {
        let hours = tuesday_nine_to_five();
        assert_eq!(
            today_hours_line(&hours, 2),
            Some("Tuesday: 9:00 AM – 5:00 PM")
        );
        assert_eq!(today_hours_line(&hours, 0), Some("Sunday: Closed"));
        assert_eq!(today_hours_line(&hours, 1), Some("Monday: Closed"));
    }
}
