use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, FixedOffset, Local, NaiveDate, Offset, TimeZone, Utc};

use crate::domain::error::ReportError;
use crate::domain::models::DateRange;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PeriodSelector {
    ThisWeek,
    LastWeek,
}

impl PeriodSelector {
    /// Menu order used by the interactive prompt.
    pub const CHOICES: [PeriodSelector; 2] = [PeriodSelector::LastWeek, PeriodSelector::ThisWeek];

    pub fn label(self) -> &'static str {
        match self {
            PeriodSelector::ThisWeek => "This week",
            PeriodSelector::LastWeek => "Last week",
        }
    }
}

impl FromStr for PeriodSelector {
    type Err = ReportError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "this week" | "this" | "current" => Ok(PeriodSelector::ThisWeek),
            "last week" | "last" | "previous" => Ok(PeriodSelector::LastWeek),
            _ => Err(ReportError::InvalidSelector(raw.to_string())),
        }
    }
}

/// Resolves the selector against the calendar date of `now` in its own
/// timezone. Weeks run Monday through Sunday.
pub fn resolve<Tz: TimeZone>(selector: PeriodSelector, now: &DateTime<Tz>) -> DateRange {
    let this_week = week_of(now.date_naive());
    match selector {
        PeriodSelector::ThisWeek => this_week,
        PeriodSelector::LastWeek => DateRange {
            since: this_week.since - Duration::days(7),
            until: this_week.until - Duration::days(7),
        },
    }
}

fn week_of(date: NaiveDate) -> DateRange {
    let since = date - Duration::days(date.weekday().num_days_from_monday() as i64);
    DateRange {
        since,
        until: since + Duration::days(6),
    }
}

/// Timezone the week boundaries are computed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportTimezone {
    Local,
    Fixed(FixedOffset),
}

impl ReportTimezone {
    pub fn now(self) -> DateTime<FixedOffset> {
        match self {
            ReportTimezone::Local => Local::now().fixed_offset(),
            ReportTimezone::Fixed(offset) => Utc::now().with_timezone(&offset),
        }
    }
}

impl FromStr for ReportTimezone {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw.trim();
        match value.to_ascii_lowercase().as_str() {
            "" | "local" => return Ok(ReportTimezone::Local),
            "utc" | "z" => return Ok(ReportTimezone::Fixed(Utc.fix())),
            _ => {}
        }

        let (sign, rest) = match value.as_bytes()[0] {
            b'+' => (1, &value[1..]),
            b'-' => (-1, &value[1..]),
            _ => return Err(format!("Invalid timezone: {value} (use local, utc or +HH:MM)")),
        };
        let (hours, minutes) = rest.split_once(':').unwrap_or((rest, "0"));
        let hours = hours
            .parse::<i32>()
            .map_err(|_| format!("Invalid hours in timezone: {value}"))?;
        let minutes = minutes
            .parse::<i32>()
            .map_err(|_| format!("Invalid minutes in timezone: {value}"))?;
        if hours > 14 || minutes > 59 {
            return Err(format!("Timezone out of range: {value}"));
        }

        FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
            .map(ReportTimezone::Fixed)
            .ok_or_else(|| format!("Timezone out of range: {value}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).single().expect("valid instant")
    }

    #[test]
    fn this_week_spans_monday_to_sunday() {
        // 2026-10-16 is a Friday
        let range = resolve(PeriodSelector::ThisWeek, &at(2026, 10, 16, 12));
        assert_eq!(range.since, date(2026, 10, 12));
        assert_eq!(range.until, date(2026, 10, 18));
        assert_eq!(range.since_param(), "2026-10-12");
        assert_eq!(range.until_param(), "2026-10-18");
    }

    #[test]
    fn monday_and_sunday_stay_in_their_own_week() {
        let monday = resolve(PeriodSelector::ThisWeek, &at(2026, 10, 12, 0));
        let sunday = resolve(PeriodSelector::ThisWeek, &at(2026, 10, 18, 23));
        assert_eq!(monday, sunday);
        assert_eq!(monday.since, date(2026, 10, 12));
    }

    #[test]
    fn last_week_crosses_year_boundary() {
        let range = resolve(PeriodSelector::LastWeek, &at(2027, 1, 2, 9));
        assert_eq!(range.since, date(2026, 12, 21));
        assert_eq!(range.until, date(2026, 12, 27));
    }

    #[test]
    fn week_properties_hold_over_a_year() {
        let mut day = date(2024, 1, 1);
        while day < date(2025, 3, 1) {
            let now = Utc.from_utc_datetime(&day.and_hms_opt(10, 30, 0).expect("valid time"));
            let this_week = resolve(PeriodSelector::ThisWeek, &now);
            let last_week = resolve(PeriodSelector::LastWeek, &now);

            assert_eq!(this_week.since.weekday(), chrono::Weekday::Mon);
            assert_eq!(this_week.until, this_week.since + Duration::days(6));
            assert!(this_week.since <= day && day <= this_week.until);
            assert_eq!(last_week.since, this_week.since - Duration::days(7));
            assert_eq!(last_week.until, this_week.until - Duration::days(7));

            day += Duration::days(1);
        }
    }

    #[test]
    fn week_follows_the_timezone_of_the_instant() {
        // Sunday 23:00 UTC is already Monday in UTC+02:00
        let utc = at(2026, 10, 18, 23);
        let offset = FixedOffset::east_opt(2 * 3600).expect("valid offset");
        let shifted = utc.with_timezone(&offset);

        assert_eq!(resolve(PeriodSelector::ThisWeek, &utc).since, date(2026, 10, 12));
        assert_eq!(resolve(PeriodSelector::ThisWeek, &shifted).since, date(2026, 10, 19));
    }

    #[test]
    fn parses_selector_labels() {
        assert_eq!("This week".parse::<PeriodSelector>(), Ok(PeriodSelector::ThisWeek));
        assert_eq!("last-week".parse::<PeriodSelector>(), Ok(PeriodSelector::LastWeek));
        assert_eq!("LAST_WEEK".parse::<PeriodSelector>(), Ok(PeriodSelector::LastWeek));
    }

    #[test]
    fn rejects_unknown_selector() {
        assert_eq!(
            "next month".parse::<PeriodSelector>(),
            Err(ReportError::InvalidSelector("next month".to_string()))
        );
        assert!(matches!(
            "".parse::<PeriodSelector>(),
            Err(ReportError::InvalidSelector(_))
        ));
    }

    #[test]
    fn parses_timezones() {
        assert_eq!("local".parse::<ReportTimezone>(), Ok(ReportTimezone::Local));
        assert_eq!(
            "+05:30".parse::<ReportTimezone>(),
            Ok(ReportTimezone::Fixed(FixedOffset::east_opt(19800).expect("valid offset")))
        );
        assert_eq!(
            "-03".parse::<ReportTimezone>(),
            Ok(ReportTimezone::Fixed(FixedOffset::west_opt(3 * 3600).expect("valid offset")))
        );
        assert!("Europe/Madrid".parse::<ReportTimezone>().is_err());
        assert!("+25:00".parse::<ReportTimezone>().is_err());
    }
}
