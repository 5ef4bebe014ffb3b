use serde::{Deserialize, Serialize};
use std::fmt;

// ===== MESSAGE TYPES =====

#[derive(Serialize, Deserialize, Debug)]
pub enum UpMsg {
    LoadConfig,
    SaveConfig(DashboardConfig),
}

#[derive(Serialize, Deserialize, Debug)]
pub enum DownMsg {
    ConfigLoaded(DashboardConfig),
    ConfigSaved,
    ConfigError(String),
}

// ===== CONFIG TYPES =====

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct DashboardConfig {
    pub theme: Theme,
    /// Origin of the aggregate API, e.g. "http://localhost:5000".
    /// Empty string means same-origin requests.
    pub api_base: String,
}

impl DashboardConfig {
    /// Normalize values loaded from disk. Returns warnings for anything
    /// that had to be fixed.
    pub fn validate_and_fix(&mut self) -> Vec<String> {
        let mut warnings = Vec::new();
        while self.api_base.ends_with('/') {
            self.api_base.pop();
            if warnings.is_empty() {
                warnings.push("api_base: trailing slash removed".to_string());
            }
        }
        warnings
    }
}

// ===== SCHEMA ERRORS =====

/// Rejection reason for a payload that fails the wire contract.
///
/// Both variants collapse into the empty display state at the UI boundary,
/// but stay distinguishable for logging and tests.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaError {
    /// Wrong arity, wrong type, missing field.
    UnexpectedShape { context: String },
    /// Well-shaped but outside the contract's value domain.
    ValueOutOfRange { context: String },
}

impl SchemaError {
    fn shape(endpoint: &str, detail: impl fmt::Display) -> Self {
        SchemaError::UnexpectedShape {
            context: format!("{}: {}", endpoint, detail),
        }
    }

    fn out_of_range(endpoint: &str, detail: impl fmt::Display) -> Self {
        SchemaError::ValueOutOfRange {
            context: format!("{}: {}", endpoint, detail),
        }
    }

    pub fn context(&self) -> &str {
        match self {
            SchemaError::UnexpectedShape { context } => context,
            SchemaError::ValueOutOfRange { context } => context,
        }
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::UnexpectedShape { context } => {
                write!(f, "unexpected payload shape ({})", context)
            }
            SchemaError::ValueOutOfRange { context } => {
                write!(f, "payload value out of range ({})", context)
            }
        }
    }
}

// ===== VALUE TYPES =====

/// A clock time as whole seconds since midnight.
///
/// Uses u32 internally: second resolution, no floating point drift in
/// comparisons, and the valid domain `[0, 86_400)` is checked at every
/// construction site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);
    pub const SECONDS_PER_DAY: u32 = 86_400;

    /// Create from whole seconds since midnight. `None` when outside
    /// `[0, 86_400)`.
    pub fn from_seconds(seconds: u32) -> Option<Self> {
        (seconds < Self::SECONDS_PER_DAY).then_some(TimeOfDay(seconds))
    }

    /// Create from a possibly fractional second offset, as returned by the
    /// mean-time endpoints (means of integer offsets). Rounds to the nearest
    /// whole second, then range-checks.
    pub fn from_mean_seconds(seconds: f64) -> Option<Self> {
        if !seconds.is_finite() || seconds < 0.0 {
            return None;
        }
        let rounded = seconds.round();
        if rounded >= Self::SECONDS_PER_DAY as f64 {
            return None;
        }
        Some(TimeOfDay(rounded as u32))
    }

    pub fn seconds(self) -> u32 {
        self.0
    }

    pub fn hour(self) -> u32 {
        self.0 / 3600
    }

    pub fn minute(self) -> u32 {
        self.0 % 3600 / 60
    }

    pub fn second(self) -> u32 {
        self.0 % 60
    }

    /// Position within the day as a fraction in `[0, 1)`, for chart geometry.
    pub fn fraction_of_day(self) -> f64 {
        self.0 as f64 / Self::SECONDS_PER_DAY as f64
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour(), self.minute(), self.second())
    }
}

/// Worked time decomposed into whole hours and minutes for display.
///
/// `minutes` is `round(fractional_part * 60)`; a result of 60 carries into
/// the hour, so "7h 60m" can never be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkedTime {
    hours: u32,
    minutes: u8,
}

impl WorkedTime {
    /// Create from fractional hours. `None` for NaN, infinite or negative
    /// input.
    pub fn from_hours(worked_hours: f64) -> Option<Self> {
        if !worked_hours.is_finite() || worked_hours < 0.0 {
            return None;
        }
        let mut hours = worked_hours.floor() as u32;
        let mut minutes = ((worked_hours - worked_hours.floor()) * 60.0).round() as u8;
        if minutes == 60 {
            hours += 1;
            minutes = 0;
        }
        Some(WorkedTime { hours, minutes })
    }

    pub fn hours(self) -> u32 {
        self.hours
    }

    pub fn minutes(self) -> u8 {
        self.minutes
    }
}

impl fmt::Display for WorkedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hours, self.minutes)
    }
}

// ===== WIRE SCHEMAS =====

/// Number of rows every weekday aggregate carries, Mon..Sun.
pub const WEEKDAY_COUNT: usize = 7;

/// Only the first five ranked employees are ever displayed.
pub const TOP_EMPLOYEES_LIMIT: usize = 5;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub name: String,
    pub avatar_url: String,
}

/// One selectable user, as listed by `/api/v1/users`.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRef {
    pub id: u32,
    pub name: String,
    pub avatar_url: String,
}

/// One weekday row of `/api/v1/mean_time_weekday/{id}`.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekdayMean {
    pub label: String,
    pub mean: TimeOfDay,
}

/// One weekday row of `/api/v1/presence_start_end/{id}`.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekdaySpan {
    pub label: String,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

/// One weekday row of `/api/v1/presence_weekday/{id}` (header row stripped).
#[derive(Debug, Clone, PartialEq)]
pub struct WeekdayTotal {
    pub label: String,
    pub total_seconds: u64,
}

/// One selectable month, as listed by `/api/v1/top_employees/{year}`.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthRef {
    pub month: u32,
    pub label: String,
}

/// One ranked employee of `/api/v1/top_employees/{year}/{month}`.
/// Rank is the array index.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedEmployee {
    pub name: String,
    pub avatar_url: String,
    pub worked: WorkedTime,
}

#[derive(Deserialize)]
struct RankedStats {
    avatar_url: String,
    worked_hours: f64,
}

/// `[[id, {"name": .., "avatar_url": ..}], ..]` → ordered user list.
pub fn parse_users(raw: serde_json::Value) -> Result<Vec<UserRef>, SchemaError> {
    let entries: Vec<(u32, UserProfile)> =
        serde_json::from_value(raw).map_err(|error| SchemaError::shape("users", error))?;
    Ok(entries
        .into_iter()
        .map(|(id, profile)| UserRef {
            id,
            name: profile.name,
            avatar_url: profile.avatar_url,
        })
        .collect())
}

/// `[2013, 2014, ..]` → ordered year list.
pub fn parse_years(raw: serde_json::Value) -> Result<Vec<i32>, SchemaError> {
    serde_json::from_value(raw).map_err(|error| SchemaError::shape("years", error))
}

/// `[["Mon", 29934.5], ..]`. Exactly one row per weekday, response order
/// preserved (it is the chart's category axis order). The mean offsets are
/// fractional; they are rounded to whole seconds and range-checked.
pub fn parse_mean_time_weekday(raw: serde_json::Value) -> Result<Vec<WeekdayMean>, SchemaError> {
    const ENDPOINT: &str = "mean_time_weekday";
    let rows: Vec<(String, f64)> =
        serde_json::from_value(raw).map_err(|error| SchemaError::shape(ENDPOINT, error))?;
    if rows.is_empty() {
        return Ok(Vec::new());
    }
    if rows.len() != WEEKDAY_COUNT {
        return Err(SchemaError::shape(
            ENDPOINT,
            format!("expected {} weekday rows, got {}", WEEKDAY_COUNT, rows.len()),
        ));
    }
    rows.into_iter()
        .map(|(label, seconds)| {
            let mean = TimeOfDay::from_mean_seconds(seconds).ok_or_else(|| {
                SchemaError::out_of_range(ENDPOINT, format!("{}: {} s", label, seconds))
            })?;
            Ok(WeekdayMean { label, mean })
        })
        .collect()
}

/// `[["Mon", 33592.3, 58765.1], ..]`. Start/end offset pair per weekday.
pub fn parse_presence_start_end(raw: serde_json::Value) -> Result<Vec<WeekdaySpan>, SchemaError> {
    const ENDPOINT: &str = "presence_start_end";
    let rows: Vec<(String, f64, f64)> =
        serde_json::from_value(raw).map_err(|error| SchemaError::shape(ENDPOINT, error))?;
    if rows.is_empty() {
        return Ok(Vec::new());
    }
    if rows.len() != WEEKDAY_COUNT {
        return Err(SchemaError::shape(
            ENDPOINT,
            format!("expected {} weekday rows, got {}", WEEKDAY_COUNT, rows.len()),
        ));
    }
    rows.into_iter()
        .map(|(label, start, end)| {
            let start = TimeOfDay::from_mean_seconds(start).ok_or_else(|| {
                SchemaError::out_of_range(ENDPOINT, format!("{} start: {} s", label, start))
            })?;
            let end = TimeOfDay::from_mean_seconds(end).ok_or_else(|| {
                SchemaError::out_of_range(ENDPOINT, format!("{} end: {} s", label, end))
            })?;
            Ok(WeekdaySpan { label, start, end })
        })
        .collect()
}

/// `[["Weekday", "Presence (s)"], ["Mon", 12345], ..]`. The endpoint ships a
/// header row ahead of the weekday totals; it is required and stripped here.
/// Totals are interval sums, so they may exceed a day but never go negative.
pub fn parse_presence_weekday(raw: serde_json::Value) -> Result<Vec<WeekdayTotal>, SchemaError> {
    const ENDPOINT: &str = "presence_weekday";
    let mut rows: Vec<serde_json::Value> =
        serde_json::from_value(raw).map_err(|error| SchemaError::shape(ENDPOINT, error))?;
    if rows.is_empty() {
        return Ok(Vec::new());
    }
    let header: Result<(String, String), _> = serde_json::from_value(rows.remove(0));
    if header.is_err() {
        return Err(SchemaError::shape(ENDPOINT, "missing header row"));
    }
    if rows.is_empty() {
        return Ok(Vec::new());
    }
    if rows.len() != WEEKDAY_COUNT {
        return Err(SchemaError::shape(
            ENDPOINT,
            format!("expected {} weekday rows, got {}", WEEKDAY_COUNT, rows.len()),
        ));
    }
    rows.into_iter()
        .map(|row| {
            let (label, seconds): (String, f64) =
                serde_json::from_value(row).map_err(|error| SchemaError::shape(ENDPOINT, error))?;
            if !seconds.is_finite() || seconds < 0.0 {
                return Err(SchemaError::out_of_range(
                    ENDPOINT,
                    format!("{}: {} s", label, seconds),
                ));
            }
            Ok(WeekdayTotal {
                label,
                total_seconds: seconds.round() as u64,
            })
        })
        .collect()
}

/// `[[1, "January"], ..]` → ordered month list for the selected year.
pub fn parse_months(raw: serde_json::Value) -> Result<Vec<MonthRef>, SchemaError> {
    const ENDPOINT: &str = "top_employees (months)";
    let entries: Vec<(u32, String)> =
        serde_json::from_value(raw).map_err(|error| SchemaError::shape(ENDPOINT, error))?;
    entries
        .into_iter()
        .map(|(month, label)| {
            if !(1..=12).contains(&month) {
                return Err(SchemaError::out_of_range(
                    ENDPOINT,
                    format!("month {}", month),
                ));
            }
            Ok(MonthRef { month, label })
        })
        .collect()
}

/// `[["John Doe", {"avatar_url": .., "worked_hours": 160.5}], ..]`. Already
/// ranked by the backend; truncated to the first [`TOP_EMPLOYEES_LIMIT`]
/// entries. A shorter list stays shorter, it is never an error.
pub fn parse_top_employees(raw: serde_json::Value) -> Result<Vec<RankedEmployee>, SchemaError> {
    const ENDPOINT: &str = "top_employees";
    let entries: Vec<(String, RankedStats)> =
        serde_json::from_value(raw).map_err(|error| SchemaError::shape(ENDPOINT, error))?;
    entries
        .into_iter()
        .take(TOP_EMPLOYEES_LIMIT)
        .map(|(name, stats)| {
            let worked = WorkedTime::from_hours(stats.worked_hours).ok_or_else(|| {
                SchemaError::out_of_range(
                    ENDPOINT,
                    format!("{}: {} worked hours", name, stats.worked_hours),
                )
            })?;
            Ok(RankedEmployee {
                name,
                avatar_url: stats.avatar_url,
                worked,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn time_of_day_round_trips_through_formatting() {
        for seconds in [0_u32, 1, 59, 60, 3599, 3600, 35_999, 43_200, 86_399] {
            let time = TimeOfDay::from_seconds(seconds).unwrap();
            let formatted = time.to_string();
            let parts: Vec<u32> = formatted.split(':').map(|p| p.parse().unwrap()).collect();
            assert_eq!(parts.len(), 3, "{}", formatted);
            assert_eq!(parts[0] * 3600 + parts[1] * 60 + parts[2], seconds);
        }
    }

    #[test]
    fn time_of_day_formats_with_zero_padding() {
        let time = TimeOfDay::from_seconds(9 * 3600 + 5 * 60 + 7).unwrap();
        assert_eq!(time.to_string(), "09:05:07");
        assert_eq!(TimeOfDay::MIDNIGHT.to_string(), "00:00:00");
    }

    #[test]
    fn time_of_day_rejects_out_of_range() {
        assert_eq!(TimeOfDay::from_seconds(86_400), None);
        assert_eq!(TimeOfDay::from_mean_seconds(-1.0), None);
        assert_eq!(TimeOfDay::from_mean_seconds(86_400.0), None);
        assert_eq!(TimeOfDay::from_mean_seconds(f64::NAN), None);
        assert_eq!(TimeOfDay::from_mean_seconds(f64::INFINITY), None);
    }

    #[test]
    fn time_of_day_rounds_fractional_means() {
        assert_eq!(
            TimeOfDay::from_mean_seconds(29_934.6).unwrap().seconds(),
            29_935
        );
        // 86399.6 rounds up past the end of the day.
        assert_eq!(TimeOfDay::from_mean_seconds(86_399.6), None);
        assert_eq!(
            TimeOfDay::from_mean_seconds(86_399.4).unwrap().seconds(),
            86_399
        );
    }

    #[test]
    fn worked_time_decomposes_hours_and_minutes() {
        let worked = WorkedTime::from_hours(2.5).unwrap();
        assert_eq!((worked.hours(), worked.minutes()), (2, 30));
        assert_eq!(worked.to_string(), "2:30");

        let worked = WorkedTime::from_hours(160.0).unwrap();
        assert_eq!((worked.hours(), worked.minutes()), (160, 0));
        assert_eq!(worked.to_string(), "160:00");
    }

    #[test]
    fn worked_time_carries_at_the_sixty_minute_boundary() {
        // round(0.999 * 60) == 60 must carry, never display "7:60"
        let worked = WorkedTime::from_hours(7.999).unwrap();
        assert_eq!((worked.hours(), worked.minutes()), (8, 0));
        assert_eq!(worked.to_string(), "8:00");
    }

    #[test]
    fn worked_time_rejects_invalid_input() {
        assert_eq!(WorkedTime::from_hours(-0.5), None);
        assert_eq!(WorkedTime::from_hours(f64::NAN), None);
        assert_eq!(WorkedTime::from_hours(f64::INFINITY), None);
    }

    #[test]
    fn parse_users_preserves_response_order() {
        let raw = json!([
            [141, {"name": "Adam P.", "avatar_url": "/api/img/141"}],
            [10, {"name": "Maciej Z.", "avatar_url": "/api/img/10"}],
        ]);
        let users = parse_users(raw).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, 141);
        assert_eq!(users[0].name, "Adam P.");
        assert_eq!(users[1].id, 10);
        assert_eq!(users[1].avatar_url, "/api/img/10");
    }

    #[test]
    fn parse_users_fails_closed_on_shape_mismatch() {
        let raw = json!([["not-a-number", {"name": "x", "avatar_url": "y"}]]);
        assert!(matches!(
            parse_users(raw),
            Err(SchemaError::UnexpectedShape { .. })
        ));
    }

    #[test]
    fn parse_mean_time_weekday_keeps_row_order_and_count() {
        let labels = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
        let raw = json!(
            labels
                .iter()
                .enumerate()
                .map(|(i, l)| json!([l, (i as f64) * 3600.0 + 0.5]))
                .collect::<Vec<_>>()
        );
        let rows = parse_mean_time_weekday(raw).unwrap();
        assert_eq!(rows.len(), WEEKDAY_COUNT);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.label, labels[i]);
            assert_eq!(row.mean.seconds(), i as u32 * 3600 + 1);
        }
    }

    #[test]
    fn parse_mean_time_weekday_accepts_zero_mean_rows() {
        // A weekday with no presence entries yields mean 0, not a hole.
        let raw = json!([
            ["Mon", 0], ["Tue", 0], ["Wed", 0], ["Thu", 0],
            ["Fri", 0], ["Sat", 0], ["Sun", 0]
        ]);
        let rows = parse_mean_time_weekday(raw).unwrap();
        assert!(rows.iter().all(|row| row.mean == TimeOfDay::MIDNIGHT));
    }

    #[test]
    fn parse_mean_time_weekday_rejects_wrong_row_count() {
        let raw = json!([["Mon", 1], ["Tue", 2]]);
        assert!(matches!(
            parse_mean_time_weekday(raw),
            Err(SchemaError::UnexpectedShape { .. })
        ));
    }

    #[test]
    fn parse_mean_time_weekday_rejects_out_of_range_seconds() {
        let raw = json!([
            ["Mon", 90_000], ["Tue", 0], ["Wed", 0], ["Thu", 0],
            ["Fri", 0], ["Sat", 0], ["Sun", 0]
        ]);
        assert!(matches!(
            parse_mean_time_weekday(raw),
            Err(SchemaError::ValueOutOfRange { .. })
        ));
    }

    #[test]
    fn parse_mean_time_weekday_empty_response_is_not_an_error() {
        assert_eq!(parse_mean_time_weekday(json!([])).unwrap(), Vec::new());
    }

    #[test]
    fn parse_presence_start_end_converts_both_offsets() {
        let raw = json!([
            ["Mon", 33_592.0, 58_765.0], ["Tue", 0, 0], ["Wed", 0, 0],
            ["Thu", 0, 0], ["Fri", 0, 0], ["Sat", 0, 0], ["Sun", 0, 0]
        ]);
        let rows = parse_presence_start_end(raw).unwrap();
        assert_eq!(rows[0].start.to_string(), "09:19:52");
        assert_eq!(rows[0].end.to_string(), "16:19:25");
    }

    #[test]
    fn parse_presence_start_end_rejects_wrong_arity() {
        let raw = json!([["Mon", 1.0]]);
        assert!(matches!(
            parse_presence_start_end(raw),
            Err(SchemaError::UnexpectedShape { .. })
        ));
    }

    #[test]
    fn parse_presence_weekday_strips_the_header_row() {
        let raw = json!([
            ["Weekday", "Presence (s)"],
            ["Mon", 3600], ["Tue", 7200], ["Wed", 0], ["Thu", 0],
            ["Fri", 0], ["Sat", 0], ["Sun", 0]
        ]);
        let rows = parse_presence_weekday(raw).unwrap();
        assert_eq!(rows.len(), WEEKDAY_COUNT);
        assert_eq!(rows[0].label, "Mon");
        assert_eq!(rows[0].total_seconds, 3600);
        assert_eq!(rows[1].total_seconds, 7200);
    }

    #[test]
    fn parse_presence_weekday_requires_the_header_row() {
        let raw = json!([
            ["Mon", 3600], ["Tue", 0], ["Wed", 0], ["Thu", 0],
            ["Fri", 0], ["Sat", 0], ["Sun", 0]
        ]);
        assert!(matches!(
            parse_presence_weekday(raw),
            Err(SchemaError::UnexpectedShape { .. })
        ));
    }

    #[test]
    fn parse_presence_weekday_allows_totals_above_one_day() {
        let raw = json!([
            ["Weekday", "Presence (s)"],
            ["Mon", 500_000], ["Tue", 0], ["Wed", 0], ["Thu", 0],
            ["Fri", 0], ["Sat", 0], ["Sun", 0]
        ]);
        assert_eq!(parse_presence_weekday(raw).unwrap()[0].total_seconds, 500_000);
    }

    #[test]
    fn parse_presence_weekday_rejects_negative_totals() {
        let raw = json!([
            ["Weekday", "Presence (s)"],
            ["Mon", -1], ["Tue", 0], ["Wed", 0], ["Thu", 0],
            ["Fri", 0], ["Sat", 0], ["Sun", 0]
        ]);
        assert!(matches!(
            parse_presence_weekday(raw),
            Err(SchemaError::ValueOutOfRange { .. })
        ));
    }

    #[test]
    fn parse_months_validates_the_month_number() {
        let raw = json!([[1, "January"], [2, "February"]]);
        let months = parse_months(raw).unwrap();
        assert_eq!(months[1].label, "February");

        let raw = json!([[13, "Undecimber"]]);
        assert!(matches!(
            parse_months(raw),
            Err(SchemaError::ValueOutOfRange { .. })
        ));
    }

    #[test]
    fn parse_top_employees_truncates_to_five_in_rank_order() {
        let raw = json!(
            (0..7)
                .map(|i| json!([
                    format!("Employee {}", i),
                    {"avatar_url": format!("/api/img/{}", i), "worked_hours": 100.0 - i as f64}
                ]))
                .collect::<Vec<_>>()
        );
        let ranked = parse_top_employees(raw).unwrap();
        assert_eq!(ranked.len(), TOP_EMPLOYEES_LIMIT);
        for (i, employee) in ranked.iter().enumerate() {
            assert_eq!(employee.name, format!("Employee {}", i));
        }
    }

    #[test]
    fn parse_top_employees_keeps_shorter_lists_shorter() {
        let raw = json!([
            ["Only One", {"avatar_url": "/api/img/1", "worked_hours": 2.5}]
        ]);
        let ranked = parse_top_employees(raw).unwrap();
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].worked.to_string(), "2:30");
        assert_eq!(parse_top_employees(json!([])).unwrap(), Vec::new());
    }

    #[test]
    fn parse_top_employees_rejects_negative_worked_hours() {
        let raw = json!([
            ["Broken", {"avatar_url": "/api/img/1", "worked_hours": -3.0}]
        ]);
        assert!(matches!(
            parse_top_employees(raw),
            Err(SchemaError::ValueOutOfRange { .. })
        ));
    }

    #[test]
    fn config_validate_and_fix_normalizes_api_base() {
        let mut config = DashboardConfig {
            theme: Theme::Dark,
            api_base: "http://localhost:5000/".to_string(),
        };
        let warnings = config.validate_and_fix();
        assert_eq!(config.api_base, "http://localhost:5000");
        assert_eq!(warnings.len(), 1);

        let mut config = DashboardConfig::default();
        assert!(config.validate_and_fix().is_empty());
        assert_eq!(config.theme, Theme::Light);
    }
}
