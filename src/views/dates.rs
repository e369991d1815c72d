use std::sync::OnceLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use chrono_tz::Tz;

use crate::utils::config::AppConfig;

/// How dates are displayed, set once at startup.
#[derive(Clone, Debug)]
pub struct DateFormat {
    pub tz: Tz,
    pub date: String,
    pub datetime: String,
}

impl From<&AppConfig> for DateFormat {
    fn from(app: &AppConfig) -> Self {
        Self { tz: app.tz, date: app.date_format.clone(), datetime: app.datetime_format.clone() }
    }
}

static FORMAT: OnceLock<DateFormat> = OnceLock::new();

pub fn set_format(format: DateFormat) {
    if FORMAT.set(format).is_err() {
        tracing::warn!("date format was already set");
    }
}

fn format() -> DateFormat {
    FORMAT.get().cloned().unwrap_or_else(|| DateFormat::from(&AppConfig::default()))
}

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a timestamp from the API.
///
/// Offset-less datetimes are wall-clock times in `tz`, bare dates are UTC midnight.
pub fn parse_timestamp(raw: &str, tz: Tz) -> Option<DateTime<Tz>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&tz));
    }
    if let Some(naive) = NAIVE_FORMATS.iter().find_map(|f| NaiveDateTime::parse_from_str(raw, f).ok()) {
        return tz.from_local_datetime(&naive).earliest();
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc().with_timezone(&tz))
}

fn display(raw: &str, pick: impl FnOnce(&DateFormat) -> &str) -> String {
    let format = format();
    match parse_timestamp(raw, format.tz) {
        Some(dt) => dt.format(pick(&format)).to_string(),
        None => "Invalid Date".into(),
    }
}

/// Date-only label, e.g. `4/10/2025`.
pub fn date_label(raw: &str) -> String {
    display(raw, |f| f.date.as_str())
}

/// Date and time label, e.g. `4/10/2025, 9:30:00 AM`.
pub fn datetime_label(raw: &str) -> String {
    display(raw, |f| f.datetime.as_str())
}

/// Current year in the display timezone.
pub fn current_year() -> String {
    Utc::now().with_timezone(&format().tz).format("%Y").to_string()
}

/// Convert the value of a `datetime-local` input, interpreted in `tz`, to an ISO-8601 UTC instant.
///
/// Nonexistent local times (DST gaps) yield `None`; ambiguous ones resolve to the earlier instant.
pub fn local_input_to_iso(input: &str, tz: Tz) -> Option<String> {
    let input = input.trim();
    let naive = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(input, f).ok())?;
    let local = tz.from_local_datetime(&naive).earliest()?;
    Some(local.with_timezone(&Utc).to_rfc3339_opts(SecondsFormat::Millis, true))
}
