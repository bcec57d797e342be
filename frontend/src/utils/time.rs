use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike, Utc, Weekday};
use chrono_tz::Tz;

use crate::config;

const MONTHS_TR: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos", "Eylül", "Ekim",
    "Kasım", "Aralık",
];

fn app_time_zone() -> Tz {
    config::current_time_zone()
}

pub fn now_in_app_tz() -> DateTime<Tz> {
    Utc::now().with_timezone(&app_time_zone())
}

pub fn weekday_name_tr(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Pazartesi",
        Weekday::Tue => "Salı",
        Weekday::Wed => "Çarşamba",
        Weekday::Thu => "Perşembe",
        Weekday::Fri => "Cuma",
        Weekday::Sat => "Cumartesi",
        Weekday::Sun => "Pazar",
    }
}

pub fn month_name_tr(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|index| MONTHS_TR.get(index as usize))
        .copied()
        .unwrap_or_default()
}

/// Long Turkish date: "18 Ekim 2026 Pazar".
pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{} {} {} {}",
        date.day(),
        month_name_tr(date.month()),
        date.year(),
        weekday_name_tr(date.weekday())
    )
}

pub fn format_clock_time<T: Timelike>(time: &T) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        time.hour(),
        time.minute(),
        time.second()
    )
}

/// Server timestamps come as RFC 3339 or as naive ISO 8601 in UTC.
pub fn parse_server_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}

pub fn format_record_time_in(raw: Option<&str>, tz: Tz) -> String {
    raw.and_then(parse_server_timestamp)
        .map(|ts| format_clock_time(&ts.with_timezone(&tz)))
        .unwrap_or_else(|| "-".into())
}

pub fn format_record_time(raw: Option<&str>) -> String {
    format_record_time_in(raw, app_time_zone())
}
