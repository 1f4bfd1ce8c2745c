use chrono::{DateTime, Local, TimeZone};

pub const QUOTE_TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

pub fn local_timestamp_now() -> String {
    format_local_timestamp(&Local::now())
}

pub fn format_local_timestamp<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    at.format(QUOTE_TIMESTAMP_FORMAT).to_string()
}
