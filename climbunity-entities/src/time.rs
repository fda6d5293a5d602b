use std::fmt;

use time::{
    format_description::BorrowedFormatItem, macros::format_description, Date, OffsetDateTime,
    PrimitiveDateTime,
};

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const DATETIME_LOCAL_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]");

/// Unix timestamp with second precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn now() -> Self {
        OffsetDateTime::now_utc().into()
    }

    pub const fn from_seconds(seconds: i64) -> Self {
        Self(seconds)
    }

    pub const fn into_seconds(self) -> i64 {
        self.0
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        Self(from.unix_timestamp())
    }
}

impl TryFrom<Timestamp> for OffsetDateTime {
    type Error = time::error::ComponentRange;
    fn try_from(from: Timestamp) -> Result<Self, Self::Error> {
        OffsetDateTime::from_unix_timestamp(from.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match OffsetDateTime::from_unix_timestamp(self.0) {
            Ok(dt) => write!(f, "{dt}"),
            Err(_) => write!(f, "{}", self.0),
        }
    }
}

/// Parse a calendar date from an HTML `<input type="date">` value.
pub fn parse_date(s: &str) -> Result<Date, time::error::Parse> {
    Date::parse(s, DATE_FORMAT)
}

pub fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

/// Parse a timestamp from an HTML `<input type="datetime-local">` value.
/// The wall-clock time is interpreted as UTC.
pub fn parse_datetime_local(s: &str) -> Result<Timestamp, time::error::Parse> {
    let dt = PrimitiveDateTime::parse(s, DATETIME_LOCAL_FORMAT)?;
    Ok(dt.assume_utc().into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_from_into_seconds() {
        let t1 = Timestamp::now();
        let s1 = t1.into_seconds();
        let t2 = Timestamp::from_seconds(s1);
        assert_eq!(t1, t2);
    }

    #[test]
    fn parse_and_format_date() {
        let date = parse_date("2022-02-02").unwrap();
        assert_eq!(format_date(date), "2022-02-02");
        assert!(parse_date("02.02.2022").is_err());
    }

    #[test]
    fn parse_datetime_local_input() {
        let ts = parse_datetime_local("1970-01-01T00:01").unwrap();
        assert_eq!(ts.into_seconds(), 60);
        assert!(parse_datetime_local("1970-01-01").is_err());
    }
}
