//! Calendar dates for frontmatter and `<lastmod>`.
//!
//! Blog frontmatter carries either a plain `YYYY-MM-DD` or a full RFC
//! 3339 timestamp; both parse into `DateTimeUtc` and format back out as
//! W3C datetime for the sitemap. No timezone math, everything is UTC.

use anyhow::{Result, bail};

/// UTC datetime without timezone complexity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeUtc {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateTimeUtc {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Parse `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SSZ`, nothing else.
    ///
    /// Locale strings ("15. ledna 2025"), single-digit fields and
    /// trailing garbage all come back as `None`.
    pub fn parse(s: &str) -> Option<Self> {
        let (date, clock) = match s.split_once('T') {
            Some((date, rest)) => (date, Some(rest.strip_suffix('Z')?)),
            None => (s, None),
        };

        let mut parts = date.split('-');
        let (Some(y), Some(m), Some(d), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return None;
        };

        let dt = match clock {
            None => Self::from_ymd(field(y, 4)?, field(m, 2)?, field(d, 2)?),
            Some(clock) => {
                let mut parts = clock.split(':');
                let (Some(h), Some(min), Some(sec), None) =
                    (parts.next(), parts.next(), parts.next(), parts.next())
                else {
                    return None;
                };
                Self::new(
                    field(y, 4)?,
                    field(m, 2)?,
                    field(d, 2)?,
                    field(h, 2)?,
                    field(min, 2)?,
                    field(sec, 2)?,
                )
            }
        };

        dt.validate().ok()?;
        Some(dt)
    }

    /// Reject calendar-impossible values.
    pub fn validate(self) -> Result<()> {
        if !(1..=12).contains(&self.month) {
            bail!("month out of range: {}", self.month);
        }
        if self.day == 0 || self.day > days_in_month(self.year, self.month) {
            bail!("day out of range: {}", self.day);
        }
        if self.hour > 23 || self.minute > 59 || self.second > 59 {
            bail!(
                "time out of range: {:02}:{:02}:{:02}",
                self.hour,
                self.minute,
                self.second
            );
        }
        Ok(())
    }

    /// RFC 3339 form: `YYYY-MM-DDTHH:MM:SSZ`.
    pub fn to_rfc3339(self) -> String {
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }

    /// W3C datetime for sitemap `<lastmod>`.
    ///
    /// Midnight collapses to the date-only form, which is what plain
    /// frontmatter dates round-trip to.
    pub fn to_lastmod(self) -> String {
        if (self.hour, self.minute, self.second) == (0, 0, 0) {
            format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
        } else {
            self.to_rfc3339()
        }
    }
}

/// Parse a fixed-width decimal field. Width is part of the grammar:
/// `"6"` is not a valid month, `"2024"` is not a valid day.
#[inline]
fn field<T: std::str::FromStr>(s: &str, width: usize) -> Option<T> {
    if s.len() != width || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

const fn is_leap_year(year: u16) -> bool {
    year % 400 == 0 || (year % 4 == 0 && year % 100 != 0)
}

const fn days_in_month(year: u16, month: u8) -> u8 {
    const DAYS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    if month < 1 || month > 12 {
        return 0;
    }
    if month == 2 && is_leap_year(year) {
        return 29;
    }
    DAYS[month as usize - 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_only() {
        let dt = DateTimeUtc::parse("2025-01-03").unwrap();
        assert_eq!(dt, DateTimeUtc::from_ymd(2025, 1, 3));
    }

    #[test]
    fn test_parse_rfc3339() {
        let dt = DateTimeUtc::parse("2024-06-15T14:30:45Z").unwrap();
        assert_eq!(dt, DateTimeUtc::new(2024, 6, 15, 14, 30, 45));
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        // Czech locale form and lax variants
        assert!(DateTimeUtc::parse("15. ledna 2025").is_none());
        assert!(DateTimeUtc::parse("15.6.2024").is_none());
        assert!(DateTimeUtc::parse("2024-6-15").is_none());
        assert!(DateTimeUtc::parse("2024-06-15T14:30").is_none());
        assert!(DateTimeUtc::parse("2024-06-15T14:30:45").is_none());
        assert!(DateTimeUtc::parse("2024-06-15T14:30:45Zxx").is_none());
        assert!(DateTimeUtc::parse("").is_none());
    }

    #[test]
    fn test_parse_rejects_impossible_dates() {
        assert!(DateTimeUtc::parse("2024-13-01").is_none());
        assert!(DateTimeUtc::parse("2024-02-30").is_none());
        assert!(DateTimeUtc::parse("2023-02-29").is_none());
    }

    #[test]
    fn test_validate_day_bounds() {
        assert!(DateTimeUtc::from_ymd(2024, 1, 1).validate().is_ok());
        assert!(DateTimeUtc::from_ymd(2024, 12, 31).validate().is_ok());

        assert!(DateTimeUtc::from_ymd(2024, 6, 0).validate().is_err());
        assert!(DateTimeUtc::from_ymd(2024, 1, 32).validate().is_err());
        assert!(DateTimeUtc::from_ymd(2024, 4, 31).validate().is_err());
    }

    #[test]
    fn test_validate_time_bounds() {
        assert!(DateTimeUtc::new(2024, 6, 15, 23, 59, 59).validate().is_ok());

        assert!(DateTimeUtc::new(2024, 6, 15, 24, 0, 0).validate().is_err());
        assert!(DateTimeUtc::new(2024, 6, 15, 12, 60, 0).validate().is_err());
        assert!(
            DateTimeUtc::new(2024, 6, 15, 12, 30, 60)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_leap_years() {
        assert!(DateTimeUtc::from_ymd(2024, 2, 29).validate().is_ok());
        // Century rule: 2000 leaps, 1900 does not
        assert!(DateTimeUtc::from_ymd(2000, 2, 29).validate().is_ok());
        assert!(DateTimeUtc::from_ymd(1900, 2, 29).validate().is_err());
        assert!(DateTimeUtc::from_ymd(2023, 2, 29).validate().is_err());
    }

    #[test]
    fn test_to_rfc3339() {
        let dt = DateTimeUtc::new(2024, 6, 15, 14, 30, 45);
        assert_eq!(dt.to_rfc3339(), "2024-06-15T14:30:45Z");
    }

    #[test]
    fn test_lastmod_forms() {
        assert_eq!(DateTimeUtc::from_ymd(2025, 1, 3).to_lastmod(), "2025-01-03");
        assert_eq!(
            DateTimeUtc::new(2024, 6, 15, 14, 30, 45).to_lastmod(),
            "2024-06-15T14:30:45Z"
        );
    }

    #[test]
    fn test_frontmatter_date_roundtrip() {
        let dt = DateTimeUtc::parse("2025-01-03").unwrap();
        assert_eq!(dt.to_lastmod(), "2025-01-03");
    }
}
