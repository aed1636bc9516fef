use chrono::{Datelike, NaiveDate};

/// The calendar date written on line 1 of every list file, as `D,M,Y`
/// decimal integers. Kept as raw fields rather than a `NaiveDate` so that a
/// stamp naming an impossible date still round-trips through comparison
/// instead of failing the load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateStamp {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

impl DateStamp {
    /// Parse a `D,M,Y` line. Returns `None` unless the line is exactly three
    /// comma-separated integers; callers then treat the line as task data.
    pub fn from_line(line: &str) -> Option<DateStamp> {
        let mut fields = line.split(',');
        let day = fields.next()?.trim().parse().ok()?;
        let month = fields.next()?.trim().parse().ok()?;
        let year = fields.next()?.trim().parse().ok()?;
        if fields.next().is_some() {
            return None;
        }
        Some(DateStamp { day, month, year })
    }

    /// Stamp for the given calendar date
    pub fn for_date(date: NaiveDate) -> DateStamp {
        DateStamp {
            day: date.day(),
            month: date.month(),
            year: date.year(),
        }
    }

    /// Serialized form, without trailing newline
    pub fn to_line(self) -> String {
        format!("{},{},{}", self.day, self.month, self.year)
    }

    /// Whether this stamp names the given date
    pub fn matches(self, date: NaiveDate) -> bool {
        self.day == date.day() && self.month == date.month() && self.year == date.year()
    }
}
