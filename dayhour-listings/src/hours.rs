use std::fmt::{self, Display};
use std::ops::Range;

use dayhour_core::FilterError;
use serde::{Deserialize, Serialize};

/// Start and end time in `HHMM` form. Values from 2400 to 2700 mean
/// early morning of the following day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "(u16, u16)", into = "(u16, u16)")]
pub struct Hours {
    start: u16,
    end: u16,
}

impl Hours {
    pub fn new(start: u16, end: u16) -> Result<Self, FilterError> {
        Ok(Self {
            start: validate(start)?,
            end: validate(end)?,
        })
    }

    pub fn start(&self) -> u16 {
        self.start
    }

    pub fn end(&self) -> u16 {
        self.end
    }

    /// Whole hours touched by the span; partial hours round up, e.g. 1630 -> 17.
    pub fn to_range(&self) -> Range<u16> {
        round_up_hour(self.start)..round_up_hour(self.end)
    }
}

impl TryFrom<(u16, u16)> for Hours {
    type Error = FilterError;

    fn try_from((start, end): (u16, u16)) -> Result<Self, Self::Error> {
        Hours::new(start, end)
    }
}

impl From<Hours> for (u16, u16) {
    fn from(hours: Hours) -> Self {
        (hours.start, hours.end)
    }
}

impl Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", format_time(self.start), format_time(self.end))
    }
}

pub(crate) fn round_up_hour(time: u16) -> u16 {
    if time % 100 > 0 {
        time / 100 + 1
    } else {
        time / 100
    }
}

fn validate(time: u16) -> Result<u16, FilterError> {
    let wrapped = wraparound(time);
    if wrapped / 100 > 23 || wrapped % 100 > 59 {
        return Err(FilterError::InvalidHours(time));
    }
    Ok(time)
}

fn wraparound(time: u16) -> u16 {
    if (2400..=2700).contains(&time) {
        time - 2400
    } else {
        time
    }
}

fn format_time(time: u16) -> String {
    let time = wraparound(time);
    let hours = time / 100;
    let minutes = time % 100;
    let (display_hour, suffix) = match hours {
        0 => (12, "am"),
        1..=11 => (hours, "am"),
        12 => (12, "pm"),
        _ => (hours - 12, "pm"),
    };
    format!("{display_hour}:{minutes:02}{suffix}")
}
