//! The fixed school calendar: teaching days, periods, grades and sections.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Grade levels that can hold classes.
pub const GRADES: [i32; 3] = [10, 11, 12];

/// Section numbers available within every grade.
pub const SECTIONS: [i32; 8] = [1, 2, 3, 4, 5, 6, 7, 8];

pub const FIRST_PERIOD: i32 = 1;
pub const LAST_PERIOD: i32 = 7;

/// A teaching day. Declaration order is the order of the school week and
/// drives timetable sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
}

impl Weekday {
    pub const ALL: [Weekday; 5] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownWeekday(pub String);

impl fmt::Display for UnknownWeekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown weekday '{}'", self.0)
    }
}

impl std::error::Error for UnknownWeekday {}

impl FromStr for Weekday {
    type Err = UnknownWeekday;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weekday::ALL
            .into_iter()
            .find(|day| day.as_str() == s)
            .ok_or_else(|| UnknownWeekday(s.to_string()))
    }
}

pub fn is_valid_period(period: i32) -> bool {
    (FIRST_PERIOD..=LAST_PERIOD).contains(&period)
}

pub fn is_valid_grade(grade: i32) -> bool {
    GRADES.contains(&grade)
}

pub fn is_valid_section(section: i32) -> bool {
    SECTIONS.contains(&section)
}
