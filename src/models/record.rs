use crate::constants::EPOCH_CENTURY_PIVOT;
use crate::errors::TleError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Unclassified,
    Classified,
}

impl From<char> for Classification {
    fn from(c: char) -> Self {
        if c == 'U' {
            Classification::Unclassified
        } else {
            Classification::Classified
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Unclassified => write!(f, "Unclassified"),
            Classification::Classified => write!(f, "Classified"),
        }
    }
}

/// COSPAR designator: launch year, launch number of that year and piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternationalDesignator {
    pub launch_year: u8,
    pub launch_number: u16,
    pub piece: String,
}

/// One decoded element set. Built by [`crate::tle::parser::parse`] and never modified.
#[derive(Debug, Clone, PartialEq)]
pub struct TleRecord {
    pub title: String,
    pub satellite_number: u32,
    pub classification: Classification,
    pub international_designator: InternationalDesignator,

    // Epoch
    pub epoch_year: u8,          // Two-digit year
    pub epoch_day_fraction: f64, // Day of year with fractional part

    // Drag terms
    pub mean_motion_derivative_1: f64, // First derivative of mean motion / 2 [rev/day²]
    pub mean_motion_derivative_2: f64, // Second derivative of mean motion / 6 [rev/day³]
    pub bstar_drag: f64,               // [1/earth radii]
    pub ephemeris_type: u8,
    pub element_number: u16,

    // Mean elements
    pub inclination_deg: f64,
    pub right_ascension_deg: f64,
    pub eccentricity: f64,
    pub argument_of_perigee_deg: f64,
    pub mean_anomaly_deg: f64,
    pub mean_motion_rev_per_day: f64,
    pub revolution_number: u32,

    pub checksum_line1: u8,
    pub checksum_line2: u8,
}

impl TleRecord {
    /// Four-digit epoch year.
    pub fn epoch_full_year(&self) -> i32 {
        expand_epoch_year(self.epoch_year)
    }
}

impl FromStr for TleRecord {
    type Err = TleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::tle::parser::parse(s)
    }
}

/// Two-digit years below 70 are 20xx, the rest 19xx.
pub fn expand_epoch_year(two_digit: u8) -> i32 {
    if two_digit < EPOCH_CENTURY_PIVOT {
        2000 + two_digit as i32
    } else {
        1900 + two_digit as i32
    }
}
