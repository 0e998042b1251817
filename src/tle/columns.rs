//! Column table for the NORAD two-line element format.
//!
//! The standard numbers columns from 1; every range here is the 0-indexed,
//! end-exclusive equivalent (columns 3-7 become `2..7`).

use std::ops::Range;

pub const LINE_NUMBER: Range<usize> = 0..1;
pub const SATELLITE_NUMBER: Range<usize> = 2..7;
pub const CHECKSUM: Range<usize> = 68..69;

pub mod line1 {
    use super::Range;

    pub const CLASSIFICATION: Range<usize> = 7..8;
    pub const LAUNCH_YEAR: Range<usize> = 9..11;
    pub const LAUNCH_NUMBER: Range<usize> = 11..14;
    pub const LAUNCH_PIECE: Range<usize> = 14..17;
    pub const EPOCH_YEAR: Range<usize> = 18..20;
    pub const EPOCH_DAY: Range<usize> = 20..32;
    pub const MEAN_MOTION_DOT: Range<usize> = 33..43;
    pub const MEAN_MOTION_DDOT: Range<usize> = 44..52;
    pub const BSTAR: Range<usize> = 53..61;
    pub const EPHEMERIS_TYPE: Range<usize> = 62..63;
    pub const ELEMENT_NUMBER: Range<usize> = 64..68;
}

pub mod line2 {
    use super::Range;

    pub const INCLINATION: Range<usize> = 8..16;
    pub const RIGHT_ASCENSION: Range<usize> = 17..25;
    pub const ECCENTRICITY: Range<usize> = 26..33;
    pub const ARGUMENT_OF_PERIGEE: Range<usize> = 34..42;
    pub const MEAN_ANOMALY: Range<usize> = 43..51;
    pub const MEAN_MOTION: Range<usize> = 52..63;
    pub const REVOLUTION_NUMBER: Range<usize> = 63..68;
}
