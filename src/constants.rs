pub const GM_EARTH: f64 = 398600.4418; // Standard gravitational parameter of Earth (km³/s²)
pub const SECONDS_PER_DAY: f64 = 86_400.0;
pub const MICROSECONDS_PER_DAY: f64 = 86_400_000_000.0;

// TLE format
pub const TLE_LINE_LENGTH: usize = 69; // Data line width including checksum digit
pub const EPOCH_CENTURY_PIVOT: u8 = 70; // Two-digit years below this are 20xx
pub const ECCENTRICITY_SCALE: f64 = 1e7; // Implied decimal point "0." in front of 7 digits

// Kepler solver defaults
pub const KEPLER_TOLERANCE: f64 = 1e-4; // Stop when |E(n+1) - E(n)| < this [rad]
pub const KEPLER_MAX_ITERATIONS: u32 = 500;

// Math
pub const PI: f64 = std::f64::consts::PI;
