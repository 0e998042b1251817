use super::record::TleRecord;
use chrono::{DateTime, Utc};

/// Elements computed from a [`TleRecord`]. Angles in degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedElements {
    pub epoch_date: DateTime<Utc>,
    pub period_seconds: f64,
    pub semi_major_axis_km: f64,
    pub eccentric_anomaly_deg: f64,
    pub true_anomaly_deg: f64,
    pub kepler_converged: bool,
}

/// The six parameters a renderer needs to draw an orbit and place the satellite on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitGeometry {
    pub semi_major_axis_km: f64,
    pub eccentricity: f64,
    pub inclination_deg: f64,
    pub right_ascension_deg: f64,
    pub argument_of_perigee_deg: f64,
    pub true_anomaly_deg: f64,
}

impl OrbitGeometry {
    pub fn from_parts(record: &TleRecord, derived: &DerivedElements) -> Self {
        Self {
            semi_major_axis_km: derived.semi_major_axis_km,
            eccentricity: record.eccentricity,
            inclination_deg: record.inclination_deg,
            right_ascension_deg: record.right_ascension_deg,
            argument_of_perigee_deg: record.argument_of_perigee_deg,
            true_anomaly_deg: derived.true_anomaly_deg,
        }
    }
}
