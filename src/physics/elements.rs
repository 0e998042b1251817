use super::orbital::{KeplerSolver, OrbitalMechanics};
use crate::constants::MICROSECONDS_PER_DAY;
use crate::errors::TleError;
use crate::models::{DerivedElements, TleRecord};
use chrono::{DateTime, Duration, TimeZone, Utc};
use tracing::warn;

/// Derives epoch, period, semi-major axis and anomalies with the default solver.
pub fn derive(record: &TleRecord) -> Result<DerivedElements, TleError> {
    derive_with(record, &KeplerSolver::default())
}

pub fn derive_with(record: &TleRecord, solver: &KeplerSolver) -> Result<DerivedElements, TleError> {
    let e = record.eccentricity;
    if !(0.0..1.0).contains(&e) {
        return Err(TleError::Domain(format!(
            "eccentricity {} outside [0, 1)",
            e
        )));
    }

    let n = record.mean_motion_rev_per_day;
    if !n.is_finite() || n <= 0.0 {
        return Err(TleError::Domain(format!(
            "mean motion {} rev/day is not positive",
            n
        )));
    }

    let epoch_date = epoch_date(record)?;
    let period_seconds = OrbitalMechanics::period_from_mean_motion(n);
    let semi_major_axis_km = OrbitalMechanics::semi_major_axis_from_period(period_seconds);

    let mean_anomaly = record.mean_anomaly_deg.to_radians();
    let solution = solver.solve(mean_anomaly, e);
    if !solution.converged {
        let residual =
            OrbitalMechanics::eccentric_to_mean_anomaly(solution.eccentric_anomaly, e)
                - mean_anomaly;
        warn!(
            satellite = record.satellite_number,
            iterations = solution.iterations,
            residual,
            "Kepler solver hit its iteration cap, using last iterate"
        );
    }

    let true_anomaly = OrbitalMechanics::eccentric_to_true_anomaly(solution.eccentric_anomaly, e);

    Ok(DerivedElements {
        epoch_date,
        period_seconds,
        semi_major_axis_km,
        eccentric_anomaly_deg: solution.eccentric_anomaly.to_degrees(),
        true_anomaly_deg: true_anomaly.to_degrees(),
        kepler_converged: solution.converged,
    })
}

/// Midnight UTC on January 1 of the epoch year plus the epoch day, to the microsecond.
pub fn epoch_date(record: &TleRecord) -> Result<DateTime<Utc>, TleError> {
    let year = record.epoch_full_year();
    let start = Utc
        .with_ymd_and_hms(year, 1, 1, 0, 0, 0)
        .single()
        .ok_or_else(|| TleError::Domain(format!("epoch year {} not representable", year)))?;

    let day = record.epoch_day_fraction;
    if !day.is_finite() || day < 0.0 {
        return Err(TleError::Domain(format!("epoch day {} is negative", day)));
    }
    let micros = (day * MICROSECONDS_PER_DAY).round();
    if micros >= i64::MAX as f64 {
        return Err(TleError::Domain(format!("epoch day {} out of range", day)));
    }
    start
        .checked_add_signed(Duration::microseconds(micros as i64))
        .ok_or_else(|| TleError::Domain(format!("epoch day {} out of range", day)))
}
