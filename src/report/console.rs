use crate::models::{DerivedElements, TleRecord};
use std::fmt;

const RULE: &str =
    "----------------------------------------------------------------------------------------";

/// Human-readable report of one element set and what was derived from it.
pub struct ElementReport<'a> {
    pub record: &'a TleRecord,
    pub derived: &'a DerivedElements,
}

impl<'a> ElementReport<'a> {
    pub fn new(record: &'a TleRecord, derived: &'a DerivedElements) -> Self {
        Self { record, derived }
    }
}

impl fmt::Display for ElementReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.record;
        let d = self.derived;
        let designator = &r.international_designator;

        writeln!(f, "{}", RULE)?;
        row(f, "Satellite Name", &r.title)?;
        row(
            f,
            "Satellite number",
            format!("{} ({})", r.satellite_number, r.classification),
        )?;
        row(
            f,
            "International Designator",
            format!(
                "YR: {:02}, LAUNCH #{}, PIECE: {}",
                designator.launch_year, designator.launch_number, designator.piece
            ),
        )?;
        row(
            f,
            "Epoch Date",
            format!(
                "{}  (YR:{:02} DAY:{})",
                d.epoch_date.format("%Y-%m-%d %H:%M:%S%.6f UTC"),
                r.epoch_year,
                r.epoch_day_fraction
            ),
        )?;
        row(
            f,
            "First Time Derivative of the Mean Motion divided by two",
            r.mean_motion_derivative_1,
        )?;
        row(
            f,
            "Second Time Derivative of Mean Motion divided by six",
            r.mean_motion_derivative_2,
        )?;
        row(f, "BSTAR drag term", r.bstar_drag)?;
        row(f, "Ephemeris type", r.ephemeris_type)?;
        row(f, "Element number", r.element_number)?;
        writeln!(f)?;
        row(f, "Inclination [Degrees]", degrees(r.inclination_deg))?;
        row(
            f,
            "Right Ascension of the Ascending Node [Degrees]",
            degrees(r.right_ascension_deg),
        )?;
        row(f, "Eccentricity", r.eccentricity)?;
        row(f, "Argument of Perigee [Degrees]", degrees(r.argument_of_perigee_deg))?;
        row(f, "Mean Anomaly [Degrees]", degrees(r.mean_anomaly_deg))?;
        row(f, "Eccentric Anomaly [Degrees]", degrees(d.eccentric_anomaly_deg))?;
        row(f, "True Anomaly [Degrees]", degrees(d.true_anomaly_deg))?;
        row(f, "Mean Motion [Revs per day]", r.mean_motion_rev_per_day)?;
        row(f, "Period", format_period(d.period_seconds))?;
        row(f, "Revolution number at epoch [Revs]", r.revolution_number)?;
        if !d.kepler_converged {
            row(f, "Kepler solver", "iteration cap reached")?;
        }
        writeln!(f)?;
        writeln!(f, "semi_major_axis = {:.3}km", d.semi_major_axis_km)?;
        writeln!(f, "eccentricity    = {}", r.eccentricity)?;
        writeln!(f, "inclination     = {}", degrees(r.inclination_deg))?;
        writeln!(f, "arg_perigee     = {}", degrees(r.argument_of_perigee_deg))?;
        writeln!(f, "right_ascension = {}", degrees(r.right_ascension_deg))?;
        writeln!(f, "true_anomaly    = {}", degrees(d.true_anomaly_deg))?;
        write!(f, "{}", RULE)
    }
}

fn row(f: &mut fmt::Formatter<'_>, label: &str, value: impl fmt::Display) -> fmt::Result {
    writeln!(f, "{:<58}= {}", label, value)
}

fn degrees(value: f64) -> String {
    format!("{:.4}°", value)
}

/// Formats seconds as `H:MM:SS.ffffff`.
pub fn format_period(seconds: f64) -> String {
    let micros = (seconds * 1e6).round() as u64;
    let (whole, frac) = (micros / 1_000_000, micros % 1_000_000);
    format!(
        "{}:{:02}:{:02}.{:06}",
        whole / 3600,
        whole % 3600 / 60,
        whole % 60,
        frac
    )
}
