use super::checksum::{split_block, validate};
use super::columns::{self, line1, line2};
use super::fixed_format::FixedFormatLine;
use crate::constants::{ECCENTRICITY_SCALE, TLE_LINE_LENGTH};
use crate::errors::TleError;
use crate::models::{Classification, InternationalDesignator, TleRecord};
use tracing::debug;

/// Parses a three-line element set (title, line 1, line 2).
///
/// Each line may carry leading or trailing whitespace. The block is validated
/// first: a structural or checksum failure is [`TleError::InvalidRecord`], a
/// field that does not decode is [`TleError::Format`]. Nothing is returned
/// unless every field decodes.
pub fn parse(raw_block: &str) -> Result<TleRecord, TleError> {
    validate(raw_block).map_err(TleError::InvalidRecord)?;

    let lines = split_block(raw_block);
    let title = lines[0];
    // The validated checksum is the last character, so it must sit in column 69
    for (line, name) in [(lines[1], "line 1"), (lines[2], "line 2")] {
        if line.len() != TLE_LINE_LENGTH {
            return Err(TleError::format(name, line));
        }
    }
    let l1 = FixedFormatLine::new(lines[1], "line 1")?;
    let l2 = FixedFormatLine::new(lines[2], "line 2")?;

    let classification = l1
        .raw(line1::CLASSIFICATION, "classification")?
        .chars()
        .next()
        .map(Classification::from)
        .ok_or_else(|| TleError::format("classification", lines[1]))?;

    let international_designator = InternationalDesignator {
        launch_year: l1.int(line1::LAUNCH_YEAR, "launch year")?,
        launch_number: l1.int(line1::LAUNCH_NUMBER, "launch number")?,
        piece: l1.text(line1::LAUNCH_PIECE, "launch piece")?.to_string(),
    };

    let epoch_year: u8 = l1.int(line1::EPOCH_YEAR, "epoch year")?;
    let epoch_day_fraction = l1.float(line1::EPOCH_DAY, "epoch day")?;
    if epoch_day_fraction < 0.0 {
        return Err(TleError::format("epoch day", epoch_day_fraction.to_string()));
    }

    // Seven digits behind an implied "0."
    let eccentricity_digits = l2.text(line2::ECCENTRICITY, "eccentricity")?;
    if !eccentricity_digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TleError::format("eccentricity", eccentricity_digits));
    }
    let eccentricity_raw: u32 = eccentricity_digits
        .parse()
        .map_err(|_| TleError::format("eccentricity", eccentricity_digits))?;

    let record = TleRecord {
        title: title.to_string(),
        satellite_number: l1.int(columns::SATELLITE_NUMBER, "satellite number")?,
        classification,
        international_designator,
        epoch_year,
        epoch_day_fraction,
        mean_motion_derivative_1: l1.float(line1::MEAN_MOTION_DOT, "mean motion derivative")?,
        mean_motion_derivative_2: l1.exponential(
            line1::MEAN_MOTION_DDOT,
            "mean motion second derivative",
        )?,
        bstar_drag: l1.exponential(line1::BSTAR, "bstar")?,
        ephemeris_type: l1.digit(line1::EPHEMERIS_TYPE, "ephemeris type")?,
        element_number: l1.int(line1::ELEMENT_NUMBER, "element number")?,
        inclination_deg: l2.float(line2::INCLINATION, "inclination")?,
        right_ascension_deg: l2.float(line2::RIGHT_ASCENSION, "right ascension")?,
        eccentricity: eccentricity_raw as f64 / ECCENTRICITY_SCALE,
        argument_of_perigee_deg: l2.float(line2::ARGUMENT_OF_PERIGEE, "argument of perigee")?,
        mean_anomaly_deg: l2.float(line2::MEAN_ANOMALY, "mean anomaly")?,
        mean_motion_rev_per_day: l2.float(line2::MEAN_MOTION, "mean motion")?,
        revolution_number: l2.int(line2::REVOLUTION_NUMBER, "revolution number")?,
        checksum_line1: l1.digit(columns::CHECKSUM, "line 1 checksum")?,
        checksum_line2: l2.digit(columns::CHECKSUM, "line 2 checksum")?,
    };

    debug!(
        satellite = record.satellite_number,
        title = %record.title,
        "parsed element set"
    );
    Ok(record)
}
