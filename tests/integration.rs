use approx::assert_abs_diff_eq;
use std::fs;
use tlescope::catalog::{self, samples};
use tlescope::errors::TleError;
use tlescope::models::{Classification, OrbitGeometry, TleRecord};
use tlescope::physics::{derive, KeplerSolver, OrbitalMechanics};
use tlescope::pipeline::Pipeline;
use tlescope::report::{CsvOrbitTrack, ElementReport};
use tlescope::tle;

const ISS_BLOCK: &str = "ISS (ZARYA)\n1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927\n2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537";

// End to end: raw block -> record -> derived elements -> report and track
#[test]
fn iss_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    assert!(tle::is_valid(ISS_BLOCK));

    let record = tle::parse(ISS_BLOCK)?;
    assert_eq!(record.satellite_number, 25544);
    assert_eq!(record.classification, Classification::Unclassified);
    assert_eq!(record.checksum_line1, 7);
    assert_eq!(record.checksum_line2, 7);
    assert_abs_diff_eq!(record.eccentricity, 0.0006703, epsilon = 1e-12);
    assert_eq!(record.inclination_deg, 51.6416);
    assert_abs_diff_eq!(record.mean_motion_rev_per_day, 15.72125391, epsilon = 1e-8);

    let derived = derive(&record)?;
    // (T² GM / 4π²)^(1/3) with T = 86400 / n
    assert_abs_diff_eq!(derived.semi_major_axis_km, 6731.0, epsilon = 1.0);
    assert_abs_diff_eq!(derived.period_seconds, 5495.745, epsilon = 1e-3);
    assert!(derived.kepler_converged);

    let report = ElementReport::new(&record, &derived).to_string();
    assert!(report.contains("ISS (ZARYA)"));

    let dir = tempfile::tempdir()?;
    let mut track = CsvOrbitTrack::create(dir.path(), 12)?;
    let run = Pipeline::default().process(&[ISS_BLOCK], Some(&mut track));
    assert_eq!(run.summary.processed, 1);
    drop(track);

    let csv = fs::read_to_string(dir.path().join("orbit_tracks.csv"))?;
    assert_eq!(csv.lines().count(), 1 + 12 + 1);
    Ok(())
}

#[test]
fn dragon_decodes_positive_bstar() {
    let record: TleRecord = samples::DRAGON_CRS2.parse().unwrap();
    assert_eq!(record.bstar_drag, 0.14845e-3);
    assert_eq!(record.epoch_full_year(), 2013);
    assert_eq!(record.element_number, 18);
    assert_eq!(record.revolution_number, 30);
    assert_eq!(record.checksum_line1, 8);
    assert_eq!(record.checksum_line2, 6);
}

#[test]
fn multi_record_stream_isolates_failures() {
    let stream = format!(
        "{}\n{}\n{}\n",
        samples::ISS_ZARYA,
        samples::DRAGON_CRS2.replace("272.5899", "272.5898"),
        samples::DRAGON_CRS2
    );
    let blocks = catalog::split_blocks(&stream);
    assert_eq!(blocks.len(), 3);

    let run = Pipeline::default().process(&blocks, None);
    assert_eq!(run.summary.processed, 2);
    assert_eq!(run.summary.invalid, 1);
}

#[test]
fn zero_mean_motion_fails_derivation_only() {
    let record = TleRecord {
        mean_motion_rev_per_day: 0.0,
        ..tle::parse(ISS_BLOCK).unwrap()
    };
    assert!(matches!(derive(&record), Err(TleError::Domain(_))));
}

#[test]
fn render_geometry_places_satellite_on_orbit() {
    let record = tle::parse(ISS_BLOCK).unwrap();
    let derived = derive(&record).unwrap();
    let geometry = OrbitGeometry::from_parts(&record, &derived);

    let elements = nalgebra::Vector6::new(
        geometry.semi_major_axis_km,
        geometry.eccentricity,
        geometry.inclination_deg.to_radians(),
        geometry.right_ascension_deg.to_radians(),
        geometry.argument_of_perigee_deg.to_radians(),
        geometry.true_anomaly_deg.to_radians(),
    );
    let (position, _) = OrbitalMechanics::keplerian_to_cartesian(&elements);
    let a = geometry.semi_major_axis_km;
    let e = geometry.eccentricity;
    assert!(position.magnitude() >= a * (1.0 - e) - 1e-6);
    assert!(position.magnitude() <= a * (1.0 + e) + 1e-6);
}

#[test]
fn circular_orbit_solver_is_identity() {
    let solver = KeplerSolver::default();
    for k in 0..72 {
        let m = k as f64 * 5.0_f64.to_radians();
        assert_eq!(solver.solve(m, 0.0).eccentric_anomaly, m);
    }
}
