use crate::constants::PI;
use crate::errors::PipelineErrors;
use crate::models::OrbitGeometry;
use crate::physics::OrbitalMechanics;
use csv::Writer;
use nalgebra as na;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Receives the orbit of one satellite for display.
pub trait OrbitRenderer {
    fn render(&mut self, geometry: &OrbitGeometry, label: &str) -> Result<(), PipelineErrors>;
}

/// Samples each orbit ellipse in the ECI frame and writes it as CSV rows.
pub struct CsvOrbitTrack<W: Write> {
    writer: Writer<W>,
    samples: usize,
}

impl CsvOrbitTrack<File> {
    /// Creates `<output_dir>/orbit_tracks.csv`, creating the directory if needed.
    pub fn create(output_dir: &Path, samples: usize) -> Result<Self, PipelineErrors> {
        fs::create_dir_all(output_dir)?;
        let file = File::create(output_dir.join("orbit_tracks.csv"))?;
        Self::from_writer(file, samples)
    }
}

impl<W: Write> CsvOrbitTrack<W> {
    pub fn from_writer(inner: W, samples: usize) -> Result<Self, PipelineErrors> {
        let mut writer = Writer::from_writer(inner);
        writer.write_record([
            "Label",
            "True Anomaly (deg)",
            "Position X (km)",
            "Position Y (km)",
            "Position Z (km)",
            "Velocity X (km/s)",
            "Velocity Y (km/s)",
            "Velocity Z (km/s)",
            "Radius (km)",
            "Current",
        ])?;
        Ok(Self {
            writer,
            samples: samples.max(1),
        })
    }

    pub fn into_inner(self) -> Result<W, PipelineErrors> {
        self.writer
            .into_inner()
            .map_err(|e| PipelineErrors::IoError(e.into_error()))
    }

    fn write_point(
        &mut self,
        geometry: &OrbitGeometry,
        label: &str,
        true_anomaly: f64,
        current: bool,
    ) -> Result<(), PipelineErrors> {
        let elements = na::Vector6::new(
            geometry.semi_major_axis_km,
            geometry.eccentricity,
            geometry.inclination_deg.to_radians(),
            geometry.right_ascension_deg.to_radians(),
            geometry.argument_of_perigee_deg.to_radians(),
            true_anomaly,
        );
        let (position, velocity) = OrbitalMechanics::keplerian_to_cartesian(&elements);

        self.writer.write_record(&[
            label.to_string(),
            true_anomaly.to_degrees().to_string(),
            position.x.to_string(),
            position.y.to_string(),
            position.z.to_string(),
            velocity.x.to_string(),
            velocity.y.to_string(),
            velocity.z.to_string(),
            position.magnitude().to_string(),
            current.to_string(),
        ])?;
        Ok(())
    }
}

impl<W: Write> OrbitRenderer for CsvOrbitTrack<W> {
    fn render(&mut self, geometry: &OrbitGeometry, label: &str) -> Result<(), PipelineErrors> {
        let step = 2.0 * PI / self.samples as f64;
        for k in 0..self.samples {
            self.write_point(geometry, label, k as f64 * step, false)?;
        }
        self.write_point(geometry, label, geometry.true_anomaly_deg.to_radians(), true)?;
        self.writer.flush()?;
        Ok(())
    }
}
