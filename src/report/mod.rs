pub mod console;
pub mod orbit_track;

pub use console::ElementReport;
pub use orbit_track::{CsvOrbitTrack, OrbitRenderer};
