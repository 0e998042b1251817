pub mod elements;
pub mod record;

pub use elements::{DerivedElements, OrbitGeometry};
pub use record::{Classification, InternationalDesignator, TleRecord};
