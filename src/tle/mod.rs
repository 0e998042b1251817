//! Decoding of NORAD two-line element sets.

pub mod checksum;
pub mod columns;
pub mod exponential;
pub mod fixed_format;
pub mod parser;

pub use checksum::{checksum, is_valid, validate};
pub use exponential::decode_exponential;
pub use fixed_format::FixedFormatLine;
pub use parser::parse;
