use super::exponential::decode_exponential;
use crate::constants::TLE_LINE_LENGTH;
use crate::errors::TleError;
use std::ops::Range;
use std::str::FromStr;

/// A TLE data line checked to be wide enough for every column in the table.
#[derive(Debug, Clone, Copy)]
pub struct FixedFormatLine<'a> {
    line: &'a str,
}

impl<'a> FixedFormatLine<'a> {
    /// Wraps `line`, failing if it is shorter than a full data line. Short lines
    /// are never padded.
    pub fn new(line: &'a str, name: &'static str) -> Result<Self, TleError> {
        if line.len() < TLE_LINE_LENGTH {
            return Err(TleError::format(name, line));
        }
        Ok(Self { line })
    }

    /// Untrimmed column slice.
    pub fn raw(&self, range: Range<usize>, field: &'static str) -> Result<&'a str, TleError> {
        self.line
            .get(range)
            .ok_or_else(|| TleError::format(field, self.line))
    }

    /// Column slice with surrounding whitespace stripped.
    pub fn text(&self, range: Range<usize>, field: &'static str) -> Result<&'a str, TleError> {
        self.raw(range, field).map(str::trim)
    }

    pub fn int<T: FromStr>(&self, range: Range<usize>, field: &'static str) -> Result<T, TleError> {
        let text = self.text(range, field)?;
        text.parse::<T>()
            .map_err(|_| TleError::format(field, text))
    }

    pub fn float(&self, range: Range<usize>, field: &'static str) -> Result<f64, TleError> {
        let text = self.text(range, field)?;
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(TleError::format(field, text)),
        }
    }

    /// Packed exponential field; the sign column is significant so the slice is not trimmed.
    pub fn exponential(&self, range: Range<usize>, field: &'static str) -> Result<f64, TleError> {
        let raw = self.raw(range, field)?;
        decode_exponential(raw).map_err(|_| TleError::format(field, raw))
    }

    /// Single decimal digit column.
    pub fn digit(&self, range: Range<usize>, field: &'static str) -> Result<u8, TleError> {
        let raw = self.raw(range, field)?;
        match raw.as_bytes() {
            [d] if d.is_ascii_digit() => Ok(d - b'0'),
            _ => Err(TleError::format(field, raw)),
        }
    }
}
