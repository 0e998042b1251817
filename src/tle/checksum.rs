use super::columns::SATELLITE_NUMBER;
use crate::errors::ValidationFailure;

/// Modulo-10 checksum of a TLE data line.
///
/// Sums every digit except the last character of the line (the checksum
/// itself). Each minus sign counts as 1 and every other character is ignored.
pub fn checksum(line: &str) -> u8 {
    let mut chars = line.chars();
    chars.next_back();

    let sum: u32 = chars
        .map(|c| match c {
            '0'..='9' => c as u32 - '0' as u32,
            '-' => 1,
            _ => 0,
        })
        .sum();
    (sum % 10) as u8
}

/// Splits a block into stripped lines, dropping blank trailing lines.
pub fn split_block(block: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = block.lines().map(str::trim).collect();
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

/// Checks the structural rules and both checksums of a 3-line block.
pub fn validate(block: &str) -> Result<(), ValidationFailure> {
    let lines = split_block(block);
    let &[_title, line1, line2] = lines.as_slice() else {
        return Err(ValidationFailure::LineCount(lines.len()));
    };

    if !line1.starts_with('1') {
        return Err(ValidationFailure::Line1Prefix);
    }
    if !line2.starts_with('2') {
        return Err(ValidationFailure::Line2Prefix);
    }

    let number1 = line1.get(SATELLITE_NUMBER);
    let number2 = line2.get(SATELLITE_NUMBER);
    if number1.is_none() || number1 != number2 {
        return Err(ValidationFailure::SatelliteNumberMismatch {
            line1: number1.unwrap_or(line1).to_string(),
            line2: number2.unwrap_or(line2).to_string(),
        });
    }

    verify_line(line1, 1)?;
    verify_line(line2, 2)
}

pub fn is_valid(block: &str) -> bool {
    validate(block).is_ok()
}

fn verify_line(line: &str, number: u8) -> Result<(), ValidationFailure> {
    let expected = checksum(line);
    let found = line.chars().last();
    match found.and_then(|c| c.to_digit(10)) {
        Some(d) if d as u8 == expected => Ok(()),
        _ => Err(ValidationFailure::ChecksumMismatch {
            line: number,
            expected,
            found,
        }),
    }
}
