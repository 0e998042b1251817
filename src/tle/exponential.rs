use crate::errors::TleError;

/// Width of a packed exponential field: sign, five digits, exponent sign, exponent digit.
pub const EXPONENTIAL_FIELD_WIDTH: usize = 8;

/// Decodes the TLE packed exponential notation `SDDDDDSE` into a float.
///
/// `-11606-4` is `-0.11606e-4`, ` 14845-3` is `0.14845e-3`. The leading
/// decimal point is implied and the exponent carries its own sign, so the
/// field is rewritten as a regular decimal literal before parsing. That keeps
/// the result equal to the nearest `f64` of the written value.
pub fn decode_exponential(field: &str) -> Result<f64, TleError> {
    let bytes = field.as_bytes();
    if bytes.len() != EXPONENTIAL_FIELD_WIDTH {
        return Err(TleError::format("exponential field", field));
    }

    let sign = match bytes[0] {
        b' ' | b'+' => "",
        b'-' => "-",
        _ => return Err(TleError::format("exponential sign", field)),
    };

    let mantissa = &bytes[1..6];
    if !mantissa.iter().all(u8::is_ascii_digit) {
        return Err(TleError::format("exponential mantissa", field));
    }

    let exponent_sign = match bytes[6] {
        b'+' | b' ' => "",
        b'-' => "-",
        _ => return Err(TleError::format("exponent sign", field)),
    };

    if !bytes[7].is_ascii_digit() {
        return Err(TleError::format("exponent digit", field));
    }

    // All bytes checked as ASCII above, so the slices are valid str boundaries
    let literal = format!(
        "{}0.{}e{}{}",
        sign,
        &field[1..6],
        exponent_sign,
        &field[7..8]
    );
    literal
        .parse::<f64>()
        .map_err(|_| TleError::format("exponential field", field))
}
