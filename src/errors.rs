use thiserror::Error;

/// Why a block was rejected by the checksum/structure validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    #[error("expected 3 lines, found {0}")]
    LineCount(usize),

    #[error("line 1 does not start with '1'")]
    Line1Prefix,

    #[error("line 2 does not start with '2'")]
    Line2Prefix,

    #[error("satellite numbers differ: {line1:?} vs {line2:?}")]
    SatelliteNumberMismatch { line1: String, line2: String },

    #[error("line {line} checksum is {}, computed {expected}", describe_found(.found))]
    ChecksumMismatch { line: u8, expected: u8, found: Option<char> },
}

fn describe_found(found: &Option<char>) -> String {
    match found {
        Some(c) => format!("{:?}", c),
        None => "missing".to_string(),
    }
}

/// Errors scoped to a single element set. None of them stop a catalog run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TleError {
    #[error("invalid record: {0}")]
    InvalidRecord(ValidationFailure),

    #[error("malformed field {field}: {value:?}")]
    Format { field: &'static str, value: String },

    #[error("value out of domain: {0}")]
    Domain(String),
}

impl TleError {
    pub(crate) fn format(field: &'static str, value: impl Into<String>) -> Self {
        TleError::Format {
            field,
            value: value.into(),
        }
    }
}

/// Errors from the collaborators around the core: catalog I/O, config and renderers.
#[derive(Debug, Error)]
pub enum PipelineErrors {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request error: {0}")]
    ReqwestError(#[from] reqwest::Error),

    #[error("CSV writing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Config parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("HTTP 403 Forbidden")]
    HttpForbidden,

    #[error("catalog {0:?} contains no element sets")]
    EmptyCatalog(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use test_case::test_case;

    #[test_case(ValidationFailure::LineCount(2), "expected 3 lines, found 2")]
    #[test_case(ValidationFailure::Line2Prefix, "line 2 does not start with '2'")]
    #[test_case(
        ValidationFailure::ChecksumMismatch { line: 1, expected: 7, found: Some('5') },
        "line 1 checksum is '5', computed 7"
    )]
    #[test_case(
        ValidationFailure::ChecksumMismatch { line: 2, expected: 0, found: None },
        "line 2 checksum is missing, computed 0"
    )]
    fn validation_failure_messages(failure: ValidationFailure, expected: &str) {
        assert_eq!(failure.to_string(), expected);
    }

    #[test]
    fn validation_failure_is_a_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(ValidationFailure::Line1Prefix);
        assert!(err.source().is_none());

        let wrapped = TleError::InvalidRecord(ValidationFailure::Line1Prefix);
        assert_eq!(
            wrapped.to_string(),
            "invalid record: line 1 does not start with '1'"
        );
    }
}
