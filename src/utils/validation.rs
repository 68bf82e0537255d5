use crate::utils::error::{Result, StatsError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Parses a whole number: optional sign followed by digits. Surrounding
/// whitespace is ignored, no range limits beyond `i64`.
pub fn parse_integer(input: &str) -> Result<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| StatsError::InvalidNumber {
            value: input.to_string(),
        })
}

/// Parses a seller count, which must be strictly greater than zero.
pub fn parse_positive_count(input: &str) -> Result<usize> {
    let value = parse_integer(input)?;
    if value <= 0 {
        return Err(StatsError::NonPositiveCount { value });
    }
    usize::try_from(value).map_err(|_| StatsError::InvalidNumber {
        value: input.to_string(),
    })
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(StatsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(StatsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(StatsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty".to_string(),
        });
    }
    Ok(())
}
