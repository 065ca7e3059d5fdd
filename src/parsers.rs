// src/parsers.rs
use std::{fmt::Display, str::FromStr};

/// Upper bound for `--jobs`.
const MAX_JOBS: usize = 512;

fn parse_bounded_number<T>(s: &str, min: T, max: Option<T>) -> Result<T, String>
where
    T: Copy + PartialOrd + Display + FromStr,
    <T as FromStr>::Err: Display,
{
    let value = s
        .parse::<T>()
        .map_err(|err| format!("invalid number '{s}': {err}"))?;
    if value < min {
        return Err(format!("value must be at least {min}"));
    }
    if let Some(max_bound) = max
        && value > max_bound
    {
        return Err(format!("value must be at most {max_bound}"));
    }
    Ok(value)
}

/// Parse a worker count in `[0, 512]`; `0` stands for "all CPUs".
///
/// # Errors
/// Returns an error if the input is not a number or exceeds the bound.
pub fn parse_jobs(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 0, Some(MAX_JOBS))
}

/// Parse a directory depth of at least 1.
///
/// # Errors
/// Returns an error if the input is not a positive number.
pub fn parse_depth(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 1, None)
}

/// Validate a `NAME[=VALUE]` macro definition.
///
/// # Errors
/// Returns an error if the name is empty or not a C identifier.
pub fn parse_define(s: &str) -> Result<String, String> {
    let name = s.split_once('=').map_or(s, |(name, _)| name);
    let mut chars = name.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c == '_' || c.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric());
    if valid {
        Ok(s.to_string())
    } else {
        Err(format!("invalid macro name in '{s}'"))
    }
}
