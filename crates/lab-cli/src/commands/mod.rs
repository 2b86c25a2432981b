pub mod list;
pub mod network;
pub mod pattern;
pub mod quiz;
pub mod tree;
pub mod tui;

use std::str::FromStr;

/// Parse every item of a comma-separated flag, naming the first bad one.
fn parse_all<T>(items: &[String]) -> Result<Vec<T>, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    items
        .iter()
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.parse::<T>().map_err(|e| e.to_string()))
        .collect()
}
