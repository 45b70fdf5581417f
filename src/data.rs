use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

use serde::{Serialize, Serializer};

/// A parsed scalar from one CSV field.
#[derive(Debug, Clone)]
pub enum Cell {
    Number(f64),
    Text(String),
    Missing,
}

impl Cell {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    pub fn as_display(&self) -> String {
        match self {
            Cell::Number(value) => format_number(*value),
            Cell::Text(text) => text.clone(),
            Cell::Missing => String::new(),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Cell::Number(_) => 0,
            Cell::Text(_) => 1,
            Cell::Missing => 2,
        }
    }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

// 0.0 and -0.0 share one category.
fn canonical_bits(value: f64) -> u64 {
    if value == 0.0 { 0 } else { value.to_bits() }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Cell::Number(a), Cell::Number(b)) => canonical_bits(*a) == canonical_bits(*b),
            (Cell::Text(a), Cell::Text(b)) => a == b,
            (Cell::Missing, Cell::Missing) => true,
            _ => false,
        }
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
        match self {
            Cell::Number(value) => canonical_bits(*value).hash(state),
            Cell::Text(text) => text.hash(state),
            Cell::Missing => {}
        }
    }
}

/// Ascending order with missing cells last. Columns are homogeneous, so the
/// number/text split only matters for totality.
impl Ord for Cell {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Cell::Number(a), Cell::Number(b)) => {
                if canonical_bits(*a) == canonical_bits(*b) {
                    Ordering::Equal
                } else {
                    a.total_cmp(b)
                }
            }
            (Cell::Text(a), Cell::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_display())
    }
}

impl Serialize for Cell {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Cell::Number(value) if value.is_finite() => serializer.serialize_f64(*value),
            Cell::Number(value) => serializer.serialize_str(&value.to_string()),
            Cell::Text(text) => serializer.serialize_str(text),
            Cell::Missing => serializer.serialize_none(),
        }
    }
}

pub fn is_na_token(raw: &str, na_tokens: &[String]) -> bool {
    na_tokens.iter().any(|token| token == raw)
}

/// Parses a field as a number. NaN is never a number here; it is missing.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| !value.is_nan())
}

/// Converts a raw field into a cell for a column already known to be numeric
/// or textual.
pub fn parse_cell(raw: &str, numeric: bool, na_tokens: &[String]) -> Cell {
    if is_na_token(raw, na_tokens) {
        return Cell::Missing;
    }
    if numeric {
        match parse_number(raw) {
            Some(value) => Cell::Number(value),
            None => Cell::Missing,
        }
    } else {
        Cell::Text(raw.to_string())
    }
}
