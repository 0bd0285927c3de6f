use std::str::FromStr;

use thiserror::Error;

/// A `MIN:MAX` pair as given on the command line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Bounds {
    pub min: i32,
    pub max: i32,
}

#[derive(Debug, Error, Eq, PartialEq)]
pub enum BoundsParseError {
    #[error("expected MIN:MAX, got {0:?}")]
    MissingSeparator(String),

    #[error("{0:?} is not an integer")]
    NotAnInteger(String),
}

impl FromStr for Bounds {
    type Err = BoundsParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (min, max) = s
            .split_once(':')
            .ok_or_else(|| BoundsParseError::MissingSeparator(s.to_string()))?;
        Ok(Self {
            min: parse_bound(min)?,
            max: parse_bound(max)?,
        })
    }
}

fn parse_bound(s: &str) -> Result<i32, BoundsParseError> {
    s.trim()
        .parse()
        .map_err(|_| BoundsParseError::NotAnInteger(s.to_string()))
}
