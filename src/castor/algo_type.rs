use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::castor::CastorError;

/// Marker prepended to an algorithm type when it is handed to the
/// execution layer as an internal tag value.
pub const INTERNAL_TAG_MARKER: char = '_';

/// How the analytics service applies an algorithm/configuration pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgoType {
    Fit,
    Detect,
    Predict,
    FitDetect,
}

impl AlgoType {
    pub const ALL: [AlgoType; 4] = [AlgoType::Fit, AlgoType::Detect, AlgoType::Predict, AlgoType::FitDetect];

    pub fn as_str(&self) -> &'static str {
        match self {
            AlgoType::Fit => "fit",
            AlgoType::Detect => "detect",
            AlgoType::Predict => "predict",
            AlgoType::FitDetect => "fit_detect",
        }
    }

    /// Exact, case-sensitive match against the wire tokens.
    pub fn parse(token: &str) -> Option<AlgoType> {
        Self::ALL.into_iter().find(|t| t.as_str() == token)
    }

    pub fn internal_tag(&self) -> String {
        to_internal_tag(self.as_str())
    }
}

pub fn to_internal_tag(value: &str) -> String {
    format!("{}{}", INTERNAL_TAG_MARKER, value)
}

impl FromStr for AlgoType {
    type Err = CastorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AlgoType::parse(s).ok_or_else(|| CastorError::AlgoTypeNotFound(s.to_string()))
    }
}

impl fmt::Display for AlgoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
