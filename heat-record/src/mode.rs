use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Which reduced statistic drives heatmap coloring.
///
/// `Max` is the default mode: both heatmaps and their legends start out
/// colored by maximum temperature.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Max,
    Min,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Max => "max",
            Mode::Min => "min",
        }
    }

    /// The other mode, as flipped by the display toggle.
    pub fn toggled(self) -> Self {
        match self {
            Mode::Max => Mode::Min,
            Mode::Min => Mode::Max,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct ParseModeError(pub String);

impl fmt::Display for ParseModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown mode `{}`, expected `max` or `min`", self.0)
    }
}

impl std::error::Error for ParseModeError {}

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "max" => Ok(Mode::Max),
            "min" => Ok(Mode::Min),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}
