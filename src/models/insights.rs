use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Statistics derived from the pain log.
///
/// An empty log yields [`Insights::NoData`] rather than averages over nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Insights {
    NoData,
    Summary(InsightSummary),
}

impl Insights {
    pub fn summary(&self) -> Option<&InsightSummary> {
        match self {
            Self::NoData => None,
            Self::Summary(summary) => Some(summary),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightSummary {
    pub entry_count: usize,
    /// Mean intensity across every entry.
    pub overall_average: f64,
    /// Mean intensity across the seven most recent entries (or all, if fewer).
    pub weekly_average: f64,
    /// Up to three most reported relief strategies, most frequent first.
    pub top_relief: Vec<ReliefFrequency>,
    /// Fourteen calendar days, oldest first, ending today.
    pub calendar: Vec<CalendarDay>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReliefFrequency {
    pub label: String,
    pub count: usize,
}

/// One day in the intensity heatmap. `tier` is `None` when nothing was logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub tier: Option<SeverityTier>,
}

/// Heatmap bucket for an intensity value.
///
/// - `None`: 0
/// - `Mild`: 1 to 3
/// - `Moderate`: 4 to 6
/// - `Severe`: 7 to 8
/// - `Extreme`: 9 and above
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityTier {
    None,
    Mild,
    Moderate,
    Severe,
    Extreme,
}

impl SeverityTier {
    pub fn from_intensity(intensity: u8) -> Self {
        match intensity {
            0 => Self::None,
            1..=3 => Self::Mild,
            4..=6 => Self::Moderate,
            7..=8 => Self::Severe,
            _ => Self::Extreme,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
            Self::Extreme => "extreme",
        }
    }

    /// Numeric level 0 to 4, used by heatmap renderers.
    pub fn level(&self) -> u8 {
        *self as u8
    }
}
