use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::EntryId;

/// Maximum length of a pain entry note, in characters.
pub const NOTES_MAX_CHARS: usize = 200;

/// Suggested contextual factors offered by the check-in form.
pub const CONTEXT_SUGGESTIONS: &[&str] = &[
    "My posture or body position",
    "Stress or emotional strain",
    "Weather or temperature changes",
    "Recent medication use",
    "Recent movement or exercise",
    "How much water I've had",
    "Whether I rested or napped",
    "Time spent looking at screens",
    "Time spent outside",
    "Time spent indoors",
];

/// Suggested relief strategies offered after a check-in is saved.
pub const RELIEF_SUGGESTIONS: &[&str] = &[
    "Heat",
    "Stretching",
    "Breathing",
    "Walking",
    "Resting",
    "Drinking water",
    "Medication",
    "Talking with someone",
    "Music",
    "Distraction",
];

/// A single pain check-in.
///
/// `id` and `date` are assigned by the pain log when the entry is recorded and
/// never change. `helped` and `helped_effectiveness` stay `None` until the
/// entry is amended with a [`ReliefInput`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PainEntry {
    pub id: EntryId,
    pub date: DateTime<Utc>,
    /// Overall intensity, nominally 0 (none) to 10 (worst imaginable).
    pub intensity: u8,
    /// Body-region labels.
    #[serde(default)]
    pub location: Vec<String>,
    #[serde(default)]
    pub quality: Vec<PainQuality>,
    pub impact: Impact,
    /// Contextual factors the user thinks are influencing the pain.
    #[serde(default)]
    pub context: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub wellbeing: Wellbeing,
    /// Relief strategies reported after the entry was saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub helped: Option<Vec<String>>,
    /// Effectiveness rank (1 = a little, 2 = somewhat, 3 = a lot) per strategy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub helped_effectiveness: Option<BTreeMap<String, u8>>,
}

/// The type of pain being felt.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PainQuality {
    Burning,
    Stabbing,
    Throbbing,
    Aching,
    Electric,
    Stiff,
    Pressure,
}

impl PainQuality {
    pub const ALL: [PainQuality; 7] = [
        Self::Burning,
        Self::Stabbing,
        Self::Throbbing,
        Self::Aching,
        Self::Electric,
        Self::Stiff,
        Self::Pressure,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Burning => "Burning",
            Self::Stabbing => "Stabbing",
            Self::Throbbing => "Throbbing",
            Self::Aching => "Aching",
            Self::Electric => "Electric",
            Self::Stiff => "Stiff",
            Self::Pressure => "Pressure",
        }
    }

    /// Parse a quality label, ignoring ASCII case.
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|q| q.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

/// How much the pain interfered with daily life, each score 0 to 5.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Impact {
    pub activity: u8,
    pub mood: u8,
    pub sleep: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concentration: Option<u8>,
}

/// Secondary wellbeing fields. All optional; older records carry none of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wellbeing {
    /// Hours slept, 0 to 12 in half-hour steps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_hours: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_quality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub napped: Option<bool>,
    /// 0 to 5.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stress: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_connection: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flare: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flare_duration: Option<String>,
    /// 0 to 5.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fatigue: Option<u8>,
    /// 0 to 5.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brain_fog: Option<u8>,
}

/// Form state for recording a new pain entry.
///
/// Ranges are enforced by the input controls, not by the pain log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordPainInput {
    pub intensity: u8,
    #[serde(default)]
    pub location: Vec<String>,
    #[serde(default)]
    pub quality: Vec<PainQuality>,
    #[serde(default)]
    pub impact: Impact,
    #[serde(default)]
    pub context: Vec<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub wellbeing: Wellbeing,
}

impl Default for RecordPainInput {
    /// The form opens at moderate intensity with nothing else selected.
    fn default() -> Self {
        Self {
            intensity: 5,
            location: Vec::new(),
            quality: Vec::new(),
            impact: Impact::default(),
            context: Vec::new(),
            notes: String::new(),
            wellbeing: Wellbeing::default(),
        }
    }
}

/// Relief data attached to an entry after it has been saved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReliefInput {
    pub helped: Vec<String>,
    #[serde(default)]
    pub effectiveness: BTreeMap<String, u8>,
}
