use std::{collections::BTreeMap, fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::UnknownMood;

/// Glyph for labels that are not in the catalogue.
pub(crate) static UNKNOWN_EMOJI: &str = "❔";

/// Score for labels that are not in the catalogue.
pub(crate) const NEUTRAL_SCORE: u8 = 3;

pub(crate) const ALL_CAPACITY: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum Mood {
    Happy,
    Sad,
    Excited,
    Tired,
    Angry,
    Confused,
    Neutral,
    /// A label read back from storage that the catalogue does not know.
    Unrecognized(String),
}

impl Mood {
    /// Catalogue in menu order.
    pub(crate) const CATALOGUE: [Mood; 7] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Excited,
        Mood::Tired,
        Mood::Angry,
        Mood::Confused,
        Mood::Neutral,
    ];

    pub(crate) fn names() -> Vec<&'static str> {
        Self::CATALOGUE.iter().map(Mood::known_name).collect()
    }

    fn known_name(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Excited => "Excited",
            Mood::Tired => "Tired",
            Mood::Angry => "Angry",
            Mood::Confused => "Confused",
            Mood::Neutral => "Neutral",
            Mood::Unrecognized(_) => "",
        }
    }

    pub(crate) fn name(&self) -> &str {
        match self {
            Mood::Unrecognized(label) => label,
            known => known.known_name(),
        }
    }

    pub(crate) fn emoji(&self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Sad => "😢",
            Mood::Excited => "🤩",
            Mood::Tired => "😴",
            Mood::Angry => "😠",
            Mood::Confused => "😕",
            Mood::Neutral => "😐",
            Mood::Unrecognized(_) => UNKNOWN_EMOJI,
        }
    }

    pub(crate) fn score(&self) -> u8 {
        match self {
            Mood::Happy | Mood::Excited => 5,
            Mood::Neutral => 3,
            Mood::Confused => 2,
            Mood::Tired | Mood::Sad => 1,
            Mood::Angry => 0,
            Mood::Unrecognized(_) => NEUTRAL_SCORE,
        }
    }

    /// Exact-label lookup used for persisted data; never fails.
    pub(crate) fn from_label(label: &str) -> Self {
        Self::CATALOGUE
            .iter()
            .find(|m| m.known_name() == label)
            .cloned()
            .unwrap_or_else(|| Mood::Unrecognized(label.to_string()))
    }
}

impl Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Case-insensitive parse of user input, restricted to the catalogue.
impl FromStr for Mood {
    type Err = UnknownMood;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        Self::CATALOGUE
            .iter()
            .find(|m| m.known_name().eq_ignore_ascii_case(input))
            .cloned()
            .ok_or_else(|| UnknownMood {
                input: input.to_string(),
            })
    }
}

/// One recorded mood. The emoji is derived from `mood` when needed and only
/// written out for compatibility with the stored layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredEntry", into = "StoredEntry")]
pub(crate) struct MoodEntry {
    pub mood: Mood,
    /// Milliseconds since the Unix epoch.
    pub time: i64,
}

impl MoodEntry {
    pub(crate) fn new(mood: Mood, time: i64) -> Self {
        Self { mood, time }
    }

    pub(crate) fn emoji(&self) -> &'static str {
        self.mood.emoji()
    }
}

#[derive(Serialize, Deserialize)]
struct StoredEntry {
    mood: String,
    #[serde(default)]
    emoji: String,
    time: i64,
}

impl From<StoredEntry> for MoodEntry {
    fn from(stored: StoredEntry) -> Self {
        MoodEntry::new(Mood::from_label(&stored.mood), stored.time)
    }
}

impl From<MoodEntry> for StoredEntry {
    fn from(entry: MoodEntry) -> Self {
        StoredEntry {
            emoji: entry.emoji().to_string(),
            mood: entry.mood.name().to_string(),
            time: entry.time,
        }
    }
}

pub(crate) type Buckets = BTreeMap<String, Vec<MoodEntry>>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct MoodHistory {
    /// Newest first, at most `ALL_CAPACITY` entries.
    pub all: Vec<MoodEntry>,
    pub day: Buckets,
    pub week: Buckets,
    pub month: Buckets,
    pub year: Buckets,
}

impl MoodHistory {
    pub(crate) fn is_empty(&self) -> bool {
        self.all.is_empty()
            && self.day.is_empty()
            && self.week.is_empty()
            && self.month.is_empty()
            && self.year.is_empty()
    }
}
