//! Mood - Closed classification of a journal entry

use serde::{Deserialize, Serialize};

/// The eight moods the classifier is allowed to return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Angry,
    Anxious,
    Excited,
    Calm,
    Confused,
    Motivated,
}

impl Mood {
    /// All moods, in the order they are presented to the classifier
    pub const ALL: [Mood; 8] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Angry,
        Mood::Anxious,
        Mood::Excited,
        Mood::Calm,
        Mood::Confused,
        Mood::Motivated,
    ];

    /// Moods counted toward a positive trend
    pub fn is_positive(&self) -> bool {
        matches!(
            self,
            Mood::Happy | Mood::Excited | Mood::Calm | Mood::Motivated
        )
    }

    /// Display emoji. Exhaustive so a new variant cannot slip through
    /// without a presentation mapping.
    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Sad => "😢",
            Mood::Angry => "😠",
            Mood::Anxious => "😰",
            Mood::Excited => "🤩",
            Mood::Calm => "😌",
            Mood::Confused => "😕",
            Mood::Motivated => "💪",
        }
    }

    /// Accent color (hex) used by presentation layers
    pub fn color(&self) -> &'static str {
        match self {
            Mood::Happy => "#facc15",
            Mood::Sad => "#60a5fa",
            Mood::Angry => "#f87171",
            Mood::Anxious => "#c084fc",
            Mood::Excited => "#fb923c",
            Mood::Calm => "#4ade80",
            Mood::Confused => "#94a3b8",
            Mood::Motivated => "#f472b6",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mood::Happy => write!(f, "happy"),
            Mood::Sad => write!(f, "sad"),
            Mood::Angry => write!(f, "angry"),
            Mood::Anxious => write!(f, "anxious"),
            Mood::Excited => write!(f, "excited"),
            Mood::Calm => write!(f, "calm"),
            Mood::Confused => write!(f, "confused"),
            Mood::Motivated => write!(f, "motivated"),
        }
    }
}

impl std::str::FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "happy" => Ok(Mood::Happy),
            "sad" => Ok(Mood::Sad),
            "angry" => Ok(Mood::Angry),
            "anxious" => Ok(Mood::Anxious),
            "excited" => Ok(Mood::Excited),
            "calm" => Ok(Mood::Calm),
            "confused" => Ok(Mood::Confused),
            "motivated" => Ok(Mood::Motivated),
            _ => Err(format!("Unknown mood: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_through_str() {
        for mood in Mood::ALL {
            let parsed: Mood = mood.to_string().parse().unwrap();
            assert_eq!(parsed, mood);
        }
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Mood::Anxious).unwrap(), "\"anxious\"");
        let mood: Mood = serde_json::from_str("\"motivated\"").unwrap();
        assert_eq!(mood, Mood::Motivated);
    }

    #[test]
    fn test_positive_set() {
        let positive: Vec<Mood> = Mood::ALL.into_iter().filter(Mood::is_positive).collect();
        assert_eq!(
            positive,
            vec![Mood::Happy, Mood::Excited, Mood::Calm, Mood::Motivated]
        );
    }
}
