//! InputMethod - How an entry was captured

use serde::{Deserialize, Serialize};

/// Capture method for a journal entry.
///
/// Voice and photo are accepted on the wire but no capture pipeline
/// exists for them; text is the only implemented path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMethod {
    #[default]
    Text,
    Voice,
    Photo,
}

impl std::fmt::Display for InputMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputMethod::Text => write!(f, "text"),
            InputMethod::Voice => write!(f, "voice"),
            InputMethod::Photo => write!(f, "photo"),
        }
    }
}

impl std::str::FromStr for InputMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(InputMethod::Text),
            "voice" => Ok(InputMethod::Voice),
            "photo" => Ok(InputMethod::Photo),
            _ => Err(format!("Unknown input method: {}", s)),
        }
    }
}
