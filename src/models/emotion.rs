use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Emotion {
    Angry,
    Sad,
    AnxiousWorried,
    Frustrated,
    Overwhelmed,
    Tired,
    Other,
}

impl Emotion {
    pub const ALL: [Emotion; 7] = [
        Emotion::Angry,
        Emotion::Sad,
        Emotion::AnxiousWorried,
        Emotion::Frustrated,
        Emotion::Overwhelmed,
        Emotion::Tired,
        Emotion::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Emotion::Angry => "Angry",
            Emotion::Sad => "Sad",
            Emotion::AnxiousWorried => "Anxious/Worried",
            Emotion::Frustrated => "Frustrated",
            Emotion::Overwhelmed => "Overwhelmed",
            Emotion::Tired => "Tired",
            Emotion::Other => "Other",
        }
    }

    pub fn to_db_str(&self) -> &'static str {
        self.label()
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        Emotion::ALL.into_iter().find(|e| e.label() == s)
    }

    /// CLI input is matched case-insensitively; "anxious" and "worried"
    /// both select `Anxious/Worried`.
    pub fn from_input(input: &str) -> Option<Self> {
        let s = input.trim();
        match s.to_lowercase().as_str() {
            "anxious" | "worried" => Some(Emotion::AnxiousWorried),
            lower => Emotion::ALL
                .into_iter()
                .find(|e| e.label().to_lowercase() == lower),
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
