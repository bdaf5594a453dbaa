use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum GradeLevel {
    K,
    G1,
    G2,
    G3,
    G4,
    G5,
    G6,
    G7,
    G8,
}

impl GradeLevel {
    /// Every grade, in display order.
    pub const ALL: [GradeLevel; 9] = [
        GradeLevel::K,
        GradeLevel::G1,
        GradeLevel::G2,
        GradeLevel::G3,
        GradeLevel::G4,
        GradeLevel::G5,
        GradeLevel::G6,
        GradeLevel::G7,
        GradeLevel::G8,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            GradeLevel::K => "K",
            GradeLevel::G1 => "1",
            GradeLevel::G2 => "2",
            GradeLevel::G3 => "3",
            GradeLevel::G4 => "4",
            GradeLevel::G5 => "5",
            GradeLevel::G6 => "6",
            GradeLevel::G7 => "7",
            GradeLevel::G8 => "8",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.label()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        GradeLevel::ALL.into_iter().find(|g| g.label() == s)
    }

    /// Helper: accept CLI input such as "k", "3" or "grade 3"
    pub fn from_input(input: &str) -> Option<Self> {
        let s = input.trim().to_uppercase();
        let s = s.strip_prefix("GRADE").map(str::trim).unwrap_or(&s);
        match s {
            "KINDERGARTEN" => Some(GradeLevel::K),
            other => GradeLevel::from_db_str(other),
        }
    }

    /// Long label used in dashboard breakdowns.
    pub fn display_name(&self) -> String {
        match self {
            GradeLevel::K => "Kindergarten".to_string(),
            g => format!("Grade {}", g.label()),
        }
    }
}

impl fmt::Display for GradeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
