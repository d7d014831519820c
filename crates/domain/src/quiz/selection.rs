//! Quiz selection options

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a quiz is entered from the selection screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizMode {
    /// Regular quiz.
    #[default]
    Standard,
    /// Free trial quiz.
    Trial,
}

/// Subjects offered in the difficulty dropdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    /// General science.
    GeneralScience,
    /// Chemistry.
    Chemistry,
    /// Physics.
    Physics,
    /// Biology.
    Biology,
}

impl Subject {
    /// All subjects in display order.
    pub const ALL: [Self; 4] = [
        Self::GeneralScience,
        Self::Chemistry,
        Self::Physics,
        Self::Biology,
    ];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::GeneralScience => "General Science",
            Self::Chemistry => "Chemistry",
            Self::Physics => "Physics",
            Self::Biology => "Biology",
        }
    }

    /// Looks a subject up by its case-insensitive display name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Subject picked for each difficulty tier. Admin only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DifficultyFilters {
    /// Subject for easy questions.
    pub easy: Option<Subject>,
    /// Subject for medium questions.
    pub medium: Option<Subject>,
    /// Subject for hard questions.
    pub hard: Option<Subject>,
}

impl DifficultyFilters {
    /// True when no tier has a subject picked.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.easy.is_none() && self.medium.is_none() && self.hard.is_none()
    }
}
