use serde::{Deserialize, Serialize};

/// Translation direction selected on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    #[serde(rename = "en-vi")]
    EnToVi,
    #[serde(rename = "vi-en")]
    ViToEn,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::EnToVi, Direction::ViToEn];

    /// (source, target) language codes
    pub fn languages(self) -> (&'static str, &'static str) {
        match self {
            Direction::EnToVi => ("en", "vi"),
            Direction::ViToEn => ("vi", "en"),
        }
    }

    pub fn source_language(self) -> &'static str {
        self.languages().0
    }

    pub fn target_language(self) -> &'static str {
        self.languages().1
    }

    /// Value used in form submissions and query strings
    pub fn code(self) -> &'static str {
        match self {
            Direction::EnToVi => "en-vi",
            Direction::ViToEn => "vi-en",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Direction::EnToVi => "English → Vietnamese",
            Direction::ViToEn => "Vietnamese → English",
        }
    }

    /// Label shown above the input box, also used as its placeholder
    pub fn input_label(self) -> &'static str {
        match self.source_language() {
            "en" => "Enter English text:",
            _ => "Enter Vietnamese text:",
        }
    }

    pub fn swapped(self) -> Self {
        match self {
            Direction::EnToVi => Direction::ViToEn,
            Direction::ViToEn => Direction::EnToVi,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.code() == code.trim())
    }
}
