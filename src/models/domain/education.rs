use std::fmt;

use async_graphql::Enum;
use serde::{Deserialize, Serialize};

/// Audience a piece of content is pitched at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize, Enum)]
#[serde(rename_all = "lowercase")]
pub enum EducationLevel {
    Elementary,
    Middle,
    High,
    College,
    Jee,
    Neet,
    Professional,
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 7] = [
        EducationLevel::Elementary,
        EducationLevel::Middle,
        EducationLevel::High,
        EducationLevel::College,
        EducationLevel::Jee,
        EducationLevel::Neet,
        EducationLevel::Professional,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EducationLevel::Elementary => "elementary",
            EducationLevel::Middle => "middle",
            EducationLevel::High => "high",
            EducationLevel::College => "college",
            EducationLevel::Jee => "jee",
            EducationLevel::Neet => "neet",
            EducationLevel::Professional => "professional",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EducationLevel::Elementary => "Elementary School",
            EducationLevel::Middle => "Middle School",
            EducationLevel::High => "High School",
            EducationLevel::College => "College/University",
            EducationLevel::Jee => "IIT-JEE",
            EducationLevel::Neet => "NEET",
            EducationLevel::Professional => "Professional",
        }
    }

    /// Prompt guidance for pitching content at this level.
    pub fn guidance(&self) -> &'static str {
        match self {
            EducationLevel::Elementary => {
                "Use short sentences, everyday words and concrete examples a young child knows."
            }
            EducationLevel::Middle => {
                "Introduce subject vocabulary gently and connect ideas to familiar situations."
            }
            EducationLevel::High => {
                "Use standard subject terminology and expect basic algebra and reasoning."
            }
            EducationLevel::College => {
                "Assume undergraduate background and include formal definitions where useful."
            }
            EducationLevel::Jee => {
                "Target Indian engineering entrance exam standard: multi-step numerical \
                 problems in physics, chemistry and mathematics."
            }
            EducationLevel::Neet => {
                "Target Indian medical entrance exam standard: precise recall and \
                 application in physics, chemistry and biology."
            }
            EducationLevel::Professional => {
                "Assume a practitioner audience and focus on applied, real-world scenarios."
            }
        }
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize, Enum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Mixed,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Mixed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Mixed => "mixed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Mixed => "Mixed Difficulty",
        }
    }

    pub fn guidance(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Questions should test recall of basic facts and definitions.",
            Difficulty::Medium => "Questions should require understanding and one or two reasoning steps.",
            Difficulty::Hard => "Questions should require multi-step reasoning or deeper analysis.",
            Difficulty::Mixed => "Blend easy, medium and hard questions in roughly equal measure.",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize, Enum)]
#[serde(rename_all = "lowercase")]
pub enum ExplanationStyle {
    Simple,
    #[default]
    Comprehensive,
    Detailed,
    Eli5,
}

impl ExplanationStyle {
    pub const ALL: [ExplanationStyle; 4] = [
        ExplanationStyle::Simple,
        ExplanationStyle::Comprehensive,
        ExplanationStyle::Detailed,
        ExplanationStyle::Eli5,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExplanationStyle::Simple => "simple",
            ExplanationStyle::Comprehensive => "comprehensive",
            ExplanationStyle::Detailed => "detailed",
            ExplanationStyle::Eli5 => "eli5",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExplanationStyle::Simple => "Simple & Basic",
            ExplanationStyle::Comprehensive => "Comprehensive",
            ExplanationStyle::Detailed => "Detailed & Technical",
            ExplanationStyle::Eli5 => "Explain Like I'm 5",
        }
    }

    pub fn guidance(&self) -> &'static str {
        match self {
            ExplanationStyle::Simple => "Keep it brief and plain; cover only the essentials.",
            ExplanationStyle::Comprehensive => {
                "Cover the topic broadly with clear structure and balanced depth."
            }
            ExplanationStyle::Detailed => {
                "Go deep: precise terminology, formal definitions and technical detail."
            }
            ExplanationStyle::Eli5 => {
                "Explain as if to a five-year-old, using simple analogies and no jargon."
            }
        }
    }
}

impl fmt::Display for ExplanationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
