use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

use crate::models::domain::education::{Difficulty, EducationLevel};
use crate::models::domain::quiz_question::QuizQuestion;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub title: String,
    pub description: String,
    pub subject: String,
    pub difficulty: Difficulty,
    pub education_level: EducationLevel,
    pub questions: Vec<QuizQuestion>,
}

impl Quiz {
    /// Title used when the generator leaves it out and for fallback quizzes.
    pub fn default_title(subject: &str, level: EducationLevel) -> String {
        format!("{} Quiz ({})", subject, level.label())
    }

    pub fn default_description(
        subject: &str,
        topics: Option<&str>,
        difficulty: Difficulty,
    ) -> String {
        match topics {
            Some(topics) => format!(
                "A {} level quiz on {} in {}.",
                difficulty.as_str(),
                topics,
                subject
            ),
            None => format!(
                "A {} level quiz on {} concepts.",
                difficulty.as_str(),
                subject
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_title_uses_level_label() {
        assert_eq!(
            Quiz::default_title("Physics", EducationLevel::Jee),
            "Physics Quiz (IIT-JEE)"
        );
    }

    #[test]
    fn default_description_mentions_topics_when_present() {
        assert_eq!(
            Quiz::default_description("Mathematics", Some("algebra"), Difficulty::Hard),
            "A hard level quiz on algebra in Mathematics."
        );
        assert_eq!(
            Quiz::default_description("Mathematics", None, Difficulty::Easy),
            "A easy level quiz on Mathematics concepts."
        );
    }
}
