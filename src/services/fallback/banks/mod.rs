//! Static question banks used when generation is unavailable.

mod biology;
mod chemistry;
mod generic;
mod geography;
mod history;
mod mathematics;
mod physics;

use crate::models::domain::{EducationLevel, QuizQuestion};

/// Replaced with the capitalized subject in generic templates.
pub const SUBJECT_PLACEHOLDER: &str = "{subject}";

#[derive(Debug)]
pub struct BankEntry {
    pub question: &'static str,
    pub answers: [&'static str; 4],
    pub correct: u8,
    pub explanation: &'static str,
}

impl BankEntry {
    pub fn render(&self, subject: &str) -> QuizQuestion {
        let fill = |text: &str| text.replace(SUBJECT_PLACEHOLDER, subject);
        QuizQuestion {
            question: fill(self.question),
            answers: self.answers.iter().map(|answer| fill(answer)).collect(),
            correct_answer_index: self.correct,
            explanation: fill(self.explanation),
        }
    }
}

/// Three difficulty tiers of one subject.
#[derive(Debug)]
pub struct SubjectBank {
    pub easy: &'static [BankEntry],
    pub medium: &'static [BankEntry],
    pub hard: &'static [BankEntry],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KnownSubject {
    Mathematics,
    Physics,
    Chemistry,
    Biology,
    History,
    Geography,
}

impl KnownSubject {
    pub const ALL: [KnownSubject; 6] = [
        KnownSubject::Mathematics,
        KnownSubject::Physics,
        KnownSubject::Chemistry,
        KnownSubject::Biology,
        KnownSubject::History,
        KnownSubject::Geography,
    ];

    fn keyword(&self) -> &'static str {
        match self {
            KnownSubject::Mathematics => "math",
            KnownSubject::Physics => "physics",
            KnownSubject::Chemistry => "chemistry",
            KnownSubject::Biology => "biology",
            KnownSubject::History => "history",
            KnownSubject::Geography => "geography",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            KnownSubject::Mathematics => "Mathematics",
            KnownSubject::Physics => "Physics",
            KnownSubject::Chemistry => "Chemistry",
            KnownSubject::Biology => "Biology",
            KnownSubject::History => "History",
            KnownSubject::Geography => "Geography",
        }
    }

    /// First subject whose keyword occurs in `subject`, ignoring case.
    pub fn detect(subject: &str) -> Option<Self> {
        let subject = subject.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|known| subject.contains(known.keyword()))
    }

    pub fn bank(&self) -> &'static SubjectBank {
        match self {
            KnownSubject::Mathematics => &mathematics::BANK,
            KnownSubject::Physics => &physics::BANK,
            KnownSubject::Chemistry => &chemistry::BANK,
            KnownSubject::Biology => &biology::BANK,
            KnownSubject::History => &history::BANK,
            KnownSubject::Geography => &geography::BANK,
        }
    }

    /// Extra hard-tier question for competitive-exam levels.
    pub fn level_bonus(&self, level: EducationLevel) -> Option<&'static BankEntry> {
        match (self, level) {
            (KnownSubject::Physics, EducationLevel::Jee | EducationLevel::Neet) => {
                Some(&physics::EXAM_BONUS)
            }
            (KnownSubject::Chemistry, EducationLevel::Neet) => Some(&chemistry::EXAM_BONUS),
            (KnownSubject::Biology, EducationLevel::Neet) => Some(&biology::EXAM_BONUS),
            _ => None,
        }
    }
}

pub fn generic_bank() -> &'static SubjectBank {
    &generic::BANK
}
