use rand::Rng;

use crate::models::domain::{Difficulty, Quiz, QuizQuestion};
use crate::models::dto::request::QuizParams;
use crate::services::fallback::banks::{self, KnownSubject, SubjectBank};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    Easy,
    Medium,
    Hard,
}

impl Tier {
    fn for_difficulty<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Tier {
        match difficulty {
            Difficulty::Easy => Tier::Easy,
            Difficulty::Medium => Tier::Medium,
            Difficulty::Hard => Tier::Hard,
            Difficulty::Mixed => match rng.gen_range(0..3) {
                0 => Tier::Easy,
                1 => Tier::Medium,
                _ => Tier::Hard,
            },
        }
    }
}

/// Candidate questions per tier after augmentation and filtering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TieredQuestions {
    pub easy: Vec<QuizQuestion>,
    pub medium: Vec<QuizQuestion>,
    pub hard: Vec<QuizQuestion>,
}

impl TieredQuestions {
    fn from_bank(bank: &SubjectBank, subject: &str) -> Self {
        let render = |entries: &[banks::BankEntry]| {
            entries
                .iter()
                .map(|entry| entry.render(subject))
                .collect::<Vec<_>>()
        };
        Self {
            easy: render(bank.easy),
            medium: render(bank.medium),
            hard: render(bank.hard),
        }
    }

    pub fn tier(&self, tier: Tier) -> &[QuizQuestion] {
        match tier {
            Tier::Easy => &self.easy,
            Tier::Medium => &self.medium,
            Tier::Hard => &self.hard,
        }
    }

    fn filtered(self, keyword: &str) -> Self {
        let keep = |questions: Vec<QuizQuestion>| {
            let matching: Vec<_> = questions
                .iter()
                .filter(|q| q.mentions(keyword))
                .cloned()
                .collect();
            if matching.is_empty() {
                questions
            } else {
                matching
            }
        };
        Self {
            easy: keep(self.easy),
            medium: keep(self.medium),
            hard: keep(self.hard),
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn question_tiers(params: &QuizParams) -> TieredQuestions {
    let known = KnownSubject::detect(params.subject());
    let mut tiers = match known {
        Some(subject) => TieredQuestions::from_bank(subject.bank(), params.subject()),
        None => TieredQuestions::from_bank(banks::generic_bank(), &capitalize(params.subject())),
    };

    if let Some(bonus) = known.and_then(|subject| subject.level_bonus(params.education_level)) {
        tiers.hard.push(bonus.render(params.subject()));
    }

    // Generic templates carry no topical content to match against.
    match (known, params.topics()) {
        (Some(_), Some(keyword)) => tiers.filtered(keyword),
        _ => tiers,
    }
}

/// Builds a quiz from the static banks.
///
/// Position `i` takes `tier[i % tier.len()]`; mixed difficulty draws the
/// tier per position from `rng`.
pub fn generate_quiz<R: Rng>(params: &QuizParams, rng: &mut R) -> Quiz {
    let tiers = question_tiers(params);
    let questions = (0..params.question_count as usize)
        .map(|i| {
            let pool = tiers.tier(Tier::for_difficulty(params.difficulty, rng));
            pool[i % pool.len()].clone()
        })
        .collect();

    let subject = params.subject();
    Quiz {
        title: Quiz::default_title(subject, params.education_level),
        description: Quiz::default_description(subject, params.topics(), params.difficulty),
        subject: subject.to_string(),
        difficulty: params.difficulty,
        education_level: params.education_level,
        questions,
    }
}
