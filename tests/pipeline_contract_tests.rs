//! Behavioral guarantees of the generation pipelines, exercised through the public API.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use async_trait::async_trait;
use rand::{rngs::StdRng, SeedableRng};
use serde_json::json;

use quizgenius_server::{
    errors::{AppError, GenerationError},
    models::{
        domain::{ContentSource, Difficulty, EducationLevel, ExplanationStyle},
        dto::request::{ExplanationParams, QuizParams},
    },
    services::{
        fallback::{
            self,
            quiz::{question_tiers, Tier},
        },
        generation_client::GenerationClient,
        orchestrator::{ExplanationOrchestrator, GenerationMode, PipelineStage, QuizOrchestrator},
        request_builder::Instruction,
        response_extractor, schema_validator,
    },
};

/// Replies with a fixed result and counts how often it was asked.
struct CountingClient {
    reply: Result<String, GenerationError>,
    calls: AtomicUsize,
}

impl CountingClient {
    fn new(reply: Result<String, GenerationError>) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerationClient for CountingClient {
    async fn invoke(&self, _instruction: &Instruction) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone()
    }
}

fn quiz_params(
    subject: &str,
    level: EducationLevel,
    count: u32,
    difficulty: Difficulty,
    topics: Option<&str>,
) -> QuizParams {
    QuizParams {
        subject: subject.to_string(),
        education_level: level,
        topics: topics.map(str::to_string),
        question_count: count,
        difficulty,
    }
}

fn valid_quiz_json(count: usize) -> String {
    let questions: Vec<_> = (0..count)
        .map(|n| {
            json!({
                "question": format!("Which element has atomic number {}?", n + 1),
                "answers": ["Hydrogen", "Helium", "Lithium", "Beryllium"],
                "correctAnswerIndex": n % 4,
                "explanation": "Read it off the periodic table.",
            })
        })
        .collect();
    json!({ "title": "Elements", "questions": questions }).to_string()
}

#[tokio::test]
async fn fallback_quiz_always_has_requested_shape() {
    let orchestrator = QuizOrchestrator::new(None, GenerationMode::Fallback);

    for (subject, count, difficulty) in [
        ("Mathematics", 1, Difficulty::Easy),
        ("Organic Chemistry", 17, Difficulty::Hard),
        ("Underwater Basket Weaving", 50, Difficulty::Mixed),
    ] {
        let params = quiz_params(subject, EducationLevel::College, count, difficulty, None);
        let generated = orchestrator.generate(&params).await.expect("fallback never fails");

        assert_eq!(generated.source, ContentSource::Fallback);
        assert_eq!(generated.stage, PipelineStage::FallenBack);
        assert_eq!(generated.content.questions.len(), count as usize);
        for question in &generated.content.questions {
            assert_eq!(question.answers.len(), 4);
            assert!(question.correct_answer_index <= 3);
            assert!(question.correct_answer().is_some());
        }
    }
}

#[test]
fn mixed_difficulty_is_reproducible_with_a_seed() {
    let params = quiz_params("History", EducationLevel::High, 20, Difficulty::Mixed, None);

    let first = fallback::generate_quiz(&params, &mut StdRng::seed_from_u64(99));
    let second = fallback::generate_quiz(&params, &mut StdRng::seed_from_u64(99));

    assert_eq!(first, second);
}

#[tokio::test]
async fn seeded_orchestrators_agree() {
    let params = quiz_params("Biology", EducationLevel::Neet, 15, Difficulty::Mixed, None);
    let a = QuizOrchestrator::new(None, GenerationMode::Fallback).with_fallback_seed(Some(5));
    let b = QuizOrchestrator::new(None, GenerationMode::Fallback).with_fallback_seed(Some(5));

    let first = a.generate(&params).await.expect("fallback");
    let second = b.generate(&params).await.expect("fallback");

    assert_eq!(first.content, second.content);
}

#[test]
fn topic_filter_applies_only_to_tiers_with_matches() {
    let unfiltered = question_tiers(&quiz_params(
        "Mathematics",
        EducationLevel::High,
        5,
        Difficulty::Easy,
        None,
    ));
    let filtered = question_tiers(&quiz_params(
        "Mathematics",
        EducationLevel::High,
        5,
        Difficulty::Easy,
        Some("quadratic"),
    ));

    assert!(!filtered.medium.is_empty());
    assert!(filtered.medium.iter().all(|q| q.mentions("quadratic")));
    assert!(filtered.medium.len() < unfiltered.medium.len());
    assert_eq!(filtered.easy, unfiltered.easy);
    assert_eq!(filtered.hard, unfiltered.hard);
}

#[test]
fn small_tiers_wrap_around() {
    let params = quiz_params("Geography", EducationLevel::Middle, 20, Difficulty::Easy, None);
    let tier = question_tiers(&params).tier(Tier::Easy).to_vec();
    let quiz = fallback::generate_quiz(&params, &mut StdRng::seed_from_u64(0));

    for (i, question) in quiz.questions.iter().enumerate() {
        assert_eq!(question, &tier[i % tier.len()]);
    }
}

#[test]
fn jee_physics_includes_exam_bonus() {
    let params = quiz_params("Physics", EducationLevel::Jee, 4, Difficulty::Hard, None);
    let college = quiz_params("Physics", EducationLevel::College, 4, Difficulty::Hard, None);

    let jee_hard = question_tiers(&params).hard;
    let college_hard = question_tiers(&college).hard;
    assert_eq!(jee_hard.len(), college_hard.len() + 1);

    let bonus = jee_hard.last().cloned().expect("bonus question");
    let quiz = fallback::generate_quiz(&params, &mut StdRng::seed_from_u64(1));
    assert!(quiz.questions.contains(&bonus));
}

#[test]
fn extracted_payload_validates() {
    let raw = format!(
        "Sure! Here's the quiz you asked for.\n```json\n{}\n```\nLet me know if you need more.",
        valid_quiz_json(2)
    );
    let params = quiz_params("Chemistry", EducationLevel::High, 2, Difficulty::Easy, None);

    let payload = response_extractor::extract(&raw).expect("payload span");
    assert!(payload.starts_with('{') && payload.ends_with('}'));
    assert_eq!(payload, valid_quiz_json(2));

    let quiz = schema_validator::validate_quiz(payload, &params).expect("valid quiz");
    assert_eq!(quiz.title, "Elements");
    assert_eq!(quiz.subject, "Chemistry");
}

#[test]
fn validator_classifies_rejections() {
    let params = quiz_params("Chemistry", EducationLevel::High, 1, Difficulty::Easy, None);

    let three_answers = json!({ "questions": [{
        "question": "Q?", "answers": ["a", "b", "c"], "correctAnswerIndex": 0, "explanation": "E",
    }]});
    let index_four = json!({ "questions": [{
        "question": "Q?", "answers": ["a", "b", "c", "d"], "correctAnswerIndex": 4, "explanation": "E",
    }]});

    assert!(matches!(
        schema_validator::validate_quiz(&three_answers.to_string(), &params),
        Err(GenerationError::Schema(_))
    ));
    assert!(matches!(
        schema_validator::validate_quiz(&index_four.to_string(), &params),
        Err(GenerationError::Schema(_))
    ));
    assert!(matches!(
        schema_validator::validate_quiz("not json at all", &params),
        Err(GenerationError::Parse(_))
    ));
}

#[tokio::test]
async fn strict_auth_failure_surfaces_generic_message_only() {
    let client = CountingClient::new(Err(GenerationError::Auth("bad key sk-123".to_string())));
    let orchestrator = QuizOrchestrator::new(Some(client.clone()), GenerationMode::Strict);
    let params = quiz_params("Physics", EducationLevel::High, 5, Difficulty::Medium, None);

    let err = orchestrator.generate(&params).await.expect_err("strict mode fails");

    match err {
        AppError::GenerationFailed(message) => {
            assert_eq!(message, "Failed to generate quiz. Please try again.")
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(client.calls(), 1);
}

#[tokio::test]
async fn every_failure_kind_falls_back_without_retry() {
    let failures = [
        Err(GenerationError::Unavailable("timeout".to_string())),
        Err(GenerationError::Auth("401".to_string())),
        Err(GenerationError::Quota("429".to_string())),
        Err(GenerationError::EmptyResponse),
        Ok("no structured content here".to_string()),
        Ok("{\"questions\": [".to_string()),
        Ok("{\"questions\": []}".to_string()),
    ];

    for reply in failures {
        let client = CountingClient::new(reply);
        let orchestrator = QuizOrchestrator::new(Some(client.clone()), GenerationMode::Fallback);
        let params = quiz_params("Mathematics", EducationLevel::High, 3, Difficulty::Easy, None);

        let generated = orchestrator.generate(&params).await.expect("fallback");

        assert_eq!(generated.source, ContentSource::Fallback);
        assert!(generated.fallback_reason.is_some());
        assert_eq!(generated.content.questions.len(), 3);
        assert_eq!(client.calls(), 1);
    }
}

#[tokio::test]
async fn generated_explanation_keeps_caller_topic() {
    let reply = json!({
        "title": "Black Holes",
        "description": "Where gravity wins",
        "content": [{ "title": "Formation", "paragraphs": ["Massive stars collapse."] }],
        "keyPoints": ["Nothing escapes past the event horizon"],
    })
    .to_string();
    let client = CountingClient::new(Ok(reply));
    let orchestrator = ExplanationOrchestrator::new(Some(client), GenerationMode::Strict);
    let params = ExplanationParams {
        topic: "  Black holes ".to_string(),
        education_level: None,
        specific_questions: Some("Can light escape?".to_string()),
        explanation_style: ExplanationStyle::Detailed,
    };

    let generated = orchestrator.generate(&params).await.expect("generated");

    assert_eq!(generated.source, ContentSource::Generated);
    assert_eq!(generated.stage, PipelineStage::Succeeded);
    assert_eq!(generated.content.topic, "Black holes");
    assert!(generated.content.education_level.is_none());
}
