use crate::models::domain::{Explanation, ExplanationItem, ExplanationSection};
use crate::models::dto::request::ExplanationParams;

fn section(title: &str, paragraphs: Vec<String>) -> ExplanationSection {
    ExplanationSection {
        title: title.to_string(),
        paragraphs,
    }
}

fn item(title: String, description: String) -> ExplanationItem {
    ExplanationItem { title, description }
}

pub fn generate_explanation(params: &ExplanationParams) -> Explanation {
    let topic = params.topic();
    let style = params.explanation_style.as_str();

    let description = match params.education_level {
        Some(level) => format!("A {} explanation at the {} level", style, level.label()),
        None => format!("A {} explanation", style),
    };

    let content = vec![
        section(
            "Introduction",
            vec![
                format!("{topic} is an important concept with implications across many fields. This explanation breaks down its fundamentals and key aspects."),
                format!("In simple terms, {topic} involves several interconnected elements and principles, each explored below."),
            ],
        ),
        section(
            "Core Concepts",
            vec![
                format!("The first key idea behind {topic} is its fundamental principles and how they operate in different contexts."),
                format!("It also helps to know how our understanding of {topic} developed over time."),
                format!("The theoretical framework around {topic} gives a structured way to analyze and predict related phenomena."),
            ],
        ),
        section(
            "Applications and Significance",
            vec![
                format!("{topic} has real-world applications in science, technology and everyday life."),
                format!("Understanding {topic} lets us explain and predict related processes and outcomes."),
                format!("Recent advances keep extending {topic} into new areas and problems."),
            ],
        ),
    ];

    let key_points = vec![
        format!("{topic} consists of multiple interconnected elements that work together"),
        format!("The historical development of {topic} has shaped our current understanding"),
        "There are numerous practical applications across different fields".to_string(),
        format!("Understanding {topic} enables prediction and control of related processes"),
        format!("Modern research continues to expand our knowledge of {topic}"),
    ];

    let examples = vec![
        item(
            "Practical Example 1".to_string(),
            format!("How {topic} shows up in a common, everyday situation."),
        ),
        item(
            "Practical Example 2".to_string(),
            format!("A more advanced application showing how {topic} helps solve complex problems."),
        ),
    ];

    let related_topics = vec![
        item(
            format!("History of {topic}"),
            format!("How {topic} evolved over time and who shaped it."),
        ),
        item(
            format!("Advanced {topic} Concepts"),
            "More complex aspects and theoretical frameworks.".to_string(),
        ),
        item(
            format!("{topic} in Modern Applications"),
            format!("How {topic} is used in current technology and research."),
        ),
    ];

    Explanation {
        title: format!("Understanding {}", topic),
        description: Some(description),
        topic: topic.to_string(),
        education_level: params.education_level,
        content,
        key_points: Some(key_points),
        examples: Some(examples),
        related_topics: Some(related_topics),
    }
}
