use super::{BankEntry, SubjectBank};

const ANSWERS: [&str; 4] = ["Correct answer", "Wrong answer 1", "Wrong answer 2", "Wrong answer 3"];

pub static BANK: SubjectBank = SubjectBank {
    easy: &[
        BankEntry {
            question: "Basic question about {subject} concepts",
            answers: ANSWERS,
            correct: 0,
            explanation: "This explains a basic {subject} concept. Live generation replaces this placeholder with real material.",
        },
        BankEntry {
            question: "Another fundamental question about {subject}",
            answers: ANSWERS,
            correct: 0,
            explanation: "This would cover a fundamental aspect of {subject}.",
        },
        BankEntry {
            question: "Third question on {subject} basics",
            answers: ANSWERS,
            correct: 0,
            explanation: "This would explain the correct answer to a basic {subject} question.",
        },
    ],
    medium: &[
        BankEntry {
            question: "Intermediate question about {subject}",
            answers: ANSWERS,
            correct: 0,
            explanation: "This would go into more detail on a {subject} concept at an intermediate level.",
        },
        BankEntry {
            question: "Another moderate difficulty question on {subject}",
            answers: ANSWERS,
            correct: 0,
            explanation: "This would explain the intermediate ideas behind this {subject} question.",
        },
        BankEntry {
            question: "Third intermediate question about {subject}",
            answers: ANSWERS,
            correct: 0,
            explanation: "This would cover the material behind this {subject} topic.",
        },
    ],
    hard: &[
        BankEntry {
            question: "Advanced question about {subject}",
            answers: ANSWERS,
            correct: 0,
            explanation: "This would explain an advanced {subject} concept in depth.",
        },
        BankEntry {
            question: "Another difficult question on {subject}",
            answers: ANSWERS,
            correct: 0,
            explanation: "This would explain the challenging parts of this {subject} topic.",
        },
        BankEntry {
            question: "Third complex question about {subject}",
            answers: ANSWERS,
            correct: 0,
            explanation: "This would cover the finer details of this {subject} concept.",
        },
    ],
};
