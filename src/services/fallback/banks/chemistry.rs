use super::{BankEntry, SubjectBank};

pub static BANK: SubjectBank = SubjectBank {
    easy: &[
        BankEntry {
            question: "What is the chemical symbol for gold?",
            answers: ["Ag", "Au", "Fe", "Cu"],
            correct: 1,
            explanation: "Gold's symbol Au comes from its Latin name, aurum.",
        },
        BankEntry {
            question: "What is the pH of a neutral solution at 25°C?",
            answers: ["0", "14", "1", "7"],
            correct: 3,
            explanation: "At 25°C a neutral solution has pH 7. Lower values are acidic and higher values are basic.",
        },
        BankEntry {
            question: "What is the most abundant gas in Earth's atmosphere?",
            answers: ["Nitrogen", "Oxygen", "Carbon dioxide", "Hydrogen"],
            correct: 0,
            explanation: "Nitrogen (N₂) makes up about 78% of Earth's atmosphere.",
        },
    ],
    medium: &[
        BankEntry {
            question: "What is the hybridization of carbon in methane (CH₄)?",
            answers: ["sp²", "sp", "sp³", "No hybridization"],
            correct: 2,
            explanation: "Carbon mixes one s and three p orbitals into four equivalent sp³ orbitals, giving methane its tetrahedral shape.",
        },
        BankEntry {
            question: "What is the empirical formula of benzene?",
            answers: ["C₂H₂", "CH", "C₆H₆", "C₂H"],
            correct: 1,
            explanation: "Benzene is C₆H₆. The simplest whole-number ratio of carbon to hydrogen is 1:1, so the empirical formula is CH.",
        },
        BankEntry {
            question: "Which of the following is an amphoteric oxide?",
            answers: ["Na₂O", "CaO", "CO₂", "Al₂O₃"],
            correct: 3,
            explanation: "Aluminium oxide reacts with both acids and bases, which makes it amphoteric.",
        },
    ],
    hard: &[
        BankEntry {
            question: "What is the sign of the standard entropy change (ΔS°) for a reaction in which 2 moles of gas form 1 mole of gas?",
            answers: ["Positive", "Negative", "Zero", "Cannot be determined without more information"],
            correct: 1,
            explanation: "Fewer gas particles means less disorder, so the entropy of the system decreases and ΔS° < 0.",
        },
        BankEntry {
            question: "What is the major product when propene reacts with HBr in the presence of peroxides?",
            answers: [
                "2-bromopropane",
                "No reaction occurs",
                "1-bromopropane",
                "An equal mixture of 1-bromopropane and 2-bromopropane",
            ],
            correct: 2,
            explanation: "Peroxides switch the addition to a radical mechanism with anti-Markovnikov orientation, giving 1-bromopropane.",
        },
        BankEntry {
            question: "Calculate the pH of a buffer made by mixing 0.1 M acetic acid (Ka = 1.8 × 10⁻⁵) with 0.1 M sodium acetate.",
            answers: ["4.74", "5.74", "3.74", "7.00"],
            correct: 0,
            explanation: "Henderson-Hasselbalch: pH = pKa + log([A⁻]/[HA]). With equal concentrations the log term is 0, so pH = pKa = 4.74.",
        },
    ],
};

pub static EXAM_BONUS: BankEntry = BankEntry {
    question: "Which statement about nucleophilic addition to aldehydes and ketones is NOT correct?",
    answers: [
        "The carbonyl carbon is electrophilic.",
        "Ketones undergo nucleophilic addition faster than aldehydes.",
        "The rate depends on steric and electronic factors.",
        "The nucleophile attacks the carbonyl carbon.",
    ],
    correct: 1,
    explanation: "Aldehydes react faster: they carry one alkyl group instead of two, so the carbonyl carbon is less hindered and more electrophilic.",
};
