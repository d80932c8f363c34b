use super::{BankEntry, SubjectBank};

pub static BANK: SubjectBank = SubjectBank {
    easy: &[
        BankEntry {
            question: "What is the value of π (pi) rounded to two decimal places?",
            answers: ["3.41", "3.14", "3.12", "3.16"],
            correct: 1,
            explanation: "π is approximately 3.14159, which rounds to 3.14 at two decimal places.",
        },
        BankEntry {
            question: "Solve for x: 2x + 5 = 13",
            answers: ["x = 5", "x = 6", "x = 3", "x = 4"],
            correct: 3,
            explanation: "Subtract 5 from both sides to get 2x = 8, then divide by 2 to get x = 4.",
        },
        BankEntry {
            question: "What is the area of a rectangle with length 8 units and width 5 units?",
            answers: ["40 square units", "26 square units", "13 square units", "20 square units"],
            correct: 0,
            explanation: "The area of a rectangle is length times width: 8 × 5 = 40 square units.",
        },
    ],
    medium: &[
        BankEntry {
            question: "If f(x) = 3x² - 2x + 4, what is f(2)?",
            answers: ["10", "12", "16", "8"],
            correct: 1,
            explanation: "Substitute x = 2: f(2) = 3(4) - 2(2) + 4 = 12 - 4 + 4 = 12.",
        },
        BankEntry {
            question: "What is the solution to the system of equations 2x + y = 7 and x - y = 2?",
            answers: ["x = 2, y = 3", "x = 4, y = -1", "x = 3, y = 1", "x = 1, y = 5"],
            correct: 2,
            explanation: "Adding the two equations gives 3x = 9, so x = 3. Then y = 7 - 2(3) = 1. Check: 3 - 1 = 2.",
        },
        BankEntry {
            question: "What is the quadratic formula?",
            answers: [
                "x = (-b ± √(b² - 4ac)) / 2a",
                "x = (-b ∓ √(b² + 4ac)) / 2a",
                "x = (b ± √(b² - 4ac)) / 2a",
                "x = (-b ± √(b² - 4ac)) / a",
            ],
            correct: 0,
            explanation: "For ax² + bx + c = 0 the roots are x = (-b ± √(b² - 4ac)) / 2a.",
        },
    ],
    hard: &[
        BankEntry {
            question: "If the sum of an infinite geometric series is 4 and the first term is 2, what is the common ratio?",
            answers: ["2", "0.25", "1.5", "0.5"],
            correct: 3,
            explanation: "The sum is S = a / (1 - r) for |r| < 1. With S = 4 and a = 2: 4(1 - r) = 2, so r = 0.5.",
        },
        BankEntry {
            question: "What is the derivative of f(x) = x³ - 4x² + 2x - 7?",
            answers: [
                "f'(x) = 3x² - 4x + 2",
                "f'(x) = 3x² - 8x + 2",
                "f'(x) = x² - 8x + 2",
                "f'(x) = 3x² - 8x - 7",
            ],
            correct: 1,
            explanation: "Apply the power rule term by term: 3x² - 8x + 2, and the constant term vanishes.",
        },
        BankEntry {
            question: "What is the value of lim(x→0) (sin x) / x?",
            answers: ["0", "1", "∞", "undefined"],
            correct: 1,
            explanation: "A standard limit: as x approaches 0, (sin x) / x approaches 1, provable with the squeeze theorem.",
        },
    ],
};
