use super::{BankEntry, SubjectBank};

pub static BANK: SubjectBank = SubjectBank {
    easy: &[
        BankEntry {
            question: "What is Newton's First Law of Motion?",
            answers: [
                "Force equals mass times acceleration.",
                "An object stays at rest or in uniform motion unless acted upon by an external force.",
                "For every action, there is an equal and opposite reaction.",
                "Energy cannot be created or destroyed, only transformed.",
            ],
            correct: 1,
            explanation: "The first law, the law of inertia, says an object keeps its state of rest or uniform motion unless an external force acts on it.",
        },
        BankEntry {
            question: "What is the SI unit of force?",
            answers: ["Joule (J)", "Watt (W)", "Newton (N)", "Pascal (Pa)"],
            correct: 2,
            explanation: "One newton is the force that accelerates a 1 kg mass at 1 m/s².",
        },
        BankEntry {
            question: "What is the formula for calculating work?",
            answers: ["W = F × d", "W = m × g", "W = F / d", "W = m × a"],
            correct: 0,
            explanation: "Work is force times the displacement in the direction of the force: W = F × d.",
        },
    ],
    medium: &[
        BankEntry {
            question: "A 2 kg object moving at 3 m/s collides elastically with a stationary 6 kg object. What is the velocity of the 2 kg object after the collision?",
            answers: ["0 m/s", "1 m/s", "2 m/s", "-1.5 m/s"],
            correct: 3,
            explanation: "For an elastic collision with a stationary target, v₁' = (m₁ - m₂) / (m₁ + m₂) × v₁ = (2 - 6) / 8 × 3 = -1.5 m/s, so the lighter object bounces back.",
        },
        BankEntry {
            question: "What is the equivalent resistance of three resistors (2Ω, 4Ω, and 6Ω) connected in parallel?",
            answers: ["12Ω", "1.09Ω", "4Ω", "0.92Ω"],
            correct: 1,
            explanation: "For parallel resistors 1/R = 1/2 + 1/4 + 1/6 = 11/12, so R = 12/11 ≈ 1.09Ω.",
        },
        BankEntry {
            question: "A mass on a spring oscillates with a period of 2 seconds. If the mass is quadrupled, what is the new period?",
            answers: ["8 seconds", "1 second", "4 seconds", "16 seconds"],
            correct: 2,
            explanation: "The period is T = 2π√(m/k), so T is proportional to √m. Quadrupling m doubles T, from 2 s to 4 s.",
        },
    ],
    hard: &[
        BankEntry {
            question: "In special relativity, by what factor does a moving clock's tick rate change when it travels at 0.8c relative to an observer?",
            answers: ["0.8", "0.6", "1.25", "1.67"],
            correct: 1,
            explanation: "The Lorentz factor is γ = 1/√(1 - 0.64) = 1/0.6 ≈ 1.67, so the moving clock runs at 1/γ = 0.6 of the observer's rate.",
        },
        BankEntry {
            question: "What is the de Broglie wavelength of an electron with a kinetic energy of 1 eV?",
            answers: ["2.43 nm", "0.5 nm", "3.65 nm", "1.23 nm"],
            correct: 3,
            explanation: "λ = h / √(2mK). For an electron this is about 1.23 nm / √(K in eV), giving 1.23 nm at 1 eV.",
        },
        BankEntry {
            question: "A quantum particle is confined to a one-dimensional box of length L. What is the energy of the particle in the n = 3 state?",
            answers: ["9h²/(8mL²)", "3h²/(8mL²)", "9h²/(2mL²)", "h²/(8mL²)"],
            correct: 0,
            explanation: "The levels are Eₙ = n²h²/(8mL²) with h Planck's constant. For n = 3 the energy is 9h²/(8mL²).",
        },
    ],
};

pub static EXAM_BONUS: BankEntry = BankEntry {
    question: "A particle starts from rest and moves in a circle of radius 20 cm with constant tangential acceleration. Its speed is 80 cm/s at the end of the second revolution. What is the tangential acceleration?",
    answers: ["10 cm/s²", "20 cm/s²", "40/π cm/s²", "5 cm/s²"],
    correct: 2,
    explanation: "Two revolutions cover s = 2 × 2π × 20 = 80π cm. From v² = 2aₜs: 6400 = 2aₜ × 80π, so aₜ = 40/π ≈ 12.7 cm/s².",
};
