use super::{BankEntry, SubjectBank};

pub static BANK: SubjectBank = SubjectBank {
    easy: &[
        BankEntry {
            question: "Which organelle is known as the powerhouse of the cell?",
            answers: ["Nucleus", "Ribosome", "Mitochondria", "Endoplasmic reticulum"],
            correct: 2,
            explanation: "Mitochondria produce most of the cell's ATP, its main source of chemical energy.",
        },
        BankEntry {
            question: "Which of the following is NOT part of the central dogma of molecular biology?",
            answers: ["DNA to RNA", "Protein to DNA", "RNA to protein", "DNA replication"],
            correct: 1,
            explanation: "Information flows from DNA to RNA (transcription) and RNA to protein (translation), and DNA replicates. It does not flow from protein back to DNA.",
        },
        BankEntry {
            question: "What is the basic structural and functional unit of the kidney?",
            answers: ["Nephron", "Neuron", "Alveolus", "Villus"],
            correct: 0,
            explanation: "Each kidney holds about a million nephrons, which filter blood and form urine.",
        },
    ],
    medium: &[
        BankEntry {
            question: "In which phase of mitosis do chromosomes line up along the metaphase plate?",
            answers: ["Prophase", "Anaphase", "Telophase", "Metaphase"],
            correct: 3,
            explanation: "During metaphase the chromosomes align at the cell's equator so each daughter cell receives one copy.",
        },
        BankEntry {
            question: "Which pair is an example of convergent evolution?",
            answers: [
                "The forelimbs of humans and whales",
                "The wings of birds and insects",
                "The leaves and spines of a cactus",
                "The teeth of wolves and dogs",
            ],
            correct: 1,
            explanation: "Bird and insect wings evolved independently for the same function. The other pairs share a common ancestral structure.",
        },
        BankEntry {
            question: "Where in the chloroplast do the light-dependent reactions of photosynthesis take place?",
            answers: ["Stroma", "Thylakoid membrane", "Outer membrane", "Intermembrane space"],
            correct: 1,
            explanation: "Photosystems in the thylakoid membrane capture light energy and use it to make ATP and NADPH.",
        },
    ],
    hard: &[
        BankEntry {
            question: "What is the role of telomerase in cellular aging?",
            answers: [
                "It accelerates telomere shortening",
                "It has no effect on telomeres",
                "It degrades damaged DNA",
                "It counteracts the shortening of telomeres",
            ],
            correct: 3,
            explanation: "Telomerase extends chromosome ends, offsetting the shortening that happens at each division. It is active in germ, stem and cancer cells.",
        },
        BankEntry {
            question: "Which of the following best describes epistasis?",
            answers: [
                "A gene at one locus alters the phenotypic expression of a gene at another locus",
                "One allele completely masks another allele of the same gene",
                "Genes close together on a chromosome tend to be inherited together",
                "A single trait is affected by many genes with additive effects",
            ],
            correct: 0,
            explanation: "Epistasis is an interaction between loci, which is why dihybrid ratios shift from 9:3:3:1 to ratios such as 9:3:4 or 12:3:1.",
        },
        BankEntry {
            question: "What is the significance of Hardy-Weinberg equilibrium in population genetics?",
            answers: [
                "It proves that evolution does not occur in natural populations",
                "It provides a null model against which to test for evolutionary change",
                "It shows that genetic drift is the primary mechanism of evolution",
                "It demonstrates that mutation is always advantageous",
            ],
            correct: 1,
            explanation: "Allele frequencies stay constant only without mutation, selection, gene flow or drift and with random mating, so deviations point to evolutionary forces.",
        },
    ],
};

pub static EXAM_BONUS: BankEntry = BankEntry {
    question: "Which statement about the human heart is NOT correct?",
    answers: [
        "Chordae tendineae connect papillary muscles to the tricuspid valve",
        "The right atrium receives blood from the pulmonary veins",
        "The left ventricle has thicker muscular walls than the right ventricle",
        "The sinoatrial node is the pacemaker of the heart",
    ],
    correct: 1,
    explanation: "The right atrium receives blood from the venae cavae and the coronary sinus. The pulmonary veins return oxygenated blood to the left atrium.",
};
