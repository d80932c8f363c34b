use super::{BankEntry, SubjectBank};

pub static BANK: SubjectBank = SubjectBank {
    easy: &[
        BankEntry {
            question: "Which is the largest ocean on Earth?",
            answers: ["Atlantic Ocean", "Indian Ocean", "Pacific Ocean", "Arctic Ocean"],
            correct: 2,
            explanation: "The Pacific is the largest and deepest ocean, covering about 165 million square kilometres.",
        },
        BankEntry {
            question: "On which continent is the Sahara Desert located?",
            answers: ["Africa", "Asia", "South America", "Australia"],
            correct: 0,
            explanation: "The Sahara covers most of North Africa, from the Red Sea to the Atlantic. It is the largest hot desert in the world.",
        },
        BankEntry {
            question: "What is the capital of Japan?",
            answers: ["Kyoto", "Tokyo", "Osaka", "Hiroshima"],
            correct: 1,
            explanation: "Tokyo is Japan's capital and largest city.",
        },
    ],
    medium: &[
        BankEntry {
            question: "Which river forms part of the border between the United States and Mexico?",
            answers: ["Mississippi River", "Colorado River", "Columbia River", "Rio Grande"],
            correct: 3,
            explanation: "The Rio Grande, Río Bravo del Norte in Mexico, marks about 2,000 km of the border from El Paso to the Gulf of Mexico.",
        },
        BankEntry {
            question: "Which of the following is NOT a type of plate boundary?",
            answers: ["Convergent boundary", "Rotational boundary", "Divergent boundary", "Transform boundary"],
            correct: 1,
            explanation: "Plates converge, diverge or slide past each other along transform boundaries. There is no rotational boundary type.",
        },
        BankEntry {
            question: "What is the primary cause of the Earth's seasons?",
            answers: [
                "The tilt of Earth's axis relative to its orbital plane",
                "The varying distance between Earth and the Sun",
                "The rotation of Earth on its axis",
                "The magnetic field of Earth",
            ],
            correct: 0,
            explanation: "Earth's axis is tilted about 23.5 degrees, so each hemisphere receives more direct sunlight for part of the year.",
        },
    ],
    hard: &[
        BankEntry {
            question: "The 'Ring of Fire' is a belt of high volcanic and seismic activity. Roughly what share of the world's active volcanoes lie in it?",
            answers: ["About 50%", "About 25%", "About 90%", "About 75%"],
            correct: 3,
            explanation: "The horseshoe-shaped belt around the Pacific basin holds about 75% of active volcanoes and sees about 90% of earthquakes.",
        },
        BankEntry {
            question: "Which statement about the Coriolis effect is correct?",
            answers: [
                "It is strongest at the equator and weakest at the poles",
                "It deflects moving objects to the right in the Northern Hemisphere and to the left in the Southern Hemisphere",
                "It is the primary cause of the Earth's magnetic field",
                "It causes ocean tides",
            ],
            correct: 1,
            explanation: "Earth's rotation deflects moving air and water to the right in the north and to the left in the south. The effect is zero at the equator and greatest at the poles.",
        },
        BankEntry {
            question: "Which of the following is NOT a natural vegetation biome?",
            answers: ["Tropical rainforest", "Tundra", "Agricultural land", "Savanna"],
            correct: 2,
            explanation: "Biomes form in response to climate. Farmland is a human-modified landscape, not a natural biome.",
        },
    ],
};
