use super::{BankEntry, SubjectBank};

pub static BANK: SubjectBank = SubjectBank {
    easy: &[
        BankEntry {
            question: "In which year did Christopher Columbus first reach the Americas?",
            answers: ["1500", "1492", "1456", "1510"],
            correct: 1,
            explanation: "Columbus reached the Americas in 1492 on a voyage sponsored by Isabella and Ferdinand of Spain.",
        },
        BankEntry {
            question: "Which ancient civilization built the Great Pyramids of Giza?",
            answers: ["Ancient Greeks", "Mayans", "Romans", "Ancient Egyptians"],
            correct: 3,
            explanation: "The Ancient Egyptians built the pyramids around 2580 to 2560 BC as tombs for their pharaohs.",
        },
        BankEntry {
            question: "Who was the first President of the United States?",
            answers: ["George Washington", "Thomas Jefferson", "Abraham Lincoln", "John Adams"],
            correct: 0,
            explanation: "George Washington served as the first President from 1789 to 1797.",
        },
    ],
    medium: &[
        BankEntry {
            question: "What was the immediate cause of World War I?",
            answers: [
                "The sinking of the Lusitania",
                "The assassination of Archduke Franz Ferdinand",
                "The invasion of Poland",
                "The Treaty of Versailles",
            ],
            correct: 1,
            explanation: "The assassination of the Austro-Hungarian heir in Sarajevo on 28 June 1914 set off the chain of declarations that started the war.",
        },
        BankEntry {
            question: "During which period did the Renaissance primarily occur in Europe?",
            answers: [
                "5th to 10th centuries",
                "18th to 19th centuries",
                "14th to 17th centuries",
                "2nd to 4th centuries",
            ],
            correct: 2,
            explanation: "The Renaissance began in Italy in the 14th century and spread across Europe until the 17th.",
        },
        BankEntry {
            question: "What was the significance of the Magna Carta?",
            answers: [
                "It established the first parliament in Europe",
                "It ended the Hundred Years' War",
                "It authorized the colonization of the Americas",
                "It limited the power of the English monarchy",
            ],
            correct: 3,
            explanation: "Sealed by King John in 1215, it bound the crown to the law and became a landmark of constitutional government.",
        },
    ],
    hard: &[
        BankEntry {
            question: "Which of the following was NOT a cause of the fall of the Western Roman Empire?",
            answers: [
                "Economic troubles",
                "The rise of Islam",
                "Overreliance on slave labor",
                "Military losses and invasions by 'barbarian' tribes",
            ],
            correct: 1,
            explanation: "The Western Empire fell in 476 CE. Islam arose in the early 7th century, well after the fall.",
        },
        BankEntry {
            question: "Which historical event is associated with the phrase 'Let them eat cake'?",
            answers: [
                "The French Revolution",
                "The Russian Revolution",
                "The Industrial Revolution",
                "The American Revolution",
            ],
            correct: 0,
            explanation: "The phrase is attributed, probably falsely, to Marie Antoinette and came to symbolize royal indifference before the French Revolution.",
        },
        BankEntry {
            question: "What was the result of the Sino-Japanese War of 1894-1895?",
            answers: [
                "China gained control of Korea",
                "Russia annexed Manchuria",
                "Japan emerged as a major imperial power in East Asia",
                "The United States established naval bases in China",
            ],
            correct: 2,
            explanation: "The Treaty of Shimonoseki ceded Taiwan to Japan and recognized Korean independence, marking Japan's rise and the Qing dynasty's decline.",
        },
    ],
};
