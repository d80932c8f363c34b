pub mod banks;
pub mod explanation;
pub mod quiz;

pub use explanation::generate_explanation;
pub use quiz::generate_quiz;
