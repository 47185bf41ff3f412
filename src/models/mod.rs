mod question;
mod tier;

pub use question::{Question, QuestionError};
pub use tier::ScoreTier;
