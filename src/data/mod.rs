mod bank;

pub use bank::default_questions;
