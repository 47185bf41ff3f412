//! Plain-text console screens.

pub mod question;
pub mod result;
pub mod welcome;

pub use question::{ask_question, parse_choice};
