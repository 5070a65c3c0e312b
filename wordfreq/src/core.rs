// src/core.rs
pub mod counter;
pub mod normalize;


pub use counter::{LOG_TARGET, WordCounter, ensure_regular_file};
pub use normalize::{is_letter_or_digit, normalize_token};
