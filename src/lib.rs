pub mod config;
pub mod core;
pub mod export;
pub mod mark;
pub mod render;
pub mod ui;

pub use core::{decompose_to_jamo, jamo_fragment, romanize_syllable};
pub use mark::{mark, MarkedText, TokenKind};
