//! 한글 음절 분해/로마자 변환 핵심 모듈

pub mod romanizer;
pub mod unicode;

pub use romanizer::{decompose_to_jamo, jamo_fragment, romanize_syllable};
pub use unicode::{compose_syllable, decompose_syllable, is_hangul_syllable};
