//! 입력 텍스트를 문단/토큰으로 분해하고 한글 토큰에 로마자 표기를 붙이는 모듈

mod marker;
mod token;

pub use marker::mark;
pub use token::{MarkedText, Paragraph, SyllableBlock, SyllableMark, Token, TokenKind};
